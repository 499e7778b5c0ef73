use crossterm::event::KeyEvent;
use crossterm::event::MouseEvent;

use super::*;

fn service() -> (mpsc::UnboundedSender<Event>, EventsService) {
    let (tx, rx) = mpsc::unbounded_channel::<Event>();
    return (tx, EventsService::new(rx));
}

fn key(code: KeyCode) -> CrosstermEvent {
    return CrosstermEvent::Key(KeyEvent::new(code, KeyModifiers::NONE));
}

#[test]
fn test_maps_arrows_and_vim_keys_to_cursor_events() {
    let (_tx, service) = service();

    assert!(matches!(
        service.handle_crossterm(key(KeyCode::Up)),
        Some(Event::UICursorUp)
    ));
    assert!(matches!(
        service.handle_crossterm(key(KeyCode::Char('k'))),
        Some(Event::UICursorUp)
    ));
    assert!(matches!(
        service.handle_crossterm(key(KeyCode::Down)),
        Some(Event::UICursorDown)
    ));
    assert!(matches!(
        service.handle_crossterm(key(KeyCode::Char('j'))),
        Some(Event::UICursorDown)
    ));
}

#[test]
fn test_maps_enter_to_activation() {
    let (_tx, service) = service();

    assert!(matches!(
        service.handle_crossterm(key(KeyCode::Enter)),
        Some(Event::KeyboardEnter)
    ));
}

#[test]
fn test_maps_esc_and_q_to_quit() {
    let (_tx, service) = service();

    assert!(matches!(
        service.handle_crossterm(key(KeyCode::Esc)),
        Some(Event::KeyboardQuit)
    ));
    assert!(matches!(
        service.handle_crossterm(key(KeyCode::Char('q'))),
        Some(Event::KeyboardQuit)
    ));
}

#[test]
fn test_maps_ctrl_c() {
    let (_tx, service) = service();
    let event = CrosstermEvent::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));

    assert!(matches!(
        service.handle_crossterm(event),
        Some(Event::KeyboardCTRLC)
    ));
}

#[test]
fn test_maps_left_click_with_position() {
    let (_tx, service) = service();
    let event = CrosstermEvent::Mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column: 4,
        row: 2,
        modifiers: KeyModifiers::NONE,
    });

    assert!(matches!(
        service.handle_crossterm(event),
        Some(Event::MouseLeftClick(4, 2))
    ));
}

#[test]
fn test_ignores_unrelated_events() {
    let (_tx, service) = service();

    assert!(service.handle_crossterm(key(KeyCode::F(5))).is_none());
    assert!(service
        .handle_crossterm(CrosstermEvent::Resize(80, 24))
        .is_none());

    let release = CrosstermEvent::Key(KeyEvent::new_with_kind(
        KeyCode::Enter,
        KeyModifiers::NONE,
        KeyEventKind::Release,
    ));
    assert!(service.handle_crossterm(release).is_none());
}

#[tokio::test]
async fn test_forwards_host_sent_events() {
    let (tx, mut service) = service();
    tx.send(Event::KeyboardQuit).unwrap();

    assert!(matches!(service.next().await.unwrap(), Event::KeyboardQuit));
}
