#[cfg(test)]
#[path = "events_test.rs"]
mod tests;

use anyhow::Result;
use crossterm::event::Event as CrosstermEvent;
use crossterm::event::EventStream;
use crossterm::event::KeyCode;
use crossterm::event::KeyEventKind;
use crossterm::event::KeyModifiers;
use crossterm::event::MouseButton;
use crossterm::event::MouseEventKind;
use futures::StreamExt;
use tokio::sync::mpsc;
use tokio::time;

use crate::domain::models::Event;

pub struct EventsService {
    crossterm_events: EventStream,
    events: mpsc::UnboundedReceiver<Event>,
}

impl EventsService {
    pub fn new(events: mpsc::UnboundedReceiver<Event>) -> EventsService {
        return EventsService {
            crossterm_events: EventStream::new(),
            events,
        };
    }

    fn handle_crossterm(&self, event: CrosstermEvent) -> Option<Event> {
        match event {
            CrosstermEvent::Mouse(mouseevent) => match mouseevent.kind {
                MouseEventKind::ScrollUp => {
                    return Some(Event::UICursorUp);
                }
                MouseEventKind::ScrollDown => {
                    return Some(Event::UICursorDown);
                }
                MouseEventKind::Down(MouseButton::Left) => {
                    return Some(Event::MouseLeftClick(mouseevent.column, mouseevent.row));
                }
                _ => {
                    return None;
                }
            },
            CrosstermEvent::Key(keyevent) => {
                // Windows delivers both press and release events.
                if keyevent.kind == KeyEventKind::Release {
                    return None;
                }

                match keyevent.code {
                    KeyCode::Char('c') if keyevent.modifiers.contains(KeyModifiers::CONTROL) => {
                        return Some(Event::KeyboardCTRLC);
                    }
                    KeyCode::Up | KeyCode::Char('k') => {
                        return Some(Event::UICursorUp);
                    }
                    KeyCode::Down | KeyCode::Char('j') => {
                        return Some(Event::UICursorDown);
                    }
                    KeyCode::Enter => {
                        return Some(Event::KeyboardEnter);
                    }
                    KeyCode::Esc | KeyCode::Char('q') => {
                        return Some(Event::KeyboardQuit);
                    }
                    _ => {
                        return None;
                    }
                }
            }
            _ => return None,
        }
    }

    pub async fn next(&mut self) -> Result<Event> {
        loop {
            let evt = tokio::select! {
                event = self.events.recv() => event,
                event = self.crossterm_events.next() => match event {
                    Some(Ok(input)) => self.handle_crossterm(input),
                    Some(Err(_)) => None,
                    None => None
                },
                _ = time::sleep(time::Duration::from_millis(500)) => Some(Event::UITick)
            };

            if let Some(event) = evt {
                return Ok(event);
            }
        }
    }
}
