#[cfg(test)]
#[path = "ui_test.rs"]
mod tests;

use std::io;

use anyhow::Result;
use crossterm::cursor;
use crossterm::event::DisableMouseCapture;
use crossterm::terminal::disable_raw_mode;
use crossterm::terminal::LeaveAlternateScreen;
use ratatui::backend::Backend;
use ratatui::layout::Position;
use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::widgets::Borders;
use ratatui::widgets::List;
use ratatui::widgets::ListItem;
use ratatui::widgets::ListState;
use ratatui::Terminal;
use tokio::sync::mpsc;

use crate::domain::models::Entry;
use crate::domain::models::Event;
use crate::domain::models::OnPicked;
use crate::domain::services::EventsService;
use crate::domain::services::Picker;

/// Restores the terminal when a panic fires mid-render.
pub fn destruct_terminal_for_panic() {
    let _ = disable_raw_mode();
    let _ = crossterm::execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
    let _ = crossterm::execute!(io::stdout(), cursor::Show);
}

/// Builds the list widget for a picker. Stateless: the same picker always
/// yields the same widget, one item per catalog entry, in catalog order.
pub fn render_list(picker: &Picker) -> List<'static> {
    let items = picker
        .catalog()
        .iter()
        .map(|entry| ListItem::new(entry.text.clone()))
        .collect::<Vec<ListItem>>();

    return List::new(items)
        .block(Block::default().borders(Borders::ALL).title(" Example prompts "))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");
}

/// Maps a terminal click position to a catalog index, accounting for the
/// list block's border and scroll offset.
fn resolve_click(area: Rect, offset: usize, column: u16, row: u16, len: usize) -> Option<usize> {
    let inner = Rect {
        x: area.x + 1,
        y: area.y + 1,
        width: area.width.saturating_sub(2),
        height: area.height.saturating_sub(2),
    };

    if !inner.contains(Position::new(column, row)) {
        return None;
    }

    let index = offset + usize::from(row - inner.y);
    if index >= len {
        return None;
    }

    return Some(index);
}

/// Draw-and-dispatch loop. Activating an entry calls `on_picked` once with
/// that entry's value and resolves to the entry; quitting resolves to `None`.
pub async fn start_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    mut picker: Picker,
    mut on_picked: OnPicked,
    rx: mpsc::UnboundedReceiver<Event>,
) -> Result<Option<Entry>> {
    let mut events = EventsService::new(rx);
    let mut list_state = ListState::default();
    let mut list_area = Rect::default();

    loop {
        list_state.select(picker.position());
        terminal.draw(|frame| {
            list_area = frame.area();
            frame.render_stateful_widget(render_list(&picker), list_area, &mut list_state);
        })?;

        match events.next().await? {
            Event::UICursorUp => picker.previous(),
            Event::UICursorDown => picker.next(),
            Event::KeyboardEnter => {
                if picker.activate(&mut on_picked) {
                    return Ok(picker.selected().cloned());
                }
            }
            Event::MouseLeftClick(column, row) => {
                let target = resolve_click(
                    list_area,
                    list_state.offset(),
                    column,
                    row,
                    picker.catalog().len(),
                );
                if let Some(index) = target {
                    if picker.select(index) && picker.activate(&mut on_picked) {
                        return Ok(picker.selected().cloned());
                    }
                }
            }
            Event::KeyboardQuit | Event::KeyboardCTRLC => {
                tracing::debug!("picker cancelled");
                return Ok(None);
            }
            Event::UITick => {}
        }
    }
}
