mod helpers;

use crate::app::state::App;
use crossterm::event::{KeyCode, MouseEvent, MouseEventKind};
use heatmap_core::Month;

use helpers::{wrap_decrement, wrap_increment};

const MONTHS: usize = Month::ALL.len();

pub fn handle_key(app: &mut App, key: KeyCode) {
    let cursor = app.cursor;
    let month = |index| Month::from_index(index).unwrap_or(cursor.month);

    match key {
        KeyCode::Char('q') => app.running = false,
        KeyCode::Esc => app.hide_tooltip(),
        KeyCode::Left => app.move_cursor(cursor.column.saturating_sub(1), cursor.month),
        KeyCode::Right => app.move_cursor(cursor.column + 1, cursor.month),
        KeyCode::Up => app.move_cursor(
            cursor.column,
            month(wrap_decrement(cursor.month.index(), MONTHS)),
        ),
        KeyCode::Down => app.move_cursor(
            cursor.column,
            month(wrap_increment(cursor.month.index(), MONTHS)),
        ),
        KeyCode::Home => app.move_cursor(0, cursor.month),
        KeyCode::End => app.move_cursor(app.column_count().saturating_sub(1), cursor.month),
        _ => {}
    }
}

pub fn handle_mouse(app: &mut App, event: MouseEvent) {
    match event.kind {
        MouseEventKind::Moved | MouseEventKind::Drag(_) | MouseEventKind::Down(_) => {
            app.hover(event.column, event.row);
        }
        _ => {}
    }
}
