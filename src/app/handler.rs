//! Input handling: maps key/mouse events to engine input and native scrolling.
//!
//! Mouse wheel notches feed the engine's wheel channel; a held left button
//! feeds its touch channel.  Whatever the engine passes through is applied as
//! plain row scrolling.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};

use crate::config::Action;

use super::settings::{self, SETTINGS_ITEMS};
use super::state::{ActiveView, AppState};

/// Process a key event, dispatching based on the active view.
pub fn handle_key(state: &mut AppState, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }
    if key.modifiers.contains(crossterm::event::KeyModifiers::CONTROL)
        && key.code == KeyCode::Char('c')
    {
        state.should_quit = true;
        return;
    }

    match state.active_view {
        ActiveView::Page => handle_page_key(state, key),
        ActiveView::SettingsMenu => handle_settings_key(state, key),
    }
}

fn handle_page_key(state: &mut AppState, key: KeyEvent) {
    let Some(action) = state.config.match_key(key) else {
        return;
    };
    state.status_message = None;

    match action {
        Action::Quit => state.should_quit = true,
        Action::OpenSettings => {
            state.active_view = ActiveView::SettingsMenu;
            state.settings_selected = 0;
        }
        // Arrow keys behave like single wheel notches, so they can pull too.
        Action::ScrollUp => wheel(state, -1.0),
        Action::ScrollDown => wheel(state, 1.0),
        Action::PageUp => state.scroll.page(false),
        Action::PageDown => state.scroll.page(true),
        Action::Top => state.scroll.to_top(),
        Action::Bottom => state.scroll.to_bottom(),
        Action::ToggleHud => {
            let visible = !state.config.show_hud;
            settings::set_hud(state, visible);
        }
    }
}

fn handle_settings_key(state: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') => {
            state.active_view = ActiveView::Page;
        }
        KeyCode::Up | KeyCode::Char('k') => {
            state.settings_selected = state.settings_selected.saturating_sub(1);
        }
        KeyCode::Down | KeyCode::Char('j') => {
            if state.settings_selected + 1 < SETTINGS_ITEMS.len() {
                state.settings_selected += 1;
            }
        }
        KeyCode::Enter | KeyCode::Char(' ') => {
            if let Some(item) = SETTINGS_ITEMS.get(state.settings_selected) {
                item.activate(state);
            }
        }
        _ => {}
    }
}

pub fn handle_mouse(state: &mut AppState, mouse: MouseEvent) {
    if state.active_view != ActiveView::Page {
        return;
    }

    match mouse.kind {
        MouseEventKind::ScrollUp => wheel(state, -1.0),
        MouseEventKind::ScrollDown => wheel(state, 1.0),
        MouseEventKind::Down(MouseButton::Left) => {
            let now = state.now();
            let y = row_to_units(state, mouse.row);
            state.engine.on_touch_start(now, y);
            state.drag_row = Some(mouse.row);
        }
        MouseEventKind::Drag(MouseButton::Left) => {
            let Some(last_row) = state.drag_row else {
                return;
            };
            let now = state.now();
            let y = row_to_units(state, mouse.row);
            let disposition = state.engine.on_touch_move(now, y, &state.scroll);
            if !disposition.is_consumed() {
                // Dragging down reveals content above.
                let rows = last_row as isize - mouse.row as isize;
                state.scroll.scroll_by(rows);
            }
            state.drag_row = Some(mouse.row);
        }
        MouseEventKind::Up(MouseButton::Left) => {
            if state.drag_row.take().is_some() {
                let now = state.now();
                state.engine.on_touch_end(now);
            }
        }
        _ => {}
    }
}

/// One wheel notch; `direction` is -1 for up, +1 for down.
fn wheel(state: &mut AppState, direction: f64) {
    let now = state.now();
    let delta = direction * state.config.wheel_delta;
    let disposition = state.engine.on_wheel(now, delta, &state.scroll);
    if !disposition.is_consumed() {
        let rows = state.config.wheel_rows as isize;
        state.scroll.scroll_by(if direction < 0.0 { -rows } else { rows });
    }
    tracing::trace!(delta, ?disposition, offset = state.scroll.offset, "wheel");
}

fn row_to_units(state: &AppState, row: u16) -> f64 {
    f64::from(row) * state.config.px_per_row
}
