use crate::input::KeyEvent;
use crate::ui::viewport::ViewportState;

/// Pure function that moves the cursor for one key event.
///
/// Arrow keys move one cell, page keys move `height + 1` rows, and every
/// other event (including [`KeyEvent::Quit`], which the loop handles
/// before calling this) leaves the state unchanged.
pub fn apply_key(mut state: ViewportState, key: KeyEvent) -> ViewportState {
    match key {
        KeyEvent::ArrowLeft => state.move_left(),
        KeyEvent::ArrowRight => state.move_right(),
        KeyEvent::ArrowUp => state.move_up(),
        KeyEvent::ArrowDown => state.move_down(),
        KeyEvent::PageUp => state.page_up(),
        KeyEvent::PageDown => state.page_down(),
        KeyEvent::Quit | KeyEvent::PrintableOrOther(_) | KeyEvent::Ignored => {}
    }
    state
}

