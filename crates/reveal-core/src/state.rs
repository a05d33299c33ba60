//! Small application-wide store read by the overlay and cursor.

use crate::cursor::CursorVariant;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AppState {
    pub is_loading: bool,
    pub is_menu_open: bool,
    pub cursor_variant: CursorVariant,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            is_loading: true,
            is_menu_open: false,
            cursor_variant: CursorVariant::Default,
        }
    }
}

/// Owns an [`AppState`]. Setters report whether anything changed so
/// callers can skip redundant DOM writes.
#[derive(Clone, Debug, Default)]
pub struct AppStore {
    state: AppState,
}

impl AppStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> AppState {
        self.state
    }

    fn apply(&mut self, next: AppState) -> bool {
        if next == self.state {
            return false;
        }
        self.state = next;
        true
    }

    pub fn set_loading(&mut self, value: bool) -> bool {
        self.apply(AppState {
            is_loading: value,
            ..self.state
        })
    }

    pub fn set_menu_open(&mut self, value: bool) -> bool {
        self.apply(AppState {
            is_menu_open: value,
            ..self.state
        })
    }

    pub fn toggle_menu(&mut self) -> bool {
        self.set_menu_open(!self.state.is_menu_open)
    }

    pub fn set_cursor_variant(&mut self, variant: CursorVariant) -> bool {
        self.apply(AppState {
            cursor_variant: variant,
            ..self.state
        })
    }
}
