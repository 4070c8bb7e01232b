//! UI state utils.

use ghsearch_models::{SearchResult, UiState};
use tui::widgets::ListState;

/// Result area content, with the selected user when results are shown.
pub struct ResultsState {
    pub list_state: ListState,
    pub ui_state: UiState,
}

impl ResultsState {
    pub fn new() -> Self {
        Self {
            list_state: ListState::default(),
            ui_state: UiState::Idle,
        }
    }

    /// Replace the displayed state, selecting the first user if any.
    pub fn set_ui_state(&mut self, ui_state: UiState) {
        let selection = match &ui_state {
            UiState::Results(users) if !users.is_empty() => Some(0),
            _ => None,
        };

        self.ui_state = ui_state;
        self.list_state.select(selection);
    }

    pub fn users(&self) -> &[SearchResult] {
        match &self.ui_state {
            UiState::Results(users) => users,
            _ => &[],
        }
    }

    pub fn next_user(&mut self) {
        let count = self.users().len();
        if count == 0 {
            return;
        }

        let i = match self.list_state.selected() {
            Some(i) if i + 1 < count => i + 1,
            _ => 0,
        };
        self.list_state.select(Some(i));
    }

    pub fn previous_user(&mut self) {
        let count = self.users().len();
        if count == 0 {
            return;
        }

        let i = match self.list_state.selected() {
            Some(0) | None => count - 1,
            Some(i) => i - 1,
        };
        self.list_state.select(Some(i));
    }
}
