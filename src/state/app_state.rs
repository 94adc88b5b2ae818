//! Application state definitions

use crate::state::EnrollmentForm;
use crate::submit::SubmissionReceipt;

/// Current view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// The enrollment form
    #[default]
    Form,
    /// Confirmation view shown after a successful submission
    Success,
}

/// Main application state
#[derive(Default)]
pub struct AppState {
    pub current_view: View,
    /// The single form instance this controller manages
    pub form: EnrollmentForm,
    /// Loading flag for the pending submission call; the submit control
    /// is disabled and a spinner shown while set
    pub submitting: bool,
    /// Viewport scroll position over the form
    pub scroll_offset: usize,
    /// Highlighted option inside the focused radio/checkbox group
    pub group_cursor: usize,
    /// Confirmation from the last successful submission
    pub receipt: Option<SubmissionReceipt>,

    // Modal error queue (submission failures, upload issues needing
    // blocking attention)
    errors: Vec<String>,
}

impl AppState {
    /// Queue a blocking error message for the modal dialog
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
    }

    /// Whether a modal error is waiting to be shown
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// The error currently displayed, if any
    pub fn current_error(&self) -> Option<&str> {
        self.errors.first().map(String::as_str)
    }

    /// Dismiss the displayed error
    pub fn dismiss_error(&mut self) {
        if !self.errors.is_empty() {
            self.errors.remove(0);
        }
    }

    /// Scroll down one line
    pub fn scroll_down(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_add(1);
    }

    /// Scroll up one line
    pub fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
    }

    /// Jump the viewport back to the top
    pub fn scroll_to_top(&mut self) {
        self.scroll_offset = 0;
    }

    /// Reset the group option cursor, called whenever focus moves
    pub fn reset_group_cursor(&mut self) {
        self.group_cursor = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_view_is_form() {
        let state = AppState::default();
        assert_eq!(state.current_view, View::Form);
        assert!(!state.submitting);
        assert!(state.receipt.is_none());
    }

    #[test]
    fn test_error_queue_is_fifo() {
        let mut state = AppState::default();
        assert!(!state.has_errors());

        state.push_error("first");
        state.push_error("second");
        assert_eq!(state.current_error(), Some("first"));

        state.dismiss_error();
        assert_eq!(state.current_error(), Some("second"));

        state.dismiss_error();
        assert!(!state.has_errors());
        state.dismiss_error(); // safe when empty
    }

    #[test]
    fn test_scroll_saturates_at_top() {
        let mut state = AppState::default();
        state.scroll_up();
        assert_eq!(state.scroll_offset, 0);
        state.scroll_down();
        state.scroll_down();
        state.scroll_to_top();
        assert_eq!(state.scroll_offset, 0);
    }
}
