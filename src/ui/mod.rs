//! UI module for rendering the TUI

mod dialog;
mod field_renderer;
mod form;
mod success;

use crate::app::App;
use crate::state::View;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    match app.state.current_view {
        View::Form => form::draw(frame, area, app),
        View::Success => success::draw(frame, area, app),
    }

    // Modal error dialog overlays whatever view is behind it
    if let Some(message) = app.state.current_error() {
        dialog::render_error_dialog(frame, message);
    }
}
