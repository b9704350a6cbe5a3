use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};

use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{ErrorBar, MessageList, TitleBar};

/// Draws the whole screen:
///
/// ```text
/// ┌ title bar ───────────────────────┐  1 row
/// │ transcript (scrollable)          │  rest
/// │ error bar (hidden when empty)    │  0..n rows
/// └ input box ───────────────────────┘  3..7 rows
/// ```
pub fn draw_ui(frame: &mut Frame, tui: &mut TuiState, spinner_frame: usize) {
    use Constraint::{Length, Min};

    let area = frame.area();
    let input_height = tui.input_box.calculate_height(area.width);
    let error_height = ErrorBar::calculate_height(tui.error.as_deref(), area.width);

    let layout = Layout::vertical([Length(1), Min(0), Length(error_height), Length(input_height)]);
    let [title_area, transcript_area, error_area, input_area] = layout.areas(area);

    TitleBar {
        title: &tui.title,
        endpoint: &tui.endpoint_label,
        status: &tui.endpoint_status,
    }
    .render(frame, title_area);

    MessageList {
        state: &mut tui.message_list,
        assistant_name: &tui.assistant_name,
        spinner_frame,
    }
    .render(frame, transcript_area);

    ErrorBar {
        error: tui.error.as_deref(),
    }
    .render(frame, error_area);

    tui.input_box.render(frame, input_area);
}
