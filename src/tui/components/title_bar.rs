//! # TitleBar Component
//!
//! Top status bar: widget title, endpoint URL, and endpoint health.
//! Purely presentational; all data arrives as props.
//!
//! ```text
//! Sukoon AI | http://localhost:8000/api/chat | ● online
//! ```

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::tui::component::Component;

/// What the startup health probe found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EndpointStatus {
    Checking,
    Online,
    Unreachable(String),
}

impl EndpointStatus {
    fn span(&self) -> Span<'static> {
        match self {
            EndpointStatus::Checking => {
                Span::styled("○ checking", Style::default().fg(Color::DarkGray))
            }
            EndpointStatus::Online => Span::styled("● online", Style::default().fg(Color::Green)),
            EndpointStatus::Unreachable(_) => {
                Span::styled("● unreachable", Style::default().fg(Color::Red))
            }
        }
    }
}

pub struct TitleBar<'a> {
    pub title: &'a str,
    pub endpoint: &'a str,
    pub status: &'a EndpointStatus,
}

impl Component for TitleBar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let separator = Span::styled(" | ", Style::default().add_modifier(Modifier::DIM));
        let line = Line::from(vec![
            Span::styled(
                self.title.to_string(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            separator.clone(),
            Span::styled(
                self.endpoint.to_string(),
                Style::default().add_modifier(Modifier::DIM),
            ),
            separator,
            self.status.span(),
        ]);
        frame.render_widget(line, area);
    }
}
