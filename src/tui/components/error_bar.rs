//! # ErrorBar Component
//!
//! The dedicated error surface. Sits between the transcript and the input
//! and takes no space at all while there is nothing to show.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};

use crate::tui::component::Component;

const PREFIX: &str = "⚠ ";

pub struct ErrorBar<'a> {
    pub error: Option<&'a str>,
}

impl ErrorBar<'_> {
    fn paragraph(text: &str) -> Paragraph<'_> {
        let style = Style::default().fg(Color::Red);
        Paragraph::new(Line::from(vec![
            Span::styled(PREFIX, style.add_modifier(Modifier::BOLD)),
            Span::styled(text, style),
        ]))
        .wrap(Wrap { trim: false })
    }

    /// Rows needed at `width`; zero when hidden.
    pub fn calculate_height(error: Option<&str>, width: u16) -> u16 {
        match error {
            None => 0,
            Some(_) if width == 0 => 1,
            Some(text) => u16::try_from(Self::paragraph(text).line_count(width))
                .unwrap_or(u16::MAX)
                .max(1),
        }
    }
}

impl Component for ErrorBar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        if let Some(text) = self.error {
            frame.render_widget(Self::paragraph(text), area);
        }
    }
}
