//! # Message Components
//!
//! `MessageView` renders one transcript entry; `ComposingIndicator` renders
//! the transient entry shown while a reply is pending. Both are transient:
//! built fresh each frame from props, no internal state.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, BorderType, Padding, Paragraph, Widget, Wrap};

use crate::core::markup::{self, MarkupLine};
use crate::core::message::{Message, Role};
use crate::tui::component::Component;

/// Horizontal padding (per side) between the border and text content.
const CONTENT_PAD_H: u16 = 1;
/// Total horizontal space consumed by borders (1 left + 1 right) and padding.
const HORIZONTAL_OVERHEAD: u16 = 2 + CONTENT_PAD_H * 2;
/// Total vertical space consumed by borders (1 top + 1 bottom).
const VERTICAL_OVERHEAD: u16 = 2;

/// Height of the composing indicator, borders included.
pub const COMPOSING_HEIGHT: u16 = 3;

const COMPOSING_FRAMES: [&str; 4] = ["   ", "•  ", "•• ", "•••"];

pub fn role_style(role: Role) -> Style {
    match role {
        Role::User => Style::default().fg(Color::Cyan),
        Role::Assistant => Style::default().fg(Color::Green),
    }
}

/// Converts markup lines into styled ratatui text on top of `base`.
pub fn styled_text(lines: Vec<MarkupLine>, base: Style) -> Text<'static> {
    let lines: Vec<Line<'static>> = lines
        .into_iter()
        .map(|line| {
            let spans: Vec<Span<'static>> = line
                .spans
                .into_iter()
                .map(|inline| {
                    let style = if inline.bold {
                        base.add_modifier(Modifier::BOLD)
                    } else {
                        base
                    };
                    Span::styled(inline.text, style)
                })
                .collect();
            Line::from(spans)
        })
        .collect();
    Text::from(lines)
}

fn bubble(title: &str, border_style: Style) -> Block<'_> {
    Block::bordered()
        .title(title)
        .border_type(BorderType::Rounded)
        .border_style(border_style)
        .title_style(border_style)
        .padding(Padding::horizontal(CONTENT_PAD_H))
}

#[derive(Clone)]
pub struct MessageView<'a> {
    pub message: &'a Message,
    /// Label for assistant entries (user entries are always "you")
    pub assistant_name: &'a str,
}

impl<'a> MessageView<'a> {
    pub fn new(message: &'a Message, assistant_name: &'a str) -> Self {
        Self {
            message,
            assistant_name,
        }
    }

    fn label(&self) -> &'a str {
        match self.message.role {
            Role::User => "you",
            Role::Assistant => self.assistant_name,
        }
    }

    fn paragraph(message: &Message) -> Paragraph<'static> {
        let style = role_style(message.role);
        Paragraph::new(styled_text(markup::parse(&message.text), style))
            .style(style)
            .wrap(Wrap { trim: false })
    }

    /// Height this message needs at `width`, borders included.
    pub fn calculate_height(message: &Message, width: u16) -> u16 {
        let content_width = width.saturating_sub(HORIZONTAL_OVERHEAD);
        if content_width == 0 {
            // Degenerate case: terminal too narrow for borders + padding.
            return 1;
        }
        let lines = u16::try_from(Self::paragraph(message).line_count(content_width))
            .unwrap_or(u16::MAX);
        lines.max(1).saturating_add(VERTICAL_OVERHEAD)
    }
}

impl Widget for MessageView<'_> {
    fn render(self, area: Rect, buf: &mut ratatui::buffer::Buffer) {
        let border_style = role_style(self.message.role).add_modifier(Modifier::DIM);
        let block = bubble(self.label(), border_style);

        let inner_area = block.inner(area);
        block.render(area, buf);
        Self::paragraph(self.message).render(inner_area, buf);
    }
}

impl Component for MessageView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(self.clone(), area);
    }
}

/// The "assistant is typing" placeholder.
#[derive(Clone, Copy)]
pub struct ComposingIndicator<'a> {
    pub assistant_name: &'a str,
    pub spinner_frame: usize,
}

impl Widget for ComposingIndicator<'_> {
    fn render(self, area: Rect, buf: &mut ratatui::buffer::Buffer) {
        let style = role_style(Role::Assistant);
        let block = bubble(self.assistant_name, style.add_modifier(Modifier::DIM));
        let inner_area = block.inner(area);
        block.render(area, buf);

        let dots = COMPOSING_FRAMES[self.spinner_frame % COMPOSING_FRAMES.len()];
        Paragraph::new(dots)
            .style(style.add_modifier(Modifier::BOLD))
            .render(inner_area, buf);
    }
}
