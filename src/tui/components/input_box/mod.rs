//! # InputBox Component
//!
//! Where the user types a message.
//!
//! ## Responsibilities
//!
//! - Capture text input (typing, paste, backspace)
//! - Emit `Submit` on Enter while the submit affordance is enabled
//! - Show whether it is focused and whether a response is pending
//!
//! ## State Management
//!
//! The buffer is internal state. `submit_enabled` and `focused` are set by
//! the chat controller's render commands through `TuiState`; the box never
//! clears itself on submit, the controller decides that.

mod text_wrap;

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Padding, Paragraph};

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

use text_wrap::{
    CONTENT_OFFSET, MAX_VISIBLE_LINES, VERTICAL_OVERHEAD, display_width, inner_width,
    prev_char_boundary, wrap_line_count, wrap_lines,
};

/// High-level events emitted by the InputBox
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// User asked to send the buffer (Enter pressed, submit enabled)
    Submit(String),
    /// Text content changed
    ContentChanged,
}

pub struct InputBox {
    /// Text buffer (Internal State)
    pub buffer: String,
    /// Whether Enter sends (Prop, driven by the controller)
    pub submit_enabled: bool,
    /// Whether keystrokes go here (Prop)
    pub focused: bool,
}

impl Default for InputBox {
    fn default() -> Self {
        Self::new()
    }
}

impl InputBox {
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
            submit_enabled: true,
            focused: true,
        }
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Calculate required height for current buffer content, clamped to viewport limits.
    /// Returns value in range [1 + VERTICAL_OVERHEAD, MAX_VISIBLE_LINES + VERTICAL_OVERHEAD].
    pub fn calculate_height(&self, content_width: u16) -> u16 {
        let width = inner_width(content_width);
        let content_lines = wrap_line_count(&self.buffer, width);
        content_lines.min(MAX_VISIBLE_LINES) + VERTICAL_OVERHEAD
    }

    fn title(&self) -> &'static str {
        match (self.submit_enabled, self.focused) {
            (false, _) => "Input (waiting for reply...)",
            (true, true) => "Input (Enter to send, Shift+Enter for newline)",
            (true, false) => "Input (type to focus, Esc to quit)",
        }
    }
}

impl Component for InputBox {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let width = inner_width(area.width);
        let lines = wrap_lines(&self.buffer, width);

        // Follow the tail once the buffer outgrows the box
        let skip = lines.len().saturating_sub(MAX_VISIBLE_LINES as usize);
        let visible = lines[skip..].join("\n");

        let border_style = if self.focused {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::Green).add_modifier(Modifier::DIM)
        };
        let text_style = if self.submit_enabled {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .padding(Padding::horizontal(1))
            .title(self.title());

        frame.render_widget(Paragraph::new(visible).block(block).style(text_style), area);

        if self.focused {
            let last = lines.last().map(String::as_str).unwrap_or("");
            let row = (lines.len() - skip).saturating_sub(1) as u16;
            let cursor_x = area.x + CONTENT_OFFSET + display_width(last).min(width);
            let cursor_y = area.y + 1 + row;
            frame.set_cursor_position((cursor_x, cursor_y));
        }
    }
}

impl EventHandler for InputBox {
    type Event = InputEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => {
                self.buffer.push(*c);
                Some(InputEvent::ContentChanged)
            }
            TuiEvent::Paste(text) => {
                self.buffer.push_str(text);
                Some(InputEvent::ContentChanged)
            }
            TuiEvent::Backspace => {
                if self.buffer.is_empty() {
                    return None;
                }
                let prev = prev_char_boundary(&self.buffer, self.buffer.len());
                self.buffer.truncate(prev);
                Some(InputEvent::ContentChanged)
            }
            TuiEvent::Submit if self.submit_enabled => Some(InputEvent::Submit(self.buffer.clone())),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_handle_input() {
        let mut input = InputBox::new();

        assert_eq!(
            input.handle_event(&TuiEvent::InputChar('a')),
            Some(InputEvent::ContentChanged)
        );
        input.handle_event(&TuiEvent::InputChar('é'));
        assert_eq!(input.buffer, "aé");

        input.handle_event(&TuiEvent::Backspace);
        assert_eq!(input.buffer, "a");
        input.handle_event(&TuiEvent::Backspace);
        assert_eq!(input.handle_event(&TuiEvent::Backspace), None);
    }

    #[test]
    fn test_submit_emits_buffer_without_clearing() {
        let mut input = InputBox::new();
        input.buffer = "hello".to_string();

        let res = input.handle_event(&TuiEvent::Submit);
        assert_eq!(res, Some(InputEvent::Submit("hello".to_string())));
        assert_eq!(input.buffer, "hello");
    }

    #[test]
    fn test_submit_blocked_while_disabled() {
        let mut input = InputBox::new();
        input.submit_enabled = false;
        input.buffer = "hello".to_string();

        assert_eq!(input.handle_event(&TuiEvent::Submit), None);
        // Typing still works while a reply is pending
        input.handle_event(&TuiEvent::InputChar('!'));
        assert_eq!(input.buffer, "hello!");
    }

    #[test]
    fn test_calculate_height_is_clamped() {
        let mut input = InputBox::new();
        assert_eq!(input.calculate_height(40), 1 + VERTICAL_OVERHEAD);

        input.buffer = "line\n".repeat(20);
        assert_eq!(input.calculate_height(40), MAX_VISIBLE_LINES + VERTICAL_OVERHEAD);
    }

    #[test]
    fn test_render_shows_waiting_title() {
        let mut terminal = Terminal::new(TestBackend::new(60, 3)).unwrap();
        let mut input = InputBox::new();
        input.submit_enabled = false;

        terminal.draw(|f| input.render(f, f.area())).unwrap();

        assert!(screen_text(&terminal).contains("waiting for reply"));
    }
}
