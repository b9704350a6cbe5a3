//! # MessageList Component
//!
//! Scrollable view of the transcript, plus the composing placeholder.
//!
//! ## Architecture
//!
//! `MessageList` is a transient component (created each frame) that wraps
//! `&'a mut MessageListState`. The state is the only record of the
//! conversation: the controller hands messages over and forgets them.
//!
//! Appending re-pins the view to the bottom; scrolling up unpins it until the
//! user scrolls back down to the end.

use ratatui::Frame;
use ratatui::layout::{Position, Rect, Size};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::core::message::Message;
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::message::{COMPOSING_HEIGHT, ComposingIndicator, MessageView};
use crate::tui::event::TuiEvent;

/// Transcript and scroll state. Must be persisted in the parent TuiState.
pub struct MessageListState {
    pub messages: Vec<Message>,
    /// True while the composing placeholder is shown
    pub composing: bool,
    pub scroll_state: ScrollViewState,
    /// When true, auto-scroll to bottom on new content
    pub stick_to_bottom: bool,
    /// Total content height from the last render
    pub content_height: u16,
    /// Last known viewport height (for scroll clamping between frames)
    pub viewport_height: u16,
}

impl Default for MessageListState {
    fn default() -> Self {
        Self::new()
    }
}

impl MessageListState {
    pub fn new() -> Self {
        Self {
            messages: Vec::new(),
            composing: false,
            scroll_state: ScrollViewState::default(),
            stick_to_bottom: true, // Start attached to bottom
            content_height: 0,
            viewport_height: 0,
        }
    }

    pub fn push(&mut self, message: Message) {
        self.messages.push(message);
        self.stick_to_bottom = true;
    }

    pub fn set_composing(&mut self, composing: bool) {
        self.composing = composing;
        if composing {
            self.stick_to_bottom = true;
        }
    }

    fn max_offset(&self) -> u16 {
        self.content_height.saturating_sub(self.viewport_height)
    }

    /// Clamp scroll and re-engage auto-scroll if the user has reached the bottom.
    pub fn repin_if_at_bottom(&mut self) {
        let max_y = self.max_offset();
        let current = self.scroll_state.offset();
        if current.y >= max_y {
            self.stick_to_bottom = true;
            self.scroll_state.set_offset(Position {
                x: current.x,
                y: max_y,
            });
        }
    }
}

pub struct MessageList<'a> {
    pub state: &'a mut MessageListState,
    pub assistant_name: &'a str,
    pub spinner_frame: usize,
}

impl Component for MessageList<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        // Reserve one column for the scrollbar
        let content_width = area.width.saturating_sub(1);

        let heights: Vec<u16> = self
            .state
            .messages
            .iter()
            .map(|m| MessageView::calculate_height(m, content_width))
            .collect();
        let placeholder_height = if self.state.composing {
            COMPOSING_HEIGHT
        } else {
            0
        };
        let total_height = heights
            .iter()
            .fold(placeholder_height, |acc, h| acc.saturating_add(*h));

        self.state.content_height = total_height;
        self.state.viewport_height = area.height;

        let mut scroll_view = ScrollView::new(Size::new(content_width, total_height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

        let mut y_offset: u16 = 0;
        for (message, height) in self.state.messages.iter().zip(&heights) {
            let rect = Rect::new(0, y_offset, content_width, *height);
            scroll_view.render_widget(MessageView::new(message, self.assistant_name), rect);
            y_offset = y_offset.saturating_add(*height);
        }

        if self.state.composing {
            let rect = Rect::new(0, y_offset, content_width, COMPOSING_HEIGHT);
            scroll_view.render_widget(
                ComposingIndicator {
                    assistant_name: self.assistant_name,
                    spinner_frame: self.spinner_frame,
                },
                rect,
            );
        }

        if self.state.stick_to_bottom {
            self.state.scroll_state.scroll_to_bottom();
        }

        frame.render_stateful_widget(scroll_view, area, &mut self.state.scroll_state);
    }
}

/// EventHandler lives on `MessageListState` because `MessageList` is
/// recreated each frame and can't hold the scroll position.
impl EventHandler for MessageListState {
    type Event = ();

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::ScrollUp => {
                self.scroll_state.scroll_up();
                self.stick_to_bottom = false;
            }
            TuiEvent::ScrollDown => {
                self.scroll_state.scroll_down();
                self.repin_if_at_bottom();
            }
            TuiEvent::ScrollPageUp => {
                self.scroll_state.scroll_page_up();
                self.stick_to_bottom = false;
            }
            TuiEvent::ScrollPageDown => {
                self.scroll_state.scroll_page_down();
                self.repin_if_at_bottom();
            }
            TuiEvent::ScrollToBottom => {
                self.stick_to_bottom = true;
            }
            _ => {}
        }
        None
    }
}
