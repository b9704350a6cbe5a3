//! # Render Surfaces
//!
//! The controller never touches a screen. It emits [`RenderCommand`]s, and a
//! front end applies them to whatever implements the three collaborator
//! traits below.
//!
//! ```text
//! ChatController ──► Vec<RenderCommand> ──► apply() ──► ChatSurface
//!                                                      ├── TranscriptRenderer
//!                                                      ├── ErrorSurface
//!                                                      └── InputSurface
//! ```

use crate::core::message::Message;

/// The visible, append-only conversation log.
pub trait TranscriptRenderer {
    /// Append one entry tagged by role. Implementations keep the newest entry in view.
    fn append_message(&mut self, message: &Message);

    /// Show the single transient "composing" entry.
    fn show_composing_placeholder(&mut self);

    /// Remove the composing entry.
    fn remove_composing_placeholder(&mut self);
}

/// A single error line, kept apart from the transcript.
pub trait ErrorSurface {
    fn show_error(&mut self, text: &str);
    fn clear_error(&mut self);
}

/// Where the user types.
pub trait InputSurface {
    fn clear_input(&mut self);
    fn focus_input(&mut self);
    /// Enables or disables the submit affordance.
    fn set_submit_enabled(&mut self, enabled: bool);
}

/// Everything a front end must provide to host the chat.
pub trait ChatSurface: TranscriptRenderer + ErrorSurface + InputSurface {}

impl<T: TranscriptRenderer + ErrorSurface + InputSurface> ChatSurface for T {}

/// One UI mutation requested by the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderCommand {
    ClearError,
    AppendMessage(Message),
    ClearInput,
    FocusInput,
    SetSubmitEnabled(bool),
    ShowComposing,
    RemoveComposing,
    ShowError(String),
}

impl RenderCommand {
    pub fn apply<S: ChatSurface + ?Sized>(self, surface: &mut S) {
        match self {
            RenderCommand::ClearError => surface.clear_error(),
            RenderCommand::AppendMessage(message) => surface.append_message(&message),
            RenderCommand::ClearInput => surface.clear_input(),
            RenderCommand::FocusInput => surface.focus_input(),
            RenderCommand::SetSubmitEnabled(enabled) => surface.set_submit_enabled(enabled),
            RenderCommand::ShowComposing => surface.show_composing_placeholder(),
            RenderCommand::RemoveComposing => surface.remove_composing_placeholder(),
            RenderCommand::ShowError(text) => surface.show_error(&text),
        }
    }
}

/// Applies commands in order.
pub fn apply_all<S, I>(surface: &mut S, commands: I)
where
    S: ChatSurface + ?Sized,
    I: IntoIterator<Item = RenderCommand>,
{
    for command in commands {
        command.apply(surface);
    }
}
