//! # Chat Controller
//!
//! The submit-cycle state machine. Two inputs, both returning commands:
//!
//! ```text
//!            submit(text)                          complete(outcome)
//!   Idle ─────────────────────► AwaitingResponse ─────────────────────► Idle
//!    │  ClearError                                 RemoveComposing
//!    │  AppendMessage(user)                        AppendMessage(assistant) | ShowError
//!    │  ClearInput, FocusInput                     SetSubmitEnabled(true)
//!    │  SetSubmitEnabled(false)
//!    │  ShowComposing
//! ```
//!
//! While `AwaitingResponse` every further submit is refused, so at most one
//! endpoint call is ever outstanding.

use log::{debug, info, warn};

use crate::core::message::{Message, Role};
use crate::core::surface::RenderCommand;
use crate::endpoint::EndpointError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitState {
    #[default]
    Idle,
    AwaitingResponse,
}

/// An accepted submit: the text to send and the commands to apply before sending.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub text: String,
    pub commands: Vec<RenderCommand>,
}

#[derive(Debug, Default)]
pub struct ChatController {
    state: SubmitState,
    composing: bool,
}

impl ChatController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> SubmitState {
        self.state
    }

    pub fn is_awaiting(&self) -> bool {
        self.state == SubmitState::AwaitingResponse
    }

    /// True while the composing placeholder is on screen.
    pub fn has_placeholder(&self) -> bool {
        self.composing
    }

    /// Returns `None` for blank input or while a response is pending.
    pub fn submit(&mut self, raw_text: &str) -> Option<Submission> {
        let text = raw_text.trim();
        if text.is_empty() {
            return None;
        }
        if self.is_awaiting() {
            debug!("Submit refused: response pending");
            return None;
        }

        info!("Submit accepted (role={}, len={})", Role::User.as_str(), text.len());
        self.state = SubmitState::AwaitingResponse;
        self.composing = true;

        Some(Submission {
            text: text.to_string(),
            commands: vec![
                RenderCommand::ClearError,
                RenderCommand::AppendMessage(Message::user(text)),
                RenderCommand::ClearInput,
                RenderCommand::FocusInput,
                RenderCommand::SetSubmitEnabled(false),
                RenderCommand::ShowComposing,
            ],
        })
    }

    /// Finishes the pending cycle. Outside a cycle this returns no commands.
    pub fn complete(&mut self, outcome: Result<String, EndpointError>) -> Vec<RenderCommand> {
        if !self.is_awaiting() {
            warn!("Completion received with no pending request; ignoring");
            return Vec::new();
        }

        let mut commands = Vec::with_capacity(3);
        if self.composing {
            self.composing = false;
            commands.push(RenderCommand::RemoveComposing);
        }

        match outcome {
            Ok(reply) => {
                debug!(
                    "Cycle finished with {} reply ({} bytes)",
                    Role::Assistant.as_str(),
                    reply.len()
                );
                commands.push(RenderCommand::AppendMessage(Message::assistant(reply)));
            }
            Err(e) => {
                info!("Cycle finished with error: {}", e);
                commands.push(RenderCommand::ShowError(e.display_text()));
            }
        }

        self.state = SubmitState::Idle;
        commands.push(RenderCommand::SetSubmitEnabled(true));
        commands
    }
}
