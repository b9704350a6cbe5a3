//! # Chat Widget
//!
//! Async driver for one controller. Each `submit().await` runs a whole cycle:
//! commands before the call, exactly one `send`, commands after it. The
//! TUI splits the same cycle across its event loop instead; this type is for
//! hosts that can simply await.

use crate::core::controller::{ChatController, SubmitState};
use crate::core::surface::{ChatSurface, apply_all};
use crate::endpoint::ChatEndpoint;

pub struct ChatWidget<E, S> {
    controller: ChatController,
    endpoint: E,
    surface: S,
}

impl<E, S> ChatWidget<E, S>
where
    E: ChatEndpoint,
    S: ChatSurface,
{
    pub fn new(endpoint: E, surface: S) -> Self {
        Self {
            controller: ChatController::new(),
            endpoint,
            surface,
        }
    }

    /// Runs one submit cycle. Returns `false` when the input was rejected.
    pub async fn submit(&mut self, raw_text: &str) -> bool {
        let Some(submission) = self.controller.submit(raw_text) else {
            return false;
        };
        apply_all(&mut self.surface, submission.commands);

        let outcome = self.endpoint.send(&submission.text).await;

        let commands = self.controller.complete(outcome);
        apply_all(&mut self.surface, commands);
        true
    }

    pub fn state(&self) -> SubmitState {
        self.controller.state()
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn endpoint(&self) -> &E {
        &self.endpoint
    }

    pub fn into_surface(self) -> S {
        self.surface
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::message::Message;
    use crate::endpoint::EndpointError;
    use crate::test_support::{RecordingSurface, ScriptedEndpoint, journal};

    #[test]
    fn test_blank_submit_touches_nothing() {
        let endpoint = ScriptedEndpoint::new(vec![]);
        let mut widget = ChatWidget::new(endpoint, RecordingSurface::default());

        let accepted = tokio_test::block_on(widget.submit("   "));

        assert!(!accepted);
        assert_eq!(widget.state(), SubmitState::Idle);
        assert!(widget.surface().transcript.is_empty());
        assert!(widget.endpoint().calls().is_empty());
    }

    #[test]
    fn test_success_cycle_order() {
        let log = journal();
        let endpoint = ScriptedEndpoint::new(vec![Ok("Hello".to_string())]).with_journal(log.clone());
        let surface = RecordingSurface::with_journal(log.clone());
        let mut widget = ChatWidget::new(endpoint, surface);

        assert!(tokio_test::block_on(widget.submit(" hi ")));

        let entries = log.lock().unwrap().clone();
        assert_eq!(
            entries,
            vec![
                "clear_error",
                "append:user:hi",
                "clear_input",
                "focus_input",
                "submit_enabled:false",
                "composing:on",
                "send:hi",
                "composing:off",
                "append:assistant:Hello",
                "submit_enabled:true",
            ]
        );
        let surface = widget.surface();
        assert_eq!(
            surface.transcript,
            vec![Message::user("hi"), Message::assistant("Hello")]
        );
        assert!(surface.error.is_none());
        assert!(surface.submit_enabled);
        assert!(!surface.composing);
    }

    #[test]
    fn test_call_happens_while_submit_disabled() {
        let log = journal();
        let endpoint = ScriptedEndpoint::new(vec![Ok("ok".to_string())]).with_journal(log.clone());
        let mut widget = ChatWidget::new(endpoint, RecordingSurface::with_journal(log.clone()));

        tokio_test::block_on(widget.submit("ping"));

        let entries = log.lock().unwrap().clone();
        let disabled = entries.iter().position(|e| e == "submit_enabled:false").unwrap();
        let sent = entries.iter().position(|e| e == "send:ping").unwrap();
        let enabled = entries.iter().position(|e| e == "submit_enabled:true").unwrap();
        assert!(disabled < sent && sent < enabled);
    }

    #[test]
    fn test_error_cycle_keeps_transcript_clean() {
        let endpoint = ScriptedEndpoint::new(vec![Err(EndpointError::Api {
            status: 429,
            message: Some("rate limited".to_string()),
        })]);
        let mut widget = ChatWidget::new(endpoint, RecordingSurface::default());

        tokio_test::block_on(widget.submit("hi"));

        let surface = widget.surface();
        assert_eq!(surface.error.as_deref(), Some("rate limited"));
        assert_eq!(surface.transcript, vec![Message::user("hi")]);
        assert!(surface.submit_enabled);
        assert!(!surface.composing);
        assert_eq!(widget.state(), SubmitState::Idle);
    }

    #[test]
    fn test_next_submit_clears_previous_error() {
        let endpoint = ScriptedEndpoint::new(vec![
            Err(EndpointError::Network("connection refused".to_string())),
            Ok("back".to_string()),
        ]);
        let mut widget = ChatWidget::new(endpoint, RecordingSurface::default());

        tokio_test::block_on(widget.submit("one"));
        assert_eq!(widget.surface().error.as_deref(), Some("connection refused"));

        assert!(tokio_test::block_on(widget.submit("two")));
        let surface = widget.into_surface();
        assert!(surface.error.is_none());
        assert_eq!(surface.transcript.last(), Some(&Message::assistant("back")));
        assert_eq!(surface.placeholder_removals, 2);
    }
}
