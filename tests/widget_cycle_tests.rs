use std::time::Duration;

use serde_json::json;
use sukoon::core::controller::SubmitState;
use sukoon::core::message::{Message, Role};
use sukoon::core::surface::{ErrorSurface, InputSurface, TranscriptRenderer};
use sukoon::core::widget::ChatWidget;
use sukoon::endpoint::HttpEndpoint;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path},
};

// ============================================================================
// Helper Functions
// ============================================================================

/// Minimal surface that keeps what a user would see.
#[derive(Default)]
struct ScreenSurface {
    transcript: Vec<Message>,
    composing: bool,
    error: Option<String>,
    input: String,
    submit_enabled: bool,
}

impl TranscriptRenderer for ScreenSurface {
    fn append_message(&mut self, message: &Message) {
        self.transcript.push(message.clone());
    }

    fn show_composing_placeholder(&mut self) {
        self.composing = true;
    }

    fn remove_composing_placeholder(&mut self) {
        self.composing = false;
    }
}

impl ErrorSurface for ScreenSurface {
    fn show_error(&mut self, text: &str) {
        self.error = Some(text.to_string());
    }

    fn clear_error(&mut self) {
        self.error = None;
    }
}

impl InputSurface for ScreenSurface {
    fn clear_input(&mut self) {
        self.input.clear();
    }

    fn focus_input(&mut self) {}

    fn set_submit_enabled(&mut self, enabled: bool) {
        self.submit_enabled = enabled;
    }
}

fn widget_for(server: &MockServer) -> ChatWidget<HttpEndpoint, ScreenSurface> {
    let endpoint = HttpEndpoint::new(&server.uri(), Duration::from_secs(5)).unwrap();
    ChatWidget::new(
        endpoint,
        ScreenSurface {
            submit_enabled: true,
            ..ScreenSurface::default()
        },
    )
}

// ============================================================================
// Cycle Tests
// ============================================================================

#[tokio::test]
async fn test_reply_lands_in_transcript() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "reply": "Hello **friend**" })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut widget = widget_for(&mock_server);
    assert!(widget.submit("  hi  ").await);

    let screen = widget.surface();
    assert_eq!(
        screen.transcript,
        vec![Message::user("hi"), Message::assistant("Hello **friend**")]
    );
    assert!(!screen.composing);
    assert!(screen.submit_enabled);
    assert!(screen.error.is_none());
    assert_eq!(widget.state(), SubmitState::Idle);
}

#[tokio::test]
async fn test_blank_input_never_reaches_server() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "reply": "x" })))
        .expect(0)
        .mount(&mock_server)
        .await;

    let mut widget = widget_for(&mock_server);

    assert!(!widget.submit("").await);
    assert!(!widget.submit(" \n\t ").await);
    assert!(widget.surface().transcript.is_empty());
}

#[tokio::test]
async fn test_server_error_goes_to_error_surface() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .respond_with(ResponseTemplate::new(429).set_body_json(json!({ "error": "rate limited" })))
        .mount(&mock_server)
        .await;

    let mut widget = widget_for(&mock_server);
    widget.submit("hi").await;

    let screen = widget.surface();
    assert_eq!(screen.error.as_deref(), Some("rate limited"));
    // Only the user's own message; the failure is not a transcript entry
    assert_eq!(screen.transcript, vec![Message::user("hi")]);
    assert!(screen.submit_enabled);
    assert!(!screen.composing);
}

#[tokio::test]
async fn test_bare_failure_status_shows_generic_text() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({})))
        .mount(&mock_server)
        .await;

    let mut widget = widget_for(&mock_server);
    widget.submit("hi").await;

    assert_eq!(
        widget.surface().error.as_deref(),
        Some("Something went wrong")
    );
}

#[tokio::test]
async fn test_next_submit_clears_error_and_recovers() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .respond_with(ResponseTemplate::new(503).set_body_json(json!({ "error": "busy" })))
        .up_to_n_times(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "reply": "back" })))
        .mount(&mock_server)
        .await;

    let mut widget = widget_for(&mock_server);
    widget.submit("first").await;
    assert_eq!(widget.surface().error.as_deref(), Some("busy"));

    widget.submit("second").await;

    let screen = widget.surface();
    assert!(screen.error.is_none());
    let roles: Vec<Role> = screen.transcript.iter().map(|m| m.role).collect();
    assert_eq!(roles, vec![Role::User, Role::User, Role::Assistant]);
    assert_eq!(screen.transcript[2].text, "back");
}
