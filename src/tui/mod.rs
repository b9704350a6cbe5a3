//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI, and
//! hosts the chat controller: `TuiState` is the surface its render commands
//! land on.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Request Flow
//!
//! The event loop never awaits. An accepted submit applies its commands,
//! then spawns a tokio task for the endpoint call; the task posts the outcome
//! back over an mpsc channel and the loop hands it to `controller.complete()`.
//!
//! ## Redraw Strategy
//!
//! - **Pending reply**: draws every ~80ms so the composing dots animate.
//! - **Idle**: sleeps up to 500ms, only redraws on events or background results.

pub mod component;
pub mod components;
pub mod event;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};
use std::time::{Duration, Instant};

use crossterm::cursor::{SetCursorStyle, Show};
use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
    KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::execute;

use crate::core::config::ResolvedConfig;
use crate::core::controller::ChatController;
use crate::core::message::Message;
use crate::core::surface::{ErrorSurface, InputSurface, TranscriptRenderer, apply_all};
use crate::endpoint::{ChatEndpoint, EndpointError, HttpEndpoint};
use crate::tui::component::EventHandler;
use crate::tui::components::{EndpointStatus, InputBox, InputEvent, MessageListState};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// Modal input mode: determines how keyboard events are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Keystrokes edit the input box. Esc switches to Browse.
    Input,
    /// Input unfocused; arrows scroll, typing refocuses, Esc quits.
    Browse,
}

/// Results posted back by background tasks.
#[derive(Debug)]
pub enum BackgroundEvent {
    Reply(Result<String, EndpointError>),
    Health(Result<(), EndpointError>),
}

/// TUI presentation state. Also the controller's render surface.
pub struct TuiState {
    pub title: String,
    pub assistant_name: String,
    pub endpoint_label: String,
    pub endpoint_status: EndpointStatus,
    pub message_list: MessageListState,
    pub input_box: InputBox,
    pub input_mode: InputMode,
    pub error: Option<String>,
}

impl TuiState {
    pub fn new(title: &str, assistant_name: &str, endpoint_label: &str) -> Self {
        Self {
            title: title.to_string(),
            assistant_name: assistant_name.to_string(),
            endpoint_label: endpoint_label.to_string(),
            endpoint_status: EndpointStatus::Checking,
            message_list: MessageListState::new(),
            input_box: InputBox::new(),
            input_mode: InputMode::Input, // User expects to type immediately
            error: None,
        }
    }

    fn set_mode(&mut self, mode: InputMode) {
        self.input_mode = mode;
        self.input_box.focused = mode == InputMode::Input;
    }
}

impl TranscriptRenderer for TuiState {
    fn append_message(&mut self, message: &Message) {
        self.message_list.push(message.clone());
    }

    fn show_composing_placeholder(&mut self) {
        self.message_list.set_composing(true);
    }

    fn remove_composing_placeholder(&mut self) {
        self.message_list.set_composing(false);
    }
}

impl ErrorSurface for TuiState {
    fn show_error(&mut self, text: &str) {
        self.error = Some(text.to_string());
    }

    fn clear_error(&mut self) {
        self.error = None;
    }
}

impl InputSurface for TuiState {
    fn clear_input(&mut self) {
        self.input_box.clear();
    }

    fn focus_input(&mut self) {
        self.set_mode(InputMode::Input);
    }

    fn set_submit_enabled(&mut self, enabled: bool) {
        self.input_box.submit_enabled = enabled;
    }
}

/// What the event loop should do after a key event.
#[derive(Debug, PartialEq)]
enum LoopAction {
    Continue,
    Quit,
    Send(String),
}

/// Routes one terminal event. Accepted submits come back as `LoopAction::Send`
/// after their commands have been applied to `tui`.
fn handle_event(tui: &mut TuiState, controller: &mut ChatController, event: TuiEvent) -> LoopAction {
    match event {
        TuiEvent::ForceQuit => return LoopAction::Quit,
        TuiEvent::Resize => return LoopAction::Continue,
        TuiEvent::ScrollUp
        | TuiEvent::ScrollDown
        | TuiEvent::ScrollPageUp
        | TuiEvent::ScrollPageDown
        | TuiEvent::ScrollToBottom => {
            tui.message_list.handle_event(&event);
            return LoopAction::Continue;
        }
        _ => {}
    }

    match tui.input_mode {
        InputMode::Input => {
            if event == TuiEvent::Escape {
                tui.set_mode(InputMode::Browse);
                return LoopAction::Continue;
            }
            if let Some(InputEvent::Submit(text)) = tui.input_box.handle_event(&event)
                && let Some(submission) = controller.submit(&text)
            {
                apply_all(tui, submission.commands);
                return LoopAction::Send(submission.text);
            }
            LoopAction::Continue
        }
        InputMode::Browse => match event {
            TuiEvent::Escape => LoopAction::Quit,
            TuiEvent::Submit => {
                tui.set_mode(InputMode::Input);
                LoopAction::Continue
            }
            // Typing auto-switches to Input mode and forwards the event
            TuiEvent::InputChar(_) | TuiEvent::Paste(_) | TuiEvent::Backspace => {
                tui.set_mode(InputMode::Input);
                tui.input_box.handle_event(&event);
                LoopAction::Continue
            }
            _ => LoopAction::Continue,
        },
    }
}

/// Applies one background result to the UI.
fn handle_background(tui: &mut TuiState, controller: &mut ChatController, event: BackgroundEvent) {
    match event {
        BackgroundEvent::Reply(outcome) => {
            let commands = controller.complete(outcome);
            apply_all(tui, commands);
        }
        BackgroundEvent::Health(Ok(())) => {
            tui.endpoint_status = EndpointStatus::Online;
        }
        BackgroundEvent::Health(Err(e)) => {
            tui.endpoint_status = EndpointStatus::Unreachable(e.to_string());
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        // Kitty keyboard protocol lets Shift+Enter be told apart from Enter;
        // terminals that don't support it ignore the request
        execute!(
            stdout(),
            EnableMouseCapture,
            EnableBracketedPaste,
            Show,
            SetCursorStyle::SteadyBlock, // Non-blinking: avoids blink timer reset from continuous redraws
            PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES
                    | KeyboardEnhancementFlags::REPORT_EVENT_TYPES
            )
        )?;
        info!("Terminal modes enabled (mouse, bracketed paste, keyboard enhancement)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(
            stdout(),
            PopKeyboardEnhancementFlags,
            DisableMouseCapture,
            DisableBracketedPaste,
            SetCursorStyle::DefaultUserShape
        );
    }
}

/// Build the HTTP endpoint from a resolved config.
pub fn build_endpoint(config: &ResolvedConfig) -> Result<Arc<dyn ChatEndpoint>, EndpointError> {
    Ok(Arc::new(HttpEndpoint::from_config(config)?))
}

/// State at startup: empty transcript, or just the greeting when one is configured.
fn initial_state(config: &ResolvedConfig, endpoint_label: &str) -> TuiState {
    let mut tui = TuiState::new(&config.title, &config.assistant_name, endpoint_label);
    if let Some(greeting) = &config.greeting {
        tui.append_message(&Message::assistant(greeting.as_str()));
    }
    tui
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let endpoint = build_endpoint(&config).map_err(std::io::Error::other)?;
    info!("Using endpoint {}", endpoint.name());

    let mut controller = ChatController::new();
    let mut tui = initial_state(&config, endpoint.name());

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    // Channel for results from background tasks
    let (tx, rx) = mpsc::channel();
    spawn_health_check(endpoint.clone(), tx.clone());

    let start_time = Instant::now();
    let mut needs_redraw = true; // Force first frame

    let result = loop {
        let animating = controller.is_awaiting();
        if animating {
            needs_redraw = true;
        }

        if needs_redraw {
            let spinner_frame = (start_time.elapsed().as_secs_f32() * 4.0) as usize;
            if let Err(e) = terminal.draw(|f| ui::draw_ui(f, &mut tui, spinner_frame)) {
                break Err(e);
            }
            needs_redraw = false;
        }

        // Dynamic poll timeout: short when animating (~12fps), long when idle
        let timeout = if animating {
            Duration::from_millis(80)
        } else {
            Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            match handle_event(&mut tui, &mut controller, event) {
                LoopAction::Continue => {}
                LoopAction::Quit => {
                    should_quit = true;
                    break;
                }
                LoopAction::Send(text) => spawn_request(endpoint.clone(), text, tx.clone()),
            }
        }
        if should_quit {
            break Ok(());
        }

        while let Ok(event) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", event);
            handle_background(&mut tui, &mut controller, event);
        }
    };

    ratatui::restore();
    info!("Sukoon shutting down");
    result
}

fn spawn_request(endpoint: Arc<dyn ChatEndpoint>, text: String, tx: mpsc::Sender<BackgroundEvent>) {
    info!("Spawning chat request");
    tokio::spawn(async move {
        let started = Instant::now();
        let outcome = endpoint.send(&text).await;
        debug!(
            "Chat request finished in {}ms (ok={})",
            started.elapsed().as_millis(),
            outcome.is_ok()
        );
        if tx.send(BackgroundEvent::Reply(outcome)).is_err() {
            warn!("Failed to deliver chat reply: receiver dropped");
        }
    });
}

fn spawn_health_check(endpoint: Arc<dyn ChatEndpoint>, tx: mpsc::Sender<BackgroundEvent>) {
    tokio::spawn(async move {
        let result = endpoint.health().await;
        match &result {
            Ok(()) => info!("Endpoint healthy"),
            Err(e) => warn!("Endpoint health check failed: {}", e),
        }
        if tx.send(BackgroundEvent::Health(result)).is_err() {
            warn!("Failed to deliver health result: receiver dropped");
        }
    });
}
