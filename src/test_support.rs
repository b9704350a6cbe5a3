//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::core::message::Message;
use crate::core::surface::{ErrorSurface, InputSurface, TranscriptRenderer};
use crate::endpoint::{ChatEndpoint, EndpointError};

/// Ordered log shared between a surface and an endpoint, so tests can see
/// exactly where the network call fell among the render commands.
pub type Journal = Arc<Mutex<Vec<String>>>;

pub fn journal() -> Journal {
    Arc::new(Mutex::new(Vec::new()))
}

fn record(journal: &Option<Journal>, entry: String) {
    if let Some(journal) = journal {
        journal.lock().unwrap().push(entry);
    }
}

/// A surface that keeps everything it is told in plain fields.
pub struct RecordingSurface {
    pub transcript: Vec<Message>,
    pub composing: bool,
    pub placeholder_removals: usize,
    pub error: Option<String>,
    pub submit_enabled: bool,
    pub input_clears: usize,
    pub focus_requests: usize,
    journal: Option<Journal>,
}

impl Default for RecordingSurface {
    fn default() -> Self {
        Self {
            transcript: Vec::new(),
            composing: false,
            placeholder_removals: 0,
            error: None,
            submit_enabled: true,
            input_clears: 0,
            focus_requests: 0,
            journal: None,
        }
    }
}

impl RecordingSurface {
    pub fn with_journal(journal: Journal) -> Self {
        Self {
            journal: Some(journal),
            ..Default::default()
        }
    }
}

impl TranscriptRenderer for RecordingSurface {
    fn append_message(&mut self, message: &Message) {
        record(
            &self.journal,
            format!("append:{}:{}", message.role.as_str(), message.text),
        );
        self.transcript.push(message.clone());
    }

    fn show_composing_placeholder(&mut self) {
        assert!(!self.composing, "placeholder shown twice");
        record(&self.journal, "composing:on".to_string());
        self.composing = true;
    }

    fn remove_composing_placeholder(&mut self) {
        assert!(self.composing, "placeholder removed while absent");
        record(&self.journal, "composing:off".to_string());
        self.composing = false;
        self.placeholder_removals += 1;
    }
}

impl ErrorSurface for RecordingSurface {
    fn show_error(&mut self, text: &str) {
        record(&self.journal, format!("show_error:{text}"));
        self.error = Some(text.to_string());
    }

    fn clear_error(&mut self) {
        record(&self.journal, "clear_error".to_string());
        self.error = None;
    }
}

impl InputSurface for RecordingSurface {
    fn clear_input(&mut self) {
        record(&self.journal, "clear_input".to_string());
        self.input_clears += 1;
    }

    fn focus_input(&mut self) {
        record(&self.journal, "focus_input".to_string());
        self.focus_requests += 1;
    }

    fn set_submit_enabled(&mut self, enabled: bool) {
        record(&self.journal, format!("submit_enabled:{enabled}"));
        self.submit_enabled = enabled;
    }
}

/// An endpoint that answers from a fixed script, one outcome per call.
pub struct ScriptedEndpoint {
    outcomes: Mutex<VecDeque<Result<String, EndpointError>>>,
    calls: Mutex<Vec<String>>,
    journal: Option<Journal>,
}

impl ScriptedEndpoint {
    pub fn new(outcomes: Vec<Result<String, EndpointError>>) -> Self {
        Self {
            outcomes: Mutex::new(outcomes.into()),
            calls: Mutex::new(Vec::new()),
            journal: None,
        }
    }

    pub fn with_journal(mut self, journal: Journal) -> Self {
        self.journal = Some(journal);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ChatEndpoint for ScriptedEndpoint {
    fn name(&self) -> &str {
        "scripted"
    }

    async fn send(&self, message: &str) -> Result<String, EndpointError> {
        record(&self.journal, format!("send:{message}"));
        self.calls.lock().unwrap().push(message.to_string());
        self.outcomes
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(EndpointError::Network("script exhausted".to_string())))
    }
}
