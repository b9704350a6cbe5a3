//! # Messages
//!
//! A `Message` is built by the controller at submit time (`Role::User`) or
//! when the endpoint answers (`Role::Assistant`), then handed straight to the
//! transcript renderer. The controller keeps no copy.

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    /// Lowercase tag used in log lines.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub role: Role,
    pub text: String,
}

impl Message {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            text: text.into(),
        }
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            text: text.into(),
        }
    }
}
