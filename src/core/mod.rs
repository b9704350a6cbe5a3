//! # Core Chat Logic
//!
//! This module contains Sukoon's interaction logic.
//! It knows nothing about any specific UI technology or transport.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Controller (state)   │
//!                    │  • RenderCommand        │
//!                    │  • Surface traits       │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!            ┌───────────────────┼───────────────────┐
//!            ▼                   ▼                   ▼
//!     ┌────────────┐      ┌────────────┐      ┌────────────┐
//!     │    TUI     │      │ ChatWidget │      │  Endpoint  │
//!     │  Adapter   │      │  (async    │      │  (HTTP)    │
//!     │ (ratatui)  │      │   driver)  │      │            │
//!     └────────────┘      └────────────┘      └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`message`]: `Role` and `Message`, the unit handed to renderers
//! - [`controller`]: `ChatController`, the submit-cycle state machine
//! - [`surface`]: collaborator traits render commands are applied to
//! - [`markup`]: the inline line-break / bold conversions
//! - [`widget`]: `ChatWidget`, one full submit cycle per `submit().await`
//! - [`config`]: layered configuration

pub mod config;
pub mod controller;
pub mod markup;
pub mod message;
pub mod surface;
pub mod widget;
