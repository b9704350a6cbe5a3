//! # TUI Components
//!
//! All UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Display components that receive all data as fields:
//! - `TitleBar`: widget title, endpoint, health status
//! - `MessageView` / `ComposingIndicator`: one transcript entry
//! - `ErrorBar`: the error surface, hidden when empty
//!
//! ### Stateful Components (Event-Driven)
//!
//! Components that manage local state and emit events:
//! - `InputBox`: text input with the submit affordance
//! - `MessageList`: scrollable transcript over `MessageListState`
//!
//! Components receive external data as props, never by reaching into global
//! state, so each one can be rendered against a `TestBackend` on its own.
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs           (this file)
//! ├── title_bar.rs     (Top status bar)
//! ├── message.rs       (Single message + composing placeholder)
//! ├── message_list.rs  (Scrollable transcript)
//! ├── error_bar.rs     (Error surface)
//! └── input_box/       (Text input)
//! ```

pub mod error_bar;
pub mod input_box;
pub mod message;
pub mod message_list;
pub mod title_bar;

pub use error_bar::ErrorBar;
pub use input_box::{InputBox, InputEvent};
pub use message_list::{MessageList, MessageListState};
pub use title_bar::{EndpointStatus, TitleBar};
