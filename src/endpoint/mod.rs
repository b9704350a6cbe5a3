pub mod client;
pub mod http;
pub mod types;

pub use client::{ChatEndpoint, EndpointError, GENERIC_ERROR_TEXT};
pub use http::HttpEndpoint;
pub use types::{ChatRequest, ChatResponse};
