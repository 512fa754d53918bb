//! HTTP transport layer — `BybitHttp` with retry policies and the shared
//! response envelope.

pub mod client;
pub mod envelope;
pub mod retry;

pub use client::BybitHttp;
pub use envelope::{ApiResponse, CommonResponse};
pub use retry::{RetryConfig, RetryPolicy};
