//! External text generation.
//!
//! The only I/O-bound, potentially failing part of the pipeline: one
//! prompt-in/text-out call per chart. Failures are request-scoped and
//! never retried; the caller surfaces them as a generation failure with
//! the upstream message attached.

pub mod client;
pub mod gemini_types;
pub mod parser;
pub mod prompt;

pub use client::*;
pub use parser::*;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("generation service is not configured (missing API key)")]
    NotConfigured,

    #[error("cannot reach generation service at {0}")]
    Connection(String),

    #[error("generation request timed out after {0}s")]
    Timeout(u64),

    #[error("generation service returned error (status {status}): {body}")]
    Upstream { status: u16, body: String },

    #[error("HTTP client error: {0}")]
    HttpClient(String),

    #[error("response parsing error: {0}")]
    ResponseParsing(String),

    #[error("generation service returned no candidates")]
    EmptyResponse,
}
