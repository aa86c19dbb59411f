//! Error types for shadow payload decoding.

use thiserror::Error;

/// Errors that can occur while decoding an incoming payload.
///
/// Encoding never fails: the [`Value`](crate::Value) model is exhaustive and
/// every variant has a wire rendering.
#[derive(Error, Debug)]
pub enum JsonError {
    /// The input string was not valid JSON.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// An update batch must be a top-level JSON array.
    #[error("expected a top-level JSON array, got {0}")]
    ExpectedArray(&'static str),
}

/// Convenience alias used throughout shadow-json.
pub type Result<T> = std::result::Result<T, JsonError>;
