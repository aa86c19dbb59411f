//! Error types for the shadow engine.

use thiserror::Error;

/// Delivery failure reported by an [`Emitter`](crate::ack::Emitter) sink.
///
/// Emission is best-effort: the engine logs these and never propagates them
/// to the caller of `apply` — the state mutation and the acknowledgment are
/// decoupled failure domains.
#[derive(Error, Debug)]
#[error("ack emission failed: {0}")]
pub struct EmitError(pub String);
