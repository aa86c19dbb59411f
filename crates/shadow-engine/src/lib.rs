//! # shadow-engine
//!
//! In-process simulator of a cloud IoT device-shadow protocol: a versioned
//! `reported`/`desired` state document, partial update batches merged under
//! defined precedence rules, a monotonic version counter, and an
//! acknowledgment event describing exactly what changed.
//!
//! The engine has no network or broker connectivity. The host collaborator
//! (bridge, launcher, CLI) feeds decoded request batches in and receives
//! acknowledgments through the [`Emitter`] port.
//!
//! ## Modules
//!
//! - [`document`] — the versioned reported/desired shadow document
//! - [`processor`] — update-batch normalization (flattening, aliasing, last-write-wins)
//! - [`ack`] — acknowledgment event construction + best-effort dispatch port
//! - [`query`] — full-state GET response payload
//! - [`service`] — the process-wide facade owning the document and its lock
//! - [`error`] — error types

pub mod ack;
pub mod document;
pub mod error;
pub mod processor;
pub mod query;
pub mod service;

pub use ack::{AckEmitter, Emitter, REMOTE_MESSAGE_EVENT};
pub use document::{ShadowDocument, Snapshot};
pub use error::EmitError;
pub use processor::normalize_batch;
pub use query::shadow_payload;
pub use service::{ShadowService, DEVICE_ID};
