//! # shadow-json
//!
//! Value model and minimal JSON wire codec for the device-shadow simulator.
//!
//! Payloads exchanged with the simulated shadow protocol are JSON-like trees.
//! This crate models them as a [`Value`] tagged union with an
//! insertion-ordered [`ValueMap`] for objects, and provides two distinct
//! renderings:
//!
//! - the **wire codec** ([`encode`]/[`decode`]) with bit-exact formatting
//!   rules required for compatibility with the protocol's existing consumers
//! - the **pretty debug formatter** ([`pretty_batch`]), used only for
//!   human-readable display of outgoing request payloads
//!
//! ## Quick start
//!
//! ```rust
//! use shadow_json::{decode, encode};
//!
//! let value = decode(r#"{"powerSwitch":1,"errorCodeArr":[]}"#).unwrap();
//! assert_eq!(encode(&value), r#"{"powerSwitch":1,"errorCodeArr":[]}"#);
//! ```
//!
//! ## Modules
//!
//! - [`value`] — `Value` tagged union + insertion-ordered `ValueMap`
//! - [`codec`] — wire encoder/decoder + pretty debug formatter
//! - [`error`] — error types for decode failures

pub mod codec;
pub mod error;
pub mod value;

pub use codec::{decode, decode_batch, encode, encode_map, pretty_batch};
pub use error::JsonError;
pub use value::{Value, ValueMap};
