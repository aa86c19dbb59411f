//! Acknowledgment event construction and best-effort dispatch.
//!
//! Every applied non-empty change set produces one outbound event under the
//! fixed name [`REMOTE_MESSAGE_EVENT`], carrying only the changed fields —
//! not the full document — plus the new version and a client token derived
//! from the device id.

use std::sync::Arc;

use shadow_json::{codec, Value, ValueMap};
use tracing::{error, info};

use crate::error::EmitError;

/// The single event name under which acknowledgments are dispatched.
pub const REMOTE_MESSAGE_EVENT: &str = "onRemoteMessage";

/// Outbound event sink implemented by the host/bridge collaborator.
///
/// The engine depends only on this port, never on host-runtime internals.
pub trait Emitter: Send + Sync {
    fn send(&self, event: &str, payload: &Value) -> Result<(), EmitError>;
}

/// Builds and dispatches acknowledgment events through a registered sink.
pub struct AckEmitter {
    sink: Arc<dyn Emitter>,
}

impl AckEmitter {
    pub fn new(sink: Arc<dyn Emitter>) -> Self {
        Self { sink }
    }

    /// Dispatches the acknowledgment for a non-empty changed set.
    ///
    /// The event payload is `{"topic": ..., "msgBody": ...}` where `msgBody`
    /// is itself JSON text embedded as a string value — consumers expect the
    /// double encoding. Dispatch is best-effort: sink failures are logged and
    /// swallowed so the state mutation they acknowledge is never rolled back.
    pub fn emit(&self, device_id: &str, changed: &ValueMap, version: i64) {
        let body = format!(
            "{{\"current\":{{\"state\":{{\"reported\":{}}},\"version\":{}}},\"clientToken\":\"device_{}\"}}",
            codec::encode_map(changed),
            version,
            device_id,
        );
        let mut wrapper = ValueMap::new();
        wrapper.insert(
            "topic",
            Value::String(format!("$aws/things/{device_id}/shadow/get/accepted")),
        );
        wrapper.insert("msgBody", Value::String(body.clone()));

        match self.sink.send(REMOTE_MESSAGE_EVENT, &Value::Map(wrapper)) {
            Ok(()) => info!("EMIT {REMOTE_MESSAGE_EVENT} amazon-accepted: {body}"),
            Err(e) => error!("failed to emit amazon-accepted ack: {e}"),
        }
    }
}
