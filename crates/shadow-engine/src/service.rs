//! Process-wide shadow service: the document, its lock, and the ack path.
//!
//! All reads and mutations of the shadow document go through one mutex, so no
//! snapshot ever observes a partially applied change set and concurrent
//! applies are fully serialized. Acknowledgment dispatch happens after the
//! document lock is released but still in application order (see
//! [`ShadowService::apply_update_batch`]).

use std::sync::{Arc, Mutex};

use shadow_json::{pretty_batch, Value};
use tracing::info;

use crate::ack::{AckEmitter, Emitter};
use crate::document::{ShadowDocument, Snapshot};
use crate::processor;
use crate::query;

/// The single simulated device. There is no multi-device addressing.
pub const DEVICE_ID: &str = "debug-device-1";

/// Request paths containing this fragment are routed into the shadow engine.
const SHADOW_UPDATE_PATH: &str = "shadow/update";

/// Owns the shadow document for the lifetime of the process.
///
/// Explicitly constructed once by the host rather than living in a global;
/// the host calls [`reset`](Self::reset) whenever a new bundle package is
/// installed or activated, before any new request is processed.
pub struct ShadowService {
    doc: Mutex<ShadowDocument>,
    // Chained onto while `doc` is still held so acks leave in apply order.
    emit_lock: Mutex<()>,
    ack: AckEmitter,
}

impl ShadowService {
    pub fn new(sink: Arc<dyn Emitter>) -> Self {
        Self {
            doc: Mutex::new(ShadowDocument::new()),
            emit_lock: Mutex::new(()),
            ack: AckEmitter::new(sink),
        }
    }

    /// Reinitializes the document to seed state at version 1. Idempotent.
    pub fn reset(&self) {
        self.doc
            .lock()
            .expect("shadow document lock poisoned")
            .reset();
    }

    /// Immutable copy of the current document state.
    pub fn snapshot(&self) -> Snapshot {
        self.doc
            .lock()
            .expect("shadow document lock poisoned")
            .snapshot()
    }

    /// Full-state GET response for the host bridge.
    ///
    /// `device_id` is diagnostic/logging context only and is never embedded
    /// in the payload body — existing consumers rely on that asymmetry.
    pub fn get_shadow_payload(&self, device_id: &str) -> String {
        let payload = query::shadow_payload(&self.snapshot());
        info!("GET $aws/things/{device_id}/shadow -> {payload}");
        payload
    }

    /// Normalizes one update batch, merges it into the document, and
    /// dispatches the acknowledgment.
    ///
    /// An empty accumulated change set is a complete no-op: no merge, no
    /// version bump, no emission.
    pub fn apply_update_batch(&self, batch: &[Value]) {
        let change_set = processor::normalize_batch(batch);
        if change_set.is_empty() {
            return;
        }

        let mut doc = self.doc.lock().expect("shadow document lock poisoned");
        let changed = doc.apply(&change_set);
        doc.bump_version_if_changed(&changed);
        let version = doc.version();
        // Take the emit lock before releasing the document lock so
        // acknowledgments cannot overtake each other under concurrent applies.
        let emit_guard = self.emit_lock.lock().expect("emit lock poisoned");
        drop(doc);

        self.ack.emit(DEVICE_ID, &changed, version);
        drop(emit_guard);
    }

    /// Host-bridge entry point for outgoing request payloads.
    ///
    /// Logs the payload in the human-readable debug form, then routes it into
    /// the engine iff the path addresses a shadow update. Other paths are
    /// display-only.
    pub fn send_message(&self, path: &str, payload: &[Value]) {
        info!("SEND path={path} payload={}", pretty_batch(payload));
        if path.contains(SHADOW_UPDATE_PATH) {
            self.apply_update_batch(payload);
        }
    }
}
