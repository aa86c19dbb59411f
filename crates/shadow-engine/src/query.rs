//! Full-state GET response payload.

use shadow_json::{encode, Value, ValueMap};

use crate::document::Snapshot;

/// Encodes a snapshot in the fixed query-response shape:
///
/// ```text
/// {"state":{"reported":{...},"desired":{...}},"metadata":{},"version":N}
/// ```
///
/// `metadata` is always empty — the simulator tracks no per-field timestamps.
pub fn shadow_payload(snapshot: &Snapshot) -> String {
    let mut state = ValueMap::new();
    state.insert("reported", Value::Map(snapshot.reported.clone()));
    state.insert("desired", Value::Map(snapshot.desired.clone()));

    let mut root = ValueMap::new();
    root.insert("state", Value::Map(state));
    root.insert("metadata", Value::Map(ValueMap::new()));
    root.insert("version", Value::Int(snapshot.version));
    encode(&Value::Map(root))
}
