//! Update-batch normalization.
//!
//! Incoming batches arrive as an ordered sequence of request documents in one
//! of two shapes per element:
//!
//! ```text
//! {"state":{"desired":{<key>:<value>, ...}}}   // nested form
//! {<key>:<value>, ...}                          // flat fallback form
//! ```
//!
//! Normalization is permissive-by-design: requests missing `state`/`desired`
//! fall back to flat application, and non-map elements contribute nothing.

use shadow_json::{Value, ValueMap};
use tracing::debug;

/// Wire alias accepted for the target temperature key.
const TARGET_CELSIUS_KEY: &str = "targetCelsiusDegree";
const TARGET_TEMPERATURE_KEY: &str = "targetTemperature";

/// Collapses a batch of request documents into a single ordered change set.
///
/// Per request, in order: the nested `state.desired` map is flattened one
/// level (maps inside `desired` stay map values); otherwise every top-level
/// entry of the request itself is taken. Later requests overwrite earlier
/// ones key-by-key; within one request, map iteration order decides.
pub fn normalize_batch(batch: &[Value]) -> ValueMap {
    let mut change_set = ValueMap::new();
    for request in batch {
        let Some(map) = request.as_map() else {
            debug!("skipping non-map update request ({})", request.kind_name());
            continue;
        };
        if let Some(desired) = nested_desired(map) {
            for (key, value) in desired.iter() {
                insert_change(&mut change_set, key, value);
            }
            continue;
        }
        // Flat fallback: the request itself carries the key/value pairs.
        for (key, value) in map.iter() {
            insert_change(&mut change_set, key, value);
        }
    }
    change_set
}

/// The inner `state.desired` map when the request uses the nested form.
/// Only one level is unwrapped.
fn nested_desired(request: &ValueMap) -> Option<&ValueMap> {
    request.get("state")?.as_map()?.get("desired")?.as_map()
}

/// Inserts one entry, rewriting the `targetCelsiusDegree` alias so the
/// original key never reaches the change set. Aliased values must be
/// numeric (floats truncate to whole degrees); anything else is dropped.
fn insert_change(change_set: &mut ValueMap, key: &str, value: &Value) {
    if key == TARGET_CELSIUS_KEY {
        let degrees = match value {
            Value::Int(i) => *i,
            Value::Float(f) => *f as i64,
            other => {
                debug!(
                    "dropping non-numeric {TARGET_CELSIUS_KEY} value ({})",
                    other.kind_name()
                );
                return;
            }
        };
        change_set.insert(TARGET_TEMPERATURE_KEY, Value::Int(degrees));
        return;
    }
    change_set.insert(key, value.clone());
}
