//! Wire codec — minimal JSON with the simulator's exact formatting rules.
//!
//! The encoder is bit-exact for wire compatibility with the protocol's
//! existing consumers:
//!
//! - `Null` → `null`, `Bool` → `true`/`false`
//! - `Int`/`Float` → the platform's default decimal rendering (`Display`)
//! - `String` → double-quoted, with **only** `\` and `"` escaped — no
//!   control-character or unicode escaping
//! - `List`/`Map` → comma-joined elements, map keys in insertion order
//! - no pretty-printing, no added whitespace
//!
//! Decoding goes through `serde_json` (with `preserve_order`) as the
//! intermediate representation and converts into the [`Value`] model.
//!
//! [`pretty_batch`] is a separate one-line-per-element formatter used only
//! for human-readable display of outgoing request payloads; it never appears
//! on the protocol path.

use crate::error::{JsonError, Result};
use crate::value::{Value, ValueMap};

/// Encode a value to its minimal wire form. Infallible: every [`Value`]
/// variant has a rendering.
pub fn encode(value: &Value) -> String {
    let mut out = String::new();
    encode_value(value, &mut out);
    out
}

/// Encode a bare map as a JSON object, without cloning it into a [`Value`].
/// Used for map-shaped payload fragments (changed sets, state sections).
pub fn encode_map(map: &ValueMap) -> String {
    let mut out = String::new();
    encode_map_value(map, &mut out);
    out
}

fn encode_value(value: &Value, out: &mut String) {
    match value {
        Value::Null => out.push_str("null"),
        Value::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        Value::Int(i) => out.push_str(&i.to_string()),
        Value::Float(f) => out.push_str(&f.to_string()),
        Value::String(s) => encode_string(s, out),
        Value::List(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                encode_value(item, out);
            }
            out.push(']');
        }
        Value::Map(map) => encode_map_value(map, out),
    }
}

fn encode_map_value(map: &ValueMap, out: &mut String) {
    out.push('{');
    let mut first = true;
    for (key, value) in map.iter() {
        if !first {
            out.push(',');
        }
        first = false;
        encode_string(key, out);
        out.push(':');
        encode_value(value, out);
    }
    out.push('}');
}

/// Emit a double-quoted string escaping only backslash and double quote.
fn encode_string(s: &str, out: &mut String) {
    out.push('"');
    for ch in s.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            _ => out.push(ch),
        }
    }
    out.push('"');
}

/// Decode a JSON string into a [`Value`].
///
/// Accepts anything `serde_json` accepts; map insertion order is preserved.
pub fn decode(json: &str) -> Result<Value> {
    let parsed: serde_json::Value = serde_json::from_str(json)?;
    Ok(Value::from(parsed))
}

/// Decode an update batch: a top-level JSON array of request documents.
///
/// Elements are returned as-is; request-shape validation (nested vs. flat
/// form, non-map elements) is the update processor's concern.
pub fn decode_batch(json: &str) -> Result<Vec<Value>> {
    match decode(json)? {
        Value::List(items) => Ok(items),
        other => Err(JsonError::ExpectedArray(other.kind_name())),
    }
}

/// Human-readable rendering of an outgoing request batch: one compactly
/// encoded element per line inside the brackets.
///
/// This is the debug display used when logging outgoing payloads. The shadow
/// protocol itself always uses [`encode`].
pub fn pretty_batch(batch: &[Value]) -> String {
    let mut out = String::from("[\n");
    for (i, item) in batch.iter().enumerate() {
        out.push_str("  ");
        out.push_str(&encode(item));
        if i + 1 < batch.len() {
            out.push(',');
        }
        out.push('\n');
    }
    out.push(']');
    out
}
