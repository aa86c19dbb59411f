//! The versioned reported/desired shadow document.
//!
//! One fixed demo device lives in memory for the whole process. The document
//! is created seeded, mutated exclusively through [`ShadowDocument::apply`],
//! and reseeded by [`ShadowDocument::reset`] when the bundle-lifecycle
//! collaborator activates a new bundle. Nothing is persisted.

use shadow_json::{Value, ValueMap};

/// Seed `reported` state for the demo device.
fn seed_reported() -> ValueMap {
    [
        ("powerSwitch", Value::Int(0)),
        ("workMode", Value::Int(1)),
        ("windSpeed", Value::Int(3)),
        ("temperatureType", Value::Int(0)),
        ("currentTemperature", Value::Int(26)),
        ("targetTemperature", Value::Int(26)),
        ("swingWind", Value::Int(0)),
        ("sleep", Value::Int(0)),
        ("errorCodeArr", Value::List(Vec::new())),
    ]
    .into_iter()
    .collect()
}

/// Seed `desired` state for the demo device.
fn seed_desired() -> ValueMap {
    [
        ("powerSwitch", Value::Int(0)),
        ("workMode", Value::Int(1)),
        ("windSpeed", Value::Int(3)),
        ("targetTemperature", Value::Int(26)),
    ]
    .into_iter()
    .collect()
}

/// Immutable copy of the document state at one point in time.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub reported: ValueMap,
    pub desired: ValueMap,
    pub version: i64,
}

/// The reported/desired/version state structure for the simulated device.
///
/// `reported` and `desired` key sets are independent; a key may exist in one
/// without the other. `version` starts at 1 and only ever increases, by
/// exactly 1 per applied non-empty change set.
#[derive(Debug)]
pub struct ShadowDocument {
    reported: ValueMap,
    desired: ValueMap,
    version: i64,
}

impl ShadowDocument {
    /// A fresh document in seed state at version 1.
    pub fn new() -> Self {
        Self {
            reported: seed_reported(),
            desired: seed_desired(),
            version: 1,
        }
    }

    pub fn version(&self) -> i64 {
        self.version
    }

    /// Immutable copy of the current state. Never fails.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            reported: self.reported.clone(),
            desired: self.desired.clone(),
            version: self.version,
        }
    }

    /// Replaces both maps with seed values and sets the version back to 1.
    /// Idempotent.
    pub fn reset(&mut self) {
        self.reported = seed_reported();
        self.desired = seed_desired();
        self.version = 1;
    }

    /// Writes every key of `change_set` into **both** `reported` and
    /// `desired`, in iteration order, and returns the changed set.
    ///
    /// A key counts as changed because it was present in the input, not
    /// because its value differs from what was stored before — the simulated
    /// protocol does no delta diffing, and its consumers depend on that.
    /// An empty input leaves the document untouched.
    pub fn apply(&mut self, change_set: &ValueMap) -> ValueMap {
        let mut changed = ValueMap::new();
        for (key, value) in change_set.iter() {
            self.desired.insert(key, value.clone());
            self.reported.insert(key, value.clone());
            changed.insert(key, value.clone());
        }
        changed
    }

    /// Increments the version by 1 iff `changed` is non-empty.
    pub fn bump_version_if_changed(&mut self, changed: &ValueMap) {
        if !changed.is_empty() {
            self.version += 1;
        }
    }
}

impl Default for ShadowDocument {
    fn default() -> Self {
        Self::new()
    }
}
