//! Settings blocks and OS-aware shape classification.
//!
//! A [`SettingsBlock`] is a JSON-object-shaped mapping of setting names to
//! values, as supplied by a host scope (view, window, or the application
//! settings resource). A block may carry per-platform sub-blocks keyed by the
//! fixed platform identifiers (`osx`, `windows`, `linux`), in which case the
//! platform-specific value for a setting takes priority over a flat value in
//! the same block.
//!
//! Shape classification is all-or-nothing: if any platform key maps to
//! something other than an object, the whole block is ignored rather than
//! partially honored.

use serde_json::{Map, Value};

/// The fixed set of platform identifiers recognized in OS-specific sub-blocks.
pub const PLATFORM_KEYS: [&str; 3] = ["osx", "windows", "linux"];

/// A platform identifier from the fixed 3-element platform set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Osx,
    Windows,
    Linux,
}

impl Platform {
    /// The platform the current build targets.
    pub fn current() -> Self {
        if cfg!(target_os = "macos") {
            Platform::Osx
        } else if cfg!(target_os = "windows") {
            Platform::Windows
        } else {
            Platform::Linux
        }
    }

    /// The settings key used for this platform's sub-block.
    pub fn key(self) -> &'static str {
        match self {
            Platform::Osx => "osx",
            Platform::Windows => "windows",
            Platform::Linux => "linux",
        }
    }
}

/// How a settings block is structured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockShape {
    /// Plain name-to-value mapping with no platform sub-blocks.
    Flat,
    /// All three platform keys are present and map to objects.
    OsAware,
    /// At least one platform key maps to a non-object; the block is
    /// treated as absent in its entirety.
    Malformed,
}

/// A single resolved lookup inside a block.
#[derive(Debug, Clone, Copy)]
pub struct Lookup<'a> {
    /// The raw settings value; callers type-check it for their semantics.
    pub value: &'a Value,
    /// Whether the value came from a platform-specific sub-block.
    pub os_specific: bool,
}

/// A settings block read from a host scope.
///
/// # Example
///
/// ```
/// use golangconfig::settings::{Platform, SettingsBlock};
/// use serde_json::json;
///
/// let block = SettingsBlock::from_value(&json!({"GOPATH": "/go"})).unwrap();
/// let found = block.get("GOPATH", Platform::current()).unwrap();
/// assert_eq!(found.value.as_str(), Some("/go"));
/// assert!(!found.os_specific);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SettingsBlock {
    values: Map<String, Value>,
}

impl SettingsBlock {
    /// Create a block from a JSON object map.
    pub fn new(values: Map<String, Value>) -> Self {
        Self { values }
    }

    /// Create a block from a JSON value, if it is an object.
    pub fn from_value(value: &Value) -> Option<Self> {
        value.as_object().map(|map| Self::new(map.clone()))
    }

    /// Classify the shape of this block.
    ///
    /// Evaluated eagerly per lookup rather than inferred ad hoc per key, so
    /// a malformed platform sub-block disables the whole block.
    pub fn shape(&self) -> BlockShape {
        let present: Vec<&Value> = PLATFORM_KEYS
            .iter()
            .filter_map(|key| self.values.get(*key))
            .collect();
        if present.is_empty() {
            return BlockShape::Flat;
        }
        if present.iter().any(|value| !value.is_object()) {
            return BlockShape::Malformed;
        }
        if present.len() == PLATFORM_KEYS.len() {
            BlockShape::OsAware
        } else {
            // Incomplete platform coverage never makes a block OS-aware;
            // the platform keys are ignored as setting names.
            BlockShape::Flat
        }
    }

    /// Look up a setting in this block.
    ///
    /// For an OS-aware block the platform-specific sub-block is consulted
    /// first, then any explicit non-platform key at the top level. A
    /// malformed block never yields a value.
    pub fn get(&self, name: &str, platform: Platform) -> Option<Lookup<'_>> {
        if PLATFORM_KEYS.contains(&name) {
            return None;
        }
        match self.shape() {
            BlockShape::Malformed => None,
            BlockShape::OsAware => {
                if let Some(Value::Object(sub)) = self.values.get(platform.key()) {
                    if let Some(value) = sub.get(name) {
                        return Some(Lookup {
                            value,
                            os_specific: true,
                        });
                    }
                }
                self.values.get(name).map(|value| Lookup {
                    value,
                    os_specific: false,
                })
            }
            BlockShape::Flat => self.values.get(name).map(|value| Lookup {
                value,
                os_specific: false,
            }),
        }
    }

    /// Check if the block has no entries.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Human-readable name of a JSON value's type, for diagnostics.
pub(crate) fn value_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
