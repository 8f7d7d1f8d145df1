//! Block data payloads
//!
//! Block data is schemaless on the wire: each block type declares its own
//! shape and reads the fields it cares about. `DataExt` gives renderers
//! typed access where absent or mistyped fields come back as `None`.

use serde_json::{Map, Value};

/// Data payload of a block, keyed by field name
pub type BlockData = Map<String, Value>;

/// Typed field access for [`BlockData`]
pub trait DataExt {
    /// Non-empty string field
    fn str_field(&self, key: &str) -> Option<&str>;
    fn bool_field(&self, key: &str) -> Option<bool>;
    fn u64_field(&self, key: &str) -> Option<u64>;
    fn array_field(&self, key: &str) -> Option<&Vec<Value>>;

    /// String field with a fallback for absent or empty values
    fn str_or<'a>(&'a self, key: &str, fallback: &'a str) -> &'a str {
        self.str_field(key).unwrap_or(fallback)
    }
}

impl DataExt for BlockData {
    fn str_field(&self, key: &str) -> Option<&str> {
        self.get(key)
            .and_then(Value::as_str)
            .filter(|s| !s.trim().is_empty())
    }

    fn bool_field(&self, key: &str) -> Option<bool> {
        self.get(key).and_then(Value::as_bool)
    }

    fn u64_field(&self, key: &str) -> Option<u64> {
        match self.get(key)? {
            Value::Number(n) => n.as_u64(),
            // Editors frequently persist numeric inputs as strings
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    fn array_field(&self, key: &str) -> Option<&Vec<Value>> {
        self.get(key).and_then(Value::as_array)
    }
}
