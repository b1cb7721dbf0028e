//! Typed reads over an untyped MCP arguments mapping.
//!
//! Every accessor returns `None` both when the key is absent and when the
//! value has the wrong shape; `null` counts as absent. Whether `None` means
//! "use the default" or "reject the call" is up to the extractor.

use serde_json::Value;

/// Arguments mapping as delivered by the tool-call protocol.
pub type ArgMap = serde_json::Map<String, Value>;

/// Read-only view over an [`ArgMap`].
#[derive(Clone, Copy, Debug)]
pub struct Args<'a> {
    map: &'a ArgMap,
}

impl<'a> Args<'a> {
    /// Wraps an arguments mapping.
    #[must_use]
    pub fn new(map: &'a ArgMap) -> Self {
        Self { map }
    }

    /// Views a sequence element or nested value as a mapping.
    #[must_use]
    pub fn from_value(value: &'a Value) -> Option<Self> {
        value.as_object().map(Self::new)
    }

    /// Returns the text under `key`.
    #[must_use]
    pub fn text(&self, key: &str) -> Option<&'a str> {
        self.map.get(key).and_then(Value::as_str)
    }

    /// Returns the text under `key` only if it is non-empty.
    #[must_use]
    pub fn non_empty_text(&self, key: &str) -> Option<&'a str> {
        self.text(key).filter(|value| !value.is_empty())
    }

    /// Returns an owned copy of non-empty text under `key`.
    ///
    /// Optional text fields use this, so an empty string and an absent key
    /// produce the same record.
    #[must_use]
    pub fn optional_text(&self, key: &str) -> Option<String> {
        self.non_empty_text(key).map(str::to_owned)
    }

    /// Returns the number under `key` truncated toward zero.
    ///
    /// The protocol carries every number as a float. Values outside the
    /// `i64` range saturate.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn whole_number(&self, key: &str) -> Option<i64> {
        let Value::Number(number) = self.map.get(key)? else {
            return None;
        };
        if let Some(whole) = number.as_i64() {
            return Some(whole);
        }
        number.as_f64().map(|float| float.trunc() as i64)
    }

    /// Returns the nested mapping under `key`.
    #[must_use]
    pub fn mapping(&self, key: &str) -> Option<Args<'a>> {
        self.map.get(key).and_then(Self::from_value)
    }

    /// Returns the sequence under `key`.
    #[must_use]
    pub fn sequence(&self, key: &str) -> Option<&'a [Value]> {
        self.map.get(key).and_then(Value::as_array).map(Vec::as_slice)
    }
}

impl<'a> From<&'a ArgMap> for Args<'a> {
    fn from(map: &'a ArgMap) -> Self {
        Self::new(map)
    }
}

/// Builds an [`ArgMap`] from a `json!` object literal.
#[cfg(test)]
pub(crate) fn obj(value: Value) -> ArgMap {
    match value {
        Value::Object(map) => map,
        other => panic!("expected a JSON object, got {other}"),
    }
}
