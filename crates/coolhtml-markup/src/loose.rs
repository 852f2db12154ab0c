//! Loose field access over JSON configuration values.
//!
//! Configuration arrives as untyped JSON. A key counts as present only when
//! its value is truthy: `null`, `false`, `0`, `NaN` and `""` all fall through
//! to the next synonym or to the caller's default. Arrays and objects are
//! always truthy, even when empty.

use serde_json::{Map, Number, Value};

/// Whether a value counts as present.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Stringify a value the way template interpolation does.
pub fn scalar_text(value: &Value) -> String {
    match value {
        Value::Null => "null".into(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => format_number(n),
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                other => scalar_text(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".into(),
    }
}

/// Format a number, removing `.0` for integers.
pub fn format_number(n: &Number) -> String {
    if let Some(i) = n.as_i64() {
        return i.to_string();
    }
    if let Some(u) = n.as_u64() {
        return u.to_string();
    }
    match n.as_f64() {
        Some(f) if f.fract() == 0.0 && f.is_finite() && f.abs() < i64::MAX as f64 => {
            format!("{}", f as i64)
        }
        Some(f) => format!("{f}"),
        None => n.to_string(),
    }
}

/// Read-only view over the keys of a configuration object.
///
/// Wrapping a non-object value yields a view with no keys, so every lookup
/// falls back to its default.
#[derive(Debug, Clone, Copy, Default)]
pub struct Fields<'a> {
    map: Option<&'a Map<String, Value>>,
}

impl<'a> Fields<'a> {
    pub fn new(value: &'a Value) -> Self {
        Self {
            map: value.as_object(),
        }
    }

    /// The raw value under `key`, truthy or not.
    pub fn raw(&self, key: &str) -> Option<&'a Value> {
        self.map.and_then(|m| m.get(key))
    }

    /// The first truthy value among `keys`.
    pub fn get(&self, keys: &[&str]) -> Option<&'a Value> {
        keys.iter()
            .filter_map(|key| self.raw(key))
            .find(|value| is_truthy(value))
    }

    /// The first truthy value among `keys`, stringified.
    pub fn text(&self, keys: &[&str]) -> Option<String> {
        self.get(keys).map(scalar_text)
    }

    pub fn text_or(&self, keys: &[&str], default: &str) -> String {
        self.text(keys).unwrap_or_else(|| default.to_string())
    }

    /// True when any of `keys` is truthy.
    pub fn flag(&self, keys: &[&str]) -> bool {
        self.get(keys).is_some()
    }

    /// True unless `key` is literally `false`.
    pub fn flag_unless_false(&self, key: &str) -> bool {
        !matches!(self.raw(key), Some(Value::Bool(false)))
    }

    /// True only when `key` is literally `true`.
    pub fn flag_if_true(&self, key: &str) -> bool {
        matches!(self.raw(key), Some(Value::Bool(true)))
    }

    /// The first truthy value among `keys` when it is an array.
    ///
    /// A truthy non-array value shadows later synonyms and yields nothing.
    pub fn list(&self, keys: &[&str]) -> &'a [Value] {
        match self.get(keys) {
            Some(Value::Array(items)) => items.as_slice(),
            _ => &[],
        }
    }

    /// A nested view over the first truthy value among `keys`.
    pub fn object(&self, keys: &[&str]) -> Fields<'a> {
        self.get(keys).map(Fields::new).unwrap_or_default()
    }

    /// The first truthy value among `keys` read as a whole number.
    ///
    /// Numeric strings are accepted. Fractions are truncated.
    pub fn count(&self, keys: &[&str]) -> Option<u64> {
        match self.get(keys)? {
            Value::Number(n) => n
                .as_u64()
                .or_else(|| n.as_f64().filter(|f| *f >= 1.0).map(|f| f as u64)),
            Value::String(s) => s.trim().parse::<f64>().ok().filter(|f| *f >= 1.0).map(|f| f as u64),
            _ => None,
        }
    }
}
