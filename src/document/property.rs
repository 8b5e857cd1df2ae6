//! Ordered key/value metadata attached to a document.

use serde::{Deserialize, Serialize};

/// Errors raised by the typed property accessors.
#[derive(Debug, thiserror::Error)]
pub enum PropertyError {
    /// No property with the requested key exists.
    #[error("no property named '{0}'")]
    KeyNotFound(String),

    /// The value cannot be interpreted as the requested type.
    #[error("property '{key}' is not a {requested}: '{value}'")]
    TypeMismatch {
        /// Key of the offending property.
        key: String,
        /// The type the caller asked for, e.g. `"number"`.
        requested: &'static str,
        /// Textual form of the stored value.
        value: String,
    },
}

/// A property value: tagged text, number or boolean.
///
/// Values decoded from file headers are always [`PropertyValue::Text`]; the
/// typed variants exist for callers that build documents programmatically.
/// Conversion between variants is never implicit — the typed accessors on
/// [`PropertyTable`] are explicit and fallible.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyValue {
    /// A boolean flag.
    Bool(bool),
    /// A numeric value.
    Float(f64),
    /// Free-form text.
    Text(String),
}

impl PropertyValue {
    /// Interpret the value as a number.
    ///
    /// `Float` values are returned as stored; `Text` values are parsed on
    /// demand. Anything else is `None`.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            PropertyValue::Float(v) => Some(*v),
            PropertyValue::Text(s) => s.trim().parse().ok(),
            PropertyValue::Bool(_) => None,
        }
    }

    /// Interpret the value as a boolean.
    ///
    /// `Bool` values are returned as stored; the texts `true`/`false`,
    /// `yes`/`no` and `1`/`0` are recognized case-insensitively.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            PropertyValue::Bool(b) => Some(*b),
            PropertyValue::Text(s) => match s.trim().to_ascii_lowercase().as_str() {
                "true" | "yes" | "1" => Some(true),
                "false" | "no" | "0" => Some(false),
                _ => None,
            },
            PropertyValue::Float(_) => None,
        }
    }
}

impl std::fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PropertyValue::Text(s) => f.write_str(s),
            PropertyValue::Float(v) => write!(f, "{}", v),
            PropertyValue::Bool(b) => write!(f, "{}", b),
        }
    }
}

impl From<&str> for PropertyValue {
    fn from(s: &str) -> Self {
        PropertyValue::Text(s.to_string())
    }
}

impl From<String> for PropertyValue {
    fn from(s: String) -> Self {
        PropertyValue::Text(s)
    }
}

impl From<f64> for PropertyValue {
    fn from(v: f64) -> Self {
        PropertyValue::Float(v)
    }
}

impl From<bool> for PropertyValue {
    fn from(b: bool) -> Self {
        PropertyValue::Bool(b)
    }
}

/// One named property.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    /// Case-preserving key, unique within a table.
    pub key: String,
    /// The associated value.
    pub value: PropertyValue,
}

/// An ordered mapping from string keys to property values.
///
/// Keys are unique and case-preserving; insertion order is preserved and is
/// the order codecs emit header lines in. Lookup is by exact key.
///
/// Two insertion policies exist for duplicate keys: [`insert`] replaces the
/// value in place (the entry keeps its original position), while
/// [`insert_if_absent`] keeps the first value — the policy used when decoding
/// permissive file headers.
///
/// [`insert`]: PropertyTable::insert
/// [`insert_if_absent`]: PropertyTable::insert_if_absent
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PropertyTable {
    entries: Vec<Property>,
}

impl PropertyTable {
    /// Create an empty table.
    pub fn new() -> Self {
        PropertyTable::default()
    }

    /// Number of properties.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true` if the table holds no properties.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Insert or replace a property, keeping the original position on
    /// replacement.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<PropertyValue>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|p| p.key == key) {
            Some(entry) => entry.value = value,
            None => self.entries.push(Property { key, value }),
        }
    }

    /// Insert a property only if the key is not present yet.
    ///
    /// Returns `true` if the property was inserted. This is the duplicate-key
    /// policy decode uses: the first occurrence in a file header wins.
    pub fn insert_if_absent(
        &mut self,
        key: impl Into<String>,
        value: impl Into<PropertyValue>,
    ) -> bool {
        let key = key.into();
        if self.contains_key(&key) {
            return false;
        }
        self.entries.push(Property {
            key,
            value: value.into(),
        });
        true
    }

    /// `true` if a property with this exact key exists.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.iter().any(|p| p.key == key)
    }

    /// Look up a property value by exact key.
    pub fn get(&self, key: &str) -> Option<&PropertyValue> {
        self.entries.iter().find(|p| p.key == key).map(|p| &p.value)
    }

    /// Look up a property and render its value as text.
    pub fn get_text(&self, key: &str) -> Option<String> {
        self.get(key).map(|v| v.to_string())
    }

    /// Look up a property and interpret its value as a number.
    pub fn get_f64(&self, key: &str) -> Result<f64, PropertyError> {
        let value = self
            .get(key)
            .ok_or_else(|| PropertyError::KeyNotFound(key.to_string()))?;
        value.as_f64().ok_or_else(|| PropertyError::TypeMismatch {
            key: key.to_string(),
            requested: "number",
            value: value.to_string(),
        })
    }

    /// Look up a property and interpret its value as a boolean.
    pub fn get_bool(&self, key: &str) -> Result<bool, PropertyError> {
        let value = self
            .get(key)
            .ok_or_else(|| PropertyError::KeyNotFound(key.to_string()))?;
        value.as_bool().ok_or_else(|| PropertyError::TypeMismatch {
            key: key.to_string(),
            requested: "boolean",
            value: value.to_string(),
        })
    }

    /// Iterate over the properties in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Property> {
        self.entries.iter()
    }

    /// Iterate over the keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|p| p.key.as_str())
    }
}

impl<'a> IntoIterator for &'a PropertyTable {
    type Item = &'a Property;
    type IntoIter = std::slice::Iter<'a, Property>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
