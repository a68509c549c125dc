//! Semi-structured candidate fields
//!
//! The backend stores `education`, `experience`, and `address` as opaque
//! strings that are logically JSON arrays of small objects, but may arrive
//! malformed, empty, or already parsed. [`StructuredField`] models that
//! explicitly as a tagged union normalized at the wire boundary, so the rest
//! of the crate never re-parses these fields ad hoc.

use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;
use serde::Serializer;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// A field that is logically an array of `T` but travels as an opaque string.
///
/// Deserialization accepts either a JSON array (kept as `Parsed`, with
/// undecodable items dropped) or a string (kept as `Unparsed`, raw).
/// Serialization re-encodes `Parsed` back into a JSON string, because that is
/// what the backend stores.
///
/// # Example
///
/// ```
/// use hireline_lib::model::{Education, StructuredField};
///
/// let field: StructuredField<Education> =
///     serde_json::from_str(r#""[{\"degree\":\"BSc\"}]""#).unwrap();
/// assert_eq!(field.entries().len(), 1);
///
/// let broken: StructuredField<Education> = serde_json::from_str(r#""[1,2,""#).unwrap();
/// assert!(broken.entries().is_empty());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum StructuredField<T> {
    /// The raw string as received; decoded lazily and tolerantly.
    Unparsed(String),
    /// An already-decoded array of entries.
    Parsed(Vec<T>),
}

impl<T> Default for StructuredField<T> {
    fn default() -> Self {
        StructuredField::Unparsed(String::new())
    }
}

impl<T> StructuredField<T> {
    /// Returns the raw string if this field has not been decoded.
    pub fn raw(&self) -> Option<&str> {
        match self {
            StructuredField::Unparsed(s) => Some(s),
            StructuredField::Parsed(_) => None,
        }
    }

    /// Returns `true` if this field holds a decoded array.
    pub fn is_parsed(&self) -> bool {
        matches!(self, StructuredField::Parsed(_))
    }
}

impl<T: Clone + DeserializeOwned> StructuredField<T> {
    /// Total, tolerant decode of the field into entries.
    ///
    /// Already-parsed arrays are returned as-is. Strings are decoded; any
    /// failure (malformed syntax, non-array shape) yields an empty vec. This
    /// never errors; the worst case is an empty result, which the UI renders
    /// as "No data found."
    pub fn entries(&self) -> Vec<T> {
        match self {
            StructuredField::Parsed(items) => items.clone(),
            StructuredField::Unparsed(raw) => decode_entries(raw),
        }
    }

    /// Decodes once and replaces the raw string with the typed entries.
    pub fn normalize(&mut self) {
        if let StructuredField::Unparsed(_) = self {
            *self = StructuredField::Parsed(self.entries());
        }
    }
}

/// Decodes a raw string into entries, dropping anything undecodable.
fn decode_entries<T: DeserializeOwned>(raw: &str) -> Vec<T> {
    let Ok(value) = serde_json::from_str::<Value>(raw) else {
        return Vec::new();
    };
    match value {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| serde_json::from_value(item).ok())
            .collect(),
        _ => Vec::new(),
    }
}

impl<'de, T: DeserializeOwned> Deserialize<'de> for StructuredField<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(match value {
            Value::String(s) => StructuredField::Unparsed(s),
            Value::Array(items) => StructuredField::Parsed(
                items
                    .into_iter()
                    .filter_map(|item| serde_json::from_value(item).ok())
                    .collect(),
            ),
            Value::Null => StructuredField::Unparsed(String::new()),
            // Decoded, but not array-shaped.
            _ => StructuredField::Parsed(Vec::new()),
        })
    }
}

impl<T: Serialize> Serialize for StructuredField<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            StructuredField::Unparsed(s) => serializer.serialize_str(s),
            StructuredField::Parsed(items) => {
                let encoded = serde_json::to_string(items).unwrap_or_else(|_| "[]".to_string());
                serializer.serialize_str(&encoded)
            }
        }
    }
}

/// One education entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Education {
    pub degree: Option<String>,
    pub institution: Option<String>,
    pub duration: Option<String>,
}

/// One work-experience entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Experience {
    pub company: Option<String>,
    pub role: Option<String>,
    pub duration: Option<String>,
    pub responsibilities: Vec<String>,
}

/// One address entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Address {
    pub firstline: Option<String>,
    pub city: Option<String>,
    pub district: Option<String>,
    pub state: Option<String>,
    pub pincode: Option<String>,
    pub country: Option<String>,
}

impl Address {
    /// The address parts in display order.
    fn parts(&self) -> [&Option<String>; 6] {
        [
            &self.firstline,
            &self.city,
            &self.district,
            &self.state,
            &self.pincode,
            &self.country,
        ]
    }

    /// Returns `true` if any part is non-empty.
    pub fn has_content(&self) -> bool {
        self.parts()
            .iter()
            .any(|p| p.as_deref().is_some_and(|s| !s.trim().is_empty()))
    }
}

/// Formats an address field into a single display line.
///
/// Entries are scanned newest-first (the backend appends); the most recent
/// entry with any non-empty part wins. Its parts are emitted in fixed order
/// (firstline, city, district, state, pincode, country), trimmed, empties
/// dropped, joined with `", "`. Empty or undecodable input yields `"NA"`.
pub fn format_address(field: &StructuredField<Address>) -> String {
    let entries = field.entries();
    let Some(latest) = entries.iter().rev().find(|a| a.has_content()) else {
        return "NA".to_string();
    };
    let line = latest
        .parts()
        .iter()
        .filter_map(|p| p.as_deref())
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(", ");
    if line.is_empty() { "NA".to_string() } else { line }
}
