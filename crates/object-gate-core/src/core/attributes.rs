// object-gate-core/src/core/attributes.rs
// ============================================================================
// Module: Object Gate Attribute Model
// Description: Typed attribute identifiers, values, and per-operation maps.
// Purpose: Provide the canonical attribute representation submitted for decisions.
// Dependencies: serde, time, url
// ============================================================================

//! ## Overview
//! Attributes are the currency of the enforcement point: every operation is
//! described to the decision engine as maps of attribute identifier to typed
//! attribute value. Values are immutable once constructed, and the absence of
//! a key is meaningful: policy rules distinguish a missing attribute from an
//! attribute holding an empty string, so maps never receive placeholders.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::fmt;

use serde::Deserialize;
use serde::Serialize;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;
use url::Url;

// ============================================================================
// SECTION: Attribute Identifier
// ============================================================================

/// URI-like identifier naming an attribute.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttributeId(String);

impl AttributeId {
    /// Creates a new attribute identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AttributeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<&str> for AttributeId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for AttributeId {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

// ============================================================================
// SECTION: Attribute Values
// ============================================================================

/// XML-Schema data type URI for string attribute values.
pub const XSD_STRING: &str = "http://www.w3.org/2001/XMLSchema#string";
/// XML-Schema data type URI for anyURI attribute values.
pub const XSD_ANY_URI: &str = "http://www.w3.org/2001/XMLSchema#anyURI";
/// XML-Schema data type URI for dateTime attribute values.
pub const XSD_DATE_TIME: &str = "http://www.w3.org/2001/XMLSchema#dateTime";

/// Typed attribute scalar, tagged with its data type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum AttributeValue {
    /// Plain string value.
    String(String),
    /// Absolute URI value.
    AnyUri(Url),
    /// Timestamp value with offset.
    DateTime(OffsetDateTime),
}

impl AttributeValue {
    /// Creates a string attribute value.
    #[must_use]
    pub fn string(value: impl Into<String>) -> Self {
        Self::String(value.into())
    }

    /// Creates an anyURI attribute value.
    #[must_use]
    pub const fn any_uri(value: Url) -> Self {
        Self::AnyUri(value)
    }

    /// Creates a dateTime attribute value.
    #[must_use]
    pub const fn date_time(value: OffsetDateTime) -> Self {
        Self::DateTime(value)
    }

    /// Returns the XML-Schema data type URI for this value.
    #[must_use]
    pub const fn data_type(&self) -> &'static str {
        match self {
            Self::String(_) => XSD_STRING,
            Self::AnyUri(_) => XSD_ANY_URI,
            Self::DateTime(_) => XSD_DATE_TIME,
        }
    }

    /// Returns the inner string when this is a string value.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(value) => Some(value.as_str()),
            Self::AnyUri(_) | Self::DateTime(_) => None,
        }
    }

    /// Returns the canonical string form of the value.
    #[must_use]
    pub fn canonical_string(&self) -> String {
        match self {
            Self::String(value) => value.clone(),
            Self::AnyUri(value) => value.as_str().to_string(),
            Self::DateTime(value) => value.format(&Rfc3339).unwrap_or_default(),
        }
    }
}

impl fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.canonical_string())
    }
}

// ============================================================================
// SECTION: Attribute Map
// ============================================================================

/// Mapping from attribute identifier to a single typed value.
///
/// Built fresh for each operation and never mutated after submission. Keys
/// are unique; inserting under an existing key replaces the previous value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttributeMap {
    /// Ordered attribute entries.
    entries: BTreeMap<AttributeId, AttributeValue>,
}

impl AttributeMap {
    /// Creates an empty attribute map.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Inserts an attribute, replacing any previous value under the same id.
    pub fn insert(&mut self, id: AttributeId, value: AttributeValue) -> Option<AttributeValue> {
        self.entries.insert(id, value)
    }

    /// Returns the value for an attribute id, if present.
    #[must_use]
    pub fn get(&self, id: &AttributeId) -> Option<&AttributeValue> {
        self.entries.get(id)
    }

    /// Returns true when the map holds a value for the attribute id.
    #[must_use]
    pub fn contains(&self, id: &AttributeId) -> bool {
        self.entries.contains_key(id)
    }

    /// Returns the number of attributes in the map.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true when the map holds no attributes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over attribute entries in identifier order.
    pub fn iter(&self) -> impl Iterator<Item = (&AttributeId, &AttributeValue)> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a AttributeMap {
    type Item = (&'a AttributeId, &'a AttributeValue);
    type IntoIter = std::collections::btree_map::Iter<'a, AttributeId, AttributeValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl FromIterator<(AttributeId, AttributeValue)> for AttributeMap {
    fn from_iter<I: IntoIterator<Item = (AttributeId, AttributeValue)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
