// object-gate-core/src/core/context.rs
// ============================================================================
// Module: Object Gate Request Context
// Description: Per-operation attribute multimaps keyed by designator type.
// Purpose: Hold the in-flight attribute sets consulted by the attribute finder.
// Dependencies: crate::core::attributes, serde
// ============================================================================

//! ## Overview
//! A request context carries four independent attribute multimaps (subject,
//! action, resource, and environment) for one in-flight operation. The
//! owning operation populates the context fully before registering it; the
//! attribute finder only ever reads it. Attributes may be multi-valued and
//! value order is preserved.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;

use serde::Deserialize;
use serde::Serialize;

use crate::core::attributes::AttributeId;
use crate::core::attributes::AttributeMap;

// ============================================================================
// SECTION: Designator Type
// ============================================================================

/// Category of attribute targeted by a designator lookup.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum DesignatorType {
    /// Subject attribute lookup.
    Subject,
    /// Action attribute lookup.
    Action,
    /// Resource attribute lookup.
    Resource,
    /// Environment attribute lookup.
    Environment,
}

impl DesignatorType {
    /// All designator types in canonical order.
    pub const ALL: [Self; 4] = [Self::Subject, Self::Action, Self::Resource, Self::Environment];

    /// Returns the stable lowercase label for the designator type.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Subject => "subject",
            Self::Action => "action",
            Self::Resource => "resource",
            Self::Environment => "environment",
        }
    }
}

impl std::fmt::Display for DesignatorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// SECTION: Request Context
// ============================================================================

/// Attribute multimap for one designator category.
type ValueMap = BTreeMap<AttributeId, Vec<String>>;

/// Per-operation bag of subject, action, resource, and environment attributes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestContext {
    /// Subject attribute values.
    subject: ValueMap,
    /// Action attribute values.
    action: ValueMap,
    /// Resource attribute values.
    resource: ValueMap,
    /// Environment attribute values.
    environment: ValueMap,
}

impl RequestContext {
    /// Creates an empty request context.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            subject: BTreeMap::new(),
            action: BTreeMap::new(),
            resource: BTreeMap::new(),
            environment: BTreeMap::new(),
        }
    }

    /// Appends a value under an attribute id in the given designator map.
    pub fn add_value(
        &mut self,
        designator: DesignatorType,
        id: AttributeId,
        value: impl Into<String>,
    ) {
        self.map_mut(designator).entry(id).or_default().push(value.into());
    }

    /// Records every entry of an attribute map under the given designator.
    ///
    /// Values are recorded in their canonical string form, the shape the
    /// finder hands back during evaluation.
    pub fn record_map(&mut self, designator: DesignatorType, attributes: &AttributeMap) {
        for (id, value) in attributes {
            self.add_value(designator, id.clone(), value.canonical_string());
        }
    }

    /// Returns the ordered values for an attribute id, empty when absent.
    #[must_use]
    pub fn values(&self, designator: DesignatorType, id: &AttributeId) -> &[String] {
        self.map(designator).get(id).map_or(&[], Vec::as_slice)
    }

    /// Returns the number of values recorded for an attribute id.
    #[must_use]
    pub fn value_count(&self, designator: DesignatorType, id: &AttributeId) -> usize {
        self.values(designator, id).len()
    }

    /// Returns the multimap for a designator type.
    const fn map(&self, designator: DesignatorType) -> &ValueMap {
        match designator {
            DesignatorType::Subject => &self.subject,
            DesignatorType::Action => &self.action,
            DesignatorType::Resource => &self.resource,
            DesignatorType::Environment => &self.environment,
        }
    }

    /// Returns the mutable multimap for a designator type.
    const fn map_mut(&mut self, designator: DesignatorType) -> &mut ValueMap {
        match designator {
            DesignatorType::Subject => &mut self.subject,
            DesignatorType::Action => &mut self.action,
            DesignatorType::Resource => &mut self.resource,
            DesignatorType::Environment => &mut self.environment,
        }
    }
}
