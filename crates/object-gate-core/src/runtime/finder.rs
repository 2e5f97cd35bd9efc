// object-gate-core/src/runtime/finder.rs
// ============================================================================
// Module: Object Gate Context Attribute Finder
// Description: Late-bound attribute resolution against registered contexts.
// Purpose: Answer engine callbacks for attributes absent from the request.
// Dependencies: crate::{core, interfaces, runtime::registry}, thiserror, tracing
// ============================================================================

//! ## Overview
//! During evaluation the decision engine calls back into the finder for any
//! attribute it cannot resolve from the submitted request. The finder
//! extracts the context id from the request's own action attributes, looks up
//! the live request context, and dispatches on designator type to the
//! matching multimap. Every miss is `NoValue`; resolution never fails, so
//! evaluation always proceeds.
//!
//! Which attributes the finder may serve is a static table validated once at
//! startup. A fixed deny list keeps framework-supplied identifiers out of the
//! finder's reach: those always come from the original request, and serving
//! them from a registered context would open an authorization bypass.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::collections::BTreeSet;

use thiserror::Error;
use tracing::debug;

use crate::core::AttributeId;
use crate::core::AttributeValue;
use crate::core::ContextId;
use crate::core::DesignatorType;
use crate::core::vocabulary;
use crate::interfaces::AttributeFinder;
use crate::interfaces::EvaluationContext;
use crate::interfaces::Resolution;
use crate::runtime::registry::ContextRegistry;

// ============================================================================
// SECTION: Attribute Table
// ============================================================================

/// Table errors raised by startup validation.
#[derive(Debug, Error)]
pub enum TableError {
    /// The same attribute id was registered more than once.
    #[error("duplicate attribute registration for `{0}`")]
    DuplicateRegistration(AttributeId),
    /// A registration names no designator types.
    #[error("attribute registration for `{0}` names no designator types")]
    EmptyDesignators(AttributeId),
    /// A resolvable registration shadows a deny-listed attribute.
    #[error("attribute `{0}` is deny-listed and cannot be registered as resolvable")]
    DeniedShadow(AttributeId),
}

/// One attribute registration in the finder table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeRegistration {
    /// Attribute identifier this registration covers.
    pub attribute_id: AttributeId,
    /// Designator types the attribute may be resolved under.
    pub designators: BTreeSet<DesignatorType>,
    /// Whether the finder may serve this attribute at all.
    pub resolvable: bool,
}

impl AttributeRegistration {
    /// Creates a resolvable registration for the given designator types.
    #[must_use]
    pub fn resolvable(
        attribute_id: AttributeId,
        designators: impl IntoIterator<Item = DesignatorType>,
    ) -> Self {
        Self {
            attribute_id,
            designators: designators.into_iter().collect(),
            resolvable: true,
        }
    }
}

/// Static configuration of what the finder may resolve.
///
/// Replaces imperative register/deny setup calls with one table validated at
/// startup: `{attribute_id -> {resolvable, designator_types}}`, a deny set,
/// and an ad-hoc flag permitting unregistered attributes.
#[derive(Debug, Clone)]
pub struct AttributeTable {
    /// Validated registrations keyed by attribute id.
    registrations: BTreeMap<AttributeId, AttributeRegistration>,
    /// Attribute ids the finder must never resolve.
    denied: BTreeSet<AttributeId>,
    /// Whether unregistered attributes may be resolved ad hoc.
    adhoc: bool,
}

impl AttributeTable {
    /// Builds a validated table from registrations and deny additions.
    ///
    /// The fixed framework deny list is always included; `extra_denied` only
    /// extends it.
    ///
    /// # Errors
    ///
    /// Returns [`TableError`] for duplicate registrations, registrations
    /// without designator types, or resolvable registrations that shadow a
    /// deny-listed attribute.
    pub fn new(
        registrations: Vec<AttributeRegistration>,
        extra_denied: Vec<AttributeId>,
        adhoc: bool,
    ) -> Result<Self, TableError> {
        let mut denied: BTreeSet<AttributeId> =
            vocabulary::default_denied_attributes().into_iter().collect();
        denied.extend(extra_denied);

        let mut table: BTreeMap<AttributeId, AttributeRegistration> = BTreeMap::new();
        for registration in registrations {
            if registration.designators.is_empty() {
                return Err(TableError::EmptyDesignators(registration.attribute_id));
            }
            if registration.resolvable && denied.contains(&registration.attribute_id) {
                return Err(TableError::DeniedShadow(registration.attribute_id));
            }
            if table.contains_key(&registration.attribute_id) {
                return Err(TableError::DuplicateRegistration(registration.attribute_id));
            }
            table.insert(registration.attribute_id.clone(), registration);
        }
        Ok(Self {
            registrations: table,
            denied,
            adhoc,
        })
    }

    /// Returns true when the attribute id is deny-listed.
    #[must_use]
    pub fn is_denied(&self, attribute_id: &AttributeId) -> bool {
        self.denied.contains(attribute_id)
    }

    /// Returns true when the finder may resolve the attribute under the
    /// given designator type.
    #[must_use]
    pub fn permits(&self, attribute_id: &AttributeId, designator: DesignatorType) -> bool {
        if self.denied.contains(attribute_id) {
            return false;
        }
        self.registrations.get(attribute_id).map_or(self.adhoc, |registration| {
            registration.resolvable && registration.designators.contains(&designator)
        })
    }

    /// Returns the registration for an attribute id, if present.
    #[must_use]
    pub fn registration(&self, attribute_id: &AttributeId) -> Option<&AttributeRegistration> {
        self.registrations.get(attribute_id)
    }
}

impl Default for AttributeTable {
    /// Builds the default table: environment and HTTP-request attributes
    /// registered under the environment designator, the fixed deny list, and
    /// ad-hoc resolution enabled.
    fn default() -> Self {
        let registrations = vocabulary::ENVIRONMENT_ATTRIBUTES
            .iter()
            .map(|id| {
                let registration = AttributeRegistration::resolvable(
                    AttributeId::new(*id),
                    [DesignatorType::Environment],
                );
                (registration.attribute_id.clone(), registration)
            })
            .collect();
        Self {
            registrations,
            denied: vocabulary::default_denied_attributes().into_iter().collect(),
            adhoc: true,
        }
    }
}

// ============================================================================
// SECTION: Context Attribute Finder
// ============================================================================

/// Attribute finder resolving against the context registry.
///
/// The finder is a pure read-only query over registry state at call time; it
/// never mutates a request context, so reentrant engine callbacks on the
/// evaluating thread are safe. No state persists across calls.
#[derive(Debug, Clone)]
pub struct ContextAttributeFinder {
    /// Registry of in-flight request contexts.
    registry: ContextRegistry,
    /// Startup-validated resolution table.
    table: AttributeTable,
}

impl ContextAttributeFinder {
    /// Creates a finder over the given registry and table.
    #[must_use]
    pub const fn new(registry: ContextRegistry, table: AttributeTable) -> Self {
        Self {
            registry,
            table,
        }
    }

    /// Creates a finder with the default attribute table.
    #[must_use]
    pub fn with_defaults(registry: ContextRegistry) -> Self {
        Self::new(registry, AttributeTable::default())
    }

    /// Returns the resolution table.
    #[must_use]
    pub const fn table(&self) -> &AttributeTable {
        &self.table
    }

    /// Extracts a valid context id from the evaluation context, if any.
    ///
    /// The id must be present under the context-id action attribute, be a
    /// string value, and pass the registry-key validity rule.
    fn context_id(&self, ctx: &dyn EvaluationContext) -> Option<ContextId> {
        let attribute_id = AttributeId::new(vocabulary::ACTION_CONTEXT_ID);
        let Some(value) = ctx.action_attribute(&attribute_id) else {
            debug!("no context-id action attribute on evaluation request");
            return None;
        };
        let Some(raw) = value.as_str() else {
            debug!("context-id action attribute is not a string value");
            return None;
        };
        let context_id = ContextId::new(raw);
        if !context_id.is_valid() {
            debug!(context_id = %context_id, "invalid context id on evaluation request");
            return None;
        }
        Some(context_id)
    }
}

impl AttributeFinder for ContextAttributeFinder {
    fn resolve(
        &self,
        designator: DesignatorType,
        attribute_id: &AttributeId,
        _resource_category: Option<&AttributeId>,
        ctx: &dyn EvaluationContext,
    ) -> Resolution {
        if !self.table.permits(attribute_id, designator) {
            debug!(
                designator = %designator,
                attribute_id = %attribute_id,
                "attribute not resolvable by this finder"
            );
            return Resolution::NoValue;
        }
        let Some(context_id) = self.context_id(ctx) else {
            return Resolution::NoValue;
        };
        let Some(context) = self.registry.get(&context_id) else {
            debug!(context_id = %context_id, "no live context for context id");
            return Resolution::NoValue;
        };
        let values = context.values(designator, attribute_id);
        debug!(
            context_id = %context_id,
            designator = %designator,
            attribute_id = %attribute_id,
            value_count = values.len(),
            "resolved context attribute"
        );
        Resolution::from_values(values.iter().map(|value| AttributeValue::string(value.as_str())).collect())
    }
}
