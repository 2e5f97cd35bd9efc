// object-gate-core/src/interfaces/mod.rs
// ============================================================================
// Module: Object Gate Interfaces
// Description: Engine-facing contracts for evaluation and attribute finding.
// Purpose: Define the seams between the enforcement point and the decision engine.
// Dependencies: crate::core, serde, thiserror
// ============================================================================

//! ## Overview
//! Interfaces define how Object Gate integrates with the external decision
//! engine without embedding engine-specific details. The evaluator consumes
//! assembled requests; the evaluation context and attribute finder form the
//! callback path the engine uses mid-evaluation. Implementations must fail
//! closed on missing or invalid data. The finder is the exception: its misses
//! are ordinary "no information" results, never errors.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;
use std::sync::Arc;

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use crate::core::AttributeId;
use crate::core::AttributeValue;
use crate::core::AuthorizationRequest;
use crate::core::DesignatorType;

// ============================================================================
// SECTION: Policy Evaluator
// ============================================================================

/// Decision returned by the policy evaluation engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Decision {
    /// The operation is permitted.
    Permit,
    /// The operation is denied.
    Deny,
    /// The engine could not reach a determinate decision.
    Indeterminate,
    /// No policy applied to the request.
    NotApplicable,
}

impl Decision {
    /// Returns the stable lowercase label for the decision.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Permit => "permit",
            Self::Deny => "deny",
            Self::Indeterminate => "indeterminate",
            Self::NotApplicable => "not-applicable",
        }
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Policy evaluation errors.
#[derive(Debug, Error)]
pub enum EvaluationError {
    /// The evaluation engine reported an error.
    #[error("policy evaluation error: {0}")]
    Engine(String),
}

/// External decision engine evaluating authorization requests.
pub trait PolicyEvaluator {
    /// Evaluates an assembled authorization request.
    ///
    /// # Errors
    ///
    /// Returns [`EvaluationError`] when the engine fails to evaluate.
    fn evaluate(&self, request: &AuthorizationRequest) -> Result<Decision, EvaluationError>;
}

/// Shared policy evaluator backed by an `Arc` trait object.
#[derive(Clone)]
pub struct SharedPolicyEvaluator {
    /// Inner evaluator implementation.
    inner: Arc<dyn PolicyEvaluator + Send + Sync>,
}

impl SharedPolicyEvaluator {
    /// Wraps an evaluator in a shared, clonable wrapper.
    #[must_use]
    pub fn from_evaluator(evaluator: impl PolicyEvaluator + Send + Sync + 'static) -> Self {
        Self {
            inner: Arc::new(evaluator),
        }
    }

    /// Wraps an existing shared evaluator.
    #[must_use]
    pub const fn new(evaluator: Arc<dyn PolicyEvaluator + Send + Sync>) -> Self {
        Self {
            inner: evaluator,
        }
    }
}

impl PolicyEvaluator for SharedPolicyEvaluator {
    fn evaluate(&self, request: &AuthorizationRequest) -> Result<Decision, EvaluationError> {
        self.inner.evaluate(request)
    }
}

// ============================================================================
// SECTION: Evaluation Context
// ============================================================================

/// Engine-side view of the request under evaluation.
///
/// The finder queries this view for action attributes of the original
/// request, most importantly the context-id attribute that keys the
/// registry lookup.
pub trait EvaluationContext {
    /// Returns the action attribute for the given id, if the request under
    /// evaluation carries one.
    fn action_attribute(&self, attribute_id: &AttributeId) -> Option<AttributeValue>;
}

impl EvaluationContext for AuthorizationRequest {
    fn action_attribute(&self, attribute_id: &AttributeId) -> Option<AttributeValue> {
        self.actions.get(attribute_id).cloned()
    }
}

// ============================================================================
// SECTION: Attribute Finder
// ============================================================================

/// Outcome of a late-bound attribute resolution.
///
/// `NoValue` is the normal "no information available" outcome; the engine's
/// combining logic decides what a missing attribute means.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// No value is available for the requested attribute.
    NoValue,
    /// The ordered attribute values found for the request.
    Values(Vec<AttributeValue>),
}

impl Resolution {
    /// Builds a resolution from a value list, mapping empty to `NoValue`.
    #[must_use]
    pub fn from_values(values: Vec<AttributeValue>) -> Self {
        if values.is_empty() { Self::NoValue } else { Self::Values(values) }
    }

    /// Returns true when no value was resolved.
    #[must_use]
    pub const fn is_no_value(&self) -> bool {
        matches!(self, Self::NoValue)
    }
}

/// Callback the decision engine invokes for attributes it cannot resolve
/// from the submitted request itself.
pub trait AttributeFinder {
    /// Resolves values for a designator lookup. Never fails: any miss
    /// (invalid context id, unknown context, absent attribute) is `NoValue`.
    fn resolve(
        &self,
        designator: DesignatorType,
        attribute_id: &AttributeId,
        resource_category: Option<&AttributeId>,
        ctx: &dyn EvaluationContext,
    ) -> Resolution;
}
