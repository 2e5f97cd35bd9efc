// object-gate-core/src/runtime/enforcer.rs
// ============================================================================
// Module: Object Gate Enforcement Runtime
// Description: Guard-scoped context registration and decision submission.
// Purpose: Execute one enforcement round-trip per translated operation.
// Dependencies: crate::{core, interfaces, runtime::registry}, thiserror, tracing
// ============================================================================

//! ## Overview
//! The enforcement runtime is the single execution path for a translated
//! operation: register the request context under its context id, submit the
//! assembled request to the evaluator, and map the decision. The registration
//! guard lives for the duration of evaluation, so reentrant finder callbacks
//! see the context, and every exit path releases the registry entry.

// ============================================================================
// SECTION: Imports
// ============================================================================

use thiserror::Error;
use tracing::debug;

use crate::core::AttributeId;
use crate::core::AuthorizationRequest;
use crate::core::ContextId;
use crate::core::vocabulary;
use crate::interfaces::Decision;
use crate::interfaces::EvaluationError;
use crate::interfaces::PolicyEvaluator;
use crate::runtime::registry::ContextRegistry;
use crate::runtime::registry::RegistryError;

// ============================================================================
// SECTION: Enforcement Errors
// ============================================================================

/// Enforcement errors for one operation round-trip.
///
/// An authorization failure (`Denied`) is distinct from a malformed or
/// incomplete request, which is rejected by translation before any request
/// reaches the engine.
#[derive(Debug, Error)]
pub enum EnforcementError {
    /// The request carries no usable context-id action attribute.
    #[error("authorization request carries no valid context-id action attribute")]
    MissingContextId,
    /// Context registration failed.
    #[error(transparent)]
    Registry(#[from] RegistryError),
    /// The evaluation engine failed.
    #[error(transparent)]
    Evaluation(#[from] EvaluationError),
    /// The engine returned a decision other than permit.
    #[error("operation denied by policy decision: {decision}")]
    Denied {
        /// Decision returned by the engine.
        decision: Decision,
    },
}

// ============================================================================
// SECTION: Enforcement Point
// ============================================================================

/// Policy enforcement point runtime, generic over the decision engine.
#[derive(Debug, Clone)]
pub struct Pep<E> {
    /// Registry of in-flight request contexts.
    registry: ContextRegistry,
    /// Decision engine client.
    evaluator: E,
}

impl<E: PolicyEvaluator> Pep<E> {
    /// Creates an enforcement point over the given registry and evaluator.
    #[must_use]
    pub const fn new(registry: ContextRegistry, evaluator: E) -> Self {
        Self {
            registry,
            evaluator,
        }
    }

    /// Returns the context registry backing this enforcement point.
    #[must_use]
    pub const fn registry(&self) -> &ContextRegistry {
        &self.registry
    }

    /// Enforces one operation: registers its context, submits the request,
    /// and maps the decision. Only `Permit` allows the operation.
    ///
    /// # Errors
    ///
    /// Returns [`EnforcementError`] when the request lacks a valid context
    /// id, the id collides with a live registration, the engine fails, or
    /// the decision is anything other than permit.
    pub fn enforce(&self, request: &AuthorizationRequest) -> Result<Decision, EnforcementError> {
        let context_id = extract_context_id(request)?;
        let guard = self.registry.register(context_id, request.to_context())?;
        debug!(context_id = %guard.context_id(), "context registered for evaluation");

        let decision = self.evaluator.evaluate(request)?;
        drop(guard);

        match decision {
            Decision::Permit => Ok(decision),
            Decision::Deny | Decision::Indeterminate | Decision::NotApplicable => {
                Err(EnforcementError::Denied {
                    decision,
                })
            }
        }
    }
}

/// Extracts the context id the request was translated with.
fn extract_context_id(request: &AuthorizationRequest) -> Result<ContextId, EnforcementError> {
    let attribute_id = AttributeId::new(vocabulary::ACTION_CONTEXT_ID);
    let context_id = request
        .actions
        .get(&attribute_id)
        .and_then(|value| value.as_str())
        .map(ContextId::new)
        .ok_or(EnforcementError::MissingContextId)?;
    if !context_id.is_valid() {
        return Err(EnforcementError::MissingContextId);
    }
    Ok(context_id)
}
