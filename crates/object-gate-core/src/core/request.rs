// object-gate-core/src/core/request.rs
// ============================================================================
// Module: Object Gate Authorization Request
// Description: Immutable authorization-request composition and its invariants.
// Purpose: Assemble subject, action, resource, and environment attributes for decision.
// Dependencies: crate::core::{attributes, context, vocabulary}, serde, thiserror
// ============================================================================

//! ## Overview
//! An authorization request is the one structure submitted to the decision
//! engine per operation. Assembly is pure composition: it validates the
//! action and resource invariants, then freezes the four attribute groups.
//! Submission is the evaluator's responsibility.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use crate::core::attributes::AttributeId;
use crate::core::attributes::AttributeMap;
use crate::core::context::DesignatorType;
use crate::core::context::RequestContext;
use crate::core::vocabulary;

// ============================================================================
// SECTION: Assembly Errors
// ============================================================================

/// Authorization-request assembly errors.
#[derive(Debug, Error)]
pub enum AssemblyError {
    /// The action map lacks the action-identifier attribute.
    #[error("action attributes missing the action-id attribute `{0}`")]
    MissingActionIdentifier(&'static str),
    /// The action map lacks the action-API attribute.
    #[error("action attributes missing the action-api attribute `{0}`")]
    MissingActionApi(&'static str),
    /// The resource map lacks the path-derived resource identifier.
    #[error("resource attributes missing the resource-id attribute `{0}`")]
    MissingResourceIdentifier(&'static str),
}

// ============================================================================
// SECTION: Authorization Request
// ============================================================================

/// Immutable authorization request submitted to the decision engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorizationRequest {
    /// Subject attribute maps, one per subject category.
    pub subjects: Vec<AttributeMap>,
    /// Action attributes.
    pub actions: AttributeMap,
    /// Resource attributes.
    pub resources: AttributeMap,
    /// Environment attributes.
    pub environment: AttributeMap,
}

impl AuthorizationRequest {
    /// Assembles an authorization request from its four attribute groups.
    ///
    /// Every submitted request must carry exactly one action-identifier and
    /// exactly one action-API attribute (map keys are unique, so presence is
    /// sufficient), and the resource attributes must already contain the
    /// path-derived identifier chain.
    ///
    /// # Errors
    ///
    /// Returns [`AssemblyError`] when a required attribute is absent.
    pub fn assemble(
        subjects: Vec<AttributeMap>,
        actions: AttributeMap,
        resources: AttributeMap,
        environment: AttributeMap,
    ) -> Result<Self, AssemblyError> {
        if !actions.contains(&AttributeId::new(vocabulary::ACTION_ID)) {
            return Err(AssemblyError::MissingActionIdentifier(vocabulary::ACTION_ID));
        }
        if !actions.contains(&AttributeId::new(vocabulary::ACTION_API)) {
            return Err(AssemblyError::MissingActionApi(vocabulary::ACTION_API));
        }
        if !resources.contains(&AttributeId::new(vocabulary::XACML1_RESOURCE_ID)) {
            return Err(AssemblyError::MissingResourceIdentifier(vocabulary::XACML1_RESOURCE_ID));
        }
        Ok(Self {
            subjects,
            actions,
            resources,
            environment,
        })
    }

    /// Builds the request-context mirror of this request.
    ///
    /// All subject maps contribute to the subject multimap, so an attribute
    /// appearing in several subject categories becomes multi-valued.
    #[must_use]
    pub fn to_context(&self) -> RequestContext {
        let mut context = RequestContext::new();
        for subject in &self.subjects {
            context.record_map(DesignatorType::Subject, subject);
        }
        context.record_map(DesignatorType::Action, &self.actions);
        context.record_map(DesignatorType::Resource, &self.resources);
        context.record_map(DesignatorType::Environment, &self.environment);
        context
    }
}
