// object-gate-rest/src/filters/modify_datastream.rs
// ============================================================================
// Module: Modify Datastream Filter
// Description: Translation for the modify-datastream REST operation.
// Purpose: Build the authorization request for datastream content changes.
// Dependencies: crate::{action, filters, operation, path, resource}, object-gate-core
// ============================================================================

//! ## Overview
//! Handles the modify-datastream operation: parse the datastream-scoped
//! path, build the resource identifier chain, merge the optional replacement
//! parameters, classify the action (with the policy-object override), and
//! assemble the request. The context id travels as an action attribute so
//! the finder can locate the in-flight context during evaluation.

// ============================================================================
// SECTION: Imports
// ============================================================================

use object_gate_core::AttributeId;
use object_gate_core::AttributeMap;
use object_gate_core::AttributeValue;
use object_gate_core::AuthorizationRequest;
use object_gate_core::ReservedIdentifiers;
use object_gate_core::core::vocabulary;

use crate::action::classify;
use crate::filters::RestFilter;
use crate::filters::audit_operation;
use crate::operation::PARAM_DS_LOCATION;
use crate::operation::RestOperation;
use crate::path::OperationDescriptor;
use crate::path::TranslationError;
use crate::resource::apply_datastream_parameters;
use crate::resource::build_resource_attributes;

// ============================================================================
// SECTION: Modify Datastream Filter
// ============================================================================

/// Filter translating the modify-datastream operation.
#[derive(Debug, Clone, Default)]
pub struct ModifyDatastream {
    /// Reserved identifiers protecting the policy datastream.
    reserved: ReservedIdentifiers,
}

impl ModifyDatastream {
    /// Creates the filter with the given reserved identifiers.
    #[must_use]
    pub const fn new(reserved: ReservedIdentifiers) -> Self {
        Self {
            reserved,
        }
    }
}

impl RestFilter for ModifyDatastream {
    fn operation_name(&self) -> &'static str {
        "modify-datastream"
    }

    fn handle(&self, operation: &RestOperation) -> Result<AuthorizationRequest, TranslationError> {
        let descriptor = OperationDescriptor::parse_datastream(&operation.segments)?;
        let datastream_id = descriptor.require_datastream()?.clone();

        let mut resources = build_resource_attributes(&descriptor);
        apply_datastream_parameters(&mut resources, operation)?;

        let has_location = operation.parameter(PARAM_DS_LOCATION).is_some();
        let classification = classify(has_location, &datastream_id, &self.reserved);

        let mut actions = AttributeMap::new();
        actions.insert(
            AttributeId::new(vocabulary::ACTION_ID),
            AttributeValue::string(classification.enforced.as_str()),
        );
        actions.insert(
            AttributeId::new(vocabulary::ACTION_API),
            AttributeValue::string(vocabulary::API_MANAGEMENT),
        );
        actions.insert(
            AttributeId::new(vocabulary::ACTION_CONTEXT_ID),
            AttributeValue::string(operation.context_id.as_str()),
        );

        audit_operation(operation, &descriptor, &classification);

        Ok(AuthorizationRequest::assemble(
            operation.subjects.clone(),
            actions,
            resources,
            operation.environment.clone(),
        )?)
    }
}
