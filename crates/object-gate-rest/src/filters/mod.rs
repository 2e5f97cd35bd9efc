// object-gate-rest/src/filters/mod.rs
// ============================================================================
// Module: Object Gate REST Filters
// Description: Filter trait and audit logging for REST-operation translation.
// Purpose: Define the one translation contract shared by all operation handlers.
// Dependencies: crate::{action, operation, path}, object-gate-core, tracing
// ============================================================================

//! ## Overview
//! Every REST-operation handler implements the same translation contract:
//! take the parsed operation, build resource and action attributes, and
//! return one assembled authorization request. Handlers emit a single audit
//! event per operation. The audit `action` field records the action the
//! client requested; when the policy-object override fires, the enforced
//! action is carried alongside so the override never masks the request.

// ============================================================================
// SECTION: Submodules
// ============================================================================

pub mod modify_datastream;

// ============================================================================
// SECTION: Imports
// ============================================================================

use object_gate_core::AuthorizationRequest;
use object_gate_core::DatastreamId;
use tracing::info;

use crate::action::ActionClassification;
use crate::operation::RestOperation;
use crate::path::OperationDescriptor;
use crate::path::TranslationError;

// ============================================================================
// SECTION: Filter Contract
// ============================================================================

/// Translation contract for one REST operation type.
pub trait RestFilter {
    /// Stable name of the operation this filter translates.
    fn operation_name(&self) -> &'static str;

    /// Translates a parsed operation into an authorization request.
    ///
    /// # Errors
    ///
    /// Returns [`TranslationError`] when the operation is malformed; the
    /// operation is rejected before any request reaches the engine.
    fn handle(&self, operation: &RestOperation) -> Result<AuthorizationRequest, TranslationError>;
}

// ============================================================================
// SECTION: Audit Logging
// ============================================================================

/// Emits the per-operation audit event.
pub(crate) fn audit_operation(
    operation: &RestOperation,
    descriptor: &OperationDescriptor,
    classification: &ActionClassification,
) {
    info!(
        target: "object_gate::audit",
        user = operation.remote_user.as_deref().unwrap_or("-"),
        action = %classification.requested,
        enforced_action = %classification.enforced,
        pid = %descriptor.object_id(),
        datastream = descriptor.datastream_id().map_or("-", DatastreamId::as_str),
        "translated repository operation"
    );
}
