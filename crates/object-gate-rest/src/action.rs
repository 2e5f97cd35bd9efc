// object-gate-rest/src/action.rs
// ============================================================================
// Module: Object Gate Action Classification
// Description: Action selection for content-modification operations.
// Purpose: Pick by-reference or by-value and apply the policy-object override.
// Dependencies: object-gate-core, serde
// ============================================================================

//! ## Overview
//! The requested action follows how content is supplied: a content-location
//! parameter means modify-by-reference, otherwise modify-by-value. Targeting
//! the reserved policy datastream forces the enforced action to the elevated
//! policy-management permission, applied after the by-reference/by-value
//! decision, so the requested label survives for audit.

// ============================================================================
// SECTION: Imports
// ============================================================================

use object_gate_core::ActionId;
use object_gate_core::DatastreamId;
use object_gate_core::ReservedIdentifiers;
use object_gate_core::core::vocabulary;
use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Action Classification
// ============================================================================

/// Outcome of classifying a content-modification operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionClassification {
    /// Action the client requested, before any override.
    pub requested: ActionId,
    /// Action the permission check enforces.
    pub enforced: ActionId,
}

impl ActionClassification {
    /// Returns true when the policy-object override changed the action.
    #[must_use]
    pub fn overridden(&self) -> bool {
        self.requested != self.enforced
    }
}

/// Classifies a datastream modification.
///
/// The override protects the access-control policy object itself: modifying
/// it requires the policy-management permission rather than the ordinary
/// content-modification permission, regardless of how content is supplied.
#[must_use]
pub fn classify(
    has_location: bool,
    datastream_id: &DatastreamId,
    reserved: &ReservedIdentifiers,
) -> ActionClassification {
    let requested = if has_location {
        ActionId::new(vocabulary::ACTION_MODIFY_DATASTREAM_BY_REFERENCE)
    } else {
        ActionId::new(vocabulary::ACTION_MODIFY_DATASTREAM_BY_VALUE)
    };
    let enforced = if *datastream_id == reserved.policy_datastream_id {
        reserved.manage_policies_action.clone()
    } else {
        requested.clone()
    };
    ActionClassification {
        requested,
        enforced,
    }
}
