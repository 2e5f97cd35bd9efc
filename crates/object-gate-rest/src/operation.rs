// object-gate-rest/src/operation.rs
// ============================================================================
// Module: Object Gate REST Operation
// Description: Parsed REST operation input handed over by the HTTP layer.
// Purpose: Carry path segments, parameters, and collaborator-built attributes.
// Dependencies: object-gate-core, serde
// ============================================================================

//! ## Overview
//! The HTTP layer parses the inbound request and hands translation a plain
//! data structure: ordered path segments, named string parameters, the
//! pre-built subject and environment attribute collections, and the
//! caller-generated context id. Parameters are strings; an empty string is
//! treated the same as an absent parameter throughout translation.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;

use object_gate_core::AttributeMap;
use object_gate_core::ContextId;
use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Parameter Names
// ============================================================================

/// Parameter carrying the replacement MIME type.
pub const PARAM_MIME_TYPE: &str = "mimeType";
/// Parameter carrying the replacement format URI.
pub const PARAM_FORMAT_URI: &str = "formatURI";
/// Parameter carrying the replacement content location.
pub const PARAM_DS_LOCATION: &str = "dsLocation";
/// Parameter carrying the replacement checksum type.
pub const PARAM_CHECKSUM_TYPE: &str = "checksumType";
/// Parameter carrying the replacement checksum.
pub const PARAM_CHECKSUM: &str = "checksum";

// ============================================================================
// SECTION: REST Operation
// ============================================================================

/// One inbound REST operation, parsed by the HTTP layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RestOperation {
    /// Ordered path segments of the request URI.
    pub segments: Vec<String>,
    /// Named query/form parameters as plain strings.
    pub parameters: BTreeMap<String, String>,
    /// Collaborator-built subject attribute maps, one per subject category.
    pub subjects: Vec<AttributeMap>,
    /// Collaborator-built environment attributes.
    pub environment: AttributeMap,
    /// Caller-generated context id for this operation.
    pub context_id: ContextId,
    /// Authenticated remote user, if any, for audit logging.
    pub remote_user: Option<String>,
}

impl RestOperation {
    /// Returns a parameter value when present and non-empty.
    ///
    /// Downstream policy rules depend on attribute absence being
    /// distinguishable from empty string, so an empty parameter is reported
    /// as absent.
    #[must_use]
    pub fn parameter(&self, name: &str) -> Option<&str> {
        self.parameters.get(name).map(String::as_str).filter(|value| !value.is_empty())
    }
}
