// object-gate-core/src/core/vocabulary.rs
// ============================================================================
// Module: Object Gate Attribute Vocabulary
// Description: Well-known attribute identifiers, action URIs, and reserved ids.
// Purpose: Provide the fixed identifier vocabulary shared by translation and finding.
// Dependencies: crate::core::{attributes, identifiers}
// ============================================================================

//! ## Overview
//! The vocabulary is configuration, not discovery: reserved identifiers and
//! well-known attribute ids are compile-time constants. Policies reference
//! these identifiers verbatim, so their string forms are stable.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

use crate::core::attributes::AttributeId;
use crate::core::identifiers::ActionId;
use crate::core::identifiers::DatastreamId;

// ============================================================================
// SECTION: XACML Standard Identifiers
// ============================================================================

/// XACML 1.0 standard subject-id attribute.
pub const XACML1_SUBJECT_ID: &str = "urn:oasis:names:tc:xacml:1.0:subject:subject-id";
/// XACML 1.0 standard action-id attribute.
pub const XACML1_ACTION_ID: &str = "urn:oasis:names:tc:xacml:1.0:action:action-id";
/// XACML 1.0 standard resource-id attribute.
pub const XACML1_RESOURCE_ID: &str = "urn:oasis:names:tc:xacml:1.0:resource:resource-id";

// ============================================================================
// SECTION: Action Attributes
// ============================================================================

/// Action attribute carrying the enforced action identifier.
pub const ACTION_ID: &str = "urn:object-gate:1.0:action:id";
/// Action attribute carrying the API surface label.
pub const ACTION_API: &str = "urn:object-gate:1.0:action:api";
/// Action attribute carrying the in-flight context identifier.
pub const ACTION_CONTEXT_ID: &str = "urn:object-gate:1.0:action:context-id";

/// API label for management-surface operations.
pub const API_MANAGEMENT: &str = "urn:object-gate:1.0:action:api-m";
/// API label for access-surface operations.
pub const API_ACCESS: &str = "urn:object-gate:1.0:action:api-a";

/// Action URI for modifying a datastream by reference.
pub const ACTION_MODIFY_DATASTREAM_BY_REFERENCE: &str =
    "urn:object-gate:1.0:action:modify-datastream-by-reference";
/// Action URI for modifying a datastream by value.
pub const ACTION_MODIFY_DATASTREAM_BY_VALUE: &str =
    "urn:object-gate:1.0:action:modify-datastream-by-value";
/// Action URI for the elevated policy-management permission.
pub const ACTION_MANAGE_POLICIES: &str = "urn:object-gate:1.0:action:manage-policies";

// ============================================================================
// SECTION: Subject Attributes
// ============================================================================

/// Subject attribute carrying the authenticated login id.
pub const SUBJECT_LOGIN_ID: &str = "urn:object-gate:1.0:subject:login-id";

// ============================================================================
// SECTION: Resource Attributes
// ============================================================================

/// Resource attribute carrying the repository object pid.
pub const OBJECT_PID: &str = "urn:object-gate:1.0:resource:object:pid";
/// Resource attribute carrying the datastream id.
pub const DATASTREAM_ID: &str = "urn:object-gate:1.0:resource:datastream:id";
/// Resource attribute carrying the replacement MIME type.
pub const DATASTREAM_NEW_MIME_TYPE: &str =
    "urn:object-gate:1.0:resource:datastream:new-mime-type";
/// Resource attribute carrying the replacement format URI.
pub const DATASTREAM_NEW_FORMAT_URI: &str =
    "urn:object-gate:1.0:resource:datastream:new-format-uri";
/// Resource attribute carrying the replacement content location.
pub const DATASTREAM_NEW_LOCATION: &str = "urn:object-gate:1.0:resource:datastream:new-location";
/// Resource attribute carrying the replacement checksum type.
pub const DATASTREAM_NEW_CHECKSUM_TYPE: &str =
    "urn:object-gate:1.0:resource:datastream:new-checksum-type";
/// Resource attribute carrying the replacement checksum.
pub const DATASTREAM_NEW_CHECKSUM: &str = "urn:object-gate:1.0:resource:datastream:new-checksum";

// ============================================================================
// SECTION: Environment Attributes
// ============================================================================

/// Environment attribute for the evaluation timestamp.
pub const ENV_CURRENT_DATE_TIME: &str = "urn:object-gate:1.0:environment:current-date-time";
/// Environment attribute for the evaluation date.
pub const ENV_CURRENT_DATE: &str = "urn:object-gate:1.0:environment:current-date";
/// Environment attribute for the evaluation time.
pub const ENV_CURRENT_TIME: &str = "urn:object-gate:1.0:environment:current-time";

/// Environment attribute for the HTTP protocol version.
pub const HTTP_REQUEST_PROTOCOL: &str = "urn:object-gate:1.0:environment:http-request:protocol";
/// Environment attribute for the HTTP scheme.
pub const HTTP_REQUEST_SCHEME: &str = "urn:object-gate:1.0:environment:http-request:scheme";
/// Environment attribute for the transport security flag.
pub const HTTP_REQUEST_SECURITY: &str = "urn:object-gate:1.0:environment:http-request:security";
/// Environment attribute for the HTTP authentication type.
pub const HTTP_REQUEST_AUTH_TYPE: &str = "urn:object-gate:1.0:environment:http-request:auth-type";
/// Environment attribute for the HTTP method.
pub const HTTP_REQUEST_METHOD: &str = "urn:object-gate:1.0:environment:http-request:method";
/// Environment attribute for the session encoding.
pub const HTTP_REQUEST_SESSION_ENCODING: &str =
    "urn:object-gate:1.0:environment:http-request:session-encoding";
/// Environment attribute for the session status.
pub const HTTP_REQUEST_SESSION_STATUS: &str =
    "urn:object-gate:1.0:environment:http-request:session-status";
/// Environment attribute for the request content length.
pub const HTTP_REQUEST_CONTENT_LENGTH: &str =
    "urn:object-gate:1.0:environment:http-request:content-length";
/// Environment attribute for the request content type.
pub const HTTP_REQUEST_CONTENT_TYPE: &str =
    "urn:object-gate:1.0:environment:http-request:content-type";
/// Environment attribute for the client fully qualified domain name.
pub const HTTP_REQUEST_CLIENT_FQDN: &str =
    "urn:object-gate:1.0:environment:http-request:client-fqdn";
/// Environment attribute for the client IP address.
pub const HTTP_REQUEST_CLIENT_IP_ADDRESS: &str =
    "urn:object-gate:1.0:environment:http-request:client-ip-address";
/// Environment attribute for the server fully qualified domain name.
pub const HTTP_REQUEST_SERVER_FQDN: &str =
    "urn:object-gate:1.0:environment:http-request:server-fqdn";
/// Environment attribute for the server IP address.
pub const HTTP_REQUEST_SERVER_IP_ADDRESS: &str =
    "urn:object-gate:1.0:environment:http-request:server-ip-address";
/// Environment attribute for the server port.
pub const HTTP_REQUEST_SERVER_PORT: &str =
    "urn:object-gate:1.0:environment:http-request:server-port";

// ============================================================================
// SECTION: Reserved Identifiers
// ============================================================================

/// Reserved datastream identifier marking the access-control policy object.
pub const POLICY_DATASTREAM_ID: &str = "POLICY";

/// Reserved identifiers protecting the access-control policy object.
///
/// These are configuration constants supplied at startup, never discovered at
/// runtime. Modifying the policy datastream requires the elevated
/// policy-management action regardless of how the content is supplied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReservedIdentifiers {
    /// Datastream identifier of the access-control policy object.
    pub policy_datastream_id: DatastreamId,
    /// Action enforced for operations touching the policy datastream.
    pub manage_policies_action: ActionId,
}

impl Default for ReservedIdentifiers {
    fn default() -> Self {
        Self {
            policy_datastream_id: DatastreamId::new(POLICY_DATASTREAM_ID),
            manage_policies_action: ActionId::new(ACTION_MANAGE_POLICIES),
        }
    }
}

// ============================================================================
// SECTION: Finder Defaults
// ============================================================================

/// Attribute identifiers the context attribute finder must never resolve.
///
/// These are always supplied directly by the evaluation engine from the
/// original request; resolving them from a registered context would let a
/// stale or attacker-influenced entry shadow the real values.
pub const DENIED_ATTRIBUTES: &[&str] = &[
    XACML1_SUBJECT_ID,
    XACML1_ACTION_ID,
    XACML1_RESOURCE_ID,
    ACTION_CONTEXT_ID,
    SUBJECT_LOGIN_ID,
    ACTION_ID,
    ACTION_API,
    OBJECT_PID,
];

/// Environment attributes advertised by the default finder table.
pub const ENVIRONMENT_ATTRIBUTES: &[&str] = &[
    ENV_CURRENT_DATE_TIME,
    ENV_CURRENT_DATE,
    ENV_CURRENT_TIME,
    HTTP_REQUEST_PROTOCOL,
    HTTP_REQUEST_SCHEME,
    HTTP_REQUEST_SECURITY,
    HTTP_REQUEST_AUTH_TYPE,
    HTTP_REQUEST_METHOD,
    HTTP_REQUEST_SESSION_ENCODING,
    HTTP_REQUEST_SESSION_STATUS,
    HTTP_REQUEST_CONTENT_LENGTH,
    HTTP_REQUEST_CONTENT_TYPE,
    HTTP_REQUEST_CLIENT_FQDN,
    HTTP_REQUEST_CLIENT_IP_ADDRESS,
    HTTP_REQUEST_SERVER_FQDN,
    HTTP_REQUEST_SERVER_IP_ADDRESS,
    HTTP_REQUEST_SERVER_PORT,
];

/// Returns the default deny list as owned attribute identifiers.
#[must_use]
pub fn default_denied_attributes() -> Vec<AttributeId> {
    DENIED_ATTRIBUTES.iter().map(|id| AttributeId::new(*id)).collect()
}
