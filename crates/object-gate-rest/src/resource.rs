// object-gate-rest/src/resource.rs
// ============================================================================
// Module: Object Gate Resource Attributes
// Description: Resource attribute building from descriptors and parameters.
// Purpose: Produce the identifier chain and merge optional operation parameters.
// Dependencies: object-gate-core, url
// ============================================================================

//! ## Overview
//! Resource attributes always start from the path-derived identifier chain:
//! the full resource path, the object pid, and (for datastream operations)
//! the datastream id. Optional operation parameters are merged in afterwards,
//! and only when present and non-empty: absence of a parameter must leave the
//! attribute key absent, never inserted with a placeholder value.

// ============================================================================
// SECTION: Imports
// ============================================================================

use object_gate_core::AttributeId;
use object_gate_core::AttributeMap;
use object_gate_core::AttributeValue;
use object_gate_core::core::vocabulary;
use url::Url;

use crate::operation::PARAM_CHECKSUM;
use crate::operation::PARAM_CHECKSUM_TYPE;
use crate::operation::PARAM_DS_LOCATION;
use crate::operation::PARAM_FORMAT_URI;
use crate::operation::PARAM_MIME_TYPE;
use crate::operation::RestOperation;
use crate::path::OperationDescriptor;
use crate::path::TranslationError;

// ============================================================================
// SECTION: Identifier Chain
// ============================================================================

/// Builds the path-derived resource attribute chain for a descriptor.
#[must_use]
pub fn build_resource_attributes(descriptor: &OperationDescriptor) -> AttributeMap {
    let mut resources = AttributeMap::new();
    resources.insert(
        AttributeId::new(vocabulary::XACML1_RESOURCE_ID),
        AttributeValue::string(descriptor.resource_path()),
    );
    resources.insert(
        AttributeId::new(vocabulary::OBJECT_PID),
        AttributeValue::string(descriptor.object_id().as_str()),
    );
    if let Some(datastream_id) = descriptor.datastream_id() {
        resources.insert(
            AttributeId::new(vocabulary::DATASTREAM_ID),
            AttributeValue::string(datastream_id.as_str()),
        );
    }
    resources
}

// ============================================================================
// SECTION: Optional Parameters
// ============================================================================

/// Merges optional datastream parameters into the resource attributes.
///
/// # Errors
///
/// Returns [`TranslationError::InvalidParameter`] when a URI-valued
/// parameter does not parse; the operation is rejected rather than
/// submitting a partially built request.
pub fn apply_datastream_parameters(
    resources: &mut AttributeMap,
    operation: &RestOperation,
) -> Result<(), TranslationError> {
    if let Some(mime_type) = operation.parameter(PARAM_MIME_TYPE) {
        resources.insert(
            AttributeId::new(vocabulary::DATASTREAM_NEW_MIME_TYPE),
            AttributeValue::string(mime_type),
        );
    }
    if let Some(format_uri) = operation.parameter(PARAM_FORMAT_URI) {
        resources.insert(
            AttributeId::new(vocabulary::DATASTREAM_NEW_FORMAT_URI),
            AttributeValue::any_uri(parse_uri_parameter(PARAM_FORMAT_URI, format_uri)?),
        );
    }
    if let Some(location) = operation.parameter(PARAM_DS_LOCATION) {
        resources.insert(
            AttributeId::new(vocabulary::DATASTREAM_NEW_LOCATION),
            AttributeValue::any_uri(parse_uri_parameter(PARAM_DS_LOCATION, location)?),
        );
    }
    if let Some(checksum_type) = operation.parameter(PARAM_CHECKSUM_TYPE) {
        resources.insert(
            AttributeId::new(vocabulary::DATASTREAM_NEW_CHECKSUM_TYPE),
            AttributeValue::string(checksum_type),
        );
    }
    if let Some(checksum) = operation.parameter(PARAM_CHECKSUM) {
        resources.insert(
            AttributeId::new(vocabulary::DATASTREAM_NEW_CHECKSUM),
            AttributeValue::string(checksum),
        );
    }
    Ok(())
}

/// Parses a URI-valued parameter, naming the parameter on failure.
fn parse_uri_parameter(name: &str, value: &str) -> Result<Url, TranslationError> {
    Url::parse(value).map_err(|err| TranslationError::InvalidParameter {
        name: name.to_string(),
        reason: err.to_string(),
    })
}
