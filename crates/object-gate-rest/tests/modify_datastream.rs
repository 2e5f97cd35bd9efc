// object-gate-rest/tests/modify_datastream.rs
// ============================================================================
// Module: Modify Datastream Filter Tests
// Description: Validate action classification and end-to-end translation.
// Purpose: Ensure the policy-object override and the action invariant hold.
// Dependencies: object-gate-rest, object-gate-core
// ============================================================================
//! ## Overview
//! Exercises the action classifier's four cases and the modify-datastream
//! filter end to end: action attributes, context-id propagation, and the
//! subject/environment pass-through.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only output and panic-based assertions are permitted."
)]

use object_gate_core::AttributeId;
use object_gate_core::AttributeMap;
use object_gate_core::AttributeValue;
use object_gate_core::ContextId;
use object_gate_core::DatastreamId;
use object_gate_core::ReservedIdentifiers;
use object_gate_core::core::vocabulary;
use object_gate_rest::ModifyDatastream;
use object_gate_rest::RestFilter;
use object_gate_rest::RestOperation;
use object_gate_rest::TranslationError;
use object_gate_rest::classify;

fn operation(datastream: &str, parameters: &[(&str, &str)]) -> RestOperation {
    let mut subject = AttributeMap::new();
    subject.insert(
        AttributeId::new(vocabulary::SUBJECT_LOGIN_ID),
        AttributeValue::string("curator"),
    );
    let mut environment = AttributeMap::new();
    environment.insert(
        AttributeId::new(vocabulary::HTTP_REQUEST_METHOD),
        AttributeValue::string("PUT"),
    );
    RestOperation {
        segments: vec![
            "objects".to_string(),
            "demo:1".to_string(),
            "datastreams".to_string(),
            datastream.to_string(),
        ],
        parameters: parameters
            .iter()
            .map(|(name, value)| ((*name).to_string(), (*value).to_string()))
            .collect(),
        subjects: vec![subject],
        environment,
        context_id: ContextId::new("ctx-42"),
        remote_user: Some("curator".to_string()),
    }
}

/// Tests the four classification cases.
#[test]
fn classification_covers_location_and_policy_override() {
    let reserved = ReservedIdentifiers::default();

    let by_reference = classify(true, &DatastreamId::new("foo"), &reserved);
    assert_eq!(by_reference.requested.as_str(), vocabulary::ACTION_MODIFY_DATASTREAM_BY_REFERENCE);
    assert_eq!(by_reference.enforced.as_str(), vocabulary::ACTION_MODIFY_DATASTREAM_BY_REFERENCE);
    assert!(!by_reference.overridden());

    let by_value = classify(false, &DatastreamId::new("foo"), &reserved);
    assert_eq!(by_value.requested.as_str(), vocabulary::ACTION_MODIFY_DATASTREAM_BY_VALUE);
    assert_eq!(by_value.enforced.as_str(), vocabulary::ACTION_MODIFY_DATASTREAM_BY_VALUE);
    assert!(!by_value.overridden());

    let policy_by_value =
        classify(false, &DatastreamId::new(vocabulary::POLICY_DATASTREAM_ID), &reserved);
    assert_eq!(policy_by_value.requested.as_str(), vocabulary::ACTION_MODIFY_DATASTREAM_BY_VALUE);
    assert_eq!(policy_by_value.enforced.as_str(), vocabulary::ACTION_MANAGE_POLICIES);
    assert!(policy_by_value.overridden());

    let policy_by_reference =
        classify(true, &DatastreamId::new(vocabulary::POLICY_DATASTREAM_ID), &reserved);
    assert_eq!(
        policy_by_reference.requested.as_str(),
        vocabulary::ACTION_MODIFY_DATASTREAM_BY_REFERENCE
    );
    assert_eq!(policy_by_reference.enforced.as_str(), vocabulary::ACTION_MANAGE_POLICIES);
    assert!(policy_by_reference.overridden());
}

/// Tests configured reserved identifiers drive the override.
#[test]
fn configured_reserved_identifiers_drive_the_override() {
    let reserved = ReservedIdentifiers {
        policy_datastream_id: DatastreamId::new("ACCESS-RULES"),
        manage_policies_action: object_gate_core::ActionId::new(vocabulary::ACTION_MANAGE_POLICIES),
    };
    let classification = classify(false, &DatastreamId::new("ACCESS-RULES"), &reserved);
    assert!(classification.overridden());

    let default_id = classify(false, &DatastreamId::new(vocabulary::POLICY_DATASTREAM_ID), &reserved);
    assert!(!default_id.overridden());
}

/// Tests by-value translation end to end.
#[test]
fn filter_translates_by_value_operation() {
    let filter = ModifyDatastream::default();
    let request = filter.handle(&operation("DC", &[("mimeType", "text/xml")])).unwrap();

    assert_eq!(
        request.actions.get(&AttributeId::new(vocabulary::ACTION_ID)),
        Some(&AttributeValue::string(vocabulary::ACTION_MODIFY_DATASTREAM_BY_VALUE))
    );
    assert_eq!(
        request.actions.get(&AttributeId::new(vocabulary::ACTION_API)),
        Some(&AttributeValue::string(vocabulary::API_MANAGEMENT))
    );
    assert_eq!(
        request.actions.get(&AttributeId::new(vocabulary::ACTION_CONTEXT_ID)),
        Some(&AttributeValue::string("ctx-42"))
    );
    assert_eq!(request.actions.len(), 3);

    assert_eq!(
        request.resources.get(&AttributeId::new(vocabulary::XACML1_RESOURCE_ID)),
        Some(&AttributeValue::string("/objects/demo:1/datastreams/DC"))
    );
    assert_eq!(
        request.resources.get(&AttributeId::new(vocabulary::DATASTREAM_NEW_MIME_TYPE)),
        Some(&AttributeValue::string("text/xml"))
    );

    assert_eq!(request.subjects.len(), 1);
    assert_eq!(
        request.environment.get(&AttributeId::new(vocabulary::HTTP_REQUEST_METHOD)),
        Some(&AttributeValue::string("PUT"))
    );
}

/// Tests a location parameter switches the action to by-reference.
#[test]
fn location_parameter_switches_to_by_reference() {
    let filter = ModifyDatastream::default();
    let request = filter
        .handle(&operation("DC", &[("dsLocation", "https://example.org/content.xml")]))
        .unwrap();

    assert_eq!(
        request.actions.get(&AttributeId::new(vocabulary::ACTION_ID)),
        Some(&AttributeValue::string(vocabulary::ACTION_MODIFY_DATASTREAM_BY_REFERENCE))
    );
    assert!(request.resources.contains(&AttributeId::new(vocabulary::DATASTREAM_NEW_LOCATION)));
}

/// Tests targeting the policy datastream enforces policy management.
#[test]
fn policy_datastream_enforces_manage_policies() {
    let filter = ModifyDatastream::default();
    for parameters in [&[][..], &[("dsLocation", "https://example.org/content.xml")][..]] {
        let request =
            filter.handle(&operation(vocabulary::POLICY_DATASTREAM_ID, parameters)).unwrap();
        assert_eq!(
            request.actions.get(&AttributeId::new(vocabulary::ACTION_ID)),
            Some(&AttributeValue::string(vocabulary::ACTION_MANAGE_POLICIES))
        );
    }
}

/// Tests a malformed path rejects before translation completes.
#[test]
fn malformed_path_rejects_translation() {
    let filter = ModifyDatastream::default();
    let mut short = operation("DC", &[]);
    short.segments.truncate(2);
    let error = filter.handle(&short).expect_err("expected rejection");
    assert!(matches!(
        error,
        TranslationError::MalformedPath {
            ..
        }
    ));
}

/// Tests a malformed location parameter rejects before assembly.
#[test]
fn malformed_location_rejects_translation() {
    let filter = ModifyDatastream::default();
    let error = filter
        .handle(&operation("DC", &[("dsLocation", "no scheme")]))
        .expect_err("expected rejection");
    assert!(matches!(
        error,
        TranslationError::InvalidParameter {
            ..
        }
    ));
}
