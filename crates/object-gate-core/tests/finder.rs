// object-gate-core/tests/finder.rs
// ============================================================================
// Module: Context Attribute Finder Tests
// Description: Validate late-bound resolution, deny-list, and table rules.
// Purpose: Ensure finder misses are silent and framework ids are never served.
// Dependencies: object-gate-core
// ============================================================================
//! ## Overview
//! Exercises the finder resolution state machine: context-id extraction and
//! validity, registry lookup, designator dispatch, deny-list enforcement,
//! and attribute-table validation.

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

use object_gate_core::AttributeFinder;
use object_gate_core::AttributeId;
use object_gate_core::AttributeMap;
use object_gate_core::AttributeRegistration;
use object_gate_core::AttributeTable;
use object_gate_core::AttributeValue;
use object_gate_core::AuthorizationRequest;
use object_gate_core::ContextAttributeFinder;
use object_gate_core::ContextId;
use object_gate_core::ContextRegistry;
use object_gate_core::DesignatorType;
use object_gate_core::RequestContext;
use object_gate_core::Resolution;
use object_gate_core::TableError;
use object_gate_core::core::vocabulary;
use url::Url;

const DEPARTMENT: &str = "urn:test:subject:department";

fn request_with_context_id(value: AttributeValue) -> AuthorizationRequest {
    let mut actions = AttributeMap::new();
    actions.insert(
        AttributeId::new(vocabulary::ACTION_ID),
        AttributeValue::string(vocabulary::ACTION_MODIFY_DATASTREAM_BY_VALUE),
    );
    actions.insert(
        AttributeId::new(vocabulary::ACTION_API),
        AttributeValue::string(vocabulary::API_MANAGEMENT),
    );
    actions.insert(AttributeId::new(vocabulary::ACTION_CONTEXT_ID), value);
    let mut resources = AttributeMap::new();
    resources.insert(
        AttributeId::new(vocabulary::XACML1_RESOURCE_ID),
        AttributeValue::string("/objects/demo:1"),
    );
    AuthorizationRequest::assemble(Vec::new(), actions, resources, AttributeMap::new()).unwrap()
}

fn populated_context() -> RequestContext {
    let mut context = RequestContext::new();
    context.add_value(DesignatorType::Subject, AttributeId::new(DEPARTMENT), "archives");
    context.add_value(DesignatorType::Subject, AttributeId::new(DEPARTMENT), "cataloguing");
    context.add_value(
        DesignatorType::Resource,
        AttributeId::new("urn:test:resource:owner"),
        "curator",
    );
    context.add_value(
        DesignatorType::Environment,
        AttributeId::new(vocabulary::HTTP_REQUEST_METHOD),
        "PUT",
    );
    context.add_value(
        DesignatorType::Action,
        AttributeId::new("urn:test:action:origin"),
        "rest",
    );
    context
}

/// Tests resolution dispatches to each designator multimap.
#[test]
fn resolves_each_designator_type() {
    let registry = ContextRegistry::new();
    let finder = ContextAttributeFinder::with_defaults(registry.clone());
    let request = request_with_context_id(AttributeValue::string("ctx-1"));
    let _guard = registry.register(ContextId::new("ctx-1"), populated_context()).unwrap();

    let cases = [
        (DesignatorType::Subject, DEPARTMENT, vec!["archives", "cataloguing"]),
        (DesignatorType::Resource, "urn:test:resource:owner", vec!["curator"]),
        (DesignatorType::Environment, vocabulary::HTTP_REQUEST_METHOD, vec!["PUT"]),
        (DesignatorType::Action, "urn:test:action:origin", vec!["rest"]),
    ];
    for (designator, attribute, expected) in cases {
        let resolution = finder.resolve(designator, &AttributeId::new(attribute), None, &request);
        let expected: Vec<AttributeValue> =
            expected.into_iter().map(AttributeValue::string).collect();
        assert_eq!(resolution, Resolution::Values(expected), "designator {designator}");
    }
}

/// Tests multi-valued attributes keep insertion order.
#[test]
fn multi_valued_attributes_keep_order() {
    let registry = ContextRegistry::new();
    let finder = ContextAttributeFinder::with_defaults(registry.clone());
    let request = request_with_context_id(AttributeValue::string("ctx-1"));

    let mut context = RequestContext::new();
    for value in ["zeta", "alpha", "midway"] {
        context.add_value(DesignatorType::Subject, AttributeId::new(DEPARTMENT), value);
    }
    let _guard = registry.register(ContextId::new("ctx-1"), context).unwrap();

    let resolution =
        finder.resolve(DesignatorType::Subject, &AttributeId::new(DEPARTMENT), None, &request);
    assert_eq!(
        resolution,
        Resolution::Values(vec![
            AttributeValue::string("zeta"),
            AttributeValue::string("alpha"),
            AttributeValue::string("midway"),
        ])
    );
}

/// Tests missing, non-string, blank, and unknown context ids resolve to no value.
#[test]
fn invalid_context_ids_resolve_to_no_value() {
    let registry = ContextRegistry::new();
    let finder = ContextAttributeFinder::with_defaults(registry.clone());
    let _guard = registry.register(ContextId::new("ctx-live"), populated_context()).unwrap();
    let attribute = AttributeId::new(DEPARTMENT);

    let mut no_context_actions = AttributeMap::new();
    no_context_actions.insert(
        AttributeId::new(vocabulary::ACTION_ID),
        AttributeValue::string(vocabulary::ACTION_MODIFY_DATASTREAM_BY_VALUE),
    );
    no_context_actions.insert(
        AttributeId::new(vocabulary::ACTION_API),
        AttributeValue::string(vocabulary::API_MANAGEMENT),
    );
    let mut resources = AttributeMap::new();
    resources.insert(
        AttributeId::new(vocabulary::XACML1_RESOURCE_ID),
        AttributeValue::string("/objects/demo:1"),
    );
    let missing =
        AuthorizationRequest::assemble(Vec::new(), no_context_actions, resources, AttributeMap::new())
            .unwrap();
    assert!(finder.resolve(DesignatorType::Subject, &attribute, None, &missing).is_no_value());

    let non_string = request_with_context_id(AttributeValue::any_uri(
        Url::parse("https://example.org/ctx").unwrap(),
    ));
    assert!(finder.resolve(DesignatorType::Subject, &attribute, None, &non_string).is_no_value());

    for raw in ["", " ", "ctx-unknown"] {
        let request = request_with_context_id(AttributeValue::string(raw));
        assert!(
            finder.resolve(DesignatorType::Subject, &attribute, None, &request).is_no_value(),
            "context id {raw:?}"
        );
    }
}

/// Tests an attribute with no recorded values resolves to no value.
#[test]
fn absent_attribute_resolves_to_no_value() {
    let registry = ContextRegistry::new();
    let finder = ContextAttributeFinder::with_defaults(registry.clone());
    let request = request_with_context_id(AttributeValue::string("ctx-1"));
    let _guard = registry.register(ContextId::new("ctx-1"), populated_context()).unwrap();

    let resolution = finder.resolve(
        DesignatorType::Environment,
        &AttributeId::new("urn:test:environment:unrecorded"),
        None,
        &request,
    );
    assert!(resolution.is_no_value());
}

/// Tests deny-listed attributes never resolve even when the context holds values.
#[test]
fn deny_listed_attributes_never_resolve() {
    let registry = ContextRegistry::new();
    let finder = ContextAttributeFinder::with_defaults(registry.clone());
    let request = request_with_context_id(AttributeValue::string("ctx-1"));

    let mut context = populated_context();
    for denied in vocabulary::DENIED_ATTRIBUTES {
        for designator in DesignatorType::ALL {
            context.add_value(designator, AttributeId::new(*denied), "shadow-value");
        }
    }
    let _guard = registry.register(ContextId::new("ctx-1"), context).unwrap();

    for denied in vocabulary::DENIED_ATTRIBUTES {
        for designator in DesignatorType::ALL {
            let resolution = finder.resolve(designator, &AttributeId::new(*denied), None, &request);
            assert!(resolution.is_no_value(), "denied attribute {denied} under {designator}");
        }
    }
}

/// Tests disabling ad-hoc resolution restricts the finder to the table.
#[test]
fn adhoc_disabled_restricts_resolution_to_registered_attributes() {
    let registry = ContextRegistry::new();
    let table = AttributeTable::new(
        vec![AttributeRegistration::resolvable(
            AttributeId::new(vocabulary::HTTP_REQUEST_METHOD),
            [DesignatorType::Environment],
        )],
        Vec::new(),
        false,
    )
    .unwrap();
    let finder = ContextAttributeFinder::new(registry.clone(), table);
    let request = request_with_context_id(AttributeValue::string("ctx-1"));
    let _guard = registry.register(ContextId::new("ctx-1"), populated_context()).unwrap();

    let registered = finder.resolve(
        DesignatorType::Environment,
        &AttributeId::new(vocabulary::HTTP_REQUEST_METHOD),
        None,
        &request,
    );
    assert_eq!(registered, Resolution::Values(vec![AttributeValue::string("PUT")]));

    let unregistered =
        finder.resolve(DesignatorType::Subject, &AttributeId::new(DEPARTMENT), None, &request);
    assert!(unregistered.is_no_value());

    let wrong_designator = finder.resolve(
        DesignatorType::Resource,
        &AttributeId::new(vocabulary::HTTP_REQUEST_METHOD),
        None,
        &request,
    );
    assert!(wrong_designator.is_no_value());
}

/// Tests table validation rejects duplicates, empty designators, and shadows.
#[test]
fn table_validation_rejects_invalid_registrations() {
    let duplicate = AttributeTable::new(
        vec![
            AttributeRegistration::resolvable(
                AttributeId::new(DEPARTMENT),
                [DesignatorType::Subject],
            ),
            AttributeRegistration::resolvable(
                AttributeId::new(DEPARTMENT),
                [DesignatorType::Resource],
            ),
        ],
        Vec::new(),
        true,
    );
    assert!(matches!(duplicate, Err(TableError::DuplicateRegistration(_))));

    let empty = AttributeTable::new(
        vec![AttributeRegistration {
            attribute_id: AttributeId::new(DEPARTMENT),
            designators: std::collections::BTreeSet::new(),
            resolvable: true,
        }],
        Vec::new(),
        true,
    );
    assert!(matches!(empty, Err(TableError::EmptyDesignators(_))));

    let shadow = AttributeTable::new(
        vec![AttributeRegistration::resolvable(
            AttributeId::new(vocabulary::XACML1_SUBJECT_ID),
            [DesignatorType::Subject],
        )],
        Vec::new(),
        true,
    );
    assert!(matches!(shadow, Err(TableError::DeniedShadow(_))));
}

/// Tests deny additions extend the fixed framework deny list.
#[test]
fn deny_additions_extend_the_fixed_list() {
    let registry = ContextRegistry::new();
    let table = AttributeTable::new(
        Vec::new(),
        vec![AttributeId::new("urn:test:subject:clearance")],
        true,
    )
    .unwrap();
    let finder = ContextAttributeFinder::new(registry.clone(), table);
    let request = request_with_context_id(AttributeValue::string("ctx-1"));

    let mut context = populated_context();
    context.add_value(
        DesignatorType::Subject,
        AttributeId::new("urn:test:subject:clearance"),
        "secret",
    );
    let _guard = registry.register(ContextId::new("ctx-1"), context).unwrap();

    let denied = finder.resolve(
        DesignatorType::Subject,
        &AttributeId::new("urn:test:subject:clearance"),
        None,
        &request,
    );
    assert!(denied.is_no_value());

    let still_fixed =
        finder.resolve(DesignatorType::Action, &AttributeId::new(vocabulary::ACTION_ID), None, &request);
    assert!(still_fixed.is_no_value());
}
