// object-gate-rest/src/lib.rs
// ============================================================================
// Module: Object Gate REST Library
// Description: REST-operation translation for the Object Gate enforcement point.
// Purpose: Convert parsed REST operations into authorization requests.
// Dependencies: object-gate-core
// ============================================================================

//! ## Overview
//! This crate turns parsed REST operations into authorization requests for
//! the Object Gate core: operation descriptors from path segments, resource
//! attribute building with optional-parameter merging, action classification
//! with the policy-object override, and the filter contract shared by all
//! operation handlers.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod action;
pub mod filters;
pub mod operation;
pub mod path;
pub mod resource;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use action::ActionClassification;
pub use action::classify;
pub use filters::RestFilter;
pub use filters::modify_datastream::ModifyDatastream;
pub use operation::RestOperation;
pub use path::DATASTREAM_MIN_SEGMENTS;
pub use path::OBJECT_MIN_SEGMENTS;
pub use path::OperationDescriptor;
pub use path::TranslationError;
pub use resource::apply_datastream_parameters;
pub use resource::build_resource_attributes;
