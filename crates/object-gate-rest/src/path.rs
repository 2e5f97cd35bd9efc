// object-gate-rest/src/path.rs
// ============================================================================
// Module: Object Gate Operation Descriptor
// Description: Path-segment parsing for repository operation targets.
// Purpose: Extract object and datastream identifiers with minimum-length checks.
// Dependencies: object-gate-core, serde, thiserror
// ============================================================================

//! ## Overview
//! Operation descriptors are derived from the request path. Each operation
//! type enforces its own minimum segment count before translation proceeds;
//! a path that is too short is rejected before any policy request is built.
//! Datastream-scoped paths have the shape `objects/{pid}/datastreams/{dsid}`.

// ============================================================================
// SECTION: Imports
// ============================================================================

use object_gate_core::DatastreamId;
use object_gate_core::ObjectId;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

// ============================================================================
// SECTION: Translation Errors
// ============================================================================

/// Request-translation errors.
///
/// Both variants reject the operation before it reaches the decision engine;
/// a partially built request is never submitted.
#[derive(Debug, Error)]
pub enum TranslationError {
    /// The path has too few segments for the operation.
    #[error("not enough path components on the URI: expected at least {required}, found {found}")]
    MalformedPath {
        /// Minimum number of segments required by the operation.
        required: usize,
        /// Number of non-empty segments found.
        found: usize,
    },
    /// A parameter value could not be interpreted.
    #[error("invalid value for parameter `{name}`: {reason}")]
    InvalidParameter {
        /// Parameter name as received from the HTTP layer.
        name: String,
        /// Why the value was rejected.
        reason: String,
    },
    /// Assembly of the final request failed.
    #[error(transparent)]
    Assembly(#[from] object_gate_core::AssemblyError),
}

// ============================================================================
// SECTION: Segment Layout
// ============================================================================

/// Minimum segment count for object-scoped operations.
pub const OBJECT_MIN_SEGMENTS: usize = 2;
/// Minimum segment count for datastream-scoped operations.
pub const DATASTREAM_MIN_SEGMENTS: usize = 4;

/// Index of the object id in a parsed path.
const OBJECT_ID_SEGMENT: usize = 1;
/// Index of the datastream id in a parsed path.
const DATASTREAM_ID_SEGMENT: usize = 3;

// ============================================================================
// SECTION: Operation Descriptor
// ============================================================================

/// Parsed operation target derived from the request path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationDescriptor {
    /// Non-empty path segments in request order.
    segments: Vec<String>,
    /// Repository object id extracted from the path.
    object_id: ObjectId,
    /// Datastream id, present for datastream-scoped operations.
    datastream_id: Option<DatastreamId>,
}

impl OperationDescriptor {
    /// Parses an object-scoped path: `objects/{pid}`.
    ///
    /// # Errors
    ///
    /// Returns [`TranslationError::MalformedPath`] when fewer than
    /// [`OBJECT_MIN_SEGMENTS`] non-empty segments are present.
    pub fn parse_object(segments: &[String]) -> Result<Self, TranslationError> {
        Self::parse(segments, OBJECT_MIN_SEGMENTS)
    }

    /// Parses a datastream-scoped path: `objects/{pid}/datastreams/{dsid}`.
    ///
    /// # Errors
    ///
    /// Returns [`TranslationError::MalformedPath`] when fewer than
    /// [`DATASTREAM_MIN_SEGMENTS`] non-empty segments are present.
    pub fn parse_datastream(segments: &[String]) -> Result<Self, TranslationError> {
        Self::parse(segments, DATASTREAM_MIN_SEGMENTS)
    }

    /// Parses a path against the operation's minimum segment count.
    fn parse(segments: &[String], required: usize) -> Result<Self, TranslationError> {
        let parts: Vec<String> =
            segments.iter().filter(|segment| !segment.is_empty()).cloned().collect();
        if parts.len() < required {
            return Err(TranslationError::MalformedPath {
                required,
                found: parts.len(),
            });
        }
        let object_id = parts
            .get(OBJECT_ID_SEGMENT)
            .map(|segment| ObjectId::new(segment.as_str()))
            .ok_or(TranslationError::MalformedPath {
                required,
                found: parts.len(),
            })?;
        let datastream_id = if parts.len() > DATASTREAM_ID_SEGMENT {
            parts.get(DATASTREAM_ID_SEGMENT).map(|segment| DatastreamId::new(segment.as_str()))
        } else {
            None
        };
        Ok(Self {
            segments: parts,
            object_id,
            datastream_id,
        })
    }

    /// Returns the non-empty path segments.
    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Returns the repository object id.
    #[must_use]
    pub const fn object_id(&self) -> &ObjectId {
        &self.object_id
    }

    /// Returns the datastream id for datastream-scoped operations.
    #[must_use]
    pub const fn datastream_id(&self) -> Option<&DatastreamId> {
        self.datastream_id.as_ref()
    }

    /// Returns the datastream id or rejects the path as malformed.
    ///
    /// # Errors
    ///
    /// Returns [`TranslationError::MalformedPath`] when the path carries no
    /// datastream segment.
    pub fn require_datastream(&self) -> Result<&DatastreamId, TranslationError> {
        self.datastream_id.as_ref().ok_or(TranslationError::MalformedPath {
            required: DATASTREAM_MIN_SEGMENTS,
            found: self.segments.len(),
        })
    }

    /// Returns the full path-derived resource identifier.
    #[must_use]
    pub fn resource_path(&self) -> String {
        format!("/{}", self.segments.join("/"))
    }
}
