// object-gate-core/src/runtime/registry.rs
// ============================================================================
// Module: Object Gate Context Registry
// Description: Process-wide registry of in-flight request contexts.
// Purpose: Key live request contexts by context id for finder lookups.
// Dependencies: crate::core, dashmap, thiserror
// ============================================================================

//! ## Overview
//! The registry is the only shared mutable resource in the enforcement point.
//! Entries are fully populated before registration and read-only afterwards,
//! so the finder never observes a partially built context. The map is
//! sharded: create/get/remove on independent context ids do not contend on a
//! single lock. This is a resource-lifecycle store, not a cache: entries are
//! removed explicitly (or by guard drop), never evicted.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::Arc;

use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use thiserror::Error;

use crate::core::ContextId;
use crate::core::RequestContext;

// ============================================================================
// SECTION: Registry Errors
// ============================================================================

/// Context registry errors.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// A context is already registered under the id. Indicates an
    /// id-generation collision in the caller; the existing entry is never
    /// silently overwritten, to avoid cross-request attribute leakage.
    #[error("request context already registered for context id `{0}`")]
    DuplicateContext(ContextId),
    /// The context id is not usable as a registry key.
    #[error("context id `{0}` is not a valid registry key")]
    InvalidContextId(ContextId),
}

// ============================================================================
// SECTION: Context Registry
// ============================================================================

/// Thread-safe registry mapping context ids to live request contexts.
///
/// The registry is an explicit, injectable service: construct one per
/// process and clone handles wherever registration or lookup is needed.
#[derive(Debug, Default, Clone)]
pub struct ContextRegistry {
    /// Sharded context map shared across handles.
    contexts: Arc<DashMap<ContextId, Arc<RequestContext>>>,
}

impl ContextRegistry {
    /// Creates a new, empty context registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            contexts: Arc::new(DashMap::new()),
        }
    }

    /// Registers a fully populated context under the given id.
    ///
    /// The returned guard removes the entry when dropped, so every
    /// completion path, success or failure, releases the registration.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::InvalidContextId`] for an unusable id and
    /// [`RegistryError::DuplicateContext`] when the id is already live.
    pub fn register(
        &self,
        context_id: ContextId,
        context: RequestContext,
    ) -> Result<ContextGuard, RegistryError> {
        if !context_id.is_valid() {
            return Err(RegistryError::InvalidContextId(context_id));
        }
        match self.contexts.entry(context_id.clone()) {
            Entry::Occupied(_) => Err(RegistryError::DuplicateContext(context_id)),
            Entry::Vacant(slot) => {
                slot.insert(Arc::new(context));
                Ok(ContextGuard {
                    registry: self.clone(),
                    context_id,
                })
            }
        }
    }

    /// Returns the registered context for an id, if live.
    #[must_use]
    pub fn get(&self, context_id: &ContextId) -> Option<Arc<RequestContext>> {
        self.contexts.get(context_id).map(|entry| Arc::clone(entry.value()))
    }

    /// Removes the registration for an id. Idempotent: absent ids are a no-op.
    pub fn remove(&self, context_id: &ContextId) {
        let _removed = self.contexts.remove(context_id);
    }

    /// Returns the number of live registrations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.contexts.len()
    }

    /// Returns true when no registrations are live.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.contexts.is_empty()
    }
}

// ============================================================================
// SECTION: Context Guard
// ============================================================================

/// Scoped registration handle; dropping it removes the registry entry.
#[derive(Debug)]
pub struct ContextGuard {
    /// Registry holding the entry.
    registry: ContextRegistry,
    /// Context id owned by this guard.
    context_id: ContextId,
}

impl ContextGuard {
    /// Returns the registered context id.
    #[must_use]
    pub const fn context_id(&self) -> &ContextId {
        &self.context_id
    }
}

impl Drop for ContextGuard {
    fn drop(&mut self) {
        self.registry.remove(&self.context_id);
    }
}
