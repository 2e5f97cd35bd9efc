// object-gate-config/src/config.rs
// ============================================================================
// Module: Object Gate Configuration
// Description: Configuration loading and validation for the enforcement point.
// Purpose: Provide strict, fail-closed config parsing with hard limits.
// Dependencies: object-gate-core, serde, toml
// ============================================================================

//! ## Overview
//! Configuration is loaded from a TOML file with strict size and path limits.
//! Missing or invalid configuration fails closed to preserve the enforcement
//! posture. The finder attribute table is validated once here, at startup,
//! so the runtime never consults an unvalidated registration.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::env;
use std::fs;
use std::path::Path;
use std::path::PathBuf;

use object_gate_core::ActionId;
use object_gate_core::AttributeId;
use object_gate_core::AttributeRegistration;
use object_gate_core::AttributeTable;
use object_gate_core::DatastreamId;
use object_gate_core::DesignatorType;
use object_gate_core::ReservedIdentifiers;
use object_gate_core::core::vocabulary;
use serde::Deserialize;
use thiserror::Error;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Default configuration filename when no path is specified.
const DEFAULT_CONFIG_NAME: &str = "object-gate.toml";
/// Environment variable used to override the config path.
pub(crate) const CONFIG_ENV_VAR: &str = "OBJECT_GATE_CONFIG";
/// Maximum configuration file size in bytes.
pub(crate) const MAX_CONFIG_FILE_SIZE: usize = 1024 * 1024;
/// Maximum length of a single path component.
pub(crate) const MAX_PATH_COMPONENT_LENGTH: usize = 255;
/// Maximum total path length.
pub(crate) const MAX_TOTAL_PATH_LENGTH: usize = 4096;
/// Maximum number of finder attribute table entries.
pub(crate) const MAX_TABLE_ENTRIES: usize = 256;
/// Maximum number of deny-list additions.
pub(crate) const MAX_DENY_ENTRIES: usize = 256;
/// Maximum length of an attribute identifier string.
pub(crate) const MAX_ATTRIBUTE_ID_LENGTH: usize = 512;

// ============================================================================
// SECTION: Configuration Types
// ============================================================================

/// Object Gate enforcement-point configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PepConfig {
    /// Finder attribute table configuration.
    #[serde(default)]
    pub finder: FinderConfig,
    /// Reserved identifier overrides.
    #[serde(default)]
    pub reserved: ReservedConfig,
}

/// Finder attribute table configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct FinderConfig {
    /// Whether unregistered attributes may be resolved ad hoc.
    #[serde(default = "default_adhoc")]
    pub adhoc: bool,
    /// Attribute registrations added to the default table.
    #[serde(default)]
    pub attributes: Vec<AttributeEntry>,
    /// Attribute identifiers added to the fixed deny list.
    #[serde(default)]
    pub deny: Vec<String>,
}

impl Default for FinderConfig {
    fn default() -> Self {
        Self {
            adhoc: default_adhoc(),
            attributes: Vec::new(),
            deny: Vec::new(),
        }
    }
}

/// One finder attribute registration entry.
#[derive(Debug, Clone, Deserialize)]
pub struct AttributeEntry {
    /// Attribute identifier the entry covers.
    pub id: String,
    /// Designator types the attribute may be resolved under.
    pub designators: Vec<DesignatorType>,
    /// Whether the finder may serve the attribute.
    #[serde(default = "default_resolvable")]
    pub resolvable: bool,
}

/// Reserved identifier overrides.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReservedConfig {
    /// Overrides the reserved policy datastream identifier.
    #[serde(default)]
    pub policy_datastream_id: Option<String>,
    /// Overrides the enforced policy-management action.
    #[serde(default)]
    pub manage_policies_action: Option<String>,
}

/// Default for ad-hoc resolution.
const fn default_adhoc() -> bool {
    true
}

/// Default for entry resolvability.
const fn default_resolvable() -> bool {
    true
}

// ============================================================================
// SECTION: Loading and Validation
// ============================================================================

impl PepConfig {
    /// Loads configuration from disk using the default resolution rules.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when loading or validation fails.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let resolved = resolve_path(path)?;
        validate_path(&resolved)?;
        let bytes = fs::read(&resolved).map_err(|err| ConfigError::Io(err.to_string()))?;
        if bytes.len() > MAX_CONFIG_FILE_SIZE {
            return Err(ConfigError::Invalid("config file exceeds size limit".to_string()));
        }
        let content = std::str::from_utf8(&bytes)
            .map_err(|_| ConfigError::Invalid("config file must be utf-8".to_string()))?;
        let config: Self =
            toml::from_str(content).map_err(|err| ConfigError::Parse(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration for internal consistency.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when configuration is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.finder.validate()?;
        self.reserved.validate()?;
        let _table = self.finder_table()?;
        Ok(())
    }

    /// Materializes the validated finder attribute table.
    ///
    /// Configured entries extend the default table (environment and
    /// HTTP-request attributes plus the fixed deny list).
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the table rules reject an entry.
    pub fn finder_table(&self) -> Result<AttributeTable, ConfigError> {
        let mut registrations: Vec<AttributeRegistration> = vocabulary::ENVIRONMENT_ATTRIBUTES
            .iter()
            .map(|id| {
                AttributeRegistration::resolvable(
                    AttributeId::new(*id),
                    [DesignatorType::Environment],
                )
            })
            .collect();
        for entry in &self.finder.attributes {
            registrations.push(AttributeRegistration {
                attribute_id: AttributeId::new(entry.id.as_str()),
                designators: entry.designators.iter().copied().collect(),
                resolvable: entry.resolvable,
            });
        }
        let extra_denied =
            self.finder.deny.iter().map(|id| AttributeId::new(id.as_str())).collect();
        AttributeTable::new(registrations, extra_denied, self.finder.adhoc)
            .map_err(|err| ConfigError::Invalid(err.to_string()))
    }

    /// Returns the reserved identifiers, applying configured overrides.
    #[must_use]
    pub fn reserved_identifiers(&self) -> ReservedIdentifiers {
        let defaults = ReservedIdentifiers::default();
        ReservedIdentifiers {
            policy_datastream_id: self
                .reserved
                .policy_datastream_id
                .as_deref()
                .map_or(defaults.policy_datastream_id, DatastreamId::new),
            manage_policies_action: self
                .reserved
                .manage_policies_action
                .as_deref()
                .map_or(defaults.manage_policies_action, ActionId::new),
        }
    }
}

impl FinderConfig {
    /// Validates finder configuration limits.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when limits are exceeded or ids are invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.attributes.len() > MAX_TABLE_ENTRIES {
            return Err(ConfigError::Invalid(format!(
                "finder.attributes exceeds {MAX_TABLE_ENTRIES} entries"
            )));
        }
        if self.deny.len() > MAX_DENY_ENTRIES {
            return Err(ConfigError::Invalid(format!(
                "finder.deny exceeds {MAX_DENY_ENTRIES} entries"
            )));
        }
        for entry in &self.attributes {
            validate_attribute_id("finder.attributes.id", &entry.id)?;
            if entry.designators.is_empty() {
                return Err(ConfigError::Invalid(format!(
                    "finder.attributes entry `{}` names no designator types",
                    entry.id
                )));
            }
        }
        for denied in &self.deny {
            validate_attribute_id("finder.deny", denied)?;
        }
        Ok(())
    }
}

impl ReservedConfig {
    /// Validates reserved identifier overrides.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when an override is empty or too long.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(id) = &self.policy_datastream_id {
            validate_attribute_id("reserved.policy_datastream_id", id)?;
        }
        if let Some(action) = &self.manage_policies_action {
            validate_attribute_id("reserved.manage_policies_action", action)?;
        }
        Ok(())
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O failure while reading configuration.
    #[error("config io error: {0}")]
    Io(String),
    /// TOML parsing error.
    #[error("config parse error: {0}")]
    Parse(String),
    /// Invalid configuration data.
    #[error("invalid config: {0}")]
    Invalid(String),
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Resolves the config path from the argument or environment defaults.
fn resolve_path(path: Option<&Path>) -> Result<PathBuf, ConfigError> {
    if let Some(path) = path {
        return Ok(path.to_path_buf());
    }
    if let Ok(env_path) = env::var(CONFIG_ENV_VAR) {
        if env_path.len() > MAX_TOTAL_PATH_LENGTH {
            return Err(ConfigError::Invalid("config path exceeds max length".to_string()));
        }
        return Ok(PathBuf::from(env_path));
    }
    Ok(PathBuf::from(DEFAULT_CONFIG_NAME))
}

/// Validates the resolved path against length limits.
fn validate_path(path: &Path) -> Result<(), ConfigError> {
    let text = path.to_string_lossy();
    if text.len() > MAX_TOTAL_PATH_LENGTH {
        return Err(ConfigError::Invalid("config path exceeds max length".to_string()));
    }
    for component in path.components() {
        let value = component.as_os_str().to_string_lossy();
        if value.len() > MAX_PATH_COMPONENT_LENGTH {
            return Err(ConfigError::Invalid("config path component too long".to_string()));
        }
    }
    Ok(())
}

/// Validates an identifier string against emptiness and length limits.
fn validate_attribute_id(field: &str, value: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::Invalid(format!("{field} must be non-empty")));
    }
    if value.len() > MAX_ATTRIBUTE_ID_LENGTH {
        return Err(ConfigError::Invalid(format!("{field} exceeds max length")));
    }
    Ok(())
}
