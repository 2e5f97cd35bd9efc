// object-gate-config/tests/common/mod.rs
// =============================================================================
// Module: Config Test Helpers
// Description: Shared helpers for config validation tests.
// Purpose: Reduce duplication across integration tests for object-gate-config.
// =============================================================================

#![allow(dead_code, reason = "Test helpers are selectively used across suites.")]

use object_gate_config::PepConfig;

/// Parses a TOML string into a `PepConfig` for tests.
pub fn config_from_toml(toml_str: &str) -> Result<PepConfig, toml::de::Error> {
    toml::from_str(toml_str)
}

/// Returns a minimal config with all defaults applied.
pub fn minimal_config() -> Result<PepConfig, toml::de::Error> {
    config_from_toml("")
}
