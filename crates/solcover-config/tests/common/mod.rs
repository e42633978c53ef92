// crates/solcover-config/tests/common/mod.rs
// =============================================================================
// Module: Config Test Helpers
// Description: Shared helpers for config validation tests.
// Purpose: Reduce duplication across integration tests for solcover-config.
// =============================================================================

#![allow(dead_code, reason = "Test helpers are selectively used across suites.")]

use std::fs;
use std::path::Path;
use std::path::PathBuf;

use serde_json::Value;
use serde_json::json;
use solcover_config::ConfigError;
use solcover_config::ConfigFormat;
use solcover_config::CoverageConfig;

/// Mnemonic used by the reference configuration.
pub const MNEMONIC: &str =
    "glad notable bullet donkey fall dolphin simple size stone evil slogan dinner";

/// Returns the `[providerOptions]` table with the reference values.
pub fn provider_table() -> String {
    format!("[providerOptions]\nmnemonic = \"{MNEMONIC}\"\ndefault_balance_ether = 1000000\n")
}

/// Returns the `[mocha]` table with the reference values.
pub fn mocha_table() -> String {
    "[mocha]\ngrep = \"@skip-on-coverage\"\ninvert = true\nenableTimeouts = false\ntimeout = \
     3600000\n"
        .to_string()
}

/// Builds a TOML document from top-level keys plus the reference tables.
pub fn document(top_level: &str) -> String {
    format!("{top_level}\n{}\n{}", provider_table(), mocha_table())
}

/// Builds a TOML document with reference reporters and the given skip list.
pub fn document_with_skip_files(skip_files: &str) -> String {
    document(&format!("istanbulReporter = [\"html\", \"lcov\"]\nskipFiles = {skip_files}"))
}

/// Returns the reference configuration as a JSON value.
pub fn json_document() -> Value {
    json!({
        "providerOptions": {
            "mnemonic": MNEMONIC,
            "default_balance_ether": 1_000_000
        },
        "istanbulReporter": ["html", "lcov"],
        "skipFiles": ["mocks/DAIMock.sol", "utils/DSMath.sol"],
        "mocha": {
            "grep": "@skip-on-coverage",
            "invert": true,
            "enableTimeouts": false,
            "timeout": 3_600_000
        }
    })
}

/// Parses a TOML document into a `CoverageConfig`.
pub fn config_from_toml(content: &str) -> Result<CoverageConfig, ConfigError> {
    CoverageConfig::from_str_with_format(content, ConfigFormat::Toml)
}

/// Writes `content` to `dir/name` and returns the path.
pub fn write_config(dir: &Path, name: &str, content: &str) -> Result<PathBuf, String> {
    let path = dir.join(name);
    fs::write(&path, content).map_err(|err| err.to_string())?;
    Ok(path)
}

/// Asserts that `result` failed with a message containing `needle`.
pub fn assert_error<T>(result: Result<T, ConfigError>, needle: &str) -> Result<ConfigError, String> {
    match result {
        Err(error) => {
            let message = error.to_string();
            if message.contains(needle) {
                Ok(error)
            } else {
                Err(format!("error {message} did not contain {needle}"))
            }
        }
        Ok(_) => Err("expected config error".to_string()),
    }
}

/// Asserts that `result` failed with [`ConfigError::Parse`].
pub fn assert_parse_error<T>(result: Result<T, ConfigError>) -> Result<(), String> {
    match result {
        Err(ConfigError::Parse(_)) => Ok(()),
        Err(other) => Err(format!("expected parse error, got: {other}")),
        Ok(_) => Err("expected parse error, config loaded".to_string()),
    }
}

/// Asserts that `result` failed with [`ConfigError::Invalid`] mentioning `needle`.
pub fn assert_invalid<T>(result: Result<T, ConfigError>, needle: &str) -> Result<(), String> {
    match assert_error(result, needle)? {
        ConfigError::Invalid(_) => Ok(()),
        other => Err(format!("expected invalid config error, got: {other}")),
    }
}
