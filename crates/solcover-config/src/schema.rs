// crates/solcover-config/src/schema.rs
// ============================================================================
// Module: Config Schemas
// Description: JSON schema builders for .solcover.toml.
// Purpose: Provide canonical validation schema for config artifacts.
// Dependencies: serde_json
// ============================================================================

//! ## Overview
//! This module defines the JSON Schema for the coverage configuration
//! document. Bounds mirror the limits enforced by
//! [`CoverageConfig::validate`](crate::CoverageConfig::validate) so editors and
//! CI pipelines reject the same inputs the loader does. Length bounds in the
//! schema count characters while the loader counts bytes, so the loader is
//! stricter for non-ASCII paths.

use serde_json::Value;
use serde_json::json;

use crate::config::BUILTIN_REPORTERS;
use crate::config::MAX_GREP_LENGTH;
use crate::config::MAX_REPORTER_LENGTH;
use crate::config::MAX_REPORTERS;
use crate::config::MAX_SKIP_FILES;
use crate::config::MAX_TIMEOUT_MS;
use crate::config::MAX_TOTAL_PATH_LENGTH;

/// Pattern matching a mnemonic of 12, 15, 18, 21, or 24 lowercase words.
const MNEMONIC_PATTERN: &str = "^[a-z]{1,8}( [a-z]{1,8}){11}(( [a-z]{1,8}){3}){0,4}$";
/// Pattern matching a reporter identifier.
const REPORTER_PATTERN: &str = "^[a-z0-9_.@/-]+$";
/// Pattern matching a relative skip path with no empty, `.`, or `..` segment.
const SKIP_PATH_PATTERN: &str =
    r"^(?:[^/\\]*[^./\\][^/\\]*|\.{3,})(?:/(?:[^/\\]*[^./\\][^/\\]*|\.{3,}))*$";
/// Pattern bounding every skip path component to 255 characters.
const SKIP_COMPONENT_PATTERN: &str = r"^[^/]{1,255}(?:/[^/]{1,255})*$";
/// Pattern rejecting leading or trailing whitespace (and blank entries).
const TRIMMED_PATTERN: &str = r"^\S(?:[\s\S]*\S)?$";

/// Returns the JSON schema for `.solcover.toml`.
#[must_use]
pub fn config_schema() -> Value {
    json!({
        "$schema": "https://json-schema.org/draft/2020-12/schema",
        "$id": "solcover://schemas/config.schema.json",
        "title": "Solcover Coverage Configuration",
        "description": "Configuration for coverage instrumentation and the coverage test run.",
        "type": "object",
        "properties": {
            "providerOptions": provider_options_schema(),
            "istanbulReporter": reporters_schema(),
            "skipFiles": skip_files_schema(),
            "mocha": mocha_schema()
        },
        "required": ["providerOptions", "istanbulReporter", "mocha"],
        "additionalProperties": false
    })
}

// ============================================================================
// SECTION: Provider Options
// ============================================================================

/// Schema for the simulated chain provider section.
fn provider_options_schema() -> Value {
    json!({
        "type": "object",
        "description": "Options for the simulated chain provider.",
        "properties": {
            "mnemonic": {
                "type": "string",
                "pattern": MNEMONIC_PATTERN,
                "description": "Seed phrase for deterministic test account derivation."
            },
            "default_balance_ether": {
                "type": "integer",
                "minimum": 0,
                "maximum": u64::MAX,
                "description": "Starting balance of each generated account, in ether."
            }
        },
        "required": ["mnemonic", "default_balance_ether"],
        "additionalProperties": false
    })
}

// ============================================================================
// SECTION: Reporters and Skip Files
// ============================================================================

/// Schema for the reporter list.
fn reporters_schema() -> Value {
    json!({
        "type": "array",
        "minItems": 1,
        "maxItems": MAX_REPORTERS,
        "uniqueItems": true,
        "items": {
            "type": "string",
            "minLength": 1,
            "maxLength": MAX_REPORTER_LENGTH,
            "pattern": REPORTER_PATTERN,
            "examples": BUILTIN_REPORTERS
        },
        "description": "Report formats, generated in declared order."
    })
}

/// Schema for the skip file list.
fn skip_files_schema() -> Value {
    json!({
        "type": "array",
        "maxItems": MAX_SKIP_FILES,
        "items": {
            "type": "string",
            "minLength": 1,
            "maxLength": MAX_TOTAL_PATH_LENGTH,
            "allOf": [
                { "pattern": SKIP_PATH_PATTERN },
                { "pattern": SKIP_COMPONENT_PATTERN },
                { "pattern": TRIMMED_PATTERN }
            ]
        },
        "default": [],
        "description": "Contract paths excluded from instrumentation (duplicates ignored)."
    })
}

// ============================================================================
// SECTION: Mocha Options
// ============================================================================

/// Schema for the test runner section.
fn mocha_schema() -> Value {
    json!({
        "type": "object",
        "description": "Options forwarded to the test runner.",
        "properties": {
            "grep": {
                "type": "string",
                "maxLength": MAX_GREP_LENGTH,
                "description": "Tag pattern used to select tests."
            },
            "invert": {
                "type": "boolean",
                "description": "Run the inverse of the grep selection."
            },
            "enableTimeouts": {
                "type": "boolean",
                "description": "Enforce per-test timeouts."
            },
            "timeout": {
                "type": "integer",
                "minimum": 0,
                "maximum": MAX_TIMEOUT_MS,
                "description": "Per-test timeout in milliseconds."
            }
        },
        "required": ["grep", "invert", "enableTimeouts", "timeout"],
        "allOf": [
            {
                "if": {
                    "properties": { "enableTimeouts": { "const": true } }
                },
                "then": {
                    "properties": { "timeout": { "minimum": 1 } }
                }
            }
        ],
        "additionalProperties": false
    })
}
