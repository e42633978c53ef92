// crates/solcover-cli/src/tests/logging.rs
// ============================================================================
// Module: CLI Logging Tests
// Description: Unit tests for tracing filter construction.
// Purpose: Ensure verbosity and SOLCOVER_LOG resolve to the expected filter.
// Dependencies: solcover-cli logging module
// ============================================================================

//! ## Overview
//! Verifies verbosity mapping and directive parsing for the stderr subscriber.

use crate::logging::LoggingError;
use crate::logging::build_filter;
use crate::logging::default_directive;

#[test]
fn verbosity_maps_to_levels() {
    assert_eq!(default_directive(0), "warn");
    assert_eq!(default_directive(1), "info");
    assert_eq!(default_directive(2), "debug");
    assert_eq!(default_directive(3), "trace");
    assert_eq!(default_directive(u8::MAX), "trace");
}

#[test]
fn empty_directives_fall_back_to_verbosity() {
    let filter = build_filter(Some("  "), 1).unwrap();
    assert_eq!(filter.to_string(), "info");
}

#[test]
fn explicit_directives_take_precedence() {
    let filter = build_filter(Some("solcover_config=debug"), 0).unwrap();
    assert_eq!(filter.to_string(), "solcover_config=debug");
}

#[test]
fn invalid_directives_are_rejected() {
    let result = build_filter(Some("solcover_config=loud"), 0);
    assert!(matches!(result, Err(LoggingError::Filter(_))));
}
