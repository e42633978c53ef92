// crates/solcover-cli/src/lib.rs
// ============================================================================
// Module: Solcover CLI Library
// Description: Shared helpers for the Solcover command-line interface.
// Purpose: Provide reusable components (i18n, logging) for the CLI binary and tests.
// Dependencies: tracing-subscriber
// ============================================================================

//! ## Overview
//! This library module houses shared CLI utilities: the message catalog used
//! for all user-facing output and the tracing subscriber setup. The binary
//! entry point (`src/main.rs`) imports these helpers to keep output consistent.

// ============================================================================
// SECTION: Modules
// ============================================================================

/// Message catalog and translation helpers.
pub mod i18n;
/// Tracing subscriber initialization.
pub mod logging;
