// crates/solcover-config/src/lib.rs
// ============================================================================
// Module: Solcover Config Library
// Description: Canonical config model, validation, and artifact generation.
// Purpose: Single source of truth for .solcover.toml semantics.
// Dependencies: serde, serde_json, toml, tracing
// ============================================================================

//! ## Overview
//! `solcover-config` defines the configuration consumed by a smart-contract
//! coverage run: the simulated chain provider seed and balance, the Istanbul
//! reporters, the contracts excluded from instrumentation, and the options
//! forwarded to the test runner. Loading is strict and fail-closed, and the
//! crate provides deterministic generators for the config schema, example,
//! and docs.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod config;
pub mod docs;
pub mod examples;
pub mod schema;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use config::*;
pub use docs::DocsError;
pub use docs::config_docs_markdown;
pub use docs::verify_config_docs;
pub use docs::write_config_docs;
pub use examples::config_toml_example;
pub use schema::config_schema;
