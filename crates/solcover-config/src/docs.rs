// crates/solcover-config/src/docs.rs
// ============================================================================
// Module: Config Reference Docs
// Description: Markdown reference for .solcover.toml rendered from the schema.
// Purpose: Keep the field reference and the loader limits in one place.
// Dependencies: serde_json, thiserror
// ============================================================================

//! ## Overview
//! Renders `docs/configuration/solcover.toml.md` from [`config_schema`]. Each
//! document table becomes a markdown table with one row per key. Rendering is
//! deterministic, and a schema key missing from the row list is an error, so a
//! new field cannot ship undocumented.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use serde_json::Map;
use serde_json::Value;
use thiserror::Error;

use crate::schema::config_schema;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Output path used when the caller does not name one.
const DEFAULT_DOCS_PATH: &str = "docs/configuration/solcover.toml.md";

/// Preamble written ahead of the section tables.
const PREAMBLE: &str = "\
<!-- Generated by `solcover config docs`. Edit the schema, not this file. -->

# .solcover.toml Configuration

`.solcover.toml` sets up the simulated chain provider, the coverage reporters,
the contracts left out of instrumentation, and the options handed to the test
runner. A `.json` file with the same keys is accepted too. Every key is
required except `skipFiles`. Unknown keys and out-of-range values fail the load.
";

/// Documented tables, in output order.
const SECTIONS: &[DocSection] = &[
    DocSection {
        title: "Top level",
        table: None,
        summary: "Reporter selection and instrumentation exclusions.",
        keys: &["istanbulReporter", "skipFiles", "providerOptions", "mocha"],
        footnote: Some(
            "Reports are produced in `istanbulReporter` order. `skipFiles` entries are \
             relative contract paths and repeated entries count once.",
        ),
    },
    DocSection {
        title: "[providerOptions]",
        table: Some("providerOptions"),
        summary: "Simulated chain provider used while coverage runs.",
        keys: &["mnemonic", "default_balance_ether"],
        footnote: Some("The mnemonic holds 12, 15, 18, 21, or 24 lowercase words."),
    },
    DocSection {
        title: "[mocha]",
        table: Some("mocha"),
        summary: "Options passed through to the test runner.",
        keys: &["grep", "invert", "enableTimeouts", "timeout"],
        footnote: Some(
            "With `enableTimeouts = true` the `timeout` must be at least 1. How `grep` and \
             `invert` pick tests is up to the runner.",
        ),
    },
];

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Failures while rendering, writing, or checking the reference docs.
#[derive(Debug, Error)]
pub enum DocsError {
    /// Reading or writing the docs file failed.
    #[error("config docs io error: {0}")]
    Io(String),
    /// The schema does not have the shape the renderer expects.
    #[error("config docs schema mismatch: {0}")]
    Schema(String),
    /// The file on disk differs from freshly rendered output.
    #[error("config docs out of date: {0}")]
    Drift(String),
}

// ============================================================================
// SECTION: Public API
// ============================================================================

/// Renders the configuration reference as markdown.
///
/// # Errors
///
/// Returns [`DocsError::Schema`] when a documented key is missing from the
/// schema or a schema key is not documented.
pub fn config_docs_markdown() -> Result<String, DocsError> {
    let schema = config_schema();
    let mut out = String::from(PREAMBLE);
    for section in SECTIONS {
        let rows = section_rows(&schema, section)?;
        out.push_str(&format!("\n## {}\n\n{}\n\n", section.title, section.summary));
        out.push_str(&render_rows(&rows));
        if let Some(footnote) = section.footnote {
            out.push_str(&format!("\n{footnote}\n"));
        }
    }
    Ok(out)
}

/// Writes the rendered reference to `path` (or the default location),
/// creating parent directories as needed.
///
/// # Errors
///
/// Returns [`DocsError`] when rendering or the file write fails.
pub fn write_config_docs(path: Option<&Path>) -> Result<(), DocsError> {
    let target = path.unwrap_or_else(|| Path::new(DEFAULT_DOCS_PATH));
    let markdown = config_docs_markdown()?;
    if let Some(parent) = target.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|err| DocsError::Io(err.to_string()))?;
    }
    fs::write(target, markdown).map_err(|err| DocsError::Io(err.to_string()))
}

/// Checks that the reference at `path` (or the default location) matches
/// freshly rendered output.
///
/// # Errors
///
/// Returns [`DocsError::Drift`] when the contents differ and
/// [`DocsError::Io`] when the file cannot be read.
pub fn verify_config_docs(path: Option<&Path>) -> Result<(), DocsError> {
    let target = path.unwrap_or_else(|| Path::new(DEFAULT_DOCS_PATH));
    let on_disk = fs::read_to_string(target).map_err(|err| DocsError::Io(err.to_string()))?;
    if on_disk == config_docs_markdown()? {
        Ok(())
    } else {
        Err(DocsError::Drift(target.display().to_string()))
    }
}

// ============================================================================
// SECTION: Sections
// ============================================================================

/// One documented table of the config document.
struct DocSection {
    /// Markdown heading text.
    title: &'static str,
    /// Top-level key holding the table; `None` for root keys.
    table: Option<&'static str>,
    /// Sentence printed under the heading.
    summary: &'static str,
    /// Keys in row order; must cover every schema property.
    keys: &'static [&'static str],
    /// Text printed after the table.
    footnote: Option<&'static str>,
}

/// A rendered table row.
struct DocRow {
    /// Document key.
    key: &'static str,
    /// Human-readable type.
    kind: String,
    /// Whether the schema lists the key as required.
    required: bool,
    /// Default shown to readers.
    default: String,
    /// Schema description.
    description: String,
}

/// Builds the rows for `section`, checking that keys and schema agree.
fn section_rows(schema: &Value, section: &DocSection) -> Result<Vec<DocRow>, DocsError> {
    let node = match section.table {
        Some(table) => properties(schema)?
            .get(table)
            .ok_or_else(|| DocsError::Schema(format!("no schema for table {table}")))?,
        None => schema,
    };
    let props = properties(node)?;
    check_coverage(props, section.keys)?;
    let required: BTreeSet<&str> = node
        .get("required")
        .and_then(Value::as_array)
        .into_iter()
        .flatten()
        .filter_map(Value::as_str)
        .collect();

    let mut rows = Vec::with_capacity(section.keys.len());
    for &key in section.keys {
        let prop = props
            .get(key)
            .ok_or_else(|| DocsError::Schema(format!("no schema for key {key}")))?;
        rows.push(DocRow {
            key,
            kind: type_label(prop),
            required: required.contains(key),
            default: default_label(key, prop),
            description: prop
                .get("description")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string(),
        });
    }
    Ok(rows)
}

/// Returns the `properties` object of a schema node.
fn properties(node: &Value) -> Result<&Map<String, Value>, DocsError> {
    node.get("properties")
        .and_then(Value::as_object)
        .ok_or_else(|| DocsError::Schema("schema node has no properties".to_string()))
}

/// Fails unless `keys` and the schema properties name the same set.
fn check_coverage(props: &Map<String, Value>, keys: &[&str]) -> Result<(), DocsError> {
    let documented: BTreeSet<&str> = keys.iter().copied().collect();
    let declared: BTreeSet<&str> = props.keys().map(String::as_str).collect();
    if let Some(key) = documented.difference(&declared).next() {
        return Err(DocsError::Schema(format!("documented key not in schema: {key}")));
    }
    if let Some(key) = declared.difference(&documented).next() {
        return Err(DocsError::Schema(format!("schema key not documented: {key}")));
    }
    Ok(())
}

// ============================================================================
// SECTION: Formatting
// ============================================================================

/// Renders rows as a markdown table.
fn render_rows(rows: &[DocRow]) -> String {
    let mut table = String::from(
        "| Field | Type | Required | Default | Notes |\n| --- | --- | --- | --- | --- |\n",
    );
    for row in rows {
        table.push_str(&format!(
            "| `{}` | {} | {} | {} | {} |\n",
            row.key,
            cell(&row.kind),
            if row.required { "yes" } else { "no" },
            cell(&row.default),
            cell(&row.description),
        ));
    }
    table
}

/// Describes the JSON type of a schema node in TOML terms.
fn type_label(prop: &Value) -> String {
    match prop.get("type").and_then(Value::as_str) {
        Some("boolean") => "bool".to_string(),
        Some("object") => "table".to_string(),
        Some("array") => prop
            .get("items")
            .map_or_else(|| "array".to_string(), |items| format!("array of {}", type_label(items))),
        Some(other) => other.to_string(),
        None => "any".to_string(),
    }
}

/// Describes the default for `key`; nested tables point at their section.
fn default_label(key: &str, prop: &Value) -> String {
    if prop.get("type").and_then(Value::as_str) == Some("object") {
        return format!("see `[{key}]`");
    }
    prop.get("default").map_or_else(|| "n/a".to_string(), literal)
}

/// Renders a JSON value as a TOML-style literal.
fn literal(value: &Value) -> String {
    match value {
        Value::String(text) => format!("\"{text}\""),
        Value::Array(items) => {
            let inner: Vec<String> = items.iter().map(literal).collect();
            format!("[{}]", inner.join(", "))
        }
        other => other.to_string(),
    }
}

/// Escapes characters that would break a table cell.
fn cell(text: &str) -> String {
    text.replace('|', "\\|").replace('\n', " ")
}

// ============================================================================
// SECTION: Tests
// ============================================================================
