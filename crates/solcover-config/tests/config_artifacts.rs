//! Config artifact validation tests for solcover-config.
// crates/solcover-config/tests/config_artifacts.rs
// ============================================================================
// Module: Config Artifact Validation Tests
// Description: Validate config schema, example, and docs generators.
// Purpose: Prevent drift between config model and generated artifacts.
// Dependencies: solcover-config, jsonschema, toml
// ============================================================================

use jsonschema::Draft;
use jsonschema::Validator;
use serde_json::Value;
use serde_json::json;
use solcover_config::ConfigFormat;
use solcover_config::CoverageConfig;
use solcover_config::DocsError;
use solcover_config::config_docs_markdown;
use solcover_config::config_schema;
use solcover_config::config_toml_example;
use solcover_config::verify_config_docs;
use solcover_config::write_config_docs;
use tempfile::TempDir;

mod common;

type TestResult = Result<(), String>;

fn compile_schema(schema: &Value) -> Result<Validator, String> {
    jsonschema::options()
        .with_draft(Draft::Draft202012)
        .build(schema)
        .map_err(|err| format!("failed to compile schema: {err}"))
}

fn example_as_json() -> Result<Value, String> {
    let toml_value: toml::Value =
        toml::from_str(&config_toml_example()).map_err(|err| err.to_string())?;
    serde_json::to_value(toml_value).map_err(|err| err.to_string())
}

// ============================================================================
// SECTION: Schema
// ============================================================================

#[test]
fn config_schema_accepts_example_and_reference_configs() -> TestResult {
    let validator = compile_schema(&config_schema())?;
    if !validator.is_valid(&example_as_json()?) {
        return Err("example config should validate".to_string());
    }
    if !validator.is_valid(&common::json_document()) {
        return Err("reference json config should validate".to_string());
    }
    Ok(())
}

#[test]
fn config_schema_rejects_empty_document() -> TestResult {
    let validator = compile_schema(&config_schema())?;
    if validator.is_valid(&json!({})) {
        return Err("empty document must not validate".to_string());
    }
    Ok(())
}

#[test]
fn config_schema_rejects_values_the_loader_rejects() -> TestResult {
    let validator = compile_schema(&config_schema())?;
    let cases: Vec<(&str, Value)> = vec![
        ("/skipFiles", json!(["/abs/path.sol"])),
        ("/skipFiles", json!(["mocks/../x.sol"])),
        ("/skipFiles", json!(["mocks//x.sol"])),
        ("/skipFiles", json!([" mocks/DAIMock.sol"])),
        ("/skipFiles", json!(["mocks/DAIMock.sol "])),
        ("/skipFiles", json!(["   "])),
        ("/skipFiles", json!([format!("mocks/{}", "a".repeat(300))])),
        ("/istanbulReporter", json!([])),
        ("/istanbulReporter", json!(["html", "html"])),
        ("/providerOptions/mnemonic", json!("glad notable bullet")),
        ("/mocha/invert", json!("yes")),
        ("/extra", json!(true)),
    ];
    for (pointer, value) in cases {
        let mut document = common::json_document();
        set_pointer(&mut document, pointer, value)?;
        if validator.is_valid(&document) {
            return Err(format!("schema accepted invalid value at {pointer}"));
        }
    }
    Ok(())
}

#[test]
fn config_schema_and_loader_agree_on_skip_entries() -> TestResult {
    let validator = compile_schema(&config_schema())?;
    let cases = [
        ("mocks/DAIMock.sol".to_string(), true),
        (".hidden/Mock.sol".to_string(), true),
        ("mocks/...Mock.sol".to_string(), true),
        ("mocks/My Mock.sol".to_string(), true),
        (format!("mocks/{}", "a".repeat(255)), true),
        (format!("mocks/{}", "a".repeat(256)), false),
        (" mocks/DAIMock.sol".to_string(), false),
        ("mocks/DAIMock.sol\t".to_string(), false),
        ("   ".to_string(), false),
        ("./mocks/DAIMock.sol".to_string(), false),
        ("mocks\\DAIMock.sol".to_string(), false),
    ];
    for (entry, expected) in cases {
        let mut document = common::json_document();
        set_pointer(&mut document, "/skipFiles", json!([entry.as_str()]))?;
        let schema_valid = validator.is_valid(&document);
        let loader_valid =
            CoverageConfig::from_str_with_format(&document.to_string(), ConfigFormat::Json).is_ok();
        if schema_valid != expected || loader_valid != expected {
            return Err(format!(
                "skip entry '{entry}': schema={schema_valid} loader={loader_valid} \
                 expected={expected}"
            ));
        }
    }
    Ok(())
}

#[test]
fn config_schema_requires_positive_timeout_when_enabled() -> TestResult {
    let validator = compile_schema(&config_schema())?;
    let mut document = common::json_document();
    set_pointer(&mut document, "/mocha/enableTimeouts", json!(true))?;
    set_pointer(&mut document, "/mocha/timeout", json!(0))?;
    if validator.is_valid(&document) {
        return Err("zero timeout with timeouts enabled must not validate".to_string());
    }
    set_pointer(&mut document, "/mocha/enableTimeouts", json!(false))?;
    if !validator.is_valid(&document) {
        return Err("zero timeout with timeouts disabled should validate".to_string());
    }
    Ok(())
}

#[test]
fn config_schema_accepts_twenty_four_word_mnemonic() -> TestResult {
    let validator = compile_schema(&config_schema())?;
    let mut document = common::json_document();
    set_pointer(&mut document, "/providerOptions/mnemonic", json!(vec!["zoo"; 24].join(" ")))?;
    if !validator.is_valid(&document) {
        return Err("24-word mnemonic should validate".to_string());
    }
    Ok(())
}

fn set_pointer(document: &mut Value, pointer: &str, value: Value) -> TestResult {
    let (parent, key) = pointer.rsplit_once('/').ok_or_else(|| "bad pointer".to_string())?;
    let target = if parent.is_empty() {
        Some(document)
    } else {
        document.pointer_mut(parent)
    };
    let object = target
        .and_then(Value::as_object_mut)
        .ok_or_else(|| format!("no object at {parent}"))?;
    object.insert(key.to_string(), value);
    Ok(())
}

// ============================================================================
// SECTION: Example
// ============================================================================

#[test]
fn config_example_loads_and_validates() -> TestResult {
    let config = common::config_from_toml(&config_toml_example()).map_err(|err| err.to_string())?;
    if config.provider().mnemonic().phrase() != common::MNEMONIC {
        return Err("example mnemonic mismatch".to_string());
    }
    Ok(())
}

// ============================================================================
// SECTION: Docs
// ============================================================================

#[test]
fn config_docs_generate_without_error() -> TestResult {
    let docs = config_docs_markdown().map_err(|err| err.to_string())?;
    if !docs.contains("# .solcover.toml Configuration") {
        return Err("docs missing title header".to_string());
    }
    for heading in ["## Top level", "## [providerOptions]", "## [mocha]"] {
        if !docs.contains(heading) {
            return Err(format!("docs missing section {heading}"));
        }
    }
    if !docs.contains("| `enableTimeouts` | bool | yes | n/a |") {
        return Err("docs missing enableTimeouts row".to_string());
    }
    Ok(())
}

#[test]
fn config_docs_write_then_verify() -> TestResult {
    let dir = TempDir::new().map_err(|err| err.to_string())?;
    let path = dir.path().join("nested").join("solcover.toml.md");
    write_config_docs(Some(&path)).map_err(|err| err.to_string())?;
    verify_config_docs(Some(&path)).map_err(|err| err.to_string())?;
    Ok(())
}

#[test]
fn config_docs_verify_reports_drift() -> TestResult {
    let dir = TempDir::new().map_err(|err| err.to_string())?;
    let path = common::write_config(dir.path(), "solcover.toml.md", "stale")?;
    match verify_config_docs(Some(&path)) {
        Err(DocsError::Drift(_)) => Ok(()),
        Err(other) => Err(format!("expected drift, got: {other}")),
        Ok(()) => Err("stale docs should drift".to_string()),
    }
}
