// crates/solcover-config/src/config.rs
// ============================================================================
// Module: Solcover Configuration
// Description: Configuration loading and validation for coverage runs.
// Purpose: Provide strict, fail-closed config parsing with hard limits.
// Dependencies: serde, serde_json, toml, tracing
// ============================================================================

//! ## Overview
//! Configuration is loaded from a TOML (or JSON) document with strict size and
//! path limits. Every recognized field must be present except `skipFiles`,
//! which defaults to an empty set. Missing, malformed, or semantically invalid
//! configuration fails closed; no default is substituted for a bad field.
//!
//! The loaded [`CoverageConfig`] is read-only: fields are private and exposed
//! through accessors only.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeSet;
use std::env;
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;
use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;
use tracing::debug;
use tracing::warn;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Default configuration filename when no path is specified.
pub const DEFAULT_CONFIG_NAME: &str = ".solcover.toml";
/// Environment variable used to override the config path.
pub const CONFIG_ENV_VAR: &str = "SOLCOVER_CONFIG";
/// Maximum configuration file size in bytes.
pub(crate) const MAX_CONFIG_FILE_SIZE: usize = 1024 * 1024;
/// Maximum length of a single path component.
pub(crate) const MAX_PATH_COMPONENT_LENGTH: usize = 255;
/// Maximum total path length.
pub(crate) const MAX_TOTAL_PATH_LENGTH: usize = 4096;
/// Word counts accepted for a mnemonic phrase.
pub(crate) const MNEMONIC_WORD_COUNTS: [usize; 5] = [12, 15, 18, 21, 24];
/// Maximum length of a single mnemonic word.
pub(crate) const MAX_MNEMONIC_WORD_LENGTH: usize = 8;
/// Maximum number of reporter entries.
pub(crate) const MAX_REPORTERS: usize = 32;
/// Maximum length of a reporter identifier.
pub(crate) const MAX_REPORTER_LENGTH: usize = 64;
/// Maximum number of skip file entries.
pub(crate) const MAX_SKIP_FILES: usize = 4096;
/// Maximum length of the mocha grep pattern.
pub(crate) const MAX_GREP_LENGTH: usize = 1024;
/// Maximum per-test timeout in milliseconds (24 hours).
pub(crate) const MAX_TIMEOUT_MS: u64 = 24 * 60 * 60 * 1000;
/// Number of wei in one ether.
const WEI_PER_ETHER: u128 = 1_000_000_000_000_000_000;

/// Reporter identifiers shipped with Istanbul.
pub const BUILTIN_REPORTERS: &[&str] = &[
    "clover",
    "cobertura",
    "html",
    "html-spa",
    "json",
    "json-summary",
    "lcov",
    "lcovonly",
    "none",
    "teamcity",
    "text",
    "text-lcov",
    "text-summary",
];

// ============================================================================
// SECTION: Configuration Types
// ============================================================================

/// Coverage tool configuration.
///
/// Serialized field order places arrays before tables so the TOML encoding
/// round-trips without reordering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CoverageConfig {
    /// Report format identifiers in declared order.
    #[serde(rename = "istanbulReporter")]
    reporters: Vec<Reporter>,
    /// Paths excluded from instrumentation.
    #[serde(rename = "skipFiles", default)]
    skip_files: BTreeSet<String>,
    /// Simulated chain provider options.
    #[serde(rename = "providerOptions")]
    provider: ProviderOptions,
    /// Test runner options.
    mocha: MochaOptions,
    /// Path the document was loaded from (not serialized).
    #[serde(skip)]
    source_path: Option<PathBuf>,
}

impl CoverageConfig {
    /// Loads configuration from disk using the default resolution rules.
    ///
    /// Resolution order: explicit `path`, then [`CONFIG_ENV_VAR`], then
    /// [`DEFAULT_CONFIG_NAME`] in the working directory.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotFound`] when the document does not exist,
    /// [`ConfigError::Parse`] when it is malformed, and
    /// [`ConfigError::Invalid`] when limits or validation rules fail.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let resolved = resolve_path(path)?;
        validate_path(&resolved)?;
        let bytes = fs::read(&resolved).map_err(|err| match err.kind() {
            io::ErrorKind::NotFound => ConfigError::NotFound(resolved.display().to_string()),
            _ => ConfigError::Io(err.to_string()),
        })?;
        if bytes.len() > MAX_CONFIG_FILE_SIZE {
            return Err(ConfigError::Invalid("config file exceeds size limit".to_string()));
        }
        let content = std::str::from_utf8(&bytes)
            .map_err(|_| ConfigError::Invalid("config file must be utf-8".to_string()))?;
        let format = ConfigFormat::from_path(&resolved);
        let mut config = Self::from_str_with_format(content, format)?;
        debug!(
            path = %resolved.display(),
            format = format.as_str(),
            reporters = config.reporters.len(),
            skip_files = config.skip_files.len(),
            "loaded coverage config"
        );
        config.source_path = Some(resolved);
        Ok(config)
    }

    /// Parses and validates an in-memory document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] when the document is malformed and
    /// [`ConfigError::Invalid`] when validation fails.
    pub fn from_str_with_format(content: &str, format: ConfigFormat) -> Result<Self, ConfigError> {
        let config: Self = match format {
            ConfigFormat::Toml => {
                toml::from_str(content).map_err(|err| ConfigError::Parse(err.to_string()))?
            }
            ConfigFormat::Json => {
                serde_json::from_str(content).map_err(|err| ConfigError::Parse(err.to_string()))?
            }
        };
        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration for internal consistency.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when configuration is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.provider.validate()?;
        validate_reporters(&self.reporters)?;
        validate_skip_files(&self.skip_files)?;
        self.mocha.validate()?;
        Ok(())
    }

    /// Returns the simulated chain provider options.
    #[must_use]
    pub const fn provider(&self) -> &ProviderOptions {
        &self.provider
    }

    /// Returns the reporter identifiers in declared order.
    #[must_use]
    pub fn reporters(&self) -> &[Reporter] {
        &self.reporters
    }

    /// Returns the set of paths excluded from instrumentation.
    #[must_use]
    pub const fn skip_files(&self) -> &BTreeSet<String> {
        &self.skip_files
    }

    /// Returns the test runner options.
    #[must_use]
    pub const fn mocha(&self) -> &MochaOptions {
        &self.mocha
    }

    /// Returns the path this configuration was loaded from, if any.
    #[must_use]
    pub fn source_path(&self) -> Option<&Path> {
        self.source_path.as_deref()
    }

    /// Returns whether `path` is excluded from instrumentation.
    ///
    /// A leading `./` on the query is ignored.
    #[must_use]
    pub fn is_skipped(&self, path: &str) -> bool {
        let normalized = path.strip_prefix("./").unwrap_or(path);
        self.skip_files.contains(normalized)
    }

    /// Serializes the configuration in the requested encoding.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] when serialization fails.
    pub fn to_document(&self, format: ConfigFormat) -> Result<String, ConfigError> {
        match format {
            ConfigFormat::Toml => {
                toml::to_string_pretty(self).map_err(|err| ConfigError::Parse(err.to_string()))
            }
            ConfigFormat::Json => serde_json::to_string_pretty(self)
                .map_err(|err| ConfigError::Parse(err.to_string())),
        }
    }
}

/// Options for the simulated chain provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProviderOptions {
    /// Seed phrase for deterministic account derivation.
    mnemonic: Mnemonic,
    /// Starting balance of each generated account, in ether.
    default_balance_ether: u64,
}

impl ProviderOptions {
    /// Returns the mnemonic seed phrase.
    #[must_use]
    pub const fn mnemonic(&self) -> &Mnemonic {
        &self.mnemonic
    }

    /// Returns the default account balance in ether.
    #[must_use]
    pub const fn default_balance_ether(&self) -> u64 {
        self.default_balance_ether
    }

    /// Returns the default account balance in wei.
    #[must_use]
    pub fn default_balance_wei(&self) -> u128 {
        // u64::MAX * 10^18 stays below u128::MAX.
        u128::from(self.default_balance_ether) * WEI_PER_ETHER
    }

    /// Validates provider options.
    fn validate(&self) -> Result<(), ConfigError> {
        self.mnemonic.validate()
    }
}

/// Mnemonic seed phrase; `Debug` output never includes the words.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Mnemonic(String);

impl Mnemonic {
    /// Returns the phrase exactly as declared.
    #[must_use]
    pub fn phrase(&self) -> &str {
        &self.0
    }

    /// Returns the words of the phrase in order.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.0.split(' ')
    }

    /// Validates word count and word shape.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.0.is_empty() {
            return Err(ConfigError::Invalid(
                "providerOptions.mnemonic must be non-empty".to_string(),
            ));
        }
        let count = self.words().count();
        if !MNEMONIC_WORD_COUNTS.contains(&count) {
            return Err(ConfigError::Invalid(format!(
                "providerOptions.mnemonic must contain 12, 15, 18, 21, or 24 words (found {count})"
            )));
        }
        for word in self.words() {
            let well_formed = !word.is_empty()
                && word.len() <= MAX_MNEMONIC_WORD_LENGTH
                && word.bytes().all(|byte| byte.is_ascii_lowercase());
            if !well_formed {
                return Err(ConfigError::Invalid(
                    "providerOptions.mnemonic words must be lowercase ascii letters separated by \
                     single spaces"
                        .to_string(),
                ));
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Mnemonic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Mnemonic(<{} words>)", self.words().count())
    }
}

/// Coverage report format identifier.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Reporter(String);

impl Reporter {
    /// Returns the identifier string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true when the identifier names a reporter shipped with Istanbul.
    #[must_use]
    pub fn is_builtin(&self) -> bool {
        BUILTIN_REPORTERS.contains(&self.0.as_str())
    }
}

impl fmt::Display for Reporter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Options forwarded to the mocha-style test runner.
///
/// Values are exposed unchanged; the runner decides what `grep` and `invert`
/// mean.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MochaOptions {
    /// Tag pattern used to select tests.
    grep: String,
    /// Whether matching tests are excluded instead of included.
    invert: bool,
    /// Whether per-test timeouts are enforced.
    #[serde(rename = "enableTimeouts")]
    enable_timeouts: bool,
    /// Per-test timeout in milliseconds.
    #[serde(rename = "timeout")]
    timeout_ms: u64,
}

impl MochaOptions {
    /// Returns the test filter pattern.
    #[must_use]
    pub fn grep(&self) -> &str {
        &self.grep
    }

    /// Returns whether the filter is inverted.
    #[must_use]
    pub const fn invert(&self) -> bool {
        self.invert
    }

    /// Returns whether per-test timeouts are enforced.
    #[must_use]
    pub const fn enable_timeouts(&self) -> bool {
        self.enable_timeouts
    }

    /// Returns the declared timeout in milliseconds.
    #[must_use]
    pub const fn timeout_ms(&self) -> u64 {
        self.timeout_ms
    }

    /// Returns the declared timeout as a [`Duration`].
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Returns the timeout the runner should enforce, if any.
    #[must_use]
    pub const fn effective_timeout(&self) -> Option<Duration> {
        if self.enable_timeouts { Some(self.timeout()) } else { None }
    }

    /// Validates runner options.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.grep.len() > MAX_GREP_LENGTH {
            return Err(ConfigError::Invalid("mocha.grep exceeds max length".to_string()));
        }
        if self.timeout_ms > MAX_TIMEOUT_MS {
            return Err(ConfigError::Invalid(format!(
                "mocha.timeout must be at most {MAX_TIMEOUT_MS} ms"
            )));
        }
        if self.enable_timeouts && self.timeout_ms == 0 {
            return Err(ConfigError::Invalid(
                "mocha.timeout must be greater than zero when mocha.enableTimeouts=true".to_string(),
            ));
        }
        Ok(())
    }
}

/// Document encodings accepted by the loader.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// TOML document (default).
    Toml,
    /// JSON document.
    Json,
}

impl ConfigFormat {
    /// Selects the encoding from a file extension; `.json` is JSON, anything
    /// else is TOML.
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Toml,
        }
    }

    /// Returns the lowercase encoding name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Toml => "toml",
            Self::Json => "json",
        }
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration document does not exist.
    #[error("config not found: {0}")]
    NotFound(String),
    /// I/O failure while reading configuration.
    #[error("config io error: {0}")]
    Io(String),
    /// Malformed document or wrongly shaped field.
    #[error("config parse error: {0}")]
    Parse(String),
    /// Invalid configuration data.
    #[error("invalid config: {0}")]
    Invalid(String),
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Resolves the config path from CLI or environment defaults.
fn resolve_path(path: Option<&Path>) -> Result<PathBuf, ConfigError> {
    resolve_path_with(path, env::var(CONFIG_ENV_VAR).ok().as_deref())
}

/// Applies the resolution order to an already-read environment value. A blank
/// value counts as unset.
fn resolve_path_with(
    path: Option<&Path>,
    env_value: Option<&str>,
) -> Result<PathBuf, ConfigError> {
    if let Some(path) = path {
        return Ok(path.to_path_buf());
    }
    match env_value {
        Some(env_path) if !env_path.trim().is_empty() => {
            if env_path.len() > MAX_TOTAL_PATH_LENGTH {
                return Err(ConfigError::Invalid("config path exceeds max length".to_string()));
            }
            Ok(PathBuf::from(env_path))
        }
        _ => Ok(PathBuf::from(DEFAULT_CONFIG_NAME)),
    }
}

/// Validates the resolved path against security limits.
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

/// Validates reporter count, shape, and uniqueness.
fn validate_reporters(reporters: &[Reporter]) -> Result<(), ConfigError> {
    if reporters.is_empty() {
        return Err(ConfigError::Invalid("istanbulReporter must be non-empty".to_string()));
    }
    if reporters.len() > MAX_REPORTERS {
        return Err(ConfigError::Invalid("istanbulReporter has too many entries".to_string()));
    }
    let mut seen = BTreeSet::new();
    for reporter in reporters {
        let name = reporter.as_str();
        if name.is_empty() {
            return Err(ConfigError::Invalid(
                "istanbulReporter entries must be non-empty".to_string(),
            ));
        }
        if name.len() > MAX_REPORTER_LENGTH {
            return Err(ConfigError::Invalid(format!(
                "istanbulReporter entry exceeds max length: {name}"
            )));
        }
        if !name.bytes().all(is_reporter_byte) {
            return Err(ConfigError::Invalid(format!(
                "istanbulReporter entry has invalid characters: {name}"
            )));
        }
        if !seen.insert(name) {
            return Err(ConfigError::Invalid(format!("istanbulReporter duplicate entry: {name}")));
        }
        if !reporter.is_builtin() {
            warn!(reporter = name, "istanbulReporter entry is not a built-in reporter");
        }
    }
    Ok(())
}

/// Returns true for bytes allowed in reporter identifiers.
const fn is_reporter_byte(byte: u8) -> bool {
    byte.is_ascii_lowercase()
        || byte.is_ascii_digit()
        || matches!(byte, b'-' | b'_' | b'.' | b'@' | b'/')
}

/// Validates the skip file set.
fn validate_skip_files(skip_files: &BTreeSet<String>) -> Result<(), ConfigError> {
    if skip_files.len() > MAX_SKIP_FILES {
        return Err(ConfigError::Invalid("skipFiles has too many entries".to_string()));
    }
    for entry in skip_files {
        validate_skip_path(entry)?;
    }
    Ok(())
}

/// Validates a single skip path as a normalized relative path.
fn validate_skip_path(value: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::Invalid("skipFiles entries must be non-empty".to_string()));
    }
    if value.trim() != value {
        return Err(ConfigError::Invalid(format!(
            "skipFiles entry must not have surrounding whitespace: '{value}'"
        )));
    }
    if value.len() > MAX_TOTAL_PATH_LENGTH {
        return Err(ConfigError::Invalid("skipFiles entry exceeds max length".to_string()));
    }
    if value.contains('\\') {
        return Err(ConfigError::Invalid(format!(
            "skipFiles entry must not contain backslashes: {value}"
        )));
    }
    if value.starts_with('/') {
        return Err(ConfigError::Invalid(format!("skipFiles entry must be relative: {value}")));
    }
    for segment in value.split('/') {
        match segment {
            "" => {
                return Err(ConfigError::Invalid(format!(
                    "skipFiles entry has an empty path segment: {value}"
                )));
            }
            "." | ".." => {
                return Err(ConfigError::Invalid(format!(
                    "skipFiles entry must not contain '.' or '..' segments: {value}"
                )));
            }
            _ if segment.len() > MAX_PATH_COMPONENT_LENGTH => {
                return Err(ConfigError::Invalid(
                    "skipFiles entry path component too long".to_string(),
                ));
            }
            _ => {}
        }
    }
    Ok(())
}

// ============================================================================
// SECTION: Tests
// ============================================================================
