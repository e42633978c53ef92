// crates/solcover-cli/src/i18n.rs
// ============================================================================
// Module: CLI Message Catalog
// Description: English message templates and placeholder rendering.
// Purpose: Keep every user-facing CLI string behind a stable key.
// Dependencies: std
// ============================================================================

//! ## Overview
//! Templates use `{name}` placeholders filled from named arguments by the
//! [`t!`](crate::t) macro. Rendering is a single left-to-right pass, so a
//! substituted value containing braces is never expanded again. Unknown keys
//! render as the key itself and unknown placeholders are left in place.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::HashMap;
use std::fmt::Display;
use std::sync::OnceLock;

// ============================================================================
// SECTION: Catalog
// ============================================================================

/// English templates keyed by message id.
pub(crate) const CATALOG_ITEMS: &[(&str, &str)] = &[
    ("main.version", "solcover {version}"),
    ("output.stream.stdout", "stdout"),
    ("output.write_failed", "Failed to write to {stream}: {error}"),
    ("logging.init_failed", "Failed to initialize logging: {error}"),
    ("config.load_failed", "Failed to load config: {error}"),
    ("config.validate.ok", "Config valid."),
    (
        "config.validate.summary",
        "{path}: {reporters} reporter(s), {skip_files} skipped file(s), timeouts {timeouts}.",
    ),
    ("config.validate.timeouts_enabled", "enabled ({timeout_ms} ms)"),
    ("config.validate.timeouts_disabled", "disabled"),
    ("config.show.render_failed", "Failed to render config: {error}"),
    ("config.schema.render_failed", "Failed to render config schema: {error}"),
    ("config.docs.failed", "Failed to generate config docs: {error}"),
    ("config.docs.written", "Config docs written to {path}"),
    ("config.docs.verified", "Config docs are up to date."),
];

/// Returns the template for `key`, if the catalog has one.
fn template(key: &str) -> Option<&'static str> {
    static TEMPLATES: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();
    TEMPLATES.get_or_init(|| CATALOG_ITEMS.iter().copied().collect()).get(key).copied()
}

// ============================================================================
// SECTION: Rendering
// ============================================================================

/// Named value substituted into a template placeholder.
#[derive(Clone)]
pub struct MessageArg {
    /// Placeholder name without braces.
    pub name: &'static str,
    /// Rendered value.
    pub value: String,
}

impl MessageArg {
    /// Captures `value` under the placeholder `name`.
    pub fn new(name: &'static str, value: impl Display) -> Self {
        Self {
            name,
            value: value.to_string(),
        }
    }
}

/// Renders the template for `key` with `args` substituted.
#[must_use]
pub fn translate(key: &str, args: &[MessageArg]) -> String {
    let Some(template) = template(key) else {
        return key.to_string();
    };
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let tail = &rest[open..];
        let Some(close) = tail.find('}') else {
            rest = tail;
            break;
        };
        let name = &tail[1..close];
        match args.iter().find(|arg| arg.name == name) {
            Some(arg) => out.push_str(&arg.value),
            None => out.push_str(&tail[..=close]),
        }
        rest = &tail[close + 1..];
    }
    out.push_str(rest);
    out
}

/// Renders a catalog message: `t!("key", name = value, ...)`.
///
/// Each value only needs to implement `Display`.
#[macro_export]
macro_rules! t {
    ($key:literal $(, $name:ident = $value:expr)* $(,)?) => {
        $crate::i18n::translate(
            $key,
            &[$($crate::i18n::MessageArg::new(stringify!($name), &$value)),*],
        )
    };
}
