// crates/solcover-cli/src/main.rs
// ============================================================================
// Module: Solcover CLI Entry Point
// Description: Command dispatcher for coverage configuration workflows.
// Purpose: Load, validate, and render .solcover.toml before coverage runs.
// Dependencies: clap, serde_json, solcover-config, thiserror, tracing.
// ============================================================================

//! ## Overview
//! The Solcover CLI checks the coverage configuration consumed by the external
//! instrumenter and test runner, and renders the config schema, example, and
//! reference docs. All user-facing strings are routed through the message
//! catalog; diagnostics go to stderr through `tracing`.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::io::Write;
use std::path::Path;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::ArgAction;
use clap::Args;
use clap::CommandFactory;
use clap::Parser;
use clap::Subcommand;
use clap::ValueEnum;
use solcover_cli::logging::LOG_ENV;
use solcover_cli::logging::init_logging;
use solcover_cli::t;
use solcover_config::ConfigFormat;
use solcover_config::CoverageConfig;
use solcover_config::DocsError;
use solcover_config::config_docs_markdown;
use solcover_config::config_schema;
use solcover_config::config_toml_example;
use solcover_config::verify_config_docs;
use solcover_config::write_config_docs;
use thiserror::Error;
use tracing::debug;

// ============================================================================
// SECTION: CLI Types
// ============================================================================

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(name = "solcover", disable_help_subcommand = true, disable_version_flag = true)]
struct Cli {
    /// Print version information and exit.
    #[arg(long = "version", action = ArgAction::SetTrue, global = true)]
    show_version: bool,
    /// Increase log verbosity (repeatable; overridden by `SOLCOVER_LOG`).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
    /// Selected subcommand to execute.
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Supported CLI subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Coverage configuration utilities.
    Config {
        /// Selected config subcommand.
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

/// Config subcommands.
#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Validate a coverage configuration file.
    Validate(ConfigValidateCommand),
    /// Print the normalized coverage configuration.
    Show(ConfigShowCommand),
    /// Print the JSON schema for the configuration document.
    Schema,
    /// Print a canonical example configuration.
    Example,
    /// Generate or verify the configuration reference docs.
    Docs(ConfigDocsCommand),
}

/// Arguments for config validation.
#[derive(Args, Debug)]
struct ConfigValidateCommand {
    /// Optional config file path (defaults to .solcover.toml or env override).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
    /// Print a one-line summary of the loaded configuration.
    #[arg(long, action = ArgAction::SetTrue)]
    summary: bool,
}

/// Arguments for printing the normalized configuration.
#[derive(Args, Debug)]
struct ConfigShowCommand {
    /// Optional config file path (defaults to .solcover.toml or env override).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
    /// Output encoding.
    #[arg(long, value_enum, default_value_t = OutputFormat::Toml)]
    format: OutputFormat,
}

/// Arguments for config docs generation.
#[derive(Args, Debug)]
struct ConfigDocsCommand {
    /// Output path (defaults to docs/configuration/solcover.toml.md).
    #[arg(long, value_name = "PATH")]
    output: Option<PathBuf>,
    /// Verify the existing file instead of writing it.
    #[arg(long, action = ArgAction::SetTrue)]
    check: bool,
}

/// Output encodings for `config show`.
#[derive(ValueEnum, Clone, Copy, Debug)]
enum OutputFormat {
    /// TOML output.
    Toml,
    /// JSON output.
    Json,
}

impl From<OutputFormat> for ConfigFormat {
    fn from(value: OutputFormat) -> Self {
        match value {
            OutputFormat::Toml => Self::Toml,
            OutputFormat::Json => Self::Json,
        }
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// CLI error wrapper for localized error messages.
#[derive(Debug, Error)]
#[error("{message}")]
struct CliError {
    /// Human-readable error message.
    message: String,
}

impl CliError {
    /// Constructs a new [`CliError`] from a localized message.
    const fn new(message: String) -> Self {
        Self {
            message,
        }
    }
}

/// CLI result alias for fallible operations.
type CliResult<T> = Result<T, CliError>;

// ============================================================================
// SECTION: Entry Point
// ============================================================================

/// Runs the CLI and maps failures to a non-zero exit status.
fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => fail(&err.to_string()),
    }
}

/// Parses arguments, answers `--version`, installs logging, and dispatches
/// the subcommand.
fn run() -> CliResult<()> {
    let cli = Cli::parse();
    if cli.show_version {
        return print_line(&t!("main.version", version = env!("CARGO_PKG_VERSION")));
    }

    let directives = std::env::var(LOG_ENV).ok();
    init_logging(directives.as_deref(), cli.verbose)
        .map_err(|err| CliError::new(t!("logging.init_failed", error = err)))?;
    match cli.command {
        Some(Commands::Config {
            command,
        }) => command_config(command),
        None => {
            Cli::command().print_help().map_err(|err| stdout_error(&err))?;
            print_line("")
        }
    }
}

// ============================================================================
// SECTION: Config Commands
// ============================================================================

/// Routes `solcover config <subcommand>`.
fn command_config(command: ConfigCommand) -> CliResult<()> {
    match command {
        ConfigCommand::Validate(args) => config_validate(&args),
        ConfigCommand::Show(args) => config_show(&args),
        ConfigCommand::Schema => config_schema_print(),
        ConfigCommand::Example => print_raw(&config_toml_example()),
        ConfigCommand::Docs(args) => config_docs(&args),
    }
}

/// Loads the configuration named by `path` (or the default resolution).
fn load_config(path: Option<&Path>) -> CliResult<CoverageConfig> {
    CoverageConfig::load(path).map_err(|err| CliError::new(t!("config.load_failed", error = err)))
}

/// `config validate`: load, report success, optionally summarize.
fn config_validate(args: &ConfigValidateCommand) -> CliResult<()> {
    let config = load_config(args.config.as_deref())?;
    print_line(&t!("config.validate.ok"))?;
    if !args.summary {
        return Ok(());
    }
    let mocha = config.mocha();
    let timeouts = if mocha.effective_timeout().is_some() {
        t!("config.validate.timeouts_enabled", timeout_ms = mocha.timeout_ms())
    } else {
        t!("config.validate.timeouts_disabled")
    };
    let path = config.source_path().map(|path| path.display().to_string()).unwrap_or_default();
    print_line(&t!(
        "config.validate.summary",
        path = path,
        reporters = config.reporters().len(),
        skip_files = config.skip_files().len(),
        timeouts = timeouts
    ))
}

/// `config show`: print the normalized document.
fn config_show(args: &ConfigShowCommand) -> CliResult<()> {
    let config = load_config(args.config.as_deref())?;
    let format = ConfigFormat::from(args.format);
    debug!(format = format.as_str(), "rendering normalized config");
    let rendered = config
        .to_document(format)
        .map_err(|err| CliError::new(t!("config.show.render_failed", error = err)))?;
    if rendered.ends_with('\n') { print_raw(&rendered) } else { print_line(&rendered) }
}

/// `config schema`: print the JSON schema.
fn config_schema_print() -> CliResult<()> {
    let rendered = serde_json::to_string_pretty(&config_schema())
        .map_err(|err| CliError::new(t!("config.schema.render_failed", error = err)))?;
    print_line(&rendered)
}

/// `config docs`: print, write, or check the markdown reference.
fn config_docs(args: &ConfigDocsCommand) -> CliResult<()> {
    let docs_failed = |err: DocsError| CliError::new(t!("config.docs.failed", error = err));
    match (args.output.as_deref(), args.check) {
        (output, true) => {
            verify_config_docs(output).map_err(docs_failed)?;
            print_line(&t!("config.docs.verified"))
        }
        (Some(path), false) => {
            write_config_docs(Some(path)).map_err(docs_failed)?;
            print_line(&t!("config.docs.written", path = path.display()))
        }
        (None, false) => print_raw(&config_docs_markdown().map_err(docs_failed)?),
    }
}

// ============================================================================
// SECTION: Output Helpers
// ============================================================================

/// Writes `message` and a newline to stdout.
fn print_line(message: &str) -> CliResult<()> {
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{message}").map_err(|err| stdout_error(&err))
}

/// Writes `text` to stdout as-is.
fn print_raw(text: &str) -> CliResult<()> {
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(text.as_bytes()).map_err(|err| stdout_error(&err))
}

/// Wraps a stdout write failure.
fn stdout_error(error: &std::io::Error) -> CliError {
    CliError::new(t!("output.write_failed", stream = t!("output.stream.stdout"), error = error))
}

/// Reports `message` on stderr and returns the failure status.
fn fail(message: &str) -> ExitCode {
    let mut stderr = std::io::stderr().lock();
    let _ = writeln!(stderr, "{message}");
    ExitCode::FAILURE
}
