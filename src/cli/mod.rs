//! CLI module for scriptcheck
//!
//! This module provides the command-line interface for the verification harness.
//!
//! ## Commands
//!
//! - `check` - Run the syntax and output checks (pytest-style); the default
//! - `list` - Print the registered scripts, their toolchain invocations and the expected outputs
//!
//! ## Modules
//!
//! - `commands` - Command implementations
//! - `check_runner` - Check collection and execution
//! - `reporter` - Console and JSON-lines reporting
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod check_runner;
pub mod commands;
pub mod reporter;

use std::env;
use std::fmt;
use std::path::PathBuf;
use std::process;
use std::time::Duration;

use clap::{Parser, Subcommand};
use scriptcheck_core::RepoLayout;

use crate::verify;
use crate::version::SCRIPTCHECK_VERSION;
use check_runner::Suite;
use commands::CheckArgs;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
    /// Configuration or usage problem; no checks ran.
    pub const USAGE: ExitCode = ExitCode(2);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug)]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    /// Create a new CLI error with a message and exit code.
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }

    /// Create a usage error (exit code 2).
    pub fn usage(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::USAGE)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

// ============================================================================
// Clap CLI definition
// ============================================================================

/// How check results are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Console,
    /// One JSON object per line
    Json,
}

/// Verify tutorial scripts and the outputs they produce
#[derive(Parser, Debug)]
#[command(name = "scriptcheck")]
#[command(version = SCRIPTCHECK_VERSION)]
#[command(about = "Verify tutorial scripts and the outputs they produce", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Repository root (default: nearest ancestor that looks like one)
    #[arg(long, global = true, value_name = "DIR", env = "SCRIPTCHECK_ROOT")]
    pub root: Option<PathBuf>,

    /// Per-toolchain timeout in seconds
    #[arg(
        long,
        global = true,
        value_name = "SECS",
        env = "SCRIPTCHECK_TIMEOUT",
        default_value_t = verify::DEFAULT_TIMEOUT.as_secs(),
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub timeout: u64,

    /// Report format
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Console)]
    pub format: OutputFormat,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the checks (default)
    Check {
        /// Which verifiers to run
        #[arg(long, value_enum, default_value_t = Suite::All)]
        suite: Suite,
        /// Filter checks by keyword (substring of the check id)
        #[arg(short = 'k', value_name = "EXPR")]
        filter: Option<String>,
        /// Stop on first failure
        #[arg(short = 'x', long = "exitfirst")]
        stop_on_fail: bool,
        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
        /// Report checks whose toolchain cannot be launched as skipped
        #[arg(long)]
        skip_missing_toolchains: bool,
    },

    /// List registered scripts and expected outputs
    List,
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
pub fn run() {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute the CLI command and return result.
fn execute(cli: Cli) -> CliResult<ExitCode> {
    let layout = resolve_layout(cli.root)?;
    let timeout = Duration::from_secs(cli.timeout);

    match cli.command {
        Some(Command::Check {
            suite,
            filter,
            stop_on_fail,
            verbose,
            skip_missing_toolchains,
        }) => commands::check(
            layout,
            timeout,
            cli.format,
            CheckArgs {
                suite,
                filter,
                stop_on_fail,
                skip_missing_toolchains,
                verbose,
            },
        ),
        Some(Command::List) => commands::list(&layout),
        None => commands::check(
            layout,
            timeout,
            cli.format,
            CheckArgs {
                suite: Suite::All,
                filter: None,
                stop_on_fail: false,
                skip_missing_toolchains: false,
                verbose: false,
            },
        ),
    }
}

/// Use `--root` when given, otherwise search upward from the working directory.
fn resolve_layout(root: Option<PathBuf>) -> CliResult<RepoLayout> {
    if let Some(root) = root {
        if !root.is_dir() {
            return Err(CliError::usage(format!(
                "Error: repository root {} is not a directory",
                root.display()
            )));
        }
        return Ok(RepoLayout::new(root));
    }

    let cwd = env::current_dir().map_err(|e| CliError::usage(format!("Error reading working directory: {}", e)))?;
    verify::discover_root(&cwd).map(RepoLayout::new).ok_or_else(|| {
        CliError::usage(format!(
            "Error: no tutorial repository found at or above {} (pass --root or set SCRIPTCHECK_ROOT)",
            cwd.display()
        ))
    })
}

// ============================================================================
// Tests
// ============================================================================
