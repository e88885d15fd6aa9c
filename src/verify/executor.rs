//! Subprocess boundary for syntax checks.
//!
//! The Syntax Verifier never spawns processes itself; it builds an [`Invocation`] and hands it to a
//! [`ToolchainExecutor`]. This keeps the verifier testable with a scripted executor and lets the
//! real one own process concerns:
//! - spawning with stdin closed and stdout/stderr captured,
//! - bounding each run with a timeout and killing the child on expiry,
//! - telling "toolchain not installed" apart from "toolchain rejected the source".

use std::ffi::OsString;
use std::io;
use std::path::Path;
use std::process::Stdio;
use std::time::Duration;

use scriptcheck_core::ScriptSpec;

use super::error::VerifyError;

/// Default per-process limit.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// A fully resolved toolchain command line for one script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Script name, used in error messages.
    pub script: String,
    pub program: String,
    pub args: Vec<OsString>,
}

impl Invocation {
    /// Build the syntax-only invocation for `spec`, with the script at `path`.
    pub fn for_script(spec: &ScriptSpec, path: &Path) -> Self {
        let mut args: Vec<OsString> = spec.flags().iter().map(OsString::from).collect();
        args.push(path.as_os_str().to_owned());
        Self {
            script: spec.name.to_string(),
            program: spec.program().to_string(),
            args,
        }
    }

    /// Shell-like rendering for logs and listings.
    pub fn display(&self) -> String {
        let mut parts = vec![self.program.clone()];
        parts.extend(self.args.iter().map(|a| a.to_string_lossy().into_owned()));
        parts.join(" ")
    }
}

/// What a finished toolchain process reported.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolchainOutput {
    /// `None` when the process ended without an exit code.
    pub status: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

/// Run a toolchain invocation to completion.
///
/// Implementations return `Ok` for any process that ran and exited, whatever its status; judging
/// the status is the verifier's job. `Err` is reserved for processes that could not be launched
/// or did not finish in time.
pub trait ToolchainExecutor {
    fn execute(&self, invocation: &Invocation, timeout: Duration) -> Result<ToolchainOutput, VerifyError>;
}

/// Executor backed by real processes on a Tokio current-thread runtime.
pub struct DefaultToolchainExecutor {
    runtime: tokio::runtime::Runtime,
}

impl DefaultToolchainExecutor {
    pub fn new() -> io::Result<Self> {
        let runtime = tokio::runtime::Builder::new_current_thread().enable_all().build()?;
        Ok(Self { runtime })
    }
}

impl ToolchainExecutor for DefaultToolchainExecutor {
    fn execute(&self, invocation: &Invocation, timeout: Duration) -> Result<ToolchainOutput, VerifyError> {
        tracing::debug!(command = %invocation.display(), timeout_secs = timeout.as_secs(), "spawning toolchain");

        self.runtime.block_on(async {
            let mut command = tokio::process::Command::new(&invocation.program);
            command.args(&invocation.args).stdin(Stdio::null()).kill_on_drop(true);

            // Dropping the `output()` future on expiry kills the child via `kill_on_drop`.
            match tokio::time::timeout(timeout, command.output()).await {
                Err(_elapsed) => Err(VerifyError::ToolchainTimedOut {
                    script: invocation.script.clone(),
                    program: invocation.program.clone(),
                    timeout,
                }),
                Ok(Err(source)) => Err(VerifyError::ToolchainUnavailable {
                    script: invocation.script.clone(),
                    program: invocation.program.clone(),
                    source,
                }),
                Ok(Ok(output)) => Ok(ToolchainOutput {
                    status: output.status.code(),
                    stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
                    stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
                }),
            }
        })
    }
}
