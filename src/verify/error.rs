//! Failure kinds shared by the verifiers.
//!
//! Every variant is fatal to the one check that produced it; none are retried. Directory hygiene
//! findings are deliberately *not* represented here, since extra files never fail a run.

use std::fmt;
use std::io;
use std::path::PathBuf;
use std::time::Duration;

use miette::Diagnostic;
use scriptcheck_core::ContentMismatch;
use thiserror::Error;

/// What kind of file a [`VerifyError::MissingArtifact`] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    Script,
    OutputFile,
    OutputsDir,
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ArtifactKind::Script => "script",
            ArtifactKind::OutputFile => "output file",
            ArtifactKind::OutputsDir => "outputs directory",
        })
    }
}

/// How a toolchain process ended when it did not report success.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStatusText {
    Code(i32),
    /// Terminated without an exit code (e.g. by a signal).
    Signalled,
}

impl fmt::Display for ExitStatusText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitStatusText::Code(code) => write!(f, "exit status {code}"),
            ExitStatusText::Signalled => f.write_str("termination by signal"),
        }
    }
}

/// Errors produced by the syntax and output verifiers.
#[derive(Debug, Error, Diagnostic)]
pub enum VerifyError {
    #[error("{kind} not found: {}", path.display())]
    #[diagnostic(
        code(scriptcheck::missing_artifact),
        help("scripts live under their language directory; outputs appear after run_scripts.sh has run")
    )]
    MissingArtifact { kind: ArtifactKind, path: PathBuf },

    #[error("syntax error in {script} ({program} reported {status}):\n{stderr}")]
    #[diagnostic(code(scriptcheck::toolchain_rejected))]
    ToolchainRejected {
        script: String,
        program: String,
        status: ExitStatusText,
        stderr: String,
    },

    #[error("could not launch `{program}` to check {script}: {source}")]
    #[diagnostic(
        code(scriptcheck::toolchain_unavailable),
        help("the language toolchain must be installed and on PATH; this is not a syntax error")
    )]
    ToolchainUnavailable {
        script: String,
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("`{program}` did not finish checking {script} within {}s", timeout.as_secs())]
    #[diagnostic(
        code(scriptcheck::toolchain_timed_out),
        help("raise the limit with --timeout if the toolchain is just slow")
    )]
    ToolchainTimedOut {
        script: String,
        program: String,
        timeout: Duration,
    },

    #[error("{file}: {mismatch}")]
    #[diagnostic(code(scriptcheck::content_mismatch))]
    ContentMismatch { file: String, mismatch: ContentMismatch },

    #[error("could not read {}: {source}", path.display())]
    #[diagnostic(code(scriptcheck::unreadable))]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{} exists but is not a directory", path.display())]
    #[diagnostic(code(scriptcheck::not_a_directory))]
    NotADirectory { path: PathBuf },
}

impl VerifyError {
    /// Whether the failure comes from the environment (toolchain not installed) rather than the
    /// script or its outputs.
    pub fn is_environmental(&self) -> bool {
        matches!(self, VerifyError::ToolchainUnavailable { .. })
    }
}
