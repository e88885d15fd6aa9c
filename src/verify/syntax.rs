//! Syntax Verifier: run each toolchain's syntax-only mode over one script.

use std::time::Duration;

use scriptcheck_core::{RepoLayout, ScriptSpec};

use super::error::{ArtifactKind, ExitStatusText, VerifyError};
use super::executor::{Invocation, ToolchainExecutor};

/// A script the toolchain accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxPass {
    pub script: &'static str,
    /// Whatever the checker printed to stderr on success (e.g. perl's "syntax OK").
    pub diagnostics: String,
}

/// Syntax-check one script.
///
/// The script must exist before the toolchain is invoked; a missing file is reported as
/// [`VerifyError::MissingArtifact`] naming the expected path. Otherwise the check passes iff the
/// toolchain exits with the script's expected status, and fails with
/// [`VerifyError::ToolchainRejected`] carrying the toolchain's stderr verbatim.
#[tracing::instrument(skip_all, fields(script = spec.path))]
pub fn verify_script(
    layout: &RepoLayout,
    spec: &'static ScriptSpec,
    executor: &dyn ToolchainExecutor,
    timeout: Duration,
) -> Result<SyntaxPass, VerifyError> {
    let path = layout.script_path(spec);
    if !path.exists() {
        return Err(VerifyError::MissingArtifact {
            kind: ArtifactKind::Script,
            path,
        });
    }

    let invocation = Invocation::for_script(spec, &path);
    let output = executor.execute(&invocation, timeout)?;

    match output.status {
        Some(code) if code == spec.expected_exit() => Ok(SyntaxPass {
            script: spec.name,
            diagnostics: output.stderr,
        }),
        status => Err(VerifyError::ToolchainRejected {
            script: spec.name.to_string(),
            program: invocation.program,
            status: status.map_or(ExitStatusText::Signalled, ExitStatusText::Code),
            stderr: output.stderr,
        }),
    }
}
