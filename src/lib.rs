#![forbid(unsafe_code)]
//! scriptcheck: verification harness for multi-language tutorial repositories
//!
//! Two verifiers guard a tutorial repository: one runs each language's own syntax checker over the
//! tutorial scripts, the other checks the artifacts the runner script leaves in `outputs/`.
//! The registries they consult live in the `scriptcheck_core` crate; this crate does the IO.
//!
//! ## Panic Policy
//!
//! This codebase follows explicit error handling:
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module
//!   enforces `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.

pub mod cli;
pub mod verify;
pub mod version;

pub use scriptcheck_core::{ContentRule, LanguageId, Marker, MatchCase, OutputExpectation, RepoLayout, ScriptSpec};
pub use verify::{
    DefaultToolchainExecutor, ToolchainExecutor, VerifyError, scan_hygiene, verify_output, verify_output_dir,
    verify_script,
};
