//! The two verifiers and the helpers they share.
//!
//! ## Modules
//!
//! - `syntax` - run a toolchain's syntax-only mode over one script
//! - `outputs` - check runner artifacts for existence, length and markers; scan for extras
//! - `executor` - subprocess boundary (trait + Tokio-backed default)
//! - `paths` - repository root discovery
//! - `error` - failure kinds
//!
//! Both verifiers are read-only and stateless: every call is a single deterministic attempt.

pub mod error;
pub mod executor;
pub mod outputs;
pub mod paths;
pub mod syntax;

pub use error::{ArtifactKind, ExitStatusText, VerifyError};
pub use executor::{DEFAULT_TIMEOUT, DefaultToolchainExecutor, Invocation, ToolchainExecutor, ToolchainOutput};
pub use outputs::{HygieneReport, OutputPass, scan_hygiene, verify_output, verify_output_dir};
pub use paths::discover_root;
pub use syntax::{SyntaxPass, verify_script};
