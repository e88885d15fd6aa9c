//! Provide the canonical script and output registries for the scriptcheck harness.
//!
//! This crate is intentionally small and dependency-light. It holds the immutable tables the
//! verifiers consult and the pure rules they apply:
//! - [`lang::languages`]: each tutorial language, its directory, and its syntax-only toolchain invocation,
//! - [`lang::scripts`]: every script/program whose syntax is checked,
//! - [`lang::outputs`]: every artifact the external script runner is expected to produce,
//! - [`content`]: length and marker matching over artifact text.
//!
//! ## Notes
//!
//! - Nothing here touches the filesystem or spawns processes; the root crate does all IO.
//! - Adding a script or artifact means appending one record to the matching `const` table.

pub mod content;
pub mod lang;
pub mod layout;

pub use content::{ContentMismatch, check_content, content_len};
pub use lang::languages::{LanguageId, LanguageInfo};
pub use lang::outputs::{ContentRule, Marker, MatchCase, OutputExpectation};
pub use lang::scripts::ScriptSpec;
pub use layout::RepoLayout;
