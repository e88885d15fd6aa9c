//! Registry-first vocabularies for the harness.
//!
//! Each submodule exposes a stable identifier or record type plus a `const` table that is the
//! single source of truth for that vocabulary.
//!
//! ## See also
//! - [`languages`] for toolchain invocations.
//! - [`scripts`] for syntax-checked sources.
//! - [`outputs`] for expected runner artifacts.

pub mod languages;
pub mod outputs;
pub mod scripts;
