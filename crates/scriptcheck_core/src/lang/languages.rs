//! Define the tutorial languages and their syntax-only toolchain invocations.
//!
//! This module is the single source of truth for how each language is syntax-checked: a stable
//! identifier ([`LanguageId`]) plus a const metadata table ([`LANGUAGES`]) recording the canonical
//! name, the repository directory holding that language's scripts, and the program + flags that
//! parse or compile without running anything.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive**.
//! - The script path is always appended after `flags` when the invocation is built.
//!
//! ## Examples
//! ```rust
//! use scriptcheck_core::lang::languages::{self, LanguageId};
//!
//! assert_eq!(languages::from_str("zsh"), Some(LanguageId::Zsh));
//! assert_eq!(languages::info_for(LanguageId::Perl).program, "perl");
//! ```

/// Stable identifier for every tutorial language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LanguageId {
    Bash,
    Zsh,
    Perl,
    Python,
    Cpp,
}

/// Metadata for a language and its syntax checker.
///
/// ## Notes
/// - `dir` is relative to the repository root.
/// - `expected_exit` is the status the checker reports for a well-formed source.
#[derive(Debug, Clone, Copy)]
pub struct LanguageInfo {
    pub id: LanguageId,
    pub name: &'static str,
    pub dir: &'static str,
    pub program: &'static str,
    pub flags: &'static [&'static str],
    pub expected_exit: i32,
}

/// Registry of all languages.
pub const LANGUAGES: &[LanguageInfo] = &[
    info(LanguageId::Bash, "bash", "bash", "bash", &["-n"]),
    info(LanguageId::Zsh, "zsh", "zsh", "zsh", &["-n"]),
    info(LanguageId::Perl, "perl", "perl", "perl", &["-c"]),
    info(LanguageId::Python, "python", "python", "python3", &["-m", "py_compile"]),
    info(LanguageId::Cpp, "cpp", "cpp", "g++", &["-std=c++20", "-fsyntax-only"]),
];

/// Resolve a language from its canonical name.
pub fn from_str(name: &str) -> Option<LanguageId> {
    LANGUAGES.iter().find(|l| l.name == name).map(|l| l.id)
}

/// Return the canonical name for a language.
pub fn as_str(id: LanguageId) -> &'static str {
    info_for(id).name
}

/// Return the full metadata record for a language.
pub fn info_for(id: LanguageId) -> &'static LanguageInfo {
    match LANGUAGES.iter().find(|l| l.id == id) {
        Some(info) => info,
        None => unreachable!("LANGUAGES is missing an entry for {id:?}"),
    }
}

impl LanguageId {
    /// Metadata for this language.
    pub fn info(self) -> &'static LanguageInfo {
        info_for(self)
    }
}

impl std::fmt::Display for LanguageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(as_str(*self))
    }
}

const fn info(
    id: LanguageId,
    name: &'static str,
    dir: &'static str,
    program: &'static str,
    flags: &'static [&'static str],
) -> LanguageInfo {
    LanguageInfo {
        id,
        name,
        dir,
        program,
        flags,
        expected_exit: 0,
    }
}
