//! Define every script and program whose syntax the harness verifies.
//!
//! [`SCRIPTS`] pairs each source with the language whose toolchain checks it. Paths are relative to
//! the repository root; the runner driver (`run_scripts.sh`) sits at the root itself while tutorial
//! sources live under their language directory.
//!
//! ## Examples
//! ```rust
//! use scriptcheck_core::lang::scripts;
//!
//! let grep = scripts::find("bash/grep.sh").unwrap();
//! assert_eq!(grep.name, "grep.sh");
//! assert_eq!(grep.program(), "bash");
//! ```

use super::languages::LanguageId;

/// A script paired with the toolchain invocation that syntax-checks it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScriptSpec {
    /// Identifying name used in failure messages (the file name).
    pub name: &'static str,
    /// Path relative to the repository root.
    pub path: &'static str,
    pub language: LanguageId,
}

impl ScriptSpec {
    /// Program to spawn for the syntax check.
    pub fn program(&self) -> &'static str {
        self.language.info().program
    }

    /// Flags placed before the script path.
    pub fn flags(&self) -> &'static [&'static str] {
        self.language.info().flags
    }

    /// Exit status a valid source produces.
    pub fn expected_exit(&self) -> i32 {
        self.language.info().expected_exit
    }

    /// Stable check identifier, e.g. `syntax::bash/awk.sh`.
    pub fn check_id(&self) -> String {
        format!("syntax::{}", self.path)
    }
}

/// Registry of all syntax-checked sources.
pub const SCRIPTS: &[ScriptSpec] = &[
    // Shell
    script("basics.sh", "bash/basics.sh", LanguageId::Bash),
    script("grep.sh", "bash/grep.sh", LanguageId::Bash),
    script("awk.sh", "bash/awk.sh", LanguageId::Bash),
    script("run_scripts.sh", "run_scripts.sh", LanguageId::Bash),
    script("basics.zsh", "zsh/basics.zsh", LanguageId::Zsh),
    // Text processing
    script("basics.pl", "perl/basics.pl", LanguageId::Perl),
    // Scripting
    script("basics.py", "python/basics.py", LanguageId::Python),
    script("numpy_basics.py", "python/numpy_basics.py", LanguageId::Python),
    script("matplotlib_basics.py", "python/matplotlib_basics.py", LanguageId::Python),
    // Compiled
    script("basics.cpp", "cpp/basics.cpp", LanguageId::Cpp),
];

/// Find a script by its repository-relative path.
pub fn find(path: &str) -> Option<&'static ScriptSpec> {
    SCRIPTS.iter().find(|s| s.path == path)
}

/// All scripts checked by one language's toolchain, in table order.
pub fn for_language(language: LanguageId) -> impl Iterator<Item = &'static ScriptSpec> {
    SCRIPTS.iter().filter(move |s| s.language == language)
}

const fn script(name: &'static str, path: &'static str, language: LanguageId) -> ScriptSpec {
    ScriptSpec { name, path, language }
}
