//! Repository layout: the fixed directories the harness reads from.
//!
//! [`RepoLayout`] only joins paths. Whether anything exists at those paths is the verifiers'
//! concern.

use std::path::{Path, PathBuf};

use crate::lang::languages::LanguageId;
use crate::lang::scripts::ScriptSpec;

/// Directory, relative to the root, where the script runner deposits artifacts.
pub const OUTPUTS_DIR: &str = "outputs";

/// File name of the external script runner at the repository root.
pub const RUNNER_SCRIPT: &str = "run_scripts.sh";

/// Path resolution rooted at a tutorial repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoLayout {
    root: PathBuf,
}

impl RepoLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory holding one language's tutorial sources.
    pub fn language_dir(&self, language: LanguageId) -> PathBuf {
        self.root.join(language.info().dir)
    }

    pub fn script_path(&self, spec: &ScriptSpec) -> PathBuf {
        self.root.join(spec.path)
    }

    pub fn outputs_dir(&self) -> PathBuf {
        self.root.join(OUTPUTS_DIR)
    }

    pub fn output_path(&self, file_name: &str) -> PathBuf {
        self.outputs_dir().join(file_name)
    }

    pub fn runner_script(&self) -> PathBuf {
        self.root.join(RUNNER_SCRIPT)
    }
}
