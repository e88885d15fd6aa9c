//! Output Verifier: existence, length and marker checks over runner artifacts, plus the soft
//! directory hygiene scan.

use std::fs;
use std::io;
use std::path::PathBuf;

use scriptcheck_core::lang::outputs;
use scriptcheck_core::{ContentRule, OutputExpectation, RepoLayout, check_content, content_len};

use super::error::{ArtifactKind, VerifyError};

/// An artifact that satisfied its content rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPass {
    pub file_name: &'static str,
    /// Content length in characters; `None` for listing-only artifacts, which are never opened.
    pub len: Option<usize>,
}

/// Verify one expected artifact.
///
/// Checks run in order and stop at the first failure: the file must exist, its text must be
/// readable as UTF-8, its length must exceed the threshold, and one marker must be present.
/// Listing-only artifacts pass without touching the filesystem.
#[tracing::instrument(skip_all, fields(file = expectation.file_name))]
pub fn verify_output(layout: &RepoLayout, expectation: &'static OutputExpectation) -> Result<OutputPass, VerifyError> {
    if let ContentRule::ListingOnly = expectation.rule {
        return Ok(OutputPass {
            file_name: expectation.file_name,
            len: None,
        });
    }

    let path = layout.output_path(expectation.file_name);
    if !path.exists() {
        return Err(VerifyError::MissingArtifact {
            kind: ArtifactKind::OutputFile,
            path,
        });
    }

    let content = fs::read_to_string(&path).map_err(|source| VerifyError::Unreadable { path, source })?;

    check_content(&content, &expectation.rule).map_err(|mismatch| VerifyError::ContentMismatch {
        file: expectation.file_name.to_string(),
        mismatch,
    })?;

    Ok(OutputPass {
        file_name: expectation.file_name,
        len: Some(content_len(&content)),
    })
}

/// The outputs directory must exist and be a directory.
pub fn verify_output_dir(layout: &RepoLayout) -> Result<PathBuf, VerifyError> {
    let dir = layout.outputs_dir();
    if !dir.exists() {
        return Err(VerifyError::MissingArtifact {
            kind: ArtifactKind::OutputsDir,
            path: dir,
        });
    }
    if !dir.is_dir() {
        return Err(VerifyError::NotADirectory { path: dir });
    }
    Ok(dir)
}

/// Result of comparing the outputs directory against the known artifact set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HygieneReport {
    /// Regular files not listed in the output registry, sorted by name.
    pub unexpected: Vec<String>,
}

impl HygieneReport {
    pub fn is_clean(&self) -> bool {
        self.unexpected.is_empty()
    }
}

/// Scan the outputs directory for files the registry does not know about.
///
/// Only regular files (or links to them) are considered; subdirectories are ignored. Findings are
/// returned, never raised: an error here means the directory itself could not be listed.
pub fn scan_hygiene(layout: &RepoLayout) -> Result<HygieneReport, VerifyError> {
    let dir = verify_output_dir(layout)?;
    let unreadable = |source: io::Error| VerifyError::Unreadable {
        path: dir.clone(),
        source,
    };

    let mut unexpected = Vec::new();
    for entry in fs::read_dir(&dir).map_err(unreadable)? {
        let entry = entry.map_err(unreadable)?;
        // Follows symlinks, so a link to a stray file is reported like the file itself
        if !entry.path().is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        if !outputs::is_known(&name) {
            unexpected.push(name);
        }
    }
    unexpected.sort();

    if !unexpected.is_empty() {
        tracing::warn!(count = unexpected.len(), files = ?unexpected, "unexpected files in outputs directory");
    }

    Ok(HygieneReport { unexpected })
}
