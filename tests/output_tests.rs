//! Output verification over fixture directories.

use std::fs;

use scriptcheck::RepoLayout;
use scriptcheck::verify::{self, VerifyError};
use scriptcheck_core::ContentMismatch;
use scriptcheck_core::lang::outputs::{self, OUTPUTS};

struct Fixture {
    _dir: tempfile::TempDir,
    layout: RepoLayout,
}

impl Fixture {
    fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let layout = RepoLayout::new(dir.path());
        fs::create_dir_all(layout.outputs_dir()).unwrap();
        Self { _dir: dir, layout }
    }

    fn write(&self, name: &str, content: impl AsRef<[u8]>) {
        fs::write(self.layout.output_path(name), content).unwrap();
    }
}

fn padded(head: &str, len: usize) -> String {
    let mut text = head.to_string();
    while text.chars().count() < len {
        text.push('.');
    }
    text
}

#[test]
fn grep_output_with_marker_and_length_passes() {
    let fixture = Fixture::new();
    fixture.write("bash_grep.txt", padded("Running GREP examples\n", 150));

    let pass = verify::verify_output(&fixture.layout, outputs::find("bash_grep.txt").unwrap()).unwrap();
    assert_eq!(pass.len, Some(150));
}

#[test]
fn length_at_threshold_is_too_short() {
    let fixture = Fixture::new();
    fixture.write("bash_basics.txt", padded("count=3\n", 100));

    let err = verify::verify_output(&fixture.layout, outputs::find("bash_basics.txt").unwrap()).unwrap_err();
    match err {
        VerifyError::ContentMismatch { file, mismatch } => {
            assert_eq!(file, "bash_basics.txt");
            assert_eq!(
                mismatch,
                ContentMismatch::TooShort {
                    min_len: 100,
                    actual: 100
                }
            );
        }
        other => panic!("expected ContentMismatch, got {other:?}"),
    }
}

#[test]
fn long_output_without_markers_lists_them() {
    let fixture = Fixture::new();
    fixture.write("python_basics.txt", "x".repeat(500));

    let err = verify::verify_output(&fixture.layout, outputs::find("python_basics.txt").unwrap()).unwrap_err();
    let message = err.to_string();
    for marker in ["string", "dict", "list", "function"] {
        assert!(message.contains(marker), "{message}");
    }
}

#[test]
fn missing_output_names_the_expected_path() {
    let fixture = Fixture::new();

    let err = verify::verify_output(&fixture.layout, outputs::find("cpp_basics.txt").unwrap()).unwrap_err();
    match err {
        VerifyError::MissingArtifact { path, .. } => assert_eq!(path, fixture.layout.output_path("cpp_basics.txt")),
        other => panic!("expected MissingArtifact, got {other:?}"),
    }
}

#[test]
fn non_utf8_output_is_unreadable() {
    let fixture = Fixture::new();
    fixture.write("perl_basics.txt", [0xff_u8; 80]);

    let err = verify::verify_output(&fixture.layout, outputs::find("perl_basics.txt").unwrap()).unwrap_err();
    assert!(matches!(err, VerifyError::Unreadable { .. }), "got {err:?}");
}

#[test]
fn outputs_path_that_is_a_file_is_not_a_directory() {
    let dir = tempfile::tempdir().unwrap();
    let layout = RepoLayout::new(dir.path());
    fs::write(layout.outputs_dir(), "not a dir").unwrap();

    let err = verify::verify_output_dir(&layout).unwrap_err();
    assert!(matches!(err, VerifyError::NotADirectory { .. }));
}

#[test]
fn hygiene_flags_only_unknown_regular_files() {
    let fixture = Fixture::new();
    for expectation in OUTPUTS {
        fixture.write(expectation.file_name, "");
    }
    fixture.write("notes.md", "stray");
    fixture.write("a.log", "stray");
    fs::create_dir_all(fixture.layout.outputs_dir().join("plots")).unwrap();

    let report = verify::scan_hygiene(&fixture.layout).unwrap();
    assert_eq!(report.unexpected, ["a.log", "notes.md"]);
}

#[test]
fn hygiene_on_missing_directory_fails() {
    let dir = tempfile::tempdir().unwrap();
    let layout = RepoLayout::new(dir.path());

    assert!(verify::scan_hygiene(&layout).is_err());
}
