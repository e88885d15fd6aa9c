//! Pure length and marker matching over artifact text.
//!
//! The Output Verifier reads a file and hands the text to [`check_content`]; everything about
//! *what counts as good content* lives here so it can be exercised without touching disk.
//!
//! ## Notes
//! - Length is counted in Unicode scalar values, so multi-byte output is not over-counted.
//! - The length check runs first; a too-short file fails even when a marker is present.

use thiserror::Error;

use crate::lang::outputs::{ContentRule, Marker, MatchCase};

/// Why an artifact's content was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContentMismatch {
    #[error("content is {actual} characters, expected more than {min_len}")]
    TooShort { min_len: usize, actual: usize },

    #[error("none of the expected markers were found: {}", list_markers(.expected))]
    NoMarker { expected: Vec<Marker> },
}

/// Length of `content` as the verifier measures it.
pub fn content_len(content: &str) -> usize {
    content.chars().count()
}

/// Whether `marker` occurs in `content` under the marker's case mode.
pub fn marker_matches(content: &str, marker: &Marker) -> bool {
    matches_in(content, &content.to_lowercase(), marker)
}

/// Return the first marker from `markers` found in `content`.
pub fn find_marker<'m>(content: &str, markers: &'m [Marker]) -> Option<&'m Marker> {
    // Lowercase once rather than per marker.
    let lowered = content.to_lowercase();
    markers.iter().find(|m| matches_in(content, &lowered, m))
}

/// `lowered` must be `content.to_lowercase()`.
fn matches_in(content: &str, lowered: &str, marker: &Marker) -> bool {
    match marker.case {
        MatchCase::Sensitive => content.contains(marker.text),
        MatchCase::Insensitive => lowered.contains(&marker.text.to_lowercase()),
    }
}

/// Apply a content rule to artifact text.
///
/// ## Returns
/// - `Ok(())` when the rule is satisfied, or when the rule is [`ContentRule::ListingOnly`].
/// - `Err(ContentMismatch)` describing the first failed assertion.
///
/// ## Examples
/// ```rust
/// use scriptcheck_core::{check_content, ContentMismatch, ContentRule, Marker};
///
/// const MARKERS: &[Marker] = &[Marker::any_case("grep")];
/// let rule = ContentRule::Text { min_len: 100, markers: MARKERS };
/// let err = check_content("grep -i pattern file.txt matched 3 lines", &rule).unwrap_err();
/// assert!(matches!(err, ContentMismatch::TooShort { min_len: 100, .. }));
/// ```
pub fn check_content(content: &str, rule: &ContentRule) -> Result<(), ContentMismatch> {
    let ContentRule::Text { min_len, markers } = *rule else {
        return Ok(());
    };

    let actual = content_len(content);
    if actual <= min_len {
        return Err(ContentMismatch::TooShort { min_len, actual });
    }

    if markers.is_empty() || find_marker(content, markers).is_some() {
        Ok(())
    } else {
        Err(ContentMismatch::NoMarker {
            expected: markers.to_vec(),
        })
    }
}

fn list_markers(markers: &[Marker]) -> String {
    markers.iter().map(|m| m.to_string()).collect::<Vec<_>>().join(", ")
}
