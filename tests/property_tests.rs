//! Property-based tests for content rules
//!
//! These tests use proptest to verify the length and marker invariants across many randomly
//! generated artifact bodies, for every content-checked entry in the output registry.

use proptest::prelude::*;
use scriptcheck_core::lang::outputs;
use scriptcheck_core::{ContentMismatch, ContentRule, Marker, MatchCase, OutputExpectation, check_content, content_len};

// =============================================================================
// Strategies
// =============================================================================

/// Content-checked registry entries.
fn text_expectation() -> impl Strategy<Value = &'static OutputExpectation> {
    prop::sample::select(outputs::content_checked().collect::<Vec<_>>())
}

/// Registry entries with at least one marker, paired with one of their markers.
fn marked_expectation() -> impl Strategy<Value = (&'static OutputExpectation, Marker)> {
    let marked: Vec<_> = outputs::content_checked()
        .filter_map(|o| match o.rule {
            ContentRule::Text { markers, .. } if !markers.is_empty() => Some((o, markers)),
            _ => None,
        })
        .collect();
    prop::sample::select(marked).prop_flat_map(|(o, markers)| (Just(o), prop::sample::select(markers.to_vec())))
}

/// Text that cannot contain any registered marker.
fn filler(min: usize, max: usize) -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(vec!['0', '7', '.', ' ', '\n']), min..=max)
        .prop_map(|chars| chars.into_iter().collect())
}

fn min_len_of(expectation: &OutputExpectation) -> usize {
    match expectation.rule {
        ContentRule::Text { min_len, .. } => min_len,
        ContentRule::ListingOnly => 0,
    }
}

/// Pad `head` with filler until it is strictly longer than `min_len`.
fn long_enough(head: String, min_len: usize, pad: &str) -> String {
    let mut content = head;
    content.push_str(pad);
    while content_len(&content) <= min_len {
        content.push('0');
    }
    content
}

// =============================================================================
// Content Properties
// =============================================================================

proptest! {
    /// Property: any single marker plus enough filler satisfies the rule
    #[test]
    fn marker_and_length_pass((expectation, marker) in marked_expectation(), pad in filler(0, 64)) {
        let content = long_enough(marker.text.to_string(), min_len_of(expectation), &pad);
        prop_assert_eq!(check_content(&content, &expectation.rule), Ok(()));
    }

    /// Property: content at or below the threshold is too short, markers or not
    #[test]
    fn at_or_below_threshold_is_too_short((expectation, marker) in marked_expectation(), cut in 0usize..20) {
        let min_len = min_len_of(expectation);
        let full = long_enough(marker.text.to_string(), min_len, "");
        let keep = min_len.saturating_sub(cut);
        let content: String = full.chars().take(keep).collect();

        prop_assert_eq!(
            check_content(&content, &expectation.rule),
            Err(ContentMismatch::TooShort { min_len, actual: keep })
        );
    }

    /// Property: long content without markers fails only when the entry declares markers
    #[test]
    fn markerless_content_fails_iff_markers_exist(expectation in text_expectation(), pad in filler(0, 64)) {
        let content = long_enough(String::new(), min_len_of(expectation), &pad);
        let result = check_content(&content, &expectation.rule);

        match expectation.rule {
            ContentRule::Text { markers, .. } if markers.is_empty() => prop_assert_eq!(result, Ok(())),
            _ => {
                let is_no_marker = matches!(result, Err(ContentMismatch::NoMarker { .. }));
                prop_assert!(is_no_marker, "expected NoMarker, got {:?}", result);
            }
        }
    }

    /// Property: case-insensitive markers match regardless of the content's case
    #[test]
    fn any_case_markers_ignore_case((expectation, marker) in marked_expectation(), pad in filler(0, 64)) {
        prop_assume!(marker.case == MatchCase::Insensitive);
        let content = long_enough(marker.text.to_uppercase(), min_len_of(expectation), &pad);
        prop_assert_eq!(check_content(&content, &expectation.rule), Ok(()));
    }

    /// Property: the threshold applies to characters, so multi-byte filler is never over-counted
    #[test]
    fn multibyte_content_is_measured_in_characters(
        (expectation, marker) in marked_expectation(),
        wide in prop::sample::select(vec!['é', '日', '→', '🦀']),
        extra in 0usize..3
    ) {
        let min_len = min_len_of(expectation);
        let head = marker.text.to_string();
        let head_len = content_len(&head);
        // One character below, at, or above the threshold; bytes always exceed characters
        let target = min_len + extra - 1;
        let mut content = head;
        content.extend(std::iter::repeat_n(wide, target.saturating_sub(head_len)));
        prop_assert!(content.len() > content_len(&content));

        let result = check_content(&content, &expectation.rule);
        if target <= min_len {
            prop_assert_eq!(result, Err(ContentMismatch::TooShort { min_len, actual: target }));
        } else {
            prop_assert_eq!(result, Ok(()));
        }
    }
}
