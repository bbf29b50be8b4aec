//! Character-level diff engine
//!
//! Thin adapter over `similar`'s Myers diff, operating at character
//! granularity and coalescing consecutive same-tag changes into the
//! [`Segment`] runs the cue model stores. Pure functions, deterministic,
//! never panic for any string input.
//!
//! The contract that matters is the round-trip property, not strict
//! minimality of the edit script: concatenating unchanged+inserted
//! segments reproduces the current text, unchanged+removed reproduces
//! the original.

use crate::cue::{Segment, SegmentKind};
use similar::{ChangeTag, TextDiff};

/// Compute the character-level edit script from `original` to `current`
///
/// Handles empty inputs, multi-byte characters, and CJK text. Equal
/// inputs short-circuit to the trivial fully-unchanged form.
///
/// # Example
///
/// ```
/// use subcue_core::{compute_diff, SegmentKind};
///
/// let segments = compute_diff("cat", "cart");
/// assert!(segments.iter().any(|s| s.kind == SegmentKind::Inserted));
/// ```
#[must_use]
pub fn compute_diff(original: &str, current: &str) -> Vec<Segment> {
    if original == current {
        return identity_segments(current);
    }

    let diff = TextDiff::from_chars(original, current);
    let mut segments: Vec<Segment> = Vec::new();

    for change in diff.iter_all_changes() {
        let kind = match change.tag() {
            ChangeTag::Equal => SegmentKind::Unchanged,
            ChangeTag::Delete => SegmentKind::Removed,
            ChangeTag::Insert => SegmentKind::Inserted,
        };
        match segments.last_mut() {
            Some(last) if last.kind == kind => last.value.push_str(change.value()),
            _ => segments.push(Segment {
                kind,
                value: change.value().to_string(),
            }),
        }
    }

    segments
}

/// The trivial edit script for an unedited text
///
/// Empty text yields an empty segment list; anything else a single
/// unchanged segment.
#[must_use]
pub fn identity_segments(text: &str) -> Vec<Segment> {
    if text.is_empty() {
        Vec::new()
    } else {
        vec![Segment::unchanged(text)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cue::{reconstruct_current, reconstruct_original};
    use pretty_assertions::assert_eq;

    fn assert_round_trip(original: &str, current: &str) {
        let segments = compute_diff(original, current);
        assert_eq!(reconstruct_current(&segments), current);
        assert_eq!(reconstruct_original(&segments), original);
    }

    #[test]
    fn equal_inputs_yield_identity() {
        assert_eq!(
            compute_diff("hello", "hello"),
            vec![Segment::unchanged("hello")]
        );
    }

    #[test]
    fn both_empty_yield_empty_script() {
        assert!(compute_diff("", "").is_empty());
    }

    #[test]
    fn empty_original_is_pure_insertion() {
        let segments = compute_diff("", "abc");
        assert_eq!(segments, vec![Segment::inserted("abc")]);
    }

    #[test]
    fn empty_current_is_pure_removal() {
        let segments = compute_diff("abc", "");
        assert_eq!(segments, vec![Segment::removed("abc")]);
    }

    #[test]
    fn insertion_in_the_middle() {
        let segments = compute_diff("Hello world", "Hello brave world");

        let inserted: Vec<&Segment> = segments
            .iter()
            .filter(|s| s.kind == SegmentKind::Inserted)
            .collect();
        assert_eq!(inserted.len(), 1);
        assert!(inserted[0].value.contains("brave"));
        assert!(segments.iter().all(|s| s.kind != SegmentKind::Removed));

        assert_round_trip("Hello world", "Hello brave world");
    }

    #[test]
    fn consecutive_changes_are_coalesced() {
        let segments = compute_diff("aaaa", "bbbb");
        // One removed run, one inserted run, in whichever order the
        // underlying algorithm emits them.
        assert_eq!(segments.len(), 2);
        for adjacent in segments.windows(2) {
            assert_ne!(adjacent[0].kind, adjacent[1].kind);
        }
        assert_round_trip("aaaa", "bbbb");
    }

    #[test]
    fn handles_cjk_text() {
        assert_round_trip("今天天气很好", "今天的天气非常好");
    }

    #[test]
    fn handles_astral_characters() {
        assert_round_trip("a𝕏b", "a𝕐b");
        assert_round_trip("🎬 action", "🎬 cut");
    }

    #[test]
    fn handles_punctuation_heavy_edits() {
        assert_round_trip("Wait... what?", "Wait! What?!");
    }

    #[test]
    fn recomputed_against_fixed_baseline() {
        // Two sequential edits diffed against the same baseline keep the
        // baseline reconstructable from either script.
        let baseline = "the quick brown fox";
        let first = compute_diff(baseline, "the slow brown fox");
        let second = compute_diff(baseline, "a quick red fox");
        assert_eq!(reconstruct_original(&first), baseline);
        assert_eq!(reconstruct_original(&second), baseline);
    }

    #[test]
    fn identity_segments_for_empty_and_nonempty() {
        assert!(identity_segments("").is_empty());
        assert_eq!(identity_segments("x"), vec![Segment::unchanged("x")]);
    }
}
