//! Cue model for subtitle editing
//!
//! A [`Cue`] is one subtitle entry: a stable id, two opaque timecode
//! strings, the live text, the original baseline text it is diffed
//! against, and the segment list describing how to turn one into the
//! other. Timecodes are carried verbatim; nothing in this module parses
//! or mutates them.

use crate::diff::{compute_diff, identity_segments};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Classification of a diff segment relative to the baseline text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SegmentKind {
    /// Present in both the baseline and the current text
    Unchanged,
    /// Present only in the current text
    Inserted,
    /// Present only in the baseline text
    Removed,
}

/// A tagged run of characters in a cue's edit script
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Segment {
    /// How this run relates to the baseline
    pub kind: SegmentKind,
    /// The characters in this run
    pub value: String,
}

impl Segment {
    /// Create an unchanged segment
    pub fn unchanged(value: impl Into<String>) -> Self {
        Self {
            kind: SegmentKind::Unchanged,
            value: value.into(),
        }
    }

    /// Create an inserted segment
    pub fn inserted(value: impl Into<String>) -> Self {
        Self {
            kind: SegmentKind::Inserted,
            value: value.into(),
        }
    }

    /// Create a removed segment
    pub fn removed(value: impl Into<String>) -> Self {
        Self {
            kind: SegmentKind::Removed,
            value: value.into(),
        }
    }
}

/// Reconstruct the current text from an edit script
///
/// Concatenates the `Unchanged` and `Inserted` segment values in order.
#[must_use]
pub fn reconstruct_current(segments: &[Segment]) -> String {
    segments
        .iter()
        .filter(|s| s.kind != SegmentKind::Removed)
        .map(|s| s.value.as_str())
        .collect()
}

/// Reconstruct the baseline text from an edit script
///
/// Concatenates the `Unchanged` and `Removed` segment values in order.
#[must_use]
pub fn reconstruct_original(segments: &[Segment]) -> String {
    segments
        .iter()
        .filter(|s| s.kind != SegmentKind::Inserted)
        .map(|s| s.value.as_str())
        .collect()
}

/// A cue as delivered by the timeline backend
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RawCue {
    /// Backend-assigned identifier, unique within a collection
    pub id: u32,
    /// Formatted start timecode, carried verbatim
    #[cfg_attr(feature = "serde", serde(rename = "startTimecode"))]
    pub start_timecode: String,
    /// Formatted end timecode, carried verbatim
    #[cfg_attr(feature = "serde", serde(rename = "endTimecode"))]
    pub end_timecode: String,
    /// Cue text
    pub text: String,
}

impl RawCue {
    /// Create a raw cue
    pub fn new(
        id: u32,
        start_timecode: impl Into<String>,
        end_timecode: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            id,
            start_timecode: start_timecode.into(),
            end_timecode: end_timecode.into(),
            text: text.into(),
        }
    }
}

/// One subtitle entry with diff tracking against its load-time baseline
///
/// Invariants upheld by the constructors here and the store in
/// `subcue-editor`:
/// - reconstructing the segments reproduces `text` and `original_text`
///   exactly (see [`reconstruct_current`] / [`reconstruct_original`])
/// - `modified == (text != original_text)` at all times
/// - `original_text` is set once at load and never changes afterwards
///
/// # Example
///
/// ```
/// use subcue_core::{Cue, RawCue};
///
/// let cue = Cue::from_raw(RawCue::new(1, "01:00:00:00", "01:00:02:12", "Hello"));
/// assert_eq!(cue.text, cue.original_text);
/// assert!(!cue.modified);
///
/// let edited = cue.with_text("Hello there");
/// assert!(edited.modified);
/// assert_eq!(edited.original_text, "Hello");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Cue {
    /// Backend-assigned identifier
    pub id: u32,
    /// Formatted start timecode
    #[cfg_attr(feature = "serde", serde(rename = "startTimecode"))]
    pub start_timecode: String,
    /// Formatted end timecode
    #[cfg_attr(feature = "serde", serde(rename = "endTimecode"))]
    pub end_timecode: String,
    /// Live, possibly-edited text
    pub text: String,
    /// Baseline text snapshot taken when the cue was loaded
    #[cfg_attr(feature = "serde", serde(rename = "originalText"))]
    pub original_text: String,
    /// Character-level edit script from `original_text` to `text`
    pub segments: Vec<Segment>,
    /// Derived flag, true iff `text != original_text`
    #[cfg_attr(feature = "serde", serde(rename = "isModified"))]
    pub modified: bool,
}

impl Cue {
    /// Build a cue from backend data, taking the incoming text as baseline
    ///
    /// The segment list starts out in the trivial fully-unchanged form.
    #[must_use]
    pub fn from_raw(raw: RawCue) -> Self {
        let segments = identity_segments(&raw.text);
        Self {
            id: raw.id,
            start_timecode: raw.start_timecode,
            end_timecode: raw.end_timecode,
            original_text: raw.text.clone(),
            text: raw.text,
            segments,
            modified: false,
        }
    }

    /// Produce a copy of this cue with new current text
    ///
    /// The baseline stays fixed at whatever it already is; segments and the
    /// modification flag are recomputed against it. Callers that want the
    /// no-op-on-equal-text behavior check equality first (the store does).
    #[must_use]
    pub fn with_text(&self, new_text: impl Into<String>) -> Self {
        let new_text = new_text.into();
        let segments = compute_diff(&self.original_text, &new_text);
        let modified = new_text != self.original_text;
        Self {
            id: self.id,
            start_timecode: self.start_timecode.clone(),
            end_timecode: self.end_timecode.clone(),
            original_text: self.original_text.clone(),
            text: new_text,
            segments,
            modified,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn from_raw_sets_baseline_and_identity_segments() {
        let cue = Cue::from_raw(RawCue::new(7, "00:00:01:00", "00:00:03:00", "Hello world"));
        assert_eq!(cue.id, 7);
        assert_eq!(cue.original_text, "Hello world");
        assert_eq!(cue.text, "Hello world");
        assert_eq!(cue.segments, vec![Segment::unchanged("Hello world")]);
        assert!(!cue.modified);
    }

    #[test]
    fn from_raw_empty_text_has_no_segments() {
        let cue = Cue::from_raw(RawCue::new(1, "00:00:00:00", "00:00:01:00", ""));
        assert!(cue.segments.is_empty());
        assert!(!cue.modified);
    }

    #[test]
    fn with_text_keeps_baseline_fixed() {
        let cue = Cue::from_raw(RawCue::new(1, "00:00:00:00", "00:00:01:00", "one"));
        let second = cue.with_text("two");
        let third = second.with_text("three");
        assert_eq!(second.original_text, "one");
        assert_eq!(third.original_text, "one");
        assert_eq!(reconstruct_original(&third.segments), "one");
        assert_eq!(reconstruct_current(&third.segments), "three");
    }

    #[test]
    fn with_text_back_to_baseline_clears_modified() {
        let cue = Cue::from_raw(RawCue::new(1, "00:00:00:00", "00:00:01:00", "same"));
        let edited = cue.with_text("changed");
        assert!(edited.modified);
        let reverted = edited.with_text("same");
        assert!(!reverted.modified);
        assert_eq!(reconstruct_current(&reverted.segments), "same");
    }

    #[test]
    fn reconstruct_ignores_the_opposite_side() {
        let segments = vec![
            Segment::unchanged("ab"),
            Segment::removed("c"),
            Segment::inserted("XY"),
            Segment::unchanged("d"),
        ];
        assert_eq!(reconstruct_current(&segments), "abXYd");
        assert_eq!(reconstruct_original(&segments), "abcd");
    }
}
