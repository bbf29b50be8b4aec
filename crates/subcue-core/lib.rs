//! Core data model and algorithms for subtitle cue editing
//!
//! `subcue-core` provides the building blocks shared by every layer of the
//! subcue stack: the [`Cue`] model with its per-cue diff segments, the
//! character-level diff engine that produces those segments, and the
//! frame-based timecode conversions used when exporting cues.
//!
//! All of this is pure data and pure functions. Editing state (the cue
//! store, search, bulk replace) lives in `subcue-editor`.
//!
//! # Example
//!
//! ```
//! use subcue_core::{compute_diff, reconstruct_current, reconstruct_original};
//!
//! let segments = compute_diff("Hello world", "Hello brave world");
//!
//! // The edit script round-trips both texts exactly.
//! assert_eq!(reconstruct_current(&segments), "Hello brave world");
//! assert_eq!(reconstruct_original(&segments), "Hello world");
//! ```

pub mod cue;
pub mod diff;
pub mod timecode;
pub mod utils;

pub use cue::{reconstruct_current, reconstruct_original, Cue, RawCue, Segment, SegmentKind};
pub use diff::{compute_diff, identity_segments};
pub use timecode::{frames_to_srt_timecode, frames_to_timecode, timecode_to_frames};
pub use utils::errors::{CoreError, Result};
