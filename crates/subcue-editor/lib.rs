//! Editing layer for subtitle cues
//!
//! `subcue-editor` provides the stateful side of the subcue stack, built on
//! the model and diff engine in `subcue-core`:
//!
//! - **Cue store**: the single source of truth for a loaded cue collection,
//!   with baseline-preserving text updates and a memoized modified-cue query
//! - **Search**: compiled matchers for literal or regex queries with
//!   case-sensitivity and whole-word options
//! - **Commands**: atomic bulk operations (replace-all, filler-word scrub)
//!   that commit a whole new collection in one state transition
//! - **Events**: store change notifications over a plain channel, kept
//!   separate from the mutation API itself
//! - **Formats**: export units for downstream collaborators and an SRT
//!   serializer
//!
//! # Example
//!
//! ```
//! use subcue_editor::{CueStore, RawCue, ReplaceAllCommand, SearchOptions, StoreCommand};
//!
//! let mut store = CueStore::new();
//! store.load_all(vec![
//!     RawCue::new(1, "01:00:00:00", "01:00:02:00", "a test case"),
//!     RawCue::new(2, "01:00:02:00", "01:00:04:00", "no match here"),
//! ]);
//!
//! let command = ReplaceAllCommand::new("test", "passing", SearchOptions::default());
//! let outcome = command.execute(&mut store).unwrap();
//!
//! assert_eq!(outcome.changed, 1);
//! assert_eq!(store.modified_indices(), vec![0]);
//! ```

pub mod commands;
pub mod core;
pub mod events;
pub mod search;

#[cfg(feature = "formats")]
pub mod formats;

// Re-export subcue-core types as first-class citizens
pub use subcue_core::{
    compute_diff, identity_segments, reconstruct_current, reconstruct_original, CoreError, Cue,
    RawCue, Segment, SegmentKind,
};

// Public API exports
pub use commands::{CommandOutcome, ReplaceAllCommand, ScrubFillerWordsCommand, StoreCommand};
pub use core::{CueStore, EditorError, Result};
pub use events::StoreEvent;
pub use search::{compile_matcher, filter_cues, Matcher, SearchOptions};

#[cfg(feature = "formats")]
pub use formats::{
    export_units, srt::SrtExporter, CueExporter, ExportRequest, ExportSummary, ExportUnit,
};
