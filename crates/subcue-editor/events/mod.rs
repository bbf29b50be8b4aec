//! Store change notifications
//!
//! Mutation and notification are separate concerns: the [`CueStore`]
//! mutates synchronously and, when a channel is attached, emits one
//! [`StoreEvent`] per successful mutation over a plain
//! `std::sync::mpsc` channel. Observers drain the receiver at their
//! own pace; a dropped receiver never affects the store.
//!
//! [`CueStore`]: crate::core::CueStore

/// A change that happened in the cue store
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEvent {
    /// The whole collection was replaced by a fresh load
    Loaded {
        /// Number of cues in the new collection
        count: usize,
    },

    /// A single cue's text was updated
    TextUpdated {
        /// Id of the updated cue
        id: u32,
    },

    /// A bulk command committed a new collection
    BulkReplaced {
        /// Number of cues whose text changed
        changed: usize,
    },
}

impl StoreEvent {
    /// Get a human-readable description of the event
    #[must_use]
    pub fn description(&self) -> String {
        match self {
            Self::Loaded { count } => format!("Loaded {count} cues"),
            Self::TextUpdated { id } => format!("Updated text of cue {id}"),
            Self::BulkReplaced { changed } => format!("Bulk replace changed {changed} cues"),
        }
    }

    /// Check if this event changed cue text in place
    ///
    /// `Loaded` resets baselines rather than editing text, so it does not
    /// count as a modification.
    #[must_use]
    pub fn is_modification(&self) -> bool {
        matches!(self, Self::TextUpdated { .. } | Self::BulkReplaced { .. })
    }
}
