//! The authoritative in-memory cue collection
//!
//! All text mutations funnel through [`CueStore`]. Cues are held as
//! `Arc<Cue>` so that untouched cues keep their allocation across
//! mutations of others; consumers that cache per-cue derived state can
//! skip work with a cheap `Arc::ptr_eq` check.
//!
//! The store is an owned, explicitly constructed object. Change
//! notification is a separate concern: attach a channel with
//! [`CueStore::set_event_channel`] and the store emits a [`StoreEvent`]
//! after each successful mutation.

use crate::events::StoreEvent;
use std::cell::RefCell;
use std::sync::mpsc::Sender;
use std::sync::Arc;
use subcue_core::{Cue, RawCue};

type EventSender = Sender<StoreEvent>;

/// Single source of truth for a loaded subtitle cue collection
///
/// Execution is single-threaded and synchronous: every mutation runs to
/// completion within its call, and a query issued right after a mutation
/// always sees the mutated state.
///
/// # Example
///
/// ```
/// use subcue_editor::{CueStore, RawCue};
///
/// let mut store = CueStore::new();
/// store.load_all(vec![RawCue::new(1, "01:00:00:00", "01:00:02:00", "Hello world")]);
///
/// store.update_text(1, "Hello brave world");
/// assert_eq!(store.modified_indices(), vec![0]);
///
/// // Editing back to the baseline clears the flag.
/// store.update_text(1, "Hello world");
/// assert!(store.modified_indices().is_empty());
/// ```
#[derive(Debug)]
pub struct CueStore {
    /// Display-ordered collection; position is never changed by the store
    cues: Vec<Arc<Cue>>,

    /// Bumped on every mutation, keys the modified-indices cache
    version: u64,

    /// Memoized result of the last `modified_indices` call
    modified_cache: RefCell<Option<(u64, Vec<usize>)>>,

    /// Optional channel for change notifications
    event_tx: Option<EventSender>,
}

impl CueStore {
    /// Create a new empty store
    #[must_use]
    pub fn new() -> Self {
        Self {
            cues: Vec::new(),
            version: 0,
            modified_cache: RefCell::new(None),
            event_tx: None,
        }
    }

    /// Create a new store with an event channel attached
    #[must_use]
    pub fn with_event_channel(event_tx: EventSender) -> Self {
        let mut store = Self::new();
        store.event_tx = Some(event_tx);
        store
    }

    /// Attach an event channel for change notifications
    pub fn set_event_channel(&mut self, event_tx: EventSender) {
        self.event_tx = Some(event_tx);
    }

    /// Check if the store has an event channel
    #[must_use]
    pub fn has_event_channel(&self) -> bool {
        self.event_tx.is_some()
    }

    /// Emit an event to the attached channel, if any
    ///
    /// Send failures are ignored: a disconnected observer must not break
    /// an editing session.
    fn emit(&self, event: StoreEvent) {
        if let Some(tx) = &self.event_tx {
            let _ = tx.send(event);
        }
    }

    /// Replace the entire collection with freshly loaded cues
    ///
    /// Each incoming cue becomes its own baseline: `original_text` is set
    /// to the incoming text, segments to the trivial unchanged form, and
    /// the modification flag cleared. An empty input yields an empty
    /// collection, not an error.
    pub fn load_all(&mut self, raw: Vec<RawCue>) {
        debug_assert!(
            {
                let mut ids: Vec<u32> = raw.iter().map(|r| r.id).collect();
                ids.sort_unstable();
                ids.windows(2).all(|w| w[0] != w[1])
            },
            "cue ids must be unique within a collection"
        );

        let count = raw.len();
        self.cues = raw.into_iter().map(|r| Arc::new(Cue::from_raw(r))).collect();
        self.bump_version();
        self.emit(StoreEvent::Loaded { count });
    }

    /// Update one cue's current text, keeping its baseline fixed
    ///
    /// Unknown ids are a no-op: other parts of the system may race
    /// against the store and reference ids removed by a full reload.
    /// Equal text is also a no-op, with no diff recomputation and no
    /// identity change for the cue.
    ///
    /// Returns whether the store changed.
    pub fn update_text(&mut self, id: u32, new_text: &str) -> bool {
        let Some(index) = self.cues.iter().position(|c| c.id == id) else {
            return false;
        };
        if self.cues[index].text == new_text {
            return false;
        }

        let updated = self.cues[index].with_text(new_text);
        self.cues[index] = Arc::new(updated);
        self.bump_version();
        self.emit(StoreEvent::TextUpdated { id });
        true
    }

    /// The current collection, in display order
    #[must_use]
    pub fn cues(&self) -> &[Arc<Cue>] {
        &self.cues
    }

    /// Look up a cue by id
    #[must_use]
    pub fn get(&self, id: u32) -> Option<&Arc<Cue>> {
        self.cues.iter().find(|c| c.id == id)
    }

    /// Number of cues in the collection
    #[must_use]
    pub fn len(&self) -> usize {
        self.cues.len()
    }

    /// Check if the collection is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cues.is_empty()
    }

    /// Collection version, bumped on every mutation
    #[must_use]
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Ordered 0-based positions of modified cues
    ///
    /// Memoized against the collection version: repeated calls between
    /// mutations reuse the cached result, and any mutation invalidates it,
    /// so the answer is never stale.
    #[must_use]
    pub fn modified_indices(&self) -> Vec<usize> {
        if let Some((version, indices)) = self.modified_cache.borrow().as_ref() {
            if *version == self.version {
                return indices.clone();
            }
        }

        let indices: Vec<usize> = self
            .cues
            .iter()
            .enumerate()
            .filter(|(_, c)| c.modified)
            .map(|(i, _)| i)
            .collect();
        *self.modified_cache.borrow_mut() = Some((self.version, indices.clone()));
        indices
    }

    /// Commit a whole new collection as one state transition
    ///
    /// Used by bulk commands: the caller builds the complete replacement
    /// vector first, so observers never see a partially-updated
    /// collection.
    pub(crate) fn commit(&mut self, cues: Vec<Arc<Cue>>, event: StoreEvent) {
        self.cues = cues;
        self.bump_version();
        self.emit(event);
    }

    fn bump_version(&mut self) {
        self.version += 1;
        self.modified_cache.borrow_mut().take();
    }
}

impl Default for CueStore {
    fn default() -> Self {
        Self::new()
    }
}
