//! Command system for bulk store operations
//!
//! Bulk edits go through the [`StoreCommand`] trait so every multi-cue
//! operation shares the same shape: build the complete replacement
//! collection first, then commit it to the store as a single state
//! transition. Callers never observe a partially-updated collection, and
//! a command that finds nothing to do leaves the store untouched.

use crate::core::{CueStore, Result};
use crate::events::StoreEvent;
use crate::search::{compile_matcher, SearchOptions};
use std::sync::Arc;
use subcue_core::Cue;

/// Result of executing a store command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutcome {
    /// Whether the store was mutated at all
    pub content_changed: bool,

    /// Number of cues whose text actually changed
    pub changed: usize,

    /// Optional message about the operation
    pub message: Option<String>,
}

impl CommandOutcome {
    /// An outcome for a command that had nothing to do
    #[must_use]
    pub fn noop() -> Self {
        Self {
            content_changed: false,
            changed: 0,
            message: None,
        }
    }

    /// An outcome for a committed bulk edit
    #[must_use]
    pub fn committed(changed: usize) -> Self {
        Self {
            content_changed: true,
            changed,
            message: None,
        }
    }

    /// Add a message to the outcome
    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

/// Trait for commands that operate on the whole cue store
///
/// # Examples
///
/// ```
/// use subcue_editor::{CueStore, RawCue, ReplaceAllCommand, SearchOptions, StoreCommand};
///
/// let mut store = CueStore::new();
/// store.load_all(vec![RawCue::new(1, "00:00:00:00", "00:00:02:00", "hello hello")]);
///
/// let replace = ReplaceAllCommand::new("hello", "bye", SearchOptions::default());
/// let outcome = replace.execute(&mut store).unwrap();
///
/// assert_eq!(outcome.changed, 1);
/// assert_eq!(store.get(1).unwrap().text, "bye bye");
/// ```
pub trait StoreCommand: core::fmt::Debug {
    /// Execute the command against the store
    fn execute(&self, store: &mut CueStore) -> Result<CommandOutcome>;

    /// Get a human-readable description of the command
    fn description(&self) -> &str;
}

/// Replace every occurrence of a search query across all cues
///
/// The query is compiled exactly as the filter surface compiles it, so
/// what the user sees matched is what gets replaced. An empty or invalid
/// query is a no-op. Non-matching cues keep their identity; matching cues
/// get fresh objects with segments recomputed against their unchanged
/// baselines.
#[derive(Debug, Clone)]
pub struct ReplaceAllCommand {
    /// Search query, literal or regex per the options
    pub query: String,
    /// Replacement text, subject to regex group expansion
    pub replacement: String,
    /// Options the query is compiled with
    pub options: SearchOptions,
}

impl ReplaceAllCommand {
    /// Create a new replace-all command
    pub fn new(
        query: impl Into<String>,
        replacement: impl Into<String>,
        options: SearchOptions,
    ) -> Self {
        Self {
            query: query.into(),
            replacement: replacement.into(),
            options,
        }
    }
}

impl StoreCommand for ReplaceAllCommand {
    fn execute(&self, store: &mut CueStore) -> Result<CommandOutcome> {
        let Some(matcher) = compile_matcher(&self.query, &self.options) else {
            return Ok(CommandOutcome::noop());
        };

        let mut matched = 0usize;
        let mut changed = 0usize;
        let new_cues: Vec<Arc<Cue>> = store
            .cues()
            .iter()
            .map(|cue| {
                if matcher.is_match(&cue.text) {
                    matched += 1;
                    let new_text = matcher.replace_all(&cue.text, &self.replacement);
                    if new_text != cue.text {
                        changed += 1;
                    }
                    Arc::new(cue.with_text(new_text))
                } else {
                    Arc::clone(cue)
                }
            })
            .collect();

        if matched == 0 {
            return Ok(CommandOutcome::noop());
        }

        store.commit(new_cues, StoreEvent::BulkReplaced { changed });
        Ok(CommandOutcome::committed(changed))
    }

    fn description(&self) -> &str {
        "Replace all occurrences of the search query"
    }
}

/// Strip a configured list of filler words from every cue
///
/// The words are matched directly rather than at word boundaries, since
/// `\b` assertions are useless for CJK text. Whitespace runs left behind
/// by a removal collapse to a single space and the result is trimmed.
/// Only cues whose text actually changes get fresh objects.
#[derive(Debug, Clone)]
pub struct ScrubFillerWordsCommand {
    /// Filler words to remove, matched literally and case-sensitively
    pub words: Vec<String>,
}

impl ScrubFillerWordsCommand {
    /// Create a new filler-word scrub command
    pub fn new(words: Vec<String>) -> Self {
        Self { words }
    }
}

impl StoreCommand for ScrubFillerWordsCommand {
    fn execute(&self, store: &mut CueStore) -> Result<CommandOutcome> {
        let escaped: Vec<String> = self
            .words
            .iter()
            .filter(|w| !w.is_empty())
            .map(|w| regex::escape(w))
            .collect();
        if escaped.is_empty() {
            return Ok(CommandOutcome::noop().with_message("Filler word list is empty"));
        }

        // Joining escaped alternatives cannot produce an invalid pattern.
        let Ok(filler) = regex::Regex::new(&escaped.join("|")) else {
            return Ok(CommandOutcome::noop());
        };
        let Ok(whitespace) = regex::Regex::new(r"\s+") else {
            return Ok(CommandOutcome::noop());
        };

        let mut changed = 0usize;
        let new_cues: Vec<Arc<Cue>> = store
            .cues()
            .iter()
            .map(|cue| {
                let scrubbed = filler.replace_all(&cue.text, "");
                let cleaned = whitespace.replace_all(&scrubbed, " ").trim().to_string();
                if cleaned == cue.text {
                    Arc::clone(cue)
                } else {
                    changed += 1;
                    Arc::new(cue.with_text(cleaned))
                }
            })
            .collect();

        if changed == 0 {
            return Ok(CommandOutcome::noop().with_message("No filler words found"));
        }

        store.commit(new_cues, StoreEvent::BulkReplaced { changed });
        Ok(CommandOutcome::committed(changed))
    }

    fn description(&self) -> &str {
        "Remove configured filler words from all cues"
    }
}
