//! Search and filter engine for cue text
//!
//! A user query compiles into a [`Matcher`], or into `None`, which is
//! doing double duty: an empty query means "match everything" (filtering
//! is bypassed entirely) and an invalid regex means "match nothing / do
//! nothing". Both degrade safely at every call site, so a mistyped
//! pattern can never crash a live editing session.
//!
//! Matching is case-insensitive unless `match_case` is set, and the
//! compiled pattern always substitutes every occurrence in a string, not
//! just the first. Rust's `Regex` carries no scan-position state between
//! calls, so there is no `lastIndex`-style reset hazard here.

use regex::RegexBuilder;
use std::sync::Arc;
use subcue_core::Cue;

/// Options controlling how a query is compiled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SearchOptions {
    /// Treat the query as a regular expression instead of literal text
    pub use_regex: bool,

    /// Match case-sensitively (default is case-insensitive)
    pub match_case: bool,

    /// Wrap the pattern in word-boundary assertions
    pub match_whole_word: bool,
}

impl SearchOptions {
    /// Literal, case-insensitive, substring matching
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable regular expression interpretation of the query
    #[must_use]
    pub fn use_regex(mut self, on: bool) -> Self {
        self.use_regex = on;
        self
    }

    /// Enable case-sensitive matching
    #[must_use]
    pub fn match_case(mut self, on: bool) -> Self {
        self.match_case = on;
        self
    }

    /// Restrict matches to whole words
    #[must_use]
    pub fn match_whole_word(mut self, on: bool) -> Self {
        self.match_whole_word = on;
        self
    }
}

/// A compiled search pattern
///
/// Construct with [`compile_matcher`]. Matches against a cue's live
/// current text.
#[derive(Debug, Clone)]
pub struct Matcher {
    regex: regex::Regex,
}

impl Matcher {
    /// Test whether the pattern occurs anywhere in `text`
    #[must_use]
    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }

    /// Substitute every occurrence of the pattern in `text`
    ///
    /// The replacement string follows regex group-expansion rules
    /// (`$1`, `${name}`, `$$` for a literal dollar) in literal query
    /// mode too, so a query-mode toggle never changes what a given
    /// replacement string means.
    #[must_use]
    pub fn replace_all(&self, text: &str, replacement: &str) -> String {
        self.regex.replace_all(text, replacement).into_owned()
    }

    /// The underlying pattern source, for diagnostics
    #[must_use]
    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }
}

/// Compile a user query into a matcher
///
/// Returns `None` for an empty query (the match-everything sentinel) and
/// for a syntactically invalid pattern, which is only reachable with
/// `use_regex` set. Callers treat both the same way: filtering falls back
/// to the unfiltered collection, replacing becomes a no-op.
///
/// # Example
///
/// ```
/// use subcue_editor::{compile_matcher, SearchOptions};
///
/// let matcher = compile_matcher("a.c", &SearchOptions::default()).unwrap();
/// // Literal mode: the dot matches a dot, not any character.
/// assert!(matcher.is_match("ra.cing"));
/// assert!(!matcher.is_match("racing"));
///
/// assert!(compile_matcher("", &SearchOptions::default()).is_none());
/// assert!(compile_matcher("test(", &SearchOptions::default().use_regex(true)).is_none());
/// ```
#[must_use]
pub fn compile_matcher(query: &str, options: &SearchOptions) -> Option<Matcher> {
    if query.is_empty() {
        return None;
    }

    let pattern = if options.use_regex {
        query.to_string()
    } else {
        regex::escape(query)
    };
    let pattern = if options.match_whole_word {
        format!(r"\b{pattern}\b")
    } else {
        pattern
    };

    RegexBuilder::new(&pattern)
        .case_insensitive(!options.match_case)
        .build()
        .ok()
        .map(|regex| Matcher { regex })
}

/// Filter a cue collection down to the cues whose current text matches
///
/// Preserves collection order and cue identity (the returned `Arc`s are
/// the store's own). A `None` matcher returns every cue.
#[must_use]
pub fn filter_cues(cues: &[Arc<Cue>], matcher: Option<&Matcher>) -> Vec<Arc<Cue>> {
    match matcher {
        None => cues.to_vec(),
        Some(m) => cues
            .iter()
            .filter(|c| m.is_match(&c.text))
            .cloned()
            .collect(),
    }
}
