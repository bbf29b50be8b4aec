//! Core editor state
//!
//! - [`CueStore`]: the authoritative in-memory cue collection
//! - [`EditorError`]: error type for editor operations

pub mod errors;
pub mod store;

pub use errors::{EditorError, Result};
pub use store::CueStore;
