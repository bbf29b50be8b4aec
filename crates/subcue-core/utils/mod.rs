//! Shared utilities for subcue-core

pub mod errors;

pub use errors::{CoreError, Result};
