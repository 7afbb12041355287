//! classtrack-core: roster engine for the ClassTrack attendance manager
//!
//! This library provides pure Rust implementations of:
//! - Duplicate detection (normalized exact matching + bounded edit distance)
//! - Merge resolution (survivor selection, session accumulation, notes carry-over)
//! - The in-memory roster store that applies resolutions as a single
//!   replace-and-filter operation
//!
//! Rendering, form input, durable persistence, and the free-text import
//! parser live in the host application; this crate only consumes attendee
//! records and produces groupings and resolutions.

pub mod deduplication;
pub mod merge;
pub mod roster;

// Re-export main types for convenience
pub use deduplication::{apply_exclusion, group, names_match, DuplicateGroup};
pub use merge::{resolve, Resolution, ResolveError};
pub use roster::{ApplyError, Roster};

/// Returns the version of classtrack-core
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
