//! Duplicate detection for attendee rosters
//!
//! This module partitions a roster into groups of records that likely
//! represent the same person, via normalized exact matching and bounded
//! edit-distance fuzzy matching.

mod grouping;
mod normalization;
mod similarity;

pub use grouping::{apply_exclusion, group, DuplicateGroup};
pub use normalization::normalize_name;
pub use similarity::names_match;
