//! Aggregate roster statistics for the dashboard

use serde::{Deserialize, Serialize};

/// Counts derived from the current roster.
///
/// `class_distribution` preserves first-seen order of class types so the
/// dashboard chart is stable across refreshes of the same roster.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RosterStats {
    pub total_attendees: u32,
    pub pending_payments: u32,
    pub overdue_payments: u32,
    /// Attendees with 2 or fewer sessions left in a non-empty package.
    pub low_sessions: u32,
    pub class_distribution: Vec<(String, u32)>,
}
