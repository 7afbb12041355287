//! Attendee domain model

use serde::{Deserialize, Serialize};
use std::fmt;

/// Payment state of an attendee's current session package.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentStatus {
    Paid,
    Pending,
    Overdue,
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PaymentStatus::Paid => "Paid",
            PaymentStatus::Pending => "Pending",
            PaymentStatus::Overdue => "Overdue",
        };
        write!(f, "{}", label)
    }
}

/// A class attendee with a prepaid session package.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Attendee {
    /// Opaque unique identifier, unique across the whole roster.
    pub id: String,
    /// Display name, free text.
    pub name: String,
    /// Class type label, free text.
    pub class_type: String,
    /// Package size.
    pub total_sessions: u32,
    /// Sessions left in the package.
    pub sessions_remaining: u32,
    pub payment_status: PaymentStatus,
    pub notes: Option<String>,
    /// ISO 8601 timestamp of the most recent check-in.
    pub last_check_in: Option<String>,
}

impl Attendee {
    /// Create a new attendee with a fresh id and a full, unpaid package.
    pub fn new(name: String, class_type: String, total_sessions: u32) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name,
            class_type,
            total_sessions,
            sessions_remaining: total_sessions,
            payment_status: PaymentStatus::Pending,
            notes: None,
            last_check_in: None,
        }
    }
}
