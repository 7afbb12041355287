//! Domain types shared across the ClassTrack roster manager
//!
//! This crate provides the canonical models the roster engine operates on:
//! - Attendee: a class member with a session package and payment state
//! - PaymentStatus: Paid / Pending / Overdue
//! - ClassDefinition: a class type offered on the schedule
//! - RosterStats: aggregate counts for the dashboard

pub mod attendee;
pub mod class;
pub mod stats;

pub use attendee::*;
pub use class::*;
pub use stats::*;
