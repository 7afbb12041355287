//! In-memory roster store
//!
//! Owns the authoritative attendee collection and the class registry, and
//! applies duplicate resolutions as a single replace-and-filter operation:
//! either every referenced record is removed and the merged survivor
//! inserted, or the collection is left untouched.

use std::collections::HashSet;

use chrono::Utc;
use classtrack_domain::{Attendee, ClassDefinition, PaymentStatus, RosterStats};
use thiserror::Error;

use crate::deduplication::{self, DuplicateGroup};
use crate::merge::Resolution;

/// Attendees with this many sessions or fewer count as low-balance.
const LOW_SESSIONS_THRESHOLD: u32 = 2;

/// Store-level apply error type
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApplyError {
    /// The collection changed since the group was computed. The caller must
    /// discard the group and re-run grouping; nothing was modified.
    #[error("stale group: record ids {missing:?} no longer exist")]
    StaleGroup { missing: Vec<String> },
}

/// The authoritative in-memory record collection.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    attendees: Vec<Attendee>,
    classes: Vec<ClassDefinition>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_attendees(attendees: Vec<Attendee>) -> Self {
        Self {
            attendees,
            classes: Vec::new(),
        }
    }

    pub fn attendees(&self) -> &[Attendee] {
        &self.attendees
    }

    pub fn len(&self) -> usize {
        self.attendees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attendees.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Attendee> {
        self.attendees.iter().find(|a| a.id == id)
    }

    /// Insert a new attendee at the front of the list (newest first).
    pub fn add(&mut self, attendee: Attendee) {
        self.attendees.insert(0, attendee);
    }

    /// Replace an existing attendee in place. Returns false if the id is
    /// unknown.
    pub fn update(&mut self, attendee: Attendee) -> bool {
        match self.attendees.iter_mut().find(|a| a.id == attendee.id) {
            Some(slot) => {
                *slot = attendee;
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.attendees.len();
        self.attendees.retain(|a| a.id != id);
        self.attendees.len() != before
    }

    /// Record a check-in: decrement the session balance and stamp the time.
    ///
    /// Returns false when the attendee is unknown or has no sessions left;
    /// the record is untouched in that case.
    pub fn check_in(&mut self, id: &str) -> bool {
        match self.attendees.iter_mut().find(|a| a.id == id) {
            Some(a) if a.sessions_remaining > 0 => {
                a.sessions_remaining -= 1;
                a.last_check_in = Some(Utc::now().to_rfc3339());
                true
            }
            _ => false,
        }
    }

    /// Run duplicate grouping over the current collection.
    pub fn find_duplicates(&self) -> Vec<DuplicateGroup> {
        deduplication::group(&self.attendees)
    }

    /// Apply a computed resolution to the collection
    ///
    /// Re-validates that the survivor and every removed id still exist, then
    /// removes the union of {survivor's old id} and `removed_ids` and inserts
    /// the final record at the front, as one swap. On `StaleGroup` the
    /// collection is unchanged and the caller should re-run grouping.
    pub fn apply_resolution(&mut self, resolution: &Resolution) -> Result<(), ApplyError> {
        let present: HashSet<&str> = self.attendees.iter().map(|a| a.id.as_str()).collect();

        let mut missing: Vec<String> = Vec::new();
        if !present.contains(resolution.survivor.id.as_str()) {
            missing.push(resolution.survivor.id.clone());
        }
        for id in &resolution.removed_ids {
            if !present.contains(id.as_str()) {
                missing.push(id.clone());
            }
        }
        if !missing.is_empty() {
            return Err(ApplyError::StaleGroup { missing });
        }

        let involved: HashSet<&str> = resolution
            .removed_ids
            .iter()
            .map(String::as_str)
            .chain(std::iter::once(resolution.survivor.id.as_str()))
            .collect();

        let mut next = Vec::with_capacity(self.attendees.len());
        next.push(resolution.survivor.clone());
        next.extend(
            self.attendees
                .iter()
                .filter(|a| !involved.contains(a.id.as_str()))
                .cloned(),
        );
        self.attendees = next;
        Ok(())
    }

    /// Aggregate counts for the dashboard.
    pub fn stats(&self) -> RosterStats {
        let mut class_distribution: Vec<(String, u32)> = Vec::new();
        for attendee in &self.attendees {
            match class_distribution
                .iter_mut()
                .find(|(class, _)| *class == attendee.class_type)
            {
                Some((_, count)) => *count += 1,
                None => class_distribution.push((attendee.class_type.clone(), 1)),
            }
        }

        RosterStats {
            total_attendees: self.attendees.len() as u32,
            pending_payments: self.count(|a| a.payment_status == PaymentStatus::Pending),
            overdue_payments: self.count(|a| a.payment_status == PaymentStatus::Overdue),
            low_sessions: self.count(|a| {
                a.sessions_remaining <= LOW_SESSIONS_THRESHOLD && a.total_sessions > 0
            }),
            class_distribution,
        }
    }

    fn count(&self, predicate: impl Fn(&Attendee) -> bool) -> u32 {
        self.attendees.iter().filter(|a| predicate(a)).count() as u32
    }

    // ===== Class registry =====

    pub fn classes(&self) -> &[ClassDefinition] {
        &self.classes
    }

    pub fn add_class(&mut self, class: ClassDefinition) {
        self.classes.push(class);
    }

    pub fn update_class(&mut self, class: ClassDefinition) -> bool {
        match self.classes.iter_mut().find(|c| c.id == class.id) {
            Some(slot) => {
                *slot = class;
                true
            }
            None => false,
        }
    }

    pub fn remove_class(&mut self, id: &str) -> bool {
        let before = self.classes.len();
        self.classes.retain(|c| c.id != id);
        self.classes.len() != before
    }
}
