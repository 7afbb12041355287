//! Merge resolution for duplicate groups
//!
//! Given one group and the operator's choice of which record survives,
//! computes the final record and the ids to remove. Pure computation;
//! applying the result belongs to the roster store.

use classtrack_domain::Attendee;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::deduplication::DuplicateGroup;

/// Separator between joined note fragments.
const NOTES_SEPARATOR: &str = "; ";
/// Prefix marking notes carried over from removed duplicates.
const MERGED_NOTES_PREFIX: &str = "Merged: ";

/// Resolution error type
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ResolveError {
    #[error("record {survivor_id} is not a member of group {group_id}")]
    InvalidSelection {
        group_id: usize,
        survivor_id: String,
    },
}

/// Outcome of resolving one duplicate group.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Resolution {
    /// The record that remains, with merged fields when requested.
    pub survivor: Attendee,
    /// Ids of the removed group members; never contains the survivor's id.
    pub removed_ids: Vec<String>,
}

/// Resolve a duplicate group around a chosen survivor
///
/// With `merge_sessions` unset, the survivor is returned unchanged and the
/// other members are simply removed. With it set, the victims' session
/// counts are added onto the survivor's and their notes are carried over;
/// every other field keeps the survivor's value even where victims differ.
pub fn resolve(
    group: &DuplicateGroup,
    survivor_id: &str,
    merge_sessions: bool,
) -> Result<Resolution, ResolveError> {
    let survivor = group
        .members
        .iter()
        .find(|m| m.id == survivor_id)
        .ok_or_else(|| ResolveError::InvalidSelection {
            group_id: group.group_id,
            survivor_id: survivor_id.to_string(),
        })?;

    let victims: Vec<&Attendee> = group
        .members
        .iter()
        .filter(|m| m.id != survivor_id)
        .collect();

    let mut merged = survivor.clone();

    if merge_sessions {
        merged.sessions_remaining += victims.iter().map(|v| v.sessions_remaining).sum::<u32>();
        merged.total_sessions += victims.iter().map(|v| v.total_sessions).sum::<u32>();

        let carried: Vec<&str> = victims
            .iter()
            .filter_map(|v| v.notes.as_deref())
            .filter(|n| !n.is_empty())
            .collect();

        if !carried.is_empty() {
            let carried = format!("{}{}", MERGED_NOTES_PREFIX, carried.join(NOTES_SEPARATOR));
            merged.notes = Some(match merged.notes.take() {
                Some(own) if !own.is_empty() => {
                    format!("{}{}{}", own, NOTES_SEPARATOR, carried)
                }
                _ => carried,
            });
        }
    }

    Ok(Resolution {
        survivor: merged,
        removed_ids: victims.iter().map(|v| v.id.clone()).collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use classtrack_domain::PaymentStatus;

    fn attendee(id: &str, remaining: u32, total: u32, notes: Option<&str>) -> Attendee {
        Attendee {
            id: id.to_string(),
            name: "Sarah Connor".to_string(),
            class_type: "Yoga".to_string(),
            total_sessions: total,
            sessions_remaining: remaining,
            payment_status: PaymentStatus::Pending,
            notes: notes.map(|n| n.to_string()),
            last_check_in: None,
        }
    }

    fn make_group(members: Vec<Attendee>) -> DuplicateGroup {
        DuplicateGroup {
            group_id: 0,
            display_name: members[0].name.clone(),
            members,
        }
    }

    #[test]
    fn test_merge_adds_sessions() {
        let group = make_group(vec![
            attendee("s", 5, 10, None),
            attendee("v1", 3, 5, None),
            attendee("v2", 2, 5, None),
        ]);

        let resolution = resolve(&group, "s", true).unwrap();
        assert_eq!(resolution.survivor.sessions_remaining, 10);
        assert_eq!(resolution.survivor.total_sessions, 20);
    }

    #[test]
    fn test_no_merge_keeps_survivor_unchanged() {
        let group = make_group(vec![
            attendee("s", 5, 10, None),
            attendee("v1", 3, 5, Some("Owes invoice")),
        ]);

        let resolution = resolve(&group, "s", false).unwrap();
        assert_eq!(resolution.survivor, group.members[0]);
        assert_eq!(resolution.removed_ids, vec!["v1".to_string()]);
    }

    #[test]
    fn test_notes_appended_to_existing() {
        let group = make_group(vec![
            attendee("s", 5, 10, Some("VIP")),
            attendee("v1", 0, 0, Some("")),
            attendee("v2", 0, 0, Some("Injured knee")),
        ]);

        let resolution = resolve(&group, "s", true).unwrap();
        assert_eq!(
            resolution.survivor.notes.as_deref(),
            Some("VIP; Merged: Injured knee")
        );
    }

    #[test]
    fn test_notes_without_survivor_notes() {
        let group = make_group(vec![
            attendee("s", 5, 10, None),
            attendee("v1", 0, 0, Some("Owes invoice")),
        ]);

        let resolution = resolve(&group, "s", true).unwrap();
        assert_eq!(
            resolution.survivor.notes.as_deref(),
            Some("Merged: Owes invoice")
        );
    }

    #[test]
    fn test_no_victim_notes_leaves_survivor_notes_alone() {
        let group = make_group(vec![
            attendee("s", 5, 10, Some("VIP")),
            attendee("v1", 1, 2, None),
            attendee("v2", 1, 2, Some("")),
        ]);

        let resolution = resolve(&group, "s", true).unwrap();
        assert_eq!(resolution.survivor.notes.as_deref(), Some("VIP"));
    }

    #[test]
    fn test_victim_notes_join_in_victim_order() {
        let group = make_group(vec![
            attendee("v1", 0, 0, Some("first")),
            attendee("s", 5, 10, None),
            attendee("v2", 0, 0, Some("second")),
        ]);

        let resolution = resolve(&group, "s", true).unwrap();
        assert_eq!(
            resolution.survivor.notes.as_deref(),
            Some("Merged: first; second")
        );
    }

    #[test]
    fn test_removed_ids_exclude_survivor() {
        let group = make_group(vec![
            attendee("a", 1, 1, None),
            attendee("b", 1, 1, None),
            attendee("c", 1, 1, None),
        ]);

        for merge_sessions in [false, true] {
            let resolution = resolve(&group, "b", merge_sessions).unwrap();
            assert_eq!(
                resolution.removed_ids,
                vec!["a".to_string(), "c".to_string()]
            );
            assert!(!resolution.removed_ids.contains(&"b".to_string()));
        }
    }

    #[test]
    fn test_other_fields_come_from_survivor() {
        let mut survivor = attendee("s", 5, 10, None);
        survivor.class_type = "Pilates".to_string();
        survivor.payment_status = PaymentStatus::Paid;
        let mut victim = attendee("v", 3, 5, None);
        victim.class_type = "Yoga".to_string();
        victim.payment_status = PaymentStatus::Overdue;
        victim.name = "sarah connor".to_string();

        let group = make_group(vec![survivor, victim]);
        let resolution = resolve(&group, "s", true).unwrap();

        assert_eq!(resolution.survivor.id, "s");
        assert_eq!(resolution.survivor.name, "Sarah Connor");
        assert_eq!(resolution.survivor.class_type, "Pilates");
        assert_eq!(resolution.survivor.payment_status, PaymentStatus::Paid);
    }

    #[test]
    fn test_resolution_serializes_for_the_host() {
        let group = make_group(vec![attendee("s", 5, 10, None), attendee("v", 1, 2, None)]);
        let resolution = resolve(&group, "s", false).unwrap();

        let json = serde_json::to_string(&resolution).unwrap();
        assert!(json.contains("\"removed_ids\":[\"v\"]"));
    }

    #[test]
    fn test_unknown_survivor_is_invalid_selection() {
        let group = make_group(vec![attendee("a", 1, 1, None), attendee("b", 1, 1, None)]);

        let err = resolve(&group, "id-not-in-group", true).unwrap_err();
        assert_eq!(
            err,
            ResolveError::InvalidSelection {
                group_id: 0,
                survivor_id: "id-not-in-group".to_string(),
            }
        );
    }
}
