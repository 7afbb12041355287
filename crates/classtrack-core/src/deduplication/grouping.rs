//! Duplicate grouping orchestration
//!
//! Orders candidate anchors by normalized-name length (longest first) so a
//! longer canonical name absorbs shorter fuzzy variants rather than the
//! reverse, then partitions the roster in a single visited-set pass.

use std::cmp::Reverse;
use std::collections::HashSet;

use classtrack_domain::Attendee;
use serde::{Deserialize, Serialize};

use super::normalization::normalize_name;
use super::similarity::normalized_names_match;

/// Groups smaller than this are not duplicates and are dropped.
const MIN_GROUP_SIZE: usize = 2;

/// A group of likely-duplicate attendees
///
/// Groups are recomputed on every pass and hold no identity beyond it:
/// `group_id` is the group's position in the pass that produced it, used
/// only to correlate operator selections back to the same pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DuplicateGroup {
    pub group_id: usize,
    /// Original (un-normalized) name of the group's anchor, for presentation.
    pub display_name: String,
    /// Anchor first, then matches in anchor order. Always at least 2 entries.
    pub members: Vec<Attendee>,
}

/// Partition a roster into disjoint duplicate-candidate groups
///
/// Deterministic and pure: the same input sequence always produces the same
/// groups, and the input is never mutated. Records whose names normalize to
/// the empty string are compared by the same rules; a group of empty names
/// is a data-quality signal for the host to surface, not an error.
pub fn group(attendees: &[Attendee]) -> Vec<DuplicateGroup> {
    let normalized: Vec<String> = attendees
        .iter()
        .map(|a| normalize_name(&a.name))
        .collect();

    // Anchor order: longest normalized name first. The sort is stable, so
    // equal-length names keep their input order.
    let mut order: Vec<usize> = (0..attendees.len()).collect();
    order.sort_by_key(|&i| Reverse(normalized[i].chars().count()));

    let mut groups: Vec<DuplicateGroup> = Vec::new();
    let mut visited: HashSet<usize> = HashSet::new();

    for (pos, &anchor) in order.iter().enumerate() {
        if visited.contains(&anchor) {
            continue;
        }
        visited.insert(anchor);

        let mut members = vec![attendees[anchor].clone()];
        for &candidate in &order[pos + 1..] {
            if visited.contains(&candidate) {
                continue;
            }
            if normalized_names_match(&normalized[anchor], &normalized[candidate]) {
                members.push(attendees[candidate].clone());
                visited.insert(candidate);
            }
        }

        if members.len() >= MIN_GROUP_SIZE {
            groups.push(DuplicateGroup {
                group_id: groups.len(),
                display_name: members[0].name.clone(),
                members,
            });
        }
    }

    groups
}

/// Filter previously computed groups against a set of excluded record ids
///
/// Removes excluded members, then drops any group left with fewer than 2
/// members. `group_id` and `display_name` are kept as computed so operator
/// selections from the same pass still correlate. Idempotent: re-applying
/// the same exclusion set changes nothing, and a dropped group never comes
/// back.
pub fn apply_exclusion(
    groups: Vec<DuplicateGroup>,
    excluded: &HashSet<String>,
) -> Vec<DuplicateGroup> {
    groups
        .into_iter()
        .filter_map(|mut group| {
            group.members.retain(|m| !excluded.contains(&m.id));
            if group.members.len() >= MIN_GROUP_SIZE {
                Some(group)
            } else {
                None
            }
        })
        .collect()
}
