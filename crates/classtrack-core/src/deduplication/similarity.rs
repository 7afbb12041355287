//! Match rule between attendee names

use strsim::levenshtein;

use super::normalization::normalize_name;

/// Names at or below this length never fuzzy-match (too many false positives).
const FUZZY_MIN_LEN: usize = 4;
/// Anchors longer than this get the wider edit-distance allowance.
const WIDE_THRESHOLD_LEN: usize = 7;

/// Check whether two names should be treated as duplicates
///
/// Normalizes both names, then applies the match rule: exact equality, or
/// edit distance within a threshold that scales with the anchor's length.
/// The first argument is the anchor; its length alone selects the threshold.
pub fn names_match(anchor: &str, candidate: &str) -> bool {
    normalized_names_match(&normalize_name(anchor), &normalize_name(candidate))
}

/// Match rule over already-normalized names.
///
/// - Exact equality matches (including empty vs empty).
/// - Otherwise both names must be at least 4 characters long, and the
///   Levenshtein distance must be at most 2 for anchors longer than
///   6 characters, at most 1 for shorter anchors.
pub(crate) fn normalized_names_match(anchor: &str, candidate: &str) -> bool {
    if anchor == candidate {
        return true;
    }

    let anchor_len = anchor.chars().count();
    let candidate_len = candidate.chars().count();
    if anchor_len < FUZZY_MIN_LEN || candidate_len < FUZZY_MIN_LEN {
        return false;
    }

    let max_distance = if anchor_len >= WIDE_THRESHOLD_LEN { 2 } else { 1 };
    levenshtein(anchor, candidate) <= max_distance
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("jon smith", "jon smith", true ; "exact match")]
    #[test_case("jon smith", "jan smith", true ; "distance one within wide threshold")]
    #[test_case("jon smith", "jan smyth", true ; "distance two within wide threshold")]
    #[test_case("jon smith", "ian smyth", false ; "distance three over wide threshold")]
    #[test_case("maria", "marla", true ; "distance one within narrow threshold")]
    #[test_case("maria", "marlo", false ; "distance two over narrow threshold")]
    #[test_case("al", "bl", false ; "short names never fuzzy match")]
    #[test_case("al", "al", true ; "short names still match exactly")]
    #[test_case("", "", true ; "empty names match exactly")]
    #[test_case("", "jon smith", false ; "empty never fuzzy matches")]
    fn test_normalized_match_rule(anchor: &str, candidate: &str, expected: bool) {
        assert_eq!(normalized_names_match(anchor, candidate), expected);
    }

    #[test]
    fn test_names_match_normalizes_inputs() {
        assert!(names_match("  Jon Smith ", "JON SMITH"));
        assert!(names_match("Jon Smith", "Jan Smith"));
        assert!(!names_match("Al", "Bl"));
    }

    #[test]
    fn test_threshold_follows_anchor_length() {
        // Anchor length picks the allowance: a 7-char anchor allows distance
        // 2, a 6-char anchor does not.
        assert!(normalized_names_match("bennett", "benet"));
        assert!(!normalized_names_match("bennet", "bene"));
    }
}
