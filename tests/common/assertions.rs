//! Assertion helpers for the fab harnesses.

use fab_core::search::normalize_query;
use fab_core::{MatchGroup, Tier};

/// Assert the groups appear with exactly these keys, in this order.
pub fn assert_group_keys(groups: &[MatchGroup], expected: &[&str]) {
    let keys: Vec<&str> = groups.iter().map(|g| g.key.as_str()).collect();
    assert_eq!(keys, expected, "group keys / order mismatch");
}

/// Assert every group honours the score bands: [90,100] for a singleton,
/// [60,80] for a multi-record group — and that the tier matches the score.
pub fn assert_score_bands(groups: &[MatchGroup]) {
    for group in groups {
        let range = if group.details.len() == 1 {
            90..=100u8
        } else {
            60..=80u8
        };
        assert!(
            range.contains(&group.score),
            "group {:?} with {} records scored {} outside {:?}",
            group.key,
            group.details.len(),
            group.score,
            range
        );
        assert_eq!(group.tier, Tier::from_score(group.score));
        // The red tier is unreachable from these bands; a red result is a
        // regression in the scorer.
        assert_ne!(group.tier, Tier::Red, "group {:?} reported red", group.key);
    }
}

/// Assert each group's key contains the normalized query as a substring.
pub fn assert_keys_contain_query(groups: &[MatchGroup], raw_query: &str) {
    let needle = normalize_query(raw_query);
    for group in groups {
        assert!(
            group.key.contains(&needle),
            "group key {:?} does not contain query {:?}",
            group.key,
            needle
        );
    }
}
