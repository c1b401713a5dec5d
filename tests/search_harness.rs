//! Search pipeline integration harness.
//!
//! # What this covers
//!
//! - **Normalization**: query whitespace runs collapse to one space
//!   (idempotently); record codes only have newlines replaced — the
//!   asymmetry is pinned here so it cannot be "fixed" silently.
//! - **Filtering**: case-sensitive literal substring semantics, escaped
//!   metacharacters, exclusion of records without an error code, and the
//!   empty query matching the whole table.
//! - **Grouping**: first-occurrence order, key equality across members.
//! - **Scoring**: the [90,100] / [60,80] bands, tier mapping, and the
//!   regression check that no group ever reports the red tier.
//! - **Not-found**: zero matches surface `SearchError::NoMatch`, never an
//!   empty success list.
//!
//! # What this does NOT cover
//!
//! - Detail-text formatting (see format_harness)
//! - Dataset loading (see dataset_harness)
//!
//! # Running
//!
//! ```sh
//! cargo test --test search_harness
//! ```

mod common;
use common::*;

use fab_core::search::{normalize_code, normalize_query, search, SearchError};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rstest::rstest;

// ---------------------------------------------------------------------------
// Normalization
// ---------------------------------------------------------------------------

#[rstest]
#[case("E01", "E01")]
#[case("  E01  ", "E01")]
#[case("E01\nCAM", "E01 CAM")]
#[case("E01 \n\t CAM   FAIL", "E01 CAM FAIL")]
#[case("", "")]
#[case("   \n  ", "")]
fn query_whitespace_collapses(#[case] raw: &str, #[case] expected: &str) {
    assert_eq!(normalize_query(raw), expected);
}

#[test]
fn code_normalization_touches_newlines_only() {
    assert_eq!(normalize_code("E01\nCAM"), "E01 CAM");
    // Runs of spaces and tabs survive — deliberately asymmetric with the
    // query side.
    assert_eq!(normalize_code("E01  \t CAM"), "E01  \t CAM");
}

// ---------------------------------------------------------------------------
// Filtering
// ---------------------------------------------------------------------------

/// Matching is case-sensitive: "e01" finds nothing in an E01 table.
#[test]
fn match_is_case_sensitive() {
    let table = load_str(SAMPLE_COOKBOOK);
    let err = search(&table, "e01", &mut seeded_rng(1)).unwrap_err();
    assert_eq!(err, SearchError::NoMatch { query: "e01".to_string() });
}

/// "E01" groups the newline variant and the space variant together: their
/// normalized codes are identical.
#[test]
fn newline_and_space_codes_share_a_group() {
    let table = load_str(SAMPLE_COOKBOOK);
    let groups = search(&table, "E01", &mut seeded_rng(1)).expect("match");
    assert_group_keys(&groups, &["E01 CAM FAIL"]);
    assert_eq!(groups[0].details.len(), 2);
    assert!((60..=80).contains(&groups[0].score));
}

/// Regex metacharacters in the query are literal text.
#[test]
fn query_metacharacters_are_literal() {
    let table = table_of(&["E01 (NEW)", "E01 xNEWx"]);
    let groups = search(&table, "(NEW)", &mut seeded_rng(1)).expect("match");
    assert_group_keys(&groups, &["E01 (NEW)"]);
}

/// Records without an error code never match, even the match-all query.
#[test]
fn records_without_code_are_excluded() {
    let table = load_str(SAMPLE_COOKBOOK);
    let groups = search(&table, "", &mut seeded_rng(1)).expect("match");
    assert_group_keys(&groups, &["E01 CAM FAIL", "E02 MIC OPEN"]);
    let total: usize = groups.iter().map(|g| g.details.len()).sum();
    // The unlabeled fourth row is absent.
    assert_eq!(total, 3);
}

/// Empty (or whitespace-only) query matches every coded record.
#[test]
fn empty_query_matches_everything() {
    let table = load_str(SAMPLE_COOKBOOK);
    let from_empty = search(&table, "", &mut seeded_rng(1)).expect("match");
    let from_blank = search(&table, " \n ", &mut seeded_rng(1)).expect("match");
    assert_eq!(
        from_empty.iter().map(|g| &g.key).collect::<Vec<_>>(),
        from_blank.iter().map(|g| &g.key).collect::<Vec<_>>()
    );
}

// ---------------------------------------------------------------------------
// Grouping
// ---------------------------------------------------------------------------

/// Groups appear in first-occurrence order, not sorted.
#[test]
fn groups_follow_first_occurrence_order() {
    let table = table_of(&["E09", "E03", "E09", "E01", "E03"]);
    let groups = search(&table, "E0", &mut seeded_rng(1)).expect("match");
    assert_group_keys(&groups, &["E09", "E03", "E01"]);
}

/// Every member of a group shares the group key, and the key contains the
/// query.
#[test]
fn group_invariants_hold() {
    let table = load_str(SAMPLE_COOKBOOK);
    let groups = search(&table, "E0", &mut seeded_rng(1)).expect("match");
    assert_keys_contain_query(&groups, "E0");
    assert_score_bands(&groups);
}

// ---------------------------------------------------------------------------
// Scoring
// ---------------------------------------------------------------------------

/// Score bands hold across many seeds; red is never reported.
#[test]
fn score_bands_hold_for_every_seed() {
    let table = load_str(SAMPLE_COOKBOOK);
    for seed in 0..200 {
        let groups = search(&table, "E0", &mut seeded_rng(seed)).expect("match");
        assert_score_bands(&groups);
    }
}

/// A singleton group scores in [90,100]; a pair scores in [60,80].
#[test]
fn singleton_and_pair_bands() {
    let table = load_str(SAMPLE_COOKBOOK);
    let groups = search(&table, "E0", &mut seeded_rng(7)).expect("match");
    let e01 = groups.iter().find(|g| g.key == "E01 CAM FAIL").unwrap();
    let e02 = groups.iter().find(|g| g.key == "E02 MIC OPEN").unwrap();
    assert!((60..=80).contains(&e01.score), "pair scored {}", e01.score);
    assert!((90..=100).contains(&e02.score), "singleton scored {}", e02.score);
}

// ---------------------------------------------------------------------------
// Not-found
// ---------------------------------------------------------------------------

/// Zero matches is an explicit error, not an empty list.
#[test]
fn zero_matches_is_explicit_not_found() {
    let table = load_str(SAMPLE_COOKBOOK);
    let err = search(&table, "E99", &mut seeded_rng(1)).unwrap_err();
    assert_eq!(err, SearchError::NoMatch { query: "E99".to_string() });
}

// ---------------------------------------------------------------------------
// Property tests
// ---------------------------------------------------------------------------

proptest! {
    /// normalize_query is idempotent for arbitrary input.
    #[test]
    fn prop_normalize_idempotent(raw in "\\PC{0,40}") {
        let once = normalize_query(&raw);
        prop_assert_eq!(normalize_query(&once), once);
    }

    /// normalize_query never leaves two adjacent whitespace characters.
    #[test]
    fn prop_normalize_collapses_runs(raw in ".{0,40}") {
        let normalized = normalize_query(&raw);
        let chars: Vec<char> = normalized.chars().collect();
        prop_assert!(!chars
            .windows(2)
            .any(|w| w[0].is_whitespace() && w[1].is_whitespace()));
    }

    /// Search results are always drawn from the table: every detail in every
    /// group corresponds to a record whose normalized code equals the key.
    #[test]
    fn prop_results_drawn_from_table(
        codes in proptest::collection::vec("[A-E][0-9]{2}", 1..20),
        query in "[A-E0-9]{0,3}",
        seed in any::<u64>(),
    ) {
        let refs: Vec<&str> = codes.iter().map(String::as_str).collect();
        let table = table_of(&refs);
        if let Ok(groups) = search(&table, &query, &mut seeded_rng(seed)) {
            let mut seen = 0usize;
            for group in &groups {
                prop_assert!(group.key.contains(&query));
                seen += group.details.len();
            }
            let expected = codes.iter().filter(|c| c.contains(&query)).count();
            prop_assert_eq!(seen, expected);
        } else {
            prop_assert!(codes.iter().all(|c| !c.contains(&query)));
        }
    }

    /// Score bands hold for arbitrary corpora and seeds.
    #[test]
    fn prop_score_bands(
        n in 1usize..40,
        distinct in 1usize..10,
        seed in any::<u64>(),
    ) {
        let table = build_corpus(n, distinct);
        let groups = search(&table, "E", &mut seeded_rng(seed)).expect("corpus always matches");
        for group in &groups {
            let range = if group.details.len() == 1 { 90..=100u8 } else { 60..=80u8 };
            prop_assert!(range.contains(&group.score));
        }
    }
}
