//! Search matcher — the normalize → filter → group → score → format pipeline.
//!
//! Given the loaded [`Table`] and a raw query string, produces the ordered
//! [`MatchGroup`]s for display. The whole pipeline runs synchronously; the
//! only non-determinism is the injected [`Rng`], which draws each group's
//! advisory success-rate score.
//!
//! # Normalization asymmetry
//!
//! The query has every whitespace run (including newlines) collapsed to a
//! single space, while record error codes only have newlines replaced by
//! spaces. The asymmetry is inherited from the original cookbook tool and
//! kept deliberately — "fixing" either side changes which records match.

use crate::format::break_numbered_markers;
use crate::types::{MatchGroup, Record, RecordDetail, Table, Tier};
use once_cell::sync::Lazy;
use rand::Rng;
use regex::Regex;
use thiserror::Error;
use tracing::debug;

static WHITESPACE_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("whitespace pattern must compile"));

/// Search failed to produce any group.
///
/// Zero matches is a user-visible "not found" state, distinct from an empty
/// success list, so the UI can render it explicitly.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SearchError {
    #[error("no records match error code {query:?}")]
    NoMatch { query: String },
}

/// Collapse every whitespace run in the trimmed query to a single space.
///
/// Idempotent: normalizing an already-normalized query is a no-op.
pub fn normalize_query(raw: &str) -> String {
    WHITESPACE_RUN.replace_all(raw.trim(), " ").into_owned()
}

/// Normalize a record's error code: newlines become spaces, all other
/// whitespace is left untouched.
pub fn normalize_code(code: &str) -> String {
    code.replace('\n', " ")
}

/// Run the full search pipeline against `table`.
///
/// The query is matched as a literal, case-sensitive substring of each
/// record's normalized error code (an empty query therefore matches every
/// record). Matches are grouped by exact normalized code in first-occurrence
/// order; each group draws a fresh score from `rng` — [90,100] for a single
/// record, [60,80] for more than one.
pub fn search(
    table: &Table,
    raw_query: &str,
    rng: &mut impl Rng,
) -> Result<Vec<MatchGroup>, SearchError> {
    let normalized = normalize_query(raw_query);
    // Escaped so pattern metacharacters in the query match literally.
    let pattern = Regex::new(&regex::escape(&normalized))
        .expect("escaped query must be a valid pattern");

    // Filter, carrying each record's normalized code alongside it.
    let matched: Vec<(String, &Record)> = table
        .records()
        .iter()
        .filter_map(|record| {
            let code = record.error_code.as_deref()?;
            let code = normalize_code(code);
            pattern.is_match(&code).then_some((code, record))
        })
        .collect();

    debug!(
        query = %normalized,
        matched = matched.len(),
        total = table.len(),
        "search filtered"
    );

    if matched.is_empty() {
        return Err(SearchError::NoMatch { query: normalized });
    }

    // Partition by exact normalized code, first-occurrence order.
    let mut groups: Vec<(String, Vec<&Record>)> = Vec::new();
    for (code, record) in matched {
        match groups.iter_mut().find(|(key, _)| *key == code) {
            Some((_, members)) => members.push(record),
            None => groups.push((code, vec![record])),
        }
    }

    let result = groups
        .into_iter()
        .map(|(key, members)| build_group(key, &members, rng))
        .collect();

    Ok(result)
}

fn build_group(key: String, members: &[&Record], rng: &mut impl Rng) -> MatchGroup {
    let score: u8 = if members.len() == 1 {
        rng.gen_range(90..=100)
    } else {
        rng.gen_range(60..=80)
    };

    // Risk station and FA-by-TRC come from the representative (first)
    // record only; details iterate every member.
    let representative = members[0];

    MatchGroup {
        tier: Tier::from_score(score),
        score,
        risk_station: break_numbered_markers(&representative.risk_station),
        fa_by_trc: break_numbered_markers(&representative.fa_by_trc),
        details: members
            .iter()
            .map(|record| RecordDetail {
                model: record.model.clone(),
                station: record.station.clone(),
                rca: break_numbered_markers(&record.rca),
                counter_action: break_numbered_markers(&record.counter_action),
            })
            .collect(),
        key,
    }
}
