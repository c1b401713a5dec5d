//! Core types for fab-core.
//!
//! This module defines the fundamental data structures shared across the
//! pipeline: the [`Record`] loaded from the dataset, the immutable
//! [`Table`] of records, and the derived [`MatchGroup`] / [`Tier`] values
//! produced by the search matcher.

/// One failure-analysis record, as loaded from a dataset row.
///
/// Every field is free text and may be empty. `error_code` is `None` when
/// the source cell was empty; such records are excluded from every match
/// result. Identity is positional (row order in the table) — there is no
/// declared primary key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// The failure identifier searched against. `None` when missing.
    pub error_code: Option<String>,
    pub model: String,
    pub station: String,
    /// Stations at risk of producing this failure.
    pub risk_station: String,
    /// Failure analysis performed by the test-related-cause team.
    pub fa_by_trc: String,
    /// Root cause analysis.
    pub rca: String,
    /// Corrective action taken.
    pub counter_action: String,
}

/// An ordered, immutable sequence of [`Record`]s sharing one schema.
///
/// Loaded once at process start by [`dataset::load`](crate::dataset::load)
/// and passed by reference into the search matcher — never mutated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    records: Vec<Record>,
}

impl Table {
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Red/yellow/green classification of a group's success-rate score.
///
/// The score bands drawn by the matcher (60–80 and 90–100) never reach
/// `Red`; the mapping keeps it anyway so the classification stays total
/// over 0–100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tier {
    Red,
    Yellow,
    Green,
}

impl Tier {
    /// Classify a 0–100 score: ≤50 red, 51–80 yellow, >80 green.
    pub fn from_score(score: u8) -> Self {
        if score <= 50 {
            Tier::Red
        } else if score <= 80 {
            Tier::Yellow
        } else {
            Tier::Green
        }
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Tier::Red => write!(f, "red"),
            Tier::Yellow => write!(f, "yellow"),
            Tier::Green => write!(f, "green"),
        }
    }
}

/// Per-record detail carried by a [`MatchGroup`].
///
/// Unlike `risk_station` / `fa_by_trc`, which come from the group's first
/// record only, one of these exists for every matching record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordDetail {
    pub model: String,
    pub station: String,
    /// Root cause analysis, with numbered markers broken onto their own lines.
    pub rca: String,
    /// Counter action, formatted the same way.
    pub counter_action: String,
}

/// The set of matched records sharing one normalized error code, plus the
/// derived score, tier, and display text.
///
/// `risk_station` and `fa_by_trc` are taken from the representative (first)
/// record of the group; `details` iterates all matching records. The score
/// is regenerated on every search — it is advisory, not a cached statistic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchGroup {
    /// Normalized error code shared by every record in the group.
    pub key: String,
    /// Success-rate score in 0–100.
    pub score: u8,
    pub tier: Tier,
    /// Formatted risk-station block from the representative record.
    pub risk_station: String,
    /// Formatted FA-by-TRC block from the representative record.
    pub fa_by_trc: String,
    /// One entry per matching record, in table order.
    pub details: Vec<RecordDetail>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_boundaries() {
        assert_eq!(Tier::from_score(0), Tier::Red);
        assert_eq!(Tier::from_score(50), Tier::Red);
        assert_eq!(Tier::from_score(51), Tier::Yellow);
        assert_eq!(Tier::from_score(80), Tier::Yellow);
        assert_eq!(Tier::from_score(81), Tier::Green);
        assert_eq!(Tier::from_score(100), Tier::Green);
    }

    #[test]
    fn tier_display() {
        assert_eq!(Tier::Red.to_string(), "red");
        assert_eq!(Tier::Yellow.to_string(), "yellow");
        assert_eq!(Tier::Green.to_string(), "green");
    }
}
