//! Test builders — ergonomic constructors for `Record` and `Table` fixtures.
//!
//! These builders are designed for readability in test assertions, not for
//! production use. They panic on invalid input rather than returning `Result`.

use fab_core::{Record, Table};
use rand::rngs::StdRng;
use rand::SeedableRng;

// ---------------------------------------------------------------------------
// RecordBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for [`Record`] test fixtures.
///
/// # Example
///
/// ```rust
/// let record = RecordBuilder::new("E01 CAM FAIL")
///     .model("X-200")
///     .station("FATP-3")
///     .rca("1.lens misaligned 2.flex damaged")
///     .build();
/// ```
pub struct RecordBuilder {
    error_code: Option<String>,
    model: String,
    station: String,
    risk_station: String,
    fa_by_trc: String,
    rca: String,
    counter_action: String,
}

impl RecordBuilder {
    pub fn new(error_code: impl Into<String>) -> Self {
        Self {
            error_code: Some(error_code.into()),
            model: "model-x".to_string(),
            station: "station-1".to_string(),
            risk_station: "risk".to_string(),
            fa_by_trc: "trc".to_string(),
            rca: "cause".to_string(),
            counter_action: "fix".to_string(),
        }
    }

    /// A record with no error code at all (excluded from every match).
    pub fn anonymous() -> Self {
        let mut builder = Self::new("");
        builder.error_code = None;
        builder
    }

    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn station(mut self, station: impl Into<String>) -> Self {
        self.station = station.into();
        self
    }

    pub fn risk_station(mut self, risk_station: impl Into<String>) -> Self {
        self.risk_station = risk_station.into();
        self
    }

    pub fn fa_by_trc(mut self, fa_by_trc: impl Into<String>) -> Self {
        self.fa_by_trc = fa_by_trc.into();
        self
    }

    pub fn rca(mut self, rca: impl Into<String>) -> Self {
        self.rca = rca.into();
        self
    }

    pub fn counter_action(mut self, counter_action: impl Into<String>) -> Self {
        self.counter_action = counter_action.into();
        self
    }

    pub fn build(self) -> Record {
        Record {
            error_code: self.error_code,
            model: self.model,
            station: self.station,
            risk_station: self.risk_station,
            fa_by_trc: self.fa_by_trc,
            rca: self.rca,
            counter_action: self.counter_action,
        }
    }
}

// ---------------------------------------------------------------------------
// Convenience constructors
// ---------------------------------------------------------------------------

/// Build a table from plain error codes, all other fields defaulted.
pub fn table_of(codes: &[&str]) -> Table {
    Table::new(codes.iter().map(|c| RecordBuilder::new(*c).build()).collect())
}

/// Deterministic RNG for score assertions.
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Build a corpus of `n` records spread over `distinct` error codes.
pub fn build_corpus(n: usize, distinct: usize) -> Table {
    Table::new(
        (0..n)
            .map(|i| {
                RecordBuilder::new(format!("E{:03}", i % distinct))
                    .model(format!("model-{}", i % 5))
                    .build()
            })
            .collect(),
    )
}
