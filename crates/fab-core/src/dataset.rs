//! Dataset loader — reads a CSV cookbook into an immutable [`Table`].
//!
//! The first row is the header; the seven expected columns are located by
//! name so column order in the file does not matter. A missing expected
//! column is rejected here, at load time, rather than surfacing later as a
//! lookup failure during formatting.

use crate::types::{Record, Table};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Expected column headers, as they appear in the source cookbook.
const COLUMNS: [&str; 7] = [
    "Error Code",
    "Model",
    "Station",
    "Risk station",
    "FA by TRC",
    "RCA",
    "Counter Action",
];

/// Failure to produce a [`Table`] from a dataset source.
///
/// Carries the path and the underlying cause. The caller must not proceed
/// to search without a table; the binary reports this and exits.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to open dataset {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse dataset {path}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("dataset {path} is missing column {column:?}")]
    MissingColumn { path: PathBuf, column: String },
}

/// Read `path` into a [`Table`], preserving row order.
///
/// Cells are kept as text verbatim. An empty `Error Code` cell becomes
/// `None` so the record is excluded from matching without being an error.
pub fn load(path: &Path) -> Result<Table, LoadError> {
    let file = std::fs::File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(file);

    let headers = reader
        .headers()
        .map_err(|source| LoadError::Csv {
            path: path.to_path_buf(),
            source,
        })?
        .clone();

    // Map each expected column name to its index in this file.
    let mut indices = [0usize; COLUMNS.len()];
    for (slot, column) in COLUMNS.iter().enumerate() {
        indices[slot] = headers
            .iter()
            .position(|h| h.trim() == *column)
            .ok_or_else(|| LoadError::MissingColumn {
                path: path.to_path_buf(),
                column: column.to_string(),
            })?;
    }
    let [code_ix, model_ix, station_ix, risk_ix, trc_ix, rca_ix, action_ix] = indices;

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row.map_err(|source| LoadError::Csv {
            path: path.to_path_buf(),
            source,
        })?;

        let cell = |ix: usize| row.get(ix).unwrap_or_default().to_string();

        let code = cell(code_ix);
        records.push(Record {
            error_code: if code.is_empty() { None } else { Some(code) },
            model: cell(model_ix),
            station: cell(station_ix),
            risk_station: cell(risk_ix),
            fa_by_trc: cell(trc_ix),
            rca: cell(rca_ix),
            counter_action: cell(action_ix),
        });
    }

    debug!(path = %path.display(), rows = records.len(), "dataset loaded");
    Ok(Table::new(records))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_dataset(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("create temp dataset");
        file.write_all(contents.as_bytes()).expect("write dataset");
        file
    }

    #[test]
    fn loads_rows_in_order() {
        let file = write_dataset(
            "Error Code,Model,Station,Risk station,FA by TRC,RCA,Counter Action\n\
             E01,M1,FATP,ST1,trc a,cause a,fix a\n\
             E02,M2,FATP,ST2,trc b,cause b,fix b\n",
        );
        let table = load(file.path()).expect("load");
        assert_eq!(table.len(), 2);
        assert_eq!(table.records()[0].error_code.as_deref(), Some("E01"));
        assert_eq!(table.records()[1].rca, "cause b");
    }

    #[test]
    fn column_order_does_not_matter() {
        let file = write_dataset(
            "RCA,Error Code,Counter Action,Model,Station,Risk station,FA by TRC\n\
             cause,E09,fix,M,S,R,T\n",
        );
        let table = load(file.path()).expect("load");
        let record = &table.records()[0];
        assert_eq!(record.error_code.as_deref(), Some("E09"));
        assert_eq!(record.rca, "cause");
        assert_eq!(record.counter_action, "fix");
    }

    #[test]
    fn empty_error_code_becomes_none() {
        let file = write_dataset(
            "Error Code,Model,Station,Risk station,FA by TRC,RCA,Counter Action\n\
             ,M1,S1,R1,T1,C1,A1\n",
        );
        let table = load(file.path()).expect("load");
        assert_eq!(table.records()[0].error_code, None);
    }

    #[test]
    fn missing_column_is_rejected() {
        let file = write_dataset("Error Code,Model,Station\nE01,M1,S1\n");
        let err = load(file.path()).expect_err("must fail");
        assert!(matches!(err, LoadError::MissingColumn { ref column, .. }
            if column == "Risk station"));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load(Path::new("/nonexistent/cookbook.csv")).expect_err("must fail");
        assert!(matches!(err, LoadError::Io { .. }));
    }
}
