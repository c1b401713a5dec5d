//! fab-core — failure-analysis cookbook core library.
//!
//! This crate exposes the two pipeline stages as public modules, plus the
//! shared types and configuration used by the TUI.
//!
//! # Architecture
//!
//! ```text
//! DatasetLoader ──► Table ──► SearchMatcher ──► UI
//! ```
//!
//! The table is loaded once at process start and is immutable afterwards.
//! Each submitted query runs the full search pipeline synchronously; no
//! state crosses query invocations except the table itself.

pub mod config;
pub mod dataset;
pub mod format;
pub mod search;
pub mod types;

pub use types::{MatchGroup, Record, RecordDetail, Table, Tier};
