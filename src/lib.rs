//! growthfit – batch growth-trend estimation over sample-table files.
//!
//! The pipeline is a single linear pass:
//!
//! ```text
//!   generator ──▶ data/*.csv ──▶ loader ──▶ trend fit ──▶ results.csv
//! ```
//!
//! The `growthfit` binary runs the batch over [`DATA_DIR`] and writes
//! [`REPORT_PATH`]; the `generate_sample` binary seeds [`DATA_DIR`] with
//! synthetic tables.

pub mod data;
pub mod report;
pub mod trend;

/// Directory the batch runner reads sample tables from.
pub const DATA_DIR: &str = "data";

/// Path the summary report is written to.
pub const REPORT_PATH: &str = "results.csv";
