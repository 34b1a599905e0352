use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::Serialize;

use crate::trend::{self, DEFAULT_QUERY_AGE};

// ---------------------------------------------------------------------------
// Result records
// ---------------------------------------------------------------------------

/// One row of the summary report.
///
/// The column set is fixed by the struct definition, so every row written
/// through [`write_report`] carries the same schema and the CSV header is
/// derived from the field names.
#[derive(Debug, Clone, Serialize)]
pub struct ResultRecord {
    #[serde(rename = "Filename")]
    pub filename: String,
    #[serde(rename = "Mass (kg)")]
    pub mass_kg: String,
}

// ---------------------------------------------------------------------------
// Batch runner
// ---------------------------------------------------------------------------

/// Run the trend estimator over every file in `data_dir` at the default
/// query age, in lexicographic filename order.
///
/// Every entry is treated as a sample table; the first unreadable or
/// unparsable one aborts the whole batch. An empty directory is an error,
/// since a report with no rows estimates nothing.
pub fn run_batch(data_dir: &Path) -> Result<Vec<ResultRecord>> {
    let entries = fs::read_dir(data_dir)
        .with_context(|| format!("reading input directory {}", data_dir.display()))?;

    let mut names = Vec::new();
    for entry in entries {
        let entry =
            entry.with_context(|| format!("listing {}", data_dir.display()))?;
        names.push(entry.file_name().to_string_lossy().into_owned());
    }
    names.sort();

    if names.is_empty() {
        bail!("input directory {} contains no files", data_dir.display());
    }

    let mut records = Vec::with_capacity(names.len());
    for name in names {
        let path = data_dir.join(&name);
        let mass_kg = trend::mass_at_age(&path, DEFAULT_QUERY_AGE)
            .with_context(|| format!("estimating mass for {name}"))?;
        log::debug!("{name}: {mass_kg} kg at {DEFAULT_QUERY_AGE} months");
        records.push(ResultRecord {
            filename: name,
            mass_kg,
        });
    }
    Ok(records)
}

/// Write the report as CSV at `path`; the header row comes from the record
/// fields.
pub fn write_report(records: &[ResultRecord], path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("creating report {}", path.display()))?;
    for record in records {
        writer
            .serialize(record)
            .with_context(|| format!("writing report row for {}", record.filename))?;
    }
    writer.flush().context("flushing report")?;
    Ok(())
}
