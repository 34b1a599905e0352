use std::path::{Path, PathBuf};

use thiserror::Error;

use super::model::SampleTable;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Failure modes when parsing a sample-table file. Any of these aborts the
/// whole batch; there is no partial-success mode.
#[derive(Debug, Error)]
pub enum TableError {
    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("{}:{line}: expected `<age>,<mass>`, found {found} column(s)", path.display())]
    ColumnCount {
        path: PathBuf,
        line: usize,
        found: usize,
    },
    #[error("{}:{line}: '{value}' is not a number", path.display())]
    NotANumber {
        path: PathBuf,
        line: usize,
        value: String,
    },
    #[error("{}: a trend fit needs at least 2 data rows, found {rows}", path.display())]
    TooFewRows { path: PathBuf, rows: usize },
}

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

/// Parse a sample-table file into its age and mass columns.
///
/// The first line is a header and is skipped unconditionally; every
/// remaining line must hold exactly two numeric, comma-separated fields.
pub fn load_table(path: &Path) -> Result<SampleTable, TableError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(|source| TableError::Read {
            path: path.to_path_buf(),
            source,
        })?;

    let mut ages = Vec::new();
    let mut masses = Vec::new();

    for (i, result) in reader.records().enumerate() {
        // 1-based file line, after the header.
        let line = i + 2;
        let record = result.map_err(|source| TableError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        if record.len() != 2 {
            return Err(TableError::ColumnCount {
                path: path.to_path_buf(),
                line,
                found: record.len(),
            });
        }

        ages.push(parse_field(&record[0], path, line)?);
        masses.push(parse_field(&record[1], path, line)?);
    }

    if ages.len() < 2 {
        return Err(TableError::TooFewRows {
            path: path.to_path_buf(),
            rows: ages.len(),
        });
    }

    Ok(SampleTable { ages, masses })
}

fn parse_field(raw: &str, path: &Path, line: usize) -> Result<f64, TableError> {
    raw.parse::<f64>().map_err(|_| TableError::NotANumber {
        path: path.to_path_buf(),
        line,
        value: raw.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::generator::{self, SAMPLE_ROWS};
    use tempfile::tempdir;

    fn write(dir: &Path, name: &str, contents: &str) -> PathBuf {
        let path = dir.join(name);
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn parses_two_column_table() {
        let dir = tempdir().unwrap();
        let path = write(
            dir.path(),
            "t.csv",
            "# Age (months),Mass (lb)\n0,264.00\n2.5,364.50\n5,464.25\n",
        );
        let table = load_table(&path).unwrap();
        assert_eq!(table.ages, vec![0.0, 2.5, 5.0]);
        assert_eq!(table.masses, vec![264.0, 364.5, 464.25]);
    }

    #[test]
    fn round_trips_generated_table() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("gen.csv");
        generator::write_sample_table(&path, 42).unwrap();

        let mut rng = generator::SampleRng::new(42);
        let expected = generator::generate_table(&mut rng);

        let loaded = load_table(&path).unwrap();
        assert_eq!(loaded.len(), SAMPLE_ROWS);
        assert_eq!(loaded.ages, expected.ages);
        for (got, want) in loaded.masses.iter().zip(&expected.masses) {
            assert!((got - want).abs() < 1e-9, "mass {got} != {want}");
        }
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempdir().unwrap();
        let err = load_table(&dir.path().join("nope.csv")).unwrap_err();
        assert!(matches!(err, TableError::Read { .. }));
    }

    #[test]
    fn rejects_single_data_row() {
        let dir = tempdir().unwrap();
        let path = write(dir.path(), "one.csv", "# header\n0,264.00\n");
        let err = load_table(&path).unwrap_err();
        assert!(matches!(err, TableError::TooFewRows { rows: 1, .. }));
    }

    #[test]
    fn rejects_non_numeric_value() {
        let dir = tempdir().unwrap();
        let path = write(dir.path(), "bad.csv", "# header\n0,264.00\n2.5,heavy\n");
        let err = load_table(&path).unwrap_err();
        match err {
            TableError::NotANumber { line, value, .. } => {
                assert_eq!(line, 3);
                assert_eq!(value, "heavy");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn rejects_wrong_column_count() {
        let dir = tempdir().unwrap();
        let path = write(dir.path(), "wide.csv", "# header\n0,264.00\n2.5,364.00,9\n");
        let err = load_table(&path).unwrap_err();
        assert!(matches!(
            err,
            TableError::ColumnCount { line: 3, found: 3, .. }
        ));
    }
}
