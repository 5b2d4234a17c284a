//! CSV file loading into Polars DataFrames.

use std::path::Path;

use polars::prelude::*;

use crate::error::{IngestError, Result};

/// Reads a CSV file into a DataFrame.
///
/// The first row is the header; column types are inferred from the first
/// 100 rows. Empty cells become nulls.
pub fn read_csv(path: &Path) -> Result<DataFrame> {
    let metadata = std::fs::metadata(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;

    if metadata.len() == 0 {
        return Err(IngestError::EmptyCsv {
            path: path.to_path_buf(),
        });
    }

    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(100))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?
        .finish()
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    tracing::debug!(
        path = %path.display(),
        rows = df.height(),
        columns = df.width(),
        "Loaded CSV table"
    );

    Ok(df)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", content).unwrap();
        file
    }

    #[test]
    fn test_read_csv_basic() {
        let file = create_temp_csv("a,b\n1,x\n2,y\n");
        let df = read_csv(file.path()).unwrap();

        assert_eq!(df.height(), 2);
        assert_eq!(df.width(), 2);
    }

    #[test]
    fn test_read_csv_empty_cells_become_null() {
        let file = create_temp_csv("a,b\n1,x\n2,\n");
        let df = read_csv(file.path()).unwrap();

        let b = df.column("b").unwrap();
        assert!(matches!(b.get(1).unwrap(), AnyValue::Null));
    }

    #[test]
    fn test_read_csv_missing_file() {
        let result = read_csv(Path::new("/nonexistent/data.csv"));
        assert!(matches!(result, Err(IngestError::FileNotFound { .. })));
    }

    #[test]
    fn test_read_csv_empty_file() {
        let file = create_temp_csv("");
        let result = read_csv(file.path());
        assert!(matches!(result, Err(IngestError::EmptyCsv { .. })));
    }
}
