//! CSV Table Loader Module
//! Reads headered CSV files into Polars DataFrames.

use polars::prelude::*;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("input file not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("malformed input in {}: {}", .path.display(), .source)]
    Malformed {
        path: PathBuf,
        #[source]
        source: PolarsError,
    },
}

/// Handles CSV file loading with Polars.
pub struct TableLoader;

impl TableLoader {
    /// Read a CSV file into a DataFrame.
    ///
    /// The first row is the header; column types are inferred, numeric
    /// where possible and text otherwise. A header with no data rows
    /// loads as an empty frame. Ragged rows and fully empty files are
    /// [`LoaderError::Malformed`].
    pub fn load(path: impl AsRef<Path>) -> Result<DataFrame, LoaderError> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(LoaderError::NotFound(path.to_path_buf()));
        }

        LazyCsvReader::new(path.to_path_buf())
            .with_infer_schema_length(Some(10000))
            .finish()
            .and_then(|lazy| lazy.collect())
            .map_err(|source| LoaderError::Malformed {
                path: path.to_path_buf(),
                source,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;

    fn write_csv(dir: &tempfile::TempDir, name: &str, contents: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn loads_rows_with_header_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_csv(
            &dir,
            "features.csv",
            "Feature1,Feature2,Label\n1,2,A\n3,4,B\n5,6,A\n",
        );

        let df = TableLoader::load(&path).unwrap();
        assert_eq!(df.height(), 3);

        let columns: Vec<String> = df
            .get_column_names()
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(columns, ["Feature1", "Feature2", "Label"]);
    }

    #[test]
    fn infers_numeric_and_text_columns() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_csv(&dir, "features.csv", "Feature1,Label\n1.5,A\n2.5,B\n");

        let df = TableLoader::load(&path).unwrap();
        assert_eq!(df.column("Feature1").unwrap().dtype(), &DataType::Float64);
        assert_eq!(df.column("Label").unwrap().dtype(), &DataType::String);
    }

    #[test]
    fn header_only_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_csv(&dir, "features.csv", "Feature1,Feature2,Label\n");

        let df = TableLoader::load(&path).unwrap();
        assert_eq!(df.height(), 0);
        assert_eq!(df.width(), 3);
    }

    #[test]
    fn missing_file_is_not_found() {
        let err = TableLoader::load("no_such_file.csv").unwrap_err();
        assert!(matches!(err, LoaderError::NotFound(_)));
    }

    #[test]
    fn empty_file_is_malformed() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_csv(&dir, "empty.csv", "");

        let err = TableLoader::load(&path).unwrap_err();
        assert!(matches!(err, LoaderError::Malformed { .. }));
    }

    #[test]
    fn ragged_row_is_malformed() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_csv(
            &dir,
            "ragged.csv",
            "Feature1,Feature2,Label\n1,2,A\n3,4,B,stray\n",
        );

        let err = TableLoader::load(&path).unwrap_err();
        assert!(matches!(err, LoaderError::Malformed { .. }));
    }
}
