//! Generic data file parsers.
//!
//! Provides a streaming parser for tab-delimited exports and a JSON array
//! reader. [`read_records`] picks one by file extension.

use std::fs::File;
use std::io::{BufReader, Read};
use std::marker::PhantomData;
use std::path::Path;

use csv::{Reader, ReaderBuilder, StringRecord};
use serde::de::DeserializeOwned;

use crate::types::{DataFormat, LoadError, LoadResult};

/// Trait for types that can be parsed from tab-delimited records.
pub trait TableRecord: Sized {
    /// Expected leading column names for this record type.
    const EXPECTED_COLUMNS: &'static [&'static str];

    /// Parse a record from a CSV StringRecord.
    fn from_record(record: &StringRecord) -> LoadResult<Self>;
}

/// A streaming parser for tab-delimited data files.
pub struct TableParser<R: Read, T: TableRecord> {
    reader: Reader<R>,
    _marker: PhantomData<T>,
}

impl<T: TableRecord> TableParser<BufReader<File>, T> {
    /// Creates a new parser from a file path.
    ///
    /// # Errors
    /// Returns an error if the file cannot be opened or has invalid headers.
    pub fn from_path<P: AsRef<Path>>(path: P) -> LoadResult<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(LoadError::FileNotFound {
                path: path.display().to_string(),
            });
        }

        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }
}

impl<R: Read, T: TableRecord> TableParser<R, T> {
    /// Creates a new parser from a reader.
    pub fn from_reader(reader: R) -> LoadResult<Self> {
        let mut csv_reader = ReaderBuilder::new()
            .delimiter(b'\t')
            .has_headers(true)
            .flexible(true)
            .quoting(false)
            .trim(csv::Trim::None)
            .from_reader(reader);

        Self::validate_headers(&mut csv_reader)?;

        Ok(Self {
            reader: csv_reader,
            _marker: PhantomData,
        })
    }

    /// Validates that the file starts with the expected column headers.
    fn validate_headers(reader: &mut Reader<R>) -> LoadResult<()> {
        let headers = reader.headers()?;
        let expected = T::EXPECTED_COLUMNS;

        if headers.len() < expected.len() {
            return Err(LoadError::InvalidHeader {
                expected: expected.len(),
                found: headers.len(),
            });
        }

        for (i, expected_col) in expected.iter().enumerate() {
            let found = headers.get(i).unwrap_or("");
            // Spreadsheet exports often carry a UTF-8 BOM
            let found = found.trim_start_matches('\u{feff}').trim();
            if found != *expected_col {
                return Err(LoadError::UnexpectedColumn {
                    position: i,
                    expected: expected_col.to_string(),
                    found: found.to_string(),
                });
            }
        }

        Ok(())
    }

    /// Parses all records into a Vec, stopping at the first error.
    pub fn parse_all(self) -> LoadResult<Vec<T>> {
        self.collect()
    }
}

impl<R: Read, T: TableRecord> Iterator for TableParser<R, T> {
    type Item = LoadResult<T>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let mut record = StringRecord::new();
            match self.reader.read_record(&mut record) {
                Ok(true) => {
                    if record.is_empty() || record.iter().all(|f| f.trim().is_empty()) {
                        continue;
                    }

                    return Some(T::from_record(&record));
                }
                Ok(false) => return None,
                Err(e) => return Some(Err(e.into())),
            }
        }
    }
}

/// Reads a JSON array of records from a reader.
pub fn parse_json_array<R: Read, T: DeserializeOwned>(reader: R) -> LoadResult<Vec<T>> {
    Ok(serde_json::from_reader(reader)?)
}

/// Reads every record of a data file, choosing the parser by extension.
pub fn read_records<T, P>(path: P) -> LoadResult<Vec<T>>
where
    T: TableRecord + DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    match DataFormat::from_path(path)? {
        DataFormat::Tsv => TableParser::<_, T>::from_path(path)?.parse_all(),
        DataFormat::Json => {
            if !path.exists() {
                return Err(LoadError::FileNotFound {
                    path: path.display().to_string(),
                });
            }
            let file = File::open(path)?;
            parse_json_array(BufReader::new(file))
        }
    }
}

/// Helper functions for reading field values.
pub mod field {
    use super::{LoadError, LoadResult, StringRecord};

    /// Returns a trimmed field that must not be empty.
    pub fn required(record: &StringRecord, index: usize, name: &'static str) -> LoadResult<String> {
        let value = record.get(index).unwrap_or("").trim();
        if value.is_empty() {
            return Err(LoadError::MissingField { field: name });
        }
        Ok(value.to_string())
    }

    /// Returns a trimmed field, or `None` when absent or empty.
    pub fn optional(record: &StringRecord, index: usize) -> Option<String> {
        record
            .get(index)
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(str::to_string)
    }

    /// Returns a trimmed field, or an empty string when absent.
    pub fn text(record: &StringRecord, index: usize) -> String {
        record.get(index).unwrap_or("").trim().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq, serde::Deserialize)]
    struct Pair {
        left: String,
        right: Option<String>,
    }

    impl TableRecord for Pair {
        const EXPECTED_COLUMNS: &'static [&'static str] = &["left", "right"];

        fn from_record(record: &StringRecord) -> LoadResult<Self> {
            Ok(Pair {
                left: field::required(record, 0, "left")?,
                right: field::optional(record, 1),
            })
        }
    }

    #[test]
    fn test_parse_rows_and_skip_blank_lines() {
        let data = "left\tright\na\tb\n\t\nc\t\n";
        let parser = TableParser::<_, Pair>::from_reader(data.as_bytes()).unwrap();
        let rows = parser.parse_all().unwrap();
        assert_eq!(
            rows,
            vec![
                Pair { left: "a".into(), right: Some("b".into()) },
                Pair { left: "c".into(), right: None },
            ]
        );
    }

    #[test]
    fn test_header_with_bom() {
        let data = "\u{feff}left\tright\nx\ty\n";
        let parser = TableParser::<_, Pair>::from_reader(data.as_bytes()).unwrap();
        assert_eq!(parser.parse_all().unwrap().len(), 1);
    }

    #[test]
    fn test_header_too_short() {
        let data = "left\nx\n";
        let err = TableParser::<_, Pair>::from_reader(data.as_bytes()).err().unwrap();
        assert!(matches!(err, LoadError::InvalidHeader { expected: 2, found: 1 }));
    }

    #[test]
    fn test_unexpected_column() {
        let data = "left\twrong\nx\ty\n";
        let err = TableParser::<_, Pair>::from_reader(data.as_bytes()).err().unwrap();
        match err {
            LoadError::UnexpectedColumn { position, expected, found } => {
                assert_eq!(position, 1);
                assert_eq!(expected, "right");
                assert_eq!(found, "wrong");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_missing_required_field() {
        let data = "left\tright\n\ty\n";
        let err = TableParser::<_, Pair>::from_reader(data.as_bytes())
            .unwrap()
            .parse_all()
            .unwrap_err();
        assert!(matches!(err, LoadError::MissingField { field: "left" }));
    }

    #[test]
    fn test_parse_json_array() {
        let data = r#"[{"left": "a", "right": null}, {"left": "b", "right": "c"}]"#;
        let rows: Vec<Pair> = parse_json_array(data.as_bytes()).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].right.as_deref(), Some("c"));
    }

    #[test]
    fn test_read_records_missing_file() {
        let err = read_records::<Pair, _>("does/not/exist.json").unwrap_err();
        assert!(matches!(err, LoadError::FileNotFound { .. }));
    }
}
