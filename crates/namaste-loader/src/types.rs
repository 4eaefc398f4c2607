//! Loader-specific types: errors, configuration, statistics and discovered files.

use std::path::{Path, PathBuf};

use namaste_types::CatalogId;
use thiserror::Error;

/// Errors that can occur while loading terminology data.
#[derive(Error, Debug)]
pub enum LoadError {
    /// I/O error reading a data file.
    #[error("IO error reading data file: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error.
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// Tab-delimited parsing error.
    #[error("TSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    /// File not found.
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Directory not found.
    #[error("Directory not found: {path}")]
    DirectoryNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Required file missing from the data directory.
    #[error("Required data file not found: {file_type} in {directory}")]
    RequiredFileMissing {
        /// The roles of the missing files.
        file_type: String,
        /// The directory that was searched.
        directory: String,
    },

    /// Invalid header - column count mismatch.
    #[error("Invalid header: expected {expected} columns, found {found}")]
    InvalidHeader {
        /// Expected column count.
        expected: usize,
        /// Found column count.
        found: usize,
    },

    /// Unexpected column name.
    #[error("Unexpected column '{found}' at position {position}, expected '{expected}'")]
    UnexpectedColumn {
        /// The column position.
        position: usize,
        /// Expected column name.
        expected: String,
        /// Found column name.
        found: String,
    },

    /// File extension is neither JSON nor tab-delimited.
    #[error("Unsupported data file format: {path}")]
    UnsupportedFormat {
        /// The offending path.
        path: String,
    },

    /// A required field is empty.
    #[error("Missing required field '{field}'")]
    MissingField {
        /// The name of the empty field.
        field: &'static str,
    },

    /// Concept with an empty display.
    #[error("Concept '{code}' in {catalog} has an empty display")]
    EmptyDisplay {
        /// Catalog being loaded.
        catalog: CatalogId,
        /// Offending code.
        code: String,
    },

    /// Concept code appears twice within one catalog.
    #[error("Duplicate code '{code}' in {catalog}")]
    DuplicateCode {
        /// Catalog being loaded.
        catalog: CatalogId,
        /// Duplicated code.
        code: String,
    },
}

/// Result type for loading operations.
pub type LoadResult<T> = Result<T, LoadError>;

/// Errors reported by engine operations on a loaded store.
///
/// Every error is local to one request; the store stays valid.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// The catalog identifier matched no known catalog.
    #[error("CodeSystem not found: {identifier}")]
    CatalogNotFound {
        /// The identifier as supplied by the caller.
        identifier: String,
    },

    /// The code does not exist in the resolved catalog.
    #[error("Concept not found: {code} in {catalog}")]
    ConceptNotFound {
        /// The resolved catalog.
        catalog: CatalogId,
        /// The code that was looked up.
        code: String,
    },

    /// Missing or malformed required input.
    #[error("{0}")]
    Validation(String),
}

impl EngineError {
    /// Returns true for the not-found family of errors.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::CatalogNotFound { .. } | Self::ConceptNotFound { .. }
        )
    }
}

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Configuration for loading data files.
#[derive(Debug, Clone, Default)]
pub struct LoadConfig {
    /// Skip (and count) invalid or duplicate records instead of failing.
    pub skip_invalid: bool,
}

/// Statistics from loading one data file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadStats {
    /// Total records read from the file.
    pub total_records: usize,
    /// Records kept in the store.
    pub loaded_records: usize,
    /// Records skipped (empty display, duplicate code).
    pub skipped_records: usize,
}

impl LoadStats {
    /// Returns the percentage of records that were kept.
    pub fn load_rate(&self) -> f64 {
        if self.total_records == 0 {
            0.0
        } else {
            (self.loaded_records as f64 / self.total_records as f64) * 100.0
        }
    }
}

/// On-disk format of a data file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataFormat {
    /// A JSON array of records.
    Json,
    /// Tab-delimited with a header row.
    Tsv,
}

impl DataFormat {
    /// Picks the format from the file extension.
    pub fn from_path(path: &Path) -> LoadResult<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("json") => Ok(Self::Json),
            Some("tsv") | Some("txt") => Ok(Self::Tsv),
            _ => Err(LoadError::UnsupportedFormat {
                path: path.display().to_string(),
            }),
        }
    }
}

/// Discovered data files in a data directory.
#[derive(Debug, Clone, Default)]
pub struct DataFiles {
    /// Path to the NAMASTE catalog file.
    pub namaste_file: Option<PathBuf>,
    /// Path to the WHO Ayurveda catalog file.
    pub who_ayurveda_file: Option<PathBuf>,
    /// Path to the ICD-11 TM2 catalog file.
    pub icd11_tm2_file: Option<PathBuf>,
    /// Path to the cross-map table file.
    pub concept_map_file: Option<PathBuf>,
}

impl DataFiles {
    /// Creates a new empty DataFiles.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the file holding the given catalog.
    pub fn catalog_file(&self, id: CatalogId) -> Option<&Path> {
        match id {
            CatalogId::Namaste => self.namaste_file.as_deref(),
            CatalogId::WhoAyurveda => self.who_ayurveda_file.as_deref(),
            CatalogId::Icd11Tm2 => self.icd11_tm2_file.as_deref(),
        }
    }

    /// Sets the file holding the given catalog.
    pub fn set_catalog_file(&mut self, id: CatalogId, path: PathBuf) {
        match id {
            CatalogId::Namaste => self.namaste_file = Some(path),
            CatalogId::WhoAyurveda => self.who_ayurveda_file = Some(path),
            CatalogId::Icd11Tm2 => self.icd11_tm2_file = Some(path),
        }
    }

    /// Returns true if every catalog file and the cross-map file are present.
    pub fn has_required_files(&self) -> bool {
        self.missing_files().is_empty()
    }

    /// Returns a list of missing required files.
    pub fn missing_files(&self) -> Vec<&'static str> {
        let mut missing: Vec<&'static str> = CatalogId::ALL
            .into_iter()
            .filter(|id| self.catalog_file(*id).is_none())
            .map(CatalogId::as_str)
            .collect();
        if self.concept_map_file.is_none() {
            missing.push("ConceptMap");
        }
        missing
    }
}
