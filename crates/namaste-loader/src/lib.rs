//! # namaste-loader
//!
//! Loader, in-memory store and mediation engine for the NAMASTE, WHO Ayurveda
//! and ICD-11 TM2 terminologies.
//!
//! Static data is read once from a data directory (JSON arrays or
//! tab-delimited files) into a [`TerminologyStore`], which is then shared
//! read-only. The engine operations are methods on the store:
//!
//! - [`TerminologyStore::get_catalog`] and [`TerminologyStore::get_concept`]
//! - [`TerminologyStore::search`] and [`TerminologyStore::icd11_lookup`]
//! - [`TerminologyStore::translate`]
//! - [`TerminologyStore::annotate`]
//!
//! ## Features
//!
//! - `parallel` (default): parse the data files concurrently with rayon.
//!
//! ## Usage
//!
//! ```ignore
//! use namaste_loader::{discover_data_files, LoadConfig, TerminologyStore, TranslateRequest};
//!
//! let files = discover_data_files("data")?;
//! let mut store = TerminologyStore::new();
//! store.load_all(&files, &LoadConfig::default())?;
//!
//! let matches = store.translate(&TranslateRequest::new("NAM-001", "NAMASTE", "ICD11-TM2"))?;
//! ```

#![warn(missing_docs)]

mod annotate;
mod catalog;
mod concept;
mod cross_map;
mod loader;
mod parser;
pub mod search;
mod store;
mod translate;
mod types;

pub use annotate::{BundleAnnotation, ANNOTATION_MESSAGE, PREVIEW_LIMIT};
pub use catalog::{Catalog, CodeSystemResource};
pub use cross_map::CrossMapTable;
pub use loader::discover_data_files;
pub use parser::{parse_json_array, read_records, TableParser, TableRecord};
pub use search::{normalize_limit, DEFAULT_SEARCH_LIMIT, ICD11_LOOKUP_LIMIT};
pub use store::{LoadSummary, TerminologyStore};
pub use translate::{to_parameters, TranslateRequest, TranslatedConcept, TranslationMatch};
pub use types::{
    DataFiles, DataFormat, EngineError, EngineResult, LoadConfig, LoadError, LoadResult,
    LoadStats,
};

// Re-export namaste-types for convenience
pub use namaste_types;
