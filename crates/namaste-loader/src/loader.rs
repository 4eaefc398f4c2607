//! Data directory discovery.

use std::fs;
use std::path::Path;

use namaste_types::CatalogId;

use crate::types::{DataFiles, DataFormat, LoadError, LoadResult};

/// Stem prefix identifying the cross-map file.
const CONCEPT_MAP_PREFIX: &str = "conceptmap";

/// Discovers the catalog and cross-map files in a data directory.
///
/// A file whose stem starts with `conceptmap` is the cross-map table; every
/// other JSON or tab-delimited file is matched to a catalog through the
/// catalog alias table (`namaste.json`, `who_ayurveda.json`,
/// `icd11_tm2.tsv`, ...). Files that match nothing are ignored. If two files
/// claim the same role, the alphabetically first one wins.
pub fn discover_data_files<P: AsRef<Path>>(path: P) -> LoadResult<DataFiles> {
    let path = path.as_ref();

    if !path.is_dir() {
        return Err(LoadError::DirectoryNotFound {
            path: path.display().to_string(),
        });
    }

    let mut entries: Vec<_> = fs::read_dir(path)?
        .collect::<Result<Vec<_>, _>>()?
        .into_iter()
        .map(|entry| entry.path())
        .filter(|p| p.is_file() && DataFormat::from_path(p).is_ok())
        .collect();
    entries.sort();

    let mut files = DataFiles::new();

    for file in entries {
        let Some(stem) = file.file_stem().and_then(|s| s.to_str()) else {
            continue;
        };

        if stem.to_ascii_lowercase().starts_with(CONCEPT_MAP_PREFIX) {
            if files.concept_map_file.is_none() {
                files.concept_map_file = Some(file);
            }
        } else if let Some(id) = CatalogId::resolve(stem) {
            if files.catalog_file(id).is_none() {
                files.set_catalog_file(id, file);
            }
        }
    }

    if !files.has_required_files() {
        let missing = files.missing_files();
        return Err(LoadError::RequiredFileMissing {
            file_type: missing.join(", "),
            directory: path.display().to_string(),
        });
    }

    Ok(files)
}
