//! In-memory terminology store.
//!
//! Holds the three catalogs and the cross-map table. The store is filled once
//! at startup and then shared read-only; search, translation and annotation
//! are implemented on top of it in their own modules.
//!
//! ```ignore
//! let files = discover_data_files("data")?;
//! let mut store = TerminologyStore::new();
//! store.load_all(&files, &LoadConfig::default())?;
//!
//! let store = Arc::new(store); // read-only from here on
//! let concept = store.get_concept("namaste", "NAM-001")?;
//! ```

use std::path::Path;

use namaste_types::{CatalogId, Concept};

use crate::catalog::Catalog;
use crate::cross_map::CrossMapTable;
use crate::parser::read_records;
use crate::types::{
    DataFiles, EngineError, EngineResult, LoadConfig, LoadError, LoadResult, LoadStats,
};

/// In-memory store for the catalogs and the cross-map table.
#[derive(Debug, Clone)]
pub struct TerminologyStore {
    /// One catalog per [`CatalogId`], in pool order.
    catalogs: [Catalog; 3],
    cross_map: CrossMapTable,
}

impl Default for TerminologyStore {
    fn default() -> Self {
        Self {
            catalogs: CatalogId::ALL.map(Catalog::new),
            cross_map: CrossMapTable::new(),
        }
    }
}

/// Outcome of [`TerminologyStore::load_all`].
#[derive(Debug, Clone, Default)]
pub struct LoadSummary {
    /// Per-catalog statistics, in pool order.
    pub catalogs: Vec<(CatalogId, LoadStats)>,
    /// Number of cross-map entries loaded.
    pub cross_map_entries: usize,
}

fn slot(id: CatalogId) -> usize {
    match id {
        CatalogId::Namaste => 0,
        CatalogId::WhoAyurveda => 1,
        CatalogId::Icd11Tm2 => 2,
    }
}

impl TerminologyStore {
    /// Creates a new store with three empty catalogs.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads every catalog and the cross-map table.
    ///
    /// With the `parallel` feature the four files are parsed concurrently.
    pub fn load_all(&mut self, files: &DataFiles, config: &LoadConfig) -> LoadResult<LoadSummary> {
        let (catalogs, cross_map) = load_files(files, config)?;

        let mut summary = LoadSummary::default();
        for (catalog, stats) in catalogs {
            summary.catalogs.push((catalog.id(), stats));
            self.insert_catalog(catalog);
        }
        summary.cross_map_entries = cross_map.len();
        self.set_cross_map(cross_map);

        Ok(summary)
    }

    /// Replaces the catalog with the same identifier.
    pub fn insert_catalog(&mut self, catalog: Catalog) {
        let i = slot(catalog.id());
        self.catalogs[i] = catalog;
    }

    /// Replaces the cross-map table.
    pub fn set_cross_map(&mut self, table: CrossMapTable) {
        self.cross_map = table;
    }

    /// Returns the catalog with this identifier.
    pub fn catalog(&self, id: CatalogId) -> &Catalog {
        &self.catalogs[slot(id)]
    }

    /// Resolves a loosely written identifier and returns its catalog.
    pub fn get_catalog(&self, identifier: &str) -> EngineResult<&Catalog> {
        CatalogId::resolve(identifier)
            .map(|id| self.catalog(id))
            .ok_or_else(|| EngineError::CatalogNotFound {
                identifier: identifier.to_string(),
            })
    }

    /// Returns the concept with exactly `code` in the resolved catalog.
    ///
    /// Never falls back to another catalog.
    pub fn get_concept(&self, identifier: &str, code: &str) -> EngineResult<&Concept> {
        let catalog = self.get_catalog(identifier)?;
        catalog
            .get_concept(code)
            .ok_or_else(|| EngineError::ConceptNotFound {
                catalog: catalog.id(),
                code: code.to_string(),
            })
    }

    /// Iterates over all concepts, catalogs concatenated in pool order.
    pub fn pooled_concepts(&self) -> impl Iterator<Item = &Concept> {
        self.catalogs.iter().flat_map(|c| c.concepts().iter())
    }

    /// Returns the cross-map table.
    pub fn cross_map(&self) -> &CrossMapTable {
        &self.cross_map
    }

    /// Returns the total number of concepts across catalogs.
    pub fn concept_count(&self) -> usize {
        self.catalogs.iter().map(Catalog::len).sum()
    }

    /// Returns the number of cross-map entries.
    pub fn cross_map_count(&self) -> usize {
        self.cross_map.len()
    }
}

type LoadedFiles = (Vec<(Catalog, LoadStats)>, CrossMapTable);

fn required_file<'a>(file: Option<&'a Path>, role: &str) -> LoadResult<&'a Path> {
    file.ok_or_else(|| LoadError::RequiredFileMissing {
        file_type: role.to_string(),
        directory: "(not discovered)".to_string(),
    })
}

fn load_catalog(
    files: &DataFiles,
    id: CatalogId,
    config: &LoadConfig,
) -> LoadResult<(Catalog, LoadStats)> {
    let path = required_file(files.catalog_file(id), id.as_str())?;
    let loaded = Catalog::load(id, path, config)?;
    tracing::debug!("Loaded {} concepts from {}", loaded.1.loaded_records, path.display());
    Ok(loaded)
}

fn load_cross_map_table(files: &DataFiles) -> LoadResult<CrossMapTable> {
    let path = required_file(files.concept_map_file.as_deref(), "ConceptMap")?;
    Ok(CrossMapTable::from_entries(read_records(path)?))
}

#[cfg(feature = "parallel")]
fn load_files(files: &DataFiles, config: &LoadConfig) -> LoadResult<LoadedFiles> {
    let ((namaste, who), (icd, cross_map)) = rayon::join(
        || {
            rayon::join(
                || load_catalog(files, CatalogId::Namaste, config),
                || load_catalog(files, CatalogId::WhoAyurveda, config),
            )
        },
        || {
            rayon::join(
                || load_catalog(files, CatalogId::Icd11Tm2, config),
                || load_cross_map_table(files),
            )
        },
    );

    Ok((vec![namaste?, who?, icd?], cross_map?))
}

#[cfg(not(feature = "parallel"))]
fn load_files(files: &DataFiles, config: &LoadConfig) -> LoadResult<LoadedFiles> {
    let catalogs = CatalogId::ALL
        .into_iter()
        .map(|id| load_catalog(files, id, config))
        .collect::<LoadResult<Vec<_>>>()?;
    Ok((catalogs, load_cross_map_table(files)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::discover_data_files;
    use namaste_types::CrossMapEntry;

    fn sample_store() -> TerminologyStore {
        let files = discover_data_files(Path::new(env!("CARGO_MANIFEST_DIR")).join("../../data"))
            .unwrap();
        let mut store = TerminologyStore::new();
        store.load_all(&files, &LoadConfig::default()).unwrap();
        store
    }

    #[test]
    fn test_load_sample_data() {
        let store = sample_store();

        assert!(store.catalog(CatalogId::Namaste).len() > 0);
        assert!(store.catalog(CatalogId::WhoAyurveda).len() > 0);
        assert!(store.catalog(CatalogId::Icd11Tm2).len() > 0);
        assert!(store.cross_map_count() > 0);
        assert_eq!(
            store.concept_count(),
            CatalogId::ALL.iter().map(|&id| store.catalog(id).len()).sum::<usize>()
        );
    }

    #[test]
    fn test_load_summary_in_pool_order() {
        let files = discover_data_files(Path::new(env!("CARGO_MANIFEST_DIR")).join("../../data"))
            .unwrap();
        let mut store = TerminologyStore::new();
        let summary = store.load_all(&files, &LoadConfig::default()).unwrap();

        let ids: Vec<CatalogId> = summary.catalogs.iter().map(|(id, _)| *id).collect();
        assert_eq!(ids, CatalogId::ALL.to_vec());
        assert_eq!(summary.cross_map_entries, store.cross_map_count());
    }

    #[test]
    fn test_sample_cross_map_equivalences() {
        use namaste_types::well_known::{EQUIVALENT, INEXACT, NARROWER, WIDER};

        let store = sample_store();
        for entry in store.cross_map().matches("NAM-001").chain(store.cross_map().matches("NAM-010")) {
            assert!([EQUIVALENT, WIDER, INEXACT].contains(&entry.equivalence.as_str()));
        }
        assert_eq!(store.cross_map().first_match("NAM-020").unwrap().equivalence, NARROWER);
        assert_eq!(store.cross_map().first_match("NAM-010").unwrap().equivalence, INEXACT);
    }

    #[test]
    fn test_get_concept_round_trips_every_concept() {
        let store = sample_store();
        for id in CatalogId::ALL {
            for concept in store.catalog(id).concepts() {
                assert_eq!(store.get_concept(id.as_str(), &concept.code), Ok(concept));
            }
        }
    }

    #[test]
    fn test_get_catalog_by_alias() {
        let store = sample_store();
        assert_eq!(store.get_catalog("tm2").unwrap().id(), CatalogId::Icd11Tm2);
        assert_eq!(store.get_catalog("Ayurveda").unwrap().id(), CatalogId::WhoAyurveda);
        assert_eq!(
            store.get_catalog("loinc").unwrap_err(),
            EngineError::CatalogNotFound {
                identifier: "loinc".to_string()
            }
        );
    }

    #[test]
    fn test_get_concept_never_falls_back() {
        let mut store = TerminologyStore::new();
        let (catalog, _) = Catalog::from_concepts(
            CatalogId::Icd11Tm2,
            vec![Concept::new("SK25", "Fever disorder (TM2)", "")],
            &LoadConfig::default(),
        )
        .unwrap();
        store.insert_catalog(catalog);

        assert!(store.get_concept("ICD11", "SK25").is_ok());
        assert_eq!(
            store.get_concept("NAMASTE", "SK25").unwrap_err(),
            EngineError::ConceptNotFound {
                catalog: CatalogId::Namaste,
                code: "SK25".to_string()
            }
        );
        assert!(store.get_concept("SNOMED", "SK25").unwrap_err().is_not_found());
    }

    #[test]
    fn test_same_code_in_two_catalogs() {
        let mut store = TerminologyStore::new();
        for id in [CatalogId::Namaste, CatalogId::WhoAyurveda] {
            let (catalog, _) = Catalog::from_concepts(
                id,
                vec![Concept::new("A-1", format!("{} concept", id), "")],
                &LoadConfig::default(),
            )
            .unwrap();
            store.insert_catalog(catalog);
        }

        assert_eq!(store.get_concept("namaste", "A-1").unwrap().system, "NAMASTE");
        assert_eq!(store.get_concept("who", "A-1").unwrap().system, "WHO-AYURVEDA");
    }

    #[test]
    fn test_pooled_concepts_order() {
        let mut store = TerminologyStore::new();
        // Insert out of order; the pool order stays fixed
        for id in [CatalogId::Icd11Tm2, CatalogId::Namaste, CatalogId::WhoAyurveda] {
            let (catalog, _) = Catalog::from_concepts(
                id,
                vec![Concept::new(id.as_str(), "x", "")],
                &LoadConfig::default(),
            )
            .unwrap();
            store.insert_catalog(catalog);
        }

        let systems: Vec<&str> = store.pooled_concepts().map(|c| c.system.as_str()).collect();
        assert_eq!(systems, vec!["NAMASTE", "WHO-AYURVEDA", "ICD11-TM2"]);
    }

    #[test]
    fn test_set_cross_map() {
        let mut store = TerminologyStore::new();
        store.set_cross_map(CrossMapTable::from_entries(vec![CrossMapEntry::new(
            "NAM-001", "SK25", "Fever disorder (TM2)", "equivalent",
        )]));
        assert_eq!(store.cross_map_count(), 1);
        assert_eq!(store.cross_map().first_match("NAM-001").unwrap().target, "SK25");
    }
}
