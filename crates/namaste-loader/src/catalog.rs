//! Concept catalogs.
//!
//! A catalog is the ordered, immutable list of concepts of one coding system,
//! with a code index for exact lookups.

use std::collections::HashMap;
use std::path::Path;

use namaste_types::{well_known, CatalogId, Concept};
use serde::Serialize;

use crate::parser::read_records;
use crate::types::{LoadConfig, LoadError, LoadResult, LoadStats};

/// An ordered collection of concepts belonging to one coding system.
#[derive(Debug, Clone)]
pub struct Catalog {
    id: CatalogId,
    /// Concepts in load order.
    concepts: Vec<Concept>,
    /// Code -> position in `concepts`.
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Creates an empty catalog.
    pub fn new(id: CatalogId) -> Self {
        Self {
            id,
            concepts: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Builds a catalog from concepts, enforcing the catalog invariants.
    ///
    /// Concepts without a system are stamped with the catalog identifier.
    /// Empty displays and duplicate codes fail the load unless
    /// `config.skip_invalid` is set, in which case they are skipped (the first
    /// occurrence of a code wins).
    pub fn from_concepts(
        id: CatalogId,
        concepts: Vec<Concept>,
        config: &LoadConfig,
    ) -> LoadResult<(Self, LoadStats)> {
        let mut catalog = Self {
            id,
            concepts: Vec::with_capacity(concepts.len()),
            index: HashMap::with_capacity(concepts.len()),
        };
        let mut stats = LoadStats {
            total_records: concepts.len(),
            ..Default::default()
        };

        for mut concept in concepts {
            let error = if concept.display.trim().is_empty() {
                Some(LoadError::EmptyDisplay {
                    catalog: id,
                    code: concept.code.clone(),
                })
            } else if catalog.index.contains_key(&concept.code) {
                Some(LoadError::DuplicateCode {
                    catalog: id,
                    code: concept.code.clone(),
                })
            } else {
                None
            };

            if let Some(error) = error {
                if !config.skip_invalid {
                    return Err(error);
                }
                tracing::warn!("Skipping concept: {}", error);
                stats.skipped_records += 1;
                continue;
            }

            if concept.system.is_empty() {
                concept.system = id.as_str().to_string();
            }
            catalog.index.insert(concept.code.clone(), catalog.concepts.len());
            catalog.concepts.push(concept);
            stats.loaded_records += 1;
        }

        Ok((catalog, stats))
    }

    /// Loads a catalog from a JSON or tab-delimited file.
    pub fn load<P: AsRef<Path>>(
        id: CatalogId,
        path: P,
        config: &LoadConfig,
    ) -> LoadResult<(Self, LoadStats)> {
        let concepts = read_records::<Concept, _>(path)?;
        Self::from_concepts(id, concepts, config)
    }

    /// Returns the catalog identifier.
    pub fn id(&self) -> CatalogId {
        self.id
    }

    /// Returns the concept with exactly this code.
    pub fn get_concept(&self, code: &str) -> Option<&Concept> {
        self.index.get(code).map(|&i| &self.concepts[i])
    }

    /// Returns the concepts in load order.
    pub fn concepts(&self) -> &[Concept] {
        &self.concepts
    }

    /// Returns the number of concepts.
    pub fn len(&self) -> usize {
        self.concepts.len()
    }

    /// Returns true if the catalog holds no concepts.
    pub fn is_empty(&self) -> bool {
        self.concepts.is_empty()
    }

    /// Renders the catalog as a CodeSystem resource.
    pub fn to_resource(&self) -> CodeSystemResource<'_> {
        CodeSystemResource {
            resource_type: well_known::CODE_SYSTEM,
            id: self.id.as_str(),
            status: well_known::CODE_SYSTEM_STATUS,
            content: well_known::CODE_SYSTEM_CONTENT,
            concept: &self.concepts,
        }
    }
}

/// A catalog rendered as a `CodeSystem` resource.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeSystemResource<'a> {
    /// Always `CodeSystem`.
    pub resource_type: &'static str,
    /// Canonical catalog identifier.
    pub id: &'static str,
    /// Publication status.
    pub status: &'static str,
    /// Content mode.
    pub content: &'static str,
    /// Every concept of the catalog.
    pub concept: &'a [Concept],
}
