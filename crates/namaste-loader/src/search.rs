//! Lookup over the pooled catalogs.
//!
//! Matching is plain case-insensitive containment against code, display and
//! definition. There is no tokenization or ranking: results come back in pool
//! order (NAMASTE, WHO Ayurveda, ICD-11 TM2), then catalog order.

use namaste_types::{CatalogId, Concept, ConceptSummary};

use crate::store::TerminologyStore;

/// Result count used when the caller gives none, or an unusable one.
pub const DEFAULT_SEARCH_LIMIT: usize = 25;

/// Maximum number of results of the ICD-11 lookup.
pub const ICD11_LOOKUP_LIMIT: usize = 20;

/// Turns a raw limit parameter into a result count.
///
/// Missing, non-numeric, zero or negative input falls back to
/// [`DEFAULT_SEARCH_LIMIT`].
///
/// ```
/// use namaste_loader::search::{normalize_limit, DEFAULT_SEARCH_LIMIT};
///
/// assert_eq!(normalize_limit(Some("3")), 3);
/// assert_eq!(normalize_limit(Some("-1")), DEFAULT_SEARCH_LIMIT);
/// assert_eq!(normalize_limit(Some("ten")), DEFAULT_SEARCH_LIMIT);
/// assert_eq!(normalize_limit(None), DEFAULT_SEARCH_LIMIT);
/// ```
pub fn normalize_limit(raw: Option<&str>) -> usize {
    raw.and_then(|v| v.trim().parse::<i64>().ok())
        .filter(|&n| n > 0)
        .map(|n| usize::try_from(n).unwrap_or(usize::MAX))
        .unwrap_or(DEFAULT_SEARCH_LIMIT)
}

impl TerminologyStore {
    /// Searches every catalog for concepts containing `query`.
    ///
    /// An empty query matches every concept. A `limit` of zero means
    /// [`DEFAULT_SEARCH_LIMIT`].
    pub fn search(&self, query: &str, limit: usize) -> Vec<ConceptSummary> {
        let limit = if limit == 0 { DEFAULT_SEARCH_LIMIT } else { limit };
        let needle = query.to_lowercase();

        let results: Vec<ConceptSummary> = self
            .pooled_concepts()
            .filter(|c| c.matches_lowercase(&needle))
            .take(limit)
            .map(Concept::summary)
            .collect();

        tracing::debug!(query, limit, results = results.len(), "search");
        results
    }

    /// Looks up ICD-11 concepts whose code or display contains `query`.
    ///
    /// Definitions are not searched. At most [`ICD11_LOOKUP_LIMIT`] full
    /// concepts are returned.
    pub fn icd11_lookup(&self, query: &str) -> Vec<&Concept> {
        let needle = query.to_lowercase();
        self.catalog(CatalogId::Icd11Tm2)
            .concepts()
            .iter()
            .filter(|c| {
                c.code.to_lowercase().contains(&needle)
                    || c.display.to_lowercase().contains(&needle)
            })
            .take(ICD11_LOOKUP_LIMIT)
            .collect()
    }
}
