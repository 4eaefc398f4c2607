//! Catalog identifiers.
//!
//! The set of catalogs is fixed: NAMASTE, WHO Ayurveda and ICD-11 TM2.
//! Callers rarely name a catalog by its canonical identifier, so resolution
//! goes through a small alias table matched by case-insensitive containment.

use std::fmt;
use std::str::FromStr;

/// Identifies one of the three coding systems held by the service.
///
/// # Examples
///
/// ```
/// use namaste_types::CatalogId;
///
/// assert_eq!(CatalogId::resolve("namaste-herbs"), Some(CatalogId::Namaste));
/// assert_eq!(CatalogId::resolve("who-ayurveda"), Some(CatalogId::WhoAyurveda));
/// assert_eq!(CatalogId::resolve("icd11_tm2"), Some(CatalogId::Icd11Tm2));
/// assert_eq!(CatalogId::resolve("loinc"), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CatalogId {
    /// National AYUSH morbidity codes (NAMASTE).
    #[cfg_attr(feature = "serde", serde(rename = "NAMASTE"))]
    Namaste,
    /// WHO standard terminologies for Ayurveda.
    #[cfg_attr(feature = "serde", serde(rename = "WHO-AYURVEDA"))]
    WhoAyurveda,
    /// ICD-11 Traditional Medicine Chapter 2 (and biomedicine codes).
    #[cfg_attr(feature = "serde", serde(rename = "ICD11-TM2"))]
    Icd11Tm2,
}

/// Alias table, evaluated in order against the uppercased identifier.
///
/// The first alias contained in the identifier wins.
const ALIASES: &[(&str, CatalogId)] = &[
    ("NAMASTE", CatalogId::Namaste),
    ("WHO", CatalogId::WhoAyurveda),
    ("AYURVEDA", CatalogId::WhoAyurveda),
    ("ICD11", CatalogId::Icd11Tm2),
    ("ICD-11", CatalogId::Icd11Tm2),
    ("TM2", CatalogId::Icd11Tm2),
];

impl CatalogId {
    /// All catalogs, in pooled search order.
    pub const ALL: [CatalogId; 3] = [Self::Namaste, Self::WhoAyurveda, Self::Icd11Tm2];

    /// Canonical identifier of the NAMASTE catalog.
    pub const NAMASTE_ID: &'static str = "NAMASTE";
    /// Canonical identifier of the WHO Ayurveda catalog.
    pub const WHO_AYURVEDA_ID: &'static str = "WHO-AYURVEDA";
    /// Canonical identifier of the ICD-11 TM2 catalog.
    pub const ICD11_TM2_ID: &'static str = "ICD11-TM2";

    /// Resolves a loosely written identifier to a catalog.
    ///
    /// Matching is case-insensitive and succeeds when the identifier contains
    /// any known alias. Returns `None` for unknown or empty identifiers.
    pub fn resolve(identifier: &str) -> Option<Self> {
        let upper = identifier.trim().to_uppercase();
        if upper.is_empty() {
            return None;
        }
        ALIASES
            .iter()
            .find(|(alias, _)| upper.contains(alias))
            .map(|&(_, id)| id)
    }

    /// Returns the canonical identifier string.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Namaste => Self::NAMASTE_ID,
            Self::WhoAyurveda => Self::WHO_AYURVEDA_ID,
            Self::Icd11Tm2 => Self::ICD11_TM2_ID,
        }
    }
}

impl fmt::Display for CatalogId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when an identifier matches no known catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCatalog {
    /// The identifier that failed to resolve.
    pub identifier: String,
}

impl fmt::Display for UnknownCatalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown catalog identifier: '{}'", self.identifier)
    }
}

impl std::error::Error for UnknownCatalog {}

impl FromStr for CatalogId {
    type Err = UnknownCatalog;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::resolve(s).ok_or_else(|| UnknownCatalog {
            identifier: s.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_identifiers_resolve_to_themselves() {
        for id in CatalogId::ALL {
            assert_eq!(CatalogId::resolve(id.as_str()), Some(id));
        }
    }

    #[test]
    fn test_resolve_is_case_insensitive() {
        assert_eq!(CatalogId::resolve("namaste"), Some(CatalogId::Namaste));
        assert_eq!(CatalogId::resolve("Who"), Some(CatalogId::WhoAyurveda));
        assert_eq!(CatalogId::resolve("tm2"), Some(CatalogId::Icd11Tm2));
    }

    #[test]
    fn test_resolve_aliases() {
        assert_eq!(CatalogId::resolve("NAMASTE-HERB"), Some(CatalogId::Namaste));
        assert_eq!(CatalogId::resolve("ayurveda"), Some(CatalogId::WhoAyurveda));
        assert_eq!(CatalogId::resolve("icd-11"), Some(CatalogId::Icd11Tm2));
        assert_eq!(CatalogId::resolve("ICD11"), Some(CatalogId::Icd11Tm2));
    }

    #[test]
    fn test_resolve_unknown() {
        assert_eq!(CatalogId::resolve(""), None);
        assert_eq!(CatalogId::resolve("   "), None);
        assert_eq!(CatalogId::resolve("SNOMED"), None);
    }

    #[test]
    fn test_from_str() {
        assert_eq!("who-ayurveda".parse::<CatalogId>(), Ok(CatalogId::WhoAyurveda));

        let err = "LOINC".parse::<CatalogId>().unwrap_err();
        assert_eq!(err.identifier, "LOINC");
        assert_eq!(err.to_string(), "unknown catalog identifier: 'LOINC'");
    }

    #[test]
    fn test_pool_order() {
        assert_eq!(
            CatalogId::ALL,
            [CatalogId::Namaste, CatalogId::WhoAyurveda, CatalogId::Icd11Tm2]
        );
    }
}
