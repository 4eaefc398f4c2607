//! Cross-map types.
//!
//! A cross-map entry is one directed correspondence from a source code in one
//! catalog to a target code in another. A source may map to several targets;
//! every row is kept.

/// A directed source→target correspondence with an equivalence qualifier.
///
/// The equivalence is an opaque string (`equivalent`, `wider`, `narrower`,
/// `inexact`, ...) and is passed through verbatim.
///
/// # Examples
///
/// ```
/// use namaste_types::CrossMapEntry;
///
/// let entry = CrossMapEntry::new("NAM-001", "SK25", "Fever disorder (TM2)", "equivalent");
/// let annotation = entry.annotation();
///
/// assert_eq!(annotation.mapped_to, "SK25");
/// assert_eq!(annotation.equivalence, "equivalent");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct CrossMapEntry {
    /// Code in the origin catalog.
    pub source: String,
    /// Code in the destination catalog.
    pub target: String,
    /// Label of the target, so callers need no second catalog lookup.
    #[cfg_attr(feature = "serde", serde(default))]
    pub target_display: String,
    /// Strength or nature of the correspondence.
    pub equivalence: String,
}

impl CrossMapEntry {
    /// Creates a new entry.
    pub fn new(
        source: impl Into<String>,
        target: impl Into<String>,
        target_display: impl Into<String>,
        equivalence: impl Into<String>,
    ) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            target_display: target_display.into(),
            equivalence: equivalence.into(),
        }
    }

    /// Returns the metadata block attached to an annotated coding.
    pub fn annotation(&self) -> MappingAnnotation {
        MappingAnnotation {
            mapped_to: self.target.clone(),
            equivalence: self.equivalence.clone(),
        }
    }
}

/// Mapping metadata appended to a coding by the record annotator.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct MappingAnnotation {
    /// Target code of the mapping.
    pub mapped_to: String,
    /// Equivalence qualifier of the mapping.
    pub equivalence: String,
}
