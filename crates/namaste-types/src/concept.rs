//! Concept types.
//!
//! This module provides the `Concept` struct representing one entry of a
//! coding system, and `ConceptSummary`, the reduced form returned by search.

/// A single coding-system entry.
///
/// `code` is unique within its owning catalog only; the same literal code may
/// appear in another catalog and is told apart by `system`.
///
/// # Examples
///
/// ```
/// use namaste_types::Concept;
///
/// let concept = Concept::new("NAM-001", "Jwara", "NAMASTE")
///     .with_definition("Fever arising from dosha imbalance");
///
/// assert!(concept.matches("jwara"));
/// assert!(concept.matches("fever"));
/// assert!(!concept.matches("cough"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Concept {
    /// Code, unique within the owning catalog.
    pub code: String,
    /// Human-readable label.
    pub display: String,
    /// Optional descriptive text.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub definition: Option<String>,
    /// Identifier of the owning coding system.
    #[cfg_attr(feature = "serde", serde(default))]
    pub system: String,
}

impl Concept {
    /// Creates a concept without a definition.
    pub fn new(
        code: impl Into<String>,
        display: impl Into<String>,
        system: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            display: display.into(),
            definition: None,
            system: system.into(),
        }
    }

    /// Sets the definition.
    pub fn with_definition(mut self, definition: impl Into<String>) -> Self {
        self.definition = Some(definition.into());
        self
    }

    /// Returns true if `needle` is contained in the display, code or
    /// definition, ignoring case.
    ///
    /// An empty needle matches every concept.
    pub fn matches(&self, needle: &str) -> bool {
        let needle = needle.to_lowercase();
        self.matches_lowercase(&needle)
    }

    /// Like [`Concept::matches`], for a needle that is already lowercased.
    pub fn matches_lowercase(&self, needle: &str) -> bool {
        self.display.to_lowercase().contains(needle)
            || self.code.to_lowercase().contains(needle)
            || self
                .definition
                .as_deref()
                .is_some_and(|d| d.to_lowercase().contains(needle))
    }

    /// Returns the `{code, display, system}` triple used in search results.
    pub fn summary(&self) -> ConceptSummary {
        ConceptSummary {
            code: self.code.clone(),
            display: self.display.clone(),
            system: self.system.clone(),
        }
    }
}

/// Reduced view of a concept returned by pooled search.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConceptSummary {
    /// Concept code.
    pub code: String,
    /// Concept label.
    pub display: String,
    /// Owning coding system.
    pub system: String,
}
