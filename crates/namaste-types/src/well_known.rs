//! Well-known identifiers used across the workspace.
//!
//! # Examples
//!
//! ```
//! use namaste_types::well_known;
//!
//! assert_eq!(well_known::BUNDLE, "Bundle");
//! assert!(well_known::DOUBLE_CODING_EXTENSION_URL.ends_with("double-coding-mapping"));
//! ```

// =============================================================================
// Resource types
// =============================================================================

/// Resource type of a catalog rendered as a resource.
pub const CODE_SYSTEM: &str = "CodeSystem";

/// Resource type of a translation result.
pub const PARAMETERS: &str = "Parameters";

/// Resource type marker of a clinical record container.
pub const BUNDLE: &str = "Bundle";

/// Resource type of a diagnosis entry inside a bundle.
pub const CONDITION: &str = "Condition";

// =============================================================================
// Catalog resource metadata
// =============================================================================

/// Publication status of every loaded catalog.
pub const CODE_SYSTEM_STATUS: &str = "active";

/// Content mode of every loaded catalog (all concepts are present).
pub const CODE_SYSTEM_CONTENT: &str = "complete";

// =============================================================================
// Annotation
// =============================================================================

/// Extension URL of the mapping metadata block added to annotated codings.
pub const DOUBLE_CODING_EXTENSION_URL: &str =
    "http://example.org/fhir/StructureDefinition/double-coding-mapping";

// =============================================================================
// Equivalence qualifiers
// =============================================================================

/// The target means the same as the source.
pub const EQUIVALENT: &str = "equivalent";

/// The target is broader in meaning than the source.
pub const WIDER: &str = "wider";

/// The target is narrower in meaning than the source.
pub const NARROWER: &str = "narrower";

/// The target overlaps the source without a clear containment relation.
pub const INEXACT: &str = "inexact";
