//! # namaste-types
//!
//! Type definitions for the NAMASTE terminology mediation service.
//!
//! This crate provides the plain data types shared by the loader and the
//! service: the fixed set of catalogs, concepts, and the cross-map entries
//! that link NAMASTE codes to WHO Ayurveda and ICD-11 TM2 codes.
//!
//! ## Features
//!
//! - `serde` (default): Enables serialization/deserialization support via serde.
//!   Disable this feature for zero-dependency usage.
//!
//! ## Usage
//!
//! ```rust
//! use namaste_types::{CatalogId, Concept, CrossMapEntry};
//! use namaste_types::well_known;
//!
//! let catalog = CatalogId::resolve("namaste").unwrap();
//! let concept = Concept::new("NAM-001", "Jwara", catalog.as_str());
//! assert_eq!(concept.system, "NAMASTE");
//!
//! let entry = CrossMapEntry::new("NAM-001", "SK25", "Fever disorder (TM2)", well_known::EQUIVALENT);
//! assert_eq!(entry.annotation().mapped_to, "SK25");
//! ```

#![warn(missing_docs)]

mod catalog_id;
mod concept;
mod cross_map;
pub mod well_known;

// Re-export all public types at crate root
pub use catalog_id::{CatalogId, UnknownCatalog};
pub use concept::{Concept, ConceptSummary};
pub use cross_map::{CrossMapEntry, MappingAnnotation};
