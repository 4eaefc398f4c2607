//! Double-coding annotation of clinical record bundles.
//!
//! Every `Condition` coding whose code has a cross-map row gets a mapping
//! extension. The caller's bundle is never touched: annotation works on a
//! copy and returns it.

use namaste_types::{well_known, CrossMapEntry};
use serde::Serialize;
use serde_json::{json, Map, Value};

use crate::store::TerminologyStore;
use crate::types::{EngineError, EngineResult};

/// Number of processed entry identifiers reported back.
pub const PREVIEW_LIMIT: usize = 5;

/// Message of a successful annotation.
pub const ANNOTATION_MESSAGE: &str = "Bundle processed";

/// Result of [`TerminologyStore::annotate`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BundleAnnotation {
    /// Human-readable outcome.
    pub message: &'static str,
    /// Number of diagnosis entries that carried at least one coding.
    pub processed_count: usize,
    /// Identifiers of the first processed entries. An entry without an id is
    /// reported as the whole annotated resource.
    pub processed_preview: Vec<Value>,
    /// The annotated copy of the bundle.
    pub bundle: Value,
}

fn is_resource_type(value: &Value, expected: &str) -> bool {
    value.get("resourceType").and_then(Value::as_str) == Some(expected)
}

/// Sets the mapping extension on one coding, replacing an earlier one.
fn annotate_coding(coding: &mut Map<String, Value>, entry: &CrossMapEntry) {
    let block = json!({
        "url": well_known::DOUBLE_CODING_EXTENSION_URL,
        "valueString": json!(entry.annotation()).to_string(),
    });

    match coding.get_mut("extension") {
        Some(Value::Array(extensions)) => {
            let existing = extensions.iter_mut().find(|ext| {
                ext.get("url").and_then(Value::as_str)
                    == Some(well_known::DOUBLE_CODING_EXTENSION_URL)
            });
            match existing {
                Some(ext) => *ext = block,
                None => extensions.push(block),
            }
        }
        _ => {
            coding.insert("extension".to_string(), Value::Array(vec![block]));
        }
    }
}

impl TerminologyStore {
    /// Annotates every mapped `Condition` coding of a bundle.
    ///
    /// Each coding is matched on its `code` against the cross-map sources; the
    /// first row found supplies the extension. Unmapped codings pass through
    /// unchanged. Entries that are not conditions, or conditions whose
    /// `code.coding` list holds no coding object, are left alone and not
    /// counted.
    ///
    /// # Errors
    /// [`EngineError::Validation`] if `record` is not a `Bundle`.
    pub fn annotate(&self, record: &Value) -> EngineResult<BundleAnnotation> {
        if !is_resource_type(record, well_known::BUNDLE) {
            return Err(EngineError::Validation(
                "Expected FHIR Bundle (resourceType: Bundle)".to_string(),
            ));
        }

        let mut bundle = record.clone();
        let mut processed = Vec::new();
        let mut annotated_codings = 0usize;

        let entries = bundle
            .get_mut("entry")
            .and_then(Value::as_array_mut)
            .map(|entries| entries.as_mut_slice())
            .unwrap_or_default();

        for entry in entries {
            let Some(resource) = entry.get_mut("resource") else {
                continue;
            };
            if !is_resource_type(resource, well_known::CONDITION) {
                continue;
            }
            let Some(codings) = resource
                .pointer_mut("/code/coding")
                .and_then(Value::as_array_mut)
            else {
                continue;
            };
            if !codings.iter().any(Value::is_object) {
                continue;
            }

            for coding in codings.iter_mut().filter_map(Value::as_object_mut) {
                let Some(code) = coding.get("code").and_then(Value::as_str) else {
                    continue;
                };
                if let Some(mapping) = self.cross_map().first_match(code) {
                    annotate_coding(coding, mapping);
                    annotated_codings += 1;
                }
            }

            processed.push(match resource.get("id") {
                Some(id) => id.clone(),
                None => resource.clone(),
            });
        }

        tracing::debug!(
            processed = processed.len(),
            annotated_codings,
            "annotate"
        );

        Ok(BundleAnnotation {
            message: ANNOTATION_MESSAGE,
            processed_count: processed.len(),
            processed_preview: processed.into_iter().take(PREVIEW_LIMIT).collect(),
            bundle,
        })
    }
}
