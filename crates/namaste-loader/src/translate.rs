//! Code-to-code translation through the cross-map table.
//!
//! `from` and `to` are taken as opaque labels: the source code is not checked
//! against the `from` catalog, and targets are relabelled with the caller's
//! `to` value rather than looked up.

use namaste_types::well_known;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::store::TerminologyStore;
use crate::types::{EngineError, EngineResult};

/// Input of a translation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct TranslateRequest {
    /// Source code.
    #[serde(default)]
    pub code: Option<String>,
    /// Source system label.
    #[serde(default)]
    pub from: Option<String>,
    /// Target system label, copied onto every match.
    #[serde(default)]
    pub to: Option<String>,
}

impl TranslateRequest {
    /// Creates a request with all three fields set.
    pub fn new(code: impl Into<String>, from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            code: Some(code.into()),
            from: Some(from.into()),
            to: Some(to.into()),
        }
    }
}

/// Target concept of a translation match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TranslatedConcept {
    /// Target code.
    pub code: String,
    /// Target label, taken from the cross-map row.
    pub display: String,
    /// The caller-supplied `to` label.
    pub system: String,
}

/// One match of a translation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TranslationMatch {
    /// Equivalence qualifier, verbatim.
    pub equivalence: String,
    /// Mapped concept.
    pub concept: TranslatedConcept,
}

fn required<'a>(value: &'a Option<String>, name: &str) -> EngineResult<&'a str> {
    match value.as_deref() {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(EngineError::Validation(format!(
            "Missing '{name}' in translate request (code, from and to are required)"
        ))),
    }
}

impl TerminologyStore {
    /// Translates a code through the cross-map table.
    ///
    /// Returns one match per cross-map row whose source equals the code, in
    /// table order. An unmapped code yields an empty list.
    ///
    /// # Errors
    /// [`EngineError::Validation`] if `code`, `from` or `to` is missing or
    /// empty; checked before any lookup. Values are used verbatim, so a
    /// padded code matches nothing.
    pub fn translate(&self, request: &TranslateRequest) -> EngineResult<Vec<TranslationMatch>> {
        let code = required(&request.code, "code")?;
        let from = required(&request.from, "from")?;
        let to = required(&request.to, "to")?;

        let matches: Vec<TranslationMatch> = self
            .cross_map()
            .matches(code)
            .map(|entry| TranslationMatch {
                equivalence: entry.equivalence.clone(),
                concept: TranslatedConcept {
                    code: entry.target.clone(),
                    display: entry.target_display.clone(),
                    system: to.to_string(),
                },
            })
            .collect();

        tracing::debug!(code, from, to, matches = matches.len(), "translate");
        Ok(matches)
    }
}

/// Renders translation matches as a `Parameters` resource.
///
/// Each match becomes a `match` parameter with an `equivalence` part and a
/// `concept` part carrying a coding.
pub fn to_parameters(matches: &[TranslationMatch]) -> Value {
    let parameter: Vec<Value> = matches
        .iter()
        .map(|m| {
            json!({
                "name": "match",
                "part": [
                    { "name": "equivalence", "valueString": m.equivalence },
                    {
                        "name": "concept",
                        "valueCoding": {
                            "system": m.concept.system,
                            "code": m.concept.code,
                            "display": m.concept.display
                        }
                    }
                ]
            })
        })
        .collect();

    json!({
        "resourceType": well_known::PARAMETERS,
        "parameter": parameter
    })
}
