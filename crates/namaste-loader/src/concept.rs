//! Concept file parser.
//!
//! Parses tab-delimited catalog exports with `code, display, definition, system` columns.

use csv::StringRecord;
use namaste_types::Concept;

use crate::parser::{field, TableRecord};
use crate::types::LoadResult;

/// Expected columns in a concept file.
const CONCEPT_COLUMNS: &[&str] = &["code", "display", "definition", "system"];

impl TableRecord for Concept {
    const EXPECTED_COLUMNS: &'static [&'static str] = CONCEPT_COLUMNS;

    fn from_record(record: &StringRecord) -> LoadResult<Self> {
        Ok(Concept {
            code: field::required(record, 0, "code")?,
            display: field::text(record, 1),
            definition: field::optional(record, 2),
            system: field::text(record, 3),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::TableParser;

    #[test]
    fn test_parse_concept_record() {
        let record = StringRecord::from(vec![
            "NAM-001",
            "Jwara",
            "Fever arising from dosha imbalance",
            "NAMASTE",
        ]);

        let concept = Concept::from_record(&record).unwrap();
        assert_eq!(concept.code, "NAM-001");
        assert_eq!(concept.display, "Jwara");
        assert_eq!(
            concept.definition.as_deref(),
            Some("Fever arising from dosha imbalance")
        );
        assert_eq!(concept.system, "NAMASTE");
    }

    #[test]
    fn test_empty_optional_cells() {
        let record = StringRecord::from(vec!["SK25", "Fever disorder (TM2)", "", ""]);

        let concept = Concept::from_record(&record).unwrap();
        assert_eq!(concept.definition, None);
        assert_eq!(concept.system, "");
    }

    #[test]
    fn test_parse_concept_file() {
        let data = "code\tdisplay\tdefinition\tsystem\n\
                    NAM-001\tJwara\tFever\tNAMASTE\n\
                    NAM-002\tKasa\t\tNAMASTE\n";

        let concepts = TableParser::<_, Concept>::from_reader(data.as_bytes())
            .unwrap()
            .parse_all()
            .unwrap();
        assert_eq!(concepts.len(), 2);
        assert_eq!(concepts[1].display, "Kasa");
        assert_eq!(concepts[1].definition, None);
    }
}
