//! # Seed Loading
//!
//! The catalog starts from a JSON document holding an array of titles:
//!
//! ```json
//! [
//!   { "id": 1, "name": "Zeta", "category": "drama", "image": "img/zeta.jpg", "featured": true },
//!   { "name": "Alpha", "category": "late-night" }
//! ]
//! ```
//!
//! Ids from the document are trusted as they are. Entries without one get an
//! id from the [`IdSource`], unique within the document. Some exporters
//! HTML-escape category names (`late&#45;night`, `sci&#x2D;fi`,
//! `late&nbsp;night`), so categories are unescaped before they are parsed.
//! Numeric references and every HTML5 named entity are understood; a
//! non-breaking space counts as a plain space.
//!
//! A document that fails to load leaves the caller with nothing to
//! `initialize`, so the catalog stays unloaded.

use crate::error::{Result, ShelfError};
use crate::ids::{unique_id_by, IdSource};
use crate::model::{Category, NewTitle, TitleRecord};
use crate::state::MAX_ITEMS;
use quick_xml::escape::{resolve_html5_entity, unescape_with};
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct RawTitle {
    #[serde(default)]
    id: Option<u32>,
    #[serde(default)]
    name: String,
    category: String,
    #[serde(default)]
    image: Option<String>,
    #[serde(default)]
    featured: Option<bool>,
}

pub fn load_file<I: IdSource + ?Sized>(path: &Path, ids: &mut I) -> Result<Vec<TitleRecord>> {
    let content = fs::read_to_string(path)?;
    let records = parse(&content, ids)?;
    tracing::info!(path = %path.display(), titles = records.len(), "seed loaded");
    Ok(records)
}

pub fn parse<I: IdSource + ?Sized>(json: &str, ids: &mut I) -> Result<Vec<TitleRecord>> {
    let raw: Vec<RawTitle> = serde_json::from_str(json)?;
    if raw.len() > MAX_ITEMS {
        return Err(ShelfError::Seed(format!(
            "{} titles found, at most {} are supported",
            raw.len(),
            MAX_ITEMS
        )));
    }

    let mut taken = HashSet::new();
    for id in raw.iter().filter_map(|entry| entry.id) {
        if !taken.insert(id) {
            return Err(ShelfError::Seed(format!("duplicate id {}", id)));
        }
    }

    let mut records = Vec::with_capacity(raw.len());
    for (position, entry) in raw.into_iter().enumerate() {
        let category = decode_category(&entry.category)
            .map_err(|e| ShelfError::Seed(format!("entry {}: {}", position, e)))?;
        let id = match entry.id {
            Some(id) => id,
            None => {
                let id = unique_id_by(ids, |candidate| taken.contains(&candidate));
                taken.insert(id);
                id
            }
        };
        let title = NewTitle::new(entry.name, category)
            .featured(entry.featured.unwrap_or(false))
            .with_image(entry.image.filter(|image| !image.is_empty()));
        records.push(TitleRecord::new(id, title));
    }

    Ok(records)
}

fn decode_category(raw: &str) -> std::result::Result<Category, String> {
    let unescaped = unescape_with(raw, resolve_html5_entity).map_err(|e| e.to_string())?;
    unescaped.replace('\u{a0}', " ").parse()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::fixtures::SequenceIds;
    use std::io::Write;

    #[test]
    fn parses_records_with_defaults() {
        let json = r#"[
            {"id": 1, "name": "Zeta", "category": "drama", "image": "img/z.png", "featured": true},
            {"id": 2, "name": "Alpha", "category": "news", "image": null}
        ]"#;
        let records = parse(json, &mut SequenceIds::counting()).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].image.as_deref(), Some("img/z.png"));
        assert!(records[0].featured);
        assert_eq!(records[1].image, None);
        assert!(!records[1].featured);
    }

    #[test]
    fn unescapes_categories() {
        let json = r#"[{"id": 4, "name": "Late", "category": "late&#45;night"}]"#;
        let records = parse(json, &mut SequenceIds::counting()).unwrap();
        assert_eq!(records[0].category, Category::LateNight);
    }

    #[test]
    fn unescapes_html_named_entities() {
        let json = r#"[
            {"id": 1, "name": "Late", "category": "late&nbsp;night"},
            {"id": 2, "name": "Laughs", "category": "&nbsp;comedy&nbsp;"},
            {"id": 3, "name": "Far", "category": "sci&#x2D;fi"}
        ]"#;
        let records = parse(json, &mut SequenceIds::counting()).unwrap();
        assert_eq!(records[0].category, Category::LateNight);
        assert_eq!(records[1].category, Category::Comedy);
        assert_eq!(records[2].category, Category::SciFi);
    }

    #[test]
    fn unknown_entity_names_the_entry() {
        let json = r#"[
            {"id": 1, "name": "Fine", "category": "drama"},
            {"id": 2, "name": "Odd", "category": "dr&bogus;ama"}
        ]"#;
        let err = parse(json, &mut SequenceIds::counting()).unwrap_err();
        match err {
            ShelfError::Seed(message) => assert!(message.starts_with("entry 1:")),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn accepts_legacy_category_names() {
        let json = r#"[{"id": 4, "name": "Orig", "category": "peacockoriginal"}]"#;
        let records = parse(json, &mut SequenceIds::counting()).unwrap();
        assert_eq!(records[0].category, Category::StudioOriginal);
    }

    #[test]
    fn missing_ids_are_generated_around_existing_ones() {
        let json = r#"[
            {"name": "First", "category": "drama"},
            {"id": 1, "name": "Second", "category": "drama"}
        ]"#;
        let records = parse(json, &mut SequenceIds::new([1, 1, 2])).unwrap();
        assert_eq!(records[0].id, 2);
        assert_eq!(records[1].id, 1);
    }

    #[test]
    fn empty_names_become_untitled() {
        let json = r#"[{"id": 1, "category": "other"}]"#;
        let records = parse(json, &mut SequenceIds::counting()).unwrap();
        assert_eq!(records[0].name, crate::model::UNTITLED);
    }

    #[test]
    fn rejects_duplicate_ids() {
        let json = r#"[
            {"id": 3, "name": "A", "category": "drama"},
            {"id": 3, "name": "B", "category": "news"}
        ]"#;
        let err = parse(json, &mut SequenceIds::counting()).unwrap_err();
        assert!(matches!(err, ShelfError::Seed(_)));
    }

    #[test]
    fn rejects_unknown_categories() {
        let json = r#"[{"id": 3, "name": "A", "category": "western"}]"#;
        let err = parse(json, &mut SequenceIds::counting()).unwrap_err();
        assert!(err.to_string().contains("entry 0"));
    }

    #[test]
    fn rejects_oversized_documents() {
        let entries: Vec<String> = (1..=MAX_ITEMS + 1)
            .map(|id| format!(r#"{{"id": {}, "name": "T", "category": "drama"}}"#, id))
            .collect();
        let json = format!("[{}]", entries.join(","));
        let err = parse(&json, &mut SequenceIds::counting()).unwrap_err();
        assert!(matches!(err, ShelfError::Seed(_)));
    }

    #[test]
    fn malformed_json_is_a_serialization_error() {
        let err = parse("{not json", &mut SequenceIds::counting()).unwrap_err();
        assert!(matches!(err, ShelfError::Serialization(_)));
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"[{{"id": 9, "name": "Nine", "category": "sports"}}]"#).unwrap();
        let records = load_file(file.path(), &mut SequenceIds::counting()).unwrap();
        assert_eq!(records[0].id, 9);

        let missing = load_file(Path::new("/nonexistent/seed.json"), &mut SequenceIds::counting());
        assert!(matches!(missing, Err(ShelfError::Io(_))));
    }
}
