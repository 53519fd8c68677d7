// Copyright 2025 Fernando Borretti
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::fs::read_to_string;
use std::path::Path;

use serde::Deserialize;
use walkdir::WalkDir;

use crate::error::Fallible;
use crate::error::QuizError;
use crate::error::fail;
use crate::types::verse::Verse;

/// The catalog file listing the selectable texts in a data directory.
pub const CATALOG_FILE: &str = "index.json";

#[derive(Clone, Debug, Deserialize)]
pub struct TextCatalogEntry {
    pub filename: String,
    pub name: String,
}

/// Load the text catalog of a data directory.
///
/// Reads `index.json` when present; otherwise every top-level `.json` file
/// becomes an entry named after its file stem.
pub fn load_catalog(directory: &Path) -> Fallible<Vec<TextCatalogEntry>> {
    let index_path = directory.join(CATALOG_FILE);
    if index_path.exists() {
        let content = read_to_string(&index_path)?;
        let entries: Vec<TextCatalogEntry> = serde_json::from_str(&content)
            .map_err(|e| data_format(&index_path, e.to_string()))?;
        for entry in &entries {
            if entry.filename.trim().is_empty() || entry.name.trim().is_empty() {
                return Err(data_format(
                    &index_path,
                    "catalog entries need a filename and a name".to_string(),
                ));
            }
        }
        return Ok(entries);
    }

    log::debug!("No {CATALOG_FILE} found, scanning {directory:?} for texts.");
    let mut entries = Vec::new();
    for entry in WalkDir::new(directory).max_depth(1) {
        let entry = entry?;
        let path = entry.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "json") {
            let filename = match path.file_name().and_then(|n| n.to_str()) {
                Some(name) => name.to_string(),
                None => continue,
            };
            let name = match path.file_stem().and_then(|n| n.to_str()) {
                Some(stem) => stem.to_string(),
                None => continue,
            };
            entries.push(TextCatalogEntry { filename, name });
        }
    }
    entries.sort_by(|a, b| a.filename.cmp(&b.filename));
    Ok(entries)
}

/// Load and validate the verses of a text file.
pub fn load_text(path: &Path) -> Fallible<Vec<Verse>> {
    let content = read_to_string(path)?;
    let verses: Vec<Verse> =
        serde_json::from_str(&content).map_err(|e| data_format(path, e.to_string()))?;
    for (index, verse) in verses.iter().enumerate() {
        if verse.number.trim().is_empty()
            || verse.shlok.trim().is_empty()
            || verse.meaning.trim().is_empty()
        {
            return Err(data_format(
                path,
                format!("verse at index {index} has an empty field"),
            ));
        }
    }
    Ok(verses)
}

/// Pick a catalog entry by name or filename. With no selector, a lone entry
/// is chosen automatically.
pub fn resolve_entry<'a>(
    catalog: &'a [TextCatalogEntry],
    selector: Option<&str>,
) -> Fallible<&'a TextCatalogEntry> {
    if catalog.is_empty() {
        return fail("no texts found in the data directory.");
    }
    match selector {
        Some(selector) => catalog
            .iter()
            .find(|entry| entry.name == selector || entry.filename == selector)
            .ok_or_else(|| {
                let names: Vec<&str> = catalog.iter().map(|e| e.name.as_str()).collect();
                QuizError::Message(format!(
                    "no text named '{selector}'. Available: {}.",
                    names.join(", ")
                ))
            }),
        None => {
            if catalog.len() == 1 {
                Ok(&catalog[0])
            } else {
                let names: Vec<&str> = catalog.iter().map(|e| e.name.as_str()).collect();
                fail(format!(
                    "more than one text available, pick one with --text. Available: {}.",
                    names.join(", ")
                ))
            }
        }
    }
}

fn data_format(path: &Path, detail: String) -> QuizError {
    QuizError::DataFormat {
        path: path.display().to_string(),
        detail,
    }
}

#[cfg(test)]
mod tests {
    use std::fs::write;

    use super::*;
    use crate::helper::create_tmp_data_directory;

    #[test]
    fn test_load_catalog_from_index() -> Fallible<()> {
        let dir = create_tmp_data_directory()?;
        let catalog = load_catalog(dir.path())?;
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog[0].filename, "BhagavadGita.json");
        assert_eq!(catalog[0].name, "श्रीमद्भगवद्गीता");
        Ok(())
    }

    #[test]
    fn test_load_catalog_by_scanning() -> Fallible<()> {
        let dir = tempfile::tempdir()?;
        write(dir.path().join("b.json"), "[]")?;
        write(dir.path().join("a.json"), "[]")?;
        write(dir.path().join("notes.txt"), "ignored")?;
        let catalog = load_catalog(dir.path())?;
        let names: Vec<&str> = catalog.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b"]);
        Ok(())
    }

    #[test]
    fn test_malformed_catalog() -> Fallible<()> {
        let dir = tempfile::tempdir()?;
        write(dir.path().join(CATALOG_FILE), r#"[{"filename": "", "name": "x"}]"#)?;
        let result = load_catalog(dir.path());
        assert!(matches!(result, Err(QuizError::DataFormat { .. })));
        Ok(())
    }

    #[test]
    fn test_load_text() -> Fallible<()> {
        let dir = create_tmp_data_directory()?;
        let verses = load_text(&dir.path().join("BhagavadGita.json"))?;
        assert_eq!(verses.len(), 4);
        assert_eq!(verses[0].number, "1.1");
        Ok(())
    }

    #[test]
    fn test_load_text_with_empty_field() -> Fallible<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("broken.json");
        write(
            &path,
            r#"[{"number": "1.1", "shlok": "", "meaning": "m"}]"#,
        )?;
        let result = load_text(&path);
        assert!(matches!(result, Err(QuizError::DataFormat { .. })));
        Ok(())
    }

    #[test]
    fn test_load_text_that_is_not_a_list() -> Fallible<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("broken.json");
        write(&path, r#"{"number": "1.1"}"#)?;
        let result = load_text(&path);
        assert!(matches!(result, Err(QuizError::DataFormat { .. })));
        Ok(())
    }

    #[test]
    fn test_resolve_entry() {
        let catalog = vec![
            TextCatalogEntry {
                filename: "a.json".to_string(),
                name: "Text A".to_string(),
            },
            TextCatalogEntry {
                filename: "b.json".to_string(),
                name: "Text B".to_string(),
            },
        ];
        assert_eq!(
            resolve_entry(&catalog, Some("Text B")).unwrap().filename,
            "b.json"
        );
        assert_eq!(
            resolve_entry(&catalog, Some("a.json")).unwrap().name,
            "Text A"
        );
        assert!(resolve_entry(&catalog, Some("Text C")).is_err());
        assert!(resolve_entry(&catalog, None).is_err());
        assert!(resolve_entry(&[], None).is_err());

        let lone = vec![catalog[0].clone()];
        assert_eq!(resolve_entry(&lone, None).unwrap().name, "Text A");
    }
}
