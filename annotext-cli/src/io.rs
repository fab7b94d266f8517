//! File I/O for native CLI

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use annotext_core::Document;

/// Load a document from disk
///
/// `.json` files are parsed as a full annotated document; anything else is
/// read as plain text with no annotations and titled after its file stem.
pub fn load_file(path: &Path) -> Result<Document> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))?;

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    if is_json {
        return annotext_core::from_json(&content)
            .with_context(|| format!("Failed to load document: {}", path.display()));
    }

    let title = path
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| "Untitled".to_string());

    Ok(Document::new(title, content))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn loads_plain_text_with_stem_title() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        fs::write(&path, "hello <world>").unwrap();

        let doc = load_file(&path).unwrap();
        assert_eq!(doc.title, "notes");
        assert_eq!(doc.content, "hello <world>");
        assert!(doc.typography.is_empty());
    }

    #[test]
    fn loads_annotated_json_document() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(
            file,
            r#"{{"title":"t","content":"abc","typography":[{{"start":0,"end":3,"styleId":"h2"}}],"semantics":[{{"start":1,"end":2,"id":"x"}}]}}"#
        )
        .unwrap();

        let doc = load_file(file.path()).unwrap();
        assert_eq!(doc.title, "t");
        assert_eq!(doc.typography.len(), 1);
        assert_eq!(doc.semantics[0].id, "x");
    }

    #[test]
    fn reports_missing_file_path() {
        let err = load_file(Path::new("/definitely/not/here.txt")).unwrap_err();
        assert!(err.to_string().contains("/definitely/not/here.txt"));
    }

    #[test]
    fn reports_malformed_json() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, "{{not json").unwrap();

        let err = load_file(file.path()).unwrap_err();
        assert!(format!("{err:#}").contains("Failed to parse document JSON"));
    }
}
