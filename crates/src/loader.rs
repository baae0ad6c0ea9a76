//! Reads a tree description (JSON) plus optional session settings.

use crate::config::Settings;
use crate::tree::Element;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse tree description: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub settings: Settings,
    /// `null` or missing is accepted; a pass over it does nothing.
    #[serde(default)]
    pub root: Option<Element>,
}

pub fn from_str(s: &str) -> Result<Document, LoadError> {
    let doc: Document = serde_json::from_str(s)?;
    log::debug!(
        "loaded document: root={:?} programmers_mode={} ignored={}",
        doc.root.as_ref().map(|r| r.id.as_str()),
        doc.settings.programmers_mode,
        doc.settings.ignore.len()
    );
    Ok(doc)
}

/// Load from a file, `-` meaning stdin.
pub fn load(path: &Path) -> Result<Document, LoadError> {
    let io_err = |source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    };
    let raw = if path.as_os_str() == "-" {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf).map_err(io_err)?;
        buf
    } else {
        fs::read_to_string(path).map_err(io_err)?
    };
    from_str(&raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::ElementKind;
    use std::io::Write;

    #[test]
    fn parses_settings_and_tree() {
        let doc = from_str(
            r#"{
                "settings": { "programmers_mode": true, "ignore": ["x"], "weights": { "menu_title": 400 } },
                "root": { "id": "w", "children": [ { "id": "ok", "kind": "dialog_button", "text": "OK" } ] }
            }"#,
        )
        .unwrap();
        assert!(doc.settings.programmers_mode);
        assert_eq!(doc.settings.ignore, vec!["x".to_string()]);
        assert_eq!(doc.settings.weights.menu_title, 400);
        assert_eq!(doc.settings.weights.dialog_button, 300);
        let root = doc.root.unwrap();
        assert_eq!(root.children[0].kind, ElementKind::DialogButton);
    }

    #[test]
    fn missing_root_is_not_an_error() {
        let doc = from_str("{}").unwrap();
        assert!(doc.root.is_none());
        assert!(!doc.settings.programmers_mode);
        let doc = from_str(r#"{ "root": null }"#).unwrap();
        assert!(doc.root.is_none());
    }

    #[test]
    fn malformed_input_is_a_parse_error() {
        let err = from_str(r#"{ "root": { "kind": "container" } }"#).unwrap_err();
        assert!(matches!(err, LoadError::Parse(_)));
        let err = from_str("not json").unwrap_err();
        assert!(err.to_string().starts_with("failed to parse tree description"));
    }

    #[test]
    fn loads_from_file() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        write!(f, r#"{{ "root": {{ "id": "w", "text": "Main" }} }}"#).unwrap();
        let doc = load(f.path()).unwrap();
        assert_eq!(doc.root.unwrap().text, "Main");
    }

    #[test]
    fn missing_file_reports_the_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");
        let err = load(&path).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
        assert!(err.to_string().contains("absent.json"));
    }
}
