//! Loading translation namespaces from `<locales>/<lang>/<namespace>.json`.

use crate::error::{BundleError, Result};
use crate::i18n::Language;
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

/// One translation file: its name (the file stem) and its top-level object.
#[derive(Debug, Clone, PartialEq)]
pub struct Namespace {
    pub name: String,
    pub content: Map<String, Value>,
}

impl Namespace {
    pub fn new(name: impl Into<String>, content: Map<String, Value>) -> Self {
        Self {
            name: name.into(),
            content,
        }
    }
}

/// Load every `*.json` namespace for `language`, sorted by file name.
///
/// The first unreadable or malformed file aborts the whole language.
pub async fn load_language(locales_dir: &Path, language: Language) -> Result<Vec<Namespace>> {
    let dir = locales_dir.join(language.code());
    let paths = list_json_files(&dir).await?;

    let mut namespaces = Vec::with_capacity(paths.len());
    for path in paths {
        let name = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();
        let content = read_json_object(&path).await?;
        debug!("Loaded {}/{} ({} keys)", language, name, content.len());
        namespaces.push(Namespace::new(name, content));
    }

    Ok(namespaces)
}

async fn list_json_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let read_err = |source| BundleError::Read {
        path: dir.to_path_buf(),
        source,
    };

    let mut entries = fs::read_dir(dir).await.map_err(read_err)?;
    let mut paths = Vec::new();
    while let Some(entry) = entries.next_entry().await.map_err(read_err)? {
        let path = entry.path();
        let is_json = path.extension().and_then(|ext| ext.to_str()) == Some("json");
        if is_json && entry.file_type().await.map_err(read_err)?.is_file() {
            paths.push(path);
        }
    }

    paths.sort();
    Ok(paths)
}

/// Read a file that must hold a single JSON object.
pub(crate) async fn read_json_object(path: &Path) -> Result<Map<String, Value>> {
    let text = fs::read_to_string(path)
        .await
        .map_err(|source| BundleError::Read {
            path: path.to_path_buf(),
            source,
        })?;
    parse_json_object(path, &text)
}

pub(crate) fn parse_json_object(path: &Path, text: &str) -> Result<Map<String, Value>> {
    match serde_json::from_str(text) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(_) => Err(BundleError::NotAnObject {
            path: path.to_path_buf(),
        }),
        Err(source) => Err(BundleError::Parse {
            path: path.to_path_buf(),
            source,
        }),
    }
}
