//! Runtime lookup of written bundles through the manifest.

use crate::error::{BundleError, Result};
use crate::i18n::namespace::read_json_object;
use crate::i18n::{BundleTier, Manifest, MANIFEST_FILE};
use serde_json::{Map, Value};
use std::path::PathBuf;

/// Resolves `(language, tier name)` to a bundle object.
#[derive(Debug, Clone)]
pub struct TranslationCatalog {
    root: PathBuf,
    manifest: Manifest,
}

impl TranslationCatalog {
    /// Read `<output_dir>/index.json`.
    pub async fn open(output_dir: impl Into<PathBuf>) -> Result<Self> {
        let root = output_dir.into();
        let path = root.join(MANIFEST_FILE);
        let raw = read_json_object(&path).await?;
        let manifest = serde_json::from_value(Value::Object(raw))
            .map_err(|source| BundleError::Parse { path, source })?;

        Ok(Self { root, manifest })
    }

    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }

    /// Load the bundle for `language` and `bundle` tier name.
    ///
    /// Unrecognized tier names resolve to the critical tier. A tier with no
    /// namespaces yields an empty object.
    pub async fn load(&self, language: &str, bundle: &str) -> Result<Map<String, Value>> {
        if !self.manifest.has_language(language) {
            return Err(BundleError::LanguageNotInManifest(language.to_string()));
        }

        let tier = BundleTier::from_name(bundle).unwrap_or(self.manifest.default_tier);
        match self.manifest.bundle_path(language, tier) {
            Some(relative) => read_json_object(&self.root.join(relative)).await,
            None => Ok(Map::new()),
        }
    }
}
