//! Writing optimized namespaces, tier bundles and the manifest to disk.

use crate::error::{BundleError, Result};
use crate::i18n::{BundleTier, Language, Manifest, TierBundles, MANIFEST_FILE};
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

/// Writes all output under a single root directory, overwriting existing files.
#[derive(Debug, Clone)]
pub struct BundleWriter {
    output_dir: PathBuf,
}

impl BundleWriter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// Write `<output>/<lang>/<namespace>.json`.
    pub async fn write_namespace(
        &self,
        language: Language,
        name: &str,
        content: &Map<String, Value>,
    ) -> Result<PathBuf> {
        let relative = format!("{}/{}.json", language.code(), name);
        self.write_json(&relative, content, false).await?;
        Ok(self.output_dir.join(relative))
    }

    /// Write one compact file per non-empty tier.
    ///
    /// Returns each written tier with its path relative to the output root.
    pub async fn write_tiers(
        &self,
        language: Language,
        bundles: &TierBundles,
    ) -> Result<Vec<(BundleTier, String)>> {
        let mut written = Vec::new();
        for (tier, bundle) in bundles.non_empty() {
            let relative = format!("{}/{}.json", language.code(), tier);
            self.write_json(&relative, bundle, false).await?;
            debug!("Wrote {} bundle with {} namespaces", relative, bundle.len());
            written.push((tier, relative));
        }
        Ok(written)
    }

    /// Write `<output>/index.json`.
    pub async fn write_manifest(&self, manifest: &Manifest) -> Result<PathBuf> {
        self.write_json(MANIFEST_FILE, manifest, true).await?;
        Ok(self.output_dir.join(MANIFEST_FILE))
    }

    async fn write_json<T>(&self, relative: &str, value: &T, pretty: bool) -> Result<()>
    where
        T: serde::Serialize + ?Sized,
    {
        let path = self.output_dir.join(relative);
        let encoded = if pretty {
            serde_json::to_vec_pretty(value)
        } else {
            serde_json::to_vec(value)
        }
        .map_err(|err| BundleError::Write {
            path: path.clone(),
            source: err.into(),
        })?;

        write_file(&path, &encoded).await
    }
}

async fn write_file(path: &Path, contents: &[u8]) -> Result<()> {
    let write_err = |source| BundleError::Write {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).await.map_err(write_err)?;
    }
    fs::write(path, contents).await.map_err(write_err)
}
