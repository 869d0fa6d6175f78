//! The generated bundle index: which file holds each (language, tier) bundle.

use crate::i18n::BundleTier;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const MANIFEST_FILE: &str = "index.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Manifest {
    pub generated_at: DateTime<Utc>,

    /// Tier served when a caller names a tier that does not exist
    pub default_tier: BundleTier,

    /// Language code → tier name → bundle path relative to the manifest
    pub bundles: BTreeMap<String, BTreeMap<String, String>>,
}

impl Manifest {
    pub fn new() -> Self {
        Self {
            generated_at: Utc::now(),
            default_tier: BundleTier::FALLBACK,
            bundles: BTreeMap::new(),
        }
    }

    /// Register a language with no bundles yet, so lookups for it resolve to empty.
    pub fn add_language(&mut self, language: &str) {
        self.bundles.entry(language.to_string()).or_default();
    }

    pub fn record(&mut self, language: &str, tier: BundleTier, path: impl Into<String>) {
        self.bundles
            .entry(language.to_string())
            .or_default()
            .insert(tier.as_str().to_string(), path.into());
    }

    pub fn has_language(&self, language: &str) -> bool {
        self.bundles.contains_key(language)
    }

    pub fn bundle_path(&self, language: &str, tier: BundleTier) -> Option<&str> {
        self.bundles
            .get(language)
            .and_then(|tiers| tiers.get(tier.as_str()))
            .map(String::as_str)
    }
}

impl Default for Manifest {
    fn default() -> Self {
        Self::new()
    }
}
