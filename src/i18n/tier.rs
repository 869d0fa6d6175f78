//! Load-priority tiers and the partitioning of namespaces into them.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// When the front end fetches a namespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BundleTier {
    /// Shipped with the first page load
    Critical,
    /// Fetched once the shell is interactive
    Lazy,
    /// Fetched on demand by rarely visited screens
    Deferred,
}

/// Namespaces with a known tier. Anything else is deferred.
const TIER_TABLE: &[(&str, BundleTier)] = &[
    ("common", BundleTier::Critical),
    ("navigation", BundleTier::Critical),
    ("auth", BundleTier::Critical),
    ("errors", BundleTier::Critical),
    ("listings", BundleTier::Lazy),
    ("search", BundleTier::Lazy),
    ("filters", BundleTier::Lazy),
    ("vehicles", BundleTier::Lazy),
    ("realestate", BundleTier::Lazy),
    ("chat", BundleTier::Lazy),
    ("profile", BundleTier::Lazy),
    ("admin", BundleTier::Deferred),
    ("reports", BundleTier::Deferred),
    ("settings", BundleTier::Deferred),
];

impl BundleTier {
    pub const ALL: [BundleTier; 3] = [BundleTier::Critical, BundleTier::Lazy, BundleTier::Deferred];

    /// Tier used when a caller asks for a tier name that does not exist.
    pub const FALLBACK: BundleTier = BundleTier::Critical;

    pub fn as_str(&self) -> &'static str {
        match self {
            BundleTier::Critical => "critical",
            BundleTier::Lazy => "lazy",
            BundleTier::Deferred => "deferred",
        }
    }

    /// Total mapping from namespace name to tier.
    pub fn for_namespace(name: &str) -> BundleTier {
        TIER_TABLE
            .iter()
            .find(|(namespace, _)| *namespace == name)
            .map(|(_, tier)| *tier)
            .unwrap_or(BundleTier::Deferred)
    }

    pub fn from_name(name: &str) -> Option<BundleTier> {
        BundleTier::ALL.into_iter().find(|tier| tier.as_str() == name)
    }
}

impl fmt::Display for BundleTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One language's optimized namespaces grouped by tier.
///
/// Each tier maps namespace name to namespace object, in input order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TierBundles {
    critical: Map<String, Value>,
    lazy: Map<String, Value>,
    deferred: Map<String, Value>,
}

impl TierBundles {
    pub fn partition<I>(namespaces: I) -> Self
    where
        I: IntoIterator<Item = (String, Map<String, Value>)>,
    {
        let mut bundles = Self::default();
        for (name, content) in namespaces {
            let tier = BundleTier::for_namespace(&name);
            bundles.tier_mut(tier).insert(name, Value::Object(content));
        }
        bundles
    }

    pub fn get(&self, tier: BundleTier) -> &Map<String, Value> {
        match tier {
            BundleTier::Critical => &self.critical,
            BundleTier::Lazy => &self.lazy,
            BundleTier::Deferred => &self.deferred,
        }
    }

    fn tier_mut(&mut self, tier: BundleTier) -> &mut Map<String, Value> {
        match tier {
            BundleTier::Critical => &mut self.critical,
            BundleTier::Lazy => &mut self.lazy,
            BundleTier::Deferred => &mut self.deferred,
        }
    }

    /// Tiers holding at least one namespace, in tier order.
    pub fn non_empty(&self) -> impl Iterator<Item = (BundleTier, &Map<String, Value>)> {
        BundleTier::ALL
            .into_iter()
            .map(move |tier| (tier, self.get(tier)))
            .filter(|(_, bundle)| !bundle.is_empty())
    }
}
