//! Translation bundling for the marketplace front end.
//!
//! # Architecture
//!
//! - `registry` / `language`: the locales we ship and their metadata
//! - `namespace`: loading `<locales>/<lang>/*.json`
//! - `optimizer` / `stoplist`: per-language dedup and common-phrase removal
//! - `tier`: namespace → load-priority tier, and per-language partitioning
//! - `writer` / `manifest`: output files and the bundle index
//! - `catalog`: runtime lookup of bundles through the index
//! - `metrics`: size and dedup statistics
//! - `validator`: placeholder checks between canonical and translated text
//!
//! # Example
//!
//! ```rust,ignore
//! use crate::i18n::{Optimizer, TierBundles};
//!
//! let mut optimizer = Optimizer::new();
//! let optimized = namespaces
//!     .iter()
//!     .map(|ns| (ns.name.clone(), optimizer.optimize(&ns.content)));
//! let bundles = TierBundles::partition(optimized);
//! ```

mod catalog;
mod language;
mod manifest;
mod metrics;
mod namespace;
mod optimizer;
mod registry;
mod stoplist;
mod tier;
mod validator;
mod writer;

pub use catalog::TranslationCatalog;
pub use language::Language;
pub use manifest::{Manifest, MANIFEST_FILE};
pub use metrics::{OptimizationStats, StatsReport};
pub use namespace::{load_language, Namespace};
pub use optimizer::{coerce_to_string, normalize_whitespace, Optimizer};
pub use registry::{LanguageConfig, LanguageRegistry, TextDirection};
pub use stoplist::{common_phrases, is_common_phrase};
pub use tier::{BundleTier, TierBundles};
pub use validator::{PlaceholderValidator, ValidationReport};
pub use writer::BundleWriter;
