//! Build-time translation bundler for the marketplace front end.
//!
//! Reads `<locales>/<lang>/<namespace>.json`, drops duplicate and
//! common-phrase strings per language, groups namespaces into
//! load-priority tiers and writes the bundles plus an `index.json`
//! manifest that [`i18n::TranslationCatalog`] resolves at runtime.

pub mod config;
pub mod error;
pub mod i18n;
pub mod pipeline;
