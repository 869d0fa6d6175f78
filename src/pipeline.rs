//! The build-time bundling run: load, optimize, bundle, write, report.
//!
//! Languages are processed one at a time in configured order. A failure
//! aborts the run; output already written for earlier languages is left
//! on disk.

use crate::config::Config;
use crate::error::Result;
use crate::i18n::{
    load_language, BundleWriter, Language, Manifest, Namespace, OptimizationStats, Optimizer,
    PlaceholderValidator, StatsReport, TierBundles, ValidationReport,
};
use std::path::PathBuf;
use tracing::{debug, info, warn};

/// Outcome of a completed run.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub stats: StatsReport,
    pub validation: ValidationReport,
    pub manifest_path: PathBuf,
    pub manifest: Manifest,
}

pub async fn run(config: &Config) -> Result<RunSummary> {
    let writer = BundleWriter::new(&config.output_dir);
    let mut stats = OptimizationStats::new();
    let mut manifest = Manifest::new();
    let mut validation = ValidationReport::new();

    let canonical = Language::canonical();
    let canonical_source = if config.validate_placeholders && config.languages.contains(&canonical)
    {
        Some(load_language(&config.locales_dir, canonical).await?)
    } else {
        None
    };

    for &language in &config.languages {
        info!("Processing language: {} ({})", language, language.name());
        let namespaces = load_language(&config.locales_dir, language).await?;

        if let Some(source) = canonical_source.as_deref() {
            if language != canonical {
                validation.merge(PlaceholderValidator::validate(source, language, &namespaces));
            }
        }

        let optimized = optimize_language(&writer, language, &namespaces, &mut stats).await?;
        let bundles = TierBundles::partition(optimized);

        manifest.add_language(language.code());
        for (tier, path) in writer.write_tiers(language, &bundles).await? {
            manifest.record(language.code(), tier, path);
        }
    }

    let manifest_path = writer.write_manifest(&manifest).await?;
    info!("Wrote bundle manifest to {}", manifest_path.display());

    for warning in &validation.warnings {
        warn!("{}", warning);
    }

    let report = stats.report();
    report.log_summary();

    Ok(RunSummary {
        stats: report,
        validation,
        manifest_path,
        manifest,
    })
}

/// Optimize and write every namespace of one language with a fresh dedup set.
async fn optimize_language(
    writer: &BundleWriter,
    language: Language,
    namespaces: &[Namespace],
    stats: &mut OptimizationStats,
) -> Result<Vec<(String, serde_json::Map<String, serde_json::Value>)>> {
    let mut optimizer = Optimizer::new();
    let mut optimized = Vec::with_capacity(namespaces.len());

    for namespace in namespaces {
        let content = optimizer.optimize(&namespace.content);
        stats.record_namespace(&namespace.content, &content);
        writer.write_namespace(language, &namespace.name, &content).await?;
        debug!(
            "Optimized {}/{}: {} -> {} top-level keys",
            language,
            namespace.name,
            namespace.content.len(),
            content.len()
        );
        optimized.push((namespace.name.clone(), content));
    }

    stats.record_duplicates(optimizer.duplicates_removed());
    info!(
        "Optimized {} namespaces for {}, {} duplicates removed",
        namespaces.len(),
        language,
        optimizer.duplicates_removed()
    );

    Ok(optimized)
}
