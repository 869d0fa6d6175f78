use crate::i18n::Language;
use anyhow::{Context, Result};
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    /// Root holding one directory of namespace files per language
    pub locales_dir: PathBuf,

    /// Where optimized namespaces, tier bundles and the manifest go
    pub output_dir: PathBuf,

    /// Languages to process, in order
    pub languages: Vec<Language>,

    /// Compare placeholders of translations against the canonical language
    pub validate_placeholders: bool,
}

impl Config {
    /// Defaults for a locales root: output under `<locales>/optimized`,
    /// every enabled language, placeholder validation on.
    pub fn new(locales_dir: impl Into<PathBuf>) -> Self {
        let locales_dir = locales_dir.into();
        Self {
            output_dir: locales_dir.join("optimized"),
            locales_dir,
            languages: Language::all_enabled(),
            validate_placeholders: true,
        }
    }

    pub fn from_env() -> Result<Self> {
        let locales_dir = std::env::var("LOCALES_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("public/locales"));
        let mut config = Self::new(locales_dir);

        if let Ok(output_dir) = std::env::var("LOCALES_OUTPUT_DIR") {
            config.output_dir = PathBuf::from(output_dir);
        }

        if let Ok(codes) = std::env::var("LOCALE_LANGUAGES") {
            config.languages = parse_languages(&codes).context("invalid LOCALE_LANGUAGES")?;
        }

        config.validate_placeholders = std::env::var("LOCALES_VALIDATE_PLACEHOLDERS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(true);

        Ok(config)
    }
}

/// Parse a comma-separated list of language codes, skipping blanks.
fn parse_languages(codes: &str) -> Result<Vec<Language>> {
    let languages = codes
        .split(',')
        .map(str::trim)
        .filter(|code| !code.is_empty())
        .map(Language::from_code)
        .collect::<Result<Vec<_>, _>>()?;

    anyhow::ensure!(!languages.is_empty(), "no language codes given");
    Ok(languages)
}
