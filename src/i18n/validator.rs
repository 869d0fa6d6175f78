//! Placeholder consistency checks between the canonical language and its translations.
//!
//! Interpolation placeholders (`{{count}}`, `{{ name }}`) must survive
//! translation or the rendered UI shows raw braces. Findings are warnings
//! only and never stop a bundling run.

use crate::i18n::{Language, Namespace};
use regex::Regex;
use serde_json::{Map, Value};
use std::collections::{BTreeSet, HashMap};
use std::sync::OnceLock;

/// Validation report containing errors and warnings about a set of translations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    pub fn is_clean(&self) -> bool {
        !self.has_errors() && !self.has_warnings()
    }

    /// Append another report's findings to this one.
    pub fn merge(&mut self, other: ValidationReport) {
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
    }
}

pub struct PlaceholderValidator;

static PLACEHOLDER_REGEX: OnceLock<Regex> = OnceLock::new();

impl PlaceholderValidator {
    /// Compare every string key of `translated` against the canonical namespaces.
    ///
    /// Reports keys whose placeholder sets differ and canonical keys that
    /// the translation is missing. Namespaces absent from either side are
    /// reported once rather than key by key.
    pub fn validate(
        canonical: &[Namespace],
        language: Language,
        translated: &[Namespace],
    ) -> ValidationReport {
        let mut report = ValidationReport::new();
        let translated_by_name: HashMap<&str, &Namespace> = translated
            .iter()
            .map(|ns| (ns.name.as_str(), ns))
            .collect();

        for source in canonical {
            let Some(target) = translated_by_name.get(source.name.as_str()) else {
                report.warnings.push(format!(
                    "Namespace '{}' has no {} translation",
                    source.name, language
                ));
                continue;
            };

            let target_leaves: HashMap<String, String> =
                flatten_strings(&target.content).into_iter().collect();

            for (path, source_text) in flatten_strings(&source.content) {
                let Some(target_text) = target_leaves.get(&path) else {
                    report.warnings.push(format!(
                        "Missing key {}:{}.{}",
                        language, source.name, path
                    ));
                    continue;
                };

                let expected = Self::extract_placeholders(&source_text);
                let found = Self::extract_placeholders(target_text);
                if expected != found {
                    report.warnings.push(format!(
                        "Placeholder mismatch in {}:{}.{}: expected {:?}, found {:?}",
                        language, source.name, path, expected, found
                    ));
                }
            }
        }

        report
    }

    /// Extract the distinct placeholder names in `text`.
    fn extract_placeholders(text: &str) -> BTreeSet<String> {
        let regex = PLACEHOLDER_REGEX
            .get_or_init(|| Regex::new(r"\{\{\s*([A-Za-z0-9_.]+)\s*\}\}").unwrap());

        regex
            .captures_iter(text)
            .filter_map(|cap| cap.get(1).map(|m| m.as_str().to_string()))
            .collect()
    }
}

/// Dotted key paths of every string leaf, depth-first.
fn flatten_strings(map: &Map<String, Value>) -> Vec<(String, String)> {
    let mut leaves = Vec::new();
    collect_strings("", map, &mut leaves);
    leaves
}

fn collect_strings(prefix: &str, map: &Map<String, Value>, out: &mut Vec<(String, String)>) {
    for (key, value) in map {
        let path = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{prefix}.{key}")
        };
        match value {
            Value::Object(nested) => collect_strings(&path, nested, out),
            Value::String(text) => out.push((path, text.clone())),
            _ => {}
        }
    }
}
