//! Error types for the bundling pipeline.
//!
//! Every failure here is fatal for the run. Data anomalies (non-string
//! leaves, namespaces that optimize to nothing) are not errors and never
//! show up in this enum.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BundleError {
    #[error("failed to read {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed JSON in {}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("{} must contain a JSON object at the top level", .path.display())]
    NotAnObject { path: PathBuf },

    #[error("Unknown language code: '{0}'")]
    UnknownLanguage(String),

    #[error("Language '{0}' is not enabled")]
    DisabledLanguage(String),

    #[error("No bundles recorded for language '{0}'")]
    LanguageNotInManifest(String),
}

pub type Result<T> = std::result::Result<T, BundleError>;
