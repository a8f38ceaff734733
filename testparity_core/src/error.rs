use std::path::PathBuf;

use thiserror::Error;

use crate::model::Platform;

#[derive(Debug, Error)]
pub enum ParityError {
    #[error("io error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config at {path}: {message}")]
    ConfigParse { path: PathBuf, message: String },

    #[error("path to {platform} tests not found: {path}")]
    MissingSource { platform: Platform, path: PathBuf },

    #[error("failed to write report {path}: {source}")]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
