//! Error types. Engine arithmetic never fails; these cover parsing and settings I/O.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("reading settings {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("parsing settings {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid settings: {0}")]
    Invalid(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("unknown action '{0}'")]
    UnknownAction(String),
    #[error("unknown route '{0}'")]
    UnknownRoute(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum WizardError {
    #[error("no machine configuration selected")]
    NoSelection,
    #[error("unknown machine configuration {0}")]
    UnknownConfig(u32),
}
