use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while decoding or encoding an OpenAPI document.
///
/// Decoder failures are carried unchanged so the caller sees the exact
/// position and message reported by `serde_json` or `serde_yaml`.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    #[error("Document has no `openapi` version field")]
    MissingVersion,

    #[error("Unsupported OpenAPI version: {0}")]
    UnsupportedVersion(String),

    #[error("Cannot infer document format from path: {0:?}")]
    UnknownFormat(PathBuf),

    #[error("Failed to read file: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
