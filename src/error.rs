use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid endpoint: {0}")]
    Endpoint(#[from] url::ParseError),

    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {0}")]
    Status(reqwest::StatusCode),

    #[error("response too large: {0} bytes")]
    TooLarge(usize),

    #[error("malformed response: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unexpected API response format: expected an array, got {0}")]
    NotArray(&'static str),
}

#[derive(Debug, Error)]
pub enum WriteError {
    #[error("failed to create folder {path}: {source}")]
    Folder {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write {path}: {source}")]
    File {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("path escapes the vault: {0}")]
    InvalidPath(String),
}

#[derive(Debug, Error)]
pub enum CycleError {
    #[error("failed to fetch giveaways: {0}")]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Write(#[from] WriteError),
}
