use std::{fmt, io};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FormatError {
    #[error("no renderer configured for an element type that requires one")]
    MissingRenderer,

    #[error("sink rejected write: {0}")]
    Sink(#[from] io::Error),

    #[error("formatter error")]
    Fmt(#[from] fmt::Error),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0}")]
    Io(#[from] io::Error),

    #[error("malformed options: {0}")]
    Json(#[from] serde_json::Error),
}
