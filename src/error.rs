use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid API {clause:?}")]
    InvalidApiSyntax { clause: String },

    #[error("can not resolve specification for API {api}")]
    UnresolvedSpecification { api: String },

    #[error("invalid version {text:?}")]
    InvalidVersion { text: String },

    #[error("xml error: {message}")]
    Xml { message: String },

    #[error("io error at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl Error {
    pub(crate) fn xml(message: impl Into<String>) -> Self {
        Error::Xml {
            message: message.into(),
        }
    }
}
