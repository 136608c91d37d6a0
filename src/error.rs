use std::io;

use thiserror::Error;

/// Errors raised while loading the snippet dataset or touching the filesystem.
#[derive(Debug, Error)]
pub enum Error {
    #[error("snippet file {file} could not be parsed")]
    Dataset {
        file: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("snippet file {file} is not valid utf-8")]
    Encoding { file: String },

    #[error("snippet {index} of {language} is invalid: {reason}")]
    InvalidSnippet {
        language: String,
        index: usize,
        reason: &'static str,
    },

    #[error("language {0} is defined more than once")]
    DuplicateLanguage(String),

    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
