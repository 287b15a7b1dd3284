use std::path::PathBuf;

use thiserror::Error;

/// Coarse classification of a [`ConvertError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// An identifier or a JSON document did not have the expected shape.
    Parse,
    /// A timestamp could not be split into two numbers.
    Format,
    /// A file could not be read or written.
    Io,
}

/// Everything that can abort a conversion run.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("unexpected clip key: {0}")]
    ClipKey(String),

    #[error("subtitle for clip {0} is not a string")]
    SubtitleText(String),

    #[error("malformed record on line {line}: {content}")]
    JsonLine {
        line: usize,
        content: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("malformed JSON in {}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("bad timestamp {0:?}, expected \"start-end\"")]
    Timestamp(String),

    #[error("cannot read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ConvertError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ConvertError::ClipKey(_)
            | ConvertError::SubtitleText(_)
            | ConvertError::JsonLine { .. }
            | ConvertError::Json { .. } => ErrorKind::Parse,
            ConvertError::Timestamp(_) => ErrorKind::Format,
            ConvertError::Read { .. } | ConvertError::Write { .. } => ErrorKind::Io,
        }
    }
}

pub type Result<T> = std::result::Result<T, ConvertError>;
