use std::io;

use thiserror::Error;

use tripmeter_formats::DecodeError;

/// Everything that can stop a run.  All of these are fatal.
///
#[derive(Debug, Error)]
pub enum EngineStatus {
    #[error("Can not open {0}: {1}")]
    FileError(String, #[source] io::Error),
    #[error("Can not read line {line}: {source}")]
    Unreadable {
        line: usize,
        #[source]
        source: io::Error,
    },
    #[error("Malformed line {line}: {text:?}")]
    MalformedLine { line: usize, text: String },
    #[error("Line {line}: {source}")]
    DecodeExhausted {
        line: usize,
        #[source]
        source: DecodeError,
    },
    #[error("Stage {0} panicked.")]
    StageFailed(&'static str),
}

impl EngineStatus {
    /// Input line the error refers to, if any.
    ///
    pub fn line(&self) -> Option<usize> {
        match self {
            EngineStatus::Unreadable { line, .. }
            | EngineStatus::MalformedLine { line, .. }
            | EngineStatus::DecodeExhausted { line, .. } => Some(*line),
            _ => None,
        }
    }
}
