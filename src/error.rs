use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum QuizError {
    /// Malformed question file. Carries enough location detail for the
    /// operator to fix the source document.
    #[error("cannot parse {}: {message} (line {line}, column {column})", path.display())]
    Parse {
        path: PathBuf,
        line: usize,
        column: usize,
        message: String,
    },

    /// Rejected user action. Recoverable; the triggering state is untouched.
    #[error("{0}")]
    Validation(String),

    /// Results file could not be read or written.
    #[error("cannot {action} {}: {message}", path.display())]
    Storage {
        action: &'static str,
        path: PathBuf,
        message: String,
    },

    #[error("terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

impl QuizError {
    pub fn parse(path: &Path, err: &serde_json::Error) -> Self {
        // serde_json repeats the location in its Display output
        let mut message = err.to_string();
        if let Some(pos) = message.rfind(" at line ") {
            message.truncate(pos);
        }
        QuizError::Parse {
            path: path.to_path_buf(),
            line: err.line(),
            column: err.column(),
            message,
        }
    }

    pub fn storage(action: &'static str, path: &Path, err: impl std::fmt::Display) -> Self {
        QuizError::Storage {
            action,
            path: path.to_path_buf(),
            message: err.to_string(),
        }
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        QuizError::Validation(msg.into())
    }
}
