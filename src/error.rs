use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while binding a store to its backing file
#[derive(Error, Debug)]
pub enum FileError {
    #[error("No linked file specified to be synced")]
    NotLinked,

    #[error("Can't open ini file {path:?}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

#[derive(Error, Debug)]
pub enum IniError {
    #[error("Wrong ini file format at line {line}: {reason}")]
    Format { line: usize, reason: String },

    #[error(transparent)]
    File(#[from] FileError),

    #[error("Cannot convert value {value:?} of key '{key}' in section '{section}'")]
    Conversion {
        section: String,
        key: String,
        value: String,
    },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl IniError {
    /// Line number of a format error, 1-based
    pub fn line(&self) -> Option<usize> {
        match self {
            IniError::Format { line, .. } => Some(*line),
            _ => None,
        }
    }
}
