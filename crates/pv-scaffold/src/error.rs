use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

pub type Result<T> = std::result::Result<T, EmitError>;

#[derive(Error, Debug)]
pub enum EmitError {
    /// The destination could not be opened or written.
    #[error("failed to write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The file is on disk but the confirmation line could not be printed.
    #[error("failed to print confirmation")]
    Confirm(#[source] io::Error),
}

impl EmitError {
    pub fn path(&self) -> Option<&Path> {
        match self {
            EmitError::Write { path, .. } => Some(path),
            EmitError::Confirm(_) => None,
        }
    }
}
