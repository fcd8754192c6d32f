use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::error::{EmitError, Result};
use crate::template::{APP_CODE, CONFIRMATION, DEFAULT_DESTINATION};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmitOptions {
    pub destination: PathBuf,
}

impl Default for EmitOptions {
    fn default() -> Self {
        Self {
            destination: PathBuf::from(DEFAULT_DESTINATION),
        }
    }
}

impl EmitOptions {
    pub fn with_destination(destination: impl Into<PathBuf>) -> Self {
        Self {
            destination: destination.into(),
        }
    }
}

/// Writes the app to `options.destination` and prints the confirmation on stdout.
pub fn emit(options: &EmitOptions) -> Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    emit_to(options, &mut handle)
}

/// Like [`emit`], with the confirmation going to `out`.
///
/// `out` is left untouched when the file write fails.
pub fn emit_to<W: Write>(options: &EmitOptions, out: &mut W) -> Result<()> {
    let path = options.destination.as_path();
    debug!(path = %path.display(), bytes = APP_CODE.len(), "writing app file");

    if let Err(err) = write_app_file(path, APP_CODE) {
        warn!(path = %path.display(), error = %err, "app file not written");
        return Err(err);
    }
    info!(path = %path.display(), "app file written");

    writeln!(out, "{}", CONFIRMATION).map_err(EmitError::Confirm)?;
    Ok(())
}

/// Truncates or creates `path`, then writes `contents` in full.
/// Parent directories are never created.
pub fn write_app_file(path: &Path, contents: &str) -> Result<()> {
    let to_err = |source| EmitError::Write {
        path: path.to_path_buf(),
        source,
    };

    let mut file = File::create(path).map_err(to_err)?;
    file.write_all(contents.as_bytes()).map_err(to_err)?;
    file.flush().map_err(to_err)?;
    Ok(())
}
