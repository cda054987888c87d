//! Tracing subscriber setup.
//!
//! The quiz owns stdout, so log lines go to a file or nowhere.

use std::fs::File;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::QuizError;

const DEFAULT_FILTER: &str = "info";

/// Send tracing output to `path`, filtered by `RUST_LOG` (default `info`).
pub fn init_file_logging(path: &Path) -> Result<(), QuizError> {
    let file = File::create(path)?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|err| QuizError::Logging(err.to_string()))
}
