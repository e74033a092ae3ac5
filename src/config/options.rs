// src/config/options.rs
use std::path::{ Path, PathBuf };
use super::consts::*;

/// Everything a single run needs to know.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppOptions {
    pub input: PathBuf,
    pub output: PathBuf,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
        }
    }
}

impl AppOptions {
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self { input: input.into(), output: output.into() }
    }

    /// Absolute input path, for user-facing messages.
    pub fn resolved_input(&self) -> PathBuf {
        resolve(&self.input)
    }

    /// Absolute output path, for user-facing messages.
    pub fn resolved_output(&self) -> PathBuf {
        resolve(&self.output)
    }
}

/// Make `p` absolute against the working directory without touching the
/// filesystem, so it also works for files that don't exist (yet).
/// Falls back to the path as given if the working directory is unavailable.
pub fn resolve(p: &Path) -> PathBuf {
    std::path::absolute(p).unwrap_or_else(|_| p.to_path_buf())
}
