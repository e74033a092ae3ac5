// src/file.rs

use std::{
    fs::{self, File},
    io::{self, BufWriter, Write},
    path::Path,
};

use crate::config::options::resolve;
use crate::error::{Result, RunError};
use crate::names::NameSet;

/// Read the whole input as text. Invalid UTF-8 becomes U+FFFD instead of failing;
/// saved pages from Windows browsers are not always clean.
pub fn read_input(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            RunError::MissingInput { path: resolve(path) }
        } else {
            RunError::Read { path: path.to_path_buf(), source }
        }
    })?;
    Ok(match String::from_utf8(bytes) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
    })
}

/// Ensure parent dir exists; create/truncate file; write one name per line.
/// Refuses an empty set so a failed run never leaves an empty file behind.
pub fn write_names(path: &Path, names: &NameSet) -> Result<()> {
    if names.is_empty() {
        return Err(RunError::NoNames);
    }
    let wrap = |source: io::Error| RunError::Write { path: path.to_path_buf(), source };

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent).map_err(wrap)?;
        }
    }

    let file = File::create(path).map_err(wrap)?; // truncate/overwrite
    let mut out = BufWriter::new(file);
    out.write_all(names.to_lines().as_bytes()).map_err(wrap)?;
    out.flush().map_err(wrap)?;
    Ok(())
}

pub fn ensure_directory(dir: &Path) -> io::Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(io::Error::new(
            io::ErrorKind::AlreadyExists,
            format!("Path exists but is not a directory: {}", dir.display()),
        ));
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}
