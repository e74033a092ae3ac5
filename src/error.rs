// src/error.rs
use std::io;
use std::path::PathBuf;

/// Ways a run can end without writing names.
#[derive(thiserror::Error, Debug)]
pub enum RunError {
    #[error("input file not found: {}", .path.display())]
    MissingInput { path: PathBuf },

    #[error("No matching names found.")]
    NoNames,

    #[error("could not read {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("could not write {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl RunError {
    /// Process exit status for this outcome.
    pub fn exit_code(&self) -> u8 {
        match self {
            RunError::MissingInput { .. } => 1,
            RunError::NoNames => 2,
            RunError::Read { .. } | RunError::Write { .. } => 1,
        }
    }

    /// Expected outcomes get a one-line message; IO failures get a full report.
    pub fn is_expected(&self) -> bool {
        matches!(self, RunError::MissingInput { .. } | RunError::NoNames)
    }
}

pub type Result<T> = std::result::Result<T, RunError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_follow_cli_contract() {
        assert_eq!(RunError::MissingInput { path: "x".into() }.exit_code(), 1);
        assert_eq!(RunError::NoNames.exit_code(), 2);
        let io = io::Error::new(io::ErrorKind::PermissionDenied, "nope");
        assert_eq!(RunError::Write { path: "y".into(), source: io }.exit_code(), 1);
    }

    #[test]
    fn messages() {
        let e = RunError::MissingInput { path: "/tmp/classlist.html".into() };
        assert_eq!(e.to_string(), "input file not found: /tmp/classlist.html");
        assert_eq!(RunError::NoNames.to_string(), "No matching names found.");
    }
}
