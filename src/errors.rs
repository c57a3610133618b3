// src/errors.rs

//! Crate-wide error type and result alias.
//!
//! `ScanIo` is the only error the watch core itself produces. Everything
//! else belongs to the shell around it (config file, CLI overrides, logging).

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::types::ExitStatus;

#[derive(Error, Debug)]
pub enum BundlewatchError {
    /// A directory walk step or file read failed during a scan.
    #[error("scan failed at {path:?}: {source}")]
    ScanIo {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl BundlewatchError {
    pub fn scan_io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        BundlewatchError::ScanIo {
            path: path.into(),
            source,
        }
    }

    /// Exit status the process should terminate with for this error.
    pub fn exit_status(&self) -> ExitStatus {
        match self {
            BundlewatchError::ScanIo { .. } | BundlewatchError::Other(_) => {
                ExitStatus::RuntimeFailure
            }
            BundlewatchError::ConfigError(_)
            | BundlewatchError::IoError(_)
            | BundlewatchError::TomlError(_) => ExitStatus::InvalidConfig,
        }
    }
}

pub type Result<T> = std::result::Result<T, BundlewatchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scan_errors_map_to_runtime_failure() {
        let err = BundlewatchError::scan_io(
            "src/main.lua",
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        assert_eq!(err.exit_status(), ExitStatus::RuntimeFailure);
        assert!(err.to_string().contains("src/main.lua"));
    }

    #[test]
    fn config_errors_map_to_invalid_config() {
        let err = BundlewatchError::ConfigError("bad".to_string());
        assert_eq!(err.exit_status(), ExitStatus::InvalidConfig);
    }

    #[test]
    fn wrapped_runtime_errors_are_runtime_failures() {
        let err: BundlewatchError = anyhow::anyhow!("loop ended").into();
        assert_eq!(err.exit_status(), ExitStatus::RuntimeFailure);
    }

    #[test]
    fn scan_error_message_names_path_and_cause() {
        let err = BundlewatchError::scan_io(
            "src",
            io::Error::new(io::ErrorKind::NotFound, "no such directory"),
        );
        let rendered = format!("{err:#}");
        assert_eq!(rendered, "scan failed at \"src\": no such directory");
    }
}
