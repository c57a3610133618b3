// src/config/validate.rs

use crate::config::model::{ConfigFile, RawConfigFile};
use crate::errors::{BundlewatchError, Result};
use crate::watch::patterns::FileFilter;

impl TryFrom<RawConfigFile> for ConfigFile {
    type Error = BundlewatchError;

    fn try_from(raw: RawConfigFile) -> std::result::Result<Self, Self::Error> {
        validate_raw_config(&raw)?;
        let filter = FileFilter::new(&raw.watch.extensions, &raw.watch.exclude)
            .map_err(|e| BundlewatchError::ConfigError(format!("[watch].exclude: {e:#}")))?;
        Ok(ConfigFile::new_unchecked(raw, filter))
    }
}

fn validate_raw_config(cfg: &RawConfigFile) -> Result<()> {
    validate_root(cfg)?;
    validate_extensions(cfg)?;
    validate_timing(cfg)?;
    Ok(())
}

fn validate_root(cfg: &RawConfigFile) -> Result<()> {
    if cfg.watch.root.as_os_str().is_empty() {
        return Err(BundlewatchError::ConfigError(
            "[watch].root must not be empty".to_string(),
        ));
    }
    Ok(())
}

fn validate_extensions(cfg: &RawConfigFile) -> Result<()> {
    if cfg.watch.extensions.is_empty() {
        return Err(BundlewatchError::ConfigError(
            "[watch].extensions must list at least one extension".to_string(),
        ));
    }
    if cfg.watch.extensions.iter().any(|ext| ext.is_empty()) {
        // An empty suffix would match every file.
        return Err(BundlewatchError::ConfigError(
            "[watch].extensions must not contain empty entries".to_string(),
        ));
    }
    Ok(())
}

fn validate_timing(cfg: &RawConfigFile) -> Result<()> {
    if cfg.timing.poll_ms == 0 {
        return Err(BundlewatchError::ConfigError(
            "[timing].poll_ms must be >= 1 (got 0)".to_string(),
        ));
    }
    Ok(())
}
