// src/config/loader.rs

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::model::{ConfigFile, RawConfigFile};
use crate::errors::Result;

/// Load a configuration file from a given path and return the raw
/// `RawConfigFile`.
///
/// This only performs TOML deserialization; it does **not** validate. Use
/// [`load_and_validate`] for that. The file's directory becomes the base a
/// relative `watch.root` is resolved against.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<RawConfigFile> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;

    let mut config: RawConfigFile = toml::from_str(&contents)?;
    config.base_dir = path.parent().map(Path::to_path_buf);

    Ok(config)
}

/// Load a configuration file from path and run validation.
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<ConfigFile> {
    let raw_config = load_from_path(&path)?;
    ConfigFile::try_from(raw_config)
}

/// Resolve the raw configuration for a run.
///
/// - An explicit path must exist and parse.
/// - Otherwise [`default_config_path`] is used when the file exists.
/// - Otherwise the built-in defaults apply.
pub fn load_raw_or_default(explicit: Option<&Path>) -> Result<RawConfigFile> {
    if let Some(path) = explicit {
        debug!(?path, "loading config file");
        return load_from_path(path);
    }

    let default_path = default_config_path();
    if default_path.is_file() {
        debug!(path = ?default_path, "loading default config file");
        return load_from_path(&default_path);
    }

    debug!("no config file; using built-in defaults");
    Ok(RawConfigFile::default())
}

/// `Bundlewatch.toml` in the current working directory.
pub fn default_config_path() -> PathBuf {
    PathBuf::from("Bundlewatch.toml")
}
