// src/watch/patterns.rs

use std::fmt;

use anyhow::{Context, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};

/// Default extension allow-list.
pub const DEFAULT_EXTENSIONS: &[&str] = &[".lua", ".luau"];

/// Decides which files under the watch root are tracked.
///
/// A file is tracked when its relative path ends with one of the allowed
/// extensions (case-sensitive suffix match) and no exclude glob matches it.
/// Paths passed to [`FileFilter::matches`] are relative to the watch root
/// with forward slashes, e.g. `"ui/button.lua"`.
#[derive(Clone)]
pub struct FileFilter {
    extensions: Vec<String>,
    exclude_set: Option<GlobSet>,
}

impl fmt::Debug for FileFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FileFilter")
            .field("extensions", &self.extensions)
            .finish_non_exhaustive()
    }
}

impl Default for FileFilter {
    fn default() -> Self {
        Self {
            extensions: DEFAULT_EXTENSIONS.iter().map(|s| s.to_string()).collect(),
            exclude_set: None,
        }
    }
}

impl FileFilter {
    /// Build a filter from an extension list and exclude globs.
    pub fn new(extensions: &[String], exclude: &[String]) -> Result<Self> {
        let exclude_set = if exclude.is_empty() {
            None
        } else {
            Some(build_globset(exclude).context("building exclude globset")?)
        };

        Ok(Self {
            extensions: extensions.to_vec(),
            exclude_set,
        })
    }

    pub fn extensions(&self) -> &[String] {
        &self.extensions
    }

    pub fn matches(&self, rel_path: &str) -> bool {
        if !self.extensions.iter().any(|ext| rel_path.ends_with(ext.as_str())) {
            return false;
        }
        if let Some(exclude) = &self.exclude_set {
            if exclude.is_match(rel_path) {
                return false;
            }
        }
        true
    }
}

/// Build a GlobSet from simple string patterns.
pub fn build_globset(patterns: &[String]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pat in patterns {
        let glob = Glob::new(pat).with_context(|| format!("invalid glob pattern: {pat}"))?;
        builder.add(glob);
    }
    Ok(builder.build()?)
}
