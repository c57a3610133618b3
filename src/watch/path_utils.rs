// src/watch/path_utils.rs

use std::path::Path;

/// Convert a path into a string relative to `root`, with forward slashes.
///
/// Returns `None` if `path` does not live under `root`, or if the relative
/// part is not valid UTF-8. A lossy conversion could give two distinct names
/// the same snapshot key and hide a change, so such files are left untracked.
/// No canonicalisation is attempted; the scanner only produces paths by
/// joining onto `root`.
pub fn relative_str(root: &Path, path: &Path) -> Option<String> {
    let rel = path.strip_prefix(root).ok()?;
    Some(rel.to_str()?.replace('\\', "/"))
}
