// src/watch/hash.rs

use std::fmt;
use std::io::{self, Read};
use std::path::Path;

use blake3::Hasher;

use crate::fs::FileSystem;

/// Content fingerprint of a single file: lowercase hex of a 256-bit BLAKE3
/// digest over the full byte content.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Fingerprint(String);

impl Fingerprint {
    /// Fingerprint an in-memory buffer.
    pub fn of_bytes(bytes: &[u8]) -> Self {
        Fingerprint(blake3::hash(bytes).to_hex().to_string())
    }

    pub fn as_hex(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Compute the fingerprint of a single file, streaming its content.
pub fn compute_file_hash(fs: &dyn FileSystem, path: &Path) -> io::Result<Fingerprint> {
    let mut hasher = Hasher::new();
    let mut file = fs.open_read(path)?;
    let mut buf = [0u8; 8192];
    loop {
        let n = file.read(&mut buf)?;
        if n == 0 {
            break;
        }
        hasher.update(&buf[..n]);
    }
    Ok(Fingerprint(hasher.finalize().to_hex().to_string()))
}
