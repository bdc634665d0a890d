//! SHA-256 of fetched documents.
//!
//! Hashing is done while the stream is copied out so a document is only
//! read once.

use anyhow::{Context, Result};
use sha2::{Digest, Sha256};
use std::fs::File;
use std::io::{self, Read, Write};
use std::path::Path;

const BUF_SIZE: usize = 64 * 1024;

/// Copy `reader` into `writer`, returning the byte count and lowercase hex SHA-256.
pub fn copy_with_sha256<R: Read, W: Write>(reader: &mut R, writer: &mut W) -> io::Result<(u64, String)> {
    let mut hasher = Sha256::new();
    let mut buf = vec![0u8; BUF_SIZE];
    let mut total = 0u64;
    loop {
        let n = match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        hasher.update(&buf[..n]);
        writer.write_all(&buf[..n])?;
        total += n as u64;
    }
    writer.flush()?;
    Ok((total, hex::encode(hasher.finalize())))
}

/// Compute SHA-256 of a file and return the digest as lowercase hex.
pub fn sha256_path(path: &Path) -> Result<String> {
    let mut f = File::open(path).with_context(|| format!("open {}", path.display()))?;
    let (_, digest) = copy_with_sha256(&mut f, &mut io::sink())
        .with_context(|| format!("read {}", path.display()))?;
    Ok(digest)
}
