use std::path::Path;

use sha2::Digest;
use tokio::io::AsyncReadExt;

use crate::error::{Error, Result};

const CHUNK_SIZE: usize = 4096;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChecksumAlgorithm {
    Md5,
    Sha256,
}

impl ChecksumAlgorithm {
    /// Picks the algorithm from the length of the expected hex digest.
    /// Anything that is not a SHA-256 digest is checked as MD5.
    pub fn for_digest(expected: &str) -> ChecksumAlgorithm {
        if expected.len() == 64 {
            ChecksumAlgorithm::Sha256
        } else {
            ChecksumAlgorithm::Md5
        }
    }

    pub async fn hash_file(&self, path: &Path) -> Result<String> {
        match self {
            ChecksumAlgorithm::Md5 => digest_file::<md5::Md5>(path).await,
            ChecksumAlgorithm::Sha256 => digest_file::<sha2::Sha256>(path).await,
        }
    }
}

async fn digest_file<D: Digest>(path: &Path) -> Result<String> {
    let mut file = tokio::fs::File::open(path).await.map_err(Error::io(path))?;
    let mut hasher = D::new();
    let mut buffer = [0u8; CHUNK_SIZE];
    loop {
        let read = file.read(&mut buffer).await.map_err(Error::io(path))?;
        if read == 0 {
            break;
        }
        hasher.update(&buffer[..read]);
    }
    Ok(hex::encode(hasher.finalize()))
}

/// Hashes `path` with the algorithm implied by `expected` and compares,
/// ignoring hex case.
pub async fn verify_file(path: &Path, expected: &str) -> Result<bool> {
    let expected = expected.trim();
    let actual = ChecksumAlgorithm::for_digest(expected).hash_file(path).await?;
    Ok(actual.eq_ignore_ascii_case(expected))
}
