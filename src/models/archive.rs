use crate::error::{Error, Result};

/// A file to fetch together with the digest it must hash to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveDescriptor {
    pub filename: String,
    pub checksum: String,
}

impl ArchiveDescriptor {
    /// Pairs up two parallel lists. Unequal lengths are a configuration error,
    /// not a silent truncation.
    pub fn pair<F, C>(filenames: &[F], checksums: &[C]) -> Result<Vec<ArchiveDescriptor>>
    where
        F: AsRef<str>,
        C: AsRef<str>,
    {
        if filenames.len() != checksums.len() {
            return Err(Error::LengthMismatch {
                files: filenames.len(),
                checksums: checksums.len(),
            });
        }
        Ok(filenames
            .iter()
            .zip(checksums)
            .map(|(filename, checksum)| ArchiveDescriptor {
                filename: filename.as_ref().to_string(),
                checksum: checksum.as_ref().to_string(),
            })
            .collect())
    }

    pub fn is_tar_gz(&self) -> bool {
        self.filename.ends_with(".tgz") || self.filename.ends_with(".tar.gz")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileStatus {
    Ok,
    Bad,
}

impl std::fmt::Display for FileStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FileStatus::Ok => write!(f, "OK"),
            FileStatus::Bad => write!(f, "BAD"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    pub filename: String,
    pub status: FileStatus,
    pub fetched: bool,
    pub extracted: bool,
}
