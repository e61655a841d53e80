use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::models::archive::ArchiveDescriptor;

/// Dataset manifest consumed by `nbhelper fetch`.
#[derive(Debug, serde::Deserialize, serde::Serialize)]
pub struct Manifest {
    pub directory: String,
    #[serde(rename = "baseUrl")]
    pub base_url: String,
    pub files: Vec<String>,
    pub checksums: Vec<String>,
}

impl Manifest {
    /// Expands `~` and anchors a relative `directory` at `base_dir`.
    pub fn resolve_directory(&self, base_dir: &Path) -> PathBuf {
        let binding = shellexpand::tilde(&self.directory);
        let directory = Path::new(binding.as_ref());
        if directory.is_absolute() {
            directory.to_path_buf()
        } else {
            base_dir.join(directory)
        }
    }

    pub fn descriptors(&self) -> Result<Vec<ArchiveDescriptor>> {
        ArchiveDescriptor::pair(&self.files, &self.checksums)
    }
}

pub async fn read_yaml_file(path: &Path) -> Result<Manifest> {
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(Error::io(path))?;
    serde_yaml::from_str(&content).map_err(|source| Error::Manifest {
        path: path.to_path_buf(),
        source,
    })
}
