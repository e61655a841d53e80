use std::{
    fs::File,
    io::BufReader,
    path::{Component, Path},
};

use flate2::read::GzDecoder;

use crate::error::{Error, Result};

pub struct TarGzExtractor {}

impl crate::providers::extractor::Extractor for TarGzExtractor {
    fn new() -> impl crate::providers::extractor::Extractor {
        TarGzExtractor {}
    }

    async fn extract_to_disk(&self, archive: &Path, folder: &Path) -> Result<()> {
        let archive = archive.to_path_buf();
        let folder = folder.to_path_buf();
        tokio::task::spawn_blocking(move || -> Result<()> {
            check_entries(&archive)?;
            let mut tar = open(&archive)?;
            tar.set_preserve_permissions(false);
            tar.set_unpack_xattrs(false);
            tar.unpack(&folder).map_err(Error::io(&archive))?;
            tracing::info!("extracted {} into {}", archive.display(), folder.display());
            Ok(())
        })
        .await?
    }
}

fn open(archive: &Path) -> Result<tar::Archive<GzDecoder<BufReader<File>>>> {
    let file = File::open(archive).map_err(Error::io(archive))?;
    Ok(tar::Archive::new(GzDecoder::new(BufReader::new(file))))
}

/// Walks the whole archive once and refuses it if any member, or any link
/// target, would land outside the destination.
fn check_entries(archive: &Path) -> Result<()> {
    let unsafe_entry = |entry: &Path| Error::UnsafeArchiveEntry {
        archive: archive.to_path_buf(),
        entry: entry.display().to_string(),
    };

    let mut tar = open(archive)?;
    for entry in tar.entries().map_err(Error::io(archive))? {
        let entry = entry.map_err(Error::io(archive))?;
        let path = entry.path().map_err(Error::io(archive))?.into_owned();
        if !is_plain_relative(&path) {
            return Err(unsafe_entry(&path));
        }

        let entry_type = entry.header().entry_type();
        if entry_type.is_symlink() || entry_type.is_hard_link() {
            let Some(target) = entry.link_name().map_err(Error::io(archive))? else {
                continue;
            };
            // Symlinks resolve against their own directory, hard links against the root.
            let resolved = if entry_type.is_symlink() {
                path.parent().unwrap_or(Path::new("")).join(&target)
            } else {
                target.into_owned()
            };
            if !stays_inside(&resolved) {
                return Err(unsafe_entry(&path));
            }
        }
    }
    Ok(())
}

fn is_plain_relative(path: &Path) -> bool {
    path.components()
        .all(|c| matches!(c, Component::Normal(_) | Component::CurDir))
}

fn stays_inside(path: &Path) -> bool {
    let mut depth: usize = 0;
    for component in path.components() {
        match component {
            Component::Normal(_) => depth += 1,
            Component::CurDir => {}
            Component::ParentDir => match depth.checked_sub(1) {
                Some(parent) => depth = parent,
                None => return false,
            },
            Component::RootDir | Component::Prefix(_) => return false,
        }
    }
    true
}
