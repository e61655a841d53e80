use std::path::Path;

use url::Url;

use crate::error::{Error, Result};
use crate::models::archive::{ArchiveDescriptor, FileReport, FileStatus};
use crate::providers::{checksum, downloader::Downloader, extractor::Extractor};

/// Fetches dataset files into a directory, checks their digests and unpacks
/// the tarballs that pass. Items are handled strictly one after another.
pub struct ArchiveAcquirer<D, E> {
    downloader: D,
    extractor: E,
}

impl<D: Downloader, E: Extractor> ArchiveAcquirer<D, E> {
    pub fn new(downloader: D, extractor: E) -> Self {
        ArchiveAcquirer {
            downloader,
            extractor,
        }
    }

    pub async fn acquire<F, C>(
        &self,
        directory: &Path,
        base_url: &str,
        filenames: &[F],
        checksums: &[C],
    ) -> Result<Vec<FileReport>>
    where
        F: AsRef<str>,
        C: AsRef<str>,
    {
        let descriptors = ArchiveDescriptor::pair(filenames, checksums)?;
        self.acquire_all(directory, base_url, &descriptors, |_| {}).await
    }

    /// Like `acquire`, but hands each report to `on_report` as soon as the
    /// item is done, so earlier results are seen even if a later item fails.
    pub async fn acquire_all<R>(
        &self,
        directory: &Path,
        base_url: &str,
        descriptors: &[ArchiveDescriptor],
        mut on_report: R,
    ) -> Result<Vec<FileReport>>
    where
        R: FnMut(&FileReport),
    {
        let base_url = Url::parse(base_url).map_err(|source| Error::InvalidUrl {
            url: base_url.to_string(),
            source,
        })?;

        tokio::fs::create_dir_all(directory)
            .await
            .map_err(Error::io(directory))?;

        let mut reports = Vec::with_capacity(descriptors.len());
        for descriptor in descriptors {
            let report = self.acquire_one(directory, &base_url, descriptor).await?;
            on_report(&report);
            reports.push(report);
        }
        Ok(reports)
    }

    async fn acquire_one(
        &self,
        directory: &Path,
        base_url: &Url,
        descriptor: &ArchiveDescriptor,
    ) -> Result<FileReport> {
        let target = directory.join(&descriptor.filename);

        let fetched = if tokio::fs::try_exists(&target)
            .await
            .map_err(Error::io(&target))?
        {
            tracing::info!(
                "{} already present, re-checking its checksum",
                target.display()
            );
            false
        } else {
            let url = base_url
                .join(&descriptor.filename)
                .map_err(|source| Error::InvalidUrl {
                    url: format!("{}{}", base_url, descriptor.filename),
                    source,
                })?;
            tracing::info!("downloading {} to {}", url, target.display());
            let content = self.downloader.download(&url).await?;
            tokio::fs::write(&target, &content)
                .await
                .map_err(Error::io(&target))?;
            true
        };

        let status = if checksum::verify_file(&target, &descriptor.checksum).await? {
            tracing::info!("{}: OK", descriptor.filename);
            FileStatus::Ok
        } else {
            tracing::warn!(
                "{}: BAD (expected checksum {}), skipping",
                descriptor.filename,
                descriptor.checksum
            );
            FileStatus::Bad
        };

        let extracted = status == FileStatus::Ok && descriptor.is_tar_gz();
        if extracted {
            self.extractor.extract_to_disk(&target, directory).await?;
        }

        Ok(FileReport {
            filename: descriptor.filename.clone(),
            status,
            fetched,
            extracted,
        })
    }
}
