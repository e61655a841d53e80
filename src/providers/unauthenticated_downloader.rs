use bytes::Bytes;
use url::Url;

use crate::error::{Error, Result};

/// Plain HTTP(S) GET with no credentials, retries or timeouts.
pub struct UnauthenticatedDownloader {}

impl crate::providers::downloader::Downloader for UnauthenticatedDownloader {
    fn new() -> impl super::downloader::Downloader {
        UnauthenticatedDownloader {}
    }

    async fn download(&self, url: &Url) -> Result<Bytes> {
        let fetch_error = |source| Error::Fetch {
            url: url.to_string(),
            source,
        };
        let response = reqwest::get(url.clone()).await.map_err(fetch_error)?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::HttpStatus {
                url: url.to_string(),
                status,
            });
        }
        let bytes = response.bytes().await.map_err(fetch_error)?;
        tracing::debug!("fetched {} bytes from {}", bytes.len(), url);
        Ok(bytes)
    }
}
