use bytes::Bytes;
use url::Url;

use crate::error::Result;

pub trait Downloader {
    fn new() -> impl Downloader;

    fn download(&self, url: &Url) -> impl std::future::Future<Output = Result<Bytes>> + Send;
}
