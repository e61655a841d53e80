use std::path::Path;

use crate::error::Result;

pub trait Extractor {
    fn new() -> impl Extractor;

    /// Unpacks `archive` into `folder`. The process working directory is left alone.
    fn extract_to_disk(
        &self,
        archive: &Path,
        folder: &Path,
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}
