pub mod downloader;
pub mod unauthenticated_downloader;

pub mod extractor;
pub mod tar_gz_extractor;

pub mod acquirer;
pub mod checksum;
pub mod dashboard;
pub mod url_decomposer;
