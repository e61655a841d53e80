//! Helpers for course notebooks: fetch and verify dataset archives, split
//! URI-like strings, and find the Spark application dashboard.

pub mod error;
pub mod logging;
pub mod models;
pub mod providers;

pub use error::{Error, Result};
pub use models::compute_context::{ComputeContext, ContextKind, SparkContext};
pub use models::url_components::{UrlComponents, UrlMatch};
pub use providers::acquirer::ArchiveAcquirer;
pub use providers::dashboard::app_dashboard_url;
pub use providers::url_decomposer::decompose;
