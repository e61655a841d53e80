use crate::error::{Error, Result};
use crate::models::compute_context::{ComputeContext, ContextKind, LOCAL_MASTER};
use crate::providers::url_decomposer::decompose;

/// Port the Spark application UI listens on by default.
pub const DEFAULT_UI_PORT: u16 = 4040;

/// Derives the application dashboard address from the context's master
/// string. Nothing is contacted.
pub fn app_dashboard_url(context: &dyn ComputeContext) -> Result<String> {
    let master = context.master();
    if context.kind() != ContextKind::Spark || master.is_empty() {
        return Err(Error::InvalidArgument(
            "app_dashboard_url requires a Spark context with a master address".to_string(),
        ));
    }

    if master == LOCAL_MASTER {
        return Ok(format!("http://localhost:{}", DEFAULT_UI_PORT));
    }

    match decompose(master).host() {
        Some(host) if !host.is_empty() => Ok(format!("http://{}:{}", host, DEFAULT_UI_PORT)),
        _ => Err(Error::InvalidArgument(format!(
            "cannot find a host in master address {:?}",
            master
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::compute_context::SparkContext;

    struct DaskClient {
        scheduler: String,
    }

    impl ComputeContext for DaskClient {
        fn kind(&self) -> ContextKind {
            ContextKind::Other("dask".to_string())
        }

        fn master(&self) -> &str {
            &self.scheduler
        }
    }

    #[test]
    fn test_local_master() {
        let url = app_dashboard_url(&SparkContext::local()).unwrap();
        assert_eq!(url, "http://localhost:4040");
    }

    #[test]
    fn test_cluster_master() {
        // Arrange
        let context = SparkContext::new("spark://clusterhost:7077");

        // Act
        let url = app_dashboard_url(&context).unwrap();

        // Assert
        assert_eq!(url, "http://clusterhost:4040");
    }

    #[test]
    fn test_cluster_master_with_trailing_newline() {
        let url = app_dashboard_url(&SparkContext::new("spark://clusterhost:7077\n")).unwrap();
        assert_eq!(url, "http://clusterhost:4040");
    }

    #[test]
    fn test_bare_host_master() {
        let url = app_dashboard_url(&SparkContext::new("yarn")).unwrap();
        assert_eq!(url, "http://yarn:4040");
    }

    #[test]
    fn test_empty_master() {
        let result = app_dashboard_url(&SparkContext::new(""));
        assert!(matches!(result, Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn test_foreign_context() {
        // Arrange
        let context = DaskClient {
            scheduler: "tcp://scheduler:8786".to_string(),
        };

        // Act
        let result = app_dashboard_url(&context);

        // Assert
        assert!(matches!(result, Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn test_master_without_host() {
        let result = app_dashboard_url(&SparkContext::new("spark://:7077"));
        assert!(matches!(result, Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn test_unparseable_master() {
        let result = app_dashboard_url(&SparkContext::new("spark://host\n:7077"));
        assert!(matches!(result, Err(Error::InvalidArgument(_))));
    }
}
