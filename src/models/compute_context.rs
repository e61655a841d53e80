/// Master string Spark uses for a local, all-cores session.
pub const LOCAL_MASTER: &str = "local[*]";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContextKind {
    Spark,
    Other(String),
}

/// Handle to a running distributed-compute session.
pub trait ComputeContext {
    fn kind(&self) -> ContextKind;

    /// Address of the cluster's control plane, e.g. `spark://host:7077`.
    fn master(&self) -> &str;
}

#[derive(Debug, Clone)]
pub struct SparkContext {
    pub master: String,
}

impl SparkContext {
    pub fn new(master: impl Into<String>) -> Self {
        SparkContext {
            master: master.into(),
        }
    }

    pub fn local() -> Self {
        SparkContext::new(LOCAL_MASTER)
    }
}

impl ComputeContext for SparkContext {
    fn kind(&self) -> ContextKind {
        ContextKind::Spark
    }

    fn master(&self) -> &str {
        &self.master
    }
}
