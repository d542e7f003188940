use kube::config::KubeconfigError;

/// Errors that end a search run.
#[derive(thiserror::Error, Debug)]
pub enum SearchError {
    /// The list call against the API server failed.
    #[error("{0}")]
    Fetch(String),

    /// Kubernetes client creation error
    #[error("{0}")]
    Client(#[from] kube::Error),

    /// Kubeconfig could not be loaded for the requested context
    #[error("{0}")]
    Kubeconfig(#[from] KubeconfigError),

    /// Report could not be written out
    #[error("{0}")]
    Io(#[from] std::io::Error),
}
