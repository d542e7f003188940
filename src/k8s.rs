use crate::errors::SearchError;
use k8s_openapi::api::apps::v1::DaemonSet;
use kube::{Api, Client, Config, api::ListParams, config::KubeConfigOptions};

/// Anything that can list daemon sets for a namespace and a pair of selectors.
///
/// An empty `namespace` means all namespaces. Empty selectors are not applied.
#[allow(async_fn_in_trait)]
pub trait DaemonSetSource {
    async fn list(
        &self,
        namespace: &str,
        label_selector: &str,
        field_selector: &str,
    ) -> Result<Vec<DaemonSet>, SearchError>;
}

/// Lists daemon sets straight from the API server.
pub struct KubeSource {
    client: Client,
}

impl KubeSource {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

impl DaemonSetSource for KubeSource {
    async fn list(
        &self,
        namespace: &str,
        label_selector: &str,
        field_selector: &str,
    ) -> Result<Vec<DaemonSet>, SearchError> {
        let api: Api<DaemonSet> = if namespace.is_empty() {
            Api::all(self.client.clone())
        } else {
            Api::namespaced(self.client.clone(), namespace)
        };

        let list = api
            .list(&list_params(label_selector, field_selector))
            .await
            .map_err(fetch_error)?;
        Ok(list.items)
    }
}

/// Keeps only the server's message for API errors, like `kubectl` prints them.
pub fn fetch_error(err: kube::Error) -> SearchError {
    match err {
        kube::Error::Api(status) if !status.message.is_empty() => SearchError::Fetch(status.message),
        other => SearchError::Fetch(other.to_string()),
    }
}

pub fn list_params(label_selector: &str, field_selector: &str) -> ListParams {
    let mut lp = ListParams::default();
    if !label_selector.is_empty() {
        lp = lp.labels(label_selector);
    }
    if !field_selector.is_empty() {
        lp = lp.fields(field_selector);
    }
    lp
}

/// Builds a client from the inferred config, or from the given kubeconfig context.
pub async fn create_client(context: Option<String>) -> Result<Client, SearchError> {
    match context {
        None => Ok(Client::try_default().await?),
        Some(context) => {
            let options = KubeConfigOptions {
                context: Some(context),
                cluster: None,
                user: None,
            };
            let config = Config::from_kubeconfig(&options).await?;
            Ok(Client::try_from(config)?)
        }
    }
}
