use crate::errors::SearchError;
use crate::k8s::DaemonSetSource;
use crate::models::{Query, ReportRow};
use crate::utils;
use k8s_openapi::api::apps::v1::DaemonSet;
use k8s_openapi::jiff::Timestamp;
use std::io::Write;

pub async fn run<S: DaemonSetSource>(source: &S, query: &Query) -> Result<(), SearchError> {
    let pb = utils::create_spinner("Fetching daemonsets...");
    let report = report(source, query, Timestamp::now()).await;
    pb.finish_and_clear();

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(report?.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

/// Fetches daemon sets for `query` and renders them as a table, ages measured at `now`.
pub async fn report<S: DaemonSetSource>(
    source: &S,
    query: &Query,
    now: Timestamp,
) -> Result<String, SearchError> {
    tracing::debug!(
        namespace = %query.namespace,
        label_selector = %query.label_selector,
        field_selector = %query.field_selector,
        keyword = %query.keyword,
        wide = query.wide,
        "Listing daemonsets"
    );

    let items = source
        .list(&query.namespace, &query.label_selector, &query.field_selector)
        .await
        .inspect_err(|err| tracing::error!("Failed to list daemonsets: {err}"))?;
    let fetched = items.len();

    let rows: Vec<Vec<String>> = items
        .iter()
        .filter(|ds| query.matches(ds.metadata.name.as_deref().unwrap_or_default()))
        .map(|ds| to_row(ds, now).cells(query.wide))
        .collect();

    tracing::debug!("Matched {} of {} daemonsets", rows.len(), fetched);
    Ok(utils::render_table(query.header(), rows))
}

pub fn to_row(ds: &DaemonSet, now: Timestamp) -> ReportRow {
    let pod_spec = ds.spec.as_ref().and_then(|s| s.template.spec.as_ref());
    let containers = pod_spec.map(|p| p.containers.as_slice()).unwrap_or_default();
    let status = ds.status.as_ref();

    ReportRow {
        namespace: ds.metadata.namespace.clone().unwrap_or_default(),
        name: ds.metadata.name.clone().unwrap_or_default(),
        desired: status.map(|s| s.desired_number_scheduled).unwrap_or_default(),
        current: status.map(|s| s.number_ready).unwrap_or_default(),
        up_to_date: status.and_then(|s| s.updated_number_scheduled).unwrap_or_default(),
        available: status.and_then(|s| s.number_available).unwrap_or_default(),
        node_selector: utils::join_selector(pod_spec.and_then(|p| p.node_selector.as_ref())),
        age: utils::age_since(ds.metadata.creation_timestamp.as_ref(), now),
        containers: containers
            .iter()
            .map(|c| c.name.as_str())
            .collect::<Vec<_>>()
            .join(","),
        images: containers
            .iter()
            .map(|c| c.image.as_deref().unwrap_or_default())
            .collect::<Vec<_>>()
            .join(","),
        selector: utils::join_selector(
            ds.spec.as_ref().and_then(|s| s.selector.match_labels.as_ref()),
        ),
    }
}
