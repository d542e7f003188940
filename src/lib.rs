//! Search Kubernetes resources by keyword and print them `kubectl get` style.

pub mod commands;
pub mod errors;
pub mod k8s;
pub mod logging;
pub mod models;
pub mod utils;

pub use errors::SearchError;
pub use k8s::{DaemonSetSource, KubeSource};
pub use models::{Age, AgeUnit, Query, ReportRow};
