use clap::{Parser, Subcommand};
use kubectl_search::commands;
use kubectl_search::k8s::{self, KubeSource};
use kubectl_search::logging;
use kubectl_search::models::Query;
use kubectl_search::utils;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "kubectl-search", about = "Search Kubernetes resources by keyword", author, version, long_about = None)]
struct Cli {
    /// Enable debug logging on stderr
    #[arg(long, short = 'd', global = true, env = "KUBECTL_SEARCH_DEBUG")]
    debug: bool,

    /// Kubeconfig context to use instead of the current one
    #[arg(long, global = true, env = "KUBECTL_SEARCH_CONTEXT")]
    context: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search daemonsets whose name contains the keyword
    #[command(visible_alias = "ds")]
    Daemonsets {
        /// Substring the daemonset name must contain (case-sensitive)
        #[arg(default_value = "")]
        keyword: String,
        /// Target namespace. Falls back to "default" when empty.
        #[arg(short, long, default_value = "", env = "KUBECTL_SEARCH_NAMESPACE")]
        namespace: String,
        /// Search across all namespaces, overrides --namespace
        #[arg(short = 'A', long, default_value_t = false)]
        all_namespaces: bool,
        /// Label selector, e.g. -l app=fluentd
        #[arg(short = 'l', long, default_value = "", env = "KUBECTL_SEARCH_SELECTOR")]
        selector: String,
        /// Field selector, e.g. --field-selector metadata.name=fluentd
        #[arg(long, default_value = "", env = "KUBECTL_SEARCH_FIELD_SELECTOR")]
        field_selector: String,
        /// Show containers, images and the pod selector as well
        #[arg(short, long, default_value_t = false)]
        wide: bool,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    logging::init_logging(cli.debug)?;

    // 1. Initialize Crypto (no-op if a provider is already installed)
    let _ = rustls::crypto::ring::default_provider().install_default();

    // 2. Initialize Client
    let pb = utils::create_spinner("Initializing Kubernetes client...");
    let client = k8s::create_client(cli.context)
        .await
        .inspect_err(|err| tracing::error!("Failed to create kubernetes client: {err}"));
    pb.finish_and_clear();

    // 3. Run the search
    let result = match client {
        Ok(client) => {
            let source = KubeSource::new(client);
            match cli.command {
                Commands::Daemonsets { keyword, namespace, all_namespaces, selector, field_selector, wide } => {
                    let query = Query::new(namespace, all_namespaces, selector, field_selector, keyword, wide);
                    commands::daemonsets::run(&source, &query).await
                }
            }
        }
        Err(err) => Err(err),
    };

    Ok(ExitCode::from(commands::finish(result, &mut std::io::stdout())))
}
