use tracing_subscriber::EnvFilter;

/// Sends debug logs to stderr so stdout only ever carries the report.
pub fn init_logging(debug: bool) -> anyhow::Result<()> {
    if !debug {
        return Ok(());
    }

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .try_init()
        .map_err(|err| anyhow::anyhow!("failed to initialize logging: {err}"))?;

    tracing::debug!("Debug logging enabled");
    Ok(())
}
