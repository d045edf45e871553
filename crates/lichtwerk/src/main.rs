use std::sync::Arc;

use lichtwerk::config::SiteConfig;
use lichtwerk::error::{SiteError, SiteResult};
use lichtwerk::report::{self, ErrorReporter};
use lichtwerk::server::Server;

fn main() -> SiteResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = SiteConfig::from_env()?;

    // The reporter and hook are set up before the runtime so the blocking
    // HTTP client never touches an async worker thread.
    let reporter = Arc::new(ErrorReporter::new(config.report.as_ref()));
    if reporter.enabled() {
        tracing::info!("crash reporting enabled");
    }
    report::install_panic_hook(reporter);

    let runtime = tokio::runtime::Runtime::new()
        .map_err(|error| SiteError::Internal(error.to_string()))?;
    runtime.block_on(async move {
        let server = Server::start(config).await.map_err(SiteError::Internal)?;
        tracing::info!("lichtwerk site up on http://{}", server.addr());
        tokio::signal::ctrl_c()
            .await
            .map_err(|error| SiteError::Internal(error.to_string()))?;
        tracing::info!("shutting down");
        Ok(())
    })
}
