use clap::Parser;
use roster_server::{server, ServerConfig, ServerResult};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ServerResult<()> {
    let config = ServerConfig::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("roster_server=debug,tower_http=debug")),
        )
        .init();

    server::run(config).await
}
