use anyhow::Context;
use link_inspector::{config, logging, server};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = config::load_from_env().context("Invalid configuration")?;

    logging::init_logging(&config.log_level, &config.log_format)?;
    tracing::info!("link-inspector v{} starting", env!("CARGO_PKG_VERSION"));
    config.print_summary();

    server::run(config).await
}
