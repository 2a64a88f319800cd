use anyhow::Result;
use blackmail_check::{config, server};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let config = match config::load().await {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    let level = match config.server.logs.level_filter() {
        Ok(level) => level,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    // RUST_LOG takes full directives; the config file only names a level.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::default().add_directive(level.into()));

    tracing_subscriber::fmt().with_env_filter(filter).json().init();

    info!(
        model = %config.llm.model,
        base_url = %config.llm.base_url,
        "blackmail-check starting"
    );

    server::run(config).await?;

    Ok(())
}
