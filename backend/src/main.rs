use backend::{server, telemetry, Config};
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present, so its values act as environment defaults
    dotenvy::dotenv().ok();

    let config = Config::parse();

    telemetry::init(&config.log_level, config.log_format)?;

    if config.dev_mode {
        tracing::warn!("DEV MODE ENABLED");
    }

    let listener = server::bind(&config.addr()).await?;
    tracing::info!(
        title = %config.title,
        "Listening on {}",
        listener.local_addr()?
    );

    server::serve(listener, backend::router()).await?;

    tracing::info!("Server shut down");
    Ok(())
}
