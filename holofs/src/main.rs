use anyhow::Context;
use client::MessagesClient;
use holofs::settings::Settings;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    info!("Initializing holofs");

    let settings = Settings::load().context("Failed to load settings")?;
    let client = MessagesClient::new(settings.client)?;

    let mut stdout = std::io::stdout().lock();
    holofs::run(&client, &mut stdout).await
}
