use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

use gridbook::record::Ledger;
use gridbook::server;
use gridbook::settings::Settings;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // An optional first argument names the config file to read.
    let config_path = std::env::args().nth(1);
    let settings = Settings::load(config_path.as_deref())?;
    info!(address = %settings.listen_address, "starting gridbook");

    let ledger = Arc::new(Ledger::new());
    server::serve(ledger, &settings.listen_address).await?;
    Ok(())
}
