use std::sync::Arc;

use vodia_api::setup;
use vodia_api::state::AppState;
use vodia_api::telemetry;
use vodia_core::Config;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    // Missing Bunny Stream credentials are fatal here, never per-call.
    let config = Config::from_env()?;

    telemetry::init_telemetry();

    let state = Arc::new(AppState::new(config.clone())?);
    let router = setup::setup_routes(&config, state)?;

    setup::server::start_server(&config, router).await?;

    Ok(())
}
