//! Quest game client binary.
//!
//! Main entry point: installs file logging, loads configuration, and hands
//! control to the selected frontend.
//!
//! # Features
//!
//! - `frontend-cli`: Terminal-based UI (default)
//!
//! # Examples
//!
//! ```bash
//! # Pick a hero on the selection screen
//! cargo run -p quest-client
//!
//! # Skip selection and replay a fixed seed
//! QUEST_HERO=archer QUEST_SEED=42 cargo run -p quest-client
//! ```

use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    #[cfg(feature = "frontend-cli")]
    {
        run_cli().await?;
    }

    #[cfg(not(feature = "frontend-cli"))]
    {
        compile_error!("At least one frontend feature must be enabled (frontend-cli, ...)");
    }

    Ok(())
}

/// Run the CLI frontend.
#[cfg(feature = "frontend-cli")]
async fn run_cli() -> Result<()> {
    use client_bootstrap::ClientConfig;
    use client_frontend_cli::{CliConfig, CliFrontend, FrontendConfig, logging};
    use quest_client::Client;

    // 1. Setup logging first so config warnings land in the log file;
    // the guard flushes it on exit
    let _log_guard = logging::setup_logging()?;

    tracing::info!("Starting Quest client");

    // 2. Load configuration from environment
    let client_config = ClientConfig::from_env();
    let frontend_config = FrontendConfig::from_env();
    let cli_config = CliConfig::from_env();

    tracing::info!(
        hero = ?client_config.hero,
        seed = ?client_config.seed,
        tick_rate = client_config.tick_rate,
        "client configuration loaded"
    );

    // 3. Build Frontend
    let frontend = CliFrontend::new(frontend_config, cli_config, client_config.frame_interval());

    // 4. Build and run
    let client = Client::builder()
        .config(client_config)
        .frontend(frontend)
        .build()?;

    client.run().await?;

    tracing::info!("Client shutdown complete");
    Ok(())
}
