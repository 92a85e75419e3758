//! Wormhole map client binary.
//!
//! Main entry point for the interactive hex map.
//!
//! # Architecture
//!
//! This binary is the composition root that assembles:
//! 1. MapHost (viewport, selection, sprites, redraw scheduling)
//! 2. Frontend (UI) - CLI, GUI, etc.
//!
//! # Features
//!
//! - `frontend-cli`: Terminal-based UI (default)
//!
//! # Examples
//!
//! ```bash
//! MAP_INITIAL_RADIUS=30 MAP_ZOOM_POLICY=fixed cargo run -p wormhole-client
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
        compile_error!("At least one frontend feature must be enabled (frontend-cli, etc.)");
    }

    Ok(())
}

/// Run the CLI frontend.
#[cfg(feature = "frontend-cli")]
async fn run_cli() -> Result<()> {
    use client_frontend_cli::{CliConfig, CliFrontend, FrontendConfig, logging, presentation};
    use wormhole_client::Client;

    // 1. Setup logging first so config warnings reach the log file
    let cli_config = CliConfig::from_env();
    let _log_guard = logging::setup_logging(&cli_config)?;

    // 2. Load map configuration from environment
    let frontend_config = FrontendConfig::from_env();

    tracing::info!("Starting wormhole client");
    tracing::info!(
        "Map: radius={}, zoom_policy={}, redraw={}, sprites={}",
        frontend_config.map.initial_radius,
        frontend_config.map.zoom_policy,
        frontend_config.redraw.mode,
        frontend_config.sprites.len()
    );

    // 3. Build Client (composition layer)
    tracing::debug!("Building CLI frontend...");
    let client = Client::builder()
        .config(frontend_config)
        .style(presentation::theme::map_style())
        .frontend(CliFrontend::new(cli_config))
        .build()?;

    tracing::info!("Client assembled, starting...");
    client.run().await?;

    tracing::info!("Client shutdown complete");
    Ok(())
}
