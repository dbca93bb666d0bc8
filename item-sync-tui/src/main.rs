//! Item Sync terminal front-end
//!
//! Elm-style layering:
//!
//! - `event`: terminal events -> messages
//! - `message`: what the user asked for
//! - `update`: applies messages; remote work goes through the controller
//! - `model`: plain application state
//! - `view`: draws the model
//! - `backend`: config file, controller construction, controller surface
//! - `util`: terminal and log setup

mod app;
mod backend;
mod event;
pub mod i18n;
mod message;
mod model;
mod update;
mod util;
mod view;

use anyhow::Result;

use backend::{create_controller, ConfigService, JsonConfigService, BASE_URL_ENV};
use util::{init_logging, init_terminal, restore_terminal};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let log_path = init_logging()?;
    tracing::info!("Item Sync v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::debug!("Logging to {}", log_path.display());

    // Configuration: file, then environment
    let config_service = JsonConfigService::new();
    let mut config = config_service.load()?;
    if !config_service.exists() {
        if let Err(e) = config_service.save(&config) {
            log::warn!("Could not write default config: {e:#}");
        }
    }
    config.apply_env_override(std::env::var(BASE_URL_ENV).ok());
    log::info!(
        "Config {} (language {}, base URL {})",
        config_service.path().display(),
        config.language().code(),
        config.base_url
    );

    i18n::set_language(config.language());
    view::theme::set_theme(config.theme);

    let mut ctrl = create_controller(&config)?;

    let mut terminal = init_terminal()?;
    let mut app = model::App::new();

    let result = app::run(&mut terminal, &mut app, &mut ctrl).await;

    // Restore even when the loop failed
    restore_terminal(&mut terminal)?;

    if let Err(ref e) = result {
        tracing::error!("Exited with error: {e:#}");
    }
    result
}
