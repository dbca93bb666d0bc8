//! Backend layer: configuration and the bridge to the item sync core
//!
//! - `config_service`: JSON config file (`ConfigService`, `JsonConfigService`)
//! - `core_service`: builds the `ItemSyncController` from the config
//! - `surface`: `TuiSurface`, the core's list/form/notice traits over `App`

mod config_service;
mod core_service;
mod surface;

pub use config_service::{AppConfig, ConfigService, JsonConfigService, BASE_URL_ENV};
pub use core_service::create_controller;
pub use surface::TuiSurface;
