//! # item-sync-provider
//!
//! Client for a remote item collection exposed over a REST-style JSON API.
//!
//! ## Endpoints
//!
//! | Operation | Request | Success |
//! |-----------|---------|---------|
//! | List | `GET /items` | `200` + `[{id, name}, ...]` |
//! | Get one | `GET /items/{id}` | `200` + `{id, name}` |
//! | Create | `POST /items` with `{name}` | any `2xx` |
//! | Update | `PUT /items/{id}` with `{name}` | any `2xx` |
//! | Delete | `DELETE /items/{id}` | any `2xx` |
//!
//! Anything else, including transport failures, is a [`ResourceError`].
//!
//! ## Feature Flags
//!
//! - **`native-tls`** *(default)*: use the platform's native TLS implementation.
//! - **`rustls`**: use rustls. Recommended for cross-compilation.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use item_sync_provider::{ItemPayload, ItemResource, RestItemResource};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let resource = RestItemResource::new("http://localhost:3000/items")?;
//!
//!     resource.create_item(&ItemPayload::new("Milk")).await?;
//!
//!     for item in resource.list_items().await? {
//!         println!("{} {}", item.id, item.name);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Every operation returns [`Result<T, ResourceError>`](ResourceError). There are
//! no automatic retries: a failed call is reported once and the caller decides
//! what to do.

mod error;
mod http_client;
mod rest;
mod traits;
mod types;
mod utils;

// Re-export error types
pub use error::{ResourceError, Result};

// Re-export the public trait (internal traits are not exported)
pub use traits::ItemResource;

// Re-export the REST implementation
pub use rest::{ClientOptions, DEFAULT_BASE_URL, RestItemResource};

// Re-export types
pub use types::{Item, ItemId, ItemPayload};

// Re-export log helpers for front-ends that log item names
pub use utils::log_sanitizer::sanitize_for_log;
