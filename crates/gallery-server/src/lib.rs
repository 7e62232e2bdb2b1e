//! gallery-server: HTTP API server for the Gallery API
//!
//! This crate provides the REST endpoints for the paintings resource:
//! create, read-one, read-all, and delete.
//!
//! # Architecture
//!
//! The server is built on Axum with a middleware stack for:
//! - Request tracing and logging
//! - CORS handling
//! - Request ID generation
//!
//! Handlers hold no cross-request state; everything lives in the store.
//! Every persistence failure is caught at the handler boundary and
//! converted to a status code.
//!
//! # Usage
//!
//! ```rust,ignore
//! use gallery_server::{config::ServerConfig, routes, state::AppState};
//! use gallery_store::{Store, StoreConfig};
//!
//! let config = ServerConfig::from_env()?;
//! let store = Store::connect(StoreConfig::from_env()?).await?;
//! let app = routes::build_router(AppState::new(store, config));
//! ```

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

// Re-exports for convenience
pub use config::{ConfigError, ServerConfig};
pub use error::{ApiError, ApiResult};
pub use state::AppState;

// Re-export dependent crates
pub use gallery_store;
