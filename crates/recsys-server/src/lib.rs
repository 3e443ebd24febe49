//! recsys-server: HTTP API for the recommendation engine.
//!
//! This crate provides:
//! - `GET /health` - readiness and cache status
//! - `POST /load-products` - replace the cached catalog/index pair
//! - `POST /recommendations` - serve a query from the cache
//!
//! # Architecture
//!
//! The server is built on Axum with a middleware stack for request
//! tracing, CORS handling, request ID generation, and JSON error
//! responses. All handlers share one [`state::AppState`] holding the
//! engine; the catalog cache inside it is the only mutable state in the
//! process.
//!
//! # Usage
//!
//! ```rust,ignore
//! use recsys_server::config::ServerConfig;
//!
//! let config = ServerConfig::from_env()?;
//! // see main.rs for the full serve loop
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
