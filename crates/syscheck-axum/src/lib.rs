//! Axum web adapter for syscheck.
//!
//! Exposes the check orchestrator over HTTP: a health probe, an environment
//! status endpoint, and the quick/comprehensive test endpoints. Handlers
//! delegate to the shared `GuiBackend` facade; this crate owns only wiring,
//! wire DTOs, and HTTP error mapping.

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Silence unused dev-dependency warnings - these are exercised by the
// integration tests under tests/
#[cfg(test)]
use http_body_util as _;
#[cfg(test)]
use tower as _;

pub mod bootstrap;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

// Re-export primary types
pub use bootstrap::{AxumContext, CorsConfig, ServerConfig, bootstrap, start_server};
pub use error::HttpError;
pub use routes::create_router;
pub use state::AppState;
