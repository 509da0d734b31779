//! HTTP server for the Pointr mock API.
//!
//! Serves sites, buildings, and levels from an [`EntityStore`] over a small
//! JSON REST surface with permissive CORS. Handlers translate requests into
//! store calls and store results into responses; all rules live in the store.
//!
//! [`EntityStore`]: pointr_store::EntityStore

pub mod config;
pub mod error;
pub mod handler;
pub mod payload;
pub mod router;
pub mod server;

pub use config::{ServerConfig, DEFAULT_PORT, PORT_ENV};
pub use error::{ApiError, ServerError, ServerResult};
pub use handler::SharedStore;
pub use payload::{LevelBatch, LevelPayload};
pub use router::build_router;
pub use server::MockServer;
