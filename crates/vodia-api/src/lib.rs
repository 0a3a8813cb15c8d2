//! Vodia API server.
//!
//! Axum API layer over the pure credential/URL core (`vodia-core`) and the
//! Bunny Stream management client (`vodia-stream`).

pub mod api_doc;
pub mod error;
pub mod handlers;
pub mod setup;
pub mod state;
pub mod telemetry;
