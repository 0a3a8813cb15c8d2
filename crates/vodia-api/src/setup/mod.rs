//! Application setup: route configuration and server startup.

pub mod routes;
pub mod server;

pub use routes::setup_routes;
