//! Thin HTTP client for the Bunny Stream management API.
//!
//! Direct pass-throughs to the remote CRUD endpoints, no retries: a
//! non-success answer surfaces the remote HTTP status and error body verbatim
//! as [`AppError::Upstream`]. Upload authorization and URL derivation are
//! pure functions and live in `vodia-core`; this crate never touches them.

mod client;

pub use client::{StreamApi, StreamClient, VideoListQuery};
