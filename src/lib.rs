//! The `forgekit` library crate.
//!
//! Everything the API server is made of lives here: authentication (tokens,
//! password hashing, the bearer gate), domain models, route handlers and the
//! route composer, configuration, and error handling. The binary in `main.rs`
//! only wires these pieces into an `HttpServer`.

pub mod auth;
pub mod config;
pub mod error;
pub mod models;
pub mod routes;
