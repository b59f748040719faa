//! HTTP layer for the Anant Polymers form backend
//!
//! Exposed as a library so the integration tests can build the same
//! application `main` serves.

pub mod app;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;

pub use app::create_app;
pub use routes::AppState;
