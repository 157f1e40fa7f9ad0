//! Middleware for request processing.

pub mod auth;

pub use auth::{AuthUser, auth_middleware};
