//! Shared types, errors, and configuration for Planora.
//!
//! This crate provides common types used across all other crates:
//! - Net price arithmetic with decimal precision
//! - Typed IDs for type-safe entity references
//! - JWT claims and token validation
//! - Configuration management

pub mod auth;
pub mod config;
pub mod jwt;
pub mod types;

pub use auth::Claims;
pub use config::AppConfig;
pub use jwt::{JwtError, JwtService};
