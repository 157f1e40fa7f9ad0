//! Core business logic for Planora.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//! All domain types, validation rules, and calculations live here.
//!
//! # Modules
//!
//! - `catalog` - Purchasable solutions, categories, and historical snapshots
//! - `events` - Events, reservations, and the aggregate store seam
//! - `budget` - The event budget ledger and its orchestrator

pub mod budget;
pub mod catalog;
pub mod events;
pub mod store;
