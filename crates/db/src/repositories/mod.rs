//! Repository abstractions for data access.
//!
//! Repositories implement the core crate's store traits on top of
//! `SeaORM`, hiding the database details from the rest of the
//! application.

pub mod category;
pub mod event;
pub mod solution;

pub use category::CategoryRepository;
pub use event::EventRepository;
pub use solution::SolutionRepository;

use planora_core::store::StoreError;
use sea_orm::DbErr;

/// Folds a database error into the store error the core crate expects.
pub(crate) fn store_err(err: DbErr) -> StoreError {
    StoreError::Backend(err.to_string())
}
