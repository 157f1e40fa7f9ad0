//! Budget error types.

use planora_shared::types::{BudgetItemId, CategoryId, EventId, ReservationId, SolutionId};
use rust_decimal::Decimal;
use thiserror::Error;

use crate::store::StoreError;

/// Budget-related errors.
#[derive(Debug, Error)]
pub enum BudgetError {
    /// Event not found.
    #[error("Event not found: {0}")]
    EventNotFound(EventId),

    /// Solution not found in the catalog.
    #[error("Solution not found: {0}")]
    SolutionNotFound(SolutionId),

    /// Budget item not found in this event's budget.
    #[error("Budget item not found: {0}")]
    ItemNotFound(BudgetItemId),

    /// Category not found.
    #[error("Category not found: {0}")]
    CategoryNotFound(CategoryId),

    /// Reservation not found.
    #[error("Reservation not found: {0}")]
    ReservationNotFound(ReservationId),

    /// A reservation was confirmed but no matching service line exists.
    #[error("No budget line found for reserved service: {0}")]
    ReservationLineMissing(SolutionId),

    /// Planned amount does not cover the solution's net price.
    #[error("Insufficient funds: net price {required} exceeds planned amount {planned}")]
    InsufficientFunds {
        /// Net price that must be covered.
        required: Decimal,
        /// Planned amount offered.
        planned: Decimal,
    },

    /// The budget line was already processed and can no longer change.
    #[error("Budget item for solution {0} is already processed")]
    AlreadyProcessed(SolutionId),

    /// Another writer saved the budget first.
    #[error("Budget was modified concurrently, retry the request")]
    Conflict,

    /// Persistence failure.
    #[error("Storage error: {0}")]
    Store(String),
}

impl From<StoreError> for BudgetError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::Conflict => Self::Conflict,
            StoreError::Backend(message) => Self::Store(message),
        }
    }
}
