//! The event budget ledger.
//!
//! Every event owns one [`Budget`]: a list of lines tying catalog
//! solutions to planned spending, plus two running money totals. The
//! only ways in or out of the list are [`Budget::add_item`] and
//! [`Budget::remove_item`], which keep the totals consistent with the
//! lines. [`BudgetService`] orchestrates the flows that mutate the
//! ledger: direct purchases, manual planning, and reservation
//! callbacks from the booking side.

pub mod error;
pub mod filter;
pub mod ledger;
pub mod service;
pub mod types;

#[cfg(test)]
mod ledger_props;

pub use error::BudgetError;
pub use filter::BudgetItemFilter;
pub use ledger::{Budget, BudgetItem, BudgetItemStatus};
pub use service::BudgetService;
pub use types::{
    BudgetItemRequest, BudgetItemView, BudgetView, CategoryView, OrganizerItemView, ProductView,
    SuggestionView, UpdateBudgetItemRequest,
};
