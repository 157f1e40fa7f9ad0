//! Persistence seams for the catalog.
//!
//! The budget orchestrator only ever talks to these traits; the SeaORM
//! repositories implement them, and tests swap in memory-backed fakes.

use chrono::{DateTime, NaiveDate, Utc};
use planora_shared::types::{CategoryId, SolutionId};
use rust_decimal::Decimal;

use crate::catalog::types::{Category, Solution, SolutionSnapshot};
use crate::store::StoreError;

/// Read access to live catalog entries.
pub trait SolutionCatalog: Send + Sync {
    /// Looks up a single solution by id.
    fn find_solution(
        &self,
        id: SolutionId,
    ) -> impl std::future::Future<Output = Result<Option<Solution>, StoreError>> + Send;

    /// Solutions fitting a budget suggestion query: in the given
    /// category, net price at or under `max_price`, visible, and
    /// bookable on `event_date`.
    fn find_suggestions(
        &self,
        category_id: CategoryId,
        max_price: Decimal,
        event_date: NaiveDate,
    ) -> impl std::future::Future<Output = Result<Vec<Solution>, StoreError>> + Send;
}

/// Read access to catalog categories.
pub trait CategoryStore: Send + Sync {
    /// Looks up a single category by id.
    fn find_category(
        &self,
        id: CategoryId,
    ) -> impl std::future::Future<Output = Result<Option<Category>, StoreError>> + Send;
}

/// Read access to historical solution states.
pub trait SolutionHistory: Send + Sync {
    /// The snapshot that was current for `solution_id` at `as_of`,
    /// if any state was recorded by then.
    fn valid_snapshot(
        &self,
        solution_id: SolutionId,
        as_of: DateTime<Utc>,
    ) -> impl std::future::Future<Output = Result<Option<SolutionSnapshot>, StoreError>> + Send;
}
