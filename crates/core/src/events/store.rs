//! Persistence seam for events and reservations.

use planora_shared::types::{EventId, ReservationId};

use crate::budget::{BudgetItem, BudgetItemFilter};
use crate::catalog::Solution;
use crate::events::types::{Event, Reservation};
use crate::store::StoreError;

/// A budget line joined with its owning event and live solution,
/// as returned by a cross-event search.
#[derive(Debug, Clone)]
pub struct OrganizerItem {
    /// The event whose budget contains the line.
    pub event_id: EventId,
    /// The budget line itself.
    pub item: BudgetItem,
    /// The line's solution, live state.
    pub solution: Solution,
}

/// Load and save events, and query budget lines across events.
pub trait EventStore: Send + Sync {
    /// Loads an event together with its full budget.
    fn find_event(
        &self,
        id: EventId,
    ) -> impl std::future::Future<Output = Result<Option<Event>, StoreError>> + Send;

    /// Persists the event's budget, items, and active categories.
    ///
    /// Fails with [`StoreError::Conflict`] when the stored budget
    /// version no longer matches the one the event was loaded with.
    fn save_event(
        &self,
        event: &Event,
    ) -> impl std::future::Future<Output = Result<(), StoreError>> + Send;

    /// All budget lines across all events matching the filter.
    fn search_items(
        &self,
        filter: &BudgetItemFilter,
    ) -> impl std::future::Future<Output = Result<Vec<OrganizerItem>, StoreError>> + Send;

    /// Looks up a reservation by id.
    fn find_reservation(
        &self,
        id: ReservationId,
    ) -> impl std::future::Future<Output = Result<Option<Reservation>, StoreError>> + Send;
}
