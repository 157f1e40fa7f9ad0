//! Budget orchestration across events, the catalog, and reservations.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use planora_shared::types::{BudgetItemId, CategoryId, EventId, ReservationId, SolutionId, UserId};
use rust_decimal::Decimal;

use super::error::BudgetError;
use super::filter::BudgetItemFilter;
use super::ledger::{BudgetItem, BudgetItemStatus};
use super::types::{
    BudgetItemRequest, BudgetItemView, BudgetView, OrganizerItemView, ProductView, SuggestionView,
    UpdateBudgetItemRequest,
};
use crate::catalog::{
    CategoryStore, ReservationKind, Solution, SolutionCatalog, SolutionHistory, SolutionKind,
};
use crate::events::{Event, EventStore, OrganizerItem};

/// Orchestrates every flow that reads or mutates an event budget.
///
/// All writes load the event aggregate, mutate the budget in memory
/// through its own methods, and save the whole thing back. Concurrent
/// writers are resolved by the store's version check.
pub struct BudgetService<E, S, C, H> {
    events: Arc<E>,
    catalog: Arc<S>,
    categories: Arc<C>,
    history: Arc<H>,
}

impl<E, S, C, H> BudgetService<E, S, C, H>
where
    E: EventStore,
    S: SolutionCatalog,
    C: CategoryStore,
    H: SolutionHistory,
{
    /// Creates a new budget service over the given stores.
    #[must_use]
    pub fn new(events: Arc<E>, catalog: Arc<S>, categories: Arc<C>, history: Arc<H>) -> Self {
        Self {
            events,
            catalog,
            categories,
            history,
        }
    }

    /// Buys a product for an event.
    ///
    /// The line for the product is created or reused, then processed
    /// immediately. Because processing happens after the line is in
    /// the budget, `spent_amount` does not move here.
    ///
    /// # Errors
    ///
    /// Returns `SolutionNotFound` if the id is not a product,
    /// `InsufficientFunds` if the planned amount does not cover the
    /// net price, `AlreadyProcessed` if the product was already bought
    /// or reserved, and `EventNotFound` / `Conflict` / `Store` from
    /// the persistence layer.
    pub async fn purchase_product(
        &self,
        event_id: EventId,
        request: BudgetItemRequest,
    ) -> Result<ProductView, BudgetError> {
        let product = self.find_product(request.solution_id).await?;
        let net_price = product.net_price();
        if net_price > request.planned_amount {
            return Err(BudgetError::InsufficientFunds {
                required: net_price,
                planned: request.planned_amount,
            });
        }

        let mut event = self.load_event(event_id).await?;
        match event.budget.item_by_solution(product.id) {
            Some(item) => Self::ensure_unprocessed(item)?,
            None => {
                let item = BudgetItem::planned(&product, request.planned_amount);
                event.budget.add_item(item, net_price);
            }
        }

        let now = Utc::now();
        if let Some(item) = event.budget.item_by_solution_mut(product.id) {
            item.mark_processed(now);
        }

        self.events.save_event(&event).await?;
        Ok(ProductView::from(&product))
    }

    /// Catalog entries worth suggesting for an event: in the given
    /// category, affordable at `max_price`, and bookable on the
    /// event's date.
    ///
    /// # Errors
    ///
    /// Returns `CategoryNotFound` or `EventNotFound` when either side
    /// of the query is missing, and `Store` on persistence failures.
    pub async fn get_budget_suggestions(
        &self,
        event_id: EventId,
        category_id: CategoryId,
        max_price: Decimal,
    ) -> Result<Vec<SuggestionView>, BudgetError> {
        let category = self
            .categories
            .find_category(category_id)
            .await?
            .ok_or(BudgetError::CategoryNotFound(category_id))?;
        let event = self.load_event(event_id).await?;

        let solutions = self
            .catalog
            .find_suggestions(category.id, max_price, event.date)
            .await?;
        Ok(solutions.iter().map(SuggestionView::from).collect())
    }

    /// The event's full budget with live solution data on every line.
    ///
    /// # Errors
    ///
    /// Returns `EventNotFound` if the event is missing, and `Store`
    /// on persistence failures.
    pub async fn get_budget(&self, event_id: EventId) -> Result<BudgetView, BudgetError> {
        let event = self.load_event(event_id).await?;
        let items = self.render_live_items(&event).await?;
        Ok(BudgetView::new(&event.budget, items))
    }

    /// Processed lines across all of the organizer's events, one per
    /// solution, newest processing first. This feeds the review
    /// eligibility list: only visible solutions count, and a solution
    /// bought for several events shows up once.
    ///
    /// # Errors
    ///
    /// Returns `Store` on persistence failures.
    pub async fn get_all_budget_items(
        &self,
        organizer: UserId,
    ) -> Result<Vec<OrganizerItemView>, BudgetError> {
        let filter = BudgetItemFilter::processed_for_organizer(organizer);
        let rows = self.events.search_items(&filter).await?;

        // One row per solution; the most recently processed one wins,
        // with the later row taking ties.
        let mut unique: HashMap<SolutionId, OrganizerItem> = HashMap::new();
        for row in rows {
            let solution_id = row.item.solution_id();
            match unique.get(&solution_id) {
                Some(kept) if row.item.processed_at() < kept.item.processed_at() => {}
                _ => {
                    unique.insert(solution_id, row);
                }
            }
        }

        let mut views: Vec<OrganizerItemView> = unique.values().map(Into::into).collect();
        views.sort_by(|a, b| {
            b.processed_at
                .cmp(&a.processed_at)
                .then_with(|| a.solution_id.cmp(&b.solution_id))
        });
        Ok(views)
    }

    /// Mirrors a service reservation into the event's budget.
    ///
    /// Called by the booking flow after a reservation is placed. The
    /// service's line is created or reused; automatic-confirmation
    /// services process immediately, manual ones go to `PENDING` until
    /// the provider confirms. A brand-new line for an automatic
    /// service enters the budget already processed, which is the one
    /// path that raises `spent_amount`.
    ///
    /// # Errors
    ///
    /// Returns `ReservationNotFound`, `SolutionNotFound`, or
    /// `EventNotFound` when the reservation chain is broken,
    /// `AlreadyProcessed` if the service's line is frozen, and
    /// `Conflict` / `Store` from the persistence layer.
    pub async fn add_reservation_as_budget_item(
        &self,
        reservation_id: ReservationId,
        planned_amount: Decimal,
    ) -> Result<(), BudgetError> {
        let reservation = self
            .events
            .find_reservation(reservation_id)
            .await?
            .ok_or(BudgetError::ReservationNotFound(reservation_id))?;
        let service = self
            .catalog
            .find_solution(reservation.service_id)
            .await?
            .ok_or(BudgetError::SolutionNotFound(reservation.service_id))?;
        let mut event = self.load_event(reservation.event_id).await?;

        let is_automatic = service.reservation_kind == Some(ReservationKind::Automatic);
        let now = Utc::now();

        let existing = event
            .budget
            .item_by_solution(service.id)
            .map(BudgetItem::is_processed);
        match existing {
            Some(true) => return Err(BudgetError::AlreadyProcessed(service.id)),
            Some(false) => {
                // Amount first: once the line is processed it freezes.
                if let Some(item) = event.budget.item_by_solution_mut(service.id) {
                    item.set_planned_amount(planned_amount);
                    if is_automatic {
                        item.mark_processed(now);
                    } else {
                        item.make_pending();
                    }
                }
            }
            None => {
                let item = if is_automatic {
                    BudgetItem::processed(&service, planned_amount, now)
                } else {
                    BudgetItem::pending(&service, planned_amount)
                };
                event.budget.add_item(item, service.net_price());
            }
        }

        self.events.save_event(&event).await?;
        Ok(())
    }

    /// Confirms a manual reservation: the service's budget line moves
    /// to `PROCESSED` in place. Totals do not move; only lines
    /// processed at insertion count into `spent_amount`.
    ///
    /// # Errors
    ///
    /// Returns `ReservationNotFound` or `EventNotFound` when the
    /// reservation chain is broken, `ReservationLineMissing` if the
    /// budget has no line for the reserved service, and `Conflict` /
    /// `Store` from the persistence layer.
    pub async fn mark_as_reserved(&self, reservation_id: ReservationId) -> Result<(), BudgetError> {
        let reservation = self
            .events
            .find_reservation(reservation_id)
            .await?
            .ok_or(BudgetError::ReservationNotFound(reservation_id))?;
        let mut event = self.load_event(reservation.event_id).await?;

        let now = Utc::now();
        match event.budget.item_by_solution_mut(reservation.service_id) {
            Some(item) if item.kind() == SolutionKind::Service => item.mark_processed(now),
            _ => return Err(BudgetError::ReservationLineMissing(reservation.service_id)),
        }

        self.events.save_event(&event).await?;
        Ok(())
    }

    /// All lines of the event's budget. Processed lines render the
    /// solution as it looked when the money was committed; unprocessed
    /// lines render live data.
    ///
    /// # Errors
    ///
    /// Returns `EventNotFound` if the event is missing,
    /// `SolutionNotFound` if a line points at a vanished solution, and
    /// `Store` on persistence failures.
    pub async fn get_budget_items(
        &self,
        event_id: EventId,
    ) -> Result<Vec<BudgetItemView>, BudgetError> {
        let event = self.load_event(event_id).await?;

        let mut views = Vec::with_capacity(event.budget.items().len());
        for item in event.budget.items() {
            let mut solution = self.find_solution(item.solution_id()).await?;
            if let Some(at) = item.processed_at() {
                if let Some(snapshot) = self.history.valid_snapshot(item.solution_id(), at).await? {
                    solution.restore(&snapshot);
                }
            }
            views.push(BudgetItemView::new(item, &solution));
        }
        Ok(views)
    }

    /// Plans money for a solution without committing it.
    ///
    /// If a line for the solution already exists and is unprocessed,
    /// only its planned amount is replaced; the funds check does not
    /// run on that path. A new line must cover the solution's current
    /// net price.
    ///
    /// # Errors
    ///
    /// Returns `SolutionNotFound`, `EventNotFound`,
    /// `InsufficientFunds` for a new line that cannot cover the net
    /// price, `AlreadyProcessed` if the existing line is frozen, and
    /// `Conflict` / `Store` from the persistence layer.
    pub async fn create_budget_item(
        &self,
        event_id: EventId,
        request: BudgetItemRequest,
    ) -> Result<BudgetItemView, BudgetError> {
        let solution = self.find_solution(request.solution_id).await?;
        let mut event = self.load_event(event_id).await?;

        let existing = event
            .budget
            .item_by_solution(solution.id)
            .map(|item| (item.id(), item.is_processed()));
        let item_id = match existing {
            Some((_, true)) => return Err(BudgetError::AlreadyProcessed(solution.id)),
            Some((item_id, false)) => {
                if let Some(item) = event.budget.item_by_id_mut(item_id) {
                    item.set_planned_amount(request.planned_amount);
                }
                item_id
            }
            None => {
                let net_price = solution.net_price();
                if request.planned_amount < net_price {
                    return Err(BudgetError::InsufficientFunds {
                        required: net_price,
                        planned: request.planned_amount,
                    });
                }
                let item = BudgetItem::planned(&solution, request.planned_amount);
                let item_id = item.id();
                event.budget.add_item(item, net_price);
                item_id
            }
        };

        self.events.save_event(&event).await?;
        let item = event
            .budget
            .item_by_id(item_id)
            .ok_or(BudgetError::ItemNotFound(item_id))?;
        Ok(BudgetItemView::new(item, &solution))
    }

    /// Replaces the planned amount of an unprocessed line. The new
    /// amount must cover the solution's current net price.
    ///
    /// # Errors
    ///
    /// Returns `EventNotFound` or `ItemNotFound` when the line is
    /// missing, `AlreadyProcessed` if it is frozen,
    /// `InsufficientFunds` if the new amount cannot cover the net
    /// price, and `Conflict` / `Store` from the persistence layer.
    pub async fn update_budget_item(
        &self,
        event_id: EventId,
        item_id: BudgetItemId,
        request: UpdateBudgetItemRequest,
    ) -> Result<BudgetItemView, BudgetError> {
        let mut event = self.load_event(event_id).await?;

        let solution_id = {
            let item = event
                .budget
                .item_by_id(item_id)
                .ok_or(BudgetError::ItemNotFound(item_id))?;
            Self::ensure_unprocessed(item)?;
            item.solution_id()
        };

        // The funds check runs against the catalog's price today, not
        // the price the line was created at.
        let solution = self.find_solution(solution_id).await?;
        let net_price = solution.net_price();
        if request.planned_amount < net_price {
            return Err(BudgetError::InsufficientFunds {
                required: net_price,
                planned: request.planned_amount,
            });
        }

        if let Some(item) = event.budget.item_by_id_mut(item_id) {
            item.set_planned_amount(request.planned_amount);
        }

        self.events.save_event(&event).await?;
        let item = event
            .budget
            .item_by_id(item_id)
            .ok_or(BudgetError::ItemNotFound(item_id))?;
        Ok(BudgetItemView::new(item, &solution))
    }

    /// Deletes a line that is still in `PLANNED` state. Pending and
    /// processed lines cannot be deleted.
    ///
    /// # Errors
    ///
    /// Returns `EventNotFound` or `ItemNotFound` when the line is
    /// missing, `AlreadyProcessed` if the line has left `PLANNED`, and
    /// `Conflict` / `Store` from the persistence layer.
    pub async fn delete_budget_item(
        &self,
        event_id: EventId,
        item_id: BudgetItemId,
    ) -> Result<(), BudgetError> {
        let mut event = self.load_event(event_id).await?;

        {
            let item = event
                .budget
                .item_by_id(item_id)
                .ok_or(BudgetError::ItemNotFound(item_id))?;
            if item.status() != BudgetItemStatus::Planned {
                return Err(BudgetError::AlreadyProcessed(item.solution_id()));
            }
        }
        event.budget.remove_item(item_id);

        self.events.save_event(&event).await?;
        Ok(())
    }

    /// Replaces the budget's active-category set wholesale.
    ///
    /// # Errors
    ///
    /// Returns `CategoryNotFound` if any id is unknown,
    /// `EventNotFound` if the event is missing, and `Conflict` /
    /// `Store` from the persistence layer.
    pub async fn update_budget_active_categories(
        &self,
        event_id: EventId,
        category_ids: Vec<CategoryId>,
    ) -> Result<BudgetView, BudgetError> {
        let mut event = self.load_event(event_id).await?;

        let mut categories = Vec::with_capacity(category_ids.len());
        for category_id in category_ids {
            let category = self
                .categories
                .find_category(category_id)
                .await?
                .ok_or(BudgetError::CategoryNotFound(category_id))?;
            categories.push(category);
        }
        event.budget.replace_active_categories(categories);

        self.events.save_event(&event).await?;
        let items = self.render_live_items(&event).await?;
        Ok(BudgetView::new(&event.budget, items))
    }

    // =========================================================================
    // Helpers
    // =========================================================================

    async fn load_event(&self, event_id: EventId) -> Result<Event, BudgetError> {
        self.events
            .find_event(event_id)
            .await?
            .ok_or(BudgetError::EventNotFound(event_id))
    }

    async fn find_solution(&self, solution_id: SolutionId) -> Result<Solution, BudgetError> {
        self.catalog
            .find_solution(solution_id)
            .await?
            .ok_or(BudgetError::SolutionNotFound(solution_id))
    }

    /// Products only; a service id behaves like an unknown solution.
    async fn find_product(&self, solution_id: SolutionId) -> Result<Solution, BudgetError> {
        match self.catalog.find_solution(solution_id).await? {
            Some(solution) if solution.kind == SolutionKind::Product => Ok(solution),
            _ => Err(BudgetError::SolutionNotFound(solution_id)),
        }
    }

    /// The single gate for mutating flows that require an unfrozen line.
    fn ensure_unprocessed(item: &BudgetItem) -> Result<(), BudgetError> {
        if item.is_processed() {
            return Err(BudgetError::AlreadyProcessed(item.solution_id()));
        }
        Ok(())
    }

    async fn render_live_items(&self, event: &Event) -> Result<Vec<BudgetItemView>, BudgetError> {
        let mut views = Vec::with_capacity(event.budget.items().len());
        for item in event.budget.items() {
            let solution = self.find_solution(item.solution_id()).await?;
            views.push(BudgetItemView::new(item, &solution));
        }
        Ok(views)
    }
}
