//! Event repository backing the budget ledger.
//!
//! Implements the core `EventStore` seam: events are hydrated with
//! their full budget aggregate, and saves rewrite the aggregate under
//! an optimistic version check.

use chrono::Utc;
use planora_core::budget::{Budget, BudgetItem, BudgetItemFilter};
use planora_core::catalog::Category;
use planora_core::events::{Event, EventStore, OrganizerItem, Reservation};
use planora_core::store::StoreError;
use planora_shared::types::{BudgetItemId, EventId, ReservationId, SolutionId, UserId};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};
use uuid::Uuid;

use crate::entities::{
    budget_active_categories, budget_items, budgets, categories, events, reservations,
    sea_orm_active_enums::BudgetItemStatus as DbBudgetItemStatus, solutions,
};

use super::solution::solution_from_row;
use super::store_err;

/// Repository for events, their budgets, and reservations.
#[derive(Debug, Clone)]
pub struct EventRepository {
    db: DatabaseConnection,
}

impl EventRepository {
    /// Creates a new event repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    // ========================================================================
    // Hydration helpers
    // ========================================================================

    /// Resolves a category row that other rows reference by id.
    async fn category_by_id(&self, id: Uuid) -> Result<Category, StoreError> {
        let row = categories::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(store_err)?
            .ok_or_else(|| StoreError::Backend(format!("category row missing: {id}")))?;
        Ok(super::category::category_from_row(&row))
    }

    /// Loads the budget lines of an event in creation order.
    async fn load_items(&self, event_id: Uuid) -> Result<Vec<BudgetItem>, StoreError> {
        let rows = budget_items::Entity::find()
            .filter(budget_items::Column::EventId.eq(event_id))
            // v7 ids are time-ordered, so this keeps creation order.
            .order_by_asc(budget_items::Column::Id)
            .all(&self.db)
            .await
            .map_err(store_err)?;

        let mut items = Vec::with_capacity(rows.len());
        for row in rows {
            let category = self.category_by_id(row.category_id).await?;
            items.push(item_from_row(row, category));
        }
        Ok(items)
    }

    /// Loads the active category selections of an event.
    async fn load_active_categories(&self, event_id: Uuid) -> Result<Vec<Category>, StoreError> {
        let rows = budget_active_categories::Entity::find()
            .filter(budget_active_categories::Column::EventId.eq(event_id))
            .all(&self.db)
            .await
            .map_err(store_err)?;

        let mut result = Vec::with_capacity(rows.len());
        for row in rows {
            result.push(self.category_by_id(row.category_id).await?);
        }
        Ok(result)
    }
}

impl EventStore for EventRepository {
    async fn find_event(&self, id: EventId) -> Result<Option<Event>, StoreError> {
        let Some(event_row) = events::Entity::find_by_id(id.into_inner())
            .one(&self.db)
            .await
            .map_err(store_err)?
        else {
            return Ok(None);
        };

        let header = budgets::Entity::find_by_id(event_row.id)
            .one(&self.db)
            .await
            .map_err(store_err)?;

        // The header row is created lazily on the first write; until
        // then the event carries an empty budget.
        let budget = match header {
            Some(header) => {
                let items = self.load_items(event_row.id).await?;
                let active = self.load_active_categories(event_row.id).await?;
                Budget::from_parts(
                    header.planned_amount,
                    header.spent_amount,
                    active,
                    items,
                    header.version,
                )
            }
            None => Budget::new(),
        };

        Ok(Some(Event {
            id: EventId::from_uuid(event_row.id),
            organizer: UserId::from_uuid(event_row.organizer_id),
            date: event_row.event_date,
            budget,
        }))
    }

    async fn save_event(&self, event: &Event) -> Result<(), StoreError> {
        let event_id = event.id.into_inner();
        let budget = &event.budget;
        let loaded_version = budget.version();
        let now = Utc::now().into();

        let txn = self.db.begin().await.map_err(store_err)?;

        // Compare-and-swap on the version column; a stale writer
        // updates zero rows.
        let update = budgets::Entity::update_many()
            .set(budgets::ActiveModel {
                planned_amount: Set(budget.planned_amount()),
                spent_amount: Set(budget.spent_amount()),
                version: Set(loaded_version + 1),
                updated_at: Set(now),
                ..Default::default()
            })
            .filter(budgets::Column::EventId.eq(event_id))
            .filter(budgets::Column::Version.eq(loaded_version))
            .exec(&txn)
            .await
            .map_err(store_err)?;

        if update.rows_affected == 0 {
            let exists = budgets::Entity::find_by_id(event_id)
                .one(&txn)
                .await
                .map_err(store_err)?
                .is_some();
            if exists {
                // Dropping the transaction rolls it back.
                return Err(StoreError::Conflict);
            }

            let header = budgets::ActiveModel {
                event_id: Set(event_id),
                planned_amount: Set(budget.planned_amount()),
                spent_amount: Set(budget.spent_amount()),
                version: Set(loaded_version + 1),
                created_at: Set(now),
                updated_at: Set(now),
            };
            header.insert(&txn).await.map_err(store_err)?;
        }

        // Lines and selections are rewritten wholesale; their state
        // lives in the aggregate, not in per-row diffs.
        budget_items::Entity::delete_many()
            .filter(budget_items::Column::EventId.eq(event_id))
            .exec(&txn)
            .await
            .map_err(store_err)?;

        for item in budget.items() {
            let row = budget_items::ActiveModel {
                id: Set(item.id().into_inner()),
                event_id: Set(event_id),
                solution_id: Set(item.solution_id().into_inner()),
                kind: Set(item.kind().into()),
                category_id: Set(item.category().id.into_inner()),
                planned_amount: Set(item.planned_amount()),
                status: Set(item.status().into()),
                processed_at: Set(item.processed_at().map(Into::into)),
                created_at: Set(now),
                updated_at: Set(now),
            };
            row.insert(&txn).await.map_err(store_err)?;
        }

        budget_active_categories::Entity::delete_many()
            .filter(budget_active_categories::Column::EventId.eq(event_id))
            .exec(&txn)
            .await
            .map_err(store_err)?;

        for category in budget.active_categories() {
            let row = budget_active_categories::ActiveModel {
                event_id: Set(event_id),
                category_id: Set(category.id.into_inner()),
                created_at: Set(now),
            };
            row.insert(&txn).await.map_err(store_err)?;
        }

        txn.commit().await.map_err(store_err)?;
        Ok(())
    }

    async fn search_items(
        &self,
        filter: &BudgetItemFilter,
    ) -> Result<Vec<OrganizerItem>, StoreError> {
        let event_rows = events::Entity::find()
            .filter(events::Column::OrganizerId.eq(filter.organizer.into_inner()))
            .all(&self.db)
            .await
            .map_err(store_err)?;

        let mut result = Vec::new();
        for event_row in event_rows {
            let mut items_query = budget_items::Entity::find()
                .filter(budget_items::Column::EventId.eq(event_row.id));
            if filter.processed_only {
                items_query = items_query
                    .filter(budget_items::Column::Status.eq(DbBudgetItemStatus::Processed));
            }
            let item_rows = items_query.all(&self.db).await.map_err(store_err)?;

            for row in item_rows {
                let Some(solution_row) = solutions::Entity::find_by_id(row.solution_id)
                    .one(&self.db)
                    .await
                    .map_err(store_err)?
                else {
                    continue;
                };
                if filter.visible_only && !solution_row.is_visible {
                    continue;
                }

                let item_category = self.category_by_id(row.category_id).await?;
                let solution_category = self.category_by_id(solution_row.category_id).await?;
                result.push(OrganizerItem {
                    event_id: EventId::from_uuid(event_row.id),
                    item: item_from_row(row, item_category),
                    solution: solution_from_row(solution_row, solution_category),
                });
            }
        }

        Ok(result)
    }

    async fn find_reservation(&self, id: ReservationId) -> Result<Option<Reservation>, StoreError> {
        let row = reservations::Entity::find_by_id(id.into_inner())
            .one(&self.db)
            .await
            .map_err(store_err)?;
        Ok(row.map(|row| Reservation {
            id: ReservationId::from_uuid(row.id),
            event_id: EventId::from_uuid(row.event_id),
            service_id: SolutionId::from_uuid(row.service_id),
        }))
    }
}

/// Maps a budget line row and its resolved category into the domain
/// type.
fn item_from_row(row: budget_items::Model, category: Category) -> BudgetItem {
    BudgetItem::from_parts(
        BudgetItemId::from_uuid(row.id),
        row.planned_amount,
        SolutionId::from_uuid(row.solution_id),
        row.kind.into(),
        category,
        row.status.into(),
        row.processed_at.map(|at| at.with_timezone(&Utc)),
    )
}

#[cfg(test)]
#[path = "event_tests.rs"]
mod tests;
