//! Solution repository covering the live catalog and its history.

use chrono::{DateTime, NaiveDate, Utc};
use planora_core::catalog::{Category, Solution, SolutionCatalog, SolutionHistory, SolutionSnapshot};
use planora_core::store::StoreError;
use planora_shared::types::{CategoryId, SolutionId, UserId, net_price};
use rust_decimal::Decimal;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};

use crate::entities::{categories, solution_snapshots, solutions};

use super::category::category_from_row;
use super::store_err;

/// Read access to catalog solutions and their recorded states.
#[derive(Debug, Clone)]
pub struct SolutionRepository {
    db: DatabaseConnection,
}

impl SolutionRepository {
    /// Creates a new solution repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Resolves the category row a solution points at.
    async fn category_of(&self, row: &solutions::Model) -> Result<Category, StoreError> {
        let category = categories::Entity::find_by_id(row.category_id)
            .one(&self.db)
            .await
            .map_err(store_err)?
            .ok_or_else(|| {
                StoreError::Backend(format!("category row missing: {}", row.category_id))
            })?;
        Ok(category_from_row(&category))
    }
}

impl SolutionCatalog for SolutionRepository {
    async fn find_solution(&self, id: SolutionId) -> Result<Option<Solution>, StoreError> {
        let Some(row) = solutions::Entity::find_by_id(id.into_inner())
            .one(&self.db)
            .await
            .map_err(store_err)?
        else {
            return Ok(None);
        };

        let category = self.category_of(&row).await?;
        Ok(Some(solution_from_row(row, category)))
    }

    async fn find_suggestions(
        &self,
        category_id: CategoryId,
        max_price: Decimal,
        _event_date: NaiveDate,
    ) -> Result<Vec<Solution>, StoreError> {
        // Availability calendars are not modelled; `is_available`
        // stands in for the date check.
        let rows = solutions::Entity::find()
            .filter(solutions::Column::CategoryId.eq(category_id.into_inner()))
            .filter(solutions::Column::IsVisible.eq(true))
            .filter(solutions::Column::IsAvailable.eq(true))
            .order_by_asc(solutions::Column::Name)
            .all(&self.db)
            .await
            .map_err(store_err)?;

        let mut result = Vec::new();
        for row in rows {
            // Net price is derived, so the ceiling applies here rather
            // than in SQL.
            if net_price(row.price, row.discount) > max_price {
                continue;
            }
            let category = self.category_of(&row).await?;
            result.push(solution_from_row(row, category));
        }

        Ok(result)
    }
}

impl SolutionHistory for SolutionRepository {
    async fn valid_snapshot(
        &self,
        solution_id: SolutionId,
        as_of: DateTime<Utc>,
    ) -> Result<Option<SolutionSnapshot>, StoreError> {
        let row = solution_snapshots::Entity::find()
            .filter(solution_snapshots::Column::SolutionId.eq(solution_id.into_inner()))
            .filter(solution_snapshots::Column::ValidFrom.lte(as_of))
            .order_by_desc(solution_snapshots::Column::ValidFrom)
            .one(&self.db)
            .await
            .map_err(store_err)?;
        Ok(row.map(snapshot_from_row))
    }
}

/// Maps a solution row and its resolved category into the domain type.
pub(crate) fn solution_from_row(row: solutions::Model, category: Category) -> Solution {
    Solution {
        id: SolutionId::from_uuid(row.id),
        name: row.name,
        kind: row.kind.into(),
        price: row.price,
        discount: row.discount,
        category,
        provider: UserId::from_uuid(row.provider_id),
        is_visible: row.is_visible,
        is_available: row.is_available,
        rating: row.rating,
        reservation_kind: row.reservation_kind.map(Into::into),
    }
}

fn snapshot_from_row(row: solution_snapshots::Model) -> SolutionSnapshot {
    SolutionSnapshot {
        solution_id: SolutionId::from_uuid(row.solution_id),
        name: row.name,
        price: row.price,
        discount: row.discount,
        valid_from: row.valid_from.with_timezone(&Utc),
    }
}

#[cfg(test)]
#[path = "solution_tests.rs"]
mod tests;
