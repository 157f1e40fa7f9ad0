//! Category repository.

use planora_core::catalog::{Category, CategoryStore};
use planora_core::store::StoreError;
use planora_shared::types::CategoryId;
use sea_orm::{DatabaseConnection, EntityTrait};

use crate::entities::categories;

use super::store_err;

/// Read access to catalog categories.
#[derive(Debug, Clone)]
pub struct CategoryRepository {
    db: DatabaseConnection,
}

impl CategoryRepository {
    /// Creates a new category repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl CategoryStore for CategoryRepository {
    async fn find_category(&self, id: CategoryId) -> Result<Option<Category>, StoreError> {
        let row = categories::Entity::find_by_id(id.into_inner())
            .one(&self.db)
            .await
            .map_err(store_err)?;
        Ok(row.as_ref().map(category_from_row))
    }
}

/// Maps a category row into the domain type.
pub(crate) fn category_from_row(row: &categories::Model) -> Category {
    Category {
        id: CategoryId::from_uuid(row.id),
        name: row.name.clone(),
    }
}
