//! Active category selections per budget.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Marks a category as active for an event budget. Join table with a
/// composite key.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "budget_active_categories")]
pub struct Model {
    /// Owning budget.
    #[sea_orm(primary_key, auto_increment = false)]
    pub event_id: Uuid,
    /// Selected category.
    #[sea_orm(primary_key, auto_increment = false)]
    pub category_id: Uuid,
    /// Row creation time.
    pub created_at: DateTimeWithTimeZone,
}

/// Entity relations.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Owning budget.
    #[sea_orm(
        belongs_to = "super::budgets::Entity",
        from = "Column::EventId",
        to = "super::budgets::Column::EventId"
    )]
    Budget,
    /// Selected category.
    #[sea_orm(
        belongs_to = "super::categories::Entity",
        from = "Column::CategoryId",
        to = "super::categories::Column::Id"
    )]
    Category,
}

impl Related<super::budgets::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Budget.def()
    }
}

impl Related<super::categories::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Category.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
