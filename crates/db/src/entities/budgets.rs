//! Budget headers.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Running totals of an event budget. One row per event; the row is
/// created lazily on the first write.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "budgets")]
pub struct Model {
    /// Owning event, also the primary key.
    #[sea_orm(primary_key, auto_increment = false)]
    pub event_id: Uuid,
    /// Sum of planned amounts across current lines.
    pub planned_amount: Decimal,
    /// Money committed through processed lines.
    pub spent_amount: Decimal,
    /// Optimistic lock counter, bumped on every save.
    pub version: i64,
    /// Row creation time.
    pub created_at: DateTimeWithTimeZone,
    /// Last modification time.
    pub updated_at: DateTimeWithTimeZone,
}

/// Entity relations.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Owning event.
    #[sea_orm(
        belongs_to = "super::events::Entity",
        from = "Column::EventId",
        to = "super::events::Column::Id"
    )]
    Event,
    /// Lines under this budget.
    #[sea_orm(has_many = "super::budget_items::Entity")]
    Items,
    /// Active category selections.
    #[sea_orm(has_many = "super::budget_active_categories::Entity")]
    ActiveCategories,
}

impl Related<super::events::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Event.def()
    }
}

impl Related<super::budget_items::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Items.def()
    }
}

impl Related<super::budget_active_categories::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ActiveCategories.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
