//! Catalog solutions.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::sea_orm_active_enums::{ReservationKind, SolutionKind};

/// A product or service offered by a provider.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "solutions")]
pub struct Model {
    /// Primary key.
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    /// Owning provider.
    pub provider_id: Uuid,
    /// Catalog category.
    pub category_id: Uuid,
    /// Display name.
    pub name: String,
    /// Product or service.
    pub kind: SolutionKind,
    /// Gross price before discount.
    pub price: Decimal,
    /// Discount percentage, 0 to 100.
    pub discount: Decimal,
    /// Hidden solutions stay out of listings.
    pub is_visible: bool,
    /// Unavailable solutions stay out of suggestions.
    pub is_available: bool,
    /// Average customer rating, if rated yet.
    pub rating: Option<Decimal>,
    /// Reservation flow for services, null for products.
    pub reservation_kind: Option<ReservationKind>,
    /// Row creation time.
    pub created_at: DateTimeWithTimeZone,
    /// Last modification time.
    pub updated_at: DateTimeWithTimeZone,
}

/// Entity relations.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Owning provider account.
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::ProviderId",
        to = "super::users::Column::Id"
    )]
    Provider,
    /// Catalog category.
    #[sea_orm(
        belongs_to = "super::categories::Entity",
        from = "Column::CategoryId",
        to = "super::categories::Column::Id"
    )]
    Category,
    /// Price history rows.
    #[sea_orm(has_many = "super::solution_snapshots::Entity")]
    Snapshots,
    /// Budget lines referencing this solution.
    #[sea_orm(has_many = "super::budget_items::Entity")]
    BudgetItems,
    /// Reservations placed for this service.
    #[sea_orm(has_many = "super::reservations::Entity")]
    Reservations,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Provider.def()
    }
}

impl Related<super::categories::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Category.def()
    }
}

impl Related<super::solution_snapshots::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Snapshots.def()
    }
}

impl Related<super::budget_items::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BudgetItems.def()
    }
}

impl Related<super::reservations::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Reservations.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
