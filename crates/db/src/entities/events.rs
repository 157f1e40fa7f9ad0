//! Planned events.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// An event being planned by an organizer.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "events")]
pub struct Model {
    /// Primary key.
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    /// Owning organizer.
    pub organizer_id: Uuid,
    /// Display name.
    pub name: String,
    /// Calendar date the event takes place.
    pub event_date: Date,
    /// Row creation time.
    pub created_at: DateTimeWithTimeZone,
    /// Last modification time.
    pub updated_at: DateTimeWithTimeZone,
}

/// Entity relations.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Owning organizer account.
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::OrganizerId",
        to = "super::users::Column::Id"
    )]
    Organizer,
    /// Budget header for this event.
    #[sea_orm(has_one = "super::budgets::Entity")]
    Budget,
    /// Reservations placed for this event.
    #[sea_orm(has_many = "super::reservations::Entity")]
    Reservations,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Organizer.def()
    }
}

impl Related<super::budgets::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Budget.def()
    }
}

impl Related<super::reservations::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Reservations.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
