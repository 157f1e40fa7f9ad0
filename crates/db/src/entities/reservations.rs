//! Service reservations.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A reservation of a service for an event, placed by the reservation
/// subsystem and referenced by budget callbacks.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "reservations")]
pub struct Model {
    /// Primary key.
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    /// Event the service is reserved for.
    pub event_id: Uuid,
    /// Reserved service.
    pub service_id: Uuid,
    /// Row creation time.
    pub created_at: DateTimeWithTimeZone,
}

/// Entity relations.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Event the reservation belongs to.
    #[sea_orm(
        belongs_to = "super::events::Entity",
        from = "Column::EventId",
        to = "super::events::Column::Id"
    )]
    Event,
    /// Reserved service.
    #[sea_orm(
        belongs_to = "super::solutions::Entity",
        from = "Column::ServiceId",
        to = "super::solutions::Column::Id"
    )]
    Service,
}

impl Related<super::events::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Event.def()
    }
}

impl Related<super::solutions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Service.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
