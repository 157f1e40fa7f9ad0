//! User accounts.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::sea_orm_active_enums::UserRole;

/// A platform account. Authentication happens upstream; this row only
/// carries identity and role.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    /// Primary key.
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    /// Login identity, unique.
    #[sea_orm(unique)]
    pub email: String,
    /// Display name.
    pub full_name: String,
    /// Platform role.
    pub role: UserRole,
    /// Deactivated accounts keep their rows but cannot act.
    pub is_active: bool,
    /// Row creation time.
    pub created_at: DateTimeWithTimeZone,
    /// Last modification time.
    pub updated_at: DateTimeWithTimeZone,
}

/// Entity relations.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Events organized by this user.
    #[sea_orm(has_many = "super::events::Entity")]
    Events,
    /// Solutions offered by this user.
    #[sea_orm(has_many = "super::solutions::Entity")]
    Solutions,
}

impl Related<super::events::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Events.def()
    }
}

impl Related<super::solutions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Solutions.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
