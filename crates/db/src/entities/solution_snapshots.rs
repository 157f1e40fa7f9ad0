//! Solution price history.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Display fields of a solution as they stood from `valid_from`
/// onwards. A new row is appended on every price-affecting edit.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "solution_snapshots")]
pub struct Model {
    /// Primary key.
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    /// Solution this row belongs to.
    pub solution_id: Uuid,
    /// Name at the time.
    pub name: String,
    /// Gross price at the time.
    pub price: Decimal,
    /// Discount percentage at the time.
    pub discount: Decimal,
    /// Start of this row's validity window.
    pub valid_from: DateTimeWithTimeZone,
}

/// Entity relations.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Solution this snapshot captures.
    #[sea_orm(
        belongs_to = "super::solutions::Entity",
        from = "Column::SolutionId",
        to = "super::solutions::Column::Id"
    )]
    Solution,
}

impl Related<super::solutions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Solution.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
