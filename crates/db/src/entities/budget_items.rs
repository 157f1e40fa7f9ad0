//! Budget lines.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::sea_orm_active_enums::{BudgetItemStatus, SolutionKind};

/// One line of an event budget. At most one line per solution and
/// event.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "budget_items")]
pub struct Model {
    /// Primary key.
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    /// Owning budget.
    pub event_id: Uuid,
    /// Solution this line is for.
    pub solution_id: Uuid,
    /// Kind of the solution at the time the line was created.
    pub kind: SolutionKind,
    /// Category of the solution at the time the line was created.
    pub category_id: Uuid,
    /// Money set aside for this line.
    pub planned_amount: Decimal,
    /// Lifecycle state.
    pub status: BudgetItemStatus,
    /// When the line was processed, null while it is open.
    pub processed_at: Option<DateTimeWithTimeZone>,
    /// Row creation time.
    pub created_at: DateTimeWithTimeZone,
    /// Last modification time.
    pub updated_at: DateTimeWithTimeZone,
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
    /// Solution this line points at.
    #[sea_orm(
        belongs_to = "super::solutions::Entity",
        from = "Column::SolutionId",
        to = "super::solutions::Column::Id"
    )]
    Solution,
    /// Category recorded on the line.
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

impl Related<super::solutions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Solution.def()
    }
}

impl Related<super::categories::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Category.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
