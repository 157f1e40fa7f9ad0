//! `SeaORM` entity definitions for the platform schema.

pub mod budget_active_categories;
pub mod budget_items;
pub mod budgets;
pub mod categories;
pub mod events;
pub mod reservations;
pub mod sea_orm_active_enums;
pub mod solution_snapshots;
pub mod solutions;
pub mod users;
