//! Postgres enum mappings.

use planora_core::budget::BudgetItemStatus as CoreBudgetItemStatus;
use planora_core::catalog::{
    ReservationKind as CoreReservationKind, SolutionKind as CoreSolutionKind,
};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Platform role of a user account.
#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "user_role")]
pub enum UserRole {
    /// Plans events and owns budgets.
    #[sea_orm(string_value = "organizer")]
    Organizer,
    /// Offers catalog solutions.
    #[sea_orm(string_value = "provider")]
    Provider,
    /// Platform administration.
    #[sea_orm(string_value = "admin")]
    Admin,
}

/// Product or service.
#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "solution_kind")]
pub enum SolutionKind {
    /// Sold outright.
    #[sea_orm(string_value = "product")]
    Product,
    /// Booked through reservations.
    #[sea_orm(string_value = "service")]
    Service,
}

/// How a service confirms reservations.
#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "reservation_kind")]
pub enum ReservationKind {
    /// Confirmed the moment it is placed.
    #[sea_orm(string_value = "automatic")]
    Automatic,
    /// Confirmed later by the provider.
    #[sea_orm(string_value = "manual")]
    Manual,
}

/// Lifecycle of a budget line.
#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "budget_item_status")]
pub enum BudgetItemStatus {
    /// Planned, nothing committed.
    #[sea_orm(string_value = "planned")]
    Planned,
    /// Waiting for provider confirmation.
    #[sea_orm(string_value = "pending")]
    Pending,
    /// Money committed, line frozen.
    #[sea_orm(string_value = "processed")]
    Processed,
}

impl From<SolutionKind> for CoreSolutionKind {
    fn from(kind: SolutionKind) -> Self {
        match kind {
            SolutionKind::Product => Self::Product,
            SolutionKind::Service => Self::Service,
        }
    }
}

impl From<CoreSolutionKind> for SolutionKind {
    fn from(kind: CoreSolutionKind) -> Self {
        match kind {
            CoreSolutionKind::Product => Self::Product,
            CoreSolutionKind::Service => Self::Service,
        }
    }
}

impl From<ReservationKind> for CoreReservationKind {
    fn from(kind: ReservationKind) -> Self {
        match kind {
            ReservationKind::Automatic => Self::Automatic,
            ReservationKind::Manual => Self::Manual,
        }
    }
}

impl From<CoreReservationKind> for ReservationKind {
    fn from(kind: CoreReservationKind) -> Self {
        match kind {
            CoreReservationKind::Automatic => Self::Automatic,
            CoreReservationKind::Manual => Self::Manual,
        }
    }
}

impl From<BudgetItemStatus> for CoreBudgetItemStatus {
    fn from(status: BudgetItemStatus) -> Self {
        match status {
            BudgetItemStatus::Planned => Self::Planned,
            BudgetItemStatus::Pending => Self::Pending,
            BudgetItemStatus::Processed => Self::Processed,
        }
    }
}

impl From<CoreBudgetItemStatus> for BudgetItemStatus {
    fn from(status: CoreBudgetItemStatus) -> Self {
        match status {
            CoreBudgetItemStatus::Planned => Self::Planned,
            CoreBudgetItemStatus::Pending => Self::Pending,
            CoreBudgetItemStatus::Processed => Self::Processed,
        }
    }
}
