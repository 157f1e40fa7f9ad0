//! Request and response shapes for the budget flows.

use chrono::{DateTime, Utc};
use planora_shared::types::{BudgetItemId, CategoryId, SolutionId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::budget::ledger::{Budget, BudgetItem, BudgetItemStatus};
use crate::catalog::{Category, Solution, SolutionKind};
use crate::events::OrganizerItem;

/// Puts money against a solution, either by purchase or by planning.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetItemRequest {
    /// Catalog solution to budget for.
    pub solution_id: SolutionId,
    /// Money set aside for it.
    pub planned_amount: Decimal,
}

/// Changes the planned amount of an existing line.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateBudgetItemRequest {
    /// New planned amount.
    pub planned_amount: Decimal,
}

/// A category as shown to clients.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryView {
    /// Category id.
    pub id: CategoryId,
    /// Display name.
    pub name: String,
}

impl From<&Category> for CategoryView {
    fn from(category: &Category) -> Self {
        Self {
            id: category.id,
            name: category.name.clone(),
        }
    }
}

/// A budget line joined with the solution fields clients render.
///
/// For processed lines the solution fields come from the snapshot
/// that was current at processing time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetItemView {
    /// Line id.
    pub id: BudgetItemId,
    /// Money planned for this line.
    pub planned_amount: Decimal,
    /// Lifecycle state.
    pub status: BudgetItemStatus,
    /// When the line was processed, if it was.
    pub processed_at: Option<DateTime<Utc>>,
    /// The solution this line points at.
    pub solution_id: SolutionId,
    /// Solution display name.
    pub solution_name: String,
    /// Product or service.
    pub kind: SolutionKind,
    /// Category captured at line creation.
    pub category: CategoryView,
    /// Gross price.
    pub price: Decimal,
    /// Discount percentage.
    pub discount: Decimal,
    /// Price after discount.
    pub net_price: Decimal,
}

impl BudgetItemView {
    /// Renders a line with the given solution state, live or restored.
    #[must_use]
    pub fn new(item: &BudgetItem, solution: &Solution) -> Self {
        Self {
            id: item.id(),
            planned_amount: item.planned_amount(),
            status: item.status(),
            processed_at: item.processed_at(),
            solution_id: item.solution_id(),
            solution_name: solution.name.clone(),
            kind: item.kind(),
            category: item.category().into(),
            price: solution.price,
            discount: solution.discount,
            net_price: solution.net_price(),
        }
    }
}

/// The whole ledger as shown to the organizer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetView {
    /// Total planned across all lines.
    pub planned_amount: Decimal,
    /// Total committed through processed-at-insertion lines.
    pub spent_amount: Decimal,
    /// Categories the organizer is planning in.
    pub active_categories: Vec<CategoryView>,
    /// All lines with live solution data.
    pub items: Vec<BudgetItemView>,
}

impl BudgetView {
    /// Assembles the view from the aggregate and pre-rendered lines.
    #[must_use]
    pub fn new(budget: &Budget, items: Vec<BudgetItemView>) -> Self {
        Self {
            planned_amount: budget.planned_amount(),
            spent_amount: budget.spent_amount(),
            active_categories: budget.active_categories().iter().map(Into::into).collect(),
            items,
        }
    }
}

/// A catalog entry offered as a budget suggestion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestionView {
    /// Suggested solution.
    pub solution_id: SolutionId,
    /// Display name.
    pub name: String,
    /// Product or service.
    pub kind: SolutionKind,
    /// Gross price.
    pub price: Decimal,
    /// Discount percentage.
    pub discount: Decimal,
    /// Price after discount.
    pub net_price: Decimal,
    /// Average rating, if reviewed.
    pub rating: Option<Decimal>,
}

impl From<&Solution> for SuggestionView {
    fn from(solution: &Solution) -> Self {
        Self {
            solution_id: solution.id,
            name: solution.name.clone(),
            kind: solution.kind,
            price: solution.price,
            discount: solution.discount,
            net_price: solution.net_price(),
            rating: solution.rating,
        }
    }
}

/// The product returned after a successful purchase.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductView {
    /// Purchased solution.
    pub id: SolutionId,
    /// Display name.
    pub name: String,
    /// Gross price.
    pub price: Decimal,
    /// Discount percentage.
    pub discount: Decimal,
    /// Price actually charged.
    pub net_price: Decimal,
    /// The product's category.
    pub category: CategoryView,
}

impl From<&Solution> for ProductView {
    fn from(solution: &Solution) -> Self {
        Self {
            id: solution.id,
            name: solution.name.clone(),
            price: solution.price,
            discount: solution.discount,
            net_price: solution.net_price(),
            category: (&solution.category).into(),
        }
    }
}

/// A processed line surfaced for review, deduplicated by solution
/// across all of an organizer's events.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrganizerItemView {
    /// The solution eligible for review.
    pub solution_id: SolutionId,
    /// Display name.
    pub name: String,
    /// Product or service.
    pub kind: SolutionKind,
    /// Category captured at line creation.
    pub category: CategoryView,
    /// Average rating, if reviewed.
    pub rating: Option<Decimal>,
    /// When the surviving line was processed.
    pub processed_at: Option<DateTime<Utc>>,
}

impl From<&OrganizerItem> for OrganizerItemView {
    fn from(row: &OrganizerItem) -> Self {
        Self {
            solution_id: row.solution.id,
            name: row.solution.name.clone(),
            kind: row.item.kind(),
            category: row.item.category().into(),
            rating: row.solution.rating,
            processed_at: row.item.processed_at(),
        }
    }
}
