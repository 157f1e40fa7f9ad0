//! The budget aggregate and its lines.
//!
//! [`Budget`] keeps its item list and money totals private. Items
//! enter through [`Budget::add_item`] and leave through
//! [`Budget::remove_item`]; both adjust `planned_amount` (and
//! `spent_amount` where applicable) in the same call, so the totals
//! are always running sums and are never recomputed from the lines.

use chrono::{DateTime, Utc};
use planora_shared::types::{BudgetItemId, SolutionId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::catalog::{Category, Solution, SolutionKind};

/// Lifecycle of a budget line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BudgetItemStatus {
    /// Planned by the organizer, nothing committed yet.
    Planned,
    /// A manual reservation is waiting for provider confirmation.
    Pending,
    /// The money is committed; the line is frozen.
    Processed,
}

/// One budget line: money planned against a single catalog solution.
///
/// At most one line per solution exists in a budget; the orchestrator
/// upserts by solution id rather than inserting blindly. Once a line
/// is processed its planned amount is frozen and it can never leave
/// the budget.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetItem {
    id: BudgetItemId,
    planned_amount: Decimal,
    solution_id: SolutionId,
    kind: SolutionKind,
    /// Category captured from the solution when the line was created.
    category: Category,
    status: BudgetItemStatus,
    processed_at: Option<DateTime<Utc>>,
}

impl BudgetItem {
    /// A fresh line in `PLANNED` state.
    #[must_use]
    pub fn planned(solution: &Solution, planned_amount: Decimal) -> Self {
        Self::new(solution, planned_amount, BudgetItemStatus::Planned, None)
    }

    /// A fresh line waiting for provider confirmation.
    #[must_use]
    pub fn pending(service: &Solution, planned_amount: Decimal) -> Self {
        Self::new(service, planned_amount, BudgetItemStatus::Pending, None)
    }

    /// A fresh line that is already processed when it enters the
    /// budget. Adding such a line is the only path that raises
    /// [`Budget::spent_amount`].
    #[must_use]
    pub fn processed(service: &Solution, planned_amount: Decimal, at: DateTime<Utc>) -> Self {
        Self::new(service, planned_amount, BudgetItemStatus::Processed, Some(at))
    }

    fn new(
        solution: &Solution,
        planned_amount: Decimal,
        status: BudgetItemStatus,
        processed_at: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            id: BudgetItemId::new(),
            planned_amount,
            solution_id: solution.id,
            kind: solution.kind,
            category: solution.category.clone(),
            status,
            processed_at,
        }
    }

    /// Rehydrates a stored line. The caller is the persistence layer;
    /// stored state is trusted as-is.
    #[must_use]
    pub fn from_parts(
        id: BudgetItemId,
        planned_amount: Decimal,
        solution_id: SolutionId,
        kind: SolutionKind,
        category: Category,
        status: BudgetItemStatus,
        processed_at: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            id,
            planned_amount,
            solution_id,
            kind,
            category,
            status,
            processed_at,
        }
    }

    /// Line id.
    #[must_use]
    pub const fn id(&self) -> BudgetItemId {
        self.id
    }

    /// Money the organizer planned for this line.
    #[must_use]
    pub const fn planned_amount(&self) -> Decimal {
        self.planned_amount
    }

    /// The catalog solution this line points at.
    #[must_use]
    pub const fn solution_id(&self) -> SolutionId {
        self.solution_id
    }

    /// Whether the line is for a product or a service.
    #[must_use]
    pub const fn kind(&self) -> SolutionKind {
        self.kind
    }

    /// Category captured at line creation.
    #[must_use]
    pub const fn category(&self) -> &Category {
        &self.category
    }

    /// Current lifecycle state.
    #[must_use]
    pub const fn status(&self) -> BudgetItemStatus {
        self.status
    }

    /// When the line was processed, if it was.
    #[must_use]
    pub const fn processed_at(&self) -> Option<DateTime<Utc>> {
        self.processed_at
    }

    /// A line counts as processed once its timestamp is set.
    #[must_use]
    pub const fn is_processed(&self) -> bool {
        self.processed_at.is_some()
    }

    /// Moves the line to `PROCESSED`. The timestamp is written once;
    /// confirming an already-processed line keeps the original.
    pub fn mark_processed(&mut self, at: DateTime<Utc>) {
        self.status = BudgetItemStatus::Processed;
        if self.processed_at.is_none() {
            self.processed_at = Some(at);
        }
    }

    /// Moves an unprocessed line to `PENDING`. Processed lines never
    /// transition back.
    pub fn make_pending(&mut self) {
        if self.processed_at.is_none() {
            self.status = BudgetItemStatus::Pending;
        }
    }

    /// Replaces the planned amount of an unprocessed line. Processed
    /// lines keep their amount; callers reject such writes up front.
    pub fn set_planned_amount(&mut self, planned_amount: Decimal) {
        if self.processed_at.is_none() {
            self.planned_amount = planned_amount;
        }
    }
}

/// An event's budget ledger.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Budget {
    planned_amount: Decimal,
    spent_amount: Decimal,
    active_categories: Vec<Category>,
    items: Vec<BudgetItem>,
    /// Bumped by the store on every successful save; stale writers
    /// are rejected.
    version: i64,
}

impl Budget {
    /// An empty budget with zero totals.
    #[must_use]
    pub fn new() -> Self {
        Self {
            planned_amount: Decimal::ZERO,
            spent_amount: Decimal::ZERO,
            active_categories: Vec::new(),
            items: Vec::new(),
            version: 0,
        }
    }

    /// Rehydrates a stored budget. Totals are trusted as stored and
    /// are not recomputed from the lines.
    #[must_use]
    pub fn from_parts(
        planned_amount: Decimal,
        spent_amount: Decimal,
        active_categories: Vec<Category>,
        items: Vec<BudgetItem>,
        version: i64,
    ) -> Self {
        Self {
            planned_amount,
            spent_amount,
            active_categories,
            items,
            version,
        }
    }

    /// Total money planned across all lines.
    #[must_use]
    pub const fn planned_amount(&self) -> Decimal {
        self.planned_amount
    }

    /// Total net price of lines that were already processed when they
    /// entered the budget.
    #[must_use]
    pub const fn spent_amount(&self) -> Decimal {
        self.spent_amount
    }

    /// Categories the organizer is actively planning in.
    #[must_use]
    pub fn active_categories(&self) -> &[Category] {
        &self.active_categories
    }

    /// All budget lines.
    #[must_use]
    pub fn items(&self) -> &[BudgetItem] {
        &self.items
    }

    /// Version this budget was loaded at.
    #[must_use]
    pub const fn version(&self) -> i64 {
        self.version
    }

    /// Adds a line and raises `planned_amount` by its planned amount.
    ///
    /// When the line is already processed at insertion, `spent_amount`
    /// also rises by `net_price`. Lines processed after insertion
    /// never touch `spent_amount`.
    pub fn add_item(&mut self, item: BudgetItem, net_price: Decimal) {
        self.planned_amount += item.planned_amount;
        if item.is_processed() {
            self.spent_amount += net_price;
        }
        self.items.push(item);
    }

    /// Removes an unprocessed line and lowers `planned_amount` by its
    /// planned amount. Returns whether anything was removed; processed
    /// lines stay put.
    pub fn remove_item(&mut self, item_id: BudgetItemId) -> bool {
        let Some(index) = self.items.iter().position(|item| item.id == item_id) else {
            return false;
        };
        if self.items[index].is_processed() {
            return false;
        }
        let item = self.items.remove(index);
        self.planned_amount -= item.planned_amount;
        true
    }

    /// Swaps the whole active-category set.
    pub fn replace_active_categories(&mut self, categories: Vec<Category>) {
        self.active_categories = categories;
    }

    /// Looks up a line by its id.
    #[must_use]
    pub fn item_by_id(&self, item_id: BudgetItemId) -> Option<&BudgetItem> {
        self.items.iter().find(|item| item.id == item_id)
    }

    /// Mutable lookup by line id. In-place edits go through the
    /// line's own methods; the list itself cannot change this way.
    pub fn item_by_id_mut(&mut self, item_id: BudgetItemId) -> Option<&mut BudgetItem> {
        self.items.iter_mut().find(|item| item.id == item_id)
    }

    /// Looks up the line for a solution, if one exists.
    #[must_use]
    pub fn item_by_solution(&self, solution_id: SolutionId) -> Option<&BudgetItem> {
        self.items.iter().find(|item| item.solution_id == solution_id)
    }

    /// Mutable lookup by solution id.
    pub fn item_by_solution_mut(&mut self, solution_id: SolutionId) -> Option<&mut BudgetItem> {
        self.items
            .iter_mut()
            .find(|item| item.solution_id == solution_id)
    }
}

impl Default for Budget {
    fn default() -> Self {
        Self::new()
    }
}
