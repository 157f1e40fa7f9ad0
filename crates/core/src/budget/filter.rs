//! Cross-event budget item filtering.

use planora_shared::types::UserId;

use crate::budget::ledger::{BudgetItem, BudgetItemStatus};
use crate::catalog::Solution;
use crate::events::Event;

/// Predicate for searching budget lines across all of an organizer's
/// events. The store translates this into a query; the in-memory
/// fakes evaluate [`BudgetItemFilter::matches`] directly.
#[derive(Debug, Clone, Copy)]
pub struct BudgetItemFilter {
    /// Only events owned by this organizer.
    pub organizer: UserId,
    /// Only lines whose status is `PROCESSED`.
    pub processed_only: bool,
    /// Only lines whose solution is still publicly visible.
    pub visible_only: bool,
}

impl BudgetItemFilter {
    /// The review-eligibility filter: processed lines on visible
    /// solutions across the organizer's events.
    #[must_use]
    pub const fn processed_for_organizer(organizer: UserId) -> Self {
        Self {
            organizer,
            processed_only: true,
            visible_only: true,
        }
    }

    /// Evaluates the predicate against one line and its context.
    #[must_use]
    pub fn matches(&self, event: &Event, item: &BudgetItem, solution: &Solution) -> bool {
        event.organizer == self.organizer
            && (!self.visible_only || solution.is_visible)
            && (!self.processed_only || item.status() == BudgetItemStatus::Processed)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, Utc};
    use planora_shared::types::{CategoryId, EventId, SolutionId, UserId};
    use rust_decimal_macros::dec;
    use uuid::Uuid;

    use super::*;
    use crate::budget::Budget;
    use crate::catalog::{Category, SolutionKind};

    fn solution(visible: bool) -> Solution {
        Solution {
            id: SolutionId::from_uuid(Uuid::new_v4()),
            name: "DJ Set".to_owned(),
            kind: SolutionKind::Service,
            price: dec!(300),
            discount: dec!(0),
            category: Category {
                id: CategoryId::from_uuid(Uuid::new_v4()),
                name: "Music".to_owned(),
            },
            provider: UserId::from_uuid(Uuid::new_v4()),
            is_visible: visible,
            is_available: true,
            rating: None,
            reservation_kind: None,
        }
    }

    fn event_for(organizer: UserId) -> Event {
        Event {
            id: EventId::from_uuid(Uuid::new_v4()),
            organizer,
            date: NaiveDate::from_ymd_opt(2026, 6, 20).unwrap(),
            budget: Budget::new(),
        }
    }

    #[test]
    fn matches_processed_visible_for_owner() {
        let organizer = UserId::new();
        let filter = BudgetItemFilter::processed_for_organizer(organizer);
        let event = event_for(organizer);
        let solution = solution(true);
        let mut item = BudgetItem::planned(&solution, dec!(300));
        item.mark_processed(Utc::now());

        assert!(filter.matches(&event, &item, &solution));
    }

    #[test]
    fn rejects_foreign_organizer() {
        let filter = BudgetItemFilter::processed_for_organizer(UserId::new());
        let event = event_for(UserId::new());
        let solution = solution(true);
        let mut item = BudgetItem::planned(&solution, dec!(300));
        item.mark_processed(Utc::now());

        assert!(!filter.matches(&event, &item, &solution));
    }

    #[test]
    fn rejects_hidden_solution() {
        let organizer = UserId::new();
        let filter = BudgetItemFilter::processed_for_organizer(organizer);
        let event = event_for(organizer);
        let solution = solution(false);
        let mut item = BudgetItem::planned(&solution, dec!(300));
        item.mark_processed(Utc::now());

        assert!(!filter.matches(&event, &item, &solution));
    }

    #[test]
    fn rejects_unprocessed_line() {
        let organizer = UserId::new();
        let filter = BudgetItemFilter::processed_for_organizer(organizer);
        let event = event_for(organizer);
        let solution = solution(true);
        let item = BudgetItem::planned(&solution, dec!(300));

        assert!(!filter.matches(&event, &item, &solution));
    }
}
