//! Property-based tests for the budget ledger totals.

use chrono::Utc;
use planora_shared::types::{CategoryId, SolutionId, UserId};
use proptest::prelude::*;
use rust_decimal::Decimal;

use super::ledger::{Budget, BudgetItem};
use crate::catalog::{Category, Solution, SolutionKind};

#[derive(Debug, Clone)]
enum LedgerOp {
    Add {
        planned_cents: i64,
        net_cents: i64,
        processed: bool,
    },
    Remove {
        slot: usize,
    },
}

fn ledger_op() -> impl Strategy<Value = LedgerOp> {
    prop_oneof![
        (0i64..1_000_000, 0i64..1_000_000, any::<bool>()).prop_map(
            |(planned_cents, net_cents, processed)| LedgerOp::Add {
                planned_cents,
                net_cents,
                processed,
            }
        ),
        any::<usize>().prop_map(|slot| LedgerOp::Remove { slot }),
    ]
}

fn throwaway_solution() -> Solution {
    Solution {
        id: SolutionId::new(),
        name: "Prop".to_owned(),
        kind: SolutionKind::Product,
        price: Decimal::ZERO,
        discount: Decimal::ZERO,
        category: Category {
            id: CategoryId::new(),
            name: "Prop".to_owned(),
        },
        provider: UserId::new(),
        is_visible: true,
        is_available: true,
        rating: None,
        reservation_kind: None,
    }
}

proptest! {
    /// After any add/remove sequence the planned total equals the sum
    /// of the lines still present, and the spent total equals the sum
    /// of net prices of lines that entered the budget processed.
    #[test]
    fn test_totals_follow_the_lines(ops in prop::collection::vec(ledger_op(), 0..40)) {
        let mut budget = Budget::new();
        let mut expected_spent = Decimal::ZERO;

        for op in ops {
            match op {
                LedgerOp::Add { planned_cents, net_cents, processed } => {
                    let planned = Decimal::new(planned_cents, 2);
                    let net = Decimal::new(net_cents, 2);
                    let solution = throwaway_solution();
                    let item = if processed {
                        expected_spent += net;
                        BudgetItem::processed(&solution, planned, Utc::now())
                    } else {
                        BudgetItem::planned(&solution, planned)
                    };
                    budget.add_item(item, net);
                }
                LedgerOp::Remove { slot } => {
                    if budget.items().is_empty() {
                        continue;
                    }
                    let index = slot % budget.items().len();
                    let target = &budget.items()[index];
                    let (id, frozen) = (target.id(), target.is_processed());
                    let removed = budget.remove_item(id);
                    prop_assert_eq!(removed, !frozen);
                }
            }

            let line_sum: Decimal = budget
                .items()
                .iter()
                .map(BudgetItem::planned_amount)
                .sum();
            prop_assert_eq!(budget.planned_amount(), line_sum);
            prop_assert_eq!(budget.spent_amount(), expected_spent);
        }
    }

    /// Removing a processed line is a no-op for both the line list
    /// and the totals.
    #[test]
    fn test_processed_lines_never_leave(planned_cents in 0i64..1_000_000, net_cents in 0i64..1_000_000) {
        let planned = Decimal::new(planned_cents, 2);
        let net = Decimal::new(net_cents, 2);
        let solution = throwaway_solution();

        let mut budget = Budget::new();
        let item = BudgetItem::processed(&solution, planned, Utc::now());
        let id = item.id();
        budget.add_item(item, net);

        prop_assert!(!budget.remove_item(id));
        prop_assert_eq!(budget.items().len(), 1);
        prop_assert_eq!(budget.planned_amount(), planned);
        prop_assert_eq!(budget.spent_amount(), net);
    }
}
