//! Row-mapping tests for the event repository.
//!
//! The mapping functions are pure, so they are exercised against
//! hand-built entity rows without a live database.

use chrono::{DateTime, FixedOffset, TimeZone, Utc};
use planora_core::budget::BudgetItemStatus;
use planora_core::catalog::{Category, SolutionKind};
use planora_shared::types::CategoryId;
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use uuid::Uuid;

use crate::entities::budget_items;
use crate::entities::sea_orm_active_enums as db_enums;

use super::item_from_row;

fn category() -> Category {
    Category {
        id: CategoryId::from_uuid(Uuid::new_v4()),
        name: "Catering".to_owned(),
    }
}

fn item_row(
    status: db_enums::BudgetItemStatus,
    processed_at: Option<DateTime<FixedOffset>>,
) -> budget_items::Model {
    budget_items::Model {
        id: Uuid::new_v4(),
        event_id: Uuid::new_v4(),
        solution_id: Uuid::new_v4(),
        kind: db_enums::SolutionKind::Product,
        category_id: Uuid::new_v4(),
        planned_amount: dec!(120),
        status,
        processed_at,
        created_at: Utc::now().into(),
        updated_at: Utc::now().into(),
    }
}

fn amount_strategy() -> impl Strategy<Value = Decimal> {
    (0i64..1_000_000i64).prop_map(|n| Decimal::new(n, 2))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// The planned amount passes through hydration unchanged, at full
    /// precision.
    #[test]
    fn prop_planned_amount_survives_hydration(amount in amount_strategy()) {
        let mut row = item_row(db_enums::BudgetItemStatus::Planned, None);
        row.planned_amount = amount;

        let item = item_from_row(row, category());

        prop_assert_eq!(item.planned_amount(), amount);
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn test_maps_open_row() {
        let row = item_row(db_enums::BudgetItemStatus::Planned, None);
        let row_id = row.id;
        let solution_id = row.solution_id;
        let category = category();

        let item = item_from_row(row, category.clone());

        assert_eq!(item.id().into_inner(), row_id);
        assert_eq!(item.solution_id().into_inner(), solution_id);
        assert_eq!(item.kind(), SolutionKind::Product);
        assert_eq!(item.category(), &category);
        assert_eq!(item.planned_amount(), dec!(120));
        assert_eq!(item.status(), BudgetItemStatus::Planned);
        assert!(!item.is_processed());
    }

    #[test]
    fn test_maps_processed_row_with_utc_timestamp() {
        let at = Utc.with_ymd_and_hms(2026, 5, 1, 12, 0, 0).unwrap();
        let row = item_row(db_enums::BudgetItemStatus::Processed, Some(at.into()));

        let item = item_from_row(row, category());

        assert_eq!(item.status(), BudgetItemStatus::Processed);
        assert_eq!(item.processed_at(), Some(at));
        assert!(item.is_processed());
    }

    #[test]
    fn test_maps_offset_timestamp_to_utc() {
        // +02:00 local noon is 10:00 UTC.
        let offset = FixedOffset::east_opt(2 * 3600).unwrap();
        let local = offset.with_ymd_and_hms(2026, 5, 1, 12, 0, 0).unwrap();
        let row = item_row(db_enums::BudgetItemStatus::Processed, Some(local));

        let item = item_from_row(row, category());

        assert_eq!(
            item.processed_at(),
            Some(Utc.with_ymd_and_hms(2026, 5, 1, 10, 0, 0).unwrap())
        );
    }

    #[test]
    fn test_status_round_trips_through_db_enum() {
        for status in [
            db_enums::BudgetItemStatus::Planned,
            db_enums::BudgetItemStatus::Pending,
            db_enums::BudgetItemStatus::Processed,
        ] {
            let domain = BudgetItemStatus::from(status.clone());
            let back = db_enums::BudgetItemStatus::from(domain);
            assert_eq!(back, status);
        }
    }

    #[test]
    fn test_kind_round_trips_through_db_enum() {
        for kind in [
            db_enums::SolutionKind::Product,
            db_enums::SolutionKind::Service,
        ] {
            let domain = SolutionKind::from(kind.clone());
            let back = db_enums::SolutionKind::from(domain);
            assert_eq!(back, kind);
        }
    }
}
