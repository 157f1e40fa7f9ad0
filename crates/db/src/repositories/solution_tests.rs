//! Row-mapping tests for the solution repository.

use chrono::{TimeZone, Utc};
use planora_core::catalog::{Category, ReservationKind, SolutionKind};
use planora_shared::types::{CategoryId, net_price};
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use uuid::Uuid;

use crate::entities::sea_orm_active_enums as db_enums;
use crate::entities::{solution_snapshots, solutions};

use super::{snapshot_from_row, solution_from_row};

fn category() -> Category {
    Category {
        id: CategoryId::from_uuid(Uuid::new_v4()),
        name: "Music".to_owned(),
    }
}

fn solution_row(kind: db_enums::SolutionKind) -> solutions::Model {
    solutions::Model {
        id: Uuid::new_v4(),
        provider_id: Uuid::new_v4(),
        category_id: Uuid::new_v4(),
        name: "DJ Set".to_owned(),
        kind,
        price: dec!(200),
        discount: dec!(25),
        is_visible: true,
        is_available: true,
        rating: Some(dec!(4.5)),
        reservation_kind: None,
        created_at: Utc::now().into(),
        updated_at: Utc::now().into(),
    }
}

fn discount_strategy() -> impl Strategy<Value = Decimal> {
    (0i64..=10_000i64).prop_map(|n| Decimal::new(n, 2))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// For any valid discount, the mapped solution's net price never
    /// exceeds its gross price and matches the shared formula.
    #[test]
    fn prop_net_price_consistent_after_mapping(discount in discount_strategy()) {
        let mut row = solution_row(db_enums::SolutionKind::Product);
        row.discount = discount;
        let price = row.price;

        let solution = solution_from_row(row, category());

        prop_assert!(solution.net_price() <= price);
        prop_assert_eq!(solution.net_price(), net_price(price, discount));
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn test_maps_product_row() {
        let row = solution_row(db_enums::SolutionKind::Product);
        let row_id = row.id;
        let provider_id = row.provider_id;
        let category = category();

        let solution = solution_from_row(row, category.clone());

        assert_eq!(solution.id.into_inner(), row_id);
        assert_eq!(solution.provider.into_inner(), provider_id);
        assert_eq!(solution.kind, SolutionKind::Product);
        assert_eq!(solution.category, category);
        assert_eq!(solution.price, dec!(200));
        assert_eq!(solution.discount, dec!(25));
        assert_eq!(solution.rating, Some(dec!(4.5)));
        assert_eq!(solution.reservation_kind, None);
        assert!(solution.is_visible);
        assert!(solution.is_available);
    }

    #[test]
    fn test_maps_service_row_with_reservation_kind() {
        let mut row = solution_row(db_enums::SolutionKind::Service);
        row.reservation_kind = Some(db_enums::ReservationKind::Automatic);

        let solution = solution_from_row(row, category());

        assert_eq!(solution.kind, SolutionKind::Service);
        assert_eq!(solution.reservation_kind, Some(ReservationKind::Automatic));
    }

    #[test]
    fn test_maps_snapshot_row() {
        let valid_from = Utc.with_ymd_and_hms(2026, 3, 1, 0, 0, 0).unwrap();
        let solution_id = Uuid::new_v4();
        let row = solution_snapshots::Model {
            id: Uuid::new_v4(),
            solution_id,
            name: "DJ Set".to_owned(),
            price: dec!(180),
            discount: dec!(10),
            valid_from: valid_from.into(),
        };

        let snapshot = snapshot_from_row(row);

        assert_eq!(snapshot.solution_id.into_inner(), solution_id);
        assert_eq!(snapshot.name, "DJ Set");
        assert_eq!(snapshot.price, dec!(180));
        assert_eq!(snapshot.discount, dec!(10));
        assert_eq!(snapshot.valid_from, valid_from);
    }
}
