//! Catalog domain types.
//!
//! A [`Solution`] is anything an organizer can put money against: a
//! physical product or a bookable service. Catalog rows are owned by
//! provider users and surface through budget suggestions, purchases,
//! and reservation callbacks.

use chrono::{DateTime, Utc};
use planora_shared::types::{net_price, CategoryId, SolutionId, UserId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Whether a catalog entry is a physical product or a bookable service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SolutionKind {
    /// Sold outright; purchasing processes the budget line immediately.
    Product,
    /// Booked through a reservation flow; processing may be deferred.
    Service,
}

/// How a service confirms reservations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReservationKind {
    /// The booking is confirmed the moment it is placed.
    Automatic,
    /// The provider confirms the booking later.
    Manual,
}

/// A catalog category. Budget lines and active-category sets point here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Category id.
    pub id: CategoryId,
    /// Display name.
    pub name: String,
}

/// A purchasable catalog entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Solution {
    /// Solution id.
    pub id: SolutionId,
    /// Display name.
    pub name: String,
    /// Product or service.
    pub kind: SolutionKind,
    /// Gross price before any discount.
    pub price: Decimal,
    /// Discount percentage in `[0, 100]`.
    pub discount: Decimal,
    /// The category this entry is listed under.
    pub category: Category,
    /// Provider user offering this entry.
    pub provider: UserId,
    /// Whether the entry shows up publicly.
    pub is_visible: bool,
    /// Whether the entry can currently be booked or bought.
    pub is_available: bool,
    /// Average rating, absent until the first review lands.
    pub rating: Option<Decimal>,
    /// Set for services only.
    pub reservation_kind: Option<ReservationKind>,
}

impl Solution {
    /// Price after applying the percentage discount.
    #[must_use]
    pub fn net_price(&self) -> Decimal {
        net_price(self.price, self.discount)
    }

    /// Overwrites the display fields with a historical snapshot.
    ///
    /// Processed budget lines render the solution as it looked at
    /// processing time, not as it looks today.
    pub fn restore(&mut self, snapshot: &SolutionSnapshot) {
        self.name = snapshot.name.clone();
        self.price = snapshot.price;
        self.discount = snapshot.discount;
    }
}

/// Point-in-time copy of a solution's display fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolutionSnapshot {
    /// The solution this snapshot belongs to.
    pub solution_id: SolutionId,
    /// Name at snapshot time.
    pub name: String,
    /// Gross price at snapshot time.
    pub price: Decimal,
    /// Discount percentage at snapshot time.
    pub discount: Decimal,
    /// When this state became current.
    pub valid_from: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use uuid::Uuid;

    fn catering() -> Solution {
        Solution {
            id: SolutionId::from_uuid(Uuid::new_v4()),
            name: "Catering Deluxe".to_owned(),
            kind: SolutionKind::Service,
            price: dec!(200.00),
            discount: dec!(25),
            category: Category {
                id: CategoryId::from_uuid(Uuid::new_v4()),
                name: "Catering".to_owned(),
            },
            provider: UserId::from_uuid(Uuid::new_v4()),
            is_visible: true,
            is_available: true,
            rating: None,
            reservation_kind: Some(ReservationKind::Manual),
        }
    }

    #[test]
    fn net_price_applies_discount() {
        assert_eq!(catering().net_price(), dec!(150.0000));
    }

    #[test]
    fn restore_rewinds_display_fields_only() {
        let mut solution = catering();
        let snapshot = SolutionSnapshot {
            solution_id: solution.id,
            name: "Catering Standard".to_owned(),
            price: dec!(120.00),
            discount: dec!(0),
            valid_from: Utc::now(),
        };

        solution.restore(&snapshot);

        assert_eq!(solution.name, "Catering Standard");
        assert_eq!(solution.price, dec!(120.00));
        assert_eq!(solution.discount, dec!(0));
        assert_eq!(solution.kind, SolutionKind::Service);
        assert!(solution.is_visible);
    }

    #[test]
    fn kind_serializes_upper_snake() {
        let json = serde_json::to_string(&SolutionKind::Product).unwrap();
        assert_eq!(json, "\"PRODUCT\"");
        let json = serde_json::to_string(&ReservationKind::Automatic).unwrap();
        assert_eq!(json, "\"AUTOMATIC\"");
    }
}
