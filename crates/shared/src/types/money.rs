//! Price arithmetic with decimal precision.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! All amounts are `rust_decimal::Decimal` with arbitrary precision.

use rust_decimal::Decimal;

/// Computes the net price of a catalog offering after its percentage
/// discount.
///
/// `discount` is a percentage in the range `[0, 100]`. A discount of 20
/// on a price of 100 yields 80.
#[must_use]
pub fn net_price(price: Decimal, discount: Decimal) -> Decimal {
    price * (Decimal::ONE - discount / Decimal::ONE_HUNDRED)
}

/// Returns true if the value is a valid percentage discount (0 to 100
/// inclusive).
#[must_use]
pub fn is_valid_discount(discount: Decimal) -> bool {
    discount >= Decimal::ZERO && discount <= Decimal::ONE_HUNDRED
}

/// Returns true if the amount is usable as a planned or price amount
/// (non-negative).
#[must_use]
pub fn is_valid_amount(amount: Decimal) -> bool {
    amount >= Decimal::ZERO
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    #[rstest]
    #[case(dec!(100), dec!(0), dec!(100))]
    #[case(dec!(100), dec!(20), dec!(80))]
    #[case(dec!(100), dec!(100), dec!(0))]
    #[case(dec!(250), dec!(10), dec!(225))]
    #[case(dec!(0), dec!(50), dec!(0))]
    fn test_net_price(#[case] price: Decimal, #[case] discount: Decimal, #[case] expected: Decimal) {
        assert_eq!(net_price(price, discount), expected);
    }

    #[test]
    fn test_net_price_keeps_precision() {
        // 33.33 with 15% off must not round through floats
        assert_eq!(net_price(dec!(33.33), dec!(15)), dec!(28.3305));
    }

    #[test]
    fn test_discount_bounds() {
        assert!(is_valid_discount(dec!(0)));
        assert!(is_valid_discount(dec!(100)));
        assert!(is_valid_discount(dec!(55.5)));
        assert!(!is_valid_discount(dec!(-1)));
        assert!(!is_valid_discount(dec!(100.01)));
    }

    #[test]
    fn test_amount_bounds() {
        assert!(is_valid_amount(dec!(0)));
        assert!(is_valid_amount(dec!(123.45)));
        assert!(!is_valid_amount(dec!(-0.01)));
    }
}
