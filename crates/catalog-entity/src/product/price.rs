//! Fixed-point price handling.
//!
//! Prices are `decimal(18, 2)`: two fractional digits and at most sixteen
//! integer digits. The store keeps them as whole cents.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use validator::ValidationError;

/// Number of fractional digits kept.
pub const SCALE: u32 = 2;

/// Total number of significant digits allowed.
pub const PRECISION: u32 = 18;

/// Round a price to the stored scale.
pub fn normalize(price: Decimal) -> Decimal {
    price.round_dp_with_strategy(SCALE, RoundingStrategy::MidpointAwayFromZero)
}

/// Convert a price to whole cents, or `None` if it exceeds the precision.
pub fn to_cents(price: Decimal) -> Option<i64> {
    let rounded = normalize(price);
    if !fits_precision(rounded) {
        return None;
    }
    (rounded * Decimal::ONE_HUNDRED).to_i64()
}

/// Convert whole cents back to a price.
pub fn from_cents(cents: i64) -> Decimal {
    Decimal::new(cents, SCALE)
}

fn fits_precision(price: Decimal) -> bool {
    let limit = Decimal::from(10_i64.pow(PRECISION - SCALE));
    price.abs() < limit
}

/// `validator` hook for the `price` field.
pub fn validate_price(price: &Decimal) -> Result<(), ValidationError> {
    if fits_precision(normalize(*price)) {
        Ok(())
    } else {
        let mut err = ValidationError::new("precision");
        err.message = Some("Price must have at most 16 integer digits".into());
        Err(err)
    }
}
