//! Flat-rate discount pricing.

/// Fraction of the list price taken off every product.
pub const DISCOUNT_RATE: f64 = 0.1;

/// Discount granted on `price`.
pub fn discount_for(price: f64) -> f64 {
    DISCOUNT_RATE * price
}

/// Price after discount.
///
/// Computed as `price - discount` so a zero price costs zero without dividing
/// by the price.
pub fn cost_for(price: f64) -> f64 {
    price - discount_for(price)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn discount_is_ten_percent() {
        assert_eq!(discount_for(20.0), 2.0);
        assert_eq!(discount_for(500.0), 50.0);
    }

    #[test]
    fn sample_costs_are_exact() {
        assert_eq!(cost_for(20.0), 18.0);
        assert_eq!(cost_for(500.0), 450.0);
        assert_eq!(cost_for(15.0), 13.5);
    }

    #[test]
    fn zero_price_costs_nothing() {
        assert_eq!(discount_for(0.0), 0.0);
        assert_eq!(cost_for(0.0), 0.0);
    }

    #[test]
    fn negative_price_is_not_rejected() {
        assert!((cost_for(-10.0) - -9.0).abs() < 1e-9);
    }
}
