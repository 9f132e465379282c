use serde::{Deserialize, Serialize};

/// VAT applied on the confirmation step.
pub const TAX_RATE: f64 = 0.07;

/// Price breakdown shown before confirming a booking. Amounts are whole
/// baht, rounded to the nearest unit.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Quote {
    pub price: i64,
    pub tax: i64,
    pub total: i64,
}

impl Quote {
    pub fn for_price(price: i64) -> Self {
        Self {
            price,
            tax: (price as f64 * TAX_RATE).round() as i64,
            total: (price as f64 * (1.0 + TAX_RATE)).round() as i64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_for_10000() {
        let quote = Quote::for_price(10_000);
        assert_eq!(quote.tax, 700);
        assert_eq!(quote.total, 10_700);
    }

    #[test]
    fn test_quote_rounds_to_nearest_unit() {
        // 8900 * 0.07 = 623.0, 12500 * 0.07 = 875.0
        assert_eq!(Quote::for_price(8_900).tax, 623);
        assert_eq!(Quote::for_price(12_500).total, 13_375);
        // 4801 * 0.07 = 336.07 rounds down
        assert_eq!(Quote::for_price(4_801).tax, 336);
    }
}
