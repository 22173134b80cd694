use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use crate::error::AppError;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub stock: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Product {
    /// Unsaved product; `id` and `created_at` are filled in by the repository.
    pub fn new(name: impl Into<String>, description: impl Into<String>, price: Decimal, stock: i32) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            price,
            stock,
            ..Default::default()
        }
    }

    pub fn is_valid(&self) -> bool {
        !self.name.trim().is_empty() && self.price >= Decimal::ZERO && self.stock >= 0
    }

    /// Price after taking `percentage` percent off. Accepts 0 through 100 inclusive.
    pub fn calculate_discounted_price(&self, percentage: Decimal) -> Result<Decimal, AppError> {
        if percentage < Decimal::ZERO || percentage > Decimal::ONE_HUNDRED {
            return Err(AppError::invalid_argument(
                "Discount percentage must be between 0 and 100",
            ));
        }

        Ok(self.price * (Decimal::ONE - percentage / Decimal::ONE_HUNDRED))
    }

    pub fn is_available(&self) -> bool {
        self.stock > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(name: &str, price: i64, stock: i32) -> Product {
        Product::new(name, "", Decimal::from(price), stock)
    }

    #[test]
    fn valid_product_passes() {
        assert!(product("Widget", 10, 5).is_valid());
        assert!(product("Widget", 0, 0).is_valid());
    }

    #[test]
    fn blank_names_are_invalid() {
        assert!(!product("", 10, 5).is_valid());
        assert!(!product("   ", 10, 5).is_valid());
        assert!(!product("\t\n", 10, 5).is_valid());
    }

    #[test]
    fn negative_price_is_invalid() {
        let mut p = product("Widget", 0, 5);
        p.price = Decimal::new(-1, 2);
        assert!(!p.is_valid());
    }

    #[test]
    fn negative_stock_is_invalid() {
        assert!(!product("Widget", 10, -1).is_valid());
    }

    #[test]
    fn discount_of_ten_percent() {
        let p = product("Widget", 100, 1);
        assert_eq!(p.calculate_discounted_price(Decimal::from(10)).unwrap(), Decimal::from(90));
    }

    #[test]
    fn discount_boundaries() {
        let p = Product::new("Widget", "", Decimal::new(1999, 2), 1);
        assert_eq!(p.calculate_discounted_price(Decimal::ZERO).unwrap(), p.price);
        assert_eq!(p.calculate_discounted_price(Decimal::ONE_HUNDRED).unwrap(), Decimal::ZERO);
    }

    #[test]
    fn discount_out_of_range_is_rejected() {
        let p = product("Widget", 100, 1);
        for pct in [-1, 101] {
            let err = p.calculate_discounted_price(Decimal::from(pct)).unwrap_err();
            assert!(matches!(err, AppError::InvalidArgument(_)), "percentage {pct}");
        }
    }

    #[test]
    fn discount_decreases_as_percentage_grows() {
        let p = Product::new("Widget", "", Decimal::new(4999, 2), 1);
        let prices: Vec<Decimal> = (0..=100)
            .map(|pct| p.calculate_discounted_price(Decimal::from(pct)).unwrap())
            .collect();
        assert!(prices.windows(2).all(|w| w[1] < w[0]));
    }

    #[test]
    fn discount_does_not_change_price() {
        let p = product("Widget", 100, 1);
        p.calculate_discounted_price(Decimal::from(50)).unwrap();
        assert_eq!(p.price, Decimal::from(100));
    }

    #[test]
    fn availability_follows_stock() {
        assert!(product("Widget", 1, 1).is_available());
        assert!(!product("Widget", 1, 0).is_available());
        assert!(!product("Widget", 1, -3).is_available());
    }
}
