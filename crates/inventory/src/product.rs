//! Product entity and stock movement direction.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Direction of a stock movement: `In` increases the on-hand quantity,
/// `Out` decreases it (bounded by what is available).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Movement {
    In,
    Out,
}

/// A catalog entry: unit price (excluding tax) and units on hand, keyed by
/// name. Names are matched case-insensitively everywhere.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub(crate) name: String,
    pub(crate) price: Decimal,
    pub(crate) quantity: i64,
    /// Derived: price x quantity, inflated by the global tax rate. Populated
    /// only by the read path, never trusted between reads.
    pub(crate) total_value: Option<Decimal>,
}

impl Product {
    pub(crate) fn new(name: String, price: Decimal, quantity: i64) -> Self {
        Self {
            name,
            price,
            quantity,
            total_value: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Decimal {
        self.price
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    pub fn total_value(&self) -> Option<Decimal> {
        self.total_value
    }
}
