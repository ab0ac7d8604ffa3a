//! The inventory aggregate: product collection plus the global tax rate.
//!
//! Every operation completes synchronously against in-memory state and either
//! fully succeeds or leaves the aggregate exactly as it was. Hosts that serve
//! concurrent callers must wrap the aggregate in a mutual-exclusion guard:
//! find-then-mutate sequences are only atomic under a single lock.

use rust_decimal::Decimal;

use crate::error::{DomainError, DomainResult};
use crate::product::{Movement, Product};

/// Tax rate applied to fresh ledgers, as a percentage.
const DEFAULT_TAX_RATE: u32 = 16;

/// Aggregate root owning the product collection and the tax rate.
///
/// Insertion order is preserved and product names are unique (compared
/// case-insensitively), so lookups are unambiguous.
#[derive(Debug, Clone)]
pub struct Inventory {
    products: Vec<Product>,
    tax_rate: Decimal,
}

impl Default for Inventory {
    fn default() -> Self {
        Self::new()
    }
}

impl Inventory {
    /// Create an empty ledger with the default tax rate.
    pub fn new() -> Self {
        Self {
            products: Vec::new(),
            tax_rate: Decimal::from(DEFAULT_TAX_RATE),
        }
    }

    /// Current global tax rate, as a percentage.
    pub fn tax_rate(&self) -> Decimal {
        self.tax_rate
    }

    /// Replace the global tax rate. Negative rates are rejected and the
    /// previous rate is retained.
    pub fn set_tax_rate(&mut self, rate: Decimal) -> DomainResult<()> {
        if rate < Decimal::ZERO {
            return Err(DomainError::validation("tax rate cannot be negative"));
        }
        self.tax_rate = rate;
        Ok(())
    }

    /// Register a new product. The returned product has `total_value` unset;
    /// totals are populated by the read path only.
    pub fn add_product(
        &mut self,
        name: impl Into<String>,
        price: Decimal,
        quantity: i64,
    ) -> DomainResult<Product> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation("product name cannot be empty"));
        }
        if price < Decimal::ZERO {
            return Err(DomainError::validation("price cannot be negative"));
        }
        if quantity < 0 {
            return Err(DomainError::validation("quantity cannot be negative"));
        }
        if self.position(&name).is_some() {
            return Err(DomainError::conflict(format!(
                "product '{name}' already exists"
            )));
        }

        let product = Product::new(name, price, quantity);
        self.products.push(product.clone());
        Ok(product)
    }

    /// Remove a product by name.
    pub fn remove_product(&mut self, name: &str) -> DomainResult<()> {
        match self.position(name) {
            Some(idx) => {
                self.products.remove(idx);
                Ok(())
            }
            None => Err(DomainError::not_found()),
        }
    }

    /// Set a product's unit price. A negative price is rejected with the
    /// current price reported back unchanged.
    pub fn update_price(&mut self, name: &str, new_price: Decimal) -> DomainResult<Decimal> {
        let idx = self.position(name).ok_or_else(DomainError::not_found)?;
        let product = &mut self.products[idx];

        if new_price < Decimal::ZERO {
            return Err(DomainError::InvalidPrice {
                current: product.price,
            });
        }

        product.price = new_price;
        Ok(product.price)
    }

    /// Apply a directional stock movement and return the resulting quantity.
    ///
    /// An `Out` movement larger than the on-hand quantity is rejected outright
    /// (no partial fulfillment) with the current quantity reported back.
    pub fn record_movement(
        &mut self,
        name: &str,
        delta: i64,
        movement: Movement,
    ) -> DomainResult<i64> {
        let idx = self.position(name).ok_or_else(DomainError::not_found)?;
        if delta < 0 {
            return Err(DomainError::validation(
                "movement quantity cannot be negative",
            ));
        }

        let product = &mut self.products[idx];
        match movement {
            Movement::In => {
                product.quantity = product.quantity.checked_add(delta).ok_or_else(|| {
                    DomainError::validation("movement would overflow the on-hand quantity")
                })?;
            }
            Movement::Out => {
                if delta > product.quantity {
                    return Err(DomainError::InsufficientQuantity {
                        available: product.quantity,
                    });
                }
                product.quantity -= delta;
            }
        }

        Ok(product.quantity)
    }

    /// Look up a single product with its `total_value` populated.
    ///
    /// Mirrors the full-list read: every product's total is refreshed from
    /// the current tax rate before the lookup.
    pub fn product(&mut self, name: &str) -> DomainResult<&Product> {
        self.refresh_totals()?;
        let idx = self.position(name).ok_or_else(DomainError::not_found)?;
        Ok(&self.products[idx])
    }

    /// All products in insertion order, each with `total_value` recomputed
    /// from the current tax rate. Totals always reflect the rate at read
    /// time, even for products untouched since the last read. Fails with
    /// `Overflow` if any total exceeds the decimal range, leaving every
    /// stored total as it was.
    pub fn list(&mut self) -> DomainResult<&[Product]> {
        self.refresh_totals()?;
        Ok(&self.products)
    }

    /// Total value of a line: `price * quantity`, inflated by the current
    /// tax rate. Pure decimal arithmetic, no rounding.
    pub fn total_value(&self, price: Decimal, quantity: i64) -> DomainResult<Decimal> {
        total_with_tax(price, quantity, self.tax_rate)
    }

    fn refresh_totals(&mut self) -> DomainResult<()> {
        let rate = self.tax_rate;
        // Compute every total before writing any, so a failed read leaves
        // the stored totals untouched.
        let totals = self
            .products
            .iter()
            .map(|p| total_with_tax(p.price, p.quantity, rate))
            .collect::<DomainResult<Vec<_>>>()?;
        for (product, total) in self.products.iter_mut().zip(totals) {
            product.total_value = Some(total);
        }
        Ok(())
    }

    fn position(&self, name: &str) -> Option<usize> {
        let needle = name.to_lowercase();
        self.products
            .iter()
            .position(|p| p.name.to_lowercase() == needle)
    }
}

fn total_with_tax(price: Decimal, quantity: i64, tax_rate: Decimal) -> DomainResult<Decimal> {
    let total = price
        .checked_mul(Decimal::from(quantity))
        .ok_or(DomainError::Overflow)?;
    let tax = total
        .checked_mul(tax_rate / Decimal::ONE_HUNDRED)
        .ok_or(DomainError::Overflow)?;
    total.checked_add(tax).ok_or(DomainError::Overflow)
}
