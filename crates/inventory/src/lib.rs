//! Inventory domain module.
//!
//! This crate contains the business rules for the product ledger, implemented
//! purely as deterministic domain logic (no IO, no HTTP, no storage).

pub mod error;
pub mod ledger;
pub mod product;

pub use error::{DomainError, DomainResult};
pub use ledger::Inventory;
pub use product::{Movement, Product};
