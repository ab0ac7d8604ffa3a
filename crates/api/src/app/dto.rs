//! Request DTOs and the response envelope.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use stockbook_inventory::Movement;

// -------------------------
// Request DTOs
// -------------------------

#[derive(Debug, Deserialize)]
pub struct ProductRequest {
    pub name: String,
    pub price: Decimal,
    pub quantity: i64,
}

#[derive(Debug, Deserialize)]
pub struct PriceRequest {
    pub name: String,
    pub price: Decimal,
}

#[derive(Debug, Deserialize)]
pub struct MovementRequest {
    pub name: String,
    pub quantity: i64,
    pub movement: Movement,
}

#[derive(Debug, Deserialize)]
pub struct TaxRateRequest {
    pub rate: Decimal,
}

// -------------------------
// Response envelope
// -------------------------

/// Uniform response body: a success flag, a human-readable message, and an
/// optional data payload (`null` when there is nothing to report).
#[derive(Debug, Serialize)]
pub struct Envelope<T> {
    pub success: bool,
    pub message: String,
    pub data: Option<T>,
}

impl<T> Envelope<T> {
    pub fn ok(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: Some(data),
        }
    }

    pub fn ok_empty(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: None,
        }
    }
}
