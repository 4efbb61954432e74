// src/domain/models.rs
use crate::domain::errors::{ValidationError, ValidationResult};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A catalog entry as served by the store API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "namaBarang")]
    pub name: String,

    #[serde(rename = "harga", with = "rust_decimal::serde::float")]
    pub unit_price: Decimal,

    #[serde(rename = "stok")]
    pub stock: u32,

    #[serde(rename = "idBarang")]
    pub id: i64,
}

impl Product {
    /// Case-insensitive exact name comparison
    pub fn matches_name(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.trim().to_lowercase()
    }
}

/// One buyer's purchase of a single product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Purchase {
    #[serde(rename = "nama")]
    pub buyer: String,

    #[serde(rename = "barang")]
    pub product_name: String,

    #[serde(rename = "jumlah")]
    pub quantity: u32,

    #[serde(rename = "totalBayar", with = "rust_decimal::serde::float")]
    pub total_amount: Decimal,

    #[serde(rename = "idBarang")]
    pub product_id: i64,
}

impl Purchase {
    /// Price `quantity` units of `product`. Fails when the total does not
    /// fit in a `Decimal`.
    pub fn new(buyer: &str, product: &Product, quantity: u32) -> ValidationResult<Self> {
        let total_amount = product
            .unit_price
            .checked_mul(Decimal::from(quantity))
            .ok_or_else(|| ValidationError::AmountOverflow {
                product: product.name.clone(),
                quantity,
            })?;

        Ok(Self {
            buyer: buyer.to_string(),
            product_name: product.name.clone(),
            quantity,
            total_amount,
            product_id: product.id,
        })
    }

    /// A zero total marks an aborted purchase; it is never persisted.
    pub fn is_empty(&self) -> bool {
        self.total_amount.is_zero()
    }
}

impl fmt::Display for Purchase {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Name: {}, Product: {}, Quantity: {}, Total: {}",
            self.buyer,
            self.product_name,
            self.quantity,
            Rupiah(self.total_amount)
        )
    }
}

/// Whole-rupiah price rendering, e.g. `Rp 3000`
#[derive(Debug, Clone, Copy)]
pub struct Rupiah(pub Decimal);

impl fmt::Display for Rupiah {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let rendered = format!("Rp {}", self.0.round_dp(0));
        f.pad(&rendered)
    }
}
