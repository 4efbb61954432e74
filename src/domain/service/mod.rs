// src/domain/service/mod.rs
// Purchase pricing and validation against a catalog snapshot

use crate::domain::errors::{ValidationError, ValidationResult};
use crate::domain::models::{Product, Purchase};

/// First catalog entry whose name matches case-insensitively.
/// Later entries with the same name are never considered.
pub fn find_product<'a>(catalog: &'a [Product], name: &str) -> Option<&'a Product> {
    catalog.iter().find(|product| product.matches_name(name))
}

/// Validate a requested purchase and price it at the catalog's unit price.
pub fn price_purchase(
    buyer: &str,
    product_name: &str,
    quantity: u32,
    catalog: &[Product],
) -> ValidationResult<Purchase> {
    let product = find_product(catalog, product_name)
        .ok_or_else(|| ValidationError::ProductNotFound(product_name.trim().to_string()))?;

    if quantity > product.stock {
        return Err(ValidationError::InsufficientStock {
            product: product.name.clone(),
            requested: quantity,
            available: product.stock,
        });
    }

    if quantity == 0 {
        return Err(ValidationError::InvalidQuantity(quantity));
    }

    let purchase = Purchase::new(buyer, product, quantity)?;
    if purchase.is_empty() {
        return Err(ValidationError::EmptyPurchase);
    }

    Ok(purchase)
}
