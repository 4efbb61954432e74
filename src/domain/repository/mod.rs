// src/domain/repository/mod.rs
// Repository interface for the remote store API

use async_trait::async_trait;

use crate::domain::errors::StoreResult;
use crate::domain::models::{Product, Purchase};

#[cfg(test)]
pub mod mock;

/// Remote store operations. Implementations perform exactly one request per
/// call and never retry.
#[async_trait]
pub trait StoreRepository {
    /// Full product listing
    async fn fetch_catalog(&self) -> StoreResult<Vec<Product>>;

    /// Persist a purchase record
    async fn submit_purchase(&self, purchase: &Purchase) -> StoreResult<()>;

    /// Reduce stock of the product with the given id
    async fn update_stock(&self, product_id: i64, quantity: u32) -> StoreResult<()>;

    /// All purchases the remote service holds for a buyer
    async fn buyer_history(&self, buyer: &str) -> StoreResult<Vec<Purchase>>;
}
