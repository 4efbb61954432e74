// src/application/usecase/purchase_usecase.rs
// Purchase recording workflow over the remote store

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::{AppResult, StoreError, StoreResult, ValidationError, ValidationResult};
use crate::domain::history::HistoryStore;
use crate::domain::models::{Product, Purchase};
use crate::domain::repository::StoreRepository;
use crate::domain::service::{find_product, price_purchase};

#[async_trait]
pub trait PurchaseUseCase {
    /// Fetch the current catalog from the store
    async fn fetch_catalog(&self) -> StoreResult<Vec<Product>>;

    /// Validate and price a purchase against a catalog snapshot.
    /// No remote call is made.
    fn record_purchase(
        &self,
        buyer: &str,
        product_name: &str,
        quantity: u32,
        catalog: &[Product],
    ) -> ValidationResult<Purchase>;

    /// Submit the purchase, decrement stock, then append to local history.
    async fn complete_purchase(&self, purchase: Purchase, history: &mut HistoryStore) -> AppResult<()>;

    /// Re-resolve the product id from a fresh catalog and decrement its stock
    async fn apply_stock_decrement(&self, product_name: &str, quantity: u32) -> StoreResult<()>;

    /// Remote purchase history for a buyer
    async fn query_by_buyer(&self, buyer: &str) -> StoreResult<Vec<Purchase>>;
}

pub struct PurchaseWorkflow {
    store: Arc<dyn StoreRepository + Send + Sync>,
}

impl PurchaseWorkflow {
    pub fn new(store: Arc<dyn StoreRepository + Send + Sync>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl PurchaseUseCase for PurchaseWorkflow {
    async fn fetch_catalog(&self) -> StoreResult<Vec<Product>> {
        let catalog = self.store.fetch_catalog().await?;
        log::debug!("Fetched catalog with {} products", catalog.len());
        Ok(catalog)
    }

    fn record_purchase(
        &self,
        buyer: &str,
        product_name: &str,
        quantity: u32,
        catalog: &[Product],
    ) -> ValidationResult<Purchase> {
        match price_purchase(buyer, product_name, quantity, catalog) {
            Ok(purchase) => {
                log::info!(
                    "Priced purchase for {}: {} x {} = {}",
                    purchase.buyer,
                    purchase.quantity,
                    purchase.product_name,
                    purchase.total_amount
                );
                Ok(purchase)
            }
            Err(e) => {
                log::warn!("Purchase rejected: {}", e);
                Err(e)
            }
        }
    }

    async fn complete_purchase(&self, purchase: Purchase, history: &mut HistoryStore) -> AppResult<()> {
        if purchase.is_empty() {
            return Err(ValidationError::EmptyPurchase.into());
        }

        self.store.submit_purchase(&purchase).await.map_err(|e| {
            log::error!("Failed to submit purchase: {}", e);
            e
        })?;
        log::info!("Purchase recorded for {}", purchase.buyer);

        // A failure here leaves the submitted record in place; nothing is rolled back.
        self.apply_stock_decrement(&purchase.product_name, purchase.quantity)
            .await
            .map_err(|e| {
                log::error!("Failed to update stock after recording purchase: {}", e);
                e
            })?;

        history.push(purchase);
        Ok(())
    }

    async fn apply_stock_decrement(&self, product_name: &str, quantity: u32) -> StoreResult<()> {
        // Full catalog refetch just to resolve the id
        let catalog = self.store.fetch_catalog().await?;

        let product_id = find_product(&catalog, product_name)
            .map(|product| product.id)
            .filter(|id| *id != 0)
            .ok_or_else(|| StoreError::NotFound(product_name.to_string()))?;

        log::debug!("Decrementing stock of product {} by {}", product_id, quantity);
        self.store.update_stock(product_id, quantity).await
    }

    async fn query_by_buyer(&self, buyer: &str) -> StoreResult<Vec<Purchase>> {
        let history = self.store.buyer_history(buyer).await?;
        log::debug!("Remote history for {}: {} entries", buyer, history.len());
        Ok(history)
    }
}
