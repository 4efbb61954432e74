// src/domain/repository/mock.rs
// In-memory store used by unit tests

use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::errors::{StoreError, StoreResult};
use crate::domain::models::{Product, Purchase};
use crate::domain::repository::StoreRepository;

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    FetchCatalog,
    SubmitPurchase(Purchase),
    UpdateStock(i64, u32),
    BuyerHistory(String),
}

#[derive(Default)]
pub struct MockStore {
    pub catalog: Vec<Product>,
    pub remote_history: Vec<Purchase>,
    pub fail_submit: Option<(u16, String)>,
    pub fail_update: Option<(u16, String)>,
    pub fail_history: Option<(u16, String)>,
    calls: Mutex<Vec<Call>>,
}

impl MockStore {
    pub fn with_catalog(catalog: Vec<Product>) -> Self {
        Self {
            catalog,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn writes(&self) -> Vec<Call> {
        self.calls()
            .into_iter()
            .filter(|call| matches!(call, Call::SubmitPurchase(_) | Call::UpdateStock(..)))
            .collect()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }

    fn check(failure: &Option<(u16, String)>) -> StoreResult<()> {
        match failure {
            Some((status, body)) => Err(StoreError::BadStatus {
                status: *status,
                body: body.clone(),
            }),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl StoreRepository for MockStore {
    async fn fetch_catalog(&self) -> StoreResult<Vec<Product>> {
        self.record(Call::FetchCatalog);
        Ok(self.catalog.clone())
    }

    async fn submit_purchase(&self, purchase: &Purchase) -> StoreResult<()> {
        self.record(Call::SubmitPurchase(purchase.clone()));
        Self::check(&self.fail_submit)
    }

    async fn update_stock(&self, product_id: i64, quantity: u32) -> StoreResult<()> {
        self.record(Call::UpdateStock(product_id, quantity));
        Self::check(&self.fail_update)
    }

    async fn buyer_history(&self, buyer: &str) -> StoreResult<Vec<Purchase>> {
        self.record(Call::BuyerHistory(buyer.to_string()));
        Self::check(&self.fail_history)?;
        Ok(self
            .remote_history
            .iter()
            .filter(|purchase| purchase.buyer == buyer)
            .cloned()
            .collect())
    }
}
