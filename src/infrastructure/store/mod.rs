// src/infrastructure/store/mod.rs
// HTTP store repository implementation

use std::time::Duration;

use async_trait::async_trait;
use hyper::body::Bytes;
use hyper::client::HttpConnector;
use hyper::header::CONTENT_TYPE;
use hyper::{Body, Client, Method, Request, StatusCode};
use hyper_tls::HttpsConnector;
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

use crate::config::ApiConfig;
use crate::domain::errors::{AppError, AppResult, StoreError, StoreResult};
use crate::domain::models::{Product, Purchase};
use crate::domain::repository::StoreRepository;

pub struct HttpStoreRepository {
    client: Client<HttpsConnector<HttpConnector>>,
    base_url: Url,
    timeout: Duration,
}

impl HttpStoreRepository {
    pub fn new(config: &ApiConfig) -> AppResult<Self> {
        let base_url = config.base_url()?;

        let tls = native_tls::TlsConnector::builder()
            .danger_accept_invalid_certs(config.accept_invalid_certs)
            .build()
            .map_err(|e| AppError::Config(format!("Failed to build TLS connector: {}", e)))?;

        let mut http = HttpConnector::new();
        http.enforce_http(false);
        let https = HttpsConnector::from((http, tokio_native_tls::TlsConnector::from(tls)));

        Ok(Self {
            client: Client::builder().build::<_, Body>(https),
            base_url,
            timeout: config.timeout(),
        })
    }

    fn endpoint(&self, segments: &[&str]) -> StoreResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| StoreError::Request(format!("Base URL cannot take a path: {}", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn request(&self, method: Method, url: &Url, body: Option<String>) -> StoreResult<Request<Body>> {
        let builder = Request::builder().method(method).uri(url.as_str());
        let request = match body {
            Some(body) => builder.header(CONTENT_TYPE, "application/json").body(Body::from(body)),
            None => builder.body(Body::empty()),
        };
        request.map_err(|e| StoreError::Request(e.to_string()))
    }

    /// Send a request and read the whole body under one deadline.
    /// Non-2xx statuses become `BadStatus` with the body text.
    async fn send(&self, request: Request<Body>) -> StoreResult<Bytes> {
        let method = request.method().clone();
        let uri = request.uri().clone();
        log::debug!("{} {}", method, uri);

        let exchange = async {
            let response = self
                .client
                .request(request)
                .await
                .map_err(|e| StoreError::Network(e.to_string()))?;
            let status = response.status();
            let body = hyper::body::to_bytes(response.into_body())
                .await
                .map_err(|e| StoreError::Network(e.to_string()))?;
            Ok::<(StatusCode, Bytes), StoreError>((status, body))
        };

        let (status, body) = tokio::time::timeout(self.timeout, exchange)
            .await
            .map_err(|_| {
                StoreError::Network(format!("{} {} timed out after {:?}", method, uri, self.timeout))
            })??;

        if !status.is_success() {
            log::debug!("{} {} returned {}", method, uri, status);
            return Err(StoreError::BadStatus {
                status: status.as_u16(),
                body: String::from_utf8_lossy(&body).into_owned(),
            });
        }

        Ok(body)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &Url) -> StoreResult<T> {
        let request = self.request(Method::GET, url, None)?;
        let body = self.send(request).await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

/// Request bodies that fail to serialize never leave the client
fn encode_json<T: Serialize>(value: &T) -> StoreResult<String> {
    serde_json::to_string(value)
        .map_err(|e| StoreError::Request(format!("Failed to encode request body: {}", e)))
}

#[async_trait]
impl StoreRepository for HttpStoreRepository {
    async fn fetch_catalog(&self) -> StoreResult<Vec<Product>> {
        let url = self.endpoint(&[])?;
        self.get_json(&url).await
    }

    async fn submit_purchase(&self, purchase: &Purchase) -> StoreResult<()> {
        let url = self.endpoint(&["pembelian"])?;
        let payload = encode_json(purchase)?;
        let request = self.request(Method::POST, &url, Some(payload))?;
        self.send(request).await?;
        Ok(())
    }

    async fn update_stock(&self, product_id: i64, quantity: u32) -> StoreResult<()> {
        let id = product_id.to_string();
        let url = self.endpoint(&["updateStok", id.as_str()])?;
        let request = self.request(Method::PUT, &url, Some(quantity.to_string()))?;
        self.send(request).await?;
        Ok(())
    }

    async fn buyer_history(&self, buyer: &str) -> StoreResult<Vec<Purchase>> {
        let url = self.endpoint(&["riwayatPembeli", buyer])?;
        self.get_json(&url).await
    }
}
