// src/domain/errors.rs
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Store API error: {0}")]
    Store(#[from] StoreError),

    #[error("Purchase rejected: {0}")]
    Validation(#[from] ValidationError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Failures talking to the remote store API
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Unexpected status {status}: {body}")]
    BadStatus { status: u16, body: String },

    #[error("Invalid JSON: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Product not found: {0}")]
    NotFound(String),

    #[error("Invalid request: {0}")]
    Request(String),
}

/// Reasons a purchase attempt is refused before anything is sent
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("product not found: {0}")]
    ProductNotFound(String),

    #[error("insufficient stock for {product}: requested {requested}, available {available}")]
    InsufficientStock {
        product: String,
        requested: u32,
        available: u32,
    },

    #[error("invalid quantity: {0}")]
    InvalidQuantity(u32),

    #[error("total for {quantity} x {product} is too large")]
    AmountOverflow { product: String, quantity: u32 },

    #[error("empty purchase cannot be recorded")]
    EmptyPurchase,
}

// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;
pub type StoreResult<T> = Result<T, StoreError>;
pub type ValidationResult<T> = Result<T, ValidationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bad_status_message_carries_body() {
        let err = StoreError::BadStatus {
            status: 400,
            body: "Stok tidak cukup".to_string(),
        };

        assert!(err.to_string().contains("Stok tidak cukup"));
        assert!(AppError::from(err).to_string().contains("400"));
    }
}
