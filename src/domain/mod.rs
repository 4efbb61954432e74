// src/domain/mod.rs
pub mod errors;
pub mod history;
pub mod models;
pub mod repository;
pub mod service;

// Re-export common types for convenience
pub use errors::{
    AppError, AppResult, StoreError, StoreResult, ValidationError, ValidationResult,
};
pub use history::HistoryStore;
pub use models::{Product, Purchase, Rupiah};
pub use repository::StoreRepository;
