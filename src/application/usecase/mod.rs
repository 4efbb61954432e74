// src/application/usecase/mod.rs
pub mod purchase_usecase;

// Re-export public API
pub use purchase_usecase::{PurchaseUseCase, PurchaseWorkflow};
