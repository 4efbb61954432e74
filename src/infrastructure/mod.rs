// src/infrastructure/mod.rs
pub mod store;

pub use store::HttpStoreRepository;
