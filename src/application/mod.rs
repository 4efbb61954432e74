// src/application/mod.rs
pub mod usecase;
