// src/adapter/mod.rs
pub mod cli;

pub use cli::{MenuChoice, StorefrontCli};
