// src/main.rs
use std::io;
use std::sync::Arc;

use storefront_cli::adapter::StorefrontCli;
use storefront_cli::application::usecase::{PurchaseUseCase, PurchaseWorkflow};
use storefront_cli::config::Config;
use storefront_cli::domain::{AppResult, HistoryStore};
use storefront_cli::infrastructure::HttpStoreRepository;

#[tokio::main(flavor = "current_thread")]
async fn main() -> AppResult<()> {
    // Load configuration
    let config = Config::load()?;

    // Initialize logging
    config.init_logging()?;

    log::info!("Starting storefront v{}", env!("CARGO_PKG_VERSION"));
    log::info!("Using store API at {}", config.api.base_url);

    let store = HttpStoreRepository::new(&config.api)?;
    let workflow = PurchaseWorkflow::new(Arc::new(store));

    let catalog = workflow.fetch_catalog().await.map_err(|e| {
        log::error!("Failed to fetch product catalog: {}", e);
        e
    })?;

    let stdin = io::stdin();
    let mut cli = StorefrontCli::new(workflow, stdin.lock(), io::stdout());
    cli.show_intro()?;
    cli.show_catalog(&catalog)?;

    let mut history = HistoryStore::new();
    if let Err(e) = cli.run(&catalog, &mut history).await {
        log::error!("Session aborted: {}", e);
        return Err(e);
    }

    log::info!("Session ended with {} purchases recorded", history.len());
    Ok(())
}
