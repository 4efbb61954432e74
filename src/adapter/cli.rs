// src/adapter/cli.rs
// Interactive storefront menu

use std::io::{BufRead, Write};
use std::ops::ControlFlow;
use std::str::FromStr;

use crate::application::usecase::PurchaseUseCase;
use crate::domain::errors::{AppResult, ValidationError};
use crate::domain::history::HistoryStore;
use crate::domain::models::{Product, Rupiah};
use crate::domain::service::find_product;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Purchase,
    ViewHistory,
    SearchHistory,
    Exit,
}

impl FromStr for MenuChoice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(MenuChoice::Purchase),
            "2" => Ok(MenuChoice::ViewHistory),
            "3" => Ok(MenuChoice::SearchHistory),
            "4" => Ok(MenuChoice::Exit),
            other => Err(format!("invalid menu choice: {}", other)),
        }
    }
}

/// Menu loop over arbitrary input and output streams.
///
/// Validation problems are printed and the menu is shown again. Remote
/// failures while completing a purchase are returned to the caller, which
/// ends the session.
pub struct StorefrontCli<U, I, O> {
    workflow: U,
    input: I,
    output: O,
}

impl<U, I, O> StorefrontCli<U, I, O>
where
    U: PurchaseUseCase,
    I: BufRead,
    O: Write,
{
    pub fn new(workflow: U, input: I, output: O) -> Self {
        Self {
            workflow,
            input,
            output,
        }
    }

    pub fn into_output(self) -> O {
        self.output
    }

    pub fn show_intro(&mut self) -> AppResult<()> {
        writeln!(self.output, "Welcome to our store!")?;
        writeln!(self.output, "We offer a range of quality products.")?;
        writeln!(self.output, "Here is what is available for you:")?;
        writeln!(self.output)?;
        Ok(())
    }

    pub fn show_catalog(&mut self, catalog: &[Product]) -> AppResult<()> {
        writeln!(self.output, "{:<20} {:<10} {:<10}", "Product", "Price", "Stock")?;
        writeln!(self.output, "{}", "-".repeat(40))?;
        for product in catalog {
            writeln!(
                self.output,
                "{:<20} {:<10} {:<10}",
                product.name,
                Rupiah(product.unit_price),
                product.stock
            )?;
        }
        Ok(())
    }

    pub async fn run(&mut self, catalog: &[Product], history: &mut HistoryStore) -> AppResult<()> {
        loop {
            self.show_menu()?;
            let Some(line) = self.read_line()? else {
                log::info!("Input closed, ending session");
                return Ok(());
            };

            match line.parse::<MenuChoice>() {
                Ok(MenuChoice::Purchase) => {
                    if self.purchase(catalog, history).await?.is_break() {
                        log::info!("Input closed during purchase, ending session");
                        return Ok(());
                    }
                }
                Ok(MenuChoice::ViewHistory) => self.show_history(history)?,
                Ok(MenuChoice::SearchHistory) => {
                    if self.search_history().await?.is_break() {
                        log::info!("Input closed during history search, ending session");
                        return Ok(());
                    }
                }
                Ok(MenuChoice::Exit) => {
                    writeln!(self.output, "Thank you for shopping with us. Goodbye!")?;
                    return Ok(());
                }
                Err(e) => {
                    log::debug!("{}", e);
                    writeln!(self.output, "Invalid choice, please try again.")?;
                }
            }
        }
    }

    fn show_menu(&mut self) -> AppResult<()> {
        writeln!(self.output, "\nMenu:")?;
        writeln!(self.output, "1. Make a purchase")?;
        writeln!(self.output, "2. View purchase history")?;
        writeln!(self.output, "3. Search purchase history by name")?;
        writeln!(self.output, "4. Exit")?;
        write!(self.output, "Choose an option (1/2/3/4): ")?;
        self.output.flush()?;
        Ok(())
    }

    async fn purchase(&mut self, catalog: &[Product], history: &mut HistoryStore) -> AppResult<ControlFlow<()>> {
        // Break means input ran out mid-purchase
        let Some(buyer) = self.prompt("\nPlease enter your name: ")? else {
            return Ok(ControlFlow::Break(()));
        };
        if buyer.is_empty() {
            writeln!(self.output, "Name must not be empty.")?;
            return Ok(ControlFlow::Continue(()));
        }

        let Some(product_name) = self.prompt("Choose the product to buy: ")? else {
            return Ok(ControlFlow::Break(()));
        };
        if find_product(catalog, &product_name).is_none() {
            log::warn!("Purchase rejected: product not found: {}", product_name);
            writeln!(
                self.output,
                "\nThe product you entered is not available in our store. Thank you."
            )?;
            return Ok(ControlFlow::Continue(()));
        }

        let Some(raw_quantity) = self.prompt("Enter the quantity to buy: ")? else {
            return Ok(ControlFlow::Break(()));
        };
        let Ok(quantity) = raw_quantity.parse::<u32>() else {
            writeln!(self.output, "Invalid quantity: {}", raw_quantity)?;
            return Ok(ControlFlow::Continue(()));
        };

        let purchase = match self
            .workflow
            .record_purchase(&buyer, &product_name, quantity, catalog)
        {
            Ok(purchase) => purchase,
            Err(ValidationError::InsufficientStock { available, .. }) => {
                writeln!(self.output, "Insufficient stock! Only {} left.", available)?;
                return Ok(ControlFlow::Continue(()));
            }
            Err(e) => {
                writeln!(self.output, "\nPurchase failed ({}). Please check your input.", e)?;
                return Ok(ControlFlow::Continue(()));
            }
        };

        writeln!(self.output, "\nThank you {} for your purchase!", purchase.buyer)?;
        writeln!(self.output, "Product: {}", purchase.product_name)?;
        writeln!(self.output, "Quantity: {}", purchase.quantity)?;
        writeln!(self.output, "Total: {}", Rupiah(purchase.total_amount))?;
        self.output.flush()?;

        self.workflow.complete_purchase(purchase, history).await?;
        Ok(ControlFlow::Continue(()))
    }

    fn show_history(&mut self, history: &HistoryStore) -> AppResult<()> {
        if history.is_empty() {
            writeln!(self.output, "\nNo purchase history yet.")?;
            return Ok(());
        }

        writeln!(self.output, "\nPurchase history:")?;
        for purchase in history.recent_first() {
            writeln!(self.output, "{}", purchase)?;
        }
        Ok(())
    }

    async fn search_history(&mut self) -> AppResult<ControlFlow<()>> {
        let Some(buyer) = self.prompt("\nEnter the buyer's name: ")? else {
            return Ok(ControlFlow::Break(()));
        };

        match self.workflow.query_by_buyer(&buyer).await {
            Ok(purchases) if purchases.is_empty() => {
                writeln!(self.output, "No purchase history for that name.")?;
            }
            Ok(purchases) => {
                writeln!(self.output, "\nPurchase history for {}:", buyer)?;
                for purchase in &purchases {
                    writeln!(self.output, "{}", purchase)?;
                }
            }
            Err(e) => {
                log::warn!("Buyer history lookup failed: {}", e);
                writeln!(self.output, "Failed to fetch purchase history: {}", e)?;
            }
        }
        Ok(ControlFlow::Continue(()))
    }

    fn prompt(&mut self, label: &str) -> AppResult<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;
        self.read_line()
    }

    /// Next trimmed line, or `None` once input is exhausted
    fn read_line(&mut self) -> AppResult<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}
