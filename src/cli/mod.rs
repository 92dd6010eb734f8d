//! Interactive text menu over an [`InventoryClient`].
//!
//! Reads one command per line, prompts for the fields it needs, and prints
//! either the resulting product or the error message. Runs until `quit` or
//! end of input.

use thiserror::Error;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, Lines};
use tracing::{debug, info};
use crate::app_system::SystemError;
use crate::clients::InventoryClient;
use crate::domain::Product;
use crate::inventory::InventoryError;

/// Commands recognized by the menu, with their help text.
pub const COMMANDS: &[(&str, &str)] = &[
    ("value", "print the total value of the inventory"),
    ("status", "print a product"),
    ("insert", "add a new product"),
    ("update", "set the price of a product and add to its quantity"),
    ("list", "print every product"),
    ("help", "print this list"),
    ("quit", "exit"),
];

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Value,
    Status,
    Insert,
    Update,
    List,
    Help,
    Quit,
    Unrecognized(String),
}

impl Command {
    /// Parses a trimmed, case-insensitive command word.
    pub fn parse(input: &str) -> Self {
        match input.trim().to_lowercase().as_str() {
            "value" => Command::Value,
            "status" => Command::Status,
            "insert" => Command::Insert,
            "update" => Command::Update,
            "list" => Command::List,
            "help" => Command::Help,
            "quit" => Command::Quit,
            _ => Command::Unrecognized(input.trim().to_string()),
        }
    }
}

#[derive(Debug, Clone, Error, PartialEq)]
#[error("invalid number: {0}")]
pub struct InvalidNumber(pub String);

/// Parses a price or quantity. Non-finite values are rejected.
pub fn parse_number(text: &str) -> Result<f64, InvalidNumber> {
    match text.trim().parse::<f64>() {
        Ok(n) if n.is_finite() => Ok(n),
        _ => Err(InvalidNumber(text.trim().to_string())),
    }
}

pub fn format_command_description(cmd: &str, desc: &str) -> String {
    format!("{}\t{}", cmd, desc)
}

pub fn format_product(product: &Product) -> String {
    format!(
        "id: {} price: {:.2} quantity: {} value: {:.2}",
        product.id,
        product.price,
        product.quantity,
        product.value()
    )
}

pub struct Menu<R, W> {
    client: InventoryClient,
    lines: Lines<R>,
    writer: W,
}

impl<R, W> Menu<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(client: InventoryClient, reader: R, writer: W) -> Self {
        Self {
            client,
            lines: reader.lines(),
            writer,
        }
    }

    /// Runs the loop. Only I/O failures on the menu's own streams are errors;
    /// inventory errors are printed and the loop carries on.
    pub async fn run(mut self) -> Result<(), SystemError> {
        info!("Menu started");
        self.write_line("Enter an operation (help lists them)").await?;

        loop {
            self.write("> ").await?;
            let Some(line) = self.lines.next_line().await? else {
                break;
            };
            if line.trim().is_empty() {
                continue;
            }

            let command = Command::parse(&line);
            debug!(?command, "Menu command");
            match command {
                Command::Quit => break,
                Command::Value => self.show_value().await?,
                Command::Status => self.show_status().await?,
                Command::Insert => self.insert().await?,
                Command::Update => self.update().await?,
                Command::List => self.list().await?,
                Command::Help => self.help().await?,
                Command::Unrecognized(input) => {
                    self.write_line(&format!("Unrecognized operation: {}", input)).await?
                }
            }
        }

        info!("Menu finished");
        self.writer.flush().await?;
        Ok(())
    }

    async fn show_value(&mut self) -> Result<(), SystemError> {
        match self.client.value().await {
            Ok(value) => self.write_line(&format!("Inventory value: {:.2}", value)).await,
            Err(e) => self.write_line(&e.to_string()).await,
        }
    }

    async fn show_status(&mut self) -> Result<(), SystemError> {
        let Some(id) = self.read_field("id").await? else {
            return Ok(());
        };
        let result = self.client.status(id).await;
        self.report(result).await
    }

    async fn insert(&mut self) -> Result<(), SystemError> {
        let Some(product) = self.read_product().await? else {
            return Ok(());
        };
        let result = self.client.add(product).await;
        self.report(result).await
    }

    async fn update(&mut self) -> Result<(), SystemError> {
        let Some(product) = self.read_product().await? else {
            return Ok(());
        };
        let result = self.client.update(product).await;
        self.report(result).await
    }

    async fn list(&mut self) -> Result<(), SystemError> {
        match self.client.list().await {
            Ok(products) if products.is_empty() => self.write_line("Inventory is empty").await,
            Ok(products) => {
                for product in &products {
                    self.write_line(&format_product(product)).await?;
                }
                Ok(())
            }
            Err(e) => self.write_line(&e.to_string()).await,
        }
    }

    async fn help(&mut self) -> Result<(), SystemError> {
        for (cmd, desc) in COMMANDS {
            self.write_line(&format_command_description(cmd, desc)).await?;
        }
        Ok(())
    }

    async fn report(&mut self, result: Result<Product, InventoryError>) -> Result<(), SystemError> {
        match result {
            Ok(product) => self.write_line(&format_product(&product)).await,
            Err(e) => self.write_line(&e.to_string()).await,
        }
    }

    /// Prompts for id, price and quantity. `None` when input ended or a
    /// number did not parse; the reason has already been printed.
    async fn read_product(&mut self) -> Result<Option<Product>, SystemError> {
        let Some(id) = self.read_field("id").await? else {
            return Ok(None);
        };
        let Some(price) = self.read_number("price").await? else {
            return Ok(None);
        };
        let Some(quantity) = self.read_number("quantity").await? else {
            return Ok(None);
        };
        Ok(Some(Product::new(id, price, quantity)))
    }

    async fn read_number(&mut self, label: &str) -> Result<Option<f64>, SystemError> {
        let Some(text) = self.read_field(label).await? else {
            return Ok(None);
        };
        match parse_number(&text) {
            Ok(n) => Ok(Some(n)),
            Err(e) => {
                self.write_line(&e.to_string()).await?;
                Ok(None)
            }
        }
    }

    async fn read_field(&mut self, label: &str) -> Result<Option<String>, SystemError> {
        self.write(&format!("{}: ", label)).await?;
        Ok(self.lines.next_line().await?.map(|line| line.trim().to_string()))
    }

    async fn write(&mut self, text: &str) -> Result<(), SystemError> {
        self.writer.write_all(text.as_bytes()).await?;
        self.writer.flush().await?;
        Ok(())
    }

    async fn write_line(&mut self, text: &str) -> Result<(), SystemError> {
        self.write(&format!("{}\n", text)).await
    }
}
