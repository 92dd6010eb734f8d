//! # Inventory Ledger
//!
//! An in-process ledger of products keyed by identifier, each with a price
//! and a quantity.
//!
//! - [`Inventory`] is the plain data structure: lookups, insertion, in-place
//!   price/quantity updates, and total valuation.
//! - [`InventoryActor`] owns one `Inventory` on a tokio task and serves
//!   requests one at a time; [`InventoryClient`] is the cloneable handle to it.
//! - [`InventorySystem`] starts and stops the actor; [`Menu`] is the text
//!   front end used by the `inventory` binary.
//!
//! ## Example Usage
//!
//! ```rust
//! use inventory_ledger::{Inventory, Product};
//!
//! let mut inventory = Inventory::empty();
//! inventory.add(Product::new("p1", 1.00, 20.0)).unwrap();
//! inventory.update(Product::new("p1", 2.00, -5.0)).unwrap();
//! assert_eq!(inventory.value(), 30.0);
//! ```

pub mod app_system;
pub mod cli;
pub mod clients;
pub mod domain;
pub mod inventory;
pub mod inventory_actor;
pub mod messages;

#[cfg(test)]
mod mock_framework;
#[cfg(test)]
mod integration_tests;

pub use app_system::{setup_tracing, InventorySystem, SystemConfig, SystemError};
pub use cli::Menu;
pub use clients::InventoryClient;
pub use domain::Product;
pub use inventory::{Inventory, InventoryError};
pub use inventory_actor::InventoryActor;
