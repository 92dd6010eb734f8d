//! The in-memory ledger: products keyed by identifier.

pub mod error;

pub use error::*;

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use crate::domain::Product;

/// An owning collection of [`Product`]s, at most one per identifier.
///
/// Not synchronized. Share it between tasks through an
/// [`InventoryActor`](crate::inventory_actor::InventoryActor).
#[derive(Debug, Default)]
pub struct Inventory {
    products: HashMap<String, Product>,
}

impl Inventory {
    /// Creates an empty Inventory.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns true if a product with this id is stored.
    pub fn present(&self, id: &str) -> bool {
        self.products.contains_key(id)
    }

    /// Returns the stored product.
    ///
    /// # Errors
    /// [`InventoryError::MissingProduct`] if the id is unknown.
    pub fn status(&self, id: &str) -> Result<&Product, InventoryError> {
        self.products
            .get(id)
            .ok_or_else(|| InventoryError::MissingProduct(id.to_string()))
    }

    /// Stores a new product exactly as given.
    ///
    /// # Errors
    /// [`InventoryError::AlreadyPresent`] if the id is taken; nothing is changed.
    pub fn add(&mut self, product: Product) -> Result<&Product, InventoryError> {
        match self.products.entry(product.id.clone()) {
            Entry::Occupied(_) => Err(InventoryError::AlreadyPresent(product.id)),
            Entry::Vacant(slot) => Ok(&*slot.insert(product)),
        }
    }

    /// Applies `product` to the stored entry with the same id.
    ///
    /// The price is replaced and the quantity is added, so a negative
    /// quantity sells stock. The result is not floored at zero.
    ///
    /// # Errors
    /// [`InventoryError::MissingProduct`] if the id is unknown; nothing is inserted.
    pub fn update(&mut self, product: Product) -> Result<&Product, InventoryError> {
        let stored = self
            .products
            .get_mut(&product.id)
            .ok_or_else(|| InventoryError::MissingProduct(product.id.clone()))?;
        stored.price = product.price;
        stored.quantity += product.quantity;
        Ok(&*stored)
    }

    /// Total value of every stored product; `0.0` when empty.
    pub fn value(&self) -> f64 {
        self.products
            .values()
            .fold(0.0, |total, product| total + product.value())
    }

    /// Number of stored products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// True when no product is stored.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Stored products, in no particular order.
    pub fn products(&self) -> impl Iterator<Item = &Product> {
        self.products.values()
    }
}
