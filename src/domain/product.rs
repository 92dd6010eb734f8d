/// A single catalog entry tracked by an [`Inventory`](crate::inventory::Inventory).
///
/// Fields are public but, once a product has been handed to an inventory,
/// only the inventory rewrites `price` and `quantity`.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: String,
    pub price: f64,
    /// Fractional units are allowed, and so is a negative count.
    pub quantity: f64,
}

impl Product {
    /// Creates a new Product. No validation is performed.
    ///
    /// # Arguments
    /// * `id` - Identifier the product is stored under
    /// * `price` - Unit price
    /// * `quantity` - Units in stock (or, for an update, the delta to apply)
    pub fn new(id: impl Into<String>, price: f64, quantity: f64) -> Self {
        Self {
            id: id.into(),
            price,
            quantity,
        }
    }

    /// Value of the stock held for this product (`price * quantity`).
    pub fn value(&self) -> f64 {
        self.price * self.quantity
    }
}
