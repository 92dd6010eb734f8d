use thiserror::Error;

/// Errors reported by inventory operations.
///
/// Every variant is a recoverable condition: the inventory is left untouched
/// and the caller decides how to report it.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum InventoryError {
    #[error("missing product: {0}")]
    MissingProduct(String),
    #[error("already present: {0}")]
    AlreadyPresent(String),
    #[error("actor communication error: {0}")]
    ActorCommunication(String),
}

impl InventoryError {
    /// Identifier of the product the failed operation referred to, if any.
    pub fn product_id(&self) -> Option<&str> {
        match self {
            InventoryError::MissingProduct(id) | InventoryError::AlreadyPresent(id) => Some(id),
            InventoryError::ActorCommunication(_) => None,
        }
    }
}
