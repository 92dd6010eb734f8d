use tokio::sync::oneshot;
use crate::domain::Product;
use crate::inventory::InventoryError;

/// Generic type aliases for actor communication
pub type ServiceResult<T> = std::result::Result<T, InventoryError>;
pub type ServiceResponse<T> = oneshot::Sender<ServiceResult<T>>;

/// Requests understood by the [`InventoryActor`](crate::inventory_actor::InventoryActor).
///
/// Products travel back as owned snapshots, never as references into the
/// actor's state.
#[derive(Debug)]
pub enum InventoryRequest {
    Present {
        id: String,
        respond_to: ServiceResponse<bool>,
    },
    Status {
        id: String,
        respond_to: ServiceResponse<Product>,
    },
    Add {
        product: Product,
        respond_to: ServiceResponse<Product>,
    },
    Update {
        product: Product,
        respond_to: ServiceResponse<Product>,
    },
    Value {
        respond_to: ServiceResponse<f64>,
    },
    List {
        respond_to: ServiceResponse<Vec<Product>>,
    },
}
