use tokio::sync::mpsc;
use crate::domain::Product;
use crate::messages::InventoryRequest;

/// Client for interacting with the [`InventoryActor`](crate::inventory_actor::InventoryActor).
///
/// Cheap to clone; every clone feeds the same actor.
#[derive(Clone, Debug)]
pub struct InventoryClient {
    sender: mpsc::Sender<InventoryRequest>,
}

impl InventoryClient {
    pub fn new(sender: mpsc::Sender<InventoryRequest>) -> Self {
        Self { sender }
    }
}

client_method!(InventoryClient => fn present(id: String) -> bool as InventoryRequest::Present);
client_method!(InventoryClient => fn status(id: String) -> Product as InventoryRequest::Status);
client_method!(InventoryClient => fn add(product: Product) -> Product as InventoryRequest::Add);
client_method!(InventoryClient => fn update(product: Product) -> Product as InventoryRequest::Update);
client_method!(InventoryClient => fn value() -> f64 as InventoryRequest::Value);
client_method!(InventoryClient => fn list() -> Vec<Product> as InventoryRequest::List);
