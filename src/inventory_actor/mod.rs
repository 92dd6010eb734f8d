//! Single-writer actor that owns an [`Inventory`].
//!
//! All requests are served one at a time from one channel, so the
//! check-then-act inside `add` and `update` can never interleave with
//! another caller.

use tokio::sync::mpsc;
use tracing::{debug, info, instrument, warn};
use crate::clients::InventoryClient;
use crate::domain::Product;
use crate::inventory::Inventory;
use crate::messages::{InventoryRequest, ServiceResponse};

pub struct InventoryActor {
    receiver: mpsc::Receiver<InventoryRequest>,
    inventory: Inventory,
}

impl InventoryActor {
    /// Creates an actor over an empty inventory, plus a client bound to it.
    pub fn new(buffer_size: usize) -> (Self, InventoryClient) {
        Self::with_inventory(buffer_size, Inventory::empty())
    }

    /// Creates an actor that takes ownership of an existing inventory.
    pub fn with_inventory(buffer_size: usize, inventory: Inventory) -> (Self, InventoryClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self { receiver, inventory };
        (actor, InventoryClient::new(sender))
    }

    /// Serves requests until every client has been dropped.
    #[instrument(name = "inventory_actor", skip(self))]
    pub async fn run(mut self) {
        info!("InventoryActor starting");
        while let Some(msg) = self.receiver.recv().await {
            match msg {
                InventoryRequest::Present { id, respond_to } => self.handle_present(id, respond_to),
                InventoryRequest::Status { id, respond_to } => self.handle_status(id, respond_to),
                InventoryRequest::Add { product, respond_to } => self.handle_add(product, respond_to),
                InventoryRequest::Update { product, respond_to } => self.handle_update(product, respond_to),
                InventoryRequest::Value { respond_to } => self.handle_value(respond_to),
                InventoryRequest::List { respond_to } => self.handle_list(respond_to),
            }
        }
        info!(products = self.inventory.len(), "InventoryActor stopped");
    }

    #[instrument(fields(product_id = %id), skip(self, respond_to))]
    fn handle_present(&self, id: String, respond_to: ServiceResponse<bool>) {
        let present = self.inventory.present(&id);
        debug!(present, "Processing present request");
        let _ = respond_to.send(Ok(present));
    }

    #[instrument(fields(product_id = %id), skip(self, respond_to))]
    fn handle_status(&self, id: String, respond_to: ServiceResponse<Product>) {
        debug!("Processing status request");
        let result = self.inventory.status(&id).cloned();
        if let Err(e) = &result {
            debug!(error = %e, "Product not found");
        }
        let _ = respond_to.send(result);
    }

    #[instrument(fields(product_id = %product.id), skip(self, product, respond_to))]
    fn handle_add(&mut self, product: Product, respond_to: ServiceResponse<Product>) {
        debug!(price = product.price, quantity = product.quantity, "Processing add request");
        let result = self.inventory.add(product).cloned();
        match &result {
            Ok(_) => info!("Product added"),
            Err(e) => warn!(product_id = e.product_id(), error = %e, "Add rejected"),
        }
        let _ = respond_to.send(result);
    }

    #[instrument(fields(product_id = %product.id), skip(self, product, respond_to))]
    fn handle_update(&mut self, product: Product, respond_to: ServiceResponse<Product>) {
        debug!(price = product.price, delta = product.quantity, "Processing update request");
        let result = self.inventory.update(product).cloned();
        match &result {
            Ok(stored) => info!(quantity = stored.quantity, "Product updated"),
            Err(e) => warn!(product_id = e.product_id(), error = %e, "Update rejected"),
        }
        let _ = respond_to.send(result);
    }

    #[instrument(skip(self, respond_to))]
    fn handle_value(&self, respond_to: ServiceResponse<f64>) {
        let value = self.inventory.value();
        debug!(value, "Processing value request");
        let _ = respond_to.send(Ok(value));
    }

    #[instrument(skip(self, respond_to))]
    fn handle_list(&self, respond_to: ServiceResponse<Vec<Product>>) {
        debug!(products = self.inventory.len(), "Processing list request");
        let mut products: Vec<Product> = self.inventory.products().cloned().collect();
        products.sort_by(|a, b| a.id.cmp(&b.id));
        let _ = respond_to.send(Ok(products));
    }
}
