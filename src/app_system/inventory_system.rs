use tracing::{error, info};
use crate::app_system::{SystemConfig, SystemError};
use crate::clients::InventoryClient;
use crate::inventory_actor::InventoryActor;

/// Owns the running inventory actor and hands out its client.
///
/// Responsible for starting the actor and for graceful shutdown.
pub struct InventorySystem {
    pub inventory_client: InventoryClient,
    handle: tokio::task::JoinHandle<()>,
}

impl InventorySystem {
    /// Spawns the inventory actor. Must be called inside a tokio runtime.
    pub fn new(config: &SystemConfig) -> Self {
        let (actor, inventory_client) = InventoryActor::new(config.channel_capacity);
        let handle = tokio::spawn(actor.run());
        info!(channel_capacity = config.channel_capacity, "Inventory system started");

        Self {
            inventory_client,
            handle,
        }
    }

    /// Closes the channel and waits for the actor to drain it.
    ///
    /// Clones of `inventory_client` held elsewhere keep the actor alive, so
    /// drop them before calling this.
    pub async fn shutdown(self) -> Result<(), SystemError> {
        info!("Shutting down system...");
        drop(self.inventory_client);

        if let Err(e) = self.handle.await {
            error!("Actor task failed: {:?}", e);
            return Err(SystemError::ActorTask(e.to_string()));
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
