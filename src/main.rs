use tokio::io::BufReader;
use tracing::{error, info};
use inventory_ledger::{setup_tracing, InventorySystem, Menu, SystemConfig, SystemError};

#[tokio::main]
async fn main() -> Result<(), SystemError> {
    let config = SystemConfig::from_env()?;
    setup_tracing(&config);

    info!("Starting inventory");

    let system = InventorySystem::new(&config);

    let menu = Menu::new(
        system.inventory_client.clone(),
        BufReader::new(tokio::io::stdin()),
        tokio::io::stdout(),
    );
    let menu_result = menu.run().await;
    if let Err(e) = &menu_result {
        error!(error = %e, "Menu stopped on I/O failure");
    }

    // The menu's client clone is gone now, so shutdown can drain the actor.
    system.shutdown().await?;
    menu_result
}
