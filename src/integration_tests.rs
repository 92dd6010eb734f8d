#[cfg(test)]
mod tests {
    use crate::app_system::{InventorySystem, SystemConfig};
    use crate::domain::Product;
    use crate::inventory::InventoryError;

    #[tokio::test]
    async fn test_ledger_flow_through_system() {
        let system = InventorySystem::new(&SystemConfig::default());
        let client = system.inventory_client.clone();

        assert_eq!(client.value().await.unwrap(), 0.00);

        client.add(Product::new("p1", 1.00, 20.0)).await.unwrap();
        client.add(Product::new("p2", 50.00, 0.5)).await.unwrap();
        client.add(Product::new("p3", 3.00, 3.0)).await.unwrap();
        assert_eq!(client.value().await.unwrap(), 54.00);

        // Selling stock is an update with a negative quantity.
        let sold = client.update(Product::new("p1", 1.00, -20.0)).await.unwrap();
        assert_eq!(sold.quantity, 0.0);
        assert_eq!(client.value().await.unwrap(), 34.00);

        let round_trip = client.status("p2".to_string()).await.unwrap();
        assert_eq!(round_trip, Product::new("p2", 50.00, 0.5));

        drop(client);
        system.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_concurrent_duplicate_adds_insert_once() {
        let system = InventorySystem::new(&SystemConfig::default());

        let mut tasks = Vec::new();
        for i in 0..16 {
            let client = system.inventory_client.clone();
            tasks.push(tokio::spawn(async move {
                client.add(Product::new("contested", i as f64, 1.0)).await
            }));
        }

        let mut winners = 0;
        for task in tasks {
            match task.await.unwrap() {
                Ok(_) => winners += 1,
                Err(e) => assert_eq!(e, InventoryError::AlreadyPresent("contested".to_string())),
            }
        }
        assert_eq!(winners, 1);
        assert_eq!(system.inventory_client.list().await.unwrap().len(), 1);

        system.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_concurrent_updates_are_not_lost() {
        let system = InventorySystem::new(&SystemConfig::default());
        system.inventory_client.add(Product::new("stock", 2.0, 0.0)).await.unwrap();

        let mut tasks = Vec::new();
        for _ in 0..50 {
            let client = system.inventory_client.clone();
            tasks.push(tokio::spawn(async move {
                client.update(Product::new("stock", 2.0, 1.0)).await
            }));
        }
        for task in tasks {
            task.await.unwrap().unwrap();
        }

        let stored = system.inventory_client.status("stock".to_string()).await.unwrap();
        assert_eq!(stored.quantity, 50.0);
        assert_eq!(system.inventory_client.value().await.unwrap(), 100.0);

        system.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_client_of_dropped_actor_reports_closed() {
        let (actor, client) = crate::inventory_actor::InventoryActor::new(1);
        drop(actor);

        let err = client.value().await.unwrap_err();
        assert!(matches!(err, InventoryError::ActorCommunication(_)));
    }
}
