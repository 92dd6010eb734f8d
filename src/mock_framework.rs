//! # Mock Framework
//!
//! Utilities for testing code that talks to the inventory actor without
//! spinning one up.
//!
//! Use [`create_mock_client`] to get a client and the receiver its requests
//! land on, then helpers like [`expect_add`] to assert on them and answer.

use tokio::sync::{mpsc, oneshot};
use crate::clients::InventoryClient;
use crate::domain::Product;
use crate::messages::{InventoryRequest, ServiceResult};

/// Creates a client whose requests arrive on the returned receiver.
pub fn create_mock_client(buffer_size: usize) -> (InventoryClient, mpsc::Receiver<InventoryRequest>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (InventoryClient::new(sender), receiver)
}

/// Helper to verify that the next message is a Status request
pub async fn expect_status(
    receiver: &mut mpsc::Receiver<InventoryRequest>,
) -> Option<(String, oneshot::Sender<ServiceResult<Product>>)> {
    match receiver.recv().await {
        Some(InventoryRequest::Status { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is an Add request
pub async fn expect_add(
    receiver: &mut mpsc::Receiver<InventoryRequest>,
) -> Option<(Product, oneshot::Sender<ServiceResult<Product>>)> {
    match receiver.recv().await {
        Some(InventoryRequest::Add { product, respond_to }) => Some((product, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is an Update request
pub async fn expect_update(
    receiver: &mut mpsc::Receiver<InventoryRequest>,
) -> Option<(Product, oneshot::Sender<ServiceResult<Product>>)> {
    match receiver.recv().await {
        Some(InventoryRequest::Update { product, respond_to }) => Some((product, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Value request
pub async fn expect_value(
    receiver: &mut mpsc::Receiver<InventoryRequest>,
) -> Option<oneshot::Sender<ServiceResult<f64>>> {
    match receiver.recv().await {
        Some(InventoryRequest::Value { respond_to }) => Some(respond_to),
        _ => None,
    }
}
