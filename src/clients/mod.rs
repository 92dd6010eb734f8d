//! Cloneable handles used to talk to the actors.

/// Generates an async client method that sends one request variant and awaits
/// its oneshot response.
///
/// The generated method is instrumented, and a closed or dropped actor is
/// reported as [`InventoryError::ActorCommunication`](crate::inventory::InventoryError).
macro_rules! client_method {
    ($client:ty => fn $method:ident($($param:ident: $param_type:ty),*) -> $return_type:ty as $request:ident::$variant:ident) => {
        impl $client {
            #[tracing::instrument(skip(self))]
            pub async fn $method(&self, $($param: $param_type),*) -> Result<$return_type, $crate::inventory::InventoryError> {
                tracing::debug!("Sending request");
                let (respond_to, response) = tokio::sync::oneshot::channel();
                self.sender.send($request::$variant {
                    $($param,)*
                    respond_to,
                }).await.map_err(|_| $crate::inventory::InventoryError::ActorCommunication("Actor closed".to_string()))?;

                response.await.map_err(|_| $crate::inventory::InventoryError::ActorCommunication("Actor dropped".to_string()))?
            }
        }
    };
}

mod inventory_client;

pub use inventory_client::*;
