//! Store backend: loads the configured product off the render path.

use std::sync::Arc;

use clima_services::{Product, ProductClient, StoreError};
use tokio::sync::mpsc::UnboundedSender;

#[derive(Debug)]
pub enum StoreServiceMessage {
    ProductLoaded(Result<Product, StoreError>),
}

/// Request one product asynchronously.
/// Sends `ProductLoaded` on the channel when complete.
pub fn request_product(
    tx: &UnboundedSender<StoreServiceMessage>,
    client: Arc<ProductClient>,
    id: u32,
) {
    let tx = tx.clone();
    tokio::spawn(async move {
        let result = client.get_product(id).await;
        if tx.send(StoreServiceMessage::ProductLoaded(result)).is_err() {
            tracing::debug!("Store screen gone before product loaded");
        }
    });
}
