use super::{Inventory, InventoryError};
use crate::model::{Product, ProductId, Stock};
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

/// [`Inventory`] backed by a REST service exposing `products/{id}` and `stock/{id}`.
#[derive(Debug, Clone)]
pub struct HttpInventory {
    client: reqwest::Client,
    base_url: String,
}

impl HttpInventory {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    fn url(&self, resource: &str, product_id: ProductId) -> String {
        format!(
            "{}/{}/{}",
            self.base_url.trim_end_matches('/'),
            resource,
            product_id.0
        )
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        resource: &str,
        product_id: ProductId,
    ) -> Result<T, InventoryError> {
        let url = self.url(resource, product_id);
        debug!(%url, "GET");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| InventoryError::Transport(e.to_string()))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(InventoryError::NotFound(product_id));
        }
        if !status.is_success() {
            return Err(InventoryError::Status(status.as_u16()));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| InventoryError::Malformed(e.to_string()))
    }
}

#[async_trait]
impl Inventory for HttpInventory {
    #[instrument(skip(self))]
    async fn fetch_product(&self, product_id: ProductId) -> Result<Product, InventoryError> {
        self.get_json("products", product_id).await
    }

    #[instrument(skip(self))]
    async fn fetch_stock(&self, product_id: ProductId) -> Result<Stock, InventoryError> {
        self.get_json("stock", product_id).await
    }
}
