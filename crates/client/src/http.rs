//! `reqwest` implementation of the catalog gateway.

use reqwest::{RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use tracing::debug;

use storefront_core::ProductId;
use storefront_products::{Product, ProductFields};

use crate::dto::{UpdateProductRequest, decode_product_list};
use crate::error::{GatewayError, GatewayResult};
use crate::gateway::CatalogGateway;
use crate::session::Credential;

/// Talks to `{api_base_url}/products`.
#[derive(Debug, Clone)]
pub struct HttpCatalogGateway {
    client: reqwest::Client,
    products_url: String,
}

impl HttpCatalogGateway {
    /// `api_base_url` is the API root, e.g. `http://localhost:8080/api`.
    pub fn new(api_base_url: &str) -> Self {
        Self::with_client(reqwest::Client::new(), api_base_url)
    }

    pub fn with_client(client: reqwest::Client, api_base_url: &str) -> Self {
        Self {
            client,
            products_url: format!("{}/products", api_base_url.trim_end_matches('/')),
        }
    }

    pub fn products_url(&self) -> &str {
        &self.products_url
    }

    fn item_url(&self, id: ProductId) -> String {
        format!("{}/{}", self.products_url, id)
    }

    async fn send(
        &self,
        req: RequestBuilder,
        credential: Option<&Credential>,
    ) -> GatewayResult<Response> {
        let req = match credential {
            Some(credential) => req.bearer_auth(credential.bearer()),
            None => req,
        };

        let resp = req.send().await?;
        let status = resp.status();

        if status == StatusCode::NOT_FOUND {
            return Err(GatewayError::NotFound);
        }
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(GatewayError::status(status.as_u16(), body));
        }

        Ok(resp)
    }

    async fn send_json<T: DeserializeOwned>(
        &self,
        req: RequestBuilder,
        credential: Option<&Credential>,
    ) -> GatewayResult<T> {
        let resp = self.send(req, credential).await?;
        Ok(resp.json().await?)
    }
}

#[async_trait::async_trait]
impl CatalogGateway for HttpCatalogGateway {
    async fn list_products(&self) -> GatewayResult<Vec<Product>> {
        debug!(url = %self.products_url, "listing products");
        let value: serde_json::Value = self
            .send_json(self.client.get(&self.products_url), None)
            .await?;
        Ok(decode_product_list(value)?)
    }

    async fn get_product(&self, id: ProductId) -> GatewayResult<Product> {
        let url = self.item_url(id);
        debug!(%url, "fetching product");
        self.send_json(self.client.get(&url), None).await
    }

    async fn create_product(
        &self,
        fields: &ProductFields,
        credential: Option<&Credential>,
    ) -> GatewayResult<Product> {
        debug!(url = %self.products_url, name = %fields.name, "creating product");
        self.send_json(self.client.post(&self.products_url).json(fields), credential)
            .await
    }

    async fn update_product(
        &self,
        id: ProductId,
        fields: &ProductFields,
        credential: Option<&Credential>,
    ) -> GatewayResult<Product> {
        let url = self.item_url(id);
        debug!(%url, "updating product");
        let body = UpdateProductRequest { id, fields };
        self.send_json(self.client.put(&url).json(&body), credential)
            .await
    }

    async fn delete_product(
        &self,
        id: ProductId,
        credential: Option<&Credential>,
    ) -> GatewayResult<()> {
        let url = self.item_url(id);
        debug!(%url, "deleting product");
        self.send(self.client.delete(&url), credential).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn products_url_is_joined_once() {
        let gw = HttpCatalogGateway::new("http://localhost:8080/api/");
        assert_eq!(gw.products_url(), "http://localhost:8080/api/products");
        assert_eq!(
            gw.item_url(ProductId::new(7)),
            "http://localhost:8080/api/products/7"
        );
    }
}
