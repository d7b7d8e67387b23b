//! The seam between the storefront and the catalog backend.

use std::sync::Arc;

use storefront_core::ProductId;
use storefront_products::{Product, ProductFields};

use crate::error::GatewayResult;
use crate::session::Credential;

/// REST operations on the backend's product resource.
///
/// Every call is exactly one round trip: no retries, no caching, no timeout
/// beyond what the transport does by default. Mutating calls take the admin
/// credential, if any; the backend decides whether it is sufficient.
#[async_trait::async_trait]
pub trait CatalogGateway: Send + Sync {
    /// `GET /products`
    async fn list_products(&self) -> GatewayResult<Vec<Product>>;

    /// `GET /products/{id}`
    async fn get_product(&self, id: ProductId) -> GatewayResult<Product>;

    /// `POST /products`; the backend assigns the identifier.
    async fn create_product(
        &self,
        fields: &ProductFields,
        credential: Option<&Credential>,
    ) -> GatewayResult<Product>;

    /// `PUT /products/{id}`; full replacement of the record.
    async fn update_product(
        &self,
        id: ProductId,
        fields: &ProductFields,
        credential: Option<&Credential>,
    ) -> GatewayResult<Product>;

    /// `DELETE /products/{id}`
    async fn delete_product(
        &self,
        id: ProductId,
        credential: Option<&Credential>,
    ) -> GatewayResult<()>;
}

macro_rules! forward_gateway {
    ($wrapper:ident) => {
        #[async_trait::async_trait]
        impl<T: CatalogGateway + ?Sized> CatalogGateway for $wrapper<T> {
            async fn list_products(&self) -> GatewayResult<Vec<Product>> {
                (**self).list_products().await
            }

            async fn get_product(&self, id: ProductId) -> GatewayResult<Product> {
                (**self).get_product(id).await
            }

            async fn create_product(
                &self,
                fields: &ProductFields,
                credential: Option<&Credential>,
            ) -> GatewayResult<Product> {
                (**self).create_product(fields, credential).await
            }

            async fn update_product(
                &self,
                id: ProductId,
                fields: &ProductFields,
                credential: Option<&Credential>,
            ) -> GatewayResult<Product> {
                (**self).update_product(id, fields, credential).await
            }

            async fn delete_product(
                &self,
                id: ProductId,
                credential: Option<&Credential>,
            ) -> GatewayResult<()> {
                (**self).delete_product(id, credential).await
            }
        }
    };
}

forward_gateway!(Box);
forward_gateway!(Arc);
