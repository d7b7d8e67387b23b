//! Sentinel views of the gateway.
//!
//! The storefront screens only care whether something worked: a failed list is
//! an empty catalog, a failed get/create/update is "absent", a failed delete is
//! `false`. The typed error is logged here and then dropped.

use tracing::warn;

use storefront_core::ProductId;
use storefront_products::{Product, ProductFields};

use crate::error::GatewayError;
use crate::gateway::CatalogGateway;
use crate::session::Credential;

fn log_failure(operation: &'static str, err: &GatewayError) {
    warn!(operation, kind = err.kind(), error = %err, "catalog request failed");
}

pub async fn list_or_empty<G>(gateway: &G) -> Vec<Product>
where
    G: CatalogGateway + ?Sized,
{
    gateway.list_products().await.unwrap_or_else(|err| {
        log_failure("list_products", &err);
        Vec::new()
    })
}

pub async fn get_or_absent<G>(gateway: &G, id: ProductId) -> Option<Product>
where
    G: CatalogGateway + ?Sized,
{
    gateway
        .get_product(id)
        .await
        .map_err(|err| log_failure("get_product", &err))
        .ok()
}

pub async fn create_or_absent<G>(
    gateway: &G,
    fields: &ProductFields,
    credential: Option<&Credential>,
) -> Option<Product>
where
    G: CatalogGateway + ?Sized,
{
    gateway
        .create_product(fields, credential)
        .await
        .map_err(|err| log_failure("create_product", &err))
        .ok()
}

pub async fn update_or_absent<G>(
    gateway: &G,
    id: ProductId,
    fields: &ProductFields,
    credential: Option<&Credential>,
) -> Option<Product>
where
    G: CatalogGateway + ?Sized,
{
    gateway
        .update_product(id, fields, credential)
        .await
        .map_err(|err| log_failure("update_product", &err))
        .ok()
}

pub async fn delete_succeeded<G>(
    gateway: &G,
    id: ProductId,
    credential: Option<&Credential>,
) -> bool
where
    G: CatalogGateway + ?Sized,
{
    match gateway.delete_product(id, credential).await {
        Ok(()) => true,
        Err(err) => {
            log_failure("delete_product", &err);
            false
        }
    }
}
