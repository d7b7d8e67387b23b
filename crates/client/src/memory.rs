//! In-process catalog backend.
//!
//! Same contract as the HTTP gateway, backed by a map. Records every call it
//! receives so callers can assert on exactly which operations ran, and can be
//! switched into a failing mode or made to demand a bearer credential.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use storefront_core::ProductId;
use storefront_products::{Product, ProductFields};

use crate::error::{GatewayError, GatewayResult};
use crate::gateway::CatalogGateway;
use crate::session::Credential;

/// One operation received by an `InMemoryGateway`.
#[derive(Debug, Clone, PartialEq)]
pub enum GatewayCall {
    List,
    Get(ProductId),
    Create(ProductFields),
    Update(ProductId, ProductFields),
    Delete(ProductId),
}

#[derive(Debug)]
struct Inner {
    products: BTreeMap<ProductId, Product>,
    next_id: i64,
    calls: Vec<GatewayCall>,
    failing: bool,
    required_token: Option<String>,
}

#[derive(Debug)]
pub struct InMemoryGateway {
    inner: Mutex<Inner>,
}

impl InMemoryGateway {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                products: BTreeMap::new(),
                next_id: 1,
                calls: Vec::new(),
                failing: false,
                required_token: None,
            }),
        }
    }

    /// Pre-populate the catalog; identifiers are assigned from 1 in order.
    /// Seeding is not recorded as calls.
    pub fn seeded(products: impl IntoIterator<Item = ProductFields>) -> Self {
        let gateway = Self::new();
        for fields in products {
            gateway.seed(fields);
        }
        gateway
    }

    /// Insert a record behind the client's back, as another writer would.
    /// Not recorded as a call.
    pub fn seed(&self, fields: ProductFields) -> ProductId {
        let mut inner = self.lock();
        let id = ProductId::new(inner.next_id);
        inner.next_id += 1;
        inner.products.insert(id, Product::new(id, fields));
        id
    }

    /// Every subsequent call fails with a 503 status.
    pub fn set_failing(&self, failing: bool) {
        self.lock().failing = failing;
    }

    /// Mutating calls must carry this bearer token or get a 401.
    pub fn require_token(&self, token: impl Into<String>) {
        self.lock().required_token = Some(token.into());
    }

    pub fn calls(&self) -> Vec<GatewayCall> {
        self.lock().calls.clone()
    }

    pub fn clear_calls(&self) {
        self.lock().calls.clear();
    }

    /// Current catalog contents, ordered by identifier.
    pub fn products(&self) -> Vec<Product> {
        self.lock().products.values().cloned().collect()
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn record(&self, call: GatewayCall) -> MutexGuard<'_, Inner> {
        let mut inner = self.lock();
        inner.calls.push(call);
        inner
    }
}

impl Default for InMemoryGateway {
    fn default() -> Self {
        Self::new()
    }
}

impl Inner {
    fn check_available(&self) -> GatewayResult<()> {
        if self.failing {
            return Err(GatewayError::status(503, "backend unavailable"));
        }
        Ok(())
    }

    fn check_credential(&self, credential: Option<&Credential>) -> GatewayResult<()> {
        self.check_available()?;
        match &self.required_token {
            Some(required) if credential.map(Credential::bearer) != Some(required.as_str()) => {
                Err(GatewayError::status(401, "unauthorized"))
            }
            _ => Ok(()),
        }
    }
}

#[async_trait::async_trait]
impl CatalogGateway for InMemoryGateway {
    async fn list_products(&self) -> GatewayResult<Vec<Product>> {
        let inner = self.record(GatewayCall::List);
        inner.check_available()?;
        Ok(inner.products.values().cloned().collect())
    }

    async fn get_product(&self, id: ProductId) -> GatewayResult<Product> {
        let inner = self.record(GatewayCall::Get(id));
        inner.check_available()?;
        inner.products.get(&id).cloned().ok_or(GatewayError::NotFound)
    }

    async fn create_product(
        &self,
        fields: &ProductFields,
        credential: Option<&Credential>,
    ) -> GatewayResult<Product> {
        let mut inner = self.record(GatewayCall::Create(fields.clone()));
        inner.check_credential(credential)?;

        let id = ProductId::new(inner.next_id);
        inner.next_id += 1;
        let product = Product::new(id, fields.clone());
        inner.products.insert(id, product.clone());
        Ok(product)
    }

    async fn update_product(
        &self,
        id: ProductId,
        fields: &ProductFields,
        credential: Option<&Credential>,
    ) -> GatewayResult<Product> {
        let mut inner = self.record(GatewayCall::Update(id, fields.clone()));
        inner.check_credential(credential)?;

        let slot = inner.products.get_mut(&id).ok_or(GatewayError::NotFound)?;
        *slot = Product::new(id, fields.clone());
        Ok(slot.clone())
    }

    async fn delete_product(
        &self,
        id: ProductId,
        credential: Option<&Credential>,
    ) -> GatewayResult<()> {
        let mut inner = self.record(GatewayCall::Delete(id));
        inner.check_credential(credential)?;

        inner
            .products
            .remove(&id)
            .map(|_| ())
            .ok_or(GatewayError::NotFound)
    }
}
