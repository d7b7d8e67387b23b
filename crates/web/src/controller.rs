//! Storefront controller: drives `AppState` from operator actions.
//!
//! Each action is at most one round trip to the backend, followed by full
//! re-renders of whatever panels it affects. Failures never reach the caller
//! as errors; they leave the state as it was and, where the operator needs to
//! know, raise a blocking alert.

use tracing::{info, warn};

use storefront_client::sentinel;
use storefront_client::{AdminGate, CatalogGateway, ClientConfig};
use storefront_core::ProductId;
use storefront_products::PriceFormat;

use crate::form::{FormInput, FormMode};
use crate::operator::Operator;
use crate::render::{render_detail, render_grid, render_table};
use crate::state::AppState;

pub const CONFIRM_DELETE: &str = "Are you sure you want to delete this product?";
pub const DELETE_FAILED: &str = "Failed to delete product";
pub const SAVE_FAILED: &str = "Failed to save product. Please try again.";
pub const DETAILS_NOT_FOUND: &str = "Product details not found.";
pub const INCORRECT_CODE: &str = "Incorrect admin code. Please try again.";

pub struct Storefront<G, O> {
    gateway: G,
    operator: O,
    gate: Box<dyn AdminGate>,
    prices: PriceFormat,
    state: AppState,
}

impl<G, O> Storefront<G, O>
where
    G: CatalogGateway,
    O: Operator,
{
    pub fn new(gateway: G, operator: O, gate: Box<dyn AdminGate>, prices: PriceFormat) -> Self {
        Self {
            gateway,
            operator,
            gate,
            prices,
            state: AppState::default(),
        }
    }

    pub fn from_config(gateway: G, operator: O, config: &ClientConfig) -> Self {
        Self::new(gateway, operator, config.gate(), config.price_format.clone())
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    pub fn operator(&self) -> &O {
        &self.operator
    }

    /// Initial page: storefront view with a freshly fetched grid.
    pub async fn init(&mut self) {
        self.state.reload();
        self.render_grid().await;
    }

    /// Refetch the catalog and replace the grid.
    pub async fn render_grid(&mut self) {
        let products = sentinel::list_or_empty(&self.gateway).await;
        self.state
            .set_grid(render_grid(Some(products.as_slice()), &self.prices));
    }

    /// Show only cards in `category` (`"all"` shows everything).
    pub fn filter(&mut self, category: &str) {
        self.state.filter_grid(category);
    }

    pub async fn show_detail(&mut self, id: ProductId) {
        match sentinel::get_or_absent(&self.gateway, id).await {
            Some(product) => self
                .state
                .show_detail(render_detail(&product, &self.prices)),
            None => self.operator.alert(DETAILS_NOT_FOUND),
        }
    }

    /// Leave the detail panel by reloading the whole initial view.
    pub async fn back(&mut self) {
        self.init().await;
    }

    /// Try to enter admin mode with what the operator typed.
    pub async fn open_admin(&mut self, code: &str) -> bool {
        match self.gate.admit(code) {
            Ok(session) => {
                info!("admin session opened");
                self.state.enter_admin(session);
                self.render_table().await;
                true
            }
            Err(err) => {
                warn!(error = %err, "admin entry rejected");
                self.operator.alert(INCORRECT_CODE);
                false
            }
        }
    }

    pub fn logout(&mut self) {
        info!("admin session closed");
        self.state.leave_admin();
    }

    /// Refetch the catalog and rebuild the admin table body.
    pub async fn render_table(&mut self) {
        let products = sentinel::list_or_empty(&self.gateway).await;
        self.state.set_table(render_table(&products, &self.prices));
    }

    /// "View products" in the admin bar.
    pub async fn show_table(&mut self) {
        if !self.require_admin("show_table") {
            return;
        }
        self.state.show_table();
        self.render_table().await;
    }

    /// "Add product" in the admin bar: empty form in create mode.
    pub fn show_form(&mut self) {
        if !self.require_admin("show_form") {
            return;
        }
        self.state.show_form();
    }

    /// Load a product into the form and switch to update mode.
    pub async fn edit(&mut self, id: ProductId) {
        if !self.require_admin("edit") {
            return;
        }
        if let Some(product) = sentinel::get_or_absent(&self.gateway, id).await {
            self.state.edit_form(&product);
        }
    }

    /// Delete after confirmation. Returns whether the product was removed.
    pub async fn delete(&mut self, id: ProductId) -> bool {
        if !self.require_admin("delete") {
            return false;
        }
        if !self.operator.confirm(CONFIRM_DELETE) {
            return false;
        }

        let credential = self.state.credential().cloned();
        if sentinel::delete_succeeded(&self.gateway, id, credential.as_ref()).await {
            info!(%id, "product deleted");
            self.render_table().await;
            self.render_grid().await;
            true
        } else {
            self.operator.alert(DELETE_FAILED);
            false
        }
    }

    /// Save the form: create without an active identifier, update with one.
    pub async fn submit(&mut self, input: FormInput) -> bool {
        if !self.require_admin("submit") {
            return false;
        }
        self.state.form_mut().input = input;

        let fields = match self.state.form().input.coerce() {
            Ok(fields) => fields,
            Err(err) => {
                warn!(error = %err, "product form rejected");
                self.operator.alert(SAVE_FAILED);
                return false;
            }
        };

        let credential = self.state.credential().cloned();
        let saved = match self.state.form().mode() {
            FormMode::Create => {
                sentinel::create_or_absent(&self.gateway, &fields, credential.as_ref()).await
            }
            FormMode::Update(id) => {
                sentinel::update_or_absent(&self.gateway, id, &fields, credential.as_ref()).await
            }
        };

        match saved {
            Some(product) => {
                info!(id = %product.id(), "product saved");
                self.state.close_form();
                self.render_table().await;
                self.render_grid().await;
                true
            }
            None => {
                self.operator.alert(SAVE_FAILED);
                false
            }
        }
    }

    /// Discard the form and go back to the table. No network calls.
    pub fn cancel(&mut self) {
        self.state.close_form();
    }

    fn require_admin(&self, action: &'static str) -> bool {
        if self.state.is_admin() {
            return true;
        }
        warn!(action, "ignored: admin session not open");
        false
    }
}
