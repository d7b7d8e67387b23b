//! Application state: which panel is showing and what each panel contains.
//!
//! All view changes go through the named transitions below; there is no way
//! to make two top-level panels visible at once.

use storefront_client::{AdminSession, Credential};
use storefront_core::ProductId;
use storefront_products::{ALL_CATEGORIES, Product};

use crate::form::FormState;
use crate::render::{DetailView, GridView, TableView, render_form};

/// The top-level panel currently shown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum View {
    #[default]
    Storefront,
    AdminTable,
    AdminForm,
}

/// What the storefront's main area shows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum MainPanel {
    #[default]
    Grid,
    Detail(DetailView),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    view: View,
    main: MainPanel,
    grid: GridView,
    category: String,
    table: TableView,
    form: FormState,
    session: Option<AdminSession>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            view: View::Storefront,
            main: MainPanel::Grid,
            grid: GridView::Empty,
            category: ALL_CATEGORIES.to_string(),
            table: TableView::default(),
            form: FormState::default(),
            session: None,
        }
    }
}

impl AppState {
    pub fn view(&self) -> View {
        self.view
    }

    pub fn main(&self) -> &MainPanel {
        &self.main
    }

    pub fn grid(&self) -> &GridView {
        &self.grid
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn table(&self) -> &TableView {
        &self.table
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    /// Markup of the product form with whatever it currently holds.
    pub fn form_html(&self) -> String {
        render_form(&self.form)
    }

    pub fn active_id(&self) -> Option<ProductId> {
        self.form.active_id
    }

    pub fn session(&self) -> Option<&AdminSession> {
        self.session.as_ref()
    }

    pub fn credential(&self) -> Option<&Credential> {
        self.session.as_ref().and_then(AdminSession::credential)
    }

    pub fn is_admin(&self) -> bool {
        self.session.is_some()
    }

    /// Full reload: storefront grid, no filter, no detail, no admin session.
    pub fn reload(&mut self) {
        *self = Self::default();
    }

    /// Replace the grid, keeping the active category filter applied.
    pub fn set_grid(&mut self, mut grid: GridView) {
        grid.apply_filter(&self.category);
        self.grid = grid;
    }

    pub fn filter_grid(&mut self, category: &str) {
        self.category = category.to_string();
        self.grid.apply_filter(category);
    }

    pub fn show_detail(&mut self, detail: DetailView) {
        self.main = MainPanel::Detail(detail);
    }

    pub fn set_table(&mut self, table: TableView) {
        self.table = table;
    }

    pub fn enter_admin(&mut self, session: AdminSession) {
        self.session = Some(session);
        self.view = View::AdminTable;
    }

    pub fn leave_admin(&mut self) {
        self.session = None;
        self.form.reset();
        self.view = View::Storefront;
    }

    pub fn show_table(&mut self) {
        self.view = View::AdminTable;
    }

    /// Empty form in create mode.
    pub fn show_form(&mut self) {
        self.form.reset();
        self.view = View::AdminForm;
    }

    /// Form populated from `product`, in update mode.
    pub fn edit_form(&mut self, product: &Product) {
        self.form = FormState::load(product);
        self.view = View::AdminForm;
    }

    pub fn form_mut(&mut self) -> &mut FormState {
        &mut self.form
    }

    /// Clear the form and go back to the table (after save or cancel).
    pub fn close_form(&mut self) {
        self.form.reset();
        self.view = View::AdminTable;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_products::ProductFields;

    fn product() -> Product {
        Product::new(
            ProductId::new(2),
            ProductFields {
                name: "Phone".to_string(),
                category: "electronics".to_string(),
                image: String::new(),
                specs: String::new(),
                price: 1.0,
                highlight: String::new(),
            },
        )
    }

    #[test]
    fn admin_transitions() {
        let mut state = AppState::default();
        assert_eq!(state.view(), View::Storefront);
        assert!(!state.is_admin());

        state.enter_admin(AdminSession::anonymous());
        assert_eq!(state.view(), View::AdminTable);

        state.edit_form(&product());
        assert_eq!(state.view(), View::AdminForm);
        assert_eq!(state.active_id(), Some(ProductId::new(2)));

        state.close_form();
        assert_eq!(state.view(), View::AdminTable);
        assert_eq!(state.active_id(), None);

        state.leave_admin();
        assert_eq!(state.view(), View::Storefront);
        assert!(state.session().is_none());
    }

    #[test]
    fn show_form_starts_in_create_mode() {
        let mut state = AppState::default();
        state.enter_admin(AdminSession::anonymous());
        state.edit_form(&product());
        state.show_form();
        assert_eq!(state.active_id(), None);
        assert_eq!(state.form(), &FormState::default());
    }

    #[test]
    fn reload_resets_everything() {
        let mut state = AppState::default();
        state.filter_grid("fashion");
        state.enter_admin(AdminSession::anonymous());
        state.reload();
        assert_eq!(state, AppState::default());
        assert_eq!(state.category(), "all");
    }
}
