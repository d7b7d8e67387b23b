//! `storefront-web`
//!
//! **Responsibility:** the storefront page and its hidden admin mode.
//!
//! - `render`: grid, detail, table and form markup
//! - `state`: the single `AppState` value and its named transitions
//! - `form`: raw form input and create/update mode
//! - `controller`: `Storefront`, which runs operator actions against a
//!   `CatalogGateway` and re-renders
//! - `operator`: blocking confirm/alert prompts

pub mod controller;
pub mod demo;
pub mod form;
pub mod operator;
pub mod render;
pub mod state;

pub use controller::Storefront;
pub use form::{FormError, FormInput, FormMode, FormState};
pub use operator::{Operator, TerminalOperator};
pub use render::{CardView, DetailView, GridView, TableRow, TableView};
pub use state::{AppState, MainPanel, View};
