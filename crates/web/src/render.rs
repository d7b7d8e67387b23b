//! Markup for the storefront grid, the detail panel, the admin table and the
//! product form.
//!
//! Every render produces a complete replacement for its panel; nothing is
//! patched incrementally. All interpolated product text is HTML-escaped.

use html_escape::{encode_double_quoted_attribute as attr, encode_text as text};

use storefront_core::ProductId;
use storefront_products::{PriceFormat, Product, matches_category};

use crate::form::FormState;

/// Exact markup shown when the catalog is empty or could not be fetched.
pub const NO_PRODUCTS_HTML: &str =
    r#"<p class="no-products">No products available at the moment.</p>"#;

/// One product card in the storefront grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    pub id: ProductId,
    pub category: String,
    pub visible: bool,
    body: String,
}

impl CardView {
    fn new(product: &Product, prices: &PriceFormat) -> Self {
        let body = format!(
            r#"<img src="{image}" alt="{alt}">
  <div class="product-details">
    <h3>{name}</h3>
    <div class="product-specs">{specs}</div>
    <div class="price">{price}</div>
    <button data-action="view-details">View Details</button>
  </div>"#,
            image = attr(product.image()),
            alt = attr(product.name()),
            name = text(product.name()),
            specs = text(product.specs()),
            price = text(&prices.format(product.price())),
        );

        Self {
            id: product.id(),
            category: product.category().to_string(),
            visible: true,
            body,
        }
    }

    pub fn to_html(&self) -> String {
        format!(
            r#"<div class="product-card" data-cat="{cat}" data-id="{id}"{hidden}>
  {body}
</div>"#,
            cat = attr(&self.category),
            id = self.id,
            hidden = if self.visible { "" } else { " hidden" },
            body = self.body,
        )
    }
}

/// Contents of the storefront product grid.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum GridView {
    /// Placeholder only, no cards.
    #[default]
    Empty,
    Cards(Vec<CardView>),
}

impl GridView {
    pub fn cards(&self) -> &[CardView] {
        match self {
            GridView::Empty => &[],
            GridView::Cards(cards) => cards.as_slice(),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, GridView::Empty)
    }

    /// Show cards in `category` (or every card for `"all"`), hide the rest.
    pub fn apply_filter(&mut self, category: &str) {
        if let GridView::Cards(cards) = self {
            for card in cards {
                card.visible = matches_category(&card.category, category);
            }
        }
    }

    pub fn visible_ids(&self) -> Vec<ProductId> {
        self.cards()
            .iter()
            .filter(|card| card.visible)
            .map(|card| card.id)
            .collect()
    }

    pub fn to_html(&self) -> String {
        match self {
            GridView::Empty => NO_PRODUCTS_HTML.to_string(),
            GridView::Cards(cards) => cards
                .iter()
                .map(CardView::to_html)
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }
}

/// Build the grid for a fetched catalog. `None` means the fetch failed.
pub fn render_grid(products: Option<&[Product]>, prices: &PriceFormat) -> GridView {
    match products {
        Some(products) if !products.is_empty() => GridView::Cards(
            products
                .iter()
                .map(|product| CardView::new(product, prices))
                .collect(),
        ),
        _ => GridView::Empty,
    }
}

/// Full-detail panel for a single product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailView {
    pub id: ProductId,
    html: String,
}

impl DetailView {
    pub fn to_html(&self) -> String {
        self.html.clone()
    }
}

pub fn render_detail(product: &Product, prices: &PriceFormat) -> DetailView {
    let html = format!(
        r#"<div class="product-details-hero">
  <div class="product-details-container">
    <button id="backButton" class="back-btn">Back to Products</button>
    <div class="product-details-card" data-id="{id}">
      <div class="product-image-section">
        <div class="image-container">
          <img src="{image}" alt="{alt}" class="product-main-image" />
        </div>
      </div>
      <div class="product-info-section">
        <div class="product-badge">{category}</div>
        <h1 class="product-title">{name}</h1>
        <div class="price-section">
          <span class="current-price">{price}</span>
        </div>
        <div class="specs-section">
          <h3 class="specs-title">Specifications</h3>
          <div class="specs-content"><p>{specs}</p></div>
        </div>
        <div class="specs-section">
          <h3 class="specs-title">Highlight</h3>
          <div class="specs-content"><p>{highlight}</p></div>
        </div>
      </div>
    </div>
  </div>
</div>"#,
        id = product.id(),
        image = attr(product.image()),
        alt = attr(product.name()),
        category = text(product.category()),
        name = text(product.name()),
        price = text(&prices.format(product.price())),
        specs = text(product.specs()),
        highlight = text(product.highlight()),
    );

    DetailView {
        id: product.id(),
        html,
    }
}

/// One admin table row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub id: ProductId,
    html: String,
}

impl TableRow {
    pub fn to_html(&self) -> String {
        self.html.clone()
    }
}

/// Body of the admin products table.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TableView {
    pub rows: Vec<TableRow>,
}

impl TableView {
    pub fn to_html(&self) -> String {
        self.rows
            .iter()
            .map(TableRow::to_html)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Rebuild the table body. An empty catalog renders no rows at all.
pub fn render_table(products: &[Product], prices: &PriceFormat) -> TableView {
    let rows = products
        .iter()
        .map(|product| TableRow {
            id: product.id(),
            html: format!(
                r#"<tr data-id="{id}">
  <td>{name}</td>
  <td>{category}</td>
  <td>{price}</td>
  <td>
    <button class="edit-btn" data-id="{id}">Edit</button>
    <button class="delete-btn" data-id="{id}">Delete</button>
  </td>
</tr>"#,
                id = product.id(),
                name = text(product.name()),
                category = text(product.category()),
                price = text(&prices.format(product.price())),
            ),
        })
        .collect();

    TableView { rows }
}

/// The create/update form with its current values.
pub fn render_form(form: &FormState) -> String {
    let input = &form.input;
    let (heading, id_value) = match form.active_id {
        Some(id) => ("Edit Product", id.to_string()),
        None => ("Add Product", String::new()),
    };

    format!(
        r#"<form id="productFormElement">
  <h2>{heading}</h2>
  <input type="hidden" id="productId" value="{id}">
  <input type="text" id="productsName" value="{name}" required>
  <input type="text" id="productCategory" value="{category}" required>
  <input type="url" id="productImage" value="{image}">
  <input type="text" id="productSpecs" value="{specs}">
  <input type="number" id="productPrice" step="any" value="{price}" required>
  <input type="text" id="highlight" value="{highlight}">
  <button type="submit" id="saveProductBtn">Save</button>
  <button type="button" id="cancelFormBtn">Cancel</button>
</form>"#,
        id = attr(&id_value),
        name = attr(&input.name),
        category = attr(&input.category),
        image = attr(&input.image),
        specs = attr(&input.specs),
        price = attr(&input.price),
        highlight = attr(&input.highlight),
    )
}
