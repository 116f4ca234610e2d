//! Product queries against the backend's product endpoints.

use crate::client::ApiClient;
use crate::config;
use crate::error::Result;
use crate::models::{Product, ProductKind};
use crate::query_builder::QueryBuilder;

// ---------------------------------------------------------------------------
// SearchProductsParams
// ---------------------------------------------------------------------------

/// Parameters for the product listing search.
///
/// All fields are optional. When `None`, the corresponding filter is skipped.
#[derive(Debug, Clone, Default)]
pub struct SearchProductsParams {
    /// Case-insensitive substring match on the product name.
    pub name: Option<String>,
    pub category: Option<String>,
    pub vendor: Option<String>,
    pub kind: Option<ProductKind>,
    pub price_lte: Option<u64>,
    pub price_gte: Option<u64>,
    /// Sort field and direction, e.g. `("base_price", "asc")`.
    pub sort: Option<(String, String)>,
    pub page: Option<usize>,
    pub page_size: Option<usize>,
}

// ---------------------------------------------------------------------------
// ProductQuery
// ---------------------------------------------------------------------------

/// Query interface for marketplace products.
pub struct ProductQuery<'a> {
    client: &'a ApiClient,
}

impl<'a> ProductQuery<'a> {
    /// Create a new `ProductQuery` bound to the given client.
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    // -- Single product lookup ---------------------------------------------

    /// Retrieve a single product by its backend id.
    pub fn get_by_id(&self, id: u64) -> Result<Option<Product>> {
        let path = format!("{}/{}", config::PRODUCTS_PATH, id);
        self.client.get_one(&path)
    }

    /// Retrieve a single product by its URL slug.
    pub fn get_by_slug(&self, slug: &str) -> Result<Option<Product>> {
        let query = QueryBuilder::new()
            .filter_eq("slug", slug)
            .populate("variants")
            .build();
        let mut products: Vec<Product> = self.client.get_list(config::PRODUCTS_PATH, &query)?;
        Ok(if products.is_empty() {
            None
        } else {
            Some(products.remove(0))
        })
    }

    // -- Vendor dashboard --------------------------------------------------

    /// All products belonging to one vendor, newest first. Backs the vendor
    /// management tab and its polling refresh.
    pub fn for_vendor(&self, vendor: &str) -> Result<Vec<Product>> {
        let query = QueryBuilder::new()
            .filter_eq("vendor", vendor)
            .sort("id", "desc")
            .populate("variants")
            .build();
        self.client.get_list(config::PRODUCTS_PATH, &query)
    }

    // -- Listing search ----------------------------------------------------

    /// Search the product listing using a set of optional filters.
    ///
    /// Translates each field of [`SearchProductsParams`] into the backend's
    /// bracketed filter syntax.
    pub fn search(&self, params: &SearchProductsParams) -> Result<Vec<Product>> {
        let mut qb = QueryBuilder::new();

        if let Some(ref name) = params.name {
            qb.filter_containsi("name", name);
        }

        if let Some(ref category) = params.category {
            qb.filter_eq("category", category);
        }

        if let Some(ref vendor) = params.vendor {
            qb.filter_eq("vendor", vendor);
        }

        if let Some(kind) = params.kind {
            let value = match kind {
                ProductKind::Ticket => "ticket",
                ProductKind::Equipment => "equipment",
            };
            qb.filter_eq("product_type", value);
        }

        if let Some(lte) = params.price_lte {
            qb.filter_lte("base_price", &lte.to_string());
        }

        if let Some(gte) = params.price_gte {
            qb.filter_gte("base_price", &gte.to_string());
        }

        if let Some((ref field, ref dir)) = params.sort {
            qb.sort(field, dir);
        }

        qb.page(params.page.unwrap_or(1));
        qb.page_size(params.page_size.unwrap_or(25));
        qb.populate("variants");

        self.client.get_list(config::PRODUCTS_PATH, &qb.build())
    }
}
