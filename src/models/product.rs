use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// ProductKind
// ---------------------------------------------------------------------------

/// The two families of offerings the marketplace sells.
///
/// A checkout may only contain items of a single kind; the cart store's
/// selection validator enforces this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductKind {
    Ticket,
    Equipment,
}

// ---------------------------------------------------------------------------
// Variant
// ---------------------------------------------------------------------------

/// A priced sub-option of a product (ticket tier, equipment package).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Variant {
    pub name: String,
    pub price: u64,
}

// ---------------------------------------------------------------------------
// Product
// ---------------------------------------------------------------------------

/// A purchasable listing as returned by the backend's product endpoints.
///
/// Prices are integer currency units (no fractional amounts on this
/// marketplace).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: u64,
    pub slug: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub base_price: u64,
    #[serde(rename = "product_type")]
    pub kind: ProductKind,
    #[serde(default)]
    pub variants: Vec<Variant>,
    #[serde(default)]
    pub vendor: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl Product {
    /// The price to display on listing cards: the cheapest variant, or the
    /// base price when the product has no variants.
    pub fn lowest_price(&self) -> u64 {
        lowest_variant_price(&self.variants, self.base_price)
    }
}

/// Minimum price across `variants`, or `fallback` when the list is empty.
///
/// There are no error cases: absent variants simply yield the fallback.
pub fn lowest_variant_price(variants: &[Variant], fallback: u64) -> u64 {
    variants.iter().map(|v| v.price).min().unwrap_or(fallback)
}
