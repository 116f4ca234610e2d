//! Query-string builder for the backend's filter dialect.
//!
//! The backend speaks a bracketed filter syntax: `filters[field][$eq]=value`,
//! `pagination[page]=2`, `sort=price:asc`. The builder collects conditions as
//! `(key, value)` pairs; `reqwest` percent-encodes them when they are attached
//! with `.query()`. Builder methods return `&mut Self` for chaining.
//!
//! # Example
//!
//! ```rust
//! use snapcart_sdk::QueryBuilder;
//! let pairs = QueryBuilder::new()
//!     .filter_containsi("name", "stage")
//!     .filter_eq("product_type", "equipment")
//!     .sort("base_price", "asc")
//!     .page(1)
//!     .page_size(20)
//!     .build();
//! ```

/// Builds backend query strings as ordered key/value pairs.
#[derive(Debug, Default, Clone)]
pub struct QueryBuilder {
    pairs: Vec<(String, String)>,
}

impl QueryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    // -- Filters -----------------------------------------------------------

    /// Exact match: `filters[{field}][$eq]={value}`.
    pub fn filter_eq(&mut self, field: &str, value: &str) -> &mut Self {
        self.pairs
            .push((format!("filters[{}][$eq]", field), value.to_string()));
        self
    }

    /// Case-insensitive substring match: `filters[{field}][$containsi]={value}`.
    pub fn filter_containsi(&mut self, field: &str, value: &str) -> &mut Self {
        self.pairs
            .push((format!("filters[{}][$containsi]", field), value.to_string()));
        self
    }

    /// Upper bound: `filters[{field}][$lte]={value}`.
    pub fn filter_lte(&mut self, field: &str, value: &str) -> &mut Self {
        self.pairs
            .push((format!("filters[{}][$lte]", field), value.to_string()));
        self
    }

    /// Lower bound: `filters[{field}][$gte]={value}`.
    pub fn filter_gte(&mut self, field: &str, value: &str) -> &mut Self {
        self.pairs
            .push((format!("filters[{}][$gte]", field), value.to_string()));
        self
    }

    /// Membership: one `filters[{field}][$in][{i}]={value}` pair per value.
    ///
    /// An empty value list adds nothing (the filter is skipped, matching
    /// everything — the backend has no empty-IN form).
    pub fn filter_in(&mut self, field: &str, values: &[&str]) -> &mut Self {
        for (i, value) in values.iter().enumerate() {
            self.pairs.push((
                format!("filters[{}][$in][{}]", field, i),
                value.to_string(),
            ));
        }
        self
    }

    // -- Sort and pagination -----------------------------------------------

    /// Add a sort clause: `sort={field}:{dir}`. Repeated calls append
    /// secondary sort keys.
    pub fn sort(&mut self, field: &str, dir: &str) -> &mut Self {
        self.pairs
            .push(("sort".to_string(), format!("{}:{}", field, dir)));
        self
    }

    /// 1-based page number: `pagination[page]={n}`.
    pub fn page(&mut self, n: usize) -> &mut Self {
        self.pairs
            .push(("pagination[page]".to_string(), n.to_string()));
        self
    }

    /// Page size: `pagination[pageSize]={n}`.
    pub fn page_size(&mut self, n: usize) -> &mut Self {
        self.pairs
            .push(("pagination[pageSize]".to_string(), n.to_string()));
        self
    }

    // -- Relations ---------------------------------------------------------

    /// Request a populated relation: `populate={relation}`. Pass `"*"` to
    /// populate everything.
    pub fn populate(&mut self, relation: &str) -> &mut Self {
        self.pairs
            .push(("populate".to_string(), relation.to_string()));
        self
    }

    // -- Output ------------------------------------------------------------

    /// Consume the builder state into the ordered pair list, ready for
    /// `reqwest`'s `.query()`.
    pub fn build(&self) -> Vec<(String, String)> {
        self.pairs.clone()
    }

    /// Render the raw (unencoded) query string, mainly for logging and
    /// assertions.
    pub fn to_query_string(&self) -> String {
        self.pairs
            .iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect::<Vec<_>>()
            .join("&")
    }
}
