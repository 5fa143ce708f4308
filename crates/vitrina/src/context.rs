//! Context records consumed by the resolver and the metadata generator.
//!
//! These are plain immutable value records. The page-rendering layer fetches
//! them from storage, bundles them into a [`ShortcodeContext`], and passes the
//! bundle into pure functions; nothing here has persistent identity of its own.

use bon::Builder;
use serde::{Deserialize, Serialize};

/// A sales-territory record with localized contact and city-name data.
///
/// `code` is a non-empty slug (e.g. `"simferopol"`) used both as a cache key
/// and as the key into the declension maps. Codes not present in those maps
/// fall back to the default umbrella-territory entry, never to an error.
#[derive(Debug, Clone, Default, Builder, Serialize, Deserialize)]
#[builder(on(String, into))]
pub struct RegionContext {
    pub code: String,
    /// Nominative city name as shown to visitors.
    pub name: String,
    #[serde(default)]
    #[builder(default)]
    pub phone: String,
    #[serde(default)]
    #[builder(default)]
    pub phone_formatted: String,
    #[serde(default)]
    #[builder(default)]
    pub email: String,
    #[serde(default)]
    #[builder(default)]
    pub address: String,
    #[serde(default)]
    pub address_description: Option<String>,
    #[serde(default)]
    #[builder(default)]
    pub working_hours: String,
    #[serde(default)]
    pub working_hours_description: Option<String>,
    #[serde(default)]
    pub office_name: Option<String>,
}

/// Category reference carried by a product.
#[derive(Debug, Clone, Default, Builder, Serialize, Deserialize)]
#[builder(on(String, into))]
pub struct ProductCategory {
    pub name: String,
}

/// Product record as seen by the shortcode resolver.
///
/// `price` is a non-negative amount in the site's base currency (RUB).
/// `min_price`, when present, is the lowest available variant price; it is
/// what `[product_price_from]` prefers over the base price.
#[derive(Debug, Clone, Default, Builder, Serialize, Deserialize)]
#[builder(on(String, into))]
pub struct ProductContext {
    pub name: String,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub min_price: Option<f64>,
    #[serde(default)]
    pub category: Option<ProductCategory>,
}

/// Category record as seen by the shortcode resolver.
#[derive(Debug, Clone, Default, Builder, Serialize, Deserialize)]
#[builder(on(String, into))]
pub struct CategoryContext {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Bundle of sub-contexts available while resolving a piece of content.
///
/// Absence of a sub-context means shortcodes for that domain are not
/// resolvable and are left verbatim in the output.
#[derive(Debug, Clone, Default, Builder, Serialize, Deserialize)]
pub struct ShortcodeContext {
    #[serde(default)]
    pub region: Option<RegionContext>,
    #[serde(default)]
    pub product: Option<ProductContext>,
    #[serde(default)]
    pub category: Option<CategoryContext>,
}

impl ShortcodeContext {
    /// An empty context: only general tokens resolve.
    pub fn empty() -> Self {
        Self::default()
    }
}
