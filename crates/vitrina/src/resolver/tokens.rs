//! Declarative token tables, one per shortcode domain.
//!
//! Each table maps a normalized token name to a resolver function, keeping the
//! token set data-driven and testable per entry. Domains are consulted in
//! precedence order (region, product, category, general) and are never merged:
//! a domain participates only when its sub-context is present.

use std::fmt::{self, Display, Formatter};

use chrono::{Datelike, Utc};

use crate::context::{CategoryContext, ProductContext, RegionContext, ShortcodeContext};
use crate::declension::{CityCase, city_form};
use crate::price::format_rub;

/// Fixed site name substituted for `[site_name]`.
pub const SITE_NAME: &str = "DoorHan Крым";

/// Shortcode domain, in resolution precedence order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Domain {
    Region,
    Product,
    Category,
    General,
}

impl Display for Domain {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let name = match self {
            Domain::Region => "region",
            Domain::Product => "product",
            Domain::Category => "category",
            Domain::General => "general",
        };
        write!(f, "{name}")
    }
}

type RegionFn = fn(&RegionContext) -> String;
type ProductFn = fn(&ProductContext) -> String;
type CategoryFn = fn(&CategoryContext) -> String;
type GeneralFn = fn() -> String;

/// Tokens resolvable when a region context is present.
pub const REGION_TOKENS: &[(&str, RegionFn)] = &[
    ("city", |r| r.name.clone()),
    ("city_prepositional", |r| {
        city_form(&r.code, CityCase::Prepositional).to_string()
    }),
    ("phone", |r| r.phone.clone()),
    ("phone_formatted", |r| r.phone_formatted.clone()),
    ("email", |r| r.email.clone()),
    ("address", |r| r.address.clone()),
    ("address_description", |r| {
        r.address_description.clone().unwrap_or_default()
    }),
    ("working_hours", |r| r.working_hours.clone()),
    ("working_hours_description", |r| {
        r.working_hours_description.clone().unwrap_or_default()
    }),
    ("office_name", |r| r.office_name.clone().unwrap_or_default()),
];

/// Tokens resolvable when a product context is present.
pub const PRODUCT_TOKENS: &[(&str, ProductFn)] = &[
    ("product_name", |p| p.name.clone()),
    ("product_price", |p| {
        p.price.map(format_rub).unwrap_or_default()
    }),
    ("product_price_from", |p| {
        p.min_price
            .or(p.price)
            .map(|value| format!("от {}", format_rub(value)))
            .unwrap_or_default()
    }),
    ("product_category", |p| {
        p.category
            .as_ref()
            .map(|c| c.name.clone())
            .unwrap_or_default()
    }),
];

/// Tokens resolvable when a category context is present.
pub const CATEGORY_TOKENS: &[(&str, CategoryFn)] = &[
    ("category_name", |c| c.name.clone()),
    ("category_description", |c| {
        c.description.clone().unwrap_or_default()
    }),
];

/// Tokens that resolve regardless of context.
pub const GENERAL_TOKENS: &[(&str, GeneralFn)] = &[
    ("site_name", || SITE_NAME.to_string()),
    // Computed at call time, never cached.
    ("year", || Utc::now().year().to_string()),
];

/// Resolve a normalized token name against the enabled domains, in precedence
/// order. `None` means no enabled domain defines the token and the caller
/// should emit the original bracket expression unchanged.
pub fn resolve_token(name: &str, ctx: &ShortcodeContext) -> Option<String> {
    if let Some(region) = &ctx.region {
        if let Some((_, resolver)) = REGION_TOKENS.iter().find(|(token, _)| *token == name) {
            return Some(resolver(region));
        }
    }
    if let Some(product) = &ctx.product {
        if let Some((_, resolver)) = PRODUCT_TOKENS.iter().find(|(token, _)| *token == name) {
            return Some(resolver(product));
        }
    }
    if let Some(category) = &ctx.category {
        if let Some((_, resolver)) = CATEGORY_TOKENS.iter().find(|(token, _)| *token == name) {
            return Some(resolver(category));
        }
    }
    GENERAL_TOKENS
        .iter()
        .find(|(token, _)| *token == name)
        .map(|(_, resolver)| resolver())
}

/// First domain (in precedence order) that defines `name`, if any.
pub fn domain_of(name: &str) -> Option<Domain> {
    if REGION_TOKENS.iter().any(|(token, _)| *token == name) {
        return Some(Domain::Region);
    }
    if PRODUCT_TOKENS.iter().any(|(token, _)| *token == name) {
        return Some(Domain::Product);
    }
    if CATEGORY_TOKENS.iter().any(|(token, _)| *token == name) {
        return Some(Domain::Category);
    }
    if GENERAL_TOKENS.iter().any(|(token, _)| *token == name) {
        return Some(Domain::General);
    }
    None
}

/// Every recognized token name with its domain, in table order.
pub fn token_catalog() -> Vec<(Domain, &'static str)> {
    let mut catalog = Vec::new();
    catalog.extend(REGION_TOKENS.iter().map(|(name, _)| (Domain::Region, *name)));
    catalog.extend(PRODUCT_TOKENS.iter().map(|(name, _)| (Domain::Product, *name)));
    catalog.extend(CATEGORY_TOKENS.iter().map(|(name, _)| (Domain::Category, *name)));
    catalog.extend(GENERAL_TOKENS.iter().map(|(name, _)| (Domain::General, *name)));
    catalog
}

/// Every recognized token name, in table order.
pub fn known_token_names() -> Vec<&'static str> {
    token_catalog().into_iter().map(|(_, name)| name).collect()
}
