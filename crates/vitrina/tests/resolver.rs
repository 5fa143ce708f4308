//! Integration tests for shortcode resolution.

use vitrina::{
    CategoryContext, ProductCategory, ProductContext, RegionContext, ShortcodeContext, resolve,
};

fn region() -> RegionContext {
    RegionContext::builder()
        .code("simferopol")
        .name("Симферополь")
        .phone("+79780000000")
        .phone_formatted("+7 (978) 000-00-00")
        .email("info@doorhan-crimea.ru")
        .address("ул. Киевская, 1")
        .working_hours("Пн-Пт 9:00-18:00")
        .build()
}

fn product() -> ProductContext {
    ProductContext::builder()
        .name("Откатные ворота")
        .price(100000.0)
        .min_price(50000.0)
        .category(ProductCategory::builder().name("Ворота").build())
        .build()
}

fn region_ctx() -> ShortcodeContext {
    ShortcodeContext::builder().region(region()).build()
}

// =============================================================================
// Null/empty handling
// =============================================================================

#[test]
fn none_input_yields_empty_string() {
    assert_eq!(resolve(None, &region_ctx()), "");
}

#[test]
fn empty_input_yields_empty_string() {
    assert_eq!(resolve(Some(""), &region_ctx()), "");
}

// =============================================================================
// Region tokens
// =============================================================================

#[test]
fn city_resolves_to_region_name() {
    assert_eq!(resolve(Some("[city]"), &region_ctx()), "Симферополь");
}

#[test]
fn city_prepositional_uses_declension_lookup() {
    assert_eq!(
        resolve(Some("[city_prepositional]"), &region_ctx()),
        "Симферополе"
    );
}

#[test]
fn token_name_is_case_insensitive_and_trimmed() {
    assert_eq!(resolve(Some("[ CITY ]"), &region_ctx()), "Симферополь");
    assert_eq!(
        resolve(Some("[City_Prepositional]"), &region_ctx()),
        "Симферополе"
    );
}

#[test]
fn missing_optional_region_field_renders_empty() {
    assert_eq!(resolve(Some("[address_description]"), &region_ctx()), "");
    assert_eq!(resolve(Some("[office_name]"), &region_ctx()), "");
}

#[test]
fn contact_tokens_resolve_verbatim() {
    let ctx = region_ctx();
    assert_eq!(resolve(Some("[phone]"), &ctx), "+79780000000");
    assert_eq!(resolve(Some("[phone_formatted]"), &ctx), "+7 (978) 000-00-00");
    assert_eq!(resolve(Some("[email]"), &ctx), "info@doorhan-crimea.ru");
    assert_eq!(resolve(Some("[working_hours]"), &ctx), "Пн-Пт 9:00-18:00");
}

// =============================================================================
// Product tokens
// =============================================================================

#[test]
fn product_price_is_currency_formatted() {
    let ctx = ShortcodeContext::builder().product(product()).build();
    assert_eq!(
        resolve(Some("[product_price]"), &ctx),
        "100\u{a0}000\u{a0}₽"
    );
}

#[test]
fn product_price_from_prefers_min_price() {
    let ctx = ShortcodeContext::builder().product(product()).build();
    assert_eq!(
        resolve(Some("[product_price_from]"), &ctx),
        "от 50\u{a0}000\u{a0}₽"
    );
}

#[test]
fn product_price_from_falls_back_to_base_price() {
    let product = ProductContext::builder()
        .name("Шлагбаум")
        .price(30000.0)
        .build();
    let ctx = ShortcodeContext::builder().product(product).build();
    assert_eq!(
        resolve(Some("[product_price_from]"), &ctx),
        "от 30\u{a0}000\u{a0}₽"
    );
}

#[test]
fn product_category_empty_without_category() {
    let product = ProductContext::builder().name("Шлагбаум").build();
    let ctx = ShortcodeContext::builder().product(product).build();
    assert_eq!(resolve(Some("[product_category]"), &ctx), "");
}

// =============================================================================
// Category tokens
// =============================================================================

#[test]
fn category_tokens_resolve() {
    let category = CategoryContext::builder()
        .name("Рольставни")
        .description("Защитные рольставни")
        .build();
    let ctx = ShortcodeContext::builder().category(category).build();
    assert_eq!(resolve(Some("[category_name]"), &ctx), "Рольставни");
    assert_eq!(
        resolve(Some("[category_description]"), &ctx),
        "Защитные рольставни"
    );
}

// =============================================================================
// General tokens
// =============================================================================

#[test]
fn site_name_always_available() {
    assert_eq!(
        resolve(Some("[site_name]"), &ShortcodeContext::empty()),
        "DoorHan Крым"
    );
}

#[test]
fn year_is_four_digits() {
    let year = resolve(Some("[year]"), &ShortcodeContext::empty());
    assert_eq!(year.len(), 4);
    assert!(year.chars().all(|c| c.is_ascii_digit()));
}

// =============================================================================
// Fallback behavior
// =============================================================================

#[test]
fn disabled_domain_token_passes_through() {
    // Region present, product absent: product tokens stay verbatim.
    assert_eq!(
        resolve(Some("[product_name]"), &region_ctx()),
        "[product_name]"
    );
}

#[test]
fn unknown_token_passes_through() {
    assert_eq!(
        resolve(Some("[unknown_token]"), &ShortcodeContext::empty()),
        "[unknown_token]"
    );
}

#[test]
fn unknown_token_keeps_original_casing() {
    assert_eq!(
        resolve(Some("[Unknown]"), &ShortcodeContext::empty()),
        "[Unknown]"
    );
}

#[test]
fn unmatched_bracket_left_untouched() {
    assert_eq!(
        resolve(Some("цена [от 100"), &ShortcodeContext::empty()),
        "цена [от 100"
    );
}

// =============================================================================
// Combined resolution
// =============================================================================

#[test]
fn mixed_domains_resolve_in_one_pass() {
    let ctx = ShortcodeContext::builder()
        .region(region())
        .product(product())
        .build();
    let result = resolve(
        Some("В [city] купите [product_name] за [product_price_from]"),
        &ctx,
    );
    assert!(result.contains("Симферополь"));
    assert!(result.contains("Откатные ворота"));
    assert!(result.contains("от 50\u{a0}000\u{a0}₽"));
    assert!(result.starts_with("В "));
}

#[test]
fn non_token_text_is_untouched() {
    let result = resolve(Some("Звоните: [phone]. Ждём вас!"), &region_ctx());
    assert_eq!(result, "Звоните: +79780000000. Ждём вас!");
}
