//! Shortcode resolution for free-text content fields.
//!
//! Content stored in the catalog (descriptions, H1s, SEO fields) may contain
//! bracket-delimited tokens such as `[city]` or `[product_price_from]`. The
//! resolver rewrites them from a per-request [`ShortcodeContext`]; anything it
//! does not recognize passes through verbatim. The whole pass is a pure
//! function of `(text, context)` with no error path.

mod parser;
mod tokens;

pub use parser::{Segment, parse_segments};
pub use tokens::{
    CATEGORY_TOKENS, Domain, GENERAL_TOKENS, PRODUCT_TOKENS, REGION_TOKENS, SITE_NAME, domain_of,
    known_token_names, resolve_token, token_catalog,
};

use crate::context::ShortcodeContext;

/// Replace every recognized `[token]` in `text` with its contextual value.
///
/// - `None` or empty input yields `""`.
/// - Token names are matched case-insensitively with surrounding whitespace
///   trimmed.
/// - Domains are consulted in precedence order (region, product, category,
///   general); a domain participates only when its sub-context is present.
/// - Unrecognized tokens, and tokens whose domain is disabled, are emitted
///   exactly as written, original casing included.
pub fn resolve(text: Option<&str>, ctx: &ShortcodeContext) -> String {
    let Some(text) = text else {
        return String::new();
    };
    if text.is_empty() {
        return String::new();
    }

    let mut out = String::with_capacity(text.len());
    for segment in parse_segments(text) {
        match segment {
            Segment::Literal(literal) => out.push_str(&literal),
            Segment::Token { raw, name } => match resolve_token(&name, ctx) {
                Some(value) => out.push_str(&value),
                None => {
                    out.push('[');
                    out.push_str(&raw);
                    out.push(']');
                }
            },
        }
    }
    out
}
