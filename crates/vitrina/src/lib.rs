//! Text substitution and SEO metadata generation for the storefront.
//!
//! The crate covers the content pipeline that runs between the database and
//! the rendered page:
//!
//! - [`resolver`] rewrites bracketed shortcodes (`[city]`, `[product_price_from]`)
//!   in free-text content using per-request region/product/category context.
//! - [`metadata`] builds SEO titles and descriptions when no explicit override
//!   is stored, with length optimization and TTL memoization.
//! - [`declension`] maps region codes to grammatical forms of their city name.
//! - [`cache`] is the TTL store backing metadata memoization.
//! - [`directory`] loads region records from JSON for tooling and tests.
//! - [`lint`] finds tokens in content that will not resolve, with
//!   did-you-mean suggestions.
//!
//! Everything in the resolution and generation path is total: unknown tokens
//! pass through verbatim, unknown region codes fall back to the umbrella
//! territory, and missing optional fields render as empty strings.

pub mod cache;
pub mod context;
pub mod declension;
pub mod directory;
pub mod lint;
pub mod metadata;
pub mod price;
pub mod resolver;

pub use cache::{CacheKey, Clock, DEFAULT_TTL, SWEEP_INTERVAL, SystemClock, TtlCache};
pub use context::{CategoryContext, ProductCategory, ProductContext, RegionContext, ShortcodeContext};
pub use declension::{CityCase, DEFAULT_REGION, city_form};
pub use directory::{LoadError, RegionDirectory};
pub use lint::{TokenIssue, TokenWarning, compute_suggestions, lint_text};
pub use metadata::{MetadataGenerator, PageMeta, optimize_meta_tags, spawn_sweeper};
pub use price::{format_rub, min_price};
pub use resolver::{Domain, SITE_NAME, resolve};
