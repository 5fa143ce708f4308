//! SEO title/description generation for product and category pages.
//!
//! Used when a page has no explicit SEO override stored. Generation is
//! deterministic string work, memoized for an hour per input combination so
//! high-traffic pages do not redo it on every request. The generator is an
//! explicit service object passed by reference, not a module singleton, so
//! tests construct isolated instances and control the clock.

mod optimizer;

pub use optimizer::{
    DESCRIPTION_MAX, DESCRIPTION_MIN, INSTALL_SENTENCE, QUALITY_FILLER, TITLE_MAX,
    optimize_meta_tags,
};

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError, Weak};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use bon::Builder;
use serde::Serialize;
use tracing::{debug, trace};

use crate::cache::{CacheKey, Clock, SystemClock, TtlCache};
use crate::declension::{CityCase, city_form};
use crate::metadata::optimizer::{char_len, take_graphemes};
use crate::price::{format_rub, min_price};
use crate::resolver::SITE_NAME;

/// Generated SEO metadata for a page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageMeta {
    pub title: String,
    pub description: String,
}

/// Title/description generator with per-kind TTL caches.
///
/// # Example
///
/// ```
/// use vitrina::MetadataGenerator;
///
/// let generator = MetadataGenerator::new();
/// let meta = generator.product_meta("Откатные ворота", Some(50000.0), "yalta", &[]);
/// assert!(meta.title.contains("Ялте"));
/// assert!(meta.title.chars().count() <= 60);
/// ```
#[derive(Builder)]
#[builder(on(String, into))]
pub struct MetadataGenerator {
    /// Company name appended to every title.
    #[builder(default = SITE_NAME.to_string())]
    company_name: String,

    /// Currency code; part of the cache key only, display is always RUB.
    #[builder(default = String::from("RUB"))]
    currency: String,

    /// Time source for cache expiry. Tests inject a manual clock.
    #[builder(default = Arc::new(SystemClock))]
    clock: Arc<dyn Clock>,

    #[builder(skip)]
    product_cache: TtlCache<PageMeta>,

    #[builder(skip)]
    category_cache: TtlCache<PageMeta>,

    /// Memo for the accusative transform. Pure function of the input string,
    /// so entries never expire.
    #[builder(skip)]
    accusative_cache: Mutex<HashMap<String, String>>,

    /// Cache-miss generations performed; lets tests observe hit/miss behavior.
    #[builder(skip)]
    generations: AtomicU64,
}

impl Default for MetadataGenerator {
    fn default() -> Self {
        MetadataGenerator::builder().build()
    }
}

impl MetadataGenerator {
    /// Generator with the site defaults and the system clock.
    pub fn new() -> Self {
        Self::default()
    }

    /// Metadata for a product page.
    ///
    /// The effective price is the minimum positive value among `price` and
    /// `variant_prices`; `None` selects the priceless description template.
    pub fn product_meta(
        &self,
        name: &str,
        price: Option<f64>,
        region: &str,
        variant_prices: &[f64],
    ) -> PageMeta {
        let effective = min_price(price, variant_prices);
        self.generate("product", &self.product_cache, name, effective, region)
    }

    /// Metadata for a category page; the effective price is the minimum
    /// positive price across the category's products.
    pub fn category_meta(&self, name: &str, region: &str, product_prices: &[f64]) -> PageMeta {
        let effective = min_price(None, product_prices);
        self.generate("category", &self.category_cache, name, effective, region)
    }

    /// Number of cache-miss generations performed so far.
    pub fn generations(&self) -> u64 {
        self.generations.load(Ordering::Relaxed)
    }

    /// Entries currently held across both metadata caches, expired but
    /// unswept entries included.
    pub fn cached_entries(&self) -> usize {
        self.product_cache.len() + self.category_cache.len()
    }

    /// Remove expired entries from both metadata caches. Idempotent; safe to
    /// run concurrently with generation.
    pub fn sweep_expired(&self) -> usize {
        let now = self.clock.now_millis();
        let removed =
            self.product_cache.sweep_expired(now) + self.category_cache.sweep_expired(now);
        if removed > 0 {
            debug!(removed, "swept expired metadata cache entries");
        }
        removed
    }

    /// Drop all cached metadata regardless of age.
    pub fn clear_caches(&self) {
        self.product_cache.clear(None);
        self.category_cache.clear(None);
    }

    fn generate(
        &self,
        kind: &str,
        cache: &TtlCache<PageMeta>,
        name: &str,
        effective_price: Option<f64>,
        region: &str,
    ) -> PageMeta {
        let now = self.clock.now_millis();
        let key = self.cache_key(kind, name, effective_price, region);
        if let Some(cached) = cache.get(&key, now) {
            trace!(kind, name, region, "metadata cache hit");
            return cached;
        }
        trace!(kind, name, region, "metadata cache miss");

        let title = self.build_title(name, region);
        let description = self.build_description(name, effective_price, region);
        let meta = optimize_meta_tags(&title, &description);

        cache.insert(key, meta.clone(), now);
        self.generations.fetch_add(1, Ordering::Relaxed);
        meta
    }

    fn cache_key(
        &self,
        kind: &str,
        name: &str,
        effective_price: Option<f64>,
        region: &str,
    ) -> CacheKey {
        let price = match effective_price {
            Some(p) => p.to_string(),
            None => "none".to_string(),
        };
        CacheKey::new(&format!(
            "{kind}|{name}|{price}|{region}|{}|{}",
            self.company_name, self.currency
        ))
    }

    /// `"{name} - купить в {city} | {company}"`, truncating only the name
    /// (never the suffix) to keep the title within 60 characters. If even an
    /// empty name would not fit, the full string is returned untruncated.
    fn build_title(&self, name: &str, region: &str) -> String {
        let city = city_form(region, CityCase::Prepositional);
        let suffix = format!(" - купить в {city} | {}", self.company_name);
        let full = format!("{name}{suffix}");
        if char_len(&full) <= TITLE_MAX {
            return full;
        }
        let Some(name_budget) = TITLE_MAX.checked_sub(char_len(&suffix) + 3) else {
            return full;
        };
        if name_budget == 0 {
            return full;
        }
        let kept = take_graphemes(name, name_budget);
        format!("{}...{suffix}", kept.trim_end())
    }

    fn build_description(&self, name: &str, effective_price: Option<f64>, region: &str) -> String {
        let item = self.accusative(name);
        let city = city_form(region, CityCase::Dative);
        match effective_price {
            Some(price) if price > 0.0 => format!(
                "Закажите {item} производителя DoorHan. Цена: {} Доставим по {city} и Крыму. {INSTALL_SENTENCE}",
                format_rub(price)
            ),
            _ => format!(
                "Предлагаем заказать {item} от DoorHan по заводской цене. Доставим по {city} и Крыму. {INSTALL_SENTENCE}"
            ),
        }
    }

    /// Mid-sentence form of a product name: first letter lowercased when the
    /// name starts uppercase, internal whitespace collapsed. Memoized per
    /// distinct input.
    fn accusative(&self, name: &str) -> String {
        let mut memo = self
            .accusative_cache
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if let Some(cached) = memo.get(name) {
            return cached.clone();
        }

        let collapsed = name.split_whitespace().collect::<Vec<_>>().join(" ");
        let mut chars = collapsed.chars();
        let transformed = match chars.next() {
            Some(first) if first.is_uppercase() => {
                let mut out = String::with_capacity(collapsed.len());
                out.extend(first.to_lowercase());
                out.push_str(chars.as_str());
                out
            }
            _ => collapsed,
        };
        memo.insert(name.to_string(), transformed.clone());
        transformed
    }
}

/// Spawn a background thread that sweeps the generator's caches every
/// `interval` (see [`crate::cache::SWEEP_INTERVAL`] for the default cadence).
///
/// Holds only a weak reference: the thread exits on its next tick after the
/// generator is dropped.
pub fn spawn_sweeper(generator: &Arc<MetadataGenerator>, interval: Duration) -> JoinHandle<()> {
    let weak: Weak<MetadataGenerator> = Arc::downgrade(generator);
    thread::spawn(move || {
        loop {
            thread::sleep(interval);
            let Some(generator) = weak.upgrade() else {
                break;
            };
            generator.sweep_expired();
        }
    })
}
