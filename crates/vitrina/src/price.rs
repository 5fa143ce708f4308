//! Effective-price computation and RUB display formatting.

/// Minimum positive price across an optional base price and variant prices.
///
/// Non-positive values are ignored; returns `None` when nothing qualifies.
/// This drives the "от 50 000 ₽" pricing language, so a zero placeholder
/// price must never win over a real variant price.
pub fn min_price(base: Option<f64>, variants: &[f64]) -> Option<f64> {
    let mut best: Option<f64> = None;
    for &candidate in base.iter().chain(variants) {
        if candidate > 0.0 && best.is_none_or(|current| candidate < current) {
            best = Some(candidate);
        }
    }
    best
}

/// Integer-rounded RUB amount with no-break-space digit grouping.
///
/// Matches the site's display convention: `50 000 ₽`, no decimal places.
pub fn format_rub(amount: f64) -> String {
    let rounded = amount.round().max(0.0) as u64;
    let digits = rounded.to_string();
    let len = digits.len();
    let mut out = String::with_capacity(len + 8);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push('\u{a0}');
        }
        out.push(ch);
    }
    out.push('\u{a0}');
    out.push('₽');
    out
}
