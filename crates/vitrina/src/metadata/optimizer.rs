//! Length optimization for generated SEO tags.
//!
//! Descriptions are kept inside the [120, 160] character window search
//! engines display, while the trailing delivery/installation clause is never
//! sacrificed: it carries the call to action. Over-length text is rebuilt
//! from whole sentences (then words) from the front; under-length text gets a
//! filler clause appended once and is not re-checked against the upper bound
//! afterwards. That asymmetry is long-standing site behavior and is kept.
//!
//! Lengths are counted in `char`s; truncation cuts on grapheme boundaries so
//! a composed character is never split.

use unicode_segmentation::UnicodeSegmentation;

use super::PageMeta;

/// Maximum title length in characters.
pub const TITLE_MAX: usize = 60;

/// Description length window, in characters.
pub const DESCRIPTION_MIN: usize = 120;
pub const DESCRIPTION_MAX: usize = 160;

/// Closing sentence of every generated description.
pub const INSTALL_SENTENCE: &str = "Установим, настроим!";

/// Filler inserted before a preserved suffix when the text runs short.
pub const QUALITY_FILLER: &str = "Качество и надежность от DoorHan.";

const DELIVERY_PREFIX: &str = "Доставим по ";
const DELIVERY_TAIL: &str = "и Крыму.";

pub(crate) fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Longest prefix of `s` holding at most `max_chars` characters, cut on a
/// grapheme boundary.
pub(crate) fn take_graphemes(s: &str, max_chars: usize) -> &str {
    let mut budget = max_chars;
    let mut end = 0;
    for (offset, grapheme) in s.grapheme_indices(true) {
        let chars = grapheme.chars().count();
        if chars > budget {
            break;
        }
        budget -= chars;
        end = offset + grapheme.len();
    }
    &s[..end]
}

/// Enforce display bounds on a generated title/description pair.
pub fn optimize_meta_tags(title: &str, description: &str) -> PageMeta {
    PageMeta {
        title: truncate_title(title),
        description: optimize_description(description),
    }
}

/// Defensive re-truncation; generation already keeps titles within bounds.
pub(crate) fn truncate_title(title: &str) -> String {
    if char_len(title) <= TITLE_MAX {
        return title.to_string();
    }
    let kept = take_graphemes(title, TITLE_MAX.saturating_sub(3));
    format!("{}...", kept.trim_end())
}

fn optimize_description(description: &str) -> String {
    let total = char_len(description);
    if total > DESCRIPTION_MAX {
        shrink(description)
    } else if total < DESCRIPTION_MIN {
        pad(description)
    } else {
        description.to_string()
    }
}

/// Split off the trailing clause that must survive truncation: the delivery
/// sentence ("Доставим по X и Крыму.") and/or the closing install sentence.
fn split_preserved_suffix(description: &str) -> (String, String) {
    let mut rest = description.trim_end();
    let mut parts: Vec<&str> = Vec::new();

    if let Some(stripped) = rest.strip_suffix(INSTALL_SENTENCE) {
        parts.push(INSTALL_SENTENCE);
        rest = stripped.trim_end();
    }
    if rest.ends_with(DELIVERY_TAIL) {
        if let Some(idx) = rest.rfind(DELIVERY_PREFIX) {
            parts.insert(0, &rest[idx..]);
            rest = rest[..idx].trim_end();
        }
    }

    (rest.to_string(), parts.join(" "))
}

fn join_with_suffix(body: &str, suffix: &str) -> String {
    match (body.is_empty(), suffix.is_empty()) {
        (_, true) => body.to_string(),
        (true, false) => suffix.to_string(),
        (false, false) => format!("{body} {suffix}"),
    }
}

/// Rebuild an over-length description from the front, reserving room for the
/// preserved suffix. Whole sentences first; words with an ellipsis when
/// sentence granularity cannot reach the length floor.
fn shrink(description: &str) -> String {
    let (body, suffix) = split_preserved_suffix(description);
    let suffix_len = if suffix.is_empty() {
        0
    } else {
        char_len(&suffix) + 1
    };
    let budget = DESCRIPTION_MAX.saturating_sub(suffix_len);

    let mut kept = String::new();
    for sentence in split_sentences(&body) {
        let sep = usize::from(!kept.is_empty());
        if char_len(&kept) + sep + char_len(&sentence) > budget {
            break;
        }
        if !kept.is_empty() {
            kept.push(' ');
        }
        kept.push_str(&sentence);
    }
    let assembled = join_with_suffix(&kept, &suffix);
    if char_len(&assembled) >= DESCRIPTION_MIN {
        return assembled;
    }

    let word_budget = budget.saturating_sub(3);
    let mut kept = String::new();
    for word in body.split_whitespace() {
        let sep = usize::from(!kept.is_empty());
        if char_len(&kept) + sep + char_len(word) > word_budget {
            break;
        }
        if !kept.is_empty() {
            kept.push(' ');
        }
        kept.push_str(word);
    }
    if !kept.is_empty() {
        kept.push_str("...");
    }
    join_with_suffix(&kept, &suffix)
}

/// Append a filler clause to an under-length description. No upper-bound
/// re-check afterwards.
fn pad(description: &str) -> String {
    let (body, suffix) = split_preserved_suffix(description);
    if suffix.is_empty() {
        let trimmed = description.trim_end();
        if trimmed.is_empty() {
            return INSTALL_SENTENCE.to_string();
        }
        return format!("{trimmed} {INSTALL_SENTENCE}");
    }
    join_with_suffix(&join_with_suffix(&body, QUALITY_FILLER), &suffix)
}

/// Split on sentence-ending punctuation, keeping the punctuation with the
/// sentence. A trailing fragment without punctuation counts as a sentence.
fn split_sentences(body: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut current = String::new();
    for ch in body.chars() {
        current.push(ch);
        if matches!(ch, '.' | '!' | '?') {
            let trimmed = current.trim();
            if !trimmed.is_empty() {
                sentences.push(trimmed.to_string());
            }
            current.clear();
        }
    }
    let tail = current.trim();
    if !tail.is_empty() {
        sentences.push(tail.to_string());
    }
    sentences
}

#[cfg(test)]
mod tests {
    use super::*;

    fn delivery(city: &str) -> String {
        format!("Доставим по {city} и Крыму.")
    }

    #[test]
    fn suffix_detection_finds_both_clauses() {
        let text = format!("Первое предложение. {} {INSTALL_SENTENCE}", delivery("Ялте"));
        let (body, suffix) = split_preserved_suffix(&text);
        assert_eq!(body, "Первое предложение.");
        assert_eq!(suffix, format!("{} {INSTALL_SENTENCE}", delivery("Ялте")));
    }

    #[test]
    fn suffix_detection_handles_install_only() {
        let (body, suffix) = split_preserved_suffix("Текст. Установим, настроим!");
        assert_eq!(body, "Текст.");
        assert_eq!(suffix, INSTALL_SENTENCE);
    }

    #[test]
    fn suffix_detection_empty_when_absent() {
        let (body, suffix) = split_preserved_suffix("Просто текст без концовки.");
        assert_eq!(body, "Просто текст без концовки.");
        assert_eq!(suffix, "");
    }

    #[test]
    fn in_window_description_untouched() {
        let text = format!(
            "Закажите ворота производителя DoorHan по выгодной цене с установкой. {} {INSTALL_SENTENCE}",
            delivery("Симферополю")
        );
        let len = char_len(&text);
        assert!((DESCRIPTION_MIN..=DESCRIPTION_MAX).contains(&len), "len={len}");
        let meta = optimize_meta_tags("t", &text);
        assert_eq!(meta.description, text);
    }

    #[test]
    fn over_length_keeps_suffix_and_fits() {
        let long_body = "Очень длинное описание товара. ".repeat(12);
        let text = format!("{long_body}{} {INSTALL_SENTENCE}", delivery("Ялте"));
        let meta = optimize_meta_tags("t", &text);
        assert!(meta.description.ends_with(INSTALL_SENTENCE));
        assert!(meta.description.contains("Доставим по Ялте"));
        assert!(char_len(&meta.description) <= DESCRIPTION_MAX);
    }

    #[test]
    fn over_length_word_fallback_when_one_huge_sentence() {
        // A single sentence longer than the budget forces word-level cutting.
        let huge = format!(
            "{} {} {INSTALL_SENTENCE}",
            "слово ".repeat(60).trim_end().to_string() + ".",
            delivery("Керчи")
        );
        let meta = optimize_meta_tags("t", &huge);
        assert!(meta.description.contains("..."));
        assert!(meta.description.ends_with(INSTALL_SENTENCE));
        assert!(char_len(&meta.description) <= DESCRIPTION_MAX);
    }

    #[test]
    fn under_length_without_suffix_gets_install_sentence() {
        let meta = optimize_meta_tags("t", "Короткое описание.");
        assert!(meta.description.ends_with(INSTALL_SENTENCE));
    }

    #[test]
    fn under_length_with_suffix_gets_quality_filler_before_it() {
        let text = format!("Коротко. {} {INSTALL_SENTENCE}", delivery("Ялте"));
        assert!(char_len(&text) < DESCRIPTION_MIN);
        let meta = optimize_meta_tags("t", &text);
        let filler_pos = meta.description.find(QUALITY_FILLER).expect("filler present");
        let suffix_pos = meta.description.find("Доставим по").expect("suffix present");
        assert!(filler_pos < suffix_pos);
        assert!(meta.description.ends_with(INSTALL_SENTENCE));
    }

    #[test]
    fn title_over_sixty_truncated_with_ellipsis() {
        let title = "а".repeat(80);
        let meta = optimize_meta_tags(&title, &"б".repeat(130));
        assert!(char_len(&meta.title) <= TITLE_MAX);
        assert!(meta.title.ends_with("..."));
    }

    #[test]
    fn take_graphemes_counts_chars_not_bytes() {
        assert_eq!(take_graphemes("привет", 4), "прив");
        assert_eq!(take_graphemes("abc", 10), "abc");
    }

    #[test]
    fn take_graphemes_never_splits_a_cluster() {
        // "и" + combining breve is one grapheme of two chars.
        let s = "и\u{0306}од";
        assert_eq!(take_graphemes(s, 1), "");
        assert_eq!(take_graphemes(s, 2), "и\u{0306}");
        assert_eq!(take_graphemes(s, 3), "и\u{0306}о");
    }

    #[test]
    fn title_truncation_cuts_on_cluster_boundary() {
        // The budget lands mid-cluster; the whole cluster must be dropped.
        let title = format!("{}и\u{0306}{}", "а".repeat(56), "б".repeat(20));
        let meta = optimize_meta_tags(&title, &"в".repeat(130));
        assert!(char_len(&meta.title) <= TITLE_MAX);
        assert!(meta.title.ends_with("..."));
        assert!(!meta.title.contains('\u{0306}'));
    }
}
