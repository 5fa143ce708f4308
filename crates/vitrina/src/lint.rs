//! Static checks for content templates.
//!
//! Resolution never fails: a broken token silently passes through to the
//! rendered page. The defect class to catch at authoring time is therefore
//! silent misresolution, not exceptions. `lint_text` finds tokens that will
//! not resolve and, for near-misses, suggests what the author probably meant.

use std::cmp::Ordering;
use std::fmt::{self, Display, Formatter};

use crate::context::ShortcodeContext;
use crate::resolver::{Domain, Segment, domain_of, known_token_names, parse_segments};

/// Why a token will not resolve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenIssue {
    /// No domain defines this token name.
    UnknownToken { suggestions: Vec<String> },
    /// The token's domain is disabled because its sub-context is absent.
    MissingContext { domain: Domain },
}

/// A token in the analyzed text that will pass through unresolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenWarning {
    /// Inner token text exactly as written.
    pub raw: String,
    /// Normalized token name.
    pub name: String,
    pub issue: TokenIssue,
}

impl Display for TokenWarning {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match &self.issue {
            TokenIssue::UnknownToken { .. } => {
                write!(f, "unknown token '[{}]'", self.raw)
            }
            TokenIssue::MissingContext { domain } => {
                write!(
                    f,
                    "token '[{}]' requires {domain} context, which is not available",
                    self.raw
                )
            }
        }
    }
}

/// Find tokens in `text` that will not resolve.
///
/// Unknown token names are always reported, with did-you-mean suggestions.
/// Missing-context warnings are produced only when `ctx` is supplied, since
/// without a context every domain token is potentially resolvable.
pub fn lint_text(text: &str, ctx: Option<&ShortcodeContext>) -> Vec<TokenWarning> {
    let known = known_token_names();
    let mut warnings = Vec::new();

    for segment in parse_segments(text) {
        let Segment::Token { raw, name } = segment else {
            continue;
        };
        match domain_of(&name) {
            None => warnings.push(TokenWarning {
                issue: TokenIssue::UnknownToken {
                    suggestions: compute_suggestions(&name, &known),
                },
                raw,
                name,
            }),
            Some(domain) => {
                let Some(ctx) = ctx else {
                    continue;
                };
                let enabled = match domain {
                    Domain::Region => ctx.region.is_some(),
                    Domain::Product => ctx.product.is_some(),
                    Domain::Category => ctx.category.is_some(),
                    Domain::General => true,
                };
                if !enabled {
                    warnings.push(TokenWarning {
                        issue: TokenIssue::MissingContext { domain },
                        raw,
                        name,
                    });
                }
            }
        }
    }
    warnings
}

/// Up to three names from `available` similar to `input`, best match first.
/// Uses Jaro-Winkler similarity with a 0.7 floor.
pub fn compute_suggestions(input: &str, available: &[&str]) -> Vec<String> {
    let mut scored: Vec<(f64, &str)> = available
        .iter()
        .map(|name| (strsim::jaro_winkler(input, name), *name))
        .filter(|(score, _)| *score >= 0.7)
        .collect();
    scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(Ordering::Equal));
    scored
        .into_iter()
        .take(3)
        .map(|(_, name)| name.to_string())
        .collect()
}
