//! Miette diagnostics for unresolvable tokens.

use std::path::Path;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;
use vitrina::{TokenIssue, TokenWarning};

/// A miette-compatible diagnostic for a token that will not resolve.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
#[diagnostic(code(vitrina::token))]
pub struct TokenDiagnostic {
    #[source_code]
    src: NamedSource<String>,

    #[label("this token will not resolve")]
    span: SourceSpan,

    message: String,

    #[help]
    help: Option<String>,
}

impl TokenDiagnostic {
    /// Create a diagnostic from a lint warning with source context.
    ///
    /// `occurrence` is the zero-based index of this warning among warnings
    /// with the same token text, so repeated broken tokens each label their
    /// own site.
    pub fn new(path: &Path, content: &str, warning: &TokenWarning, occurrence: usize) -> Self {
        let needle = format!("[{}]", warning.raw);
        let offset = content
            .match_indices(&needle)
            .nth(occurrence)
            .map_or(0, |(index, _)| index);

        let help = match &warning.issue {
            TokenIssue::UnknownToken { suggestions } if !suggestions.is_empty() => {
                let formatted: Vec<String> =
                    suggestions.iter().map(|s| format!("'[{s}]'")).collect();
                Some(format!("did you mean {}?", formatted.join(", ")))
            }
            TokenIssue::UnknownToken { .. } => None,
            TokenIssue::MissingContext { domain } => {
                Some(format!("supply a {domain} context to resolve this token"))
            }
        };

        TokenDiagnostic {
            src: NamedSource::new(path.display().to_string(), content.to_string()),
            span: (offset, needle.len()).into(),
            message: warning.to_string(),
            help,
        }
    }
}
