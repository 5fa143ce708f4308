//! Implementation of the `vitrina tokens` command.

use serde::Serialize;
use vitrina::resolver::token_catalog;

use crate::output::table::format_tokens_table;

/// Arguments for the tokens command.
#[derive(Debug, clap::Args)]
pub struct TokensArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output row for a token.
#[derive(Serialize)]
struct TokenRow {
    domain: String,
    token: String,
}

/// Run the tokens command.
pub fn run_tokens(args: TokensArgs) -> miette::Result<i32> {
    let catalog = token_catalog();

    if args.json {
        let rows: Vec<TokenRow> = catalog
            .iter()
            .map(|(domain, token)| TokenRow {
                domain: domain.to_string(),
                token: (*token).to_string(),
            })
            .collect();
        println!(
            "{}",
            serde_json::to_string_pretty(&rows).expect("JSON serialization should not fail")
        );
    } else {
        println!("{}", format_tokens_table(&catalog));
    }
    Ok(exitcode::OK)
}
