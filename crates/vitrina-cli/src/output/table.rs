//! Table formatting utilities for CLI output.

use comfy_table::{presets, ContentArrangement, Table};
use vitrina::resolver::Domain;

/// Format the token catalog as an ASCII table.
pub fn format_tokens_table(catalog: &[(Domain, &str)]) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_BORDERS_ONLY);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Domain", "Token"]);

    for (domain, token) in catalog {
        table.add_row(vec![domain.to_string(), format!("[{token}]")]);
    }

    table
}
