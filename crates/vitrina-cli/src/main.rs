//! Storefront content tools entry point.
//!
//! Provides command-line tools for working with shortcode content:
//! - `vitrina resolve` - Resolve a template against a context
//! - `vitrina meta` - Generate SEO metadata for a product or category
//! - `vitrina tokens` - List supported shortcode tokens
//! - `vitrina check` - Find tokens in content files that will not resolve

mod commands;
mod output;

use std::process::exit;

use clap::{Parser, Subcommand, ValueEnum};
use miette::MietteHandlerOpts;

use commands::{
    run_check, run_meta, run_resolve, run_tokens, CheckArgs, MetaArgs, ResolveArgs, TokensArgs,
};

/// Storefront shortcode and SEO metadata tools.
#[derive(Debug, Parser)]
#[command(name = "vitrina")]
#[command(about = "Storefront shortcode and SEO metadata tools", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Color output control
    #[arg(long, value_enum, default_value_t = ColorWhen::Auto, global = true)]
    pub color: ColorWhen,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// When to use colored output.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Resolve a shortcode template against a context
    Resolve(ResolveArgs),
    /// Generate SEO title/description for a product or category
    Meta(MetaArgs),
    /// List supported shortcode tokens per domain
    Tokens(TokensArgs),
    /// Check content files for tokens that will not resolve
    Check(CheckArgs),
}

/// Set up color output based on user preference.
fn setup_colors(color_when: ColorWhen) {
    match color_when {
        ColorWhen::Auto => {
            // owo-colors automatically checks TTY, NO_COLOR, FORCE_COLOR
        }
        ColorWhen::Always => {
            owo_colors::set_override(true);
        }
        ColorWhen::Never => {
            owo_colors::set_override(false);
        }
    }
}

fn main() -> miette::Result<()> {
    let cli = Cli::parse();
    setup_colors(cli.color);

    miette::set_hook(Box::new(|_| {
        Box::new(
            MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .build(),
        )
    }))?;

    let result = match cli.command {
        Commands::Resolve(args) => run_resolve(args),
        Commands::Meta(args) => run_meta(args),
        Commands::Tokens(args) => run_tokens(args),
        Commands::Check(args) => run_check(args, cli.verbose),
    };

    match result {
        Ok(code) => exit(code),
        Err(e) => {
            eprintln!("{:?}", e);
            exit(exitcode::SOFTWARE);
        }
    }
}
