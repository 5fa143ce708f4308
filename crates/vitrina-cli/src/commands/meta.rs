//! Implementation of the `vitrina meta` command.

use vitrina::MetadataGenerator;

/// Arguments for the meta command.
#[derive(Debug, clap::Args)]
pub struct MetaArgs {
    /// Product or category name
    pub name: String,

    /// Region code (e.g. simferopol)
    #[arg(long, default_value = "default")]
    pub region: String,

    /// Base price in RUB
    #[arg(long)]
    pub price: Option<f64>,

    /// Variant/product price in RUB (repeatable)
    #[arg(long = "variant-price")]
    pub variant_prices: Vec<f64>,

    /// Generate category metadata instead of product metadata
    #[arg(long)]
    pub category: bool,

    /// Company name for the title suffix
    #[arg(long)]
    pub company: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Run the meta command.
pub fn run_meta(args: MetaArgs) -> miette::Result<i32> {
    let generator = MetadataGenerator::builder()
        .maybe_company_name(args.company.clone())
        .build();

    let meta = if args.category {
        generator.category_meta(&args.name, &args.region, &args.variant_prices)
    } else {
        generator.product_meta(&args.name, args.price, &args.region, &args.variant_prices)
    };

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&meta).expect("JSON serialization should not fail")
        );
    } else {
        println!("Title:       {}", meta.title);
        println!("Description: {}", meta.description);
    }
    Ok(exitcode::OK)
}
