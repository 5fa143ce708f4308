//! Implementation of the `vitrina resolve` command.

use std::fs::read_to_string;
use std::path::PathBuf;

use serde::Serialize;
use vitrina::{resolve, RegionDirectory, ShortcodeContext};

/// Arguments for the resolve command.
#[derive(Debug, clap::Args)]
pub struct ResolveArgs {
    /// Template text containing [tokens]
    pub template: String,

    /// JSON file with region/product/category context
    #[arg(long)]
    pub context: Option<PathBuf>,

    /// JSON file with region records (array), see `vitrina resolve --help`
    #[arg(long)]
    pub regions: Option<PathBuf>,

    /// Region code to select from --regions (falls back to 'default')
    #[arg(long)]
    pub region: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for resolve results.
#[derive(Serialize)]
struct ResolveResult {
    result: String,
}

/// Run the resolve command.
pub fn run_resolve(args: ResolveArgs) -> miette::Result<i32> {
    let mut ctx = match &args.context {
        Some(path) => {
            let content = read_to_string(path).map_err(|e| {
                miette::miette!("cannot read context file {}: {}", path.display(), e)
            })?;
            serde_json::from_str::<ShortcodeContext>(&content)
                .map_err(|e| miette::miette!("invalid context file: {}", e))?
        }
        None => ShortcodeContext::empty(),
    };

    // A region record from --regions overrides any region in --context.
    if let Some(regions_path) = &args.regions {
        let mut directory = RegionDirectory::new();
        directory
            .load_file(regions_path)
            .map_err(|e| miette::miette!("{}", e))?;
        let code = args.region.as_deref().unwrap_or("default");
        match directory.get_or_default(code) {
            Some(region) => ctx.region = Some(region.clone()),
            None => {
                return Err(miette::miette!(
                    "region '{}' not found and no default record present",
                    code
                ));
            }
        }
    }

    let result = resolve(Some(&args.template), &ctx);
    if args.json {
        let output = ResolveResult { result };
        println!(
            "{}",
            serde_json::to_string_pretty(&output).expect("JSON serialization should not fail")
        );
    } else {
        println!("{}", result);
    }
    Ok(exitcode::OK)
}
