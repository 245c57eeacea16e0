use std::path::PathBuf;

use clap::Args;

use crate::citation::encode::{sort_references, BcvReference};
use crate::cli::{lookup::load_catalog, OutputFormat};

#[derive(Args)]
pub struct SortArgs {
    /// Citations in BBB.chapter.verse[segment] form (e.g. GEN.1.1, PSA.23.1a)
    #[arg(required = true)]
    pub references: Vec<String>,

    /// Path to custom catalog file
    #[arg(long)]
    pub catalog: Option<PathBuf>,
}

pub fn run(args: SortArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let catalog = load_catalog(args.catalog.as_deref())?;

    let references: Vec<BcvReference> = args
        .references
        .iter()
        .map(|text| BcvReference::parse(text))
        .collect::<Result<_, _>>()?;

    if verbose {
        eprintln!("Sorting {} citations", references.len());
    }

    let sorted = sort_references(&catalog, references)?;

    match format {
        OutputFormat::Text => {
            for reference in &sorted {
                println!("{reference}");
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&sorted)?),
    }

    Ok(())
}
