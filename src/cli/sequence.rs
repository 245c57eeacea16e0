use std::path::PathBuf;

use clap::Args;

use crate::cli::{lookup::load_catalog, OutputFormat};
use crate::resolve::sequence::{tidy_bbb, Sequencer};

#[derive(Args)]
pub struct SequenceArgs {
    /// Book codes to reorder; with none given, the full canonical
    /// print-order sequence is printed
    pub books: Vec<String>,

    /// Print conventional display codes (1SA) instead of canonical (SA1)
    #[arg(long)]
    pub tidy: bool,

    /// Path to custom catalog file
    #[arg(long)]
    pub catalog: Option<PathBuf>,
}

pub fn run(args: SequenceArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let catalog = load_catalog(args.catalog.as_deref())?;
    let sequencer = Sequencer::new(&catalog);

    let ordered: Vec<String> = if args.books.is_empty() {
        sequencer.sequence().iter().map(ToString::to_string).collect()
    } else {
        let uppercased: Vec<String> = args.books.iter().map(|b| b.to_uppercase()).collect();
        sequencer
            .sequence_of(&uppercased)?
            .into_iter()
            .map(|b| b.to_string())
            .collect()
    };

    if verbose {
        eprintln!("{} books in sequence", ordered.len());
    }

    let ordered: Vec<String> = if args.tidy {
        ordered.iter().map(|b| tidy_bbb(b)).collect()
    } else {
        ordered
    };

    match format {
        OutputFormat::Text => {
            for bbb in &ordered {
                println!("{bbb}");
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&ordered)?),
    }

    Ok(())
}
