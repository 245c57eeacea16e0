use std::path::PathBuf;

use clap::{Args, Subcommand};

use crate::cli::{lookup::load_catalog, OutputFormat};
use crate::core::types::Section;
use crate::resolve::resolver::Resolver;

#[derive(Args)]
pub struct CatalogArgs {
    #[command(subcommand)]
    pub command: CatalogCommands,
}

#[derive(Subcommand)]
pub enum CatalogCommands {
    /// List all books in the catalog
    List {
        /// Path to custom catalog file
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Filter by section (OT, NT, DC, ...)
        #[arg(long)]
        section: Option<String>,
    },

    /// Show details of a specific book
    Show {
        /// Canonical book code
        #[arg(required = true)]
        bbb: String,

        /// Path to custom catalog file
        #[arg(long)]
        catalog: Option<PathBuf>,
    },

    /// Export the catalog to a file
    Export {
        /// Output file path
        #[arg(required = true)]
        output: PathBuf,

        /// Path to custom catalog file
        #[arg(long)]
        catalog: Option<PathBuf>,
    },
}

pub fn run(args: CatalogArgs, format: OutputFormat, _verbose: bool) -> anyhow::Result<()> {
    match args.command {
        CatalogCommands::List { catalog, section } => list(catalog, section, format),
        CatalogCommands::Show { bbb, catalog } => show(&bbb, catalog, format),
        CatalogCommands::Export { output, catalog } => export(&output, catalog),
    }
}

fn list(
    catalog_path: Option<PathBuf>,
    section: Option<String>,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let catalog = load_catalog(catalog_path.as_deref())?;

    let section_filter: Option<Section> = match section.as_deref() {
        Some(name) => Some(
            serde_json::from_value(serde_json::Value::String(name.to_uppercase()))
                .map_err(|_| anyhow::anyhow!("Unknown section '{name}'"))?,
        ),
        None => None,
    };

    let books: Vec<_> = catalog
        .books()
        .iter()
        .filter(|b| section_filter.is_none() || b.typical_section == section_filter)
        .collect();

    match format {
        OutputFormat::Text => {
            println!("NUM BBB English name");
            for book in books {
                println!("{:3} {} {}", book.number, book.bbb, book.english_name());
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&books)?),
    }

    Ok(())
}

fn show(bbb: &str, catalog_path: Option<PathBuf>, format: OutputFormat) -> anyhow::Result<()> {
    let catalog = load_catalog(catalog_path.as_deref())?;
    let resolver = Resolver::new(&catalog);
    let book = resolver.get(&bbb.to_uppercase())?;

    match format {
        OutputFormat::Text => {
            println!("{} - {}", book.bbb, book.english_name());
            println!("  Number: {}", book.number);
            println!("  Original name: {}", book.book_name);
            let names = book.english_name_list();
            if names.len() > 1 {
                println!("  Name variants: {}", names.join(", "));
            }
            if let Some(section) = book.typical_section {
                println!("  Section: {section}");
            }
            if let Some(chapters) = &book.expected_chapters {
                println!("  Expected chapters: {chapters}");
            }
            if let Some(alternatives) = &book.alternative_books {
                let codes: Vec<_> = alternatives.iter().map(ToString::to_string).collect();
                println!("  Similar books: {}", codes.join(", "));
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(book)?),
    }

    Ok(())
}

fn export(output: &std::path::Path, catalog_path: Option<PathBuf>) -> anyhow::Result<()> {
    let catalog = load_catalog(catalog_path.as_deref())?;
    std::fs::write(output, catalog.to_json()?)?;
    println!("Exported {} books to {}", catalog.len(), output.display());
    Ok(())
}
