use std::path::PathBuf;

use clap::Args;

use crate::catalog::store::BookCatalog;
use crate::cli::OutputFormat;
use crate::core::book::BookRecord;
use crate::core::types::Scheme;
use crate::resolve::resolver::Resolver;
use crate::resolve::sequence::tidy_bbb;

#[derive(Args)]
pub struct LookupArgs {
    /// Code, reference number, or free text to resolve
    #[arg(required = true)]
    pub query: String,

    /// Resolve within a specific scheme (osis, usfm, usfm-number, usx,
    /// sword, sbl, ccel, net, drupal, byzantine, unbound, bibledit, short)
    #[arg(long)]
    pub scheme: Option<String>,

    /// Only consult the exact scheme, with no fallback
    #[arg(long)]
    pub strict: bool,

    /// Treat the query as a reference number (1..=999)
    #[arg(short, long)]
    pub number: bool,

    /// Path to custom catalog file
    #[arg(long)]
    pub catalog: Option<PathBuf>,
}

pub fn run(args: LookupArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let catalog = load_catalog(args.catalog.as_deref())?;
    let resolver = Resolver::new(&catalog);

    let book = if args.number {
        let number: u16 = args
            .query
            .parse()
            .map_err(|_| anyhow::anyhow!("'{}' is not a reference number", args.query))?;
        resolver.by_number(number)?
    } else if let Some(name) = &args.scheme {
        let scheme = Scheme::parse(name)
            .ok_or_else(|| anyhow::anyhow!("Unknown scheme '{name}'"))?;
        if verbose {
            eprintln!("Looking up '{}' in the {scheme} scheme", args.query);
        }
        resolver.by_scheme(scheme, &args.query, args.strict)?
    } else {
        resolver.by_free_text(&args.query)?
    };

    match format {
        OutputFormat::Text => print_text(book),
        OutputFormat::Json => print_json(book)?,
    }

    Ok(())
}

pub(super) fn load_catalog(path: Option<&std::path::Path>) -> anyhow::Result<BookCatalog> {
    Ok(match path {
        Some(path) => BookCatalog::load_from_file(path)?,
        None => BookCatalog::load_embedded()?,
    })
}

fn print_text(book: &BookRecord) {
    println!("{} ({})", book.bbb, tidy_bbb(book.bbb.as_str()));
    println!("  Number: {}", book.number);
    println!("  Name: {}", book.english_name());
    if let Some(section) = book.typical_section {
        println!("  Section: {section}");
    }
    let chapters = book.max_chapters();
    if chapters >= 0 {
        println!("  Chapters: {chapters}");
    }
    println!("  Codes:");
    for scheme in [
        Scheme::Osis,
        Scheme::Usfm,
        Scheme::UsfmNumber,
        Scheme::UsxNumber,
        Scheme::Sword,
        Scheme::Sbl,
        Scheme::Ccel,
        Scheme::Net,
        Scheme::Drupal,
        Scheme::Byzantine,
        Scheme::Unbound,
        Scheme::Bibledit,
    ] {
        if let Some(code) = book.scheme_code(scheme) {
            println!("    {scheme}: {code}");
        }
    }
}

fn print_json(book: &BookRecord) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(book)?);
    Ok(())
}
