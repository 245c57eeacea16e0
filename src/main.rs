use clap::Parser;
use tracing_subscriber::EnvFilter;

mod catalog;
mod citation;
mod cli;
mod core;
mod resolve;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("book_codes=debug,info")
    } else {
        EnvFilter::new("book_codes=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();

    match cli.command {
        cli::Commands::Lookup(args) => {
            cli::lookup::run(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Sequence(args) => {
            cli::sequence::run(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Sort(args) => {
            cli::sort::run(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Catalog(args) => {
            cli::catalog::run(args, cli.format, cli.verbose)?;
        }
    }

    Ok(())
}
