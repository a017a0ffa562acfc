use clap::Parser;
use miette::Result;
use block_colours::cli::{Cli, Commands};
use block_colours::output::Printer;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new();

    match cli.command {
        None => block_colours::cli::generate::run(Default::default())?,
        Some(Commands::Generate(args)) => block_colours::cli::generate::run(args)?,
        Some(Commands::Catalog(args)) => block_colours::cli::catalog::run(args, &printer)?,
        Some(Commands::Closest(args)) => block_colours::cli::closest::run(args, &printer)?,
        Some(Commands::Completions(args)) => block_colours::cli::completions::run(args)?,
    }

    Ok(())
}
