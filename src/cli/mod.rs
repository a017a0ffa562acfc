pub mod catalog;
pub mod closest;
pub mod completions;
pub mod generate;

use clap::{Parser, Subcommand};

/// block-colours - Per-block average colours from Minecraft textures
///
/// Without a subcommand, runs `generate` with default settings.
#[derive(Parser, Debug)]
#[command(name = "block-colours")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Average block textures and write the colour dataset
    Generate(generate::GenerateArgs),

    /// Print the block catalog
    Catalog(catalog::CatalogArgs),

    /// Find the block closest to a colour
    Closest(closest::ClosestArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}
