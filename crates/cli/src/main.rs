//! CLI tool for building PowerPoint files.

mod deck;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use deck::{default_output_path, Deck};
use deck_pptx::{compression, PackageConfig};
use std::path::PathBuf;

/// Build .pptx packages from a JSON slide deck.
#[derive(Parser, Debug)]
#[command(name = "deck-build")]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Build a presentation from a deck file
    Build {
        /// Deck description (.json)
        deck: PathBuf,

        /// Output file (default: deck path with .pptx extension)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Package skeleton directory (default: bundled skeleton)
        #[arg(long)]
        template_dir: Option<PathBuf>,
    },

    /// Zip an extracted package directory into a .pptx file
    Pack {
        /// Extracted package directory
        source: PathBuf,

        /// Output file
        output: PathBuf,
    },

    /// Extract a .pptx file into a directory
    Unpack {
        /// Input file
        input: PathBuf,

        /// Target directory
        target: PathBuf,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    if args.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    match args.command {
        Command::Build {
            deck,
            output,
            template_dir,
        } => {
            let mut config = PackageConfig::default();
            if let Some(dir) = template_dir {
                config = config.with_template_path(dir);
            }

            let output = output.unwrap_or_else(|| default_output_path(&deck));
            let presentation = Deck::load(&deck)?.into_presentation(config)?;

            log::debug!("Built {} slides from {}", presentation.slides().len(), deck.display());

            let saved = presentation
                .save(&output)
                .with_context(|| format!("Failed to save {}", output.display()))?;

            if args.verbose {
                eprintln!("Written to: {}", saved.display());
            }
        }
        Command::Pack { source, output } => {
            compression::compress(&source, &output)
                .with_context(|| format!("Failed to pack {}", source.display()))?;
        }
        Command::Unpack { input, target } => {
            compression::decompress(&input, &target)
                .with_context(|| format!("Failed to unpack {}", input.display()))?;
        }
    }

    Ok(())
}
