//! mu-export - MU Online texture conversion tool
//!
//! Converts OZJ/OZT texture containers (and plain image files) to PNG.
//!
//! # Commands
//!
//! - `mu-export texture <file>` - convert a single texture
//! - `mu-export batch <dir> -o <out>` - convert every texture under a directory
//! - `mu-export scan <dir>` - list discovered texture candidates
//!
//! # Usage
//!
//! ```bash
//! # Convert one container
//! mu-export texture Data/Item/weapon01.ozj
//!
//! # Convert a whole item directory
//! mu-export batch Data/Item -o out/
//!
//! # See what the matcher would get to work with
//! mu-export scan Data/Item
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod convert;
mod discover;

/// MU Online texture conversion tool
#[derive(Parser)]
#[command(name = "mu-export")]
#[command(about = "MU Online texture conversion tool")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a single texture file to PNG
    Texture {
        /// Input .ozj/.ozt/.jpg/.png/.tga file
        input: PathBuf,

        /// Output .png file (defaults to the input with a .png extension)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Convert every texture found under a directory
    Batch {
        /// Directory to scan
        dir: PathBuf,

        /// Output directory
        #[arg(short, long)]
        output: PathBuf,

        /// Maximum scan depth
        #[arg(long, default_value_t = discover::DEFAULT_SCAN_DEPTH)]
        depth: usize,
    },

    /// List discovered texture candidates without converting
    Scan {
        /// Directory to scan
        dir: PathBuf,

        /// Maximum scan depth
        #[arg(long, default_value_t = discover::DEFAULT_SCAN_DEPTH)]
        depth: usize,
    },
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Texture { input, output } => {
            let output = output.unwrap_or_else(|| input.with_extension("png"));
            tracing::info!("Converting {:?} -> {:?}", input, output);
            convert::convert_texture(&input, &output)?;
            tracing::info!("Done!");
        }

        Commands::Batch { dir, output, depth } => {
            convert::convert_all(&dir, &output, depth)?;
        }

        Commands::Scan { dir, depth } => {
            let candidates = discover::discover_textures(&dir, depth)?;
            let mut names: Vec<_> = candidates.names().collect();
            names.sort_unstable();
            for name in names {
                println!("{name}");
                for path in candidates.paths(name) {
                    println!("  {}", path.display());
                }
            }
            println!("{} texture name(s)", candidates.len());
        }
    }

    Ok(())
}
