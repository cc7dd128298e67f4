//! # Pugmark CLI
//!
//! Command-line interface for stamping the Pugminer logo into MinerScreen headers.
//!
//! ## Usage
//!
//! ```bash
//! # Rewrite every src/media/images_*_*.h header
//! pugmark update
//!
//! # Use another media directory, report without writing
//! pugmark update --media firmware/media --dry-run
//!
//! # Save a PNG of the logo on a 320x240 screen
//! pugmark preview --width 320 --height 240 --png logo.png
//! ```

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use pugmark::{PugmarkError, TargetConfig, preview, render::Palette, update};

/// Pugmark - MinerScreen logo stamper
#[derive(Parser, Debug)]
#[command(name = "pugmark")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log progress (info level)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Log everything (debug level)
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Stamp the logo into every matching header
    Update {
        /// Directory holding the generated headers
        #[arg(long, value_name = "DIR", default_value = TargetConfig::DEFAULT_MEDIA_DIR)]
        media: PathBuf,

        /// File glob inside the media directory
        #[arg(long, default_value = TargetConfig::MINER_SCREEN.file_glob)]
        pattern: String,

        /// Process files but do not write them
        #[arg(long)]
        dry_run: bool,
    },

    /// Render the logo on a blank screen and save it as PNG
    Preview {
        /// Screen width in pixels
        #[arg(long, default_value = "320")]
        width: usize,

        /// Screen height in pixels
        #[arg(long, default_value = "240")]
        height: usize,

        /// Output PNG path
        #[arg(long, value_name = "FILE")]
        png: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.debug);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool, debug: bool) {
    let level = if debug {
        tracing::Level::DEBUG
    } else if verbose {
        tracing::Level::INFO
    } else {
        tracing::Level::WARN
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}

fn run(command: Commands) -> Result<(), PugmarkError> {
    match command {
        Commands::Update {
            media,
            pattern,
            dry_run,
        } => {
            let config = TargetConfig::MINER_SCREEN;
            let report =
                update::update_all(&media, &pattern, &config, &Palette::PUGMINER, dry_run)?;
            if report.updated.is_empty() {
                return Err(PugmarkError::NothingUpdated(config.array_name));
            }

            println!("{}:", if dry_run { "Would update" } else { "Updated" });
            for path in &report.updated {
                let shown = path.strip_prefix(&media).unwrap_or(path);
                println!(" - {}", shown.display());
            }
            tracing::info!(
                changed = report.changed,
                failed = report.failed.len(),
                "update finished"
            );
        }
        Commands::Preview { width, height, png } => {
            println!("Rendering {}x{} logo...", width, height);
            let pixels = preview::render_logo(width, height)?;
            preview::save_png(&png, &pixels, width, height)?;
            println!("Saved to {}", png.display());
        }
    }

    Ok(())
}
