//! Arcviz CLI - Command-line interface for Arcviz
//!
//! This is the main entry point for users inspecting their architecture
//! descriptions. It provides commands for validating, encoding and
//! querying the perspective views of an `arc.yaml` file.

use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;

#[derive(Parser)]
#[command(name = "arcviz")]
#[command(author = "Arcviz Contributors")]
#[command(version)]
#[command(about = "Multi-level architecture diagrams from a single description", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize Arcviz in the current directory
    Init {
        /// Path to initialize (defaults to current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// Show what a diagram at the given perspective would contain
    Inspect {
        /// One of landscape, context, container, component (defaults to landscape)
        perspective: Option<String>,

        /// Internal systems to focus on
        targets: Vec<String>,

        /// Path to the architecture description
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Image format to request (png or svg)
        #[arg(long)]
        format: Option<String>,

        /// Output as JSON instead of formatted text
        #[arg(long)]
        json: bool,
    },

    /// Build the graph and report its size
    Check {
        /// Path to the architecture description
        #[arg(short, long)]
        file: Option<PathBuf>,
    },

    /// Write the binary request payload for a description
    Encode {
        /// Path to the architecture description
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Output file
        #[arg(short, long, default_value = "arc.bin")]
        output: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    // Set up logging
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .with(tracing_subscriber::EnvFilter::new(filter))
        .init();

    let result = match cli.command {
        Commands::Init { path } => commands::init(&path),
        Commands::Inspect {
            perspective,
            targets,
            file,
            format,
            json,
        } => commands::inspect(
            perspective.as_deref(),
            targets,
            file.as_deref(),
            format.as_deref(),
            json,
        ),
        Commands::Check { file } => commands::check(file.as_deref()),
        Commands::Encode { file, output } => commands::encode(file.as_deref(), &output),
    };

    if let Err(e) = result {
        eprintln!("{} {}", "error:".red().bold(), e);
        std::process::exit(1);
    }
}
