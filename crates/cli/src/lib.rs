pub mod paths;
mod scan;
mod templates;
mod view;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "mapshelf",
    version,
    about = "Discover level templates and their thumbnails under configured content roots",
    long_about = "Mapshelf scans the template roots listed in its settings, pairs every template \
                  folder with a level (L_<Name>) and an optional thumbnail (T_<Name>), and \
                  registers the results as level templates grouped by category."
)]
pub struct Cli {
    /// Settings file listing the template roots
    #[arg(long, global = true, value_name = "FILE")]
    pub settings: Option<PathBuf>,

    /// Registry state file
    #[arg(long, global = true, value_name = "FILE")]
    pub registry: Option<PathBuf>,

    /// Also log to stderr
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Scan the configured roots and register new templates
    #[command(
        long_about = "Runs a full scan of every configured template root against a content \
                            directory. Templates whose level is already registered are skipped, \
                            so repeated scans only add what is new."
    )]
    Scan {
        /// Content directory mounted at --mount
        #[arg(value_name = "CONTENT_DIR")]
        content: PathBuf,

        /// Content path prefix of the directory
        #[arg(long, default_value = "/Game")]
        mount: String,

        /// Print the published templates as JSON
        #[arg(long)]
        json: bool,
    },
    /// Manage configured template roots
    #[command(subcommand)]
    Paths(paths::PathsCommands),
    /// List registered templates
    Templates {
        /// Only show one category
        #[arg(long)]
        category: Option<String>,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Resolved file locations shared by all commands
pub struct Locations {
    pub settings: PathBuf,
    pub registry: PathBuf,
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let _guard = mapshelf_runtime::init_logging("cli", cli.verbose);

    let locations = Locations {
        settings: cli
            .settings
            .unwrap_or_else(mapshelf_runtime::default_settings_path),
        registry: cli
            .registry
            .unwrap_or_else(mapshelf_runtime::default_registry_path),
    };

    match cli.command {
        Commands::Scan {
            content,
            mount,
            json,
        } => scan::run(&locations, content, mount, json),
        Commands::Paths(cmd) => paths::run(&locations, cmd),
        Commands::Templates { category, json } => templates::run(&locations, category, json),
    }
}
