use crate::Locations;
use crate::view::RootRow;
use clap::Subcommand;
use mapshelf_core::settings::{SETTINGS_CATEGORY, SETTINGS_SECTION};
use mapshelf_core::{InMemoryTemplateRegistry, ScanOutcome, TemplateSettings};
use mapshelf_plugin::{DEFAULT_CATEGORY, RootSpec};
use mapshelf_runtime::{FilesystemOptions, build_filesystem_service};
use std::path::PathBuf;
use std::sync::Arc;
use tabled::Table;
use tracing::info;

#[derive(Subcommand)]
pub enum PathsCommands {
    /// List configured roots in scan order
    List {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Add a template root
    Add {
        /// Content path of the root (e.g. /Game/Templates)
        path: String,
        /// Category the root's templates are listed under
        #[arg(long, default_value = DEFAULT_CATEGORY)]
        category: String,
        #[command(flatten)]
        rescan: RescanArgs,
    },
    /// Remove a template root
    Remove {
        path: String,
        #[command(flatten)]
        rescan: RescanArgs,
    },
    /// Change the category of a template root
    SetCategory {
        path: String,
        category: String,
        #[command(flatten)]
        rescan: RescanArgs,
    },
}

#[derive(clap::Args)]
pub struct RescanArgs {
    /// Rescan this content directory after saving the settings
    #[arg(long, value_name = "CONTENT_DIR")]
    content: Option<PathBuf>,

    /// Content path prefix of the directory
    #[arg(long, default_value = "/Game")]
    mount: String,
}

pub fn run(locations: &Locations, cmd: PathsCommands) -> Result<(), Box<dyn std::error::Error>> {
    let mut settings = TemplateSettings::load(&locations.settings)?;

    let rescan = match cmd {
        PathsCommands::List { json } => {
            let roots = settings.roots();
            if json {
                println!("{}", serde_json::to_string_pretty(&roots)?);
            } else if roots.is_empty() {
                println!("No template roots configured.");
            } else {
                let rows: Vec<RootRow> = roots
                    .iter()
                    .enumerate()
                    .map(|(i, root)| RootRow::new(i + 1, root))
                    .collect();
                println!("{SETTINGS_CATEGORY} > {SETTINGS_SECTION}");
                println!("{}", Table::new(rows));
            }
            return Ok(());
        }
        PathsCommands::Add {
            path,
            category,
            rescan,
        } => {
            if !settings.add(RootSpec::new(path.clone(), category)) {
                println!("Root {} is already configured (or empty).", path);
                return Ok(());
            }
            println!("Added {}.", path);
            rescan
        }
        PathsCommands::Remove { path, rescan } => {
            if !settings.remove(&path) {
                println!("Root {} is not configured.", path);
                return Ok(());
            }
            println!("Removed {}.", path);
            rescan
        }
        PathsCommands::SetCategory {
            path,
            category,
            rescan,
        } => {
            if !settings.set_category(&path, &category) {
                println!("Root {} is not configured.", path);
                return Ok(());
            }
            println!("{} is now listed under '{}'.", path, category);
            rescan
        }
    };

    settings.save(&locations.settings)?;

    if let Some(content) = rescan.content {
        settings_changed(locations, content, rescan.mount)?;
    }

    Ok(())
}

/// Rescan with the saved settings and persist what the scan registered
fn settings_changed(
    locations: &Locations,
    content: PathBuf,
    mount: String,
) -> Result<(), Box<dyn std::error::Error>> {
    let registry = Arc::new(InMemoryTemplateRegistry::load(&locations.registry)?);

    let options = FilesystemOptions::new(content)
        .with_mount(mount)
        .with_settings(&locations.settings);
    let service = build_filesystem_service(&options, registry.clone());

    let published = match service.run_scan()? {
        ScanOutcome::Completed(report) => report.published.len(),
        ScanOutcome::Queued => return Ok(()),
    };

    registry.save(&locations.registry)?;
    info!("Rescan registered {} new templates", published);
    println!("Registered {} new templates.", published);

    Ok(())
}
