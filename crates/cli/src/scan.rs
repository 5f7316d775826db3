use crate::Locations;
use crate::view::TemplateRow;
use mapshelf_core::{InMemoryTemplateRegistry, ScanOutcome};
use mapshelf_runtime::{FilesystemOptions, build_filesystem_service};
use std::path::PathBuf;
use std::sync::Arc;
use tabled::Table;
use tracing::info;

pub fn run(
    locations: &Locations,
    content: PathBuf,
    mount: String,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let registry = Arc::new(InMemoryTemplateRegistry::load(&locations.registry)?);
    let options = FilesystemOptions::new(content)
        .with_mount(mount)
        .with_settings(&locations.settings);
    let service = build_filesystem_service(&options, registry.clone());

    info!(
        "Scanning templates in {} (settings: {})...",
        options.content_root.display(),
        options.settings_path.display()
    );

    let report = match service.run_scan()? {
        ScanOutcome::Completed(report) => report,
        ScanOutcome::Queued => return Ok(()),
    };
    registry.save(&locations.registry)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report.published)?);
        return Ok(());
    }

    println!(
        "Scanned {} roots, {} template paths in {:?}",
        report.roots, report.sub_paths, report.duration
    );
    println!(
        "New: {}  Already registered: {}  Missing level: {}  Missing thumbnail: {}",
        report.published.len(),
        report.skipped_known,
        report.missing_level,
        report.missing_thumbnail
    );

    if !report.published.is_empty() {
        let rows: Vec<TemplateRow> = report.published.iter().map(TemplateRow::from).collect();
        println!("{}", Table::new(rows));
    }

    Ok(())
}
