//! Template root settings.
//!
//! Settings are a JSON file holding an ordered set of roots:
//!
//! ```json
//! { "paths": [ { "path": "/Game/Templates/City", "category": "Urban" } ] }
//! ```
//!
//! Roots are unique by path. The file is re-read for every scan.

use crate::error::{MapshelfError, Result};
use indexmap::IndexSet;
use mapshelf_plugin::{RootSpec, SettingsSource};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::warn;

/// Settings page the roots are listed under
pub const SETTINGS_CATEGORY: &str = "Plugins";
/// Settings section title
pub const SETTINGS_SECTION: &str = "Map Templates";

const SETTINGS_FILE: &str = "settings.json";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TemplateSettings {
    #[serde(default)]
    pub paths: IndexSet<RootSpec>,
}

impl TemplateSettings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Default settings location (`~/.mapshelf/settings.json`)
    pub fn default_path() -> PathBuf {
        crate::logging::data_dir().join(SETTINGS_FILE)
    }

    /// Add a root. Returns false if a root with the same path exists; the
    /// existing entry is kept.
    pub fn add(&mut self, spec: RootSpec) -> bool {
        if spec.path.trim().is_empty() {
            return false;
        }
        self.paths.insert(spec)
    }

    /// Replace the category of an existing root
    pub fn set_category(&mut self, path: &str, category: &str) -> bool {
        if !self.paths.contains(&RootSpec::uncategorized(path)) {
            return false;
        }
        // Equal by path, so the entry keeps its position
        self.paths.replace(RootSpec::new(path, category));
        true
    }

    /// Remove a root by path, keeping the order of the others
    pub fn remove(&mut self, path: &str) -> bool {
        self.paths.shift_remove(&RootSpec::uncategorized(path))
    }

    pub fn roots(&self) -> Vec<RootSpec> {
        self.paths.iter().cloned().collect()
    }

    pub fn from_json(content: &str) -> Result<Self> {
        let settings: TemplateSettings = serde_json::from_str(content)?;
        if let Some(blank) = settings.paths.iter().find(|spec| spec.path.trim().is_empty()) {
            return Err(MapshelfError::Settings(format!(
                "root with empty path (category '{}')",
                blank.category
            )));
        }
        Ok(settings)
    }

    /// Load settings; a missing file is an empty configuration
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::new());
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }
}

impl SettingsSource for TemplateSettings {
    fn snapshot(&self) -> Vec<RootSpec> {
        self.roots()
    }
}

/// Settings read from disk on every snapshot
#[derive(Debug, Clone)]
pub struct FileSettingsSource {
    path: PathBuf,
}

impl FileSettingsSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SettingsSource for FileSettingsSource {
    fn snapshot(&self) -> Vec<RootSpec> {
        match TemplateSettings::load(&self.path) {
            Ok(settings) => settings.roots(),
            Err(e) => {
                warn!("Failed to read settings {}: {}", self.path.display(), e);
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mapshelf_plugin::DEFAULT_CATEGORY;

    #[test]
    fn test_add_is_unique_by_path() {
        let mut settings = TemplateSettings::new();
        assert!(settings.add(RootSpec::new("/Game/City", "Urban")));
        assert!(!settings.add(RootSpec::new("/Game/City", "Rural")));
        assert!(!settings.add(RootSpec::new("  ", "Blank")));

        let roots = settings.roots();
        assert_eq!(roots.len(), 1);
        assert_eq!(roots[0].category, "Urban");
    }

    #[test]
    fn test_order_is_preserved() {
        let mut settings = TemplateSettings::new();
        settings.add(RootSpec::uncategorized("/Game/B"));
        settings.add(RootSpec::uncategorized("/Game/A"));
        settings.add(RootSpec::uncategorized("/Game/C"));
        settings.remove("/Game/A");

        let paths: Vec<_> = settings.roots().into_iter().map(|r| r.path).collect();
        assert_eq!(paths, vec!["/Game/B", "/Game/C"]);
    }

    #[test]
    fn test_set_category() {
        let mut settings = TemplateSettings::new();
        settings.add(RootSpec::uncategorized("/Game/A"));
        settings.add(RootSpec::uncategorized("/Game/B"));

        assert!(settings.set_category("/Game/A", "Urban"));
        assert!(!settings.set_category("/Game/Z", "Urban"));

        let roots = settings.roots();
        assert_eq!(roots[0].path, "/Game/A");
        assert_eq!(roots[0].category, "Urban");
    }

    #[test]
    fn test_duplicate_paths_in_file_keep_first() {
        let settings = TemplateSettings::from_json(
            r#"{"paths": [
                {"path": "/Game/City", "category": "Urban"},
                {"path": "/Game/City", "category": "Other"},
                {"path": "/Game/Farm"}
            ]}"#,
        )
        .unwrap();

        let roots = settings.roots();
        assert_eq!(roots.len(), 2);
        assert_eq!(roots[0].category, "Urban");
        assert_eq!(roots[1].category, DEFAULT_CATEGORY);
    }

    #[test]
    fn test_empty_path_is_rejected() {
        let err = TemplateSettings::from_json(r#"{"paths": [{"path": ""}]}"#).unwrap_err();
        assert!(matches!(err, MapshelfError::Settings(_)));
    }

    #[test]
    fn test_file_source_reads_fresh() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        let source = FileSettingsSource::new(&path);

        assert!(source.snapshot().is_empty());

        let mut settings = TemplateSettings::new();
        settings.add(RootSpec::new("/Game/City", "Urban"));
        settings.save(&path).unwrap();
        assert_eq!(source.snapshot().len(), 1);

        settings.add(RootSpec::new("/Game/Farm", "Rural"));
        settings.save(&path).unwrap();
        assert_eq!(source.snapshot().len(), 2);
    }

    #[test]
    fn test_file_source_ignores_broken_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "{ not json").unwrap();

        assert!(FileSettingsSource::new(&path).snapshot().is_empty());
    }
}
