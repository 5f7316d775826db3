use mapshelf_core::asset::filesystem::DEFAULT_MOUNT;
use mapshelf_core::asset::{FilesystemAssetIndex, FilesystemIndexProvider};
use mapshelf_core::{
    FileSettingsSource, InMemoryTemplateRegistry, TemplateService, TemplateServiceBuilder,
};
use std::path::PathBuf;
use std::sync::Arc;

/// Where a filesystem-backed service reads its content and settings
#[derive(Debug, Clone)]
pub struct FilesystemOptions {
    /// Directory mounted at `mount`
    pub content_root: PathBuf,
    /// Content path prefix, `/Game` by default
    pub mount: String,
    /// Settings file listing the template roots
    pub settings_path: PathBuf,
}

impl FilesystemOptions {
    pub fn new(content_root: impl Into<PathBuf>) -> Self {
        Self {
            content_root: content_root.into(),
            mount: DEFAULT_MOUNT.to_string(),
            settings_path: default_settings_path(),
        }
    }

    pub fn with_mount(mut self, mount: impl Into<String>) -> Self {
        self.mount = mount.into();
        self
    }

    pub fn with_settings(mut self, settings_path: impl Into<PathBuf>) -> Self {
        self.settings_path = settings_path.into();
        self
    }
}

/// Bootstraps a template service over a content directory on disk.
///
/// Settings are re-read from `options.settings_path` on every scan and
/// diagnostics go through `tracing`.
pub fn build_filesystem_service(
    options: &FilesystemOptions,
    registry: Arc<InMemoryTemplateRegistry>,
) -> Arc<TemplateService> {
    let index = FilesystemAssetIndex::with_mount(&options.content_root, &options.mount);
    tracing::debug!(
        "Building template service: {} mounted at {}",
        index.content_root().display(),
        index.mount()
    );

    Arc::new(
        TemplateServiceBuilder::new(
            Arc::new(FileSettingsSource::new(&options.settings_path)),
            Arc::new(FilesystemIndexProvider::new(index)),
            registry,
        )
        .build(),
    )
}

/// Default settings file (`~/.mapshelf/settings.json`)
pub fn default_settings_path() -> PathBuf {
    mapshelf_core::TemplateSettings::default_path()
}

/// Default registry state file (`~/.mapshelf/registry.json`)
pub fn default_registry_path() -> PathBuf {
    mapshelf_core::logging::data_dir().join("registry.json")
}

/// Initializes the logging system for a specific component.
/// This delegates to the core logging module.
pub fn init_logging(component: &str, to_stderr: bool) -> Option<impl Drop> {
    Some(mapshelf_core::logging::init_logging(component, to_stderr))
}
