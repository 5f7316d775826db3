//! Asset index over a content directory on disk.
//!
//! Content paths are mounted at a prefix such as `/Game`:
//! `/Game/Templates/City` maps to `<content_root>/Templates/City`.

use mapshelf_plugin::{
    AssetIndex, AssetIndexProvider, AssetKind, AssetRef, BoxError, PluginError,
};
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;
use tracing::debug;
use walkdir::WalkDir;

pub const DEFAULT_MOUNT: &str = "/Game";

/// Classify a file by extension
pub fn classify_extension(extension: &str) -> AssetKind {
    match extension.to_ascii_lowercase().as_str() {
        "umap" => AssetKind::Level,
        "png" | "jpg" | "jpeg" | "tga" | "bmp" => AssetKind::Thumbnail,
        _ => AssetKind::Other,
    }
}

/// Filesystem-backed asset index
#[derive(Debug, Clone)]
pub struct FilesystemAssetIndex {
    content_root: PathBuf,
    mount: String,
}

impl FilesystemAssetIndex {
    pub fn new(content_root: impl Into<PathBuf>) -> Self {
        Self::with_mount(content_root, DEFAULT_MOUNT)
    }

    pub fn with_mount(content_root: impl Into<PathBuf>, mount: &str) -> Self {
        let mount = format!("/{}", mount.trim_matches('/'));
        Self {
            content_root: content_root.into(),
            mount,
        }
    }

    pub fn content_root(&self) -> &Path {
        &self.content_root
    }

    pub fn mount(&self) -> &str {
        &self.mount
    }

    /// Disk location of a content path, if it lies under the mount
    fn resolve(&self, path: &str) -> Option<PathBuf> {
        let path = path.trim_end_matches('/');
        let rest = if path == self.mount {
            ""
        } else {
            path.strip_prefix(&self.mount)?.strip_prefix('/')?
        };

        let mut resolved = self.content_root.clone();
        for segment in rest.split('/').filter(|s| !s.is_empty()) {
            // Only plain names may appear in a content path
            if !matches!(Path::new(segment).components().next(), Some(Component::Normal(_))) {
                return None;
            }
            resolved.push(segment);
        }
        Some(resolved)
    }

    /// Content path of a directory on disk
    fn content_path(&self, dir: &Path) -> Option<String> {
        let relative = dir.strip_prefix(&self.content_root).ok()?;
        let mut path = self.mount.clone();
        for component in relative.components() {
            path.push('/');
            path.push_str(component.as_os_str().to_str()?);
        }
        Some(path)
    }

    fn asset_ref(&self, file: &Path) -> Option<AssetRef> {
        let stem = file.file_stem()?.to_str()?;
        let kind = file
            .extension()
            .and_then(|ext| ext.to_str())
            .map(classify_extension)
            .unwrap_or(AssetKind::Other);
        let package = self.content_path(file.parent()?)?;

        Some(AssetRef::new(stem, kind, format!("{package}/{stem}.{stem}")))
    }
}

impl AssetIndex for FilesystemAssetIndex {
    fn list_sub_paths(&self, path: &str) -> Vec<String> {
        let Some(dir) = self.resolve(path) else {
            debug!("{} is outside mount {}", path, self.mount);
            return Vec::new();
        };

        let names: Vec<String> = WalkDir::new(&dir)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| match e {
                Ok(entry) => Some(entry),
                Err(err) => {
                    debug!("Cannot list {}: {}", dir.display(), err);
                    None
                }
            })
            .filter(|e| e.file_type().is_dir())
            .filter_map(|e| e.file_name().to_str().map(str::to_string))
            .collect();

        let base = path.trim_end_matches('/');
        names
            .into_iter()
            .map(|name| format!("{base}/{name}"))
            .collect()
    }

    fn list_assets(&self, path: &str, recursive: bool) -> Vec<AssetRef> {
        let Some(dir) = self.resolve(path) else {
            return Vec::new();
        };

        if !dir.is_dir() {
            return Vec::new();
        }

        let max_depth = if recursive { usize::MAX } else { 1 };
        WalkDir::new(&dir)
            .min_depth(1)
            .max_depth(max_depth)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| match e {
                Ok(entry) => Some(entry),
                Err(err) => {
                    debug!("Skipping unreadable entry under {}: {}", dir.display(), err);
                    None
                }
            })
            .filter(|e| e.file_type().is_file())
            .filter_map(|e| self.asset_ref(e.path()))
            .collect()
    }

    fn name(&self) -> &str {
        "filesystem"
    }
}

/// Hands out a filesystem index while its content directory exists
#[derive(Debug, Clone)]
pub struct FilesystemIndexProvider {
    index: Arc<FilesystemAssetIndex>,
}

impl FilesystemIndexProvider {
    pub fn new(index: FilesystemAssetIndex) -> Self {
        Self {
            index: Arc::new(index),
        }
    }
}

impl AssetIndexProvider for FilesystemIndexProvider {
    fn acquire(&self) -> Result<Arc<dyn AssetIndex>, BoxError> {
        let root = self.index.content_root();
        if !root.is_dir() {
            return Err(Box::new(PluginError::IndexUnavailable(format!(
                "content directory {} does not exist",
                root.display()
            ))));
        }
        let index: Arc<dyn AssetIndex> = self.index.clone();
        Ok(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn touch(root: &Path, relative: &str) {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::File::create(path).unwrap();
    }

    #[test]
    fn test_classify_extension() {
        assert_eq!(classify_extension("umap"), AssetKind::Level);
        assert_eq!(classify_extension("PNG"), AssetKind::Thumbnail);
        assert_eq!(classify_extension("uasset"), AssetKind::Other);
    }

    #[test]
    fn test_list_sub_paths_sorted_directories_only() {
        let temp = tempfile::tempdir().unwrap();
        touch(temp.path(), "Templates/Zeta/L_Zeta.umap");
        touch(temp.path(), "Templates/Alpha/L_Alpha.umap");
        touch(temp.path(), "Templates/Alpha/Nested/notes.txt");
        touch(temp.path(), "Templates/readme.txt");

        let index = FilesystemAssetIndex::new(temp.path());
        assert_eq!(
            index.list_sub_paths("/Game/Templates"),
            vec!["/Game/Templates/Alpha", "/Game/Templates/Zeta"]
        );
        assert_eq!(
            index.list_sub_paths("/Game/Templates/"),
            vec!["/Game/Templates/Alpha", "/Game/Templates/Zeta"]
        );
        assert_eq!(
            index.list_sub_paths("/Game/Templates/Alpha"),
            vec!["/Game/Templates/Alpha/Nested"]
        );
        assert!(index.list_sub_paths("/Game/Missing").is_empty());
    }

    #[test]
    fn test_list_assets_recursive() {
        let temp = tempfile::tempdir().unwrap();
        touch(temp.path(), "Templates/City/L_City.umap");
        touch(temp.path(), "Templates/City/Textures/T_City.png");

        let index = FilesystemAssetIndex::new(temp.path());

        let flat = index.list_assets("/Game/Templates/City", false);
        assert_eq!(flat.len(), 1);
        assert_eq!(flat[0].name, "L_City");
        assert_eq!(flat[0].kind, AssetKind::Level);
        assert_eq!(flat[0].object_path, "/Game/Templates/City/L_City.L_City");

        let deep = index.list_assets("/Game/Templates/City", true);
        assert_eq!(deep.len(), 2);
        let thumbnail = deep.iter().find(|a| a.kind == AssetKind::Thumbnail).unwrap();
        assert_eq!(
            thumbnail.object_path,
            "/Game/Templates/City/Textures/T_City.T_City"
        );
    }

    #[test]
    fn test_paths_outside_mount() {
        let temp = tempfile::tempdir().unwrap();
        touch(temp.path(), "Templates/City/L_City.umap");

        let index = FilesystemAssetIndex::new(temp.path());
        assert!(index.list_sub_paths("/Engine/Templates").is_empty());
        assert!(index.list_sub_paths("/GameExtra").is_empty());
        assert!(index.list_assets("/Game/../Templates", true).is_empty());
        assert_eq!(index.list_sub_paths("/Game").len(), 1);
    }

    #[test]
    fn test_custom_mount() {
        let temp = tempfile::tempdir().unwrap();
        touch(temp.path(), "City/L_City.umap");

        let index = FilesystemAssetIndex::with_mount(temp.path(), "Plugins/Maps/");
        assert_eq!(index.mount(), "/Plugins/Maps");
        assert_eq!(index.list_sub_paths("/Plugins/Maps"), vec!["/Plugins/Maps/City"]);
    }

    #[test]
    fn test_provider_requires_content_dir() {
        let temp = tempfile::tempdir().unwrap();
        let missing =
            FilesystemIndexProvider::new(FilesystemAssetIndex::new(temp.path().join("nope")));
        assert!(missing.acquire().is_err());

        let present = FilesystemIndexProvider::new(FilesystemAssetIndex::new(temp.path()));
        assert!(present.acquire().is_ok());
    }
}
