//! Asset index trait definitions.
//!
//! The asset index is an external, already populated service. The core only
//! queries it through these traits:
//! - listing the direct sub-paths of a content path
//! - listing the assets stored under a content path
//! - acquiring an index handle for the duration of one scan

use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Error type for collaborator operations
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

// ==================== Asset Kind ====================

/// Asset classification attached by the index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetKind {
    /// A level (map) that can seed a new scene
    Level,
    /// A texture usable as a template thumbnail
    Thumbnail,
    /// Anything else
    Other,
}

/// Asset descriptor as reported by the index
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetRef {
    pub name: String,
    pub kind: AssetKind,
    pub object_path: String,
}

impl AssetRef {
    pub fn new(name: impl Into<String>, kind: AssetKind, object_path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind,
            object_path: object_path.into(),
        }
    }

    pub fn level(name: impl Into<String>, object_path: impl Into<String>) -> Self {
        Self::new(name, AssetKind::Level, object_path)
    }

    pub fn thumbnail(name: impl Into<String>, object_path: impl Into<String>) -> Self {
        Self::new(name, AssetKind::Thumbnail, object_path)
    }

    pub fn other(name: impl Into<String>, object_path: impl Into<String>) -> Self {
        Self::new(name, AssetKind::Other, object_path)
    }
}

// ==================== Index Layer ====================

/// Read-only view over the asset index
pub trait AssetIndex: Send + Sync {
    /// Direct children of `path`, in index order (non-recursive)
    fn list_sub_paths(&self, path: &str) -> Vec<String>;

    /// Assets stored under `path`, optionally including nested paths
    fn list_assets(&self, path: &str, recursive: bool) -> Vec<AssetRef>;

    /// Index name (for logging/debugging)
    fn name(&self) -> &str {
        "asset index"
    }
}

/// Hands out the asset index for one scan.
/// An error means the index could not be obtained and the scan must abort.
pub trait AssetIndexProvider: Send + Sync {
    fn acquire(&self) -> Result<Arc<dyn AssetIndex>, BoxError>;
}

impl<T: AssetIndex + 'static> AssetIndexProvider for Arc<T> {
    fn acquire(&self) -> Result<Arc<dyn AssetIndex>, BoxError> {
        let index: Arc<dyn AssetIndex> = self.clone();
        Ok(index)
    }
}
