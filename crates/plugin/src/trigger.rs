//! Trigger and settings ports.
//!
//! Scans are started by host events. The host (or an in-process bus) owns the
//! subscription list; the core only subscribes its scan entry point.

use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// Category label used when a root does not name one
pub const DEFAULT_CATEGORY: &str = "User Templates";

/// A configured template root.
///
/// Identity is the path alone: two roots with the same path and different
/// categories are the same entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RootSpec {
    pub path: String,
    #[serde(default = "default_category")]
    pub category: String,
}

fn default_category() -> String {
    DEFAULT_CATEGORY.to_string()
}

impl RootSpec {
    pub fn new(path: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            category: category.into(),
        }
    }

    /// Root with the default category
    pub fn uncategorized(path: impl Into<String>) -> Self {
        Self::new(path, DEFAULT_CATEGORY)
    }
}

impl PartialEq for RootSpec {
    fn eq(&self, other: &Self) -> bool {
        self.path == other.path
    }
}

impl Eq for RootSpec {}

impl Hash for RootSpec {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.path.hash(state);
    }
}

/// Source of the current root configuration, read fresh for every scan
pub trait SettingsSource: Send + Sync {
    fn snapshot(&self) -> Vec<RootSpec>;
}

impl SettingsSource for Vec<RootSpec> {
    fn snapshot(&self) -> Vec<RootSpec> {
        self.clone()
    }
}

/// Host events that request a template scan
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerEvent {
    /// The root configuration was edited
    SettingsChanged,
    /// The host finished initializing
    HostReady {
        /// Whether the host runs with an interactive UI
        interactive: bool,
    },
}

/// Handle returned by [`TriggerSource::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(pub u64);

pub type TriggerHandler = Arc<dyn Fn(TriggerEvent) + Send + Sync>;

/// Publish/subscribe source of trigger events
pub trait TriggerSource: Send + Sync {
    fn subscribe(&self, handler: TriggerHandler) -> SubscriptionId;

    /// Returns false if the id was not subscribed
    fn unsubscribe(&self, id: SubscriptionId) -> bool;
}
