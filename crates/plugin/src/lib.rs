//! Collaborator ports for level template discovery.
//!
//! The core depends only on these traits; hosts provide the asset index,
//! the template registry, settings, triggers and a diagnostics sink.

pub mod asset;
pub mod diagnostics;
pub mod naming;
pub mod registry;
pub mod trigger;

pub use asset::{AssetIndex, AssetIndexProvider, AssetKind, AssetRef, BoxError};
pub use diagnostics::{Diagnostics, ScanWarning};
pub use naming::{NamingConvention, PrefixConvention, path_leaf};
pub use registry::{TemplateDescriptor, TemplateRegistry};
pub use trigger::{
    DEFAULT_CATEGORY, RootSpec, SettingsSource, SubscriptionId, TriggerEvent, TriggerHandler,
    TriggerSource,
};

/// Error raised by plugin-side collaborators
#[derive(Debug, thiserror::Error)]
pub enum PluginError {
    #[error("asset index unavailable: {0}")]
    IndexUnavailable(String),
}
