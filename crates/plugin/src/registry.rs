//! Template registry port.
//!
//! The registry is owned by the host. The scanner only asks whether a level
//! is already known and appends batches of new templates.

use serde::{Deserialize, Serialize};

/// A level template ready to be shown in the host's template picker
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateDescriptor {
    pub category: String,
    pub display_name: String,
    /// Object path of the level; the registry's identity key
    pub level_ref: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_ref: Option<String>,
}

/// Host-side registry of level templates
pub trait TemplateRegistry: Send + Sync {
    /// Whether a template for this level is already registered
    fn is_known_template(&self, level_ref: &str) -> bool;

    /// Append a batch of templates collected for one category
    fn publish_batch(&self, category: &str, batch: Vec<TemplateDescriptor>);
}
