//! In-memory implementation of TemplateRegistry.
//!
//! Provides thread-safe storage for published level templates, keyed by
//! level object path.

use crate::error::Result;
use mapshelf_plugin::{TemplateDescriptor, TemplateRegistry};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::path::Path;
use std::sync::{PoisonError, RwLock};
use tracing::debug;

#[derive(Debug, Default, Serialize, Deserialize)]
struct RegistryState {
    /// Levels registered by the host itself (built-in templates)
    #[serde(default)]
    known: HashSet<String>,
    /// Published templates in publication order
    #[serde(default)]
    templates: Vec<TemplateDescriptor>,
}

/// Thread-safe in-memory template registry
#[derive(Debug, Default)]
pub struct InMemoryTemplateRegistry {
    state: RwLock<RegistryState>,
}

impl InMemoryTemplateRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark levels as already registered without publishing templates for them
    pub fn seed_known(&self, level_refs: impl IntoIterator<Item = String>) {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        state.known.extend(level_refs);
    }

    /// All published templates, in publication order
    pub fn templates(&self) -> Vec<TemplateDescriptor> {
        let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
        state.templates.clone()
    }

    /// Published templates for one category
    pub fn in_category(&self, category: &str) -> Vec<TemplateDescriptor> {
        let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
        state
            .templates
            .iter()
            .filter(|t| t.category == category)
            .cloned()
            .collect()
    }

    /// Number of published templates
    pub fn len(&self) -> usize {
        let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
        state.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clear published templates and seeded levels
    pub fn clear(&self) {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        state.known.clear();
        state.templates.clear();
    }

    /// Get statistics
    pub fn stats(&self) -> RegistryStats {
        let state = self.state.read().unwrap_or_else(PoisonError::into_inner);

        let mut by_category: HashMap<String, usize> = HashMap::new();
        for template in &state.templates {
            *by_category.entry(template.category.clone()).or_default() += 1;
        }

        RegistryStats {
            total_templates: state.templates.len(),
            seeded_levels: state.known.len(),
            by_category,
        }
    }

    /// Load a registry saved with [`save`](Self::save). A missing file yields
    /// an empty registry.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!("No registry file at {}, starting empty", path.display());
            return Ok(Self::new());
        }

        let content = std::fs::read_to_string(path)?;
        let state: RegistryState = serde_json::from_str(&content)?;
        Ok(Self {
            state: RwLock::new(state),
        })
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
        let content = serde_json::to_string_pretty(&*state)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

impl TemplateRegistry for InMemoryTemplateRegistry {
    fn is_known_template(&self, level_ref: &str) -> bool {
        let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
        state.known.contains(level_ref) || state.templates.iter().any(|t| t.level_ref == level_ref)
    }

    fn publish_batch(&self, category: &str, batch: Vec<TemplateDescriptor>) {
        debug!("Publishing {} templates under '{}'", batch.len(), category);
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        state.templates.extend(batch);
    }
}

/// Registry statistics
#[derive(Debug, Default, Clone)]
pub struct RegistryStats {
    pub total_templates: usize,
    pub seeded_levels: usize,
    pub by_category: HashMap<String, usize>, // e.g. {"Urban": 3, "User Templates": 1}
}
