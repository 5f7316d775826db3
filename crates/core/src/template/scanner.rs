//! Template scanner that walks configured roots through the asset index.
//!
//! The scanner orchestrates the discovery pipeline:
//! 1. Each root's direct sub-paths are listed from the index
//! 2. Each sub-path's assets are matched to a level and a thumbnail
//! 3. New templates are collected and published once per root
//!
//! Roots are processed strictly in order. A root's batch is published
//! before the next root starts, so later roots skip levels published by
//! earlier ones.

use super::builder::build_template;
use super::matcher::match_template;
use mapshelf_plugin::{
    AssetIndex, Diagnostics, NamingConvention, PrefixConvention, RootSpec, ScanWarning,
    TemplateDescriptor, TemplateRegistry,
};
use std::sync::Arc;
use tracing::{debug, info};

/// Scans template roots using a naming convention
pub struct TemplateScanner {
    naming: Arc<dyn NamingConvention>,
}

impl TemplateScanner {
    pub fn new() -> Self {
        Self {
            naming: Arc::new(PrefixConvention),
        }
    }

    /// Use a different naming convention
    pub fn with_naming(mut self, naming: Arc<dyn NamingConvention>) -> Self {
        self.naming = naming;
        self
    }

    /// Scan all roots and publish new templates.
    ///
    /// Per-path problems are reported to `diagnostics` and never stop the scan.
    pub fn scan(
        &self,
        roots: &[RootSpec],
        index: &dyn AssetIndex,
        registry: &dyn TemplateRegistry,
        diagnostics: &dyn Diagnostics,
    ) -> ScanReport {
        let mut report = ScanReport::default();
        let start = std::time::Instant::now();

        for root in roots {
            debug!("Scanning template root {} ({})", root.path, root.category);
            let batch = self.scan_root(root, index, registry, diagnostics, &mut report);

            report.roots += 1;
            if batch.is_empty() {
                debug!("No new templates under {}", root.path);
                continue;
            }

            report.published.extend(batch.iter().cloned());
            registry.publish_batch(&root.category, batch);
        }

        report.duration = start.elapsed();
        info!(
            "Template scan complete: {} roots, {} paths, {} published, {} already known in {:?}",
            report.roots,
            report.sub_paths,
            report.published.len(),
            report.skipped_known,
            report.duration
        );

        report
    }

    /// Collect the new templates of one root without publishing them
    fn scan_root(
        &self,
        root: &RootSpec,
        index: &dyn AssetIndex,
        registry: &dyn TemplateRegistry,
        diagnostics: &dyn Diagnostics,
        report: &mut ScanReport,
    ) -> Vec<TemplateDescriptor> {
        let mut batch = Vec::new();

        for sub_path in index.list_sub_paths(&root.path) {
            report.sub_paths += 1;

            let assets = index.list_assets(&sub_path, true);
            let outcome = match_template(&sub_path, &assets, self.naming.as_ref());

            for warning in &outcome.warnings {
                report.record_warning(warning);
                diagnostics.warning(warning);
            }

            let Some(matched) = outcome.result else {
                continue;
            };

            match build_template(&root.category, &outcome.stem, &matched, registry) {
                Some(descriptor) => {
                    diagnostics.debug(&format!(
                        "Found template '{}' at {}",
                        descriptor.display_name, sub_path
                    ));
                    batch.push(descriptor);
                }
                None => report.skipped_known += 1,
            }
        }

        batch
    }
}

impl Default for TemplateScanner {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of a template scan
#[derive(Debug, Default, Clone)]
pub struct ScanReport {
    /// Number of roots processed
    pub roots: usize,
    /// Number of template paths inspected
    pub sub_paths: usize,
    /// Templates published during this scan, in publication order
    pub published: Vec<TemplateDescriptor>,
    /// Matches skipped because the registry already knew the level
    pub skipped_known: usize,
    /// Paths without a matching level
    pub missing_level: usize,
    /// Matched levels without a thumbnail
    pub missing_thumbnail: usize,
    /// Time taken for the scan
    pub duration: std::time::Duration,
}

impl ScanReport {
    fn record_warning(&mut self, warning: &ScanWarning) {
        match warning {
            ScanWarning::MissingLevel { .. } => self.missing_level += 1,
            ScanWarning::MissingThumbnail { .. } => self.missing_thumbnail += 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::RecordingDiagnostics;
    use crate::template::registry::InMemoryTemplateRegistry;
    use mapshelf_plugin::AssetRef;
    use std::collections::HashMap;
    use std::sync::Mutex;

    /// Mock index backed by maps
    #[derive(Default)]
    struct MockIndex {
        sub_paths: HashMap<String, Vec<String>>,
        assets: HashMap<String, Vec<AssetRef>>,
        queries: Mutex<Vec<(String, bool)>>,
    }

    impl MockIndex {
        fn with_template(mut self, root: &str, leaf: &str, assets: Vec<AssetRef>) -> Self {
            let sub_path = format!("{root}/{leaf}");
            self.sub_paths
                .entry(root.to_string())
                .or_default()
                .push(sub_path.clone());
            self.assets.insert(sub_path, assets);
            self
        }
    }

    impl AssetIndex for MockIndex {
        fn list_sub_paths(&self, path: &str) -> Vec<String> {
            self.sub_paths.get(path).cloned().unwrap_or_default()
        }

        fn list_assets(&self, path: &str, recursive: bool) -> Vec<AssetRef> {
            self.queries
                .lock()
                .unwrap()
                .push((path.to_string(), recursive));
            self.assets.get(path).cloned().unwrap_or_default()
        }
    }

    #[test]
    fn test_scanner_basic() {
        let index = MockIndex::default()
            .with_template(
                "/Maps",
                "Forest",
                vec![
                    AssetRef::level("L_Forest", "/Maps/Forest/L_Forest.L_Forest"),
                    AssetRef::thumbnail("T_Forest", "/Maps/Forest/T_Forest.T_Forest"),
                ],
            )
            .with_template("/Maps", "Empty", vec![]);

        let registry = InMemoryTemplateRegistry::new();
        let diagnostics = RecordingDiagnostics::new();
        let report = TemplateScanner::new().scan(
            &[RootSpec::uncategorized("/Maps")],
            &index,
            &registry,
            &diagnostics,
        );

        assert_eq!(report.roots, 1);
        assert_eq!(report.sub_paths, 2);
        assert_eq!(report.published.len(), 1);
        assert_eq!(report.missing_level, 1);
        assert_eq!(registry.len(), 1);
        assert_eq!(diagnostics.warnings().len(), 1);

        // Template paths are always listed recursively
        let queries = index.queries.lock().unwrap();
        assert!(queries.iter().all(|(_, recursive)| *recursive));
    }

    #[test]
    fn test_batch_does_not_dedup_within_root() {
        // Two paths pointing at the same level inside one root both land in the batch
        let shared = AssetRef::level("L_Shared", "/Maps/Shared.Shared");
        let index = MockIndex::default()
            .with_template("/Maps", "Shared", vec![shared.clone()])
            .with_template("/Maps", "L_Shared", vec![shared]);

        let registry = InMemoryTemplateRegistry::new();
        let report = TemplateScanner::new().scan(
            &[RootSpec::uncategorized("/Maps")],
            &index,
            &registry,
            &RecordingDiagnostics::new(),
        );

        assert_eq!(report.published.len(), 2);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_unknown_root_is_empty() {
        let registry = InMemoryTemplateRegistry::new();
        let report = TemplateScanner::new().scan(
            &[RootSpec::uncategorized("/Nowhere")],
            &MockIndex::default(),
            &registry,
            &RecordingDiagnostics::new(),
        );

        assert_eq!(report.roots, 1);
        assert_eq!(report.sub_paths, 0);
        assert!(registry.is_empty());
    }
}
