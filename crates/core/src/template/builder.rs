//! Turns a matched template path into a registry descriptor.

use super::humanize::humanize;
use super::matcher::MatchResult;
use mapshelf_plugin::{TemplateDescriptor, TemplateRegistry};

/// Build the descriptor for a match, or `None` when the registry already
/// knows the level. A known level is the normal case on rescans and is not
/// reported.
pub fn build_template(
    category: &str,
    stem: &str,
    matched: &MatchResult,
    registry: &dyn TemplateRegistry,
) -> Option<TemplateDescriptor> {
    if registry.is_known_template(&matched.level.object_path) {
        return None;
    }

    Some(TemplateDescriptor {
        category: category.to_string(),
        display_name: humanize(stem),
        level_ref: matched.level.object_path.clone(),
        thumbnail_ref: matched
            .thumbnail
            .as_ref()
            .map(|thumbnail| thumbnail.object_path.clone()),
    })
}
