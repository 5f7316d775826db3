use mapshelf_plugin::{RootSpec, TemplateDescriptor};
use tabled::Tabled;

/// A terminal view of a registered template
#[derive(Tabled)]
pub struct TemplateRow {
    #[tabled(rename = "Category")]
    pub category: String,
    #[tabled(rename = "Name")]
    pub name: String,
    #[tabled(rename = "Level")]
    pub level: String,
    #[tabled(rename = "Thumbnail")]
    pub thumbnail: String,
}

impl From<&TemplateDescriptor> for TemplateRow {
    fn from(template: &TemplateDescriptor) -> Self {
        Self {
            category: template.category.clone(),
            name: template.display_name.clone(),
            level: template.level_ref.clone(),
            thumbnail: template
                .thumbnail_ref
                .clone()
                .unwrap_or_else(|| "-".to_string()),
        }
    }
}

/// A terminal view of a configured root
#[derive(Tabled)]
pub struct RootRow {
    #[tabled(rename = "#")]
    pub position: usize,
    #[tabled(rename = "Path")]
    pub path: String,
    #[tabled(rename = "Category")]
    pub category: String,
}

impl RootRow {
    pub fn new(position: usize, root: &RootSpec) -> Self {
        Self {
            position,
            path: root.path.clone(),
            category: root.category.clone(),
        }
    }
}
