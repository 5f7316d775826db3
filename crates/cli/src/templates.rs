use crate::Locations;
use crate::view::TemplateRow;
use mapshelf_core::InMemoryTemplateRegistry;
use tabled::{Table, settings::Style};

pub fn run(
    locations: &Locations,
    category: Option<String>,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let registry = InMemoryTemplateRegistry::load(&locations.registry)?;
    let templates = match &category {
        Some(category) => registry.in_category(category),
        None => registry.templates(),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&templates)?);
        return Ok(());
    }

    if templates.is_empty() {
        println!("No templates registered.");
        return Ok(());
    }

    let rows: Vec<TemplateRow> = templates.iter().map(TemplateRow::from).collect();
    println!("{}", Table::new(rows).with(Style::psql()));

    let stats = registry.stats();
    let mut categories: Vec<_> = stats.by_category.into_iter().collect();
    categories.sort();
    for (category, count) in categories {
        println!("  {}: {}", category, count);
    }

    Ok(())
}
