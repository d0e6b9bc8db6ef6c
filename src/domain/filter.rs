use crate::domain::catalog::{Catalog, CommandTemplate};
use crate::domain::models::CommandId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandView {
    pub id: CommandId,
    pub template: &'static CommandTemplate,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryView {
    /// Index of the category in the unfiltered catalog.
    pub index: usize,
    pub name: &'static str,
    pub items: Vec<CommandView>,
}

/// Case-insensitive substring match on name, command or description.
/// `needle` must already be lowercased.
#[must_use]
pub fn matches(template: &CommandTemplate, needle: &str) -> bool {
    [template.name, template.command, template.description]
        .iter()
        .any(|field| field.to_lowercase().contains(needle))
}

/// Keeps the templates matching `term`, dropping categories left empty.
/// Order is preserved; an empty term keeps everything.
#[must_use]
pub fn filter_catalog(catalog: &Catalog, term: &str) -> Vec<CategoryView> {
    let needle = term.to_lowercase();
    catalog
        .categories()
        .iter()
        .enumerate()
        .filter_map(|(index, category)| {
            let items: Vec<_> = category
                .items
                .iter()
                .enumerate()
                .filter(|(_, template)| matches(template, &needle))
                .map(|(item, template)| CommandView {
                    id: CommandId::new(index, item),
                    template,
                })
                .collect();
            (!items.is_empty()).then_some(CategoryView {
                index,
                name: category.name,
                items,
            })
        })
        .collect()
}

/// Flattened ids in display order.
#[must_use]
pub fn visible_ids(views: &[CategoryView]) -> Vec<CommandId> {
    views
        .iter()
        .flat_map(|category| category.items.iter().map(|view| view.id))
        .collect()
}
