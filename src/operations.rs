/// Tab list operations: grouping by category

use crate::categorizer::Category;
use crate::tab_data::TabEntry;

/// Entries bucketed by category, derived from the tab list on every render
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GroupedView {
    groups: [Vec<TabEntry>; 4],
}

impl GroupedView {
    /// Entries of `category`, in the order they appear in the tab list
    pub fn get(&self, category: Category) -> &[TabEntry] {
        &self.groups[slot(category)]
    }

    /// Every category in display order with its entries, including empty ones
    pub fn iter(&self) -> impl Iterator<Item = (Category, &[TabEntry])> {
        Category::ALL
            .iter()
            .map(move |category| (*category, self.get(*category)))
    }
}

fn slot(category: Category) -> usize {
    match category {
        Category::SocialMedia => 0,
        Category::Work => 1,
        Category::News => 2,
        Category::Others => 3,
    }
}

/// Group tabs by category, keeping insertion order within each group
pub fn group_by_category(tabs: &[TabEntry]) -> GroupedView {
    tabs.iter().fold(GroupedView::default(), |mut view, tab| {
        view.groups[slot(tab.category)].push(tab.clone());
        view
    })
}
