/// Reusable UI components

use patternfly_yew::prelude::*;
use yew::prelude::*;

use crate::categorizer::Category;
use crate::tab_data::TabEntry;

#[derive(Properties, PartialEq)]
pub struct TabEntryRowProps {
    pub entry: TabEntry,
    pub on_remove: Callback<u64>,
}

#[function_component(TabEntryRow)]
pub fn tab_entry_row(props: &TabEntryRowProps) -> Html {
    let id = props.entry.id;

    html! {
        <div class="tab-item" data-id={id.to_string()}>
            <span class="tab-keyword">{&props.entry.keyword}</span>
            <Button
                onclick={props.on_remove.reform(move |_| id)}
                variant={ButtonVariant::Danger}
                size={ButtonSize::Small}
            >
                {"✖"}
            </Button>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct CategoryColumnProps {
    pub category: Category,
    pub tabs: Vec<TabEntry>,
    pub on_remove: Callback<u64>,
}

#[function_component(CategoryColumn)]
pub fn category_column(props: &CategoryColumnProps) -> Html {
    html! {
        <div class="category-column" data-category={props.category.as_str()}>
            <h3 class="category-title">{props.category.as_str()}</h3>
            <div class="tabs-list">
                if props.tabs.is_empty() {
                    <p class="empty-state">{"No tabs in this category"}</p>
                } else {
                    {for props.tabs.iter().map(|entry| html! {
                        <TabEntryRow
                            key={entry.id.to_string()}
                            entry={entry.clone()}
                            on_remove={props.on_remove.clone()}
                        />
                    })}
                }
            </div>
        </div>
    }
}
