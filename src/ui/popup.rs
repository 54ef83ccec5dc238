/// Popup UI for Tab Categorizer extension

use patternfly_yew::prelude::*;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::storage::{LocalStorage, StorageError};
use crate::tab_store::TabStore;
use crate::ui::components::CategoryColumn;

#[derive(Clone)]
struct PopupModel {
    store: TabStore<LocalStorage>,
    error: Option<String>,
}

impl PopupModel {
    // Runs once per popup session
    fn load() -> Self {
        match TabStore::load(LocalStorage) {
            Ok(store) => PopupModel { store, error: None },
            Err(e) => PopupModel {
                store: TabStore::new(LocalStorage),
                error: Some(format!("Failed to load tabs: {}", e)),
            },
        }
    }

    fn apply<F>(&self, op: F) -> Self
    where
        F: FnOnce(&mut TabStore<LocalStorage>) -> Result<(), StorageError>,
    {
        let mut next = self.clone();
        next.error = op(&mut next.store)
            .err()
            .map(|e| format!("Failed to save tabs: {}", e));
        next
    }
}

#[function_component(App)]
pub fn app() -> Html {
    let model = use_state(PopupModel::load);

    let on_input = {
        let model = model.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                let mut next = (*model).clone();
                next.store.set_input(input.value());
                model.set(next);
            }
        })
    };

    let on_add = {
        let model = model.clone();
        Callback::from(move |_: MouseEvent| {
            model.set(model.apply(|store| store.submit_input().map(|_| ())));
        })
    };

    // Enter in the input behaves like "Add Tab"
    let on_keydown = {
        let model = model.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" {
                model.set(model.apply(|store| store.submit_input().map(|_| ())));
            }
        })
    };

    let on_clear = {
        let model = model.clone();
        Callback::from(move |_: MouseEvent| {
            model.set(model.apply(|store| store.clear_all_tabs()));
        })
    };

    let on_remove = {
        let model = model.clone();
        Callback::from(move |id: u64| {
            model.set(model.apply(|store| store.remove_tab(id).map(|_| ())));
        })
    };

    let grouped = model.store.grouped();

    html! {
        <div class="padding-20" id="main">
            <h1 class="popup-title" id="head">{"Tab Manager"}</h1>

            if let Some(err) = model.error.clone() {
                <Alert r#type={AlertType::Danger} title={"Error"} inline={true}>
                    {err}
                </Alert>
            }

            // Add tab section
            <div class="add-tab-row">
                <input
                    id="input"
                    type="text"
                    placeholder="Enter tab URL"
                    value={model.store.input().to_string()}
                    oninput={on_input}
                    onkeydown={on_keydown}
                    class="tab-input"
                />
                <Button id="addtab" onclick={on_add}>
                    {"Add Tab"}
                </Button>
                <Button id="clearall" onclick={on_clear} variant={ButtonVariant::Danger}>
                    {"Clear All"}
                </Button>
            </div>

            // One column per category
            <div class="category-grid">
                {for grouped.iter().map(|(category, tabs)| html! {
                    <CategoryColumn
                        key={category.as_str()}
                        category={category}
                        tabs={tabs.to_vec()}
                        on_remove={on_remove.clone()}
                    />
                })}
            </div>

            <p class="footer-popup">
                {tab_count_label(model.store.len())}
            </p>
        </div>
    }
}

fn tab_count_label(count: usize) -> String {
    match count {
        1 => "1 tab".to_string(),
        n => format!("{} tabs", n),
    }
}
