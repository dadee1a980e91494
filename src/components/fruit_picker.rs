//! Fruit Picker Component
//!
//! Single-selection list of catalog fruits not yet in the preference table,
//! with an add button.

use leptos::prelude::*;

use basket_rules::{available_fruits, Fruit};

use crate::store::{editor_add_selected, use_editor_store, EditorStateStoreFields};

#[component]
pub fn FruitPicker(catalog: Vec<Fruit>) -> impl IntoView {
    let store = use_editor_store();

    let offered = Memo::new(move |_| {
        store
            .preferences()
            .with(|prefs| available_fruits(&catalog, prefs))
    });

    let on_add = move |_| {
        offered.with_untracked(|fruits| editor_add_selected(&store, fruits));
    };

    view! {
        <div class="fruit-picker">
            <select
                class="fruit-select"
                prop:value=move || {
                    store.selected().get().map(|id| id.to_string()).unwrap_or_default()
                }
                on:change=move |ev| {
                    *store.selected().write() = event_target_value(&ev).parse().ok();
                }
            >
                <option value="">"Select Fruit"</option>
                <For
                    each=move || offered.get()
                    key=|fruit| fruit.id
                    children=move |fruit| {
                        view! { <option value=fruit.id.to_string()>{fruit.name}</option> }
                    }
                />
            </select>
            <button type="button" class="add-btn" on:click=on_add>
                "+"
            </button>
        </div>
    }
}
