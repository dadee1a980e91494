//! Preference Table Component
//!
//! Editable min/max rows for the customer's fruit preferences.

use leptos::prelude::*;

use basket_rules::CountField;

use crate::store::{editor_remove, editor_set_count, use_editor_store, EditorStateStoreFields};

#[component]
pub fn PreferenceTable() -> impl IntoView {
    let store = use_editor_store();

    view! {
        <table class="data-table preference-table">
            <thead>
                <tr>
                    <th>"ID"</th>
                    <th>"Name"</th>
                    <th>"Min"</th>
                    <th>"Max"</th>
                    <th>"Actions"</th>
                </tr>
            </thead>
            <tbody>
                <For
                    each=move || store.preferences().get()
                    key=|pref| pref.id
                    children=move |pref| {
                        view! { <PreferenceRow id=pref.id name=pref.name /> }
                    }
                />
            </tbody>
        </table>
    }
}

/// Row keyed by fruit id; counts are read live from the store
#[component]
fn PreferenceRow(id: u32, name: String) -> impl IntoView {
    let store = use_editor_store();

    let count = move |field: CountField| {
        store.preferences().with(|prefs| {
            prefs
                .iter()
                .find(|pref| pref.id == id)
                .map(|pref| match field {
                    CountField::Min => pref.min,
                    CountField::Max => pref.max,
                })
                .unwrap_or(0)
        })
    };

    let min_id = format!("min-{}", name);
    let max_id = format!("max-{}", name);

    view! {
        <tr>
            <td>{id}</td>
            <td>{name}</td>
            <td>
                <label for=min_id.clone() class="hidden">"Min"</label>
                <input
                    type="number"
                    name=min_id.clone()
                    id=min_id
                    prop:value=move || count(CountField::Min).to_string()
                    on:input=move |ev| {
                        editor_set_count(&store, id, CountField::Min, &event_target_value(&ev))
                    }
                />
            </td>
            <td>
                <label for=max_id.clone() class="hidden">"Max"</label>
                <input
                    type="number"
                    name=max_id.clone()
                    id=max_id
                    prop:value=move || count(CountField::Max).to_string()
                    on:input=move |ev| {
                        editor_set_count(&store, id, CountField::Max, &event_target_value(&ev))
                    }
                />
            </td>
            <td>
                <button
                    type="button"
                    class="delete-btn"
                    on:click=move |_| editor_remove(&store, id)
                >
                    "Delete"
                </button>
            </td>
        </tr>
    }
}
