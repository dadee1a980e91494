//! Total Bounds Inputs
//!
//! Controlled min/max inputs for the customer's total fruit range.

use leptos::prelude::*;

use crate::store::{use_editor_store, EditorStateStoreFields};

#[component]
pub fn TotalBoundsInputs() -> impl IntoView {
    let store = use_editor_store();

    view! {
        <div class="total-bounds">
            <h3>"Total Fruit in Basket"</h3>
            <div class="bounds-row">
                <div class="bound-field">
                    <label for="min-total">"Min"</label>
                    <input
                        type="number"
                        name="min-total"
                        id="min-total"
                        prop:value=move || store.min_total().get()
                        on:input=move |ev| *store.min_total().write() = event_target_value(&ev)
                    />
                </div>
                <div class="bound-field">
                    <label for="max-total">"Max"</label>
                    <input
                        type="number"
                        name="max-total"
                        id="max-total"
                        prop:value=move || store.max_total().get()
                        on:input=move |ev| *store.max_total().write() = event_target_value(&ev)
                    />
                </div>
            </div>
        </div>
    }
}
