//! Customer Editor Store
//!
//! Form state of the customer edit page, using reactive_stores for
//! field-level reactivity. Lives for one page view.

use leptos::prelude::*;
use reactive_stores::Store;

use basket_rules::{
    add_preference, remove_preference, seed_preferences, set_count, CountField, Customer, Fruit,
    FruitPreference,
};

/// Editable state of one customer
#[derive(Clone, Debug, Default, Store)]
pub struct EditorState {
    /// Preference rows as currently edited
    pub preferences: Vec<FruitPreference>,
    /// Fruit chosen in the picker, not yet added
    pub selected: Option<u32>,
    /// Raw text of the total min input
    pub min_total: String,
    /// Raw text of the total max input
    pub max_total: String,
    /// Customer the rows were loaded from
    pub seeded: Option<u32>,
    /// An update request is in flight
    pub saving: bool,
}

/// Type alias for the store
pub type EditorStore = Store<EditorState>;

/// Get the editor store from context
pub fn use_editor_store() -> EditorStore {
    expect_context::<EditorStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Load rows and total bounds from the fetched customer. A refetch of the same
/// customer keeps the edits; a different customer replaces them.
pub fn editor_seed(store: &EditorStore, customer: &Customer) {
    if store.seeded().get_untracked() == Some(customer.id) {
        return;
    }
    *store.preferences().write() = seed_preferences(customer);
    *store.min_total().write() = customer.min_total_fruit.to_string();
    *store.max_total().write() = customer.max_total_fruit.to_string();
    *store.selected().write() = None;
    *store.seeded().write() = Some(customer.id);
}

/// Add the picker's selected fruit, if it is among `offered`, and clear the selection
pub fn editor_add_selected(store: &EditorStore, offered: &[Fruit]) {
    let Some(selected) = store.selected().get_untracked() else {
        return;
    };
    if let Some(fruit) = offered.iter().find(|fruit| fruit.id == selected) {
        add_preference(&mut store.preferences().write(), fruit);
    }
    *store.selected().write() = None;
}

/// Apply an edit of one row's min or max input
pub fn editor_set_count(store: &EditorStore, id: u32, field: CountField, raw: &str) {
    set_count(&mut store.preferences().write(), id, field, raw);
}

/// Remove one row
pub fn editor_remove(store: &EditorStore, id: u32) {
    remove_preference(&mut store.preferences().write(), id);
}
