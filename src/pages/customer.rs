//! Customer Detail Page
//!
//! Loads one customer and the fruit catalog, then edits the customer's total
//! fruit range and per-fruit preferences. Submitting validates the aggregate
//! bounds before any request is sent.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_navigate, use_params_map};
use reactive_stores::Store;

use basket_rules::{build_update, Customer, Fruit};

use crate::api::parse_customer_id;
use crate::components::{FruitPicker, LoadError, Loading, PreferenceTable, TotalBoundsInputs};
use crate::context::AppContext;
use crate::query::QueryKey;
use crate::store::{editor_seed, EditorState, EditorStateStoreFields, EditorStore};

#[component]
pub fn CustomerPage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let params = use_params_map();
    let raw_id = move || params.with(|p| p.get("id").map(|id| id.to_string()).unwrap_or_default());

    // Editor state for this page view, shared with the form components
    let store: EditorStore = Store::new(EditorState::default());
    provide_context(store);

    // Only this page invalidates customer data, right before it navigates
    // away, so neither resource tracks the cache epoch
    let customer = LocalResource::new(move || {
        let id = parse_customer_id(&raw_id());
        let api = ctx.api();
        async move {
            match id {
                Ok(id) => {
                    ctx.query
                        .fetch(QueryKey::Customer(id), move || async move {
                            api.get_customer(id).await
                        })
                        .await
                }
                Err(e) => Err(e),
            }
        }
    });

    let fruits = LocalResource::new(move || {
        let api = ctx.api();
        async move {
            ctx.query
                .fetch(QueryKey::Fruits, move || async move { api.list_fruits().await })
                .await
        }
    });

    // Seed editable rows once the customer arrives
    Effect::new(move |_| {
        if let Some(Ok(loaded)) = customer.get() {
            editor_seed(&store, &loaded);
        }
    });

    view! {
        {move || match (customer.get(), fruits.get()) {
            (None, _) | (_, None) => view! { <Loading /> }.into_any(),
            (Some(Err(e)), _) => {
                log::warn!("failed to load customer {:?}: {}", raw_id(), e);
                view! { <LoadError message="Error loading customer" /> }.into_any()
            }
            (_, Some(Err(e))) => {
                log::warn!("failed to load fruits: {}", e);
                view! { <LoadError message="Error loading fruits" /> }.into_any()
            }
            (Some(Ok(loaded)), Some(Ok(catalog))) => {
                view! { <CustomerForm customer=loaded catalog=catalog /> }.into_any()
            }
        }}
    }
}

#[component]
fn CustomerForm(customer: Customer, catalog: Vec<Fruit>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = expect_context::<EditorStore>();
    let navigate = use_navigate();
    let name = customer.name.clone();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if store.saving().get_untracked() {
            return;
        }

        let prefs = store.preferences().get_untracked();
        let min_input = store.min_total().get_untracked();
        let max_input = store.max_total().get_untracked();

        let updated = match build_update(&customer, &min_input, &max_input, &prefs) {
            Ok(updated) => updated,
            Err(violation) => {
                log::info!("update of customer {} blocked: {}", customer.id, violation);
                let _ = window().alert_with_message(&violation.to_string());
                return;
            }
        };

        log::debug!("submitting customer {:?}", updated);
        *store.saving().write() = true;

        let api = ctx.api();
        let navigate = navigate.clone();
        spawn_local(async move {
            match api.update_customer(&updated).await {
                Ok(saved) => {
                    // Drops the list and every customer entry, including this one
                    log::debug!("customer {} saved", saved.id);
                    ctx.query.invalidate(&QueryKey::Customers);
                    navigate("/customers", Default::default());
                }
                Err(e) => {
                    log::error!("failed to update customer {}: {}", updated.id, e);
                    *store.saving().write() = false;
                }
            }
        });
    };

    view! {
        <div class="customer-page">
            <h2>{name}</h2>
            <form class="customer-form" on:submit=on_submit>
                <TotalBoundsInputs />
                <div class="preferences">
                    <h3>"Fruit Preferences"</h3>
                    <FruitPicker catalog=catalog />
                    <PreferenceTable />
                </div>
                <button type="submit" class="save-btn" disabled=move || store.saving().get()>
                    "Save"
                </button>
            </form>
        </div>
    }
}
