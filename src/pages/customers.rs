//! Customers List Page

use leptos::prelude::*;

use crate::components::{CustomerTable, LoadError, Loading};
use crate::context::AppContext;
use crate::query::QueryKey;

#[component]
pub fn CustomersPage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    // Refetches whenever the cache is invalidated
    let customers = LocalResource::new(move || {
        let _ = ctx.query.epoch();
        let api = ctx.api();
        async move {
            ctx.query
                .fetch(QueryKey::Customers, move || async move { api.list_customers().await })
                .await
        }
    });

    view! {
        <div class="customers-page">
            {move || match customers.get() {
                None => view! { <Loading /> }.into_any(),
                Some(Err(e)) => {
                    log::warn!("failed to load customers: {}", e);
                    view! { <LoadError message="Error loading customers" /> }.into_any()
                }
                Some(Ok(list)) => view! { <CustomerTable customers=list /> }.into_any(),
            }}
        </div>
    }
}
