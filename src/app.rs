//! Fruit Basket App
//!
//! Root component: provides shared context and maps routes to pages.

use leptos::prelude::*;
use leptos_router::components::{ParentRoute, Route, Router, Routes};
use leptos_router::path;

use crate::api::ApiClient;
use crate::components::Shell;
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::pages::{CustomerPage, CustomersPage};
use crate::query::QueryClient;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    // The query cache lives as long as the app; pages share it through context
    provide_context(AppContext::new(
        ApiClient::new(config.api_url.clone()),
        QueryClient::new(),
    ));

    view! {
        <Router>
            <Routes fallback=|| "Page not found.">
                <ParentRoute path=path!("/") view=Shell>
                    <Route path=path!("/") view=|| () />
                    <Route path=path!("/customers") view=CustomersPage />
                    <Route path=path!("/customers/:id") view=CustomerPage />
                </ParentRoute>
            </Routes>
        </Router>
    }
}
