//! Application Context
//!
//! Shared handles provided to every page via the Leptos Context API.

use leptos::prelude::*;

use crate::api::ApiClient;
use crate::query::QueryClient;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Response cache shared by all pages
    pub query: QueryClient,
    api: StoredValue<ApiClient>,
}

impl AppContext {
    pub fn new(api: ApiClient, query: QueryClient) -> Self {
        Self {
            query,
            api: StoredValue::new(api),
        }
    }

    /// Backend client for the configured base url
    pub fn api(&self) -> ApiClient {
        self.api.get_value()
    }
}
