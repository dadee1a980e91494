//! Status Components
//!
//! Placeholders shown while a page's data loads or after it fails.

use leptos::prelude::*;

/// Placeholder while a request is pending
#[component]
pub fn Loading() -> impl IntoView {
    view! { <div class="status loading">"Loading..."</div> }
}

/// Inline message for a failed load
#[component]
pub fn LoadError(#[prop(into)] message: String) -> impl IntoView {
    view! { <div class="status error">{message}</div> }
}
