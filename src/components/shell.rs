//! Shell Layout
//!
//! Persistent header plus the outlet nested routes render into.

use leptos::prelude::*;
use leptos_router::components::{Outlet, A};

#[component]
pub fn Shell() -> impl IntoView {
    view! {
        <div class="shell">
            <header>
                <nav class="shell-nav">
                    <A href="/customers">
                        <h1>"Surprise Me fruits Co."</h1>
                    </A>
                </nav>
            </header>
            <main class="shell-main">
                <Outlet />
            </main>
        </div>
    }
}
