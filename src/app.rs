//! CRUD Frontend App
//!
//! Router and context wiring for the list and detail pages.

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::components::{DetailPage, ListPage, NotFound};
use crate::config::AppConfig;
use crate::context::AppContext;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    // Provide context to all pages
    provide_context(AppContext::new(config));

    view! {
        <Router>
            <main class="app-layout">
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=ListPage />
                    <Route path=path!("/users/:id") view=DetailPage />
                </Routes>
            </main>
        </Router>
    }
}
