use leptos::prelude::*;

/// Fallback for unknown routes
#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="page">
            <h2 class="page-title">"Page not found"</h2>
            <a href="/" class="btn btn-back">"Back to Main Page"</a>
        </div>
    }
}
