//! Fallback page for unknown paths.

use leptos::prelude::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="not-found-page">
            <p class="not-found-page__code">"404"</p>
            <h1>"Page not found"</h1>
            <a href="/" class="login-button">"Go home"</a>
        </div>
    }
}
