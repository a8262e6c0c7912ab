//! Fallback page for unknown paths.

use leptos::prelude::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="not-found-page">
            <h1>"404"</h1>
            <p>"页面不存在"</p>
            <a href="/">"返回工作台"</a>
        </div>
    }
}
