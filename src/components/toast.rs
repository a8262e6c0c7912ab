//! Toast banner rendering.

use leptos::prelude::*;

use crate::state::toast::{ToastLevel, ToastState};

/// Renders the toast queue in a fixed overlay; clicking a toast dismisses
/// it early (they also expire on their own).
#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toast-host">
            <For each=move || toasts.get().items key=|toast| toast.id let:toast>
                {
                    let id = toast.id;
                    let class = match toast.level {
                        ToastLevel::Success => "toast toast--success",
                        ToastLevel::Error => "toast toast--error",
                        ToastLevel::Info => "toast toast--info",
                    };
                    view! {
                        <div class=class on:click=move |_| toasts.update(|t| t.dismiss(id))>
                            {toast.text.clone()}
                        </div>
                    }
                }
            </For>
        </div>
    }
}
