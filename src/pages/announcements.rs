//! Platform announcement list.

use leptos::prelude::*;

use crate::net::api;
use crate::pages::loaded_or_toast;
use crate::state::toast::ToastState;
use crate::util::format::format_date;

#[component]
pub fn AnnouncementsPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    let announcements = LocalResource::new(move || async move {
        loaded_or_toast(
            api::admin::list_announcements(false).await,
            toasts,
            "加载公告",
        )
    });

    view! {
        <div class="announcements-page">
            <header class="page-header">
                <h1>"平台公告"</h1>
            </header>
            <Suspense fallback=move || view! { <p>"加载中…"</p> }>
                {move || {
                    announcements.get().map(|list| {
                        if list.is_empty() {
                            view! { <p class="empty">"暂无公告"</p> }.into_any()
                        } else {
                            view! {
                                <div class="announcements-page__list">
                                    {list
                                        .iter()
                                        .map(|item| {
                                            view! {
                                                <article class="announcement">
                                                    <h2>{item.title.clone()}</h2>
                                                    <p class="announcement__date">
                                                        {format_date(Some(&item.created_at))}
                                                    </p>
                                                    <p class="announcement__content">
                                                        {item.content.clone()}
                                                    </p>
                                                </article>
                                            }
                                        })
                                        .collect::<Vec<_>>()}
                                </div>
                            }
                                .into_any()
                        }
                    })
                }}
            </Suspense>
        </div>
    }
}
