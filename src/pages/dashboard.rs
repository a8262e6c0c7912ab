//! Dashboard: greeting, latest announcements, and role-aware shortcuts.

use leptos::prelude::*;

use crate::net::api;
use crate::pages::loaded_or_toast;
use crate::routes::Role;
use crate::state::session::Session;
use crate::state::toast::ToastState;
use crate::util::format::format_date;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let announcements = LocalResource::new(move || async move {
        loaded_or_toast(
            api::admin::list_announcements(false).await,
            toasts,
            "加载公告",
        )
    });

    // Only instructors carry a grading backlog.
    let pending = LocalResource::new(move || {
        let is_instructor = session.get().role() == Some(Role::Instructor);
        async move {
            if !is_instructor {
                return 0;
            }
            api::scores::pending_grading_count().await.unwrap_or(0)
        }
    });

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__greeting">
                <h1>
                    {"你好，"}
                    {move || session.get().display_name()}
                </h1>
                <p>
                    {"当前身份："}
                    {move || session.get().role_label()}
                </p>
            </header>

            <Show when=move || session.get().role() == Some(Role::Instructor)>
                <section class="dashboard-page__card">
                    <h2>"待批改"</h2>
                    <p class="dashboard-page__count">
                        {move || pending.get().unwrap_or(0)}
                        " 份提交待批改，前往"
                        <a href="/tasks">"任务中心"</a>
                        "处理"
                    </p>
                </section>
            </Show>

            <section class="dashboard-page__card">
                <h2>"最新公告"</h2>
                <Suspense fallback=move || view! { <p>"加载中…"</p> }>
                    {move || {
                        announcements.get().map(|list| {
                            if list.is_empty() {
                                view! { <p class="empty">"暂无公告"</p> }.into_any()
                            } else {
                                view! {
                                    <ul class="announcement-list">
                                        {list
                                            .iter()
                                            .take(5)
                                            .map(|item| {
                                                view! {
                                                    <li>
                                                        <span class="announcement-list__title">
                                                            {item.title.clone()}
                                                        </span>
                                                        <span class="announcement-list__date">
                                                            {format_date(Some(&item.created_at))}
                                                        </span>
                                                    </li>
                                                }
                                            })
                                            .collect::<Vec<_>>()}
                                    </ul>
                                }
                                    .into_any()
                            }
                        })
                    }}
                </Suspense>
                <a href="/announcements">"查看全部公告"</a>
            </section>
        </div>
    }
}
