//! Administrator announcement management, inactive ones included.

use leptos::prelude::*;

use crate::net::api;
use crate::net::api::admin::{AnnouncementCreate, AnnouncementUpdate};
use crate::pages::loaded_or_toast;
use crate::state::session::Session;
use crate::state::toast::{self, ToastState};
use crate::util::format::format_date;

#[component]
pub fn AdminAnnouncementsPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let announcements = LocalResource::new(move || async move {
        loaded_or_toast(api::admin::list_announcements(true).await, toasts, "加载公告")
    });

    let show_dialog = RwSignal::new(false);
    let editing = RwSignal::new(None::<i64>);
    let title = RwSignal::new(String::new());
    let content = RwSignal::new(String::new());

    let open_create = move |_| {
        editing.set(None);
        title.set(String::new());
        content.set(String::new());
        show_dialog.set(true);
    };

    let save = move |_| {
        let heading = title.get().trim().to_owned();
        let body = content.get().trim().to_owned();
        if heading.is_empty() || body.is_empty() {
            toast::error(toasts, "请填写标题和内容");
            return;
        }
        let author = session.get_untracked().user_id();
        leptos::task::spawn_local(async move {
            let result = match editing.get_untracked() {
                Some(id) => api::admin::update_announcement(
                    id,
                    &AnnouncementUpdate {
                        title: Some(heading),
                        content: Some(body),
                        ..AnnouncementUpdate::default()
                    },
                )
                .await
                .map(|_| ()),
                None => {
                    let Some(created_by) = author else {
                        return;
                    };
                    api::admin::create_announcement(&AnnouncementCreate {
                        title: heading,
                        content: body,
                        created_by,
                        is_active: None,
                    })
                    .await
                    .map(|_| ())
                }
            };
            match result {
                Ok(()) => {
                    toast::success(toasts, "已保存");
                    show_dialog.set(false);
                    announcements.refetch();
                }
                Err(_) => toast::error(toasts, "保存失败，请稍后再试"),
            }
        });
    };

    let toggle = move |id: i64, active: bool| {
        leptos::task::spawn_local(async move {
            let payload = AnnouncementUpdate {
                is_active: Some(!active),
                ..AnnouncementUpdate::default()
            };
            match api::admin::update_announcement(id, &payload).await {
                Ok(_) => {
                    toast::success(toasts, if active { "公告已下线" } else { "公告已上线" });
                    announcements.refetch();
                }
                Err(_) => toast::error(toasts, "操作失败，请稍后再试"),
            }
        });
    };

    let remove = move |id: i64| {
        leptos::task::spawn_local(async move {
            match api::admin::delete_announcement(id).await {
                Ok(_) => {
                    toast::success(toasts, "公告已删除");
                    announcements.refetch();
                }
                Err(_) => toast::error(toasts, "删除失败，请稍后再试"),
            }
        });
    };

    view! {
        <div class="admin-page">
            <header class="page-header">
                <h1>"公告管理"</h1>
                <button class="btn btn--primary" on:click=open_create>
                    "+ 新建公告"
                </button>
            </header>

            <Suspense fallback=move || view! { <p>"加载中…"</p> }>
                {move || {
                    announcements.get().map(|list| {
                        if list.is_empty() {
                            return view! { <p class="empty">"暂无公告"</p> }.into_any();
                        }
                        view! {
                            <table class="data-table">
                                <thead>
                                    <tr>
                                        <th>"标题"</th>
                                        <th>"状态"</th>
                                        <th>"发布时间"</th>
                                        <th>"操作"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {list
                                        .iter()
                                        .map(|item| {
                                            let id = item.id;
                                            let active = item.is_active;
                                            let heading = item.title.clone();
                                            let body = item.content.clone();
                                            view! {
                                                <tr>
                                                    <td>{item.title.clone()}</td>
                                                    <td>{if active { "已发布" } else { "已下线" }}</td>
                                                    <td>{format_date(Some(&item.created_at))}</td>
                                                    <td>
                                                        <button
                                                            class="btn btn--link"
                                                            on:click=move |_| {
                                                                editing.set(Some(id));
                                                                title.set(heading.clone());
                                                                content.set(body.clone());
                                                                show_dialog.set(true);
                                                            }
                                                        >
                                                            "编辑"
                                                        </button>
                                                        <button
                                                            class="btn btn--link"
                                                            on:click=move |_| toggle(id, active)
                                                        >
                                                            {if active { "下线" } else { "上线" }}
                                                        </button>
                                                        <button
                                                            class="btn btn--link"
                                                            on:click=move |_| remove(id)
                                                        >
                                                            "删除"
                                                        </button>
                                                    </td>
                                                </tr>
                                            }
                                        })
                                        .collect::<Vec<_>>()}
                                </tbody>
                            </table>
                        }
                        .into_any()
                    })
                }}
            </Suspense>

            <Show when=move || show_dialog.get()>
                <div class="dialog-backdrop" on:click=move |_| show_dialog.set(false)>
                    <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                        <h2>
                            {move || if editing.get().is_some() { "编辑公告" } else { "新建公告" }}
                        </h2>
                        <label class="field">
                            "标题"
                            <input
                                type="text"
                                prop:value=move || title.get()
                                on:input=move |ev| title.set(event_target_value(&ev))
                            />
                        </label>
                        <label class="field">
                            "内容"
                            <textarea
                                prop:value=move || content.get()
                                on:input=move |ev| content.set(event_target_value(&ev))
                            ></textarea>
                        </label>
                        <div class="dialog__actions">
                            <button class="btn" on:click=move |_| show_dialog.set(false)>
                                "取消"
                            </button>
                            <button class="btn btn--primary" on:click=save>
                                "保存"
                            </button>
                        </div>
                    </div>
                </div>
            </Show>
        </div>
    }
}
