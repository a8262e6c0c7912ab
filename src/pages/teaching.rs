//! Instructor's course management: own courses, create, edit.

use leptos::prelude::*;

use crate::net::api;
use crate::net::api::courses::{CoursePayload, CourseUpdate};
use crate::pages::loaded_or_toast;
use crate::state::session::Session;
use crate::state::toast::{self, ToastState};
use crate::util::format::format_date;

#[component]
pub fn TeachingPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let courses = LocalResource::new(move || {
        let teacher_id = session.get().user_id();
        async move {
            loaded_or_toast(api::courses::list().await, toasts, "加载课程")
                .into_iter()
                .filter(|c| Some(c.teacher_id) == teacher_id)
                .collect::<Vec<_>>()
        }
    });

    // One dialog serves create and edit; `editing` carries the course id.
    let show_dialog = RwSignal::new(false);
    let editing = RwSignal::new(None::<i64>);
    let title = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());

    let open_create = move |_| {
        editing.set(None);
        title.set(String::new());
        description.set(String::new());
        show_dialog.set(true);
    };

    let save = move |_| {
        let name = title.get().trim().to_owned();
        if name.is_empty() {
            toast::error(toasts, "请输入课程标题");
            return;
        }
        let about = Some(description.get().trim().to_owned()).filter(|v| !v.is_empty());
        leptos::task::spawn_local(async move {
            let result = match editing.get_untracked() {
                Some(id) => api::courses::update(
                    id,
                    &CourseUpdate {
                        title: Some(name),
                        description: about,
                        ..CourseUpdate::default()
                    },
                )
                .await
                .map(|_| ()),
                None => api::courses::create(&CoursePayload {
                    title: name,
                    description: about,
                    cover_url: None,
                    category_id: None,
                })
                .await
                .map(|_| ()),
            };
            match result {
                Ok(()) => {
                    toast::success(toasts, "已保存");
                    show_dialog.set(false);
                    courses.refetch();
                }
                Err(_) => toast::error(toasts, "保存失败，请稍后再试"),
            }
        });
    };

    view! {
        <div class="teaching-page">
            <header class="page-header">
                <h1>"我的教学"</h1>
                <button class="btn btn--primary" on:click=open_create>
                    "+ 新建课程"
                </button>
            </header>

            <Suspense fallback=move || view! { <p>"加载中…"</p> }>
                {move || {
                    courses.get().map(|list| {
                        if list.is_empty() {
                            view! { <p class="empty">"还没有课程，先创建一门吧"</p> }.into_any()
                        } else {
                            view! {
                                <table class="data-table">
                                    <thead>
                                        <tr>
                                            <th>"课程"</th>
                                            <th>"状态"</th>
                                            <th>"创建时间"</th>
                                            <th>"操作"</th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        {list
                                            .iter()
                                            .map(|c| {
                                                let id = c.id;
                                                let name = c.title.clone();
                                                let about =
                                                    c.description.clone().unwrap_or_default();
                                                view! {
                                                    <tr>
                                                        <td>
                                                            <a href=format!("/courses/{id}")>
                                                                {c.title.clone()}
                                                            </a>
                                                        </td>
                                                        <td>
                                                            {if c.is_active {
                                                                "开放中"
                                                            } else {
                                                                "已下架"
                                                            }}
                                                        </td>
                                                        <td>{format_date(Some(&c.created_at))}</td>
                                                        <td>
                                                            <button
                                                                class="btn btn--link"
                                                                on:click=move |_| {
                                                                    editing.set(Some(id));
                                                                    title.set(name.clone());
                                                                    description.set(about.clone());
                                                                    show_dialog.set(true);
                                                                }
                                                            >
                                                                "编辑"
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
                        }
                    })
                }}
            </Suspense>

            <Show when=move || show_dialog.get()>
                <div class="dialog-backdrop" on:click=move |_| show_dialog.set(false)>
                    <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                        <h2>
                            {move || if editing.get().is_some() { "编辑课程" } else { "新建课程" }}
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
                            "简介"
                            <textarea
                                prop:value=move || description.get()
                                on:input=move |ev| description.set(event_target_value(&ev))
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
