//! Course catalog with creation for instructors.

use leptos::prelude::*;

use crate::components::course_card::CourseCard;
use crate::net::api;
use crate::net::api::courses::CoursePayload;
use crate::pages::loaded_or_toast;
use crate::routes::Role;
use crate::state::session::Session;
use crate::state::toast::{self, ToastState};

#[component]
pub fn CoursesPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let courses = LocalResource::new(move || async move {
        loaded_or_toast(api::courses::list().await, toasts, "加载课程")
    });
    let categories = LocalResource::new(move || async move {
        api::courses::list_categories().await.unwrap_or_default()
    });

    let show_create = RwSignal::new(false);
    let title = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let category_id = RwSignal::new(None::<i64>);

    let create = move |_| {
        let payload = CoursePayload {
            title: title.get().trim().to_owned(),
            description: Some(description.get().trim().to_owned()).filter(|v| !v.is_empty()),
            cover_url: None,
            category_id: category_id.get(),
        };
        if payload.title.is_empty() {
            toast::error(toasts, "请输入课程标题");
            return;
        }
        leptos::task::spawn_local(async move {
            match api::courses::create(&payload).await {
                Ok(_) => {
                    toast::success(toasts, "课程已创建");
                    show_create.set(false);
                    courses.refetch();
                }
                Err(_) => toast::error(toasts, "创建失败，请稍后再试"),
            }
        });
    };

    view! {
        <div class="courses-page">
            <header class="page-header">
                <h1>"课程广场"</h1>
                <Show when=move || session.get().role() == Some(Role::Instructor)>
                    <button
                        class="btn btn--primary"
                        on:click=move |_| {
                            title.set(String::new());
                            description.set(String::new());
                            category_id.set(None);
                            show_create.set(true);
                        }
                    >
                        "+ 新建课程"
                    </button>
                </Show>
            </header>

            <Suspense fallback=move || view! { <p>"加载中…"</p> }>
                {move || {
                    courses.get().map(|list| {
                        let active: Vec<_> =
                            list.iter().filter(|c| c.is_active).cloned().collect();
                        if active.is_empty() {
                            view! { <p class="empty">"暂无课程"</p> }.into_any()
                        } else {
                            view! {
                                <div class="courses-page__grid">
                                    {active
                                        .into_iter()
                                        .map(|course| view! { <CourseCard course=course/> })
                                        .collect::<Vec<_>>()}
                                </div>
                            }
                                .into_any()
                        }
                    })
                }}
            </Suspense>

            <Show when=move || show_create.get()>
                <div class="dialog-backdrop" on:click=move |_| show_create.set(false)>
                    <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                        <h2>"新建课程"</h2>
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
                        <label class="field">
                            "分类"
                            <select on:change=move |ev| {
                                category_id.set(event_target_value(&ev).parse::<i64>().ok());
                            }>
                                <option value="">"未分类"</option>
                                {move || {
                                    categories
                                        .get()
                                        .map(|list| {
                                            list.iter()
                                                .map(|c| {
                                                    view! {
                                                        <option value=c.id.to_string()>
                                                            {c.name.clone()}
                                                        </option>
                                                    }
                                                })
                                                .collect::<Vec<_>>()
                                        })
                                }}
                            </select>
                        </label>
                        <div class="dialog__actions">
                            <button class="btn" on:click=move |_| show_create.set(false)>
                                "取消"
                            </button>
                            <button class="btn btn--primary" on:click=create>
                                "创建"
                            </button>
                        </div>
                    </div>
                </div>
            </Show>
        </div>
    }
}
