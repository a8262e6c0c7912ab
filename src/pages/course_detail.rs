//! Course detail: info, sections, tasks, enroll/drop for learners and
//! content management for the owning instructor.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::net::api;
use crate::net::api::sections::SectionPayload;
use crate::net::api::tasks::TaskPayload;
use crate::net::types::{Course, EnrollmentStatus, TaskType};
use crate::pages::loaded_or_toast;
use crate::routes::Role;
use crate::state::session::Session;
use crate::state::toast::{self, ToastState};
use crate::util::format::{format_date, format_task_type};

#[component]
pub fn CourseDetailPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let params = use_params_map();

    let course_id = move || {
        params
            .read()
            .get("id")
            .and_then(|raw| raw.parse::<i64>().ok())
    };

    let course = LocalResource::new(move || {
        let id = course_id();
        async move {
            match id {
                Some(id) => api::courses::get(id).await.ok(),
                None => None,
            }
        }
    });

    let sections = LocalResource::new(move || {
        let id = course_id();
        async move {
            match id {
                Some(id) => loaded_or_toast(api::sections::list(id).await, toasts, "加载章节"),
                None => Vec::new(),
            }
        }
    });

    let tasks = LocalResource::new(move || {
        let id = course_id();
        async move {
            match id {
                Some(id) => api::tasks::list(id).await.unwrap_or_default(),
                None => Vec::new(),
            }
        }
    });

    // Learners need their enrollment status for the enroll/drop button.
    let enrollment = LocalResource::new(move || {
        let id = course_id();
        let student = session.get();
        async move {
            let (Some(id), Some(student_id)) = (id, student.user_id()) else {
                return false;
            };
            if student.role() != Some(Role::Learner) {
                return false;
            }
            api::enrollments::my_enrollments(student_id)
                .await
                .map(|list| {
                    list.iter().any(|e| {
                        e.enrollment.course_id == id
                            && e.enrollment.status == EnrollmentStatus::Active
                    })
                })
                .unwrap_or(false)
        }
    });

    let is_learner = move || session.get().role() == Some(Role::Learner);
    let is_owner = move || {
        let state = session.get();
        state.role() == Some(Role::Instructor)
            && course
                .get()
                .flatten()
                .is_some_and(|c: Course| Some(c.teacher_id) == state.user_id())
    };

    let enroll = move |_| {
        let (Some(id), Some(student_id)) = (course_id(), session.get().user_id()) else {
            return;
        };
        leptos::task::spawn_local(async move {
            match api::enrollments::enroll(id, student_id).await {
                Ok(_) => {
                    toast::success(toasts, "选课成功");
                    enrollment.refetch();
                }
                Err(_) => toast::error(toasts, "选课失败，请稍后再试"),
            }
        });
    };

    let drop = move |_| {
        let (Some(id), Some(student_id)) = (course_id(), session.get().user_id()) else {
            return;
        };
        leptos::task::spawn_local(async move {
            match api::enrollments::drop(id, student_id).await {
                Ok(_) => {
                    toast::success(toasts, "已退课");
                    enrollment.refetch();
                }
                Err(_) => toast::error(toasts, "退课失败，请稍后再试"),
            }
        });
    };

    let show_add_section = RwSignal::new(false);
    let section_title = RwSignal::new(String::new());
    let section_content = RwSignal::new(String::new());

    let add_section = move |_| {
        let Some(id) = course_id() else { return };
        let payload = SectionPayload {
            course_id: id,
            title: section_title.get().trim().to_owned(),
            content: Some(section_content.get()).filter(|v| !v.trim().is_empty()),
            material_url: None,
            video_url: None,
            order_index: None,
        };
        if payload.title.is_empty() {
            toast::error(toasts, "请输入章节标题");
            return;
        }
        leptos::task::spawn_local(async move {
            match api::sections::create(id, &payload).await {
                Ok(_) => {
                    toast::success(toasts, "章节已添加");
                    show_add_section.set(false);
                    sections.refetch();
                }
                Err(_) => toast::error(toasts, "添加失败，请稍后再试"),
            }
        });
    };

    let remove_section = move |section_id: i64| {
        leptos::task::spawn_local(async move {
            match api::sections::delete(section_id).await {
                Ok(_) => {
                    toast::success(toasts, "章节已删除");
                    sections.refetch();
                }
                Err(_) => toast::error(toasts, "删除失败，请稍后再试"),
            }
        });
    };

    let show_add_task = RwSignal::new(false);
    let task_title = RwSignal::new(String::new());
    let task_description = RwSignal::new(String::new());
    let task_kind = RwSignal::new(TaskType::Assignment);
    let task_deadline = RwSignal::new(String::new());

    let add_task = move |_| {
        let (Some(id), Some(teacher_id)) = (course_id(), session.get().user_id()) else {
            return;
        };
        let payload = TaskPayload {
            teacher_id,
            title: task_title.get().trim().to_owned(),
            description: Some(task_description.get()).filter(|v| !v.trim().is_empty()),
            file_url: None,
            kind: task_kind.get(),
            deadline: Some(task_deadline.get()).filter(|v| !v.is_empty()),
        };
        if payload.title.is_empty() {
            toast::error(toasts, "请输入任务标题");
            return;
        }
        leptos::task::spawn_local(async move {
            match api::tasks::create(id, &payload).await {
                Ok(_) => {
                    toast::success(toasts, "任务已发布");
                    show_add_task.set(false);
                    tasks.refetch();
                }
                Err(_) => toast::error(toasts, "发布失败，请稍后再试"),
            }
        });
    };

    view! {
        <div class="course-detail-page">
            <Suspense fallback=move || view! { <p>"加载中…"</p> }>
                {move || {
                    course.get().map(|found| match found {
                        None => view! { <p class="empty">"课程不存在或已下架"</p> }.into_any(),
                        Some(c) => {
                            let teacher = c
                                .teacher_name
                                .clone()
                                .or_else(|| c.teacher.as_ref().map(|t| t.username.clone()))
                                .unwrap_or_else(|| "-".to_owned());
                            view! {
                                <header class="page-header">
                                    <div>
                                        <h1>{c.title.clone()}</h1>
                                        <p class="course-detail-page__meta">
                                            {"授课教师："}
                                            {teacher}
                                            {"　创建于 "}
                                            {format_date(Some(&c.created_at))}
                                        </p>
                                    </div>
                                    <Show when=is_learner>
                                        {move || {
                                            if enrollment.get().unwrap_or(false) {
                                                view! {
                                                    <button class="btn" on:click=drop>
                                                        "退课"
                                                    </button>
                                                }
                                                    .into_any()
                                            } else {
                                                view! {
                                                    <button class="btn btn--primary" on:click=enroll>
                                                        "选课"
                                                    </button>
                                                }
                                                    .into_any()
                                            }
                                        }}
                                    </Show>
                                </header>
                                <p class="course-detail-page__description">
                                    {c.description.clone().unwrap_or_default()}
                                </p>
                            }
                                .into_any()
                        }
                    })
                }}
            </Suspense>

            <section class="course-detail-page__block">
                <header class="page-header">
                    <h2>"章节"</h2>
                    <Show when=is_owner>
                        <button class="btn" on:click=move |_| {
                            section_title.set(String::new());
                            section_content.set(String::new());
                            show_add_section.set(true);
                        }>
                            "+ 添加章节"
                        </button>
                    </Show>
                </header>
                <Suspense fallback=move || view! { <p>"加载中…"</p> }>
                    {move || {
                        sections.get().map(|list| {
                            if list.is_empty() {
                                view! { <p class="empty">"暂无章节"</p> }.into_any()
                            } else {
                                view! {
                                    <ol class="section-list">
                                        {list
                                            .iter()
                                            .map(|s| {
                                                let section_id = s.id;
                                                view! {
                                                    <li>
                                                        <span class="section-list__title">
                                                            {s.title.clone()}
                                                        </span>
                                                        {s.material_url.clone().map(|href| view! {
                                                            <a href=href target="_blank">"课件"</a>
                                                        })}
                                                        {s.video_url.clone().map(|href| view! {
                                                            <a href=href target="_blank">"视频"</a>
                                                        })}
                                                        <Show when=is_owner>
                                                            <button
                                                                class="btn btn--link"
                                                                on:click=move |_| remove_section(section_id)
                                                            >
                                                                "删除"
                                                            </button>
                                                        </Show>
                                                    </li>
                                                }
                                            })
                                            .collect::<Vec<_>>()}
                                    </ol>
                                }
                                    .into_any()
                            }
                        })
                    }}
                </Suspense>
            </section>

            <section class="course-detail-page__block">
                <header class="page-header">
                    <h2>"任务"</h2>
                    <Show when=is_owner>
                        <button class="btn" on:click=move |_| {
                            task_title.set(String::new());
                            task_description.set(String::new());
                            task_deadline.set(String::new());
                            task_kind.set(TaskType::Assignment);
                            show_add_task.set(true);
                        }>
                            "+ 发布任务"
                        </button>
                    </Show>
                </header>
                <Suspense fallback=move || view! { <p>"加载中…"</p> }>
                    {move || {
                        tasks.get().map(|list| {
                            if list.is_empty() {
                                view! { <p class="empty">"暂无任务"</p> }.into_any()
                            } else {
                                view! {
                                    <ul class="task-list">
                                        {list
                                            .iter()
                                            .map(|t| {
                                                view! {
                                                    <li>
                                                        <span class="task-list__kind">
                                                            {format_task_type(t.kind)}
                                                        </span>
                                                        <span class="task-list__title">
                                                            {t.title.clone()}
                                                        </span>
                                                        <span class="task-list__deadline">
                                                            {"截止："}
                                                            {format_date(t.deadline.as_deref())}
                                                        </span>
                                                        <a href="/tasks">"去任务中心"</a>
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
            </section>

            <Show when=move || show_add_section.get()>
                <div class="dialog-backdrop" on:click=move |_| show_add_section.set(false)>
                    <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                        <h2>"添加章节"</h2>
                        <label class="field">
                            "标题"
                            <input
                                type="text"
                                prop:value=move || section_title.get()
                                on:input=move |ev| section_title.set(event_target_value(&ev))
                            />
                        </label>
                        <label class="field">
                            "内容"
                            <textarea
                                prop:value=move || section_content.get()
                                on:input=move |ev| section_content.set(event_target_value(&ev))
                            ></textarea>
                        </label>
                        <div class="dialog__actions">
                            <button class="btn" on:click=move |_| show_add_section.set(false)>
                                "取消"
                            </button>
                            <button class="btn btn--primary" on:click=add_section>
                                "保存"
                            </button>
                        </div>
                    </div>
                </div>
            </Show>

            <Show when=move || show_add_task.get()>
                <div class="dialog-backdrop" on:click=move |_| show_add_task.set(false)>
                    <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                        <h2>"发布任务"</h2>
                        <label class="field">
                            "标题"
                            <input
                                type="text"
                                prop:value=move || task_title.get()
                                on:input=move |ev| task_title.set(event_target_value(&ev))
                            />
                        </label>
                        <label class="field">
                            "说明"
                            <textarea
                                prop:value=move || task_description.get()
                                on:input=move |ev| task_description.set(event_target_value(&ev))
                            ></textarea>
                        </label>
                        <label class="field">
                            "类型"
                            <select on:change=move |ev| {
                                task_kind.set(match event_target_value(&ev).as_str() {
                                    "exam" => TaskType::Exam,
                                    _ => TaskType::Assignment,
                                });
                            }>
                                <option value="assignment">"作业"</option>
                                <option value="exam">"考试"</option>
                            </select>
                        </label>
                        <label class="field">
                            "截止时间"
                            <input
                                type="datetime-local"
                                prop:value=move || task_deadline.get()
                                on:input=move |ev| task_deadline.set(event_target_value(&ev))
                            />
                        </label>
                        <div class="dialog__actions">
                            <button class="btn" on:click=move |_| show_add_task.set(false)>
                                "取消"
                            </button>
                            <button class="btn btn--primary" on:click=add_task>
                                "发布"
                            </button>
                        </div>
                    </div>
                </div>
            </Show>
        </div>
    }
}
