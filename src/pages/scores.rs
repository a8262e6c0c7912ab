//! Scores: a learner sees their own results, an instructor a per-course
//! sheet with CSV export.

use leptos::prelude::*;

use crate::net::api;
use crate::net::types::Score;
use crate::pages::loaded_or_toast;
use crate::routes::Role;
use crate::state::session::Session;
use crate::state::toast::{self, ToastState};
use crate::util::format::{format_date, format_score, format_submission_status};

#[component]
pub fn ScoresPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let selected_course = RwSignal::new(None::<i64>);
    let export_text = RwSignal::new(None::<String>);

    // Instructors pick one of their own courses.
    let my_courses = LocalResource::new(move || {
        let state = session.get();
        async move {
            if state.role() != Some(Role::Instructor) {
                return Vec::new();
            }
            let teacher_id = state.user_id();
            api::courses::list()
                .await
                .unwrap_or_default()
                .into_iter()
                .filter(|c| Some(c.teacher_id) == teacher_id)
                .collect()
        }
    });

    let scores = LocalResource::new(move || {
        let state = session.get();
        let course = selected_course.get();
        async move {
            match state.role() {
                Some(Role::Learner) => match state.user_id() {
                    Some(id) => {
                        loaded_or_toast(api::scores::my_scores(id).await, toasts, "加载成绩")
                    }
                    None => Vec::new(),
                },
                Some(Role::Instructor) => match course {
                    Some(id) => {
                        loaded_or_toast(api::scores::course_scores(id).await, toasts, "加载成绩")
                    }
                    None => Vec::new(),
                },
                _ => Vec::new(),
            }
        }
    });

    let export = move |_| {
        let Some(course_id) = selected_course.get() else {
            toast::error(toasts, "请先选择课程");
            return;
        };
        leptos::task::spawn_local(async move {
            match api::scores::export(course_id).await {
                Ok(csv) => export_text.set(Some(csv)),
                Err(_) => toast::error(toasts, "导出失败，请稍后再试"),
            }
        });
    };

    let score_rows = move |list: Vec<Score>| {
        if list.is_empty() {
            return view! { <p class="empty">"暂无成绩"</p> }.into_any();
        }
        view! {
            <table class="data-table">
                <thead>
                    <tr>
                        <th>"任务"</th>
                        <th>"分数"</th>
                        <th>"状态"</th>
                        <th>"评语"</th>
                        <th>"批改时间"</th>
                    </tr>
                </thead>
                <tbody>
                    {list
                        .iter()
                        .map(|s| {
                            view! {
                                <tr>
                                    <td>{s.task_title.clone()}</td>
                                    <td>{format_score(s.score)}</td>
                                    <td>{format_submission_status(s.status)}</td>
                                    <td>{s.feedback.clone().unwrap_or_else(|| "-".to_owned())}</td>
                                    <td>{format_date(s.graded_at.as_deref())}</td>
                                </tr>
                            }
                        })
                        .collect::<Vec<_>>()}
                </tbody>
            </table>
        }
        .into_any()
    };

    view! {
        <div class="scores-page">
            <header class="page-header">
                <h1>"成绩"</h1>
                <Show when=move || session.get().role() == Some(Role::Instructor)>
                    <div class="scores-page__controls">
                        <select on:change=move |ev| {
                            selected_course.set(event_target_value(&ev).parse::<i64>().ok());
                        }>
                            <option value="">"选择课程"</option>
                            {move || {
                                my_courses
                                    .get()
                                    .map(|list| {
                                        list.iter()
                                            .map(|c| {
                                                view! {
                                                    <option value=c.id.to_string()>
                                                        {c.title.clone()}
                                                    </option>
                                                }
                                            })
                                            .collect::<Vec<_>>()
                                    })
                            }}
                        </select>
                        <button class="btn" on:click=export>
                            "导出 CSV"
                        </button>
                    </div>
                </Show>
            </header>

            <Suspense fallback=move || view! { <p>"加载中…"</p> }>
                {move || scores.get().map(score_rows)}
            </Suspense>

            <Show when=move || export_text.get().is_some()>
                <div class="dialog-backdrop" on:click=move |_| export_text.set(None)>
                    <div class="dialog dialog--wide" on:click=move |ev| ev.stop_propagation()>
                        <h2>"成绩单 CSV"</h2>
                        <pre class="scores-page__csv">
                            {move || export_text.get().unwrap_or_default()}
                        </pre>
                        <div class="dialog__actions">
                            <button class="btn" on:click=move |_| export_text.set(None)>
                                "关闭"
                            </button>
                        </div>
                    </div>
                </div>
            </Show>
        </div>
    }
}
