//! Task center: learners submit work, instructors review and grade it.

use leptos::prelude::*;

use crate::net::api;
use crate::net::api::tasks::{GradePayload, SubmitPayload};
use crate::net::types::{Submission, Task};
use crate::pages::loaded_or_toast;
use crate::routes::Role;
use crate::state::session::Session;
use crate::state::toast::{self, ToastState};
use crate::util::format::{format_date, format_score, format_submission_status, format_task_type};
use crate::util::messages;

#[component]
pub fn TasksPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let selected_course = RwSignal::new(None::<i64>);

    // Learners choose among enrolled courses, instructors among their own.
    let course_options = LocalResource::new(move || {
        let state = session.get();
        async move {
            match state.role() {
                Some(Role::Learner) => match state.user_id() {
                    Some(id) => api::enrollments::my_enrollments(id)
                        .await
                        .unwrap_or_default()
                        .into_iter()
                        .map(|e| (e.course.id, e.course.title))
                        .collect::<Vec<_>>(),
                    None => Vec::new(),
                },
                Some(Role::Instructor) => {
                    let teacher_id = state.user_id();
                    api::courses::list()
                        .await
                        .unwrap_or_default()
                        .into_iter()
                        .filter(|c| Some(c.teacher_id) == teacher_id)
                        .map(|c| (c.id, c.title))
                        .collect()
                }
                _ => Vec::new(),
            }
        }
    });

    let tasks = LocalResource::new(move || {
        let course = selected_course.get();
        async move {
            match course {
                Some(id) => loaded_or_toast(api::tasks::list(id).await, toasts, "加载任务"),
                None => Vec::new(),
            }
        }
    });

    // A learner's own submissions for the selected course, keyed by task.
    let my_submissions = LocalResource::new(move || {
        let state = session.get();
        let course = selected_course.get();
        async move {
            if state.role() != Some(Role::Learner) {
                return Vec::new();
            }
            match course {
                Some(id) => api::tasks::my_submissions(id).await.unwrap_or_default(),
                None => Vec::new(),
            }
        }
    });

    let submit_task = RwSignal::new(None::<Task>);
    let grading_task = RwSignal::new(None::<i64>);

    let is_learner = move || session.get().role() == Some(Role::Learner);
    let is_instructor = move || session.get().role() == Some(Role::Instructor);

    let remove_task = move |task_id: i64| {
        leptos::task::spawn_local(async move {
            match api::tasks::delete(task_id).await {
                Ok(()) => {
                    toast::success(toasts, "任务已删除");
                    tasks.refetch();
                }
                Err(_) => toast::error(toasts, "删除失败，请稍后再试"),
            }
        });
    };

    view! {
        <div class="tasks-page">
            <header class="page-header">
                <h1>"任务中心"</h1>
                <select on:change=move |ev| {
                    selected_course.set(event_target_value(&ev).parse::<i64>().ok());
                    grading_task.set(None);
                }>
                    <option value="">"选择课程"</option>
                    {move || {
                        course_options
                            .get()
                            .map(|list| {
                                list.iter()
                                    .map(|(id, title)| {
                                        view! {
                                            <option value=id.to_string()>{title.clone()}</option>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            })
                    }}
                </select>
            </header>

            <Suspense fallback=move || view! { <p>"加载中…"</p> }>
                {move || {
                    tasks.get().map(|list| {
                        if selected_course.get().is_none() {
                            return view! { <p class="empty">"请先选择课程"</p> }.into_any();
                        }
                        if list.is_empty() {
                            return view! { <p class="empty">"该课程暂无任务"</p> }.into_any();
                        }
                        view! {
                            <ul class="task-list">
                                {list
                                    .iter()
                                    .map(|task| {
                                        let task_id = task.id;
                                        let task_for_submit = task.clone();
                                        let status = move || {
                                            my_submissions.get().and_then(|subs| {
                                                subs.iter()
                                                    .find(|s: &&Submission| s.task_id == task_id)
                                                    .map(|s| {
                                                        format!(
                                                            "{}　得分：{}",
                                                            format_submission_status(s.status),
                                                            format_score(s.score),
                                                        )
                                                    })
                                            })
                                        };
                                        view! {
                                            <li class="task-list__item">
                                                <span class="task-list__kind">
                                                    {format_task_type(task.kind)}
                                                </span>
                                                <span class="task-list__title">
                                                    {task.title.clone()}
                                                </span>
                                                <span class="task-list__deadline">
                                                    {"截止："}
                                                    {format_date(task.deadline.as_deref())}
                                                </span>
                                                <Show when=is_learner>
                                                    <span class="task-list__status">
                                                        {move || {
                                                            status().unwrap_or_else(|| {
                                                                "未提交".to_owned()
                                                            })
                                                        }}
                                                    </span>
                                                    <button
                                                        class="btn"
                                                        on:click={
                                                            let task = task_for_submit.clone();
                                                            move |_| submit_task.set(Some(task.clone()))
                                                        }
                                                    >
                                                        "提交"
                                                    </button>
                                                </Show>
                                                <Show when=is_instructor>
                                                    <button
                                                        class="btn"
                                                        on:click=move |_| grading_task.set(Some(task_id))
                                                    >
                                                        "查看提交"
                                                    </button>
                                                    <button
                                                        class="btn btn--link"
                                                        on:click=move |_| remove_task(task_id)
                                                    >
                                                        "删除"
                                                    </button>
                                                </Show>
                                            </li>
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                            </ul>
                        }
                        .into_any()
                    })
                }}
            </Suspense>

            <Show when=move || submit_task.get().is_some()>
                {move || {
                    submit_task.get().map(|task| {
                        view! {
                            <SubmitDialog
                                task=task
                                on_done=Callback::new(move |()| {
                                    submit_task.set(None);
                                    my_submissions.refetch();
                                })
                            />
                        }
                    })
                }}
            </Show>

            <Show when=move || grading_task.get().is_some()>
                {move || {
                    grading_task.get().map(|task_id| {
                        view! {
                            <GradingPanel
                                task_id=task_id
                                on_close=Callback::new(move |()| grading_task.set(None))
                            />
                        }
                    })
                }}
            </Show>
        </div>
    }
}

/// Learner submission dialog: answer text plus an optional file attachment
/// that is uploaded as soon as it is picked.
#[component]
fn SubmitDialog(task: Task, on_done: Callback<()>) -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let answer = RwSignal::new(String::new());
    let file_url = RwSignal::new(None::<String>);
    let task_id = task.id;

    let on_file = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            let input = event_target::<web_sys::HtmlInputElement>(&ev);
            if let Some(file) = input.files().and_then(|files| files.get(0)) {
                leptos::task::spawn_local(async move {
                    match api::uploads::upload(&file).await {
                        Ok(stored) => {
                            file_url.set(Some(stored.url));
                            toast::success(toasts, "附件已上传");
                        }
                        Err(_) => toast::error(toasts, "附件上传失败"),
                    }
                });
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = ev;
        }
    };

    let submit = move |_| {
        let Some(student_id) = session.get().user_id() else {
            return;
        };
        let payload = SubmitPayload {
            student_id,
            answer_text: Some(answer.get()).filter(|v| !v.trim().is_empty()),
            file_url: file_url.get(),
        };
        if payload.answer_text.is_none() && payload.file_url.is_none() {
            toast::error(toasts, "请填写答案或上传附件");
            return;
        }
        leptos::task::spawn_local(async move {
            match api::tasks::submit(task_id, &payload).await {
                Ok(_) => {
                    toast::success(toasts, "提交成功");
                    on_done.run(());
                }
                Err(err) => {
                    toast::error(toasts, messages::task_error_message(&err, "提交失败"));
                }
            }
        });
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_done.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>{"提交："}{task.title.clone()}</h2>
                <p class="dialog__hint">
                    {"截止时间："}
                    {format_date(task.deadline.as_deref())}
                </p>
                <label class="field">
                    "答案"
                    <textarea
                        prop:value=move || answer.get()
                        on:input=move |ev| answer.set(event_target_value(&ev))
                    ></textarea>
                </label>
                <label class="field">
                    "附件"
                    <input type="file" on:change=on_file/>
                </label>
                <Show when=move || file_url.get().is_some()>
                    <p class="dialog__hint">"附件已就绪"</p>
                </Show>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_done.run(())>
                        "取消"
                    </button>
                    <button class="btn btn--primary" on:click=submit>
                        "提交"
                    </button>
                </div>
            </div>
        </div>
    }
}

/// Instructor view of a task's submissions with inline grading.
#[component]
fn GradingPanel(task_id: i64, on_close: Callback<()>) -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    let submissions = LocalResource::new(move || async move {
        loaded_or_toast(api::tasks::submissions(task_id).await, toasts, "加载提交")
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog dialog--wide" on:click=move |ev| ev.stop_propagation()>
                <h2>"提交列表"</h2>
                <Suspense fallback=move || view! { <p>"加载中…"</p> }>
                    {move || {
                        submissions.get().map(|list| {
                            if list.is_empty() {
                                return view! { <p class="empty">"暂无提交"</p> }.into_any();
                            }
                            view! {
                                <table class="data-table">
                                    <thead>
                                        <tr>
                                            <th>"学生"</th>
                                            <th>"提交时间"</th>
                                            <th>"答案"</th>
                                            <th>"状态"</th>
                                            <th>"评分"</th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        {list
                                            .iter()
                                            .map(|row| {
                                                let submission_id = row.submission.id;
                                                let score_input = RwSignal::new(
                                                    row.submission
                                                        .score
                                                        .map(|s| s.to_string())
                                                        .unwrap_or_default(),
                                                );
                                                let feedback_input = RwSignal::new(
                                                    row.submission
                                                        .feedback
                                                        .clone()
                                                        .unwrap_or_default(),
                                                );
                                                let grade = move |_| {
                                                    let Ok(score) =
                                                        score_input.get().trim().parse::<f64>()
                                                    else {
                                                        toast::error(toasts, "请输入有效分数");
                                                        return;
                                                    };
                                                    let payload = GradePayload {
                                                        score,
                                                        feedback: Some(feedback_input.get())
                                                            .filter(|v| !v.trim().is_empty()),
                                                        status: None,
                                                    };
                                                    leptos::task::spawn_local(async move {
                                                        match api::tasks::grade(
                                                            submission_id,
                                                            &payload,
                                                        )
                                                        .await
                                                        {
                                                            Ok(_) => {
                                                                toast::success(toasts, "已评分");
                                                                submissions.refetch();
                                                            }
                                                            Err(_) => toast::error(
                                                                toasts,
                                                                "评分失败，请稍后再试",
                                                            ),
                                                        }
                                                    });
                                                };
                                                view! {
                                                    <tr>
                                                        <td>
                                                            {row.student
                                                                .full_name
                                                                .clone()
                                                                .unwrap_or_else(|| {
                                                                    row.student.username.clone()
                                                                })}
                                                        </td>
                                                        <td>
                                                            {format_date(Some(
                                                                &row.submission.submitted_at,
                                                            ))}
                                                        </td>
                                                        <td class="data-table__answer">
                                                            {row.submission
                                                                .answer_text
                                                                .clone()
                                                                .unwrap_or_else(|| "-".to_owned())}
                                                            {row.submission.file_url.clone().map(
                                                                |href| view! {
                                                                    <a href=href target="_blank">
                                                                        "附件"
                                                                    </a>
                                                                },
                                                            )}
                                                        </td>
                                                        <td>
                                                            {format_submission_status(
                                                                row.submission.status,
                                                            )}
                                                        </td>
                                                        <td class="data-table__grade">
                                                            <input
                                                                type="number"
                                                                placeholder="分数"
                                                                prop:value=move || score_input.get()
                                                                on:input=move |ev| score_input
                                                                    .set(event_target_value(&ev))
                                                            />
                                                            <input
                                                                type="text"
                                                                placeholder="评语"
                                                                prop:value=move || feedback_input.get()
                                                                on:input=move |ev| feedback_input
                                                                    .set(event_target_value(&ev))
                                                            />
                                                            <button class="btn" on:click=grade>
                                                                "评分"
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
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_close.run(())>
                        "关闭"
                    </button>
                </div>
            </div>
        </div>
    }
}
