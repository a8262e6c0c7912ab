//! Learner's enrollment list.

use leptos::prelude::*;

use crate::net::api;
use crate::net::types::EnrollmentStatus;
use crate::pages::loaded_or_toast;
use crate::state::session::Session;
use crate::state::toast::{self, ToastState};
use crate::util::format::{format_date, format_enrollment_status};

#[component]
pub fn EnrollmentsPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let enrollments = LocalResource::new(move || {
        let student_id = session.get().user_id();
        async move {
            match student_id {
                Some(id) => loaded_or_toast(
                    api::enrollments::my_enrollments(id).await,
                    toasts,
                    "加载选课",
                ),
                None => Vec::new(),
            }
        }
    });

    let drop = move |course_id: i64| {
        let Some(student_id) = session.get().user_id() else {
            return;
        };
        leptos::task::spawn_local(async move {
            match api::enrollments::drop(course_id, student_id).await {
                Ok(_) => {
                    toast::success(toasts, "已退课");
                    enrollments.refetch();
                }
                Err(_) => toast::error(toasts, "退课失败，请稍后再试"),
            }
        });
    };

    view! {
        <div class="enrollments-page">
            <header class="page-header">
                <h1>"我的选课"</h1>
            </header>
            <Suspense fallback=move || view! { <p>"加载中…"</p> }>
                {move || {
                    enrollments.get().map(|list| {
                        if list.is_empty() {
                            view! {
                                <p class="empty">
                                    "还没有选课，去"
                                    <a href="/courses">"课程广场"</a>
                                    "看看"
                                </p>
                            }
                                .into_any()
                        } else {
                            view! {
                                <table class="data-table">
                                    <thead>
                                        <tr>
                                            <th>"课程"</th>
                                            <th>"状态"</th>
                                            <th>"选课时间"</th>
                                            <th>"操作"</th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        {list
                                            .iter()
                                            .map(|e| {
                                                let course_id = e.enrollment.course_id;
                                                let active = e.enrollment.status
                                                    == EnrollmentStatus::Active;
                                                view! {
                                                    <tr>
                                                        <td>
                                                            <a href=format!("/courses/{course_id}")>
                                                                {e.course.title.clone()}
                                                            </a>
                                                        </td>
                                                        <td>
                                                            {format_enrollment_status(
                                                                e.enrollment.status,
                                                            )}
                                                        </td>
                                                        <td>
                                                            {format_date(Some(
                                                                &e.enrollment.enrolled_at,
                                                            ))}
                                                        </td>
                                                        <td>
                                                            <Show when=move || active>
                                                                <button
                                                                    class="btn btn--link"
                                                                    on:click=move |_| drop(course_id)
                                                                >
                                                                    "退课"
                                                                </button>
                                                            </Show>
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
        </div>
    }
}
