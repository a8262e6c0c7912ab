//! Registration page. Admin accounts are provisioned by an administrator,
//! so only the learner/instructor roles are offered here.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::api::auth::RegisterPayload;
use crate::routes::Role;
use crate::state::session::{self, Session};
use crate::state::toast::{self, ToastState};

#[component]
pub fn RegisterPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let full_name = RwSignal::new(String::new());
    let role = RwSignal::new(Role::Learner);

    let submit = move |_| {
        let payload = RegisterPayload {
            username: username.get().trim().to_owned(),
            password: password.get(),
            email: Some(email.get().trim().to_owned()).filter(|v| !v.is_empty()),
            full_name: Some(full_name.get().trim().to_owned()).filter(|v| !v.is_empty()),
            role_id: role.get().id(),
        };
        if payload.username.is_empty() || payload.password.is_empty() {
            toast::error(toasts, "请输入用户名和密码");
            return;
        }
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            if session::register(session, toasts, &payload).await {
                navigate("/login", NavigateOptions::default());
            }
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"注册账号"</h1>
                <label class="field">
                    "用户名"
                    <input
                        type="text"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                </label>
                <label class="field">
                    "密码"
                    <input
                        type="password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </label>
                <label class="field">
                    "邮箱（选填）"
                    <input
                        type="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </label>
                <label class="field">
                    "姓名（选填）"
                    <input
                        type="text"
                        prop:value=move || full_name.get()
                        on:input=move |ev| full_name.set(event_target_value(&ev))
                    />
                </label>
                <label class="field">
                    "身份"
                    <select on:change=move |ev| {
                        role.set(match event_target_value(&ev).as_str() {
                            "2" => Role::Instructor,
                            _ => Role::Learner,
                        });
                    }>
                        <option value="1" selected=move || role.get() == Role::Learner>
                            "学生"
                        </option>
                        <option value="2" selected=move || role.get() == Role::Instructor>
                            "教师"
                        </option>
                    </select>
                </label>
                <button
                    class="btn btn--primary"
                    prop:disabled=move || session.get().loading
                    on:click=submit
                >
                    "注册"
                </button>
                <div class="auth-card__links">
                    <a href="/login">"已有账号？去登录"</a>
                </div>
            </div>
        </div>
    }
}
