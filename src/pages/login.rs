//! Login page with the password-reset dialog.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::api;
use crate::net::api::auth::PasswordResetConfirm;
use crate::state::session::{self, Session};
use crate::state::toast::{self, ToastState};
use crate::util::messages;

/// Login page — exchanges credentials for a session and lands on the
/// dashboard.
#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let show_reset = RwSignal::new(false);

    let submit = Callback::new(move |()| {
        let name = username.get().trim().to_owned();
        let pass = password.get();
        if name.is_empty() || pass.is_empty() {
            toast::error(toasts, "请输入账号和密码");
            return;
        }
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            if session::login(session, toasts, &name, &pass).await {
                navigate("/", NavigateOptions::default());
            }
        });
    });

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"ClassHub"</h1>
                <p class="auth-card__subtitle">"课程管理平台"</p>
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
                        on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                            if ev.key() == "Enter" {
                                ev.prevent_default();
                                submit.run(());
                            }
                        }
                    />
                </label>
                <button
                    class="btn btn--primary"
                    prop:disabled=move || session.get().loading
                    on:click=move |_| submit.run(())
                >
                    {move || if session.get().loading { "登录中…" } else { "登录" }}
                </button>
                <div class="auth-card__links">
                    <a href="/register">"注册账号"</a>
                    <button class="btn btn--link" on:click=move |_| show_reset.set(true)>
                        "忘记密码"
                    </button>
                </div>
            </div>

            <Show when=move || show_reset.get()>
                <PasswordResetDialog on_close=Callback::new(move |()| show_reset.set(false))/>
            </Show>
        </div>
    }
}

/// Two-step password reset: request a code by email, then confirm with the
/// code and the new password.
#[component]
fn PasswordResetDialog(on_close: Callback<()>) -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    let email = RwSignal::new(String::new());
    let code = RwSignal::new(String::new());
    let new_password = RwSignal::new(String::new());
    let code_sent = RwSignal::new(false);

    let request_code = move |_| {
        let address = email.get().trim().to_owned();
        if address.is_empty() {
            toast::error(toasts, "请输入邮箱");
            return;
        }
        leptos::task::spawn_local(async move {
            match api::auth::request_password_reset(&address).await {
                Ok(_) => {
                    code_sent.set(true);
                    toast::success(toasts, "验证码已发送，请查收邮件");
                }
                Err(err) => {
                    toast::error(toasts, messages::auth_error_message(&err, "验证码发送失败"));
                }
            }
        });
    };

    let confirm = move |_| {
        let payload = PasswordResetConfirm {
            email: email.get().trim().to_owned(),
            code: code.get().trim().to_owned(),
            new_password: new_password.get(),
        };
        if payload.code.is_empty() || payload.new_password.is_empty() {
            toast::error(toasts, "请输入验证码和新密码");
            return;
        }
        leptos::task::spawn_local(async move {
            match api::auth::confirm_password_reset(&payload).await {
                Ok(_) => {
                    toast::success(toasts, "密码已重置，请使用新密码登录");
                    on_close.run(());
                }
                Err(err) => {
                    toast::error(toasts, messages::auth_error_message(&err, "重置失败"));
                }
            }
        });
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"重置密码"</h2>
                <label class="field">
                    "邮箱"
                    <input
                        type="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </label>
                <button class="btn" on:click=request_code>
                    {move || if code_sent.get() { "重新发送验证码" } else { "发送验证码" }}
                </button>
                <Show when=move || code_sent.get()>
                    <label class="field">
                        "验证码"
                        <input
                            type="text"
                            prop:value=move || code.get()
                            on:input=move |ev| code.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="field">
                        "新密码"
                        <input
                            type="password"
                            prop:value=move || new_password.get()
                            on:input=move |ev| new_password.set(event_target_value(&ev))
                        />
                    </label>
                    <button class="btn btn--primary" on:click=confirm>
                        "确认重置"
                    </button>
                </Show>
                <button class="btn btn--link" on:click=move |_| on_close.run(())>
                    "返回登录"
                </button>
            </div>
        </div>
    }
}
