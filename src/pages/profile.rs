//! Personal profile: view and edit the signed-in user's details.

use leptos::prelude::*;

use crate::net::api;
use crate::net::api::users::UpdateProfilePayload;
use crate::state::session::{self, Session};
use crate::state::toast::{self, ToastState};
use crate::util::format::format_date;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let full_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let old_password = RwSignal::new(String::new());
    let new_password = RwSignal::new(String::new());
    let avatar_url = RwSignal::new(None::<String>);

    // Prefill the form from the stored profile once it is available.
    Effect::new(move |_| {
        if let Some(user) = session.get().user {
            full_name.set(user.full_name.unwrap_or_default());
            email.set(user.email.unwrap_or_default());
        }
    });

    let on_avatar = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            let input = event_target::<web_sys::HtmlInputElement>(&ev);
            if let Some(file) = input.files().and_then(|files| files.get(0)) {
                leptos::task::spawn_local(async move {
                    match api::uploads::upload(&file).await {
                        Ok(stored) => {
                            avatar_url.set(Some(stored.url));
                            toast::success(toasts, "头像已上传，保存后生效");
                        }
                        Err(_) => toast::error(toasts, "头像上传失败"),
                    }
                });
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = ev;
        }
    };

    let save = move |_| {
        let confirm = old_password.get();
        if confirm.is_empty() {
            toast::error(toasts, "请输入当前密码以确认修改");
            return;
        }
        let payload = UpdateProfilePayload {
            old_password: confirm,
            full_name: Some(full_name.get().trim().to_owned()).filter(|v| !v.is_empty()),
            email: Some(email.get().trim().to_owned()).filter(|v| !v.is_empty()),
            password: Some(new_password.get()).filter(|v| !v.is_empty()),
            avatar_url: avatar_url.get(),
        };
        leptos::task::spawn_local(async move {
            if session::update_profile(session, toasts, &payload).await {
                old_password.set(String::new());
                new_password.set(String::new());
                avatar_url.set(None);
            }
        });
    };

    let refresh = move |_| {
        leptos::task::spawn_local(async move {
            session::refresh_profile(session, toasts).await;
        });
    };

    view! {
        <div class="profile-page">
            <header class="page-header">
                <h1>"个人信息"</h1>
                <button class="btn" on:click=refresh>
                    "刷新"
                </button>
            </header>

            {move || {
                session.get().user.map(|user| {
                    view! {
                        <section class="profile-page__summary">
                            <img
                                class="profile-page__avatar"
                                src=user.avatar_url.clone().unwrap_or_else(|| {
                                    "/default-avatar.svg".to_owned()
                                })
                                alt="头像"
                            />
                            <dl>
                                <dt>"用户名"</dt>
                                <dd>{user.username.clone()}</dd>
                                <dt>"角色"</dt>
                                <dd>{session.get().role_label()}</dd>
                                <dt>"注册时间"</dt>
                                <dd>{format_date(Some(&user.created_at))}</dd>
                            </dl>
                        </section>
                    }
                })
            }}

            <section class="profile-page__form">
                <h2>"编辑资料"</h2>
                <label class="field">
                    "姓名"
                    <input
                        type="text"
                        prop:value=move || full_name.get()
                        on:input=move |ev| full_name.set(event_target_value(&ev))
                    />
                </label>
                <label class="field">
                    "邮箱"
                    <input
                        type="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </label>
                <label class="field">
                    "头像"
                    <input type="file" accept="image/*" on:change=on_avatar/>
                </label>
                <label class="field">
                    "新密码（留空则不修改）"
                    <input
                        type="password"
                        prop:value=move || new_password.get()
                        on:input=move |ev| new_password.set(event_target_value(&ev))
                    />
                </label>
                <label class="field">
                    "当前密码（必填）"
                    <input
                        type="password"
                        prop:value=move || old_password.get()
                        on:input=move |ev| old_password.set(event_target_value(&ev))
                    />
                </label>
                <div class="profile-page__actions">
                    <button
                        class="btn btn--primary"
                        disabled=move || session.get().loading
                        on:click=save
                    >
                        {move || if session.get().loading { "保存中…" } else { "保存修改" }}
                    </button>
                </div>
            </section>
        </div>
    }
}
