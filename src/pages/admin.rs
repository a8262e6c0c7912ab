//! Administrator user management.

use leptos::prelude::*;

use crate::net::api;
use crate::net::api::admin::{AdminUserCreate, AdminUserUpdate};
use crate::pages::loaded_or_toast;
use crate::routes::Role;
use crate::state::toast::{self, ToastState};
use crate::util::format::{format_date, format_role};
use crate::util::messages;

#[component]
pub fn AdminPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    let role_filter = RwSignal::new(None::<i64>);

    let users = LocalResource::new(move || {
        let filter = role_filter.get();
        async move { loaded_or_toast(api::admin::list_users(filter).await, toasts, "加载用户") }
    });

    let show_create = RwSignal::new(false);
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let full_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let new_role = RwSignal::new(Role::Learner.id());

    let open_create = move |_| {
        username.set(String::new());
        password.set(String::new());
        full_name.set(String::new());
        email.set(String::new());
        new_role.set(Role::Learner.id());
        show_create.set(true);
    };

    let create = move |_| {
        let payload = AdminUserCreate {
            username: username.get().trim().to_owned(),
            password: password.get(),
            role_id: new_role.get(),
            full_name: Some(full_name.get().trim().to_owned()).filter(|v| !v.is_empty()),
            email: Some(email.get().trim().to_owned()).filter(|v| !v.is_empty()),
            phone: None,
            avatar_url: None,
            is_active: None,
        };
        if payload.username.is_empty() || payload.password.is_empty() {
            toast::error(toasts, "请填写用户名和密码");
            return;
        }
        leptos::task::spawn_local(async move {
            match api::admin::create_user(&payload).await {
                Ok(_) => {
                    toast::success(toasts, "用户已创建");
                    show_create.set(false);
                    users.refetch();
                }
                Err(err) => {
                    toast::error(toasts, messages::auth_error_message(&err, "创建失败"));
                }
            }
        });
    };

    let toggle_active = move |user_id: i64, active: bool| {
        leptos::task::spawn_local(async move {
            let payload = AdminUserUpdate {
                is_active: Some(!active),
                ..AdminUserUpdate::default()
            };
            match api::admin::update_user(user_id, &payload).await {
                Ok(_) => {
                    toast::success(toasts, if active { "账号已停用" } else { "账号已启用" });
                    users.refetch();
                }
                Err(_) => toast::error(toasts, "操作失败，请稍后再试"),
            }
        });
    };

    let remove = move |user_id: i64| {
        leptos::task::spawn_local(async move {
            match api::admin::delete_user(user_id).await {
                Ok(_) => {
                    toast::success(toasts, "用户已删除");
                    users.refetch();
                }
                Err(err) => {
                    toast::error(toasts, messages::auth_error_message(&err, "删除失败"));
                }
            }
        });
    };

    view! {
        <div class="admin-page">
            <header class="page-header">
                <h1>"用户管理"</h1>
                <div class="admin-page__controls">
                    <select on:change=move |ev| {
                        role_filter.set(event_target_value(&ev).parse::<i64>().ok());
                    }>
                        <option value="">"全部角色"</option>
                        <option value="1">"学生"</option>
                        <option value="2">"教师"</option>
                        <option value="3">"管理员"</option>
                    </select>
                    <button class="btn btn--primary" on:click=open_create>
                        "+ 新建用户"
                    </button>
                </div>
            </header>

            <Suspense fallback=move || view! { <p>"加载中…"</p> }>
                {move || {
                    users.get().map(|list| {
                        if list.is_empty() {
                            return view! { <p class="empty">"暂无用户"</p> }.into_any();
                        }
                        view! {
                            <table class="data-table">
                                <thead>
                                    <tr>
                                        <th>"用户名"</th>
                                        <th>"姓名"</th>
                                        <th>"角色"</th>
                                        <th>"状态"</th>
                                        <th>"注册时间"</th>
                                        <th>"操作"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {list
                                        .iter()
                                        .map(|u| {
                                            let id = u.id;
                                            let active = u.is_active;
                                            view! {
                                                <tr>
                                                    <td>{u.username.clone()}</td>
                                                    <td>
                                                        {u.full_name
                                                            .clone()
                                                            .unwrap_or_else(|| "-".to_owned())}
                                                    </td>
                                                    <td>{format_role(Some(u.role_id))}</td>
                                                    <td>{if active { "正常" } else { "已停用" }}</td>
                                                    <td>{format_date(Some(&u.created_at))}</td>
                                                    <td>
                                                        <button
                                                            class="btn btn--link"
                                                            on:click=move |_| toggle_active(id, active)
                                                        >
                                                            {if active { "停用" } else { "启用" }}
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

            <Show when=move || show_create.get()>
                <div class="dialog-backdrop" on:click=move |_| show_create.set(false)>
                    <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                        <h2>"新建用户"</h2>
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
                            "角色"
                            <select on:change=move |ev| {
                                if let Ok(id) = event_target_value(&ev).parse::<i64>() {
                                    new_role.set(id);
                                }
                            }>
                                <option value="1">"学生"</option>
                                <option value="2">"教师"</option>
                                <option value="3">"管理员"</option>
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
