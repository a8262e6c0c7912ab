//! Application shell: top bar, role-filtered navigation, page slot.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::routes::{self, RouteAccess};
use crate::state::session::{self, Session};
use crate::state::toast::ToastState;

struct NavItem {
    access: &'static RouteAccess,
    label: &'static str,
}

/// Menu entries, gated by the same descriptors the navigation guard uses.
static NAV: &[NavItem] = &[
    NavItem { access: &routes::DASHBOARD, label: "工作台" },
    NavItem { access: &routes::COURSES, label: "课程广场" },
    NavItem { access: &routes::ENROLLMENTS, label: "我的选课" },
    NavItem { access: &routes::TASKS, label: "任务中心" },
    NavItem { access: &routes::SCORES, label: "成绩" },
    NavItem { access: &routes::TEACHING, label: "我的教学" },
    NavItem { access: &routes::ANNOUNCEMENTS, label: "平台公告" },
    NavItem { access: &routes::ADMIN, label: "用户管理" },
    NavItem { access: &routes::ADMIN_ANNOUNCEMENTS, label: "公告管理" },
    NavItem { access: &routes::PROFILE, label: "个人信息" },
];

/// Shell around every authenticated page: brand, navigation for the
/// current role, user badge, and logout.
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();

    let links = move || {
        let state = session.get();
        NAV.iter()
            .filter(|item| match item.access.roles {
                None => true,
                Some(allowed) => state.role().is_some_and(|role| allowed.contains(&role)),
            })
            .map(|item| {
                view! {
                    <a class="shell__nav-link" href=item.access.path>
                        {item.label}
                    </a>
                }
            })
            .collect::<Vec<_>>()
    };

    let on_logout = move |_| {
        session::logout(session, toasts);
        navigate("/login", NavigateOptions::default());
    };

    view! {
        <div class="shell">
            <header class="shell__header">
                <a class="shell__brand" href="/">
                    "ClassHub"
                </a>
                <span class="shell__user">
                    {move || session.get().display_name()}
                    "（"
                    {move || session.get().role_label()}
                    "）"
                </span>
                <button class="btn" on:click=on_logout>
                    "退出登录"
                </button>
            </header>
            <div class="shell__body">
                <nav class="shell__nav">{links}</nav>
                <main class="shell__main">{children()}</main>
            </div>
        </div>
    }
}
