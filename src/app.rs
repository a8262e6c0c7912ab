//! Root application component: context providers, routing, and the
//! navigation guard.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::NavigateOptions;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::hooks::use_navigate;
use leptos_router::{ParamSegment, StaticSegment};

use crate::components::layout::Shell;
use crate::components::toast::ToastHost;
use crate::pages::admin::AdminPage;
use crate::pages::admin_announcements::AdminAnnouncementsPage;
use crate::pages::announcements::AnnouncementsPage;
use crate::pages::course_detail::CourseDetailPage;
use crate::pages::courses::CoursesPage;
use crate::pages::dashboard::DashboardPage;
use crate::pages::enrollments::EnrollmentsPage;
use crate::pages::login::LoginPage;
use crate::pages::not_found::NotFoundPage;
use crate::pages::profile::ProfilePage;
use crate::pages::register::RegisterPage;
use crate::pages::scores::ScoresPage;
use crate::pages::tasks::TasksPage;
use crate::pages::teaching::TeachingPage;
use crate::routes::{self, GuardOutcome, RouteAccess};
use crate::state::session::{self, Session};
use crate::state::toast::ToastState;
use crate::util::storage;

/// Navigation guard. Gates every route transition: waits for the session
/// to hydrate, then either renders the page or redirects according to
/// [`routes::decide`]. No side effects beyond the implicit `initialize`.
#[component]
pub fn Guarded(access: &'static RouteAccess, children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();

    // Resolve the persisted token once; the synchronous check-then-set in
    // `begin_hydration` makes re-entry from other route mounts a no-op.
    Effect::new(move || {
        leptos::task::spawn_local(async move {
            session::initialize(session).await;
        });
    });

    // No decision until hydration resolves; rendering nothing in the
    // meantime beats flashing a page the guard is about to leave.
    let outcome = Memo::new(move |_| {
        let state = session.get();
        state.initialized.then(|| routes::decide(&state, access))
    });

    let navigate = use_navigate();
    Effect::new(move || match outcome.get() {
        Some(GuardOutcome::RedirectLogin) => navigate("/login", NavigateOptions::default()),
        Some(GuardOutcome::RedirectDashboard) => navigate("/", NavigateOptions::default()),
        Some(GuardOutcome::Allow) | None => {}
    });

    view! {
        <Show when=move || outcome.get() == Some(GuardOutcome::Allow)>
            {children()}
        </Show>
    }
}

/// Root application component.
///
/// Creates the session (token restored from durable storage) and toast
/// stores, provides them via context, and wires every route through the
/// navigation guard.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(Session::restore(storage::load_token()));
    let toasts = RwSignal::new(ToastState::default());
    provide_context(session);
    provide_context(toasts);

    view! {
        <Title text="ClassHub 课程管理平台"/>

        <Router>
            <ToastHost/>
            <Routes fallback=|| view! { <NotFoundPage/> }>
                <Route
                    path=StaticSegment("login")
                    view=|| view! { <Guarded access=&routes::LOGIN><LoginPage/></Guarded> }
                />
                <Route
                    path=StaticSegment("register")
                    view=|| view! { <Guarded access=&routes::REGISTER><RegisterPage/></Guarded> }
                />
                <Route
                    path=StaticSegment("")
                    view=|| view! {
                        <Guarded access=&routes::DASHBOARD><Shell><DashboardPage/></Shell></Guarded>
                    }
                />
                <Route
                    path=StaticSegment("courses")
                    view=|| view! {
                        <Guarded access=&routes::COURSES><Shell><CoursesPage/></Shell></Guarded>
                    }
                />
                <Route
                    path=(StaticSegment("courses"), ParamSegment("id"))
                    view=|| view! {
                        <Guarded access=&routes::COURSE_DETAIL>
                            <Shell><CourseDetailPage/></Shell>
                        </Guarded>
                    }
                />
                <Route
                    path=StaticSegment("enrollments")
                    view=|| view! {
                        <Guarded access=&routes::ENROLLMENTS>
                            <Shell><EnrollmentsPage/></Shell>
                        </Guarded>
                    }
                />
                <Route
                    path=StaticSegment("tasks")
                    view=|| view! {
                        <Guarded access=&routes::TASKS><Shell><TasksPage/></Shell></Guarded>
                    }
                />
                <Route
                    path=StaticSegment("scores")
                    view=|| view! {
                        <Guarded access=&routes::SCORES><Shell><ScoresPage/></Shell></Guarded>
                    }
                />
                <Route
                    path=StaticSegment("teaching")
                    view=|| view! {
                        <Guarded access=&routes::TEACHING><Shell><TeachingPage/></Shell></Guarded>
                    }
                />
                <Route
                    path=StaticSegment("announcements")
                    view=|| view! {
                        <Guarded access=&routes::ANNOUNCEMENTS>
                            <Shell><AnnouncementsPage/></Shell>
                        </Guarded>
                    }
                />
                <Route
                    path=StaticSegment("admin")
                    view=|| view! {
                        <Guarded access=&routes::ADMIN><Shell><AdminPage/></Shell></Guarded>
                    }
                />
                <Route
                    path=(StaticSegment("admin"), StaticSegment("announcements"))
                    view=|| view! {
                        <Guarded access=&routes::ADMIN_ANNOUNCEMENTS>
                            <Shell><AdminAnnouncementsPage/></Shell>
                        </Guarded>
                    }
                />
                <Route
                    path=StaticSegment("profile")
                    view=|| view! {
                        <Guarded access=&routes::PROFILE><Shell><ProfilePage/></Shell></Guarded>
                    }
                />
            </Routes>
        </Router>
    }
}
