//! Transient operation feedback (the success/error banners).

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use leptos::prelude::{RwSignal, Update};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Error,
    Info,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub level: ToastLevel,
    pub text: String,
}

/// Queue of visible toasts; ids increase monotonically so dismissal is
/// unambiguous even for equal texts.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastState {
    next_id: u64,
    pub items: Vec<Toast>,
}

impl ToastState {
    pub fn push(&mut self, level: ToastLevel, text: impl Into<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push(Toast {
            id,
            level,
            text: text.into(),
        });
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|toast| toast.id != id);
    }
}

const AUTO_DISMISS_MS: u64 = 3000;

fn show(toasts: RwSignal<ToastState>, level: ToastLevel, text: impl Into<String>) {
    let mut id = 0;
    toasts.update(|t| id = t.push(level, text));
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(std::time::Duration::from_millis(AUTO_DISMISS_MS)).await;
            toasts.update(|t| t.dismiss(id));
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
    }
}

pub fn success(toasts: RwSignal<ToastState>, text: impl Into<String>) {
    show(toasts, ToastLevel::Success, text);
}

pub fn error(toasts: RwSignal<ToastState>, text: impl Into<String>) {
    show(toasts, ToastLevel::Error, text);
}

pub fn info(toasts: RwSignal<ToastState>, text: impl Into<String>) {
    show(toasts, ToastLevel::Info, text);
}
