//! Toast Notifications
//!
//! Side-channel success/error notices, separate from list state. Each
//! operation outcome pushes exactly one toast; toasts dismiss themselves
//! after a short delay or on click.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Matches the auto-close delay the notices always used.
const DISMISS_MS: u32 = 2000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub title: String,
    pub detail: Option<String>,
}

/// Handle to the toast stack, provided via context.
#[derive(Clone, Copy)]
pub struct Toasts {
    list: RwSignal<Vec<Toast>>,
    next_id: StoredValue<u64>,
}

impl Toasts {
    pub fn list(&self) -> RwSignal<Vec<Toast>> {
        self.list
    }

    pub fn success(&self, title: impl Into<String>) {
        self.push(ToastKind::Success, title.into(), None);
    }

    pub fn error(&self, title: impl Into<String>, detail: impl Into<String>) {
        self.push(ToastKind::Error, title.into(), Some(detail.into()));
    }

    pub fn dismiss(&self, id: u64) {
        let _ = self.list.try_update(|toasts| toasts.retain(|t| t.id != id));
    }

    fn push(&self, kind: ToastKind, title: String, detail: Option<String>) {
        let id = self
            .next_id
            .try_update_value(|n| {
                *n += 1;
                *n
            })
            .unwrap_or(0);
        let _ = self.list.try_update(|toasts| {
            toasts.push(Toast {
                id,
                kind,
                title,
                detail,
            })
        });

        let stack = *self;
        spawn_local(async move {
            TimeoutFuture::new(DISMISS_MS).await;
            stack.dismiss(id);
        });
    }
}

pub fn provide_toasts() -> Toasts {
    let toasts = Toasts {
        list: RwSignal::new(Vec::new()),
        next_id: StoredValue::new(0),
    };
    provide_context(toasts);
    toasts
}

/// Get the toast stack from context.
pub fn use_toasts() -> Toasts {
    expect_context::<Toasts>()
}
