//! Toast notifications.
//!
//! A signal-backed stack of transient messages. Each toast removes itself
//! after a fixed interval; the viewport renders whatever is live.

use std::time::Duration;

use dioxus::prelude::*;
use tokio::time::sleep;

/// How long a toast stays on screen.
pub const TOAST_DURATION: Duration = Duration::from_secs(4);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    fn class(&self) -> &'static str {
        match self {
            ToastKind::Success => "toast toast-success",
            ToastKind::Error => "toast toast-error",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// Handle to the toast stack. `Copy` so event handlers and spawned tasks can
/// capture it freely.
#[derive(Clone, Copy, PartialEq)]
pub struct ToastStack {
    toasts: Signal<Vec<Toast>>,
    next_id: Signal<u64>,
}

impl ToastStack {
    pub fn new() -> Self {
        Self {
            toasts: Signal::new(Vec::new()),
            next_id: Signal::new(0),
        }
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(ToastKind::Success, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(ToastKind::Error, message.into());
    }

    fn push(&self, kind: ToastKind, message: String) {
        let mut toasts = self.toasts;
        let mut next_id = self.next_id;
        let id = *next_id.peek();
        next_id.set(id + 1);
        tracing::debug!(%message, "toast shown");
        toasts.write().push(Toast { id, kind, message });

        // Auto-dismiss after the display interval
        spawn(async move {
            sleep(TOAST_DURATION).await;
            toasts.write().retain(|t| t.id != id);
        });
    }

    pub fn dismiss(&self, id: u64) {
        let mut toasts = self.toasts;
        toasts.write().retain(|t| t.id != id);
    }

    pub fn live(&self) -> Vec<Toast> {
        self.toasts.read().clone()
    }
}

impl Default for ToastStack {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders the live toasts in a fixed corner stack.
#[component]
pub fn ToastViewport(stack: ToastStack) -> Element {
    let toasts = stack.live();

    rsx! {
        div { class: "toast-viewport",
            for toast in toasts {
                div {
                    key: "{toast.id}",
                    class: toast.kind.class(),
                    onclick: move |_| stack.dismiss(toast.id),
                    "{toast.message}"
                }
            }
        }
    }
}
