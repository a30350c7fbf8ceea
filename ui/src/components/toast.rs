//! Transient notifications, used for invalid numeric input. The shell
//! provides the toast list as a context signal and mounts [`ToastHost`] once.

use std::sync::atomic::{AtomicU64, Ordering};

use dioxus::prelude::*;

use crate::core::timing;

const DISMISS_AFTER_MS: u64 = 4_000;

static NEXT_TOAST_ID: AtomicU64 = AtomicU64::new(0);

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
}

/// The shared toast list provided by the shell.
pub fn use_toasts() -> Signal<Vec<Toast>> {
    use_context::<Signal<Vec<Toast>>>()
}

/// Show a transient message; it dismisses itself after a few seconds.
pub fn push_toast(mut toasts: Signal<Vec<Toast>>, message: impl Into<String>) {
    let id = NEXT_TOAST_ID.fetch_add(1, Ordering::Relaxed);
    toasts.with_mut(|list| {
        list.push(Toast {
            id,
            message: message.into(),
        })
    });

    spawn(async move {
        timing::sleep_ms(DISMISS_AFTER_MS).await;
        toasts.with_mut(|list| list.retain(|toast| toast.id != id));
    });
}

#[component]
pub fn ToastHost() -> Element {
    let toasts = use_toasts();
    let list = toasts();

    rsx! {
        div { class: "toast-host", aria_live: "polite",
            for toast in list.iter() {
                div { key: "{toast.id}", class: "toast", "{toast.message}" }
            }
        }
    }
}
