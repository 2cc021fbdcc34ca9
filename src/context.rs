//! Application Context
//!
//! Shared UI signals provided via Leptos Context API. Checklist data lives
//! in the store; this only carries the transient toast.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// How long a toast stays on screen
pub const TOAST_DURATION_MS: u32 = 2_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u32,
    pub kind: ToastKind,
    pub message: String,
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Toast currently shown, if any - read
    pub toast: ReadSignal<Option<Toast>>,
    /// Toast currently shown, if any - write
    set_toast: WriteSignal<Option<Toast>>,
}

impl AppContext {
    pub fn new(toast: (ReadSignal<Option<Toast>>, WriteSignal<Option<Toast>>)) -> Self {
        Self {
            toast: toast.0,
            set_toast: toast.1,
        }
    }

    pub fn notify_success(&self, message: impl Into<String>) {
        self.show(ToastKind::Success, message.into());
    }

    pub fn notify_error(&self, message: impl Into<String>) {
        self.show(ToastKind::Error, message.into());
    }

    /// Show a toast and clear it after `TOAST_DURATION_MS`, unless a newer
    /// toast replaced it in the meantime
    fn show(&self, kind: ToastKind, message: String) {
        let id = next_toast_id(self.toast.get_untracked().as_ref());
        self.set_toast.set(Some(Toast { id, kind, message }));

        let set_toast = self.set_toast;
        spawn_local(async move {
            TimeoutFuture::new(TOAST_DURATION_MS).await;
            set_toast.update(|current| {
                if current.as_ref().map(|t| t.id) == Some(id) {
                    *current = None;
                }
            });
        });
    }
}

fn next_toast_id(current: Option<&Toast>) -> u32 {
    current.map(|t| t.id.wrapping_add(1)).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_toast_id() {
        assert_eq!(next_toast_id(None), 0);
        let toast = Toast { id: 4, kind: ToastKind::Success, message: "x".to_string() };
        assert_eq!(next_toast_id(Some(&toast)), 5);
    }
}
