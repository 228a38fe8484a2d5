//! Toast Notifications
//!
//! Stacking, auto-dismissing messages backing the `Notifier` channel.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use person_client::{Notice, NoticeLevel, Notifier};

/// How long a toast stays on screen unless dismissed
pub const TOAST_DURATION_MS: u32 = 5_000;

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub level: NoticeLevel,
    pub message: String,
}

#[derive(Clone, Copy)]
pub struct ToastQueue {
    toasts: RwSignal<Vec<Toast>>,
    next_id: StoredValue<u64>,
}

impl ToastQueue {
    pub fn new() -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(0),
        }
    }

    /// Current toasts, oldest first (tracked)
    pub fn toasts(&self) -> Vec<Toast> {
        self.toasts.get()
    }

    pub fn push(&self, notice: Notice) -> u64 {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);
        self.toasts.update(|toasts| {
            toasts.push(Toast {
                id,
                level: notice.level,
                message: notice.message,
            })
        });

        let queue = *self;
        spawn_local(async move {
            TimeoutFuture::new(TOAST_DURATION_MS).await;
            queue.dismiss(id);
        });
        id
    }

    pub fn dismiss(&self, id: u64) {
        self.toasts.update(|toasts| toasts.retain(|t| t.id != id));
    }
}

impl Notifier for ToastQueue {
    fn notify(&self, notice: Notice) {
        match notice.level {
            NoticeLevel::Success => log::info!("[Toast] {}", notice.message),
            NoticeLevel::Warning | NoticeLevel::Error => log::warn!("[Toast] {}", notice.message),
        }
        self.push(notice);
    }
}
