//! Toast notifications
//!
//! The queue itself lives in [`NotificationQueue`]; this module renders it and
//! owns the auto-dismiss timers.

use leptos::prelude::*;

use crate::core::notification::{
    NOTIFICATION_EXIT_MS, Notification, NotificationQueue, QueuedNotification,
};

/// Notifications container component
/// Render once near the root of the page
#[component]
pub fn NotificationsContainer(notifications: NotificationManager) -> impl IntoView {
    let queue = notifications.queue();

    view! {
        <div class="notification-stack" aria-live="polite">
            <For
                each=move || queue.with(|q| q.iter().map(|item| item.id).collect::<Vec<_>>())
                key=|id| *id
                children=move |id| {
                    view! { <NotificationToast id=id notifications=notifications /> }
                }
            />
        </div>
    }
}

#[component]
fn NotificationToast(id: u64, notifications: NotificationManager) -> impl IntoView {
    let queue = notifications.queue();
    let item = move || queue.with(|q| q.iter().find(|n| n.id == id).cloned());
    let Some(QueuedNotification { notification, .. }) = item() else {
        return ().into_any();
    };

    let leaving = move || item().map(|n| n.leaving).unwrap_or(true);
    let kind = notification.kind;
    let style = move || {
        let offset = if leaving() { "translateX(400px)" } else { "translateX(0)" };
        format!(
            "border-left: 4px solid {}; transform: {};",
            kind.border_color(),
            offset
        )
    };

    view! {
        <div class=format!("notification notification-{kind}") role="status" style=style>
            <div class="notification-content">
                <span class="notification-message">{notification.message.clone()}</span>
                <button
                    class="notification-close"
                    aria-label="Close notification"
                    on:click=move |_| notifications.dismiss(id)
                >
                    "\u{d7}"
                </button>
            </div>
        </div>
    }
    .into_any()
}

/// Handle to the page's notification queue
#[derive(Clone, Copy)]
pub struct NotificationManager {
    queue: RwSignal<NotificationQueue>,
}

impl NotificationManager {
    pub fn new() -> Self {
        Self {
            queue: RwSignal::new(NotificationQueue::new()),
        }
    }

    pub fn queue(&self) -> RwSignal<NotificationQueue> {
        self.queue
    }

    /// Show a notification; it dismisses itself unless sticky
    pub fn notify(&self, notification: Notification) -> u64 {
        let dismiss_after = notification.auto_dismiss_ms();
        let mut id = 0;
        self.queue.update(|q| id = q.push(notification));

        if let Some(ms) = dismiss_after {
            self.dismiss_later(id, ms);
        }
        id
    }

    /// Slide the toast out, then remove it
    pub fn dismiss(&self, id: u64) {
        let mut started = false;
        self.queue.update(|q| started = q.begin_dismiss(id));
        if !started {
            return;
        }

        #[cfg(not(feature = "ssr"))]
        {
            let queue = self.queue;
            leptos::task::spawn_local(async move {
                crate::core::tasks::sleep_ms(NOTIFICATION_EXIT_MS).await;
                queue.update(|q| {
                    q.remove(id);
                });
            });
        }

        #[cfg(feature = "ssr")]
        {
            let _ = NOTIFICATION_EXIT_MS;
            self.queue.update(|q| {
                q.remove(id);
            });
        }
    }

    #[cfg(not(feature = "ssr"))]
    fn dismiss_later(&self, id: u64, ms: u32) {
        let manager = *self;
        leptos::task::spawn_local(async move {
            crate::core::tasks::sleep_ms(ms).await;
            manager.dismiss(id);
        });
    }

    // No timers while rendering on the server
    #[cfg(feature = "ssr")]
    fn dismiss_later(&self, _id: u64, _ms: u32) {}
}

impl Default for NotificationManager {
    fn default() -> Self {
        Self::new()
    }
}
