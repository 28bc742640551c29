//! Toast container pinned to the corner of the viewport.
//!
//! SYSTEM CONTEXT
//! ==============
//! Any code holding the `NotificationsState` signal can call `notify`; this
//! component only renders the queue and handles manual dismissal.

use leptos::prelude::*;

use crate::state::notifications::{Notification, NotificationKind, NotificationsState};

/// Queue a toast and, for auto-dismissing kinds, schedule its removal.
pub fn notify(notifications: RwSignal<NotificationsState>, notification: Notification) {
    let dismiss_after = notification.auto_dismiss_ms();
    let id = notification.id;
    notifications.update(|s| {
        s.push(notification);
    });

    #[cfg(feature = "hydrate")]
    {
        if let Some(ms) = dismiss_after {
            gloo_timers::callback::Timeout::new(ms, move || {
                let _ = notifications.try_update(|s| s.dismiss(id));
            })
            .forget();
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (dismiss_after, id);
    }
}

/// Renders every queued toast, newest at the bottom.
#[component]
pub fn NotificationStack() -> impl IntoView {
    let notifications = expect_context::<RwSignal<NotificationsState>>();

    view! {
        <div class="notification-stack" role="status" aria-live="polite">
            <For
                each=move || notifications.get().items
                key=|n| n.id
                children=move |n| {
                    let id = n.id;
                    let is_error = n.kind == NotificationKind::Error;
                    view! {
                        <div
                            class="notification"
                            class:notification--success=!is_error
                            class:notification--error=is_error
                        >
                            <span class="notification__icon" aria-hidden="true">
                                {if is_error { "✕" } else { "✓" }}
                            </span>
                            <div class="notification__body">
                                <div class="notification__title">{n.title}</div>
                                <div class="notification__message">{n.message}</div>
                            </div>
                            <button
                                class="notification__close"
                                title="Dismiss"
                                aria-label="Dismiss notification"
                                on:click=move |_| {
                                    notifications.update(|s| {
                                        s.dismiss(id);
                                    });
                                }
                            >
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
