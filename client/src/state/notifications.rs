//! Toast notification queue.
//!
//! DESIGN
//! ======
//! Notifications are plain data pushed into a context-provided queue; the
//! `NotificationStack` component renders them and schedules auto-dismissal.
//! Success toasts expire on their own, error toasts stay until dismissed.

#[cfg(test)]
#[path = "notifications_test.rs"]
mod notifications_test;

use uuid::Uuid;

use crate::net::api::ApiError;

/// How long a success toast stays on screen.
pub const SUCCESS_DISMISS_MS: u32 = 4_500;

/// Title used for every failed request.
pub const FAILURE_TITLE: &str = "There was an issue";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

/// A single toast.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub id: Uuid,
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
}

impl Notification {
    pub fn success(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind: NotificationKind::Success,
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind: NotificationKind::Error,
            title: title.into(),
            message: message.into(),
        }
    }

    /// Error toast for a failed API call, carrying the backend's
    /// `{message} [{status}] [{error}]` text.
    pub fn api_failure(err: &ApiError) -> Self {
        Self::error(FAILURE_TITLE, err.notification_message())
    }

    /// Milliseconds until this toast removes itself, if ever.
    pub fn auto_dismiss_ms(&self) -> Option<u32> {
        match self.kind {
            NotificationKind::Success => Some(SUCCESS_DISMISS_MS),
            NotificationKind::Error => None,
        }
    }
}

pub fn student_deleted(id: i64) -> Notification {
    Notification::success("Student deleted", format!("Student with id - {id} was deleted"))
}

pub fn student_changed(id: i64) -> Notification {
    Notification::success("Student changed", format!("Student with id - {id} was changed"))
}

pub fn student_added(name: &str) -> Notification {
    Notification::success("Student successfully added", format!("{name} was added to the system"))
}

/// Visible toasts, oldest first.
#[derive(Clone, Debug, Default)]
pub struct NotificationsState {
    pub items: Vec<Notification>,
}

impl NotificationsState {
    /// Queue a toast and return its id for later dismissal.
    pub fn push(&mut self, notification: Notification) -> Uuid {
        let id = notification.id;
        self.items.push(notification);
        id
    }

    /// Remove a toast. Returns `false` if it was already gone.
    pub fn dismiss(&mut self, id: Uuid) -> bool {
        let before = self.items.len();
        self.items.retain(|n| n.id != id);
        self.items.len() != before
    }
}
