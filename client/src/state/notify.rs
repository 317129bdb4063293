//! Transient on-screen notifications.
//!
//! At most one notification is visible. Showing a new one replaces the
//! current one, and each auto-dismiss timer only removes the notification it
//! was scheduled for.

#[cfg(test)]
#[path = "notify_test.rs"]
mod notify_test;

use leptos::prelude::*;

use crate::util::delay;

/// How long a notification stays on screen.
pub const AUTO_DISMISS_MS: u32 = 4000;

/// Visual category of a notification.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NotificationKind {
    #[default]
    Success,
    Error,
    Info,
    Warning,
}

impl NotificationKind {
    /// Font Awesome icon class for this kind.
    #[must_use]
    pub fn icon_class(self) -> &'static str {
        match self {
            Self::Success => "fas fa-check-circle",
            Self::Error => "fas fa-exclamation-circle",
            Self::Info => "fas fa-info-circle",
            Self::Warning => "fas fa-exclamation-triangle",
        }
    }

    /// CSS modifier class.
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Info => "info",
            Self::Warning => "warning",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub id: u64,
    pub kind: NotificationKind,
    pub message: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NotificationState {
    pub current: Option<Notification>,
    next_id: u64,
}

impl NotificationState {
    /// Replace the visible notification and return its id.
    pub fn show(&mut self, kind: NotificationKind, message: impl Into<String>) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.current = Some(Notification { id, kind, message: message.into() });
        id
    }

    /// Remove the notification with `id` if it is still the visible one.
    pub fn dismiss(&mut self, id: u64) {
        if self.current.as_ref().is_some_and(|n| n.id == id) {
            self.current = None;
        }
    }
}

/// Show a notification and schedule its automatic dismissal.
pub fn notify(state: RwSignal<NotificationState>, kind: NotificationKind, message: impl Into<String>) {
    let message = message.into();
    let mut id = 0;
    state.update(|s| id = s.show(kind, message));
    delay::after(AUTO_DISMISS_MS, move || {
        state.try_update(|s| s.dismiss(id));
    });
}
