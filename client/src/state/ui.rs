//! Local UI chrome state: theme and transient notifications.
//!
//! DESIGN
//! ======
//! Keeps presentation concerns out of the sleep-log models so the theme and
//! toast stack can evolve independently of form and history data.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use sleeplog::Theme;

/// How long a notification stays on screen before auto-dismissal.
pub const NOTIFICATION_TTL_MS: u32 = 5_000;

/// Severity of a toast notification.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NotificationKind {
    #[default]
    Info,
    Success,
    Error,
}

impl NotificationKind {
    /// Alert modifier class (`error` renders as the `danger` palette).
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Info => "alert alert-info",
            Self::Success => "alert alert-success",
            Self::Error => "alert alert-danger",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub id: u64,
    pub message: String,
    pub kind: NotificationKind,
}

/// UI state shared through context as `RwSignal<UiState>`.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub theme: Theme,
    pub notifications: Vec<Notification>,
    next_notification_id: u64,
}

impl UiState {
    pub fn with_theme(theme: Theme) -> Self {
        Self {
            theme,
            ..Self::default()
        }
    }

    /// Queue a notification and return its id for later dismissal.
    pub fn notify(&mut self, message: impl Into<String>, kind: NotificationKind) -> u64 {
        self.next_notification_id += 1;
        let id = self.next_notification_id;
        self.notifications.push(Notification {
            id,
            message: message.into(),
            kind,
        });
        id
    }

    /// Remove a notification; unknown ids are ignored.
    pub fn dismiss(&mut self, id: u64) {
        self.notifications.retain(|n| n.id != id);
    }
}
