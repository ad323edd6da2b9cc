use super::*;

// =============================================================
// UiState defaults
// =============================================================

#[test]
fn ui_state_default_is_light_without_notifications() {
    let state = UiState::default();
    assert_eq!(state.theme, Theme::Light);
    assert!(state.notifications.is_empty());
}

#[test]
fn with_theme_sets_initial_theme() {
    assert_eq!(UiState::with_theme(Theme::Dark).theme, Theme::Dark);
}

// =============================================================
// Notifications
// =============================================================

#[test]
fn notify_assigns_increasing_ids() {
    let mut state = UiState::default();
    let a = state.notify("first", NotificationKind::Info);
    let b = state.notify("second", NotificationKind::Success);
    assert!(b > a);
    assert_eq!(state.notifications.len(), 2);
    assert_eq!(state.notifications[1].message, "second");
}

#[test]
fn dismiss_removes_only_matching_notification() {
    let mut state = UiState::default();
    let a = state.notify("keep", NotificationKind::Info);
    let b = state.notify("drop", NotificationKind::Error);
    state.dismiss(b);
    assert_eq!(state.notifications.len(), 1);
    assert_eq!(state.notifications[0].id, a);
}

#[test]
fn dismiss_unknown_id_is_noop() {
    let mut state = UiState::default();
    state.notify("keep", NotificationKind::Info);
    state.dismiss(999);
    assert_eq!(state.notifications.len(), 1);
}

#[test]
fn ids_are_not_reused_after_dismissal() {
    let mut state = UiState::default();
    let a = state.notify("one", NotificationKind::Info);
    state.dismiss(a);
    let b = state.notify("two", NotificationKind::Info);
    assert_ne!(a, b);
}

#[test]
fn notification_kind_css_classes() {
    assert_eq!(NotificationKind::Success.css_class(), "alert alert-success");
    assert_eq!(NotificationKind::Error.css_class(), "alert alert-danger");
    assert_eq!(NotificationKind::default().css_class(), "alert alert-info");
}
