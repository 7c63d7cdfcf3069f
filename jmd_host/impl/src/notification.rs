use jmd_host_contracts::notification::NotificationService;
use jmd_models::notification::{Notification, NotificationKind};

/// Writes notifications to stderr, one line each.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalNotificationService;

impl NotificationService for TerminalNotificationService {
    fn show(&self, notification: Notification) {
        match notification.kind {
            NotificationKind::Success => tracing::info!(text = %notification.text, "notification"),
            NotificationKind::Error => tracing::warn!(text = %notification.text, "notification"),
        }
        eprintln!("{notification}");
    }
}
