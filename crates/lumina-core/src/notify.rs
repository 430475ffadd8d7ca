//! Notification seam consumed by the submission controller.
//!
//! The landing page surfaces these as toasts; headless contexts log them.

pub trait Notifier {
    fn notify_success(&self, message: &str);
    fn notify_error(&self, message: &str);
}

/// Notifier that routes through `tracing` when no toast surface is
/// mounted (tests, headless runs).
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify_success(&self, message: &str) {
        tracing::info!(%message, "signup notification");
    }

    fn notify_error(&self, message: &str) {
        tracing::warn!(%message, "signup notification");
    }
}
