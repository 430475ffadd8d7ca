//! Signal-backed app state shared via Dioxus context.

use dioxus::prelude::*;

use lumina_core::{FormInput, JoinCounter, Notifier, SignupView};
use lumina_ui::ToastStack;

/// Shared page state provided via Dioxus context.
#[derive(Clone, Copy)]
pub struct WaitlistContext {
    /// What the page is showing: form or success.
    pub view: Signal<SignupView>,
    /// Live form field values.
    pub form: Signal<FormInput>,
    /// Cosmetic join counter for the social-proof line.
    pub counter: Signal<JoinCounter>,
    pub toasts: ToastStack,
}

impl WaitlistContext {
    /// Build fresh state. Must run inside a component (signals need the
    /// Dioxus runtime).
    pub fn new() -> Self {
        Self {
            view: Signal::new(SignupView::new()),
            form: Signal::new(FormInput::default()),
            counter: Signal::new(JoinCounter::new()),
            toasts: ToastStack::new(),
        }
    }
}

/// Bridges the core notifier seam onto the toast stack.
#[derive(Clone, Copy)]
pub struct ToastNotifier(pub ToastStack);

impl Notifier for ToastNotifier {
    fn notify_success(&self, message: &str) {
        self.0.success(message);
    }

    fn notify_error(&self, message: &str) {
        self.0.error(message);
    }
}
