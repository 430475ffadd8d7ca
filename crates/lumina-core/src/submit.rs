//! Submission lifecycle state machine.
//!
//! The page is either showing the form or the success card. Representing
//! that as a tagged enum keeps `submitted && submitting` unrepresentable:
//! `Success` carries no loading flag at all.

use crate::error::{GatewayError, SignupError};
use crate::form::{FormInput, SignupPolicy};
use crate::gateway::SignupGateway;
use crate::notify::Notifier;
use crate::validate::{validate_email, validate_linkedin};

/// Toast copy emitted when a signup resolves successfully.
pub const SUCCESS_MESSAGE: &str = "Successfully joined the waitlist!";

/// What the page is currently showing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignupView {
    /// Editable form, possibly with an inline error or an in-flight
    /// submission.
    Form {
        error: Option<SignupError>,
        submitting: bool,
    },
    /// Terminal confirmation view. No transition leads back out.
    Success,
}

impl SignupView {
    pub fn new() -> Self {
        SignupView::Form { error: None, submitting: false }
    }

    pub fn is_submitted(&self) -> bool {
        matches!(self, SignupView::Success)
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self, SignupView::Form { submitting: true, .. })
    }

    pub fn error(&self) -> Option<&SignupError> {
        match self {
            SignupView::Form { error, .. } => error.as_ref(),
            SignupView::Success => None,
        }
    }

    /// Validate and enter the submitting state.
    ///
    /// Clears any previous error first. Returns `true` when the attempt
    /// should proceed to the gateway; on a validation failure the error is
    /// recorded inline and no submitting state is entered. A no-op once the
    /// view reached `Success`.
    pub fn begin_submit(&mut self, input: &FormInput, policy: &SignupPolicy) -> bool {
        if self.is_submitted() {
            return false;
        }

        if input.full_name.trim().is_empty() {
            *self = SignupView::Form { error: Some(SignupError::MissingName), submitting: false };
            return false;
        }
        if !validate_email(&input.email) {
            *self = SignupView::Form { error: Some(SignupError::InvalidEmail), submitting: false };
            return false;
        }
        if policy.require_linkedin && !validate_linkedin(&input.linkedin) {
            *self =
                SignupView::Form { error: Some(SignupError::InvalidLinkedIn), submitting: false };
            return false;
        }

        *self = SignupView::Form { error: None, submitting: true };
        true
    }

    /// Resolve an in-flight submission. Both arms leave the view with no
    /// submission in flight.
    pub fn finish_submit(&mut self, result: Result<(), GatewayError>) {
        match result {
            Ok(()) => *self = SignupView::Success,
            Err(e) => {
                *self = SignupView::Form {
                    error: Some(SignupError::SubmissionFailed(e)),
                    submitting: false,
                }
            }
        }
    }
}

impl Default for SignupView {
    fn default() -> Self {
        Self::new()
    }
}

/// Orchestrates validate → dispatch → resolve over a [`SignupView`].
///
/// The phases are split so callers that keep the view behind a reactive cell
/// can write state between them without holding a borrow across the await.
pub struct SignupController<G, N> {
    gateway: G,
    notifier: N,
    policy: SignupPolicy,
}

impl<G: SignupGateway, N: Notifier> SignupController<G, N> {
    pub fn new(gateway: G, notifier: N, policy: SignupPolicy) -> Self {
        Self { gateway, notifier, policy }
    }

    pub fn policy(&self) -> &SignupPolicy {
        &self.policy
    }

    /// Synchronous phase: clear the previous error and validate.
    ///
    /// Validation failures surface inline only, with no notification.
    pub fn begin(&self, input: &FormInput, view: &mut SignupView) -> bool {
        let accepted = view.begin_submit(input, &self.policy);
        if accepted {
            tracing::debug!(email = %input.email, "signup dispatched");
        } else if let Some(err) = view.error() {
            tracing::debug!(%err, "signup rejected by validation");
        }
        accepted
    }

    /// Asynchronous phase: run the gateway. Call only after [`Self::begin`]
    /// returned `true`.
    pub async fn dispatch(&self, input: &FormInput) -> Result<(), GatewayError> {
        self.gateway.submit(input).await
    }

    /// Resolution phase: apply the gateway result and emit the matching
    /// notification.
    pub fn finish(&self, result: Result<(), GatewayError>, view: &mut SignupView) {
        match &result {
            Ok(()) => self.notifier.notify_success(SUCCESS_MESSAGE),
            Err(e) => {
                tracing::warn!(error = %e, "signup failed");
                self.notifier.notify_error(&SignupError::SubmissionFailed(e.clone()).to_string());
            }
        }
        view.finish_submit(result);
    }

    /// Full flow for callers that own the view directly.
    pub async fn submit(&self, input: &FormInput, view: &mut SignupView) {
        if !self.begin(input, view) {
            return;
        }
        let result = self.dispatch(input).await;
        self.finish(result, view);
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;
    use crate::gateway::{SimulatedGateway, SUBMIT_DELAY};

    /// Gateway that fails with a fixed message.
    struct FailingGateway;

    #[async_trait]
    impl SignupGateway for FailingGateway {
        async fn submit(&self, _entry: &FormInput) -> Result<(), GatewayError> {
            Err(GatewayError::new("connection reset"))
        }
    }

    /// Records every notification for assertions.
    #[derive(Default)]
    struct RecordingNotifier {
        successes: Mutex<Vec<String>>,
        errors: Mutex<Vec<String>>,
    }

    impl Notifier for &RecordingNotifier {
        fn notify_success(&self, message: &str) {
            self.successes.lock().unwrap().push(message.to_string());
        }

        fn notify_error(&self, message: &str) {
            self.errors.lock().unwrap().push(message.to_string());
        }
    }

    fn valid_input() -> FormInput {
        FormInput {
            full_name: "Ada Lovelace".into(),
            email: "ada@lumina.dev".into(),
            startup_name: "Analytical Engines".into(),
            linkedin: String::new(),
        }
    }

    #[test]
    fn test_empty_name_aborts_without_loading() {
        let mut view = SignupView::new();
        let input = FormInput { full_name: "   ".into(), ..valid_input() };

        let accepted = view.begin_submit(&input, &SignupPolicy::PRIMARY);

        assert!(!accepted);
        assert_eq!(view.error(), Some(&SignupError::MissingName));
        assert!(!view.is_submitting());
        assert!(!view.is_submitted());
    }

    #[test]
    fn test_invalid_email_aborts() {
        let mut view = SignupView::new();
        let input = FormInput { email: "ada@lumina".into(), ..valid_input() };

        assert!(!view.begin_submit(&input, &SignupPolicy::PRIMARY));
        assert_eq!(view.error(), Some(&SignupError::InvalidEmail));
        assert!(!view.is_submitted());
    }

    #[test]
    fn test_linkedin_checked_only_under_alternate_policy() {
        let input = FormInput { linkedin: "https://example.com".into(), ..valid_input() };

        let mut primary = SignupView::new();
        assert!(primary.begin_submit(&input, &SignupPolicy::PRIMARY));

        let mut alternate = SignupView::new();
        assert!(!alternate.begin_submit(&input, &SignupPolicy::LINKEDIN));
        assert_eq!(alternate.error(), Some(&SignupError::InvalidLinkedIn));
    }

    #[test]
    fn test_resubmission_clears_previous_error() {
        let mut view = SignupView::new();
        let bad = FormInput { full_name: String::new(), ..valid_input() };
        assert!(!view.begin_submit(&bad, &SignupPolicy::PRIMARY));
        assert!(view.error().is_some());

        assert!(view.begin_submit(&valid_input(), &SignupPolicy::PRIMARY));
        assert_eq!(view.error(), None);
        assert!(view.is_submitting());
    }

    #[test]
    fn test_success_is_terminal() {
        let mut view = SignupView::Success;
        assert!(!view.begin_submit(&valid_input(), &SignupPolicy::PRIMARY));
        assert!(view.is_submitted());
        assert!(!view.is_submitting());
    }

    #[tokio::test(start_paused = true)]
    async fn test_happy_path_submits_after_delay() {
        let notifier = RecordingNotifier::default();
        let controller = SignupController::new(
            SimulatedGateway::default(),
            &notifier,
            SignupPolicy::PRIMARY,
        );
        let mut view = SignupView::new();
        let input = valid_input();

        assert!(controller.begin(&input, &mut view));
        assert!(view.is_submitting());
        assert_eq!(view.error(), None);

        let started = tokio::time::Instant::now();
        let result = controller.dispatch(&input).await;
        assert_eq!(started.elapsed(), SUBMIT_DELAY);

        controller.finish(result, &mut view);
        assert!(view.is_submitted());
        assert!(!view.is_submitting());
        assert_eq!(view.error(), None);
        assert_eq!(
            notifier.successes.lock().unwrap().as_slice(),
            [SUCCESS_MESSAGE.to_string()]
        );
        assert!(notifier.errors.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_gateway_failure_returns_to_editable_form() {
        let notifier = RecordingNotifier::default();
        let controller =
            SignupController::new(FailingGateway, &notifier, SignupPolicy::PRIMARY);
        let mut view = SignupView::new();

        controller.submit(&valid_input(), &mut view).await;

        assert!(!view.is_submitted());
        assert!(!view.is_submitting());
        assert!(matches!(view.error(), Some(SignupError::SubmissionFailed(_))));
        assert_eq!(
            notifier.errors.lock().unwrap().as_slice(),
            ["Submission failed. Please try again.".to_string()]
        );
        assert!(notifier.successes.lock().unwrap().is_empty());

        // The form stays editable: a retry through a working gateway lands.
        let retry = SignupController::new(
            SimulatedGateway::default(),
            &notifier,
            SignupPolicy::PRIMARY,
        );
        retry.submit(&valid_input(), &mut view).await;
        assert!(view.is_submitted());
    }

    #[tokio::test]
    async fn test_validation_failure_emits_no_notification() {
        let notifier = RecordingNotifier::default();
        let controller = SignupController::new(
            SimulatedGateway::default(),
            &notifier,
            SignupPolicy::PRIMARY,
        );
        let mut view = SignupView::new();

        let input = FormInput { full_name: String::new(), ..valid_input() };
        controller.submit(&input, &mut view).await;

        assert!(notifier.successes.lock().unwrap().is_empty());
        assert!(notifier.errors.lock().unwrap().is_empty());
        assert_eq!(view.error(), Some(&SignupError::MissingName));
    }
}
