use thiserror::Error;

/// Failure reported by a [`crate::SignupGateway`] implementation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct GatewayError(pub String);

impl GatewayError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// Everything that can go wrong during a signup attempt.
///
/// The `#[error]` strings are the exact copy shown to the user, inline next
/// to the form.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SignupError {
    #[error("Please enter your name")]
    MissingName,
    #[error("Please enter a valid email")]
    InvalidEmail,
    #[error("Please enter a valid LinkedIn URL")]
    InvalidLinkedIn,
    #[error("Submission failed. Please try again.")]
    SubmissionFailed(#[source] GatewayError),
}

impl SignupError {
    /// Validation errors abort before the gateway is touched.
    pub fn is_validation(&self) -> bool {
        !matches!(self, SignupError::SubmissionFailed(_))
    }
}
