//! Form data and page-variant policy.

use serde::Serialize;

/// Transient contents of the waitlist form. Recreated empty on launch,
/// mutated on every keystroke, never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FormInput {
    pub full_name: String,
    pub email: String,
    /// Optional free text; never validated.
    pub startup_name: String,
    /// Only checked when the active [`SignupPolicy`] requires it.
    pub linkedin: String,
}

/// Selects which page variant's validation rules apply.
///
/// The landing page shipped in two divergent variants: one collecting a
/// startup name, one requiring a LinkedIn URL. The field set is unified and
/// the policy picks the rules.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SignupPolicy {
    pub require_linkedin: bool,
}

impl SignupPolicy {
    /// Primary variant: startup name collected, LinkedIn ignored.
    pub const PRIMARY: SignupPolicy = SignupPolicy { require_linkedin: false };

    /// Alternate variant: LinkedIn URL required.
    pub const LINKEDIN: SignupPolicy = SignupPolicy { require_linkedin: true };
}
