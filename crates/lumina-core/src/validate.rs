//! Field validators for the waitlist form.
//!
//! Deliberately permissive shape checks, not RFC validation. The form only
//! needs to catch obvious typos before the submission is dispatched.

use std::sync::LazyLock;

use regex::Regex;

/// `local@domain.tld` shape: no whitespace, no second `@`, at least one dot
/// after the `@`.
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

/// Check that a string looks like an email address.
pub fn validate_email(s: &str) -> bool {
    EMAIL_RE.is_match(s)
}

/// Check that a string looks like a LinkedIn profile URL.
///
/// A substring match is enough here; scheme and path structure are not
/// enforced.
pub fn validate_linkedin(s: &str) -> bool {
    s.contains("linkedin.com/")
}
