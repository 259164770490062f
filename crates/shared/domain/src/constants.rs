//! Domain-level constants.

// =============================================================================
// User Defaults
// =============================================================================

/// Suffix appended to a user's name to build the initial email address
pub const DEFAULT_EMAIL_SUFFIX: &str = "@email.com";

/// Build the email a new user starts out with
pub fn default_email(name: &str) -> String {
    format!("{}{}", name, DEFAULT_EMAIL_SUFFIX)
}
