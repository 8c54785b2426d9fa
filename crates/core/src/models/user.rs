//! User record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tally_shared::types::UserId;

/// Returns true if `email` has an "@" and a "." in the domain part.
///
/// The domain part is the text between the first "@" and the next one.
#[must_use]
pub fn is_valid_email_address(email: &str) -> bool {
    email
        .split('@')
        .nth(1)
        .is_some_and(|domain| domain.contains('.'))
}

/// Label for an account's active flag.
#[must_use]
pub const fn activity_label(is_active: bool) -> &'static str {
    if is_active { "Active" } else { "Inactive" }
}

/// A user of the system.
///
/// The ID is fixed at creation. The email changes only through
/// [`User::update_email`], and the active flag only through
/// [`User::activate`] / [`User::deactivate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    id: UserId,
    /// Login name.
    pub username: String,
    email: String,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// When the user was created.
    pub created_at: DateTime<Utc>,
    is_active: bool,
}

impl User {
    /// Creates an active user.
    #[must_use]
    pub fn new(
        id: UserId,
        username: impl Into<String>,
        email: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            username: username.into(),
            email: email.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            created_at,
            is_active: true,
        }
    }

    /// Returns the user ID.
    #[must_use]
    pub const fn id(&self) -> UserId {
        self.id
    }

    /// Returns the current email address.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Returns true if the account is active.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.is_active
    }

    /// Returns "First Last".
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Returns true if the stored email passes the format check.
    #[must_use]
    pub fn is_valid_email(&self) -> bool {
        is_valid_email_address(&self.email)
    }

    /// Deactivates the account.
    pub fn deactivate(&mut self) {
        self.is_active = false;
    }

    /// Activates the account.
    pub fn activate(&mut self) {
        self.is_active = true;
    }

    /// Replaces the email if `new_email` passes the format check.
    ///
    /// Returns false and keeps the old address otherwise.
    pub fn update_email(&mut self, new_email: &str) -> bool {
        if !is_valid_email_address(new_email) {
            return false;
        }
        self.email = new_email.to_string();
        true
    }

    /// Returns "Active" or "Inactive".
    #[must_use]
    pub const fn status_label(&self) -> &'static str {
        activity_label(self.is_active)
    }
}

impl std::fmt::Display for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "User({}): {} <{}> [{}]",
            self.id,
            self.full_name(),
            self.email,
            self.status_label()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rstest::rstest;

    fn sample_user() -> User {
        User::new(
            UserId::new(1),
            "john_doe",
            "john@example.com",
            "John",
            "Doe",
            Utc.with_ymd_and_hms(2024, 1, 15, 9, 30, 0).unwrap(),
        )
    }

    #[test]
    fn test_new_user_is_active() {
        let user = sample_user();
        assert!(user.is_active());
        assert_eq!(user.id(), UserId::new(1));
        assert_eq!(user.email(), "john@example.com");
    }

    #[test]
    fn test_full_name() {
        assert_eq!(sample_user().full_name(), "John Doe");
    }

    #[test]
    fn test_activate_deactivate() {
        let mut user = sample_user();
        user.deactivate();
        assert!(!user.is_active());
        assert_eq!(user.status_label(), "Inactive");
        user.deactivate();
        assert!(!user.is_active());
        user.activate();
        assert!(user.is_active());
        assert_eq!(user.status_label(), activity_label(true));
    }

    #[test]
    fn test_activity_label() {
        assert_eq!(activity_label(true), "Active");
        assert_eq!(activity_label(false), "Inactive");
    }

    #[test]
    fn test_update_email_rejects_invalid() {
        let mut user = sample_user();
        assert!(!user.update_email("bad-email"));
        assert_eq!(user.email(), "john@example.com");
    }

    #[test]
    fn test_update_email_accepts_valid() {
        let mut user = sample_user();
        assert!(user.update_email("a@b.com"));
        assert_eq!(user.email(), "a@b.com");
        assert!(user.is_valid_email());
    }

    #[rstest]
    #[case("john@example.com", true)]
    #[case("a@b.c", true)]
    #[case("first.last@example.org", true)]
    #[case("bad-email", false)]
    #[case("no-dot@localhost", false)]
    #[case("dot.before@at", false)]
    #[case("a@b@c.com", false)]
    #[case("", false)]
    fn test_email_validity(#[case] email: &str, #[case] valid: bool) {
        assert_eq!(is_valid_email_address(email), valid);
    }

    #[test]
    fn test_invalid_email_is_kept_at_construction() {
        let user = User::new(
            UserId::new(2),
            "x",
            "not-an-email",
            "X",
            "Y",
            Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        );
        assert_eq!(user.email(), "not-an-email");
        assert!(!user.is_valid_email());
    }

    #[test]
    fn test_display() {
        let mut user = sample_user();
        assert_eq!(
            user.to_string(),
            "User(1): John Doe <john@example.com> [Active]"
        );
        user.deactivate();
        assert_eq!(
            user.to_string(),
            "User(1): John Doe <john@example.com> [Inactive]"
        );
    }
}
