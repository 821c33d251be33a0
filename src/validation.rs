// SPDX-License-Identifier: MPL-2.0
//! Field validation for the authentication form.
//!
//! Validation never fails with an error: each check yields an optional,
//! user-facing message. `None` means the value is acceptable.

/// Minimum password length, in UTF-16 code units.
pub const MIN_PASSWORD_LEN: usize = 8;

pub const EMAIL_REQUIRED: &str = "Email is required.";
pub const EMAIL_INVALID: &str = "Enter a valid email address.";
pub const PASSWORD_REQUIRED: &str = "Password is required.";
pub const PASSWORD_TOO_SHORT: &str = "Password must be at least 8 characters.";
pub const PASSWORD_WEAK: &str =
    "Password must include uppercase, lowercase, a number, and a special character.";
pub const CONFIRM_REQUIRED: &str = "Please confirm your password.";
pub const CONFIRM_MISMATCH: &str = "Passwords do not match.";

/// Which character-class rules a password satisfies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PasswordRules {
    pub length: bool,
    pub lowercase: bool,
    pub uppercase: bool,
    pub number: bool,
    pub special: bool,
}

impl PasswordRules {
    /// Evaluates every rule against `password`.
    #[must_use]
    pub fn check(password: &str) -> Self {
        Self {
            length: password.encode_utf16().count() >= MIN_PASSWORD_LEN,
            lowercase: password.chars().any(|c| c.is_ascii_lowercase()),
            uppercase: password.chars().any(|c| c.is_ascii_uppercase()),
            number: password.chars().any(|c| c.is_ascii_digit()),
            special: password.chars().any(|c| !c.is_ascii_alphanumeric()),
        }
    }

    #[must_use]
    pub fn all_pass(self) -> bool {
        self.length && self.lowercase && self.uppercase && self.number && self.special
    }
}

/// `local@domain.tld` with no whitespace and exactly one `@`, after trimming.
#[must_use]
pub fn is_valid_email(value: &str) -> bool {
    let email = value.trim();
    if email.is_empty() || email.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }

    // The domain needs a dot with something on both sides of at least one.
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

#[must_use]
pub fn is_strong_password(password: &str) -> bool {
    PasswordRules::check(password).all_pass()
}

#[must_use]
pub fn email_message(value: &str) -> Option<&'static str> {
    if value.trim().is_empty() {
        Some(EMAIL_REQUIRED)
    } else if !is_valid_email(value) {
        Some(EMAIL_INVALID)
    } else {
        None
    }
}

/// Length is reported before character classes.
#[must_use]
pub fn password_message(password: &str) -> Option<&'static str> {
    if password.is_empty() {
        return Some(PASSWORD_REQUIRED);
    }

    let rules = PasswordRules::check(password);
    if rules.all_pass() {
        None
    } else if !rules.length {
        Some(PASSWORD_TOO_SHORT)
    } else {
        Some(PASSWORD_WEAK)
    }
}

#[must_use]
pub fn confirm_password_message(password: &str, confirmation: &str) -> Option<&'static str> {
    if confirmation.is_empty() {
        Some(CONFIRM_REQUIRED)
    } else if confirmation != password {
        Some(CONFIRM_MISMATCH)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_password_reports_length_first() {
        assert_eq!(password_message("abc"), Some(PASSWORD_TOO_SHORT));
    }

    #[test]
    fn long_single_class_password_reports_classes() {
        assert_eq!(password_message("abcdefgh"), Some(PASSWORD_WEAK));
    }

    #[test]
    fn strong_password_passes() {
        assert_eq!(password_message("Abcdef1!"), None);
        assert!(is_strong_password("Abcdef1!"));
    }

    #[test]
    fn length_counts_utf16_units() {
        // Each emoji is a surrogate pair: four of them make eight units.
        let astral = "\u{1F600}\u{1F601}\u{1F602}\u{1F603}";
        assert_eq!(astral.chars().count(), 4);
        assert!(PasswordRules::check(astral).length);
        assert!(!PasswordRules::check("\u{1F600}\u{1F601}\u{1F602}").length);
    }

    #[test]
    fn empty_password_is_required() {
        assert_eq!(password_message(""), Some(PASSWORD_REQUIRED));
    }

    #[test]
    fn rules_report_each_class() {
        let rules = PasswordRules::check("abcDEF12");
        assert!(rules.length && rules.lowercase && rules.uppercase && rules.number);
        assert!(!rules.special);
    }

    #[test]
    fn email_shapes() {
        assert!(is_valid_email("me@example.com"));
        assert!(is_valid_email("  me@example.com  "));
        assert!(!is_valid_email("me@example"));
        assert!(!is_valid_email("me@.com"));
        assert!(!is_valid_email("me@example."));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("me @example.com"));
        assert!(!is_valid_email("me@ex@ample.com"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn email_messages() {
        assert_eq!(email_message("   "), Some(EMAIL_REQUIRED));
        assert_eq!(email_message("nope"), Some(EMAIL_INVALID));
        assert_eq!(email_message("a@b.co"), None);
    }

    #[test]
    fn confirm_messages() {
        assert_eq!(confirm_password_message("Abcdef1!", ""), Some(CONFIRM_REQUIRED));
        assert_eq!(
            confirm_password_message("Abcdef1!", "Abcdef1?"),
            Some(CONFIRM_MISMATCH)
        );
        assert_eq!(confirm_password_message("Abcdef1!", "Abcdef1!"), None);
    }
}
