//! Field validation rules for the credential forms.
//!
//! DESIGN
//! ======
//! Pure string predicates paired with fixed user-facing messages. Rules run
//! on every keystroke, so they allocate nothing and never touch the DOM.
//! An empty returned message means the value passed.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

/// Shown when an email fails the shape check.
pub const EMAIL_ERROR: &str = "Invalid email format";
/// Shown when a username is too short.
pub const USERNAME_ERROR: &str = "Username must be at least 3 characters";
/// Shown when a password misses the length or character-class rules.
pub const PASSWORD_ERROR: &str =
    "Password must be at least 8 characters, include an uppercase letter, a lowercase letter, and a number.";
/// Shown when a full name is too short.
pub const FULL_NAME_ERROR: &str = "Full name must be at least 3 characters";

/// Loose email shape check: exactly one `@`, no whitespace, a non-empty
/// local part, and a dot inside the domain with at least one character on
/// each side.
pub fn is_valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(index, c)| c == '.' && index > 0 && index + 1 < domain.len())
}

/// Password policy: at least 8 characters including one lowercase letter,
/// one uppercase letter, and one digit.
pub fn is_valid_password(value: &str) -> bool {
    value.chars().count() >= 8
        && value.chars().any(|c| c.is_ascii_lowercase())
        && value.chars().any(|c| c.is_ascii_uppercase())
        && value.chars().any(|c| c.is_ascii_digit())
}

fn has_min_chars(value: &str, min: usize) -> bool {
    value.chars().count() >= min
}

/// Error message for an email value, or `""` when it passes.
pub fn email_message(value: &str) -> &'static str {
    if is_valid_email(value) { "" } else { EMAIL_ERROR }
}

/// Error message for a username, or `""` when it passes.
pub fn username_message(value: &str) -> &'static str {
    if has_min_chars(value, 3) { "" } else { USERNAME_ERROR }
}

/// Error message for a password, or `""` when it passes.
pub fn password_message(value: &str) -> &'static str {
    if is_valid_password(value) { "" } else { PASSWORD_ERROR }
}

/// Error message for a full name, or `""` when it passes.
pub fn full_name_message(value: &str) -> &'static str {
    if has_min_chars(value, 3) { "" } else { FULL_NAME_ERROR }
}
