//! Per-field validation state for the credential forms.
//!
//! DESIGN
//! ======
//! Errors live in a plain value type updated by a pure reducer, so the form
//! rules are testable without mounting a view. An empty message marks a
//! valid (or untouched) field.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use crate::util::validate;

/// Form-level message shown when submission is blocked by field errors.
pub const SUBMIT_BLOCKED: &str = "Please fix the errors before submitting";

/// Form inputs subject to validation rules.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormField {
    Email,
    Username,
    Password,
    FullName,
}

/// One error message per form field; `""` means the field is valid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub email: &'static str,
    pub username: &'static str,
    pub password: &'static str,
    pub full_name: &'static str,
}

impl FieldErrors {
    /// Revalidate one field against its current raw value, leaving the
    /// other entries untouched.
    #[must_use]
    pub fn apply(mut self, field: FormField, value: &str) -> Self {
        match field {
            FormField::Email => self.email = validate::email_message(value),
            FormField::Username => self.username = validate::username_message(value),
            FormField::Password => self.password = validate::password_message(value),
            FormField::FullName => self.full_name = validate::full_name_message(value),
        }
        self
    }

    /// True when any field currently holds an error message.
    pub fn has_errors(&self) -> bool {
        [self.email, self.username, self.password, self.full_name]
            .iter()
            .any(|message| !message.is_empty())
    }
}
