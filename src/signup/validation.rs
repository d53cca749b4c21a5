// SPDX-License-Identifier: MPL-2.0
//! Per-field validation rules.
//!
//! Each field has an ordered list of rules; `required` always comes first
//! and only the first failing rule is reported.

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

/// Minimum password length, counted in Unicode scalar values.
pub const MIN_PASSWORD_LENGTH: usize = 8;

// HTML living standard "valid e-mail address" production.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .expect("email pattern is a valid regex")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Name,
    Email,
    Password,
}

impl FormField {
    /// Every field, in display order.
    pub const ALL: [FormField; 3] = [FormField::Name, FormField::Email, FormField::Password];

    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            FormField::Name => "field-name-label",
            FormField::Email => "field-email-label",
            FormField::Password => "field-password-label",
        }
    }

    #[must_use]
    pub fn placeholder_key(self) -> &'static str {
        match self {
            FormField::Name => "field-name-placeholder",
            FormField::Email => "field-email-placeholder",
            FormField::Password => "field-password-placeholder",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FormField::Name => "name",
            FormField::Email => "email",
            FormField::Password => "password",
        };
        f.write_str(name)
    }
}

/// The first rule a field value breaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    Required(FormField),
    InvalidEmail,
    TooShort { min: usize },
}

impl ValidationError {
    /// Returns the i18n message key for this error.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            ValidationError::Required(FormField::Name) => "validation-name-required",
            ValidationError::Required(FormField::Email) => "validation-email-required",
            ValidationError::Required(FormField::Password) => "validation-password-required",
            ValidationError::InvalidEmail => "validation-email-invalid",
            ValidationError::TooShort { .. } => "validation-password-too-short",
        }
    }

    /// Returns the i18n arguments for this error as `(name, value)` pairs.
    #[must_use]
    pub fn i18n_args(&self) -> Vec<(&'static str, String)> {
        match self {
            ValidationError::TooShort { min } => vec![("min", min.to_string())],
            _ => Vec::new(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::Required(field) => write!(f, "{field} is required"),
            ValidationError::InvalidEmail => write!(f, "invalid email format"),
            ValidationError::TooShort { min } => {
                write!(f, "must be at least {min} characters")
            }
        }
    }
}

/// Checks `value` against the rules of `field`.
pub fn validate_field(field: FormField, value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::Required(field));
    }

    match field {
        FormField::Name => Ok(()),
        FormField::Email if !EMAIL_PATTERN.is_match(value) => Err(ValidationError::InvalidEmail),
        FormField::Email => Ok(()),
        FormField::Password if value.chars().count() < MIN_PASSWORD_LENGTH => {
            Err(ValidationError::TooShort {
                min: MIN_PASSWORD_LENGTH,
            })
        }
        FormField::Password => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_values_are_required() {
        for field in FormField::ALL {
            assert_eq!(
                validate_field(field, ""),
                Err(ValidationError::Required(field))
            );
        }
    }

    #[test]
    fn any_non_empty_name_is_valid() {
        assert_eq!(validate_field(FormField::Name, "A"), Ok(()));
        assert_eq!(validate_field(FormField::Name, " "), Ok(()));
    }

    #[test]
    fn email_format_is_checked() {
        assert_eq!(validate_field(FormField::Email, "a@b.com"), Ok(()));
        assert_eq!(validate_field(FormField::Email, "first.last+tag@sub.example.org"), Ok(()));
        assert_eq!(validate_field(FormField::Email, "user@localhost"), Ok(()));

        for bad in ["plain", "a@", "@b.com", "a b@c.com", "a@-b.com", "a@b..com"] {
            assert_eq!(
                validate_field(FormField::Email, bad),
                Err(ValidationError::InvalidEmail),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn password_length_boundary() {
        assert_eq!(
            validate_field(FormField::Password, "abcdefg"),
            Err(ValidationError::TooShort { min: 8 })
        );
        assert_eq!(validate_field(FormField::Password, "abcdefgh"), Ok(()));
    }

    #[test]
    fn password_length_counts_characters_not_bytes() {
        // 7 characters, 14 bytes.
        assert!(validate_field(FormField::Password, "ééééééé").is_err());
        assert!(validate_field(FormField::Password, "éééééééé").is_ok());
    }

    #[test]
    fn required_is_reported_before_other_rules() {
        assert_eq!(
            validate_field(FormField::Password, ""),
            Err(ValidationError::Required(FormField::Password))
        );
    }

    #[test]
    fn i18n_keys_and_args() {
        assert_eq!(
            ValidationError::Required(FormField::Email).i18n_key(),
            "validation-email-required"
        );
        let too_short = ValidationError::TooShort { min: 8 };
        assert_eq!(too_short.i18n_key(), "validation-password-too-short");
        assert_eq!(too_short.i18n_args(), vec![("min", "8".to_string())]);
        assert!(ValidationError::InvalidEmail.i18n_args().is_empty());
    }
}
