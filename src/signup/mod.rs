// SPDX-License-Identifier: MPL-2.0
//! Sign-up form model: field values, touched state and validation rules.
//!
//! The form never creates an account. A successful submit only hands the
//! validated values back to the caller.

pub mod form;
pub mod validation;

pub use form::{SignUpForm, SubmittedValues};
pub use validation::{validate_field, FormField, ValidationError, MIN_PASSWORD_LENGTH};
