// SPDX-License-Identifier: MPL-2.0
//! Values and touched state of the sign-up form.

use super::validation::{validate_field, FormField, ValidationError};
use std::collections::HashSet;

/// Values handed back by a successful submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmittedValues {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Default)]
pub struct SignUpForm {
    name: String,
    email: String,
    password: String,
    touched: HashSet<FormField>,
}

impl SignUpForm {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Password => &self.password,
        }
    }

    /// Replaces the value of `field` and marks it touched.
    pub fn set(&mut self, field: FormField, value: String) {
        match field {
            FormField::Name => self.name = value,
            FormField::Email => self.email = value,
            FormField::Password => self.password = value,
        }
        self.touched.insert(field);
    }

    #[must_use]
    pub fn is_touched(&self, field: FormField) -> bool {
        self.touched.contains(&field)
    }

    /// Current validation result of `field`, touched or not.
    #[must_use]
    pub fn error(&self, field: FormField) -> Option<ValidationError> {
        validate_field(field, self.value(field)).err()
    }

    /// The error to display under `field`: only once it has been touched.
    #[must_use]
    pub fn visible_error(&self, field: FormField) -> Option<ValidationError> {
        if self.is_touched(field) {
            self.error(field)
        } else {
            None
        }
    }

    /// Whether the submit button is enabled: every field filled in and
    /// every rule satisfied.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        FormField::ALL
            .iter()
            .all(|&field| !self.value(field).is_empty() && self.error(field).is_none())
    }

    /// Marks every field touched and validates the whole form.
    ///
    /// On failure returns each failing field with its first broken rule.
    pub fn submit(&mut self) -> Result<SubmittedValues, Vec<(FormField, ValidationError)>> {
        self.touched.extend(FormField::ALL);

        let errors: Vec<_> = FormField::ALL
            .iter()
            .filter_map(|&field| self.error(field).map(|err| (field, err)))
            .collect();
        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(SubmittedValues {
            name: self.name.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
        })
    }
}
