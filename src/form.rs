//! Booking form state
//!
//! Holds the field values being edited, the set of touched fields, which
//! field has focus, whether a submission is in flight, and the alert raised
//! by the last submission.

use chrono::{DateTime, Local};
use std::collections::BTreeSet;
use thiserror::Error;

use crate::booking::{validate, validate_field, BookingFormValues, Field, ValidationResult};
use crate::client::SubmissionOutcome;

/// Reasons a submit action does not produce a request
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitBlocked {
    /// One or more fields fail validation
    #[error("{} field(s) need attention", .0.len())]
    Invalid(ValidationResult),
    /// A previous submission has not resolved yet
    #[error("A booking is already being submitted")]
    InFlight,
}

/// Modal notice describing the outcome of a submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub outcome: SubmissionOutcome,
    pub raised_at: DateTime<Local>,
}

impl Alert {
    pub fn new(outcome: SubmissionOutcome) -> Self {
        Self {
            outcome,
            raised_at: Local::now(),
        }
    }

    pub fn message(&self) -> &'static str {
        self.outcome.message()
    }
}

/// Fields the user has left at least once
///
/// Only gates whether an error is displayed, never whether a field is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TouchedSet(BTreeSet<Field>);

impl TouchedSet {
    pub fn insert(&mut self, field: Field) {
        self.0.insert(field);
    }

    pub fn contains(&self, field: Field) -> bool {
        self.0.contains(&field)
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Editable booking form
#[derive(Debug, Clone, Default)]
pub struct BookingForm {
    /// Current text of every field
    pub values: BookingFormValues,
    /// Fields that have been blurred at least once
    pub touched: TouchedSet,
    /// Index into `Field::ALL` of the focused input
    pub focus: usize,
    /// Whether a request is outstanding
    pub submitting: bool,
    /// Outcome notice awaiting dismissal
    pub alert: Option<Alert>,
}

impl BookingForm {
    /// Creates an empty form with the first field focused
    pub fn new() -> Self {
        Self::default()
    }

    /// The field that currently has focus
    pub fn focused_field(&self) -> Field {
        Field::ALL[self.focus]
    }

    /// Marks a field as touched
    pub fn blur(&mut self, field: Field) {
        self.touched.insert(field);
    }

    /// Moves focus to the next field, blurring the current one, wrapping at the end
    pub fn focus_next(&mut self) {
        self.blur(self.focused_field());
        self.focus = (self.focus + 1) % Field::ALL.len();
    }

    /// Moves focus to the previous field, blurring the current one, wrapping at the start
    pub fn focus_previous(&mut self) {
        self.blur(self.focused_field());
        if self.focus == 0 {
            self.focus = Field::ALL.len() - 1;
        } else {
            self.focus -= 1;
        }
    }

    /// Appends a character to the focused field
    pub fn input_char(&mut self, c: char) {
        let field = self.focused_field();
        self.values.get_mut(field).push(c);
    }

    /// Removes the last character of the focused field
    pub fn backspace(&mut self) {
        let field = self.focused_field();
        self.values.get_mut(field).pop();
    }

    /// Validates the current values
    pub fn validate(&self) -> ValidationResult {
        validate(&self.values)
    }

    /// The error to display for a field, if it is both touched and invalid
    pub fn visible_error(&self, field: Field) -> Option<&'static str> {
        if !self.touched.contains(field) {
            return None;
        }
        validate_field(field, self.values.get(field)).err()
    }

    /// Starts a submission
    ///
    /// Every field is marked touched so all errors become visible. On success
    /// the form enters the in-flight state and a copy of the values to send is
    /// returned.
    pub fn begin_submit(&mut self) -> Result<BookingFormValues, SubmitBlocked> {
        if self.submitting {
            return Err(SubmitBlocked::InFlight);
        }

        for field in Field::ALL {
            self.touched.insert(field);
        }

        let result = self.validate();
        if !result.is_valid() {
            return Err(SubmitBlocked::Invalid(result));
        }

        self.submitting = true;
        Ok(self.values.clone())
    }

    /// Applies the outcome of a finished submission
    ///
    /// A successful booking resets every field and the touched set. Any other
    /// outcome leaves the form as it was.
    pub fn finish_submit(&mut self, outcome: SubmissionOutcome) {
        self.submitting = false;
        if outcome.is_success() {
            self.values.clear();
            self.touched.clear();
            self.focus = 0;
        }
        self.alert = Some(Alert::new(outcome));
    }

    /// Dismisses the current alert, if any
    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }
}
