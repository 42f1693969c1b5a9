//! Application form state definitions.

use serde::Serialize;

use super::options::{Degree, Sector, Skill, Stream};
use super::validate::{Field, FieldError};

/// The in-progress, not-yet-validated field values the applicant is editing.
/// Built incrementally; validated only at submit time.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ApplicationDraft {
    pub name: String,
    pub degree: Option<Degree>,
    pub year: Option<i32>,
    /// Unique membership, insertion order preserved.
    pub skills: Vec<Skill>,
    pub sector: Option<Sector>,
    pub stream: Option<Stream>,
}

/// A draft that passed validation, ready for the submission gateway.
/// Serializes to the JSON wire payload (display names, not identifiers).
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ApplicationRecord {
    pub name: String,
    pub degree: Degree,
    pub year: i32,
    pub skills: Vec<Skill>,
    pub sector: Sector,
    pub stream: Stream,
}

/// Which option picker is currently open, if any.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Picker {
    Degree,
    Year,
    Skills,
    Sector,
    Stream,
}

/// Submission lifecycle. `Submitting` is the single in-flight guard; success
/// and failure are transition outcomes (toast plus reset), never resident
/// states, so "submitting and failed at once" is unrepresentable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitPhase {
    Idle,
    Submitting,
}

/// Full state of the application form.
pub struct FormState {
    pub draft: ApplicationDraft,
    /// Field errors from the last failed submit attempt.
    pub errors: Vec<FieldError>,
    pub phase: SubmitPhase,
    /// Whether keystrokes currently go into the name field.
    pub editing_name: bool,
    pub picker: Option<Picker>,
    /// Scroll offset of the year picker, in rows.
    pub year_scroll: u16,
}

impl FormState {
    pub fn new() -> Self {
        Self {
            draft: ApplicationDraft::default(),
            errors: Vec::new(),
            phase: SubmitPhase::Idle,
            editing_name: false,
            picker: None,
            year_scroll: 0,
        }
    }

    /// The error message for a field, if its constraint was violated on the
    /// last submit attempt.
    pub fn error_for(&self, field: Field) -> Option<&'static str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message)
    }

    /// Drop a field's stale error once the applicant edits that field.
    pub fn clear_error(&mut self, field: Field) {
        self.errors.retain(|e| e.field != field);
    }
}
