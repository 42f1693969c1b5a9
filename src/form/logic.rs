//! Form behavior: field updates, the skills reducer, and the submission
//! lifecycle. Pure state transitions, fully testable without a rendering
//! surface.

use crate::notify::{Severity, Toasts};

use super::gateway::{log_warn, SubmissionGateway};
use super::options::{self, Degree, Sector, Skill, Stream};
use super::state::{ApplicationDraft, FormState, Picker, SubmitPhase};
use super::validate::{self, Field};

pub const SUCCESS_TITLE: &str = "Application Submitted Successfully!";
pub const SUCCESS_BODY: &str =
    "Your application has been received. Track its status under My Applications.";
pub const FAILURE_TITLE: &str = "Submission Failed";
pub const FAILURE_BODY: &str = "Something went wrong while submitting. Please try again.";

/// Maximum name length the field accepts.
const NAME_MAX_CHARS: usize = 60;

// ── Field updates ───────────────────────────────────────────────

/// Append a typed character to the name. Editing a field drops its stale
/// error.
pub fn type_name(state: &mut FormState, c: char) {
    if c.is_control() || state.draft.name.chars().count() >= NAME_MAX_CHARS {
        return;
    }
    state.draft.name.push(c);
    state.clear_error(Field::Name);
}

pub fn backspace_name(state: &mut FormState) {
    state.draft.name.pop();
    state.clear_error(Field::Name);
}

pub fn set_degree(state: &mut FormState, degree: Degree) {
    state.draft.degree = Some(degree);
    state.clear_error(Field::Degree);
    state.picker = None;
}

pub fn set_year(state: &mut FormState, year: i32) {
    state.draft.year = Some(year);
    state.clear_error(Field::Year);
    state.picker = None;
}

pub fn set_sector(state: &mut FormState, sector: Sector) {
    state.draft.sector = Some(sector);
    state.clear_error(Field::Sector);
    state.picker = None;
}

pub fn set_stream(state: &mut FormState, stream: Stream) {
    state.draft.stream = Some(stream);
    state.clear_error(Field::Stream);
    state.picker = None;
}

/// Skills reducer: insert on `checked`, remove otherwise. Membership is
/// unique, insertion appends, and unrelated entries keep their order. The
/// draft's `skills` field is rewritten synchronously so the next submit sees
/// the latest set.
pub fn toggle_skill(state: &mut FormState, skill: Skill, checked: bool) {
    let skills = &mut state.draft.skills;
    if checked {
        if !skills.contains(&skill) {
            skills.push(skill);
        }
    } else {
        skills.retain(|s| *s != skill);
    }
    state.clear_error(Field::Skills);
}

// ── Pickers ─────────────────────────────────────────────────────

/// Open a picker; the year picker starts scrolled near the chosen (or
/// current) year instead of 50 years in the past.
pub fn open_picker(state: &mut FormState, picker: Picker, current_year: i32) {
    state.editing_name = false;
    state.picker = Some(picker);
    if picker == Picker::Year {
        state.year_scroll = initial_year_scroll(state.draft.year, current_year);
    }
}

/// Row offset that puts `selected` (or the current year) a few rows into
/// the visible window.
pub fn initial_year_scroll(selected: Option<i32>, current_year: i32) -> u16 {
    let target = selected.unwrap_or(current_year);
    let first = current_year - options::YEARS_BACK;
    let index = (target - first).clamp(0, options::YEAR_COUNT as i32 - 1) as u16;
    index.saturating_sub(3)
}

/// Scroll the year picker by `delta` rows (negative = up), clamped to the
/// list.
pub fn scroll_years(state: &mut FormState, delta: i32) {
    let max = options::YEAR_COUNT as i32 - 1;
    let next = (state.year_scroll as i32 + delta).clamp(0, max);
    state.year_scroll = next as u16;
}

// ── Submission lifecycle ────────────────────────────────────────

/// Submit attempt: the guarded `Idle → Submitting` transition. Validation
/// failure keeps the form in `Idle` with field errors set and never touches
/// the gateway; success hands the record to the gateway exactly once.
pub fn submit(state: &mut FormState, gateway: &mut dyn SubmissionGateway) {
    if state.phase != SubmitPhase::Idle {
        return;
    }
    match validate::validate(&state.draft) {
        Ok(record) => {
            state.errors.clear();
            gateway.start(&record);
            state.phase = SubmitPhase::Submitting;
        }
        Err(errors) => {
            state.errors = errors;
        }
    }
}

/// Drive the in-flight request. On completion the outcome toast fires and
/// the form returns to `Idle`: success clears the draft for a fresh
/// application, failure keeps every entered value for resubmission.
pub fn tick(
    state: &mut FormState,
    gateway: &mut dyn SubmissionGateway,
    toasts: &mut Toasts,
    delta_ticks: u32,
) {
    if state.phase != SubmitPhase::Submitting {
        return;
    }
    match gateway.poll(delta_ticks) {
        Some(Ok(())) => {
            toasts.notify(SUCCESS_TITLE, SUCCESS_BODY, Severity::Normal);
            state.draft = ApplicationDraft::default();
            state.phase = SubmitPhase::Idle;
        }
        Some(Err(err)) => {
            log_warn(&format!("application submission failed: {err}"));
            toasts.notify(FAILURE_TITLE, FAILURE_BODY, Severity::Destructive);
            state.phase = SubmitPhase::Idle;
        }
        None => {}
    }
}
