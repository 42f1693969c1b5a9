//! Internship application intake form.
//!
//! The form owns all of its field state. Drafts are edited through pickers
//! and the name text field, validated on submit, and handed to the
//! submission gateway; the outcome comes back through the tick pass.

pub mod actions;
pub mod gateway;
pub mod logic;
pub mod options;
pub mod render;
pub mod state;
pub mod validate;

use std::cell::RefCell;
use std::rc::Rc;

use ratzilla::ratatui::layout::Rect;
use ratzilla::ratatui::Frame;

use crate::input::{ClickState, InputEvent};
use crate::notify::Toasts;

use actions::{
    FOCUS_NAME, OPEN_DEGREE, OPEN_SECTOR, OPEN_SKILLS, OPEN_STREAM, OPEN_YEAR, PICKER_CLOSE,
    PICK_DEGREE_BASE, PICK_SECTOR_BASE, PICK_STREAM_BASE, PICK_YEAR_BASE, SUBMIT,
    TOGGLE_SKILL_BASE, YEAR_SCROLL_DOWN, YEAR_SCROLL_UP,
};
use gateway::{StubGateway, SubmissionGateway};
use options::{Degree, Sector, Skill, Stream};
use state::{FormState, Picker};

/// Rows the year picker jumps per scroll press.
const YEAR_PAGE: i32 = 5;

pub struct ApplicationForm {
    pub state: FormState,
    gateway: Box<dyn SubmissionGateway>,
}

impl ApplicationForm {
    pub fn new() -> Self {
        Self::with_gateway(Box::new(StubGateway::new()))
    }

    /// Swap in a different backend (tests, a real portal gateway).
    pub fn with_gateway(gateway: Box<dyn SubmissionGateway>) -> Self {
        Self {
            state: FormState::new(),
            gateway,
        }
    }

    /// Handle an input event. Returns true if the event was consumed.
    pub fn handle_input(&mut self, event: &InputEvent) -> bool {
        // While the name field is focused, keystrokes are text entry.
        if self.state.editing_name {
            match event {
                InputEvent::Key(c) => {
                    logic::type_name(&mut self.state, *c);
                    return true;
                }
                InputEvent::Backspace => {
                    logic::backspace_name(&mut self.state);
                    return true;
                }
                InputEvent::Enter | InputEvent::Escape => {
                    self.state.editing_name = false;
                    return true;
                }
                // A click elsewhere unfocuses and is then handled normally.
                InputEvent::Click(_) => self.state.editing_name = false,
            }
        }

        match event {
            InputEvent::Click(id) => self.handle_click(*id),
            InputEvent::Key(c) => self.handle_key(*c),
            InputEvent::Enter | InputEvent::Escape => {
                if self.state.picker.is_some() {
                    self.state.picker = None;
                    true
                } else {
                    false
                }
            }
            InputEvent::Backspace => false,
        }
    }

    fn handle_click(&mut self, id: u16) -> bool {
        match id {
            FOCUS_NAME => {
                self.state.picker = None;
                self.state.editing_name = true;
                true
            }
            OPEN_DEGREE => {
                logic::open_picker(&mut self.state, Picker::Degree, options::current_year());
                true
            }
            OPEN_YEAR => {
                logic::open_picker(&mut self.state, Picker::Year, options::current_year());
                true
            }
            OPEN_SKILLS => {
                logic::open_picker(&mut self.state, Picker::Skills, options::current_year());
                true
            }
            OPEN_SECTOR => {
                logic::open_picker(&mut self.state, Picker::Sector, options::current_year());
                true
            }
            OPEN_STREAM => {
                logic::open_picker(&mut self.state, Picker::Stream, options::current_year());
                true
            }
            SUBMIT => {
                logic::submit(&mut self.state, self.gateway.as_mut());
                true
            }
            PICKER_CLOSE => {
                self.state.picker = None;
                true
            }
            YEAR_SCROLL_UP => {
                logic::scroll_years(&mut self.state, -YEAR_PAGE);
                true
            }
            YEAR_SCROLL_DOWN => {
                logic::scroll_years(&mut self.state, YEAR_PAGE);
                true
            }
            id if (PICK_DEGREE_BASE..PICK_DEGREE_BASE + Degree::all().len() as u16)
                .contains(&id) =>
            {
                let degree = Degree::all()[(id - PICK_DEGREE_BASE) as usize];
                logic::set_degree(&mut self.state, degree);
                true
            }
            id if (PICK_YEAR_BASE..PICK_YEAR_BASE + options::YEAR_COUNT as u16)
                .contains(&id) =>
            {
                let years = options::year_options(options::current_year());
                if let Some(year) = years.get((id - PICK_YEAR_BASE) as usize) {
                    logic::set_year(&mut self.state, *year);
                }
                true
            }
            id if (TOGGLE_SKILL_BASE..TOGGLE_SKILL_BASE + Skill::all().len() as u16)
                .contains(&id) =>
            {
                let skill = Skill::all()[(id - TOGGLE_SKILL_BASE) as usize];
                let checked = !self.state.draft.skills.contains(&skill);
                logic::toggle_skill(&mut self.state, skill, checked);
                true
            }
            id if (PICK_SECTOR_BASE..PICK_SECTOR_BASE + Sector::all().len() as u16)
                .contains(&id) =>
            {
                let sector = Sector::all()[(id - PICK_SECTOR_BASE) as usize];
                logic::set_sector(&mut self.state, sector);
                true
            }
            id if (PICK_STREAM_BASE..PICK_STREAM_BASE + Stream::all().len() as u16)
                .contains(&id) =>
            {
                let stream = Stream::all()[(id - PICK_STREAM_BASE) as usize];
                logic::set_stream(&mut self.state, stream);
                true
            }
            _ => false,
        }
    }

    fn handle_key(&mut self, c: char) -> bool {
        if let Some(picker) = self.state.picker {
            return self.handle_picker_key(picker, c);
        }
        match c {
            '1' => {
                self.state.editing_name = true;
                true
            }
            '2' => {
                logic::open_picker(&mut self.state, Picker::Degree, options::current_year());
                true
            }
            '3' => {
                logic::open_picker(&mut self.state, Picker::Year, options::current_year());
                true
            }
            '4' => {
                logic::open_picker(&mut self.state, Picker::Skills, options::current_year());
                true
            }
            '5' => {
                logic::open_picker(&mut self.state, Picker::Sector, options::current_year());
                true
            }
            '6' => {
                logic::open_picker(&mut self.state, Picker::Stream, options::current_year());
                true
            }
            's' => {
                logic::submit(&mut self.state, self.gateway.as_mut());
                true
            }
            _ => false,
        }
    }

    fn handle_picker_key(&mut self, picker: Picker, c: char) -> bool {
        match picker {
            Picker::Degree => match digit_index(c) {
                Some(idx) if idx < Degree::all().len() => {
                    logic::set_degree(&mut self.state, Degree::all()[idx]);
                    true
                }
                _ => false,
            },
            Picker::Sector => match digit_index(c) {
                Some(idx) if idx < Sector::all().len() => {
                    logic::set_sector(&mut self.state, Sector::all()[idx]);
                    true
                }
                _ => false,
            },
            Picker::Stream => match digit_index(c) {
                Some(idx) if idx < Stream::all().len() => {
                    logic::set_stream(&mut self.state, Stream::all()[idx]);
                    true
                }
                _ => false,
            },
            Picker::Skills => false,
            Picker::Year => match c {
                'k' => {
                    logic::scroll_years(&mut self.state, -YEAR_PAGE);
                    true
                }
                'j' => {
                    logic::scroll_years(&mut self.state, YEAR_PAGE);
                    true
                }
                _ => false,
            },
        }
    }

    /// Advance the submission lifecycle.
    pub fn tick(&mut self, delta_ticks: u32, toasts: &mut Toasts) {
        logic::tick(&mut self.state, self.gateway.as_mut(), toasts, delta_ticks);
    }

    /// Render the form into the given area.
    pub fn render(&self, f: &mut Frame, area: Rect, click_state: &Rc<RefCell<ClickState>>) {
        render::render(&self.state, f, area, click_state);
    }
}

/// Map '1'..'9' to indices 0..8 and '0' to 9, matching the rendered hints.
fn digit_index(c: char) -> Option<usize> {
    match c {
        '1'..='9' => Some(c as usize - '1' as usize),
        '0' => Some(9),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::gateway::GatewayError;
    use super::state::{ApplicationRecord, SubmitPhase};

    /// Gateway spy sharing its started-attempt log with the test.
    struct SharedSpy {
        started: Rc<RefCell<Vec<ApplicationRecord>>>,
        pending: bool,
    }

    impl SubmissionGateway for SharedSpy {
        fn start(&mut self, record: &ApplicationRecord) {
            self.started.borrow_mut().push(record.clone());
            self.pending = true;
        }

        fn poll(&mut self, _delta_ticks: u32) -> Option<Result<(), GatewayError>> {
            if !self.pending {
                return None;
            }
            self.pending = false;
            Some(Ok(()))
        }
    }

    fn spy_form() -> (ApplicationForm, Rc<RefCell<Vec<ApplicationRecord>>>) {
        let started = Rc::new(RefCell::new(Vec::new()));
        let form = ApplicationForm::with_gateway(Box::new(SharedSpy {
            started: started.clone(),
            pending: false,
        }));
        (form, started)
    }

    fn fill_valid(form: &mut ApplicationForm) {
        form.state.draft.name = "Asha".to_string();
        form.state.draft.degree = Some(Degree::BTech);
        form.state.draft.year = Some(2024);
        form.state.draft.skills = vec![Skill::Python];
        form.state.draft.sector = Some(Sector::It);
        form.state.draft.stream = Some(Stream::ComputerScience);
    }

    #[test]
    fn clicking_a_field_opens_its_picker() {
        let (mut form, _) = spy_form();
        assert!(form.handle_input(&InputEvent::Click(OPEN_DEGREE)));
        assert_eq!(form.state.picker, Some(Picker::Degree));
    }

    #[test]
    fn clicking_an_option_selects_and_closes() {
        let (mut form, _) = spy_form();
        form.handle_input(&InputEvent::Click(OPEN_DEGREE));
        form.handle_input(&InputEvent::Click(PICK_DEGREE_BASE + 2));

        assert_eq!(form.state.draft.degree, Some(Degree::BCom));
        assert_eq!(form.state.picker, None);
    }

    #[test]
    fn skill_clicks_toggle_and_keep_picker_open() {
        let (mut form, _) = spy_form();
        form.handle_input(&InputEvent::Click(OPEN_SKILLS));

        form.handle_input(&InputEvent::Click(TOGGLE_SKILL_BASE));
        assert_eq!(form.state.draft.skills, vec![Skill::Python]);
        assert_eq!(form.state.picker, Some(Picker::Skills));

        // Second click on the same box unticks it
        form.handle_input(&InputEvent::Click(TOGGLE_SKILL_BASE));
        assert!(form.state.draft.skills.is_empty());
    }

    #[test]
    fn escape_closes_picker() {
        let (mut form, _) = spy_form();
        form.handle_input(&InputEvent::Click(OPEN_SECTOR));
        assert!(form.handle_input(&InputEvent::Escape));
        assert_eq!(form.state.picker, None);
    }

    #[test]
    fn name_editing_captures_keys() {
        let (mut form, _) = spy_form();
        form.handle_input(&InputEvent::Click(FOCUS_NAME));
        assert!(form.state.editing_name);

        for c in ['A', 's', 'h', 'a'] {
            form.handle_input(&InputEvent::Key(c));
        }
        form.handle_input(&InputEvent::Backspace);
        assert_eq!(form.state.draft.name, "Ash");

        form.handle_input(&InputEvent::Enter);
        assert!(!form.state.editing_name);
    }

    #[test]
    fn digit_shortcut_typed_into_name_is_text_not_navigation() {
        let (mut form, _) = spy_form();
        form.handle_input(&InputEvent::Click(FOCUS_NAME));
        form.handle_input(&InputEvent::Key('2'));
        assert_eq!(form.state.draft.name, "2");
        assert_eq!(form.state.picker, None);
    }

    #[test]
    fn submit_with_empty_draft_sets_errors_without_gateway_call() {
        let (mut form, started) = spy_form();
        form.handle_input(&InputEvent::Click(SUBMIT));

        assert_eq!(form.state.phase, SubmitPhase::Idle);
        assert_eq!(form.state.errors.len(), 6);
        assert!(started.borrow().is_empty());
    }

    #[test]
    fn submit_with_valid_draft_goes_in_flight_once() {
        let (mut form, started) = spy_form();
        fill_valid(&mut form);

        form.handle_input(&InputEvent::Click(SUBMIT));
        assert_eq!(form.state.phase, SubmitPhase::Submitting);

        // A second submit click while in flight is swallowed by the guard
        form.handle_input(&InputEvent::Click(SUBMIT));
        assert_eq!(started.borrow().len(), 1);
    }

    #[test]
    fn completed_submission_returns_to_idle_with_toast() {
        let (mut form, _) = spy_form();
        fill_valid(&mut form);
        let mut toasts = Toasts::new();

        form.handle_input(&InputEvent::Click(SUBMIT));
        form.tick(1, &mut toasts);

        assert_eq!(form.state.phase, SubmitPhase::Idle);
        assert_eq!(toasts.entries().len(), 1);
        assert_eq!(toasts.entries()[0].title, logic::SUCCESS_TITLE);
    }

    #[test]
    fn picker_digit_keys_select_options() {
        let (mut form, _) = spy_form();
        form.handle_input(&InputEvent::Key('5')); // open sector picker
        assert_eq!(form.state.picker, Some(Picker::Sector));

        form.handle_input(&InputEvent::Key('3'));
        assert_eq!(form.state.draft.sector, Some(Sector::Healthcare));
        assert_eq!(form.state.picker, None);
    }

    #[test]
    fn tenth_option_is_reachable_via_zero() {
        let (mut form, _) = spy_form();
        form.handle_input(&InputEvent::Key('2')); // degree picker
        form.handle_input(&InputEvent::Key('0'));
        assert_eq!(form.state.draft.degree, Some(Degree::Diploma));
    }

    #[test]
    fn year_scroll_clicks_move_the_window() {
        let (mut form, _) = spy_form();
        form.handle_input(&InputEvent::Click(OPEN_YEAR));
        let start = form.state.year_scroll;

        form.handle_input(&InputEvent::Click(YEAR_SCROLL_UP));
        assert_eq!(form.state.year_scroll, start.saturating_sub(YEAR_PAGE as u16));

        form.handle_input(&InputEvent::Click(YEAR_SCROLL_DOWN));
        assert_eq!(form.state.year_scroll, start);
    }

    #[test]
    fn unknown_action_ids_are_not_consumed() {
        let (mut form, _) = spy_form();
        assert!(!form.handle_input(&InputEvent::Click(9999)));
    }
}
