//! App shell: composes the page header, the application form, and the toast
//! layer.
//!
//! The two UI components share no state. The shell routes input (header
//! first, form second), advances the tick pass, and owns the one piece of
//! state neither component does: the mobile menu boolean the header renders
//! as a controlled view.

use std::cell::RefCell;
use std::rc::Rc;

use ratzilla::ratatui::layout::{Constraint, Direction, Layout};
use ratzilla::ratatui::Frame;

use crate::form::ApplicationForm;
use crate::header::{self, HeaderBar, HeaderEvent, HeaderReply};
use crate::input::{ClickState, InputEvent};
use crate::notify::Toasts;

pub struct App {
    pub header: HeaderBar,
    pub form: ApplicationForm,
    pub toasts: Toasts,
    /// Mobile menu open/closed. Owned here, rendered by the header.
    pub menu_open: bool,
}

impl App {
    pub fn new() -> Self {
        Self {
            header: HeaderBar::new(),
            form: ApplicationForm::new(),
            toasts: Toasts::new(),
            menu_open: false,
        }
    }

    /// Route an input event. Returns true if any component consumed it.
    pub fn handle_input(&mut self, event: &InputEvent) -> bool {
        // Header targets render on top, so they get first refusal on clicks.
        if let InputEvent::Click(id) = event {
            match self.header.handle_click(*id) {
                HeaderReply::Consumed => return true,
                HeaderReply::Emit(HeaderEvent::ToggleMenu) => {
                    self.menu_open = !self.menu_open;
                    return true;
                }
                HeaderReply::Emit(HeaderEvent::Navigate(_)) => {
                    // Single-page build: following a link only collapses the menu.
                    self.menu_open = false;
                    return true;
                }
                HeaderReply::Ignored => {}
            }
        }
        self.form.handle_input(event)
    }

    /// Advance everything time-dependent by `delta_ticks`.
    pub fn tick(&mut self, delta_ticks: u32) {
        if delta_ticks == 0 {
            return;
        }
        self.form.tick(delta_ticks, &mut self.toasts);
        self.toasts.tick(delta_ticks);
    }

    /// Render one frame. Registration order is paint order: the form first,
    /// then the header (its dropdowns overlay the form), toasts on top.
    pub fn render(&self, f: &mut Frame, click_state: &Rc<RefCell<ClickState>>) {
        let size = f.area();

        {
            let mut cs = click_state.borrow_mut();
            cs.terminal_cols = size.width;
            cs.terminal_rows = size.height;
            cs.clear_targets();
        }

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(10)])
            .split(size);

        self.form.render(f, chunks[1], click_state);
        header::render::render(&self.header, self.menu_open, f, chunks[0], size, click_state);
        self.toasts.render(f, size);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::state::SubmitPhase;
    use crate::header::actions::{TOGGLE_MENU, TOGGLE_NOTIFICATIONS, NAV_BASE};

    #[test]
    fn menu_boolean_lives_in_the_shell() {
        let mut app = App::new();
        assert!(!app.menu_open);

        app.handle_input(&InputEvent::Click(TOGGLE_MENU));
        assert!(app.menu_open);

        app.handle_input(&InputEvent::Click(TOGGLE_MENU));
        assert!(!app.menu_open);
    }

    #[test]
    fn nav_click_collapses_menu() {
        let mut app = App::new();
        app.menu_open = true;
        app.handle_input(&InputEvent::Click(NAV_BASE));
        assert!(!app.menu_open);
    }

    #[test]
    fn header_clicks_do_not_reach_the_form() {
        let mut app = App::new();
        app.handle_input(&InputEvent::Click(TOGGLE_NOTIFICATIONS));

        assert!(app.header.notifications_open);
        // The form saw nothing: no picker opened, nothing edited
        assert_eq!(app.form.state.picker, None);
        assert!(!app.form.state.editing_name);
    }

    #[test]
    fn form_clicks_fall_through_the_header() {
        let mut app = App::new();
        app.handle_input(&InputEvent::Click(crate::form::actions::OPEN_DEGREE));

        assert_eq!(
            app.form.state.picker,
            Some(crate::form::state::Picker::Degree)
        );
        assert!(!app.header.notifications_open);
        assert!(!app.header.profile_open);
    }

    #[test]
    fn tick_expires_toasts_through_the_shell() {
        let mut app = App::new();
        app.toasts
            .notify("t", "d", crate::notify::Severity::Normal);

        app.tick(crate::notify::TOAST_TICKS);
        assert!(app.toasts.is_empty());
    }

    #[test]
    fn zero_tick_is_noop() {
        let mut app = App::new();
        app.tick(0);
        assert_eq!(app.form.state.phase, SubmitPhase::Idle);
    }
}
