//! Page header and navigation shell.
//!
//! The header owns exactly two booleans (the notification and profile
//! dropdowns) and nothing else. The mobile menu boolean belongs to the app
//! shell; the header only renders it and emits a toggle request, making it a
//! controlled view for that piece of state.

pub mod actions;
pub mod render;

use actions::{NAV_BASE, TOGGLE_MENU, TOGGLE_NOTIFICATIONS, TOGGLE_PROFILE};

/// Nav links shown in the tab bar (wide) or the expanded mobile menu (narrow).
pub const NAV_LINKS: &[&str] = &["Home", "Internships", "My Applications", "Help"];

/// A request the header cannot satisfy itself because the parent owns the
/// state involved.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeaderEvent {
    /// Flip the parent-owned mobile menu boolean.
    ToggleMenu,
    /// A nav link was chosen (index into [`NAV_LINKS`]).
    Navigate(usize),
}

/// Outcome of offering a click to the header.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeaderReply {
    /// Not a header action; offer it to the next component.
    Ignored,
    /// Consumed; the header updated its own state.
    Consumed,
    /// Consumed, but the parent must apply the change.
    Emit(HeaderEvent),
}

pub struct HeaderBar {
    pub notifications_open: bool,
    pub profile_open: bool,
}

impl HeaderBar {
    pub fn new() -> Self {
        Self {
            notifications_open: false,
            profile_open: false,
        }
    }

    /// Flip the notification dropdown. Independent of the profile dropdown.
    pub fn toggle_notifications(&mut self) {
        self.notifications_open = !self.notifications_open;
    }

    /// Flip the profile dropdown. Independent of the notification dropdown.
    pub fn toggle_profile(&mut self) {
        self.profile_open = !self.profile_open;
    }

    /// Offer a click action to the header.
    pub fn handle_click(&mut self, action_id: u16) -> HeaderReply {
        match action_id {
            TOGGLE_NOTIFICATIONS => {
                self.toggle_notifications();
                HeaderReply::Consumed
            }
            TOGGLE_PROFILE => {
                self.toggle_profile();
                HeaderReply::Consumed
            }
            TOGGLE_MENU => HeaderReply::Emit(HeaderEvent::ToggleMenu),
            id if (NAV_BASE..NAV_BASE + NAV_LINKS.len() as u16).contains(&id) => {
                HeaderReply::Emit(HeaderEvent::Navigate((id - NAV_BASE) as usize))
            }
            _ => HeaderReply::Ignored,
        }
    }
}
