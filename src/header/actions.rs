//! Semantic action IDs for header click targets.
//!
//! Kept in a 900+ range so they never collide with the form's IDs; both
//! components register into the same frame-wide click state.

pub const TOGGLE_NOTIFICATIONS: u16 = 900;
pub const TOGGLE_PROFILE: u16 = 901;
pub const TOGGLE_MENU: u16 = 902;

// ── Nav links (base + link index) ───────────────────────────────
pub const NAV_BASE: u16 = 910;
