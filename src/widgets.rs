//! Reusable clickable UI components.
//!
//! Each component encapsulates both rendering and click target registration,
//! so visual output and interactive behaviour stay co-located.
//!
//! # Components
//!
//! - [`TabBar`] — horizontal label row with width-accurate click targets
//!   (header nav links, header toggles).
//! - [`ClickableList`] — vertical list pairing lines with click actions
//!   (form rows, option pickers).

use ratzilla::ratatui::layout::Rect;
use ratzilla::ratatui::style::{Color, Style};
use ratzilla::ratatui::text::{Line, Span};
use ratzilla::ratatui::widgets::Paragraph;
use ratzilla::ratatui::Frame;

use crate::input::ClickState;

// ── TabBar ─────────────────────────────────────────────────────

/// A horizontal tab bar.
///
/// Renders labels as a single row separated by a configurable separator
/// string, and registers click targets that match the actual rendered
/// positions (display widths, not byte lengths). Each target covers its
/// label plus half of the adjacent separator(s); the first tab extends to
/// the left edge of the area and the last to the right edge, so the row has
/// no dead zones.
pub struct TabBar<'a> {
    tabs: Vec<(String, Style, u16)>,
    separator: &'a str,
}

impl<'a> TabBar<'a> {
    pub fn new(separator: &'a str) -> Self {
        Self {
            tabs: Vec::new(),
            separator,
        }
    }

    /// Add a tab with its label, style, and action ID.
    pub fn tab(mut self, label: impl Into<String>, style: Style, action_id: u16) -> Self {
        self.tabs.push((label.into(), style, action_id));
        self
    }

    /// Display width of the rendered row (padded labels plus separators).
    /// Lets callers right-anchor the bar before rendering it.
    pub fn width(&self) -> u16 {
        let sep = Line::from(self.separator).width() as u16;
        let mut w = 0u16;
        for (i, (label, _, _)) in self.tabs.iter().enumerate() {
            if i > 0 {
                w += sep;
            }
            w += Line::from(format!(" {} ", label)).width() as u16;
        }
        w
    }

    /// Render the tab bar and register click targets.
    pub fn render(self, f: &mut Frame, area: Rect, cs: &mut ClickState) {
        if self.tabs.is_empty() || area.width == 0 {
            return;
        }

        let sep_width = Line::from(self.separator).width() as u16;
        let mut spans: Vec<Span> = Vec::new();
        // (label display width, action id) per tab, in render order.
        let mut widths: Vec<(u16, u16)> = Vec::new();

        for (i, (label, style, action_id)) in self.tabs.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(
                    self.separator,
                    Style::default().fg(Color::DarkGray),
                ));
            }
            let padded = format!(" {} ", label);
            widths.push((Line::from(padded.as_str()).width() as u16, *action_id));
            spans.push(Span::styled(padded, *style));
        }

        f.render_widget(Paragraph::new(Line::from(spans)), area);

        // Starting column of each label, relative to the area.
        let mut starts: Vec<u16> = Vec::with_capacity(widths.len());
        let mut cursor: u16 = 0;
        for (i, &(w, _)) in widths.iter().enumerate() {
            if i > 0 {
                cursor += sep_width;
            }
            starts.push(cursor);
            cursor += w;
        }

        let n = widths.len();
        for i in 0..n {
            let (_, action_id) = widths[i];

            // First tab reaches the left edge, others the midpoint of the
            // separator to their left.
            let left = if i == 0 {
                0
            } else {
                let prev_end = starts[i - 1] + widths[i - 1].0;
                prev_end + (starts[i] - prev_end) / 2
            };

            // Last tab reaches the right edge, others the midpoint of the
            // separator to their right.
            let right = if i == n - 1 {
                area.width
            } else {
                let cur_end = starts[i] + widths[i].0;
                cur_end + (starts[i + 1] - cur_end) / 2
            };

            let w = right.saturating_sub(left);
            if w > 0 {
                cs.add_click_target(
                    Rect::new(area.x + left, area.y, w, area.height.max(1)),
                    action_id,
                );
            }
        }
    }
}

// ── ClickableList ──────────────────────────────────────────────

/// A builder that pairs rendered [`Line`]s with click actions.
///
/// Instead of manually calculating row offsets for click targets, annotate
/// lines as clickable when you add them, then call
/// [`register_targets`](ClickableList::register_targets) once after building
/// to register every target at the row it actually landed on — inserting or
/// removing lines above a clickable one moves its target automatically.
pub struct ClickableList<'a> {
    lines: Vec<Line<'a>>,
    /// `(line_index, action_id)` pairs — line_index is the index into `lines`.
    actions: Vec<(u16, u16)>,
}

impl<'a> ClickableList<'a> {
    pub fn new() -> Self {
        Self {
            lines: Vec::new(),
            actions: Vec::new(),
        }
    }

    /// Add a non-clickable line.
    pub fn push(&mut self, line: Line<'a>) {
        self.lines.push(line);
    }

    /// Add a clickable line with a semantic action ID.
    pub fn push_clickable(&mut self, line: Line<'a>, action_id: u16) {
        let idx = self.lines.len() as u16;
        self.actions.push((idx, action_id));
        self.lines.push(line);
    }

    /// Total number of lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Consume the builder, returning the lines for rendering.
    pub fn into_lines(self) -> Vec<Line<'a>> {
        self.lines
    }

    /// Register click targets for all clickable lines.
    ///
    /// * `area` — the widget area (including borders).
    /// * `cs` — the shared click state.
    /// * `top_offset` — rows before content (e.g. 1 for a top border).
    /// * `bottom_offset` — rows after content (e.g. 1 for a bottom border).
    /// * `scroll` — vertical scroll offset in rows (0 if not scrollable);
    ///   must match the `scroll` passed to the rendering `Paragraph`.
    ///
    /// Lines are assumed to occupy one visual row each (no wrapping).
    pub fn register_targets(
        &self,
        area: Rect,
        cs: &mut ClickState,
        top_offset: u16,
        bottom_offset: u16,
        scroll: u16,
    ) {
        let content_y = area.y + top_offset;
        let content_end = area.y + area.height.saturating_sub(bottom_offset);

        for &(line_idx, action_id) in &self.actions {
            if line_idx < scroll {
                continue;
            }
            let row = content_y + (line_idx - scroll);
            if row >= content_end {
                continue;
            }
            cs.add_row_target(area, row, action_id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::ClickState;

    // ── TabBar tests ───────────────────────────────────────────

    #[test]
    fn tab_bar_width_counts_padding_and_separators() {
        let bar = TabBar::new(" | ")
            .tab("Home", Style::default(), 1)
            .tab("Help", Style::default(), 2);
        // " Home " (6) + " | " (3) + " Help " (6)
        assert_eq!(bar.width(), 15);
    }

    #[test]
    fn tab_bar_empty_width() {
        let bar = TabBar::new(" | ");
        assert_eq!(bar.width(), 0);
    }

    // ── ClickableList tests ────────────────────────────────────

    #[test]
    fn clickable_list_basic() {
        let mut cl = ClickableList::new();
        cl.push(Line::from("header"));
        cl.push_clickable(Line::from("item 0"), 10);
        cl.push_clickable(Line::from("item 1"), 11);
        cl.push(Line::from("footer"));

        assert_eq!(cl.len(), 4);

        // area with Borders::ALL → top_offset=1, bottom_offset=1
        let area = Rect::new(0, 5, 80, 10);
        let mut cs = ClickState::new();
        cl.register_targets(area, &mut cs, 1, 1, 0);

        // "header" is line 0, not clickable
        // "item 0" is line 1 → row = 5 + 1 + 1 = 7
        // "item 1" is line 2 → row = 5 + 1 + 2 = 8
        assert_eq!(cs.targets.len(), 2);
        assert_eq!(cs.hit_test(10, 7), Some(10));
        assert_eq!(cs.hit_test(10, 8), Some(11));
        // header row and footer rows should not match
        assert_eq!(cs.hit_test(10, 6), None);
        assert_eq!(cs.hit_test(10, 9), None);
    }

    #[test]
    fn clickable_list_with_scroll() {
        let mut cl = ClickableList::new();
        cl.push_clickable(Line::from("item 0"), 100);
        cl.push_clickable(Line::from("item 1"), 101);
        cl.push_clickable(Line::from("item 2"), 102);
        cl.push_clickable(Line::from("item 3"), 103);

        let area = Rect::new(0, 10, 80, 5);
        let mut cs = ClickState::new();
        // scroll=2: items 0 and 1 are scrolled out of view
        cl.register_targets(area, &mut cs, 0, 1, 2);

        // item 2 (line_idx=2) → row = 10 + 0 + (2-2) = 10
        // item 3 (line_idx=3) → row = 10 + 0 + (3-2) = 11
        assert_eq!(cs.targets.len(), 2);
        assert_eq!(cs.hit_test(10, 10), Some(102));
        assert_eq!(cs.hit_test(10, 11), Some(103));
        // scrolled items should not register
        assert_eq!(cs.hit_test(10, 8), None);
        assert_eq!(cs.hit_test(10, 9), None);
    }

    #[test]
    fn clickable_list_clipped_by_area() {
        let mut cl = ClickableList::new();
        for i in 0..20 {
            cl.push_clickable(Line::from(format!("item {}", i)), 50 + i as u16);
        }

        // Small area with borders: only 3 content rows (height=5, border top+bottom)
        let area = Rect::new(0, 0, 80, 5);
        let mut cs = ClickState::new();
        cl.register_targets(area, &mut cs, 1, 1, 0);

        assert_eq!(cs.targets.len(), 3);
        assert_eq!(cs.hit_test(10, 1), Some(50)); // item 0
        assert_eq!(cs.hit_test(10, 3), Some(52)); // item 2
        assert_eq!(cs.hit_test(10, 4), None); // clipped by bottom border
    }

    #[test]
    fn clickable_list_empty() {
        let cl: ClickableList = ClickableList::new();
        assert!(cl.is_empty());

        let area = Rect::new(0, 0, 80, 10);
        let mut cs = ClickState::new();
        cl.register_targets(area, &mut cs, 1, 1, 0);
        assert_eq!(cs.targets.len(), 0);
    }

    #[test]
    fn clickable_list_insert_line_shifts_targets() {
        // Inserting a non-clickable line before clickable items adjusts
        // their rows automatically.
        let mut cl = ClickableList::new();
        cl.push(Line::from("label"));
        cl.push(Line::from("error message")); // extra line
        cl.push_clickable(Line::from("choose"), 42);

        let area = Rect::new(0, 0, 80, 10);
        let mut cs = ClickState::new();
        cl.register_targets(area, &mut cs, 1, 1, 0);

        // "choose" is line 2 → row = 0 + 1 + 2 = 3
        assert_eq!(cs.hit_test(10, 3), Some(42));
        assert_eq!(cs.hit_test(10, 2), None); // error message, not clickable
    }

    #[test]
    fn clickable_list_into_lines() {
        let mut cl = ClickableList::new();
        cl.push(Line::from("a"));
        cl.push_clickable(Line::from("b"), 1);
        cl.push(Line::from("c"));

        let lines = cl.into_lines();
        assert_eq!(lines.len(), 3);
    }
}
