//! Toast notifications overlaying the page.
//!
//! Fire-and-forget: components call [`Toasts::notify`] and the app shell
//! ticks and renders the queue. Toasts expire on their own; nothing here is
//! clickable.

use ratzilla::ratatui::layout::Rect;
use ratzilla::ratatui::style::{Color, Modifier, Style};
use ratzilla::ratatui::text::{Line, Span};
use ratzilla::ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratzilla::ratatui::Frame;

/// How long a toast stays visible (ticks at 10 ticks/sec = 4 seconds).
pub const TOAST_TICKS: u32 = 40;

/// At most this many toasts on screen; oldest is dropped beyond it.
const MAX_TOASTS: usize = 4;

/// Visual treatment of a toast.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Normal,
    Destructive,
}

#[derive(Clone, Debug)]
pub struct Toast {
    pub title: String,
    pub description: String,
    pub severity: Severity,
    /// Remaining lifetime in ticks; dropped at zero.
    pub ticks_left: u32,
}

/// The toast queue, oldest first.
pub struct Toasts {
    entries: Vec<Toast>,
}

impl Toasts {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Queue a toast. Fire-and-forget; the caller never hears back.
    pub fn notify(&mut self, title: &str, description: &str, severity: Severity) {
        self.entries.push(Toast {
            title: title.to_string(),
            description: description.to_string(),
            severity,
            ticks_left: TOAST_TICKS,
        });
        if self.entries.len() > MAX_TOASTS {
            self.entries.remove(0);
        }
    }

    /// Age the queue and drop expired toasts.
    pub fn tick(&mut self, delta_ticks: u32) {
        if delta_ticks == 0 {
            return;
        }
        for toast in &mut self.entries {
            toast.ticks_left = toast.ticks_left.saturating_sub(delta_ticks);
        }
        self.entries.retain(|t| t.ticks_left > 0);
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[Toast] {
        &self.entries
    }

    /// Render the queue stacked below the header at the right edge,
    /// newest on top. Draws over whatever is underneath.
    pub fn render(&self, f: &mut Frame, area: Rect) {
        if self.entries.is_empty() {
            return;
        }

        let width = area.width.min(44);
        if width < 10 || area.height < 8 {
            return;
        }
        let x = area.x + area.width - width;
        let mut y = area.y + 3;

        for toast in self.entries.iter().rev() {
            let height = 5u16;
            if y + height > area.y + area.height {
                break;
            }
            let rect = Rect::new(x, y, width, height);

            let (border_color, title_color) = match toast.severity {
                Severity::Normal => (Color::Green, Color::Green),
                Severity::Destructive => (Color::Red, Color::Red),
            };

            let lines = vec![
                Line::from(Span::styled(
                    toast.title.clone(),
                    Style::default()
                        .fg(title_color)
                        .add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    toast.description.clone(),
                    Style::default().fg(Color::Gray),
                )),
            ];

            f.render_widget(Clear, rect);
            f.render_widget(
                Paragraph::new(lines)
                    .wrap(Wrap { trim: true })
                    .block(
                        Block::default()
                            .borders(Borders::ALL)
                            .border_style(Style::default().fg(border_color)),
                    ),
                rect,
            );

            y += height;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notify_queues_with_full_lifetime() {
        let mut toasts = Toasts::new();
        toasts.notify("Saved", "All good", Severity::Normal);

        assert_eq!(toasts.entries().len(), 1);
        assert_eq!(toasts.entries()[0].title, "Saved");
        assert_eq!(toasts.entries()[0].ticks_left, TOAST_TICKS);
    }

    #[test]
    fn tick_expires_toasts() {
        let mut toasts = Toasts::new();
        toasts.notify("One", "", Severity::Normal);

        toasts.tick(TOAST_TICKS - 1);
        assert_eq!(toasts.entries().len(), 1);

        toasts.tick(1);
        assert!(toasts.is_empty());
    }

    #[test]
    fn tick_zero_is_noop() {
        let mut toasts = Toasts::new();
        toasts.notify("One", "", Severity::Normal);
        toasts.tick(0);
        assert_eq!(toasts.entries()[0].ticks_left, TOAST_TICKS);
    }

    #[test]
    fn capacity_drops_oldest() {
        let mut toasts = Toasts::new();
        for i in 0..6 {
            toasts.notify(&format!("t{}", i), "", Severity::Normal);
        }
        assert_eq!(toasts.entries().len(), 4);
        assert_eq!(toasts.entries()[0].title, "t2");
        assert_eq!(toasts.entries()[3].title, "t5");
    }

    #[test]
    fn severities_are_independent_entries() {
        let mut toasts = Toasts::new();
        toasts.notify("ok", "", Severity::Normal);
        toasts.notify("boom", "", Severity::Destructive);

        assert_eq!(toasts.entries()[0].severity, Severity::Normal);
        assert_eq!(toasts.entries()[1].severity, Severity::Destructive);
    }
}
