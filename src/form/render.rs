//! Application form rendering: field rows with inline errors, option
//! pickers, and the submit control.

use std::cell::RefCell;
use std::rc::Rc;

use ratzilla::ratatui::layout::Rect;
use ratzilla::ratatui::style::{Color, Modifier, Style};
use ratzilla::ratatui::text::{Line, Span};
use ratzilla::ratatui::widgets::{Block, Borders, Paragraph};
use ratzilla::ratatui::Frame;

use crate::input::ClickState;
use crate::widgets::ClickableList;

use super::actions::{
    FOCUS_NAME, OPEN_DEGREE, OPEN_SECTOR, OPEN_SKILLS, OPEN_STREAM, OPEN_YEAR, PICKER_CLOSE,
    PICK_DEGREE_BASE, PICK_SECTOR_BASE, PICK_STREAM_BASE, PICK_YEAR_BASE, SUBMIT,
    TOGGLE_SKILL_BASE, YEAR_SCROLL_DOWN, YEAR_SCROLL_UP,
};
use super::options::{self, Degree, Sector, Skill, Stream};
use super::state::{FormState, Picker, SubmitPhase};
use super::validate::Field;

/// Widest column the form occupies; extra width becomes margins.
const FORM_MAX_WIDTH: u16 = 70;

pub fn render(
    state: &FormState,
    f: &mut Frame,
    area: Rect,
    click_state: &Rc<RefCell<ClickState>>,
) {
    let area = centered(area, FORM_MAX_WIDTH);
    match state.picker {
        Some(picker) => render_picker(state, picker, f, area, click_state),
        None => render_fields(state, f, area, click_state),
    }
}

fn centered(area: Rect, max_width: u16) -> Rect {
    if area.width <= max_width {
        return area;
    }
    let x = area.x + (area.width - max_width) / 2;
    Rect::new(x, area.y, max_width, area.height)
}

fn bordered(title: &'static str, color: Color) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color))
        .title(title)
}

// ── Field overview ─────────────────────────────────────────────

fn field_row(label: &str, value: String, filled: bool) -> Line<'static> {
    let value_style = if filled {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    Line::from(vec![
        Span::styled(
            format!(" {:<9}", label),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(value, value_style),
    ])
}

fn push_error(cl: &mut ClickableList<'static>, state: &FormState, field: Field) {
    if let Some(message) = state.error_for(field) {
        cl.push(Line::from(Span::styled(
            format!("           {}", message),
            Style::default().fg(Color::Red),
        )));
    }
}

fn render_fields(
    state: &FormState,
    f: &mut Frame,
    area: Rect,
    click_state: &Rc<RefCell<ClickState>>,
) {
    let mut cl = ClickableList::new();

    cl.push(Line::from(Span::styled(
        " Apply for the internship programme. Tap a field to fill it in.",
        Style::default().fg(Color::Gray),
    )));
    cl.push(Line::from(""));

    // Name (text input)
    let (name_value, name_filled) = if state.draft.name.is_empty() && !state.editing_name {
        ("Enter your full name".to_string(), false)
    } else {
        let mut text = state.draft.name.clone();
        if state.editing_name {
            text.push('▏');
        }
        (text, true)
    };
    cl.push_clickable(field_row("Name", name_value, name_filled), FOCUS_NAME);
    push_error(&mut cl, state, Field::Name);

    // Degree
    let degree = state.draft.degree.map(|d| d.name().to_string());
    cl.push_clickable(
        field_row(
            "Degree",
            degree.clone().unwrap_or_else(|| "Select a degree".to_string()),
            degree.is_some(),
        ),
        OPEN_DEGREE,
    );
    push_error(&mut cl, state, Field::Degree);

    // Year
    let year = state.draft.year.map(|y| y.to_string());
    cl.push_clickable(
        field_row(
            "Year",
            year.clone().unwrap_or_else(|| "Select a year".to_string()),
            year.is_some(),
        ),
        OPEN_YEAR,
    );
    push_error(&mut cl, state, Field::Year);

    // Skills (multi-select summary)
    let skills = if state.draft.skills.is_empty() {
        None
    } else {
        Some(
            state
                .draft
                .skills
                .iter()
                .map(|s| s.name())
                .collect::<Vec<_>>()
                .join(", "),
        )
    };
    cl.push_clickable(
        field_row(
            "Skills",
            skills
                .clone()
                .unwrap_or_else(|| "Select at least one skill".to_string()),
            skills.is_some(),
        ),
        OPEN_SKILLS,
    );
    push_error(&mut cl, state, Field::Skills);

    // Sector
    let sector = state.draft.sector.map(|s| s.name().to_string());
    cl.push_clickable(
        field_row(
            "Sector",
            sector.clone().unwrap_or_else(|| "Select a sector".to_string()),
            sector.is_some(),
        ),
        OPEN_SECTOR,
    );
    push_error(&mut cl, state, Field::Sector);

    // Stream
    let stream = state.draft.stream.map(|s| s.name().to_string());
    cl.push_clickable(
        field_row(
            "Stream",
            stream.clone().unwrap_or_else(|| "Select a stream".to_string()),
            stream.is_some(),
        ),
        OPEN_STREAM,
    );
    push_error(&mut cl, state, Field::Stream);

    cl.push(Line::from(""));

    // Submit control: disabled (unregistered) while a request is in flight
    match state.phase {
        SubmitPhase::Idle => {
            cl.push_clickable(
                Line::from(Span::styled(
                    "  ▶ Submit Application  ",
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                )),
                SUBMIT,
            );
        }
        SubmitPhase::Submitting => {
            cl.push(Line::from(Span::styled(
                "  ◌ Submitting...  ",
                Style::default().fg(Color::DarkGray),
            )));
        }
    }

    let mut cs = click_state.borrow_mut();
    cl.register_targets(area, &mut cs, 1, 1, 0);
    f.render_widget(
        Paragraph::new(cl.into_lines()).block(bordered(" Internship Application ", Color::Green)),
        area,
    );
}

// ── Pickers ────────────────────────────────────────────────────

fn render_picker(
    state: &FormState,
    picker: Picker,
    f: &mut Frame,
    area: Rect,
    click_state: &Rc<RefCell<ClickState>>,
) {
    match picker {
        Picker::Degree => render_choice_picker(
            f,
            area,
            click_state,
            " Select Degree ",
            &Degree::all().iter().map(|d| d.name()).collect::<Vec<_>>(),
            state.draft.degree.map(|d| d.name()),
            PICK_DEGREE_BASE,
        ),
        Picker::Sector => render_choice_picker(
            f,
            area,
            click_state,
            " Select Sector ",
            &Sector::all().iter().map(|s| s.name()).collect::<Vec<_>>(),
            state.draft.sector.map(|s| s.name()),
            PICK_SECTOR_BASE,
        ),
        Picker::Stream => render_choice_picker(
            f,
            area,
            click_state,
            " Select Stream ",
            &Stream::all().iter().map(|s| s.name()).collect::<Vec<_>>(),
            state.draft.stream.map(|s| s.name()),
            PICK_STREAM_BASE,
        ),
        Picker::Skills => render_skills_picker(state, f, area, click_state),
        Picker::Year => render_year_picker(state, f, area, click_state),
    }
}

/// Keyboard hint for the nth option ("[1]".."[9]", "[0]" for the tenth).
fn digit_hint(index: usize) -> String {
    match index {
        0..=8 => format!("[{}]", index + 1),
        9 => "[0]".to_string(),
        _ => "   ".to_string(),
    }
}

fn render_choice_picker(
    f: &mut Frame,
    area: Rect,
    click_state: &Rc<RefCell<ClickState>>,
    title: &'static str,
    names: &[&'static str],
    selected: Option<&str>,
    base: u16,
) {
    let mut cl = ClickableList::new();

    for (i, name) in names.iter().enumerate() {
        let is_selected = selected == Some(*name);
        let marker = if is_selected { "▸" } else { " " };
        let style = if is_selected {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        cl.push_clickable(
            Line::from(vec![
                Span::styled(format!(" {} ", marker), style),
                Span::styled(digit_hint(i), Style::default().fg(Color::Yellow)),
                Span::styled(format!(" {}", name), style),
            ]),
            base + i as u16,
        );
    }

    cl.push(Line::from(""));
    cl.push_clickable(
        Line::from(Span::styled(
            " [Esc] Close",
            Style::default().fg(Color::DarkGray),
        )),
        PICKER_CLOSE,
    );

    let mut cs = click_state.borrow_mut();
    cl.register_targets(area, &mut cs, 1, 1, 0);
    f.render_widget(
        Paragraph::new(cl.into_lines()).block(bordered(title, Color::Cyan)),
        area,
    );
}

fn render_skills_picker(
    state: &FormState,
    f: &mut Frame,
    area: Rect,
    click_state: &Rc<RefCell<ClickState>>,
) {
    let mut cl = ClickableList::new();

    cl.push(Line::from(Span::styled(
        " Tick every skill that applies",
        Style::default().fg(Color::Gray),
    )));
    cl.push(Line::from(""));

    for (i, skill) in Skill::all().iter().enumerate() {
        let checked = state.draft.skills.contains(skill);
        let glyph = if checked { "[x]" } else { "[ ]" };
        let style = if checked {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        cl.push_clickable(
            Line::from(vec![
                Span::styled(format!(" {} ", glyph), style),
                Span::styled(skill.name(), style),
            ]),
            TOGGLE_SKILL_BASE + i as u16,
        );
    }

    cl.push(Line::from(""));
    cl.push_clickable(
        Line::from(Span::styled(
            " [Esc] Done",
            Style::default().fg(Color::DarkGray),
        )),
        PICKER_CLOSE,
    );

    let mut cs = click_state.borrow_mut();
    cl.register_targets(area, &mut cs, 1, 1, 0);
    f.render_widget(
        Paragraph::new(cl.into_lines()).block(bordered(" Select Skills ", Color::Magenta)),
        area,
    );
}

/// The year list is long; scroll rows bracket a scrolled window. Both the
/// option list and the year range itself are rebuilt from the host clock
/// every frame.
fn render_year_picker(
    state: &FormState,
    f: &mut Frame,
    area: Rect,
    click_state: &Rc<RefCell<ClickState>>,
) {
    let current_year = options::current_year();
    let years = options::year_options(current_year);

    let block = bordered(" Select Year ", Color::Cyan);
    let inner = block.inner(area);
    f.render_widget(block, area);
    if inner.height < 3 || inner.width == 0 {
        return;
    }

    let up_row = Rect::new(inner.x, inner.y, inner.width, 1);
    let down_row = Rect::new(inner.x, inner.y + inner.height - 1, inner.width, 1);
    let list_area = Rect::new(inner.x, inner.y + 1, inner.width, inner.height - 2);

    let mut cs = click_state.borrow_mut();

    f.render_widget(
        Paragraph::new(Line::from(Span::styled(
            " ▲ earlier",
            Style::default().fg(Color::DarkGray),
        ))),
        up_row,
    );
    cs.add_click_target(up_row, YEAR_SCROLL_UP);

    f.render_widget(
        Paragraph::new(Line::from(Span::styled(
            " ▼ later",
            Style::default().fg(Color::DarkGray),
        ))),
        down_row,
    );
    cs.add_click_target(down_row, YEAR_SCROLL_DOWN);

    let mut cl = ClickableList::new();
    for (i, year) in years.iter().enumerate() {
        let is_selected = state.draft.year == Some(*year);
        let marker = if is_selected { "▸" } else { " " };
        let suffix = if *year == current_year { "  (current)" } else { "" };
        let style = if is_selected {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        cl.push_clickable(
            Line::from(Span::styled(format!(" {} {}{}", marker, year, suffix), style)),
            PICK_YEAR_BASE + i as u16,
        );
    }

    let scroll = state.year_scroll;
    cl.register_targets(list_area, &mut cs, 0, 0, scroll);
    f.render_widget(
        Paragraph::new(cl.into_lines()).scroll((scroll, 0)),
        list_area,
    );
}
