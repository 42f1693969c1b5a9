//! Header rendering: brand, nav links, dropdown toggles, and the mobile menu.

use std::cell::RefCell;
use std::rc::Rc;

use ratzilla::ratatui::layout::Rect;
use ratzilla::ratatui::style::{Color, Modifier, Style};
use ratzilla::ratatui::text::{Line, Span};
use ratzilla::ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratzilla::ratatui::Frame;

use crate::input::{is_narrow_layout, ClickState};
use crate::widgets::{ClickableList, TabBar};

use super::actions::{NAV_BASE, TOGGLE_MENU, TOGGLE_NOTIFICATIONS, TOGGLE_PROFILE};
use super::{HeaderBar, NAV_LINKS};

/// Render the bar into `bar_area`; dropdowns and the mobile menu overlay
/// whatever sits below it, so they draw against `full_area`.
pub fn render(
    header: &HeaderBar,
    menu_open: bool,
    f: &mut Frame,
    bar_area: Rect,
    full_area: Rect,
    click_state: &Rc<RefCell<ClickState>>,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(bar_area);
    f.render_widget(block, bar_area);
    if inner.height == 0 || inner.width == 0 {
        return;
    }
    let row = Rect::new(inner.x, inner.y, inner.width, 1);

    let narrow = is_narrow_layout(full_area.width);
    let mut cs = click_state.borrow_mut();

    // Brand
    let brand = if narrow {
        " Intern Portal"
    } else {
        " ◆ Internship Portal"
    };
    f.render_widget(
        Paragraph::new(Line::from(Span::styled(
            brand,
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ))),
        row,
    );
    let brand_width = Line::from(brand).width() as u16 + 2;

    // Right-anchored toggles; the hamburger only exists in the narrow layout
    let mut toggles = TabBar::new(" ")
        .tab(
            "Alerts",
            toggle_style(header.notifications_open),
            TOGGLE_NOTIFICATIONS,
        )
        .tab("Profile", toggle_style(header.profile_open), TOGGLE_PROFILE);
    if narrow {
        toggles = toggles.tab("☰", toggle_style(menu_open), TOGGLE_MENU);
    }
    let toggles_width = toggles.width().min(row.width);
    let toggles_area = Rect::new(
        row.x + row.width - toggles_width,
        row.y,
        toggles_width,
        1,
    );
    toggles.render(f, toggles_area, &mut cs);

    // Nav links live in the bar only when there is room for them
    if !narrow {
        let mut nav = TabBar::new("·");
        for (i, link) in NAV_LINKS.iter().enumerate() {
            nav = nav.tab(
                *link,
                Style::default().fg(Color::Gray),
                NAV_BASE + i as u16,
            );
        }
        let nav_width = nav.width();
        let available = row.width.saturating_sub(brand_width + toggles_width + 2);
        if nav_width <= available {
            let nav_area = Rect::new(row.x + brand_width, row.y, nav_width, 1);
            nav.render(f, nav_area, &mut cs);
        }
    }

    // Dropdowns stack below the bar at the right edge; both can be open at
    // once. Clicking a panel dismisses it (same toggle action).
    let mut panel_y = bar_area.y + bar_area.height;
    if header.notifications_open {
        panel_y = render_dropdown(
            f,
            full_area,
            panel_y,
            " Notifications ",
            &[
                " • Applications close Aug 31",
                " • 3 new IT internships posted",
                " • Complete your profile",
            ],
            Color::Yellow,
            TOGGLE_NOTIFICATIONS,
            &mut cs,
        );
    }
    if header.profile_open {
        render_dropdown(
            f,
            full_area,
            panel_y,
            " Profile ",
            &[" Guest Applicant", " Sign in to track applications"],
            Color::Cyan,
            TOGGLE_PROFILE,
            &mut cs,
        );
    }

    // Expanded mobile menu: the parent owns `menu_open`; this is pure view
    if narrow && menu_open {
        render_mobile_menu(f, full_area, bar_area, &mut cs);
    }
}

fn toggle_style(active: bool) -> Style {
    if active {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    }
}

/// Draw one dropdown panel; returns the row below it for stacking.
#[allow(clippy::too_many_arguments)]
fn render_dropdown(
    f: &mut Frame,
    full_area: Rect,
    y: u16,
    title: &'static str,
    lines: &[&'static str],
    color: Color,
    dismiss_action: u16,
    cs: &mut ClickState,
) -> u16 {
    let width = (full_area.width.min(34)).max(10);
    let height = lines.len() as u16 + 2;
    if y + height > full_area.y + full_area.height {
        return y;
    }
    let rect = Rect::new(full_area.x + full_area.width - width, y, width, height);

    let text: Vec<Line> = lines
        .iter()
        .map(|l| Line::from(Span::styled(*l, Style::default().fg(Color::White))))
        .collect();

    f.render_widget(Clear, rect);
    f.render_widget(
        Paragraph::new(text).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color))
                .title(title),
        ),
        rect,
    );
    cs.add_click_target(rect, dismiss_action);

    y + height
}

fn render_mobile_menu(f: &mut Frame, full_area: Rect, bar_area: Rect, cs: &mut ClickState) {
    let width = full_area.width.min(24);
    let height = NAV_LINKS.len() as u16 + 2;
    let y = bar_area.y + bar_area.height;
    if y + height > full_area.y + full_area.height {
        return;
    }
    let rect = Rect::new(full_area.x, y, width, height);

    // Anywhere on the panel that is not a link collapses the menu
    cs.add_click_target(rect, TOGGLE_MENU);

    let mut cl = ClickableList::new();
    for (i, link) in NAV_LINKS.iter().enumerate() {
        cl.push_clickable(
            Line::from(Span::styled(
                format!(" {}", link),
                Style::default().fg(Color::White),
            )),
            NAV_BASE + i as u16,
        );
    }

    f.render_widget(Clear, rect);
    cl.register_targets(rect, cs, 1, 1, 0);
    f.render_widget(
        Paragraph::new(cl.into_lines()).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .title(" Menu "),
        ),
        rect,
    );
}
