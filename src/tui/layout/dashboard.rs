//! Dashboard: sidebar navigation, header bar, and the active tab's canvas.
//!
//! ```text
//! ┌─ Silica ─────────┐┌──────────────────────────────────────────────┐
//! │ ▣ Dashboard      ││ ⌕ Search patients...   Today, Mar 24  ● OK │
//! │ ☺ Patients       │└──────────────────────────────────────────────┘
//! │ ...              │  (tab content: role view, tables, placeholder)
//! │ Dr. Julian Smith │
//! │ Doctor   [Esc] ⏻ │
//! └──────────────────┘
//! ```

use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use super::roles::draw_role_view;
use super::shared::{draw_patients, draw_queue, draw_vitals, panel, ACCENT};
use crate::dashboard::{DashboardScreen, NavTab, TabContent};
use crate::mock::ClinicData;
use crate::settings::Branding;
use crate::tui::mouse::LayoutAreas;

const SIDEBAR_WIDTH: u16 = 24;

pub(super) fn draw_dashboard(
    f: &mut Frame,
    dashboard: &DashboardScreen,
    data: &ClinicData,
    branding: &Branding,
    areas: &mut LayoutAreas,
    area: Rect,
) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(40)])
        .split(area);

    draw_sidebar(f, dashboard, branding, areas, columns[0]);

    let main = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(5)])
        .split(columns[1]);

    draw_header(f, data, main[0]);

    match dashboard.content(data) {
        TabContent::Overview(view) => draw_role_view(f, &view, main[1]),
        TabContent::Patients(patients) => draw_patients(f, &patients, main[1]),
        TabContent::Schedule(appointments) => {
            draw_queue(f, "Today's Schedule", &appointments, main[1])
        }
        TabContent::Vitals(rows) => draw_vitals(f, "Vitals", &rows, main[1]),
        TabContent::Placeholder(tab) => draw_placeholder(f, tab, main[1]),
    }
}

fn draw_sidebar(
    f: &mut Frame,
    dashboard: &DashboardScreen,
    branding: &Branding,
    areas: &mut LayoutAreas,
    area: Rect,
) {
    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", branding.clinic_name),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(NavTab::ALL.len() as u16), Constraint::Length(3)])
        .split(inner);

    for (i, tab) in NavTab::ALL.iter().enumerate() {
        let y = parts[0].y + i as u16;
        if y >= parts[0].bottom() {
            break;
        }
        let row = Rect::new(parts[0].x, y, parts[0].width, 1);
        let active = *tab == dashboard.active_tab();
        let style = if active {
            Style::default()
                .fg(Color::Black)
                .bg(ACCENT)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        let text = format!(" {} {:<15}{}", tab.icon(), tab.label(), i + 1);
        f.render_widget(Paragraph::new(text).style(style), row);
        areas.nav_items.push((row, *tab));
    }

    let footer = vec![
        Line::from(Span::styled(
            branding.clinician.clone(),
            Style::default().fg(Color::White),
        )),
        Line::from(vec![
            Span::styled(
                dashboard.role().label(),
                Style::default().fg(Color::Gray),
            ),
        ]),
        Line::from(Span::styled(
            "[Esc] Log out \u{23fb}",
            Style::default().fg(Color::LightRed),
        )),
    ];
    f.render_widget(Paragraph::new(footer), parts[1]);
    // Bottom line of the footer is the logout control.
    areas.logout_button = Rect::new(parts[1].x, parts[1].y + 2, parts[1].width, 1)
        .intersection(parts[1]);
}

fn draw_header(f: &mut Frame, data: &ClinicData, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(48)])
        .split(inner);

    f.render_widget(
        Paragraph::new(Span::styled(
            " \u{2315} Search patients, charts, or orders...",
            Style::default().fg(Color::DarkGray),
        )),
        cols[0],
    );
    f.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(data.clock, Style::default().fg(Color::Gray)),
            Span::raw("  "),
            Span::styled("\u{25cf} ", Style::default().fg(Color::Green)),
            Span::styled("System Healthy ", Style::default().fg(Color::Green)),
        ]))
        .alignment(Alignment::Right),
        cols[1],
    );
}

fn draw_placeholder(f: &mut Frame, tab: NavTab, area: Rect) {
    let text = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("{} {}", tab.icon(), tab.label()),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "This module is not available in the demo workspace.",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    f.render_widget(
        Paragraph::new(text)
            .alignment(Alignment::Center)
            .block(panel(tab.label())),
        area,
    );
}
