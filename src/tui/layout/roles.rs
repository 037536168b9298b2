//! Overview content per role. One draw function per [`RoleView`] variant.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Wrap};
use ratatui::Frame;

use super::shared::{
    draw_demographics, draw_queue, draw_stat_cards, draw_traffic, draw_vitals, panel, ACCENT,
};
use crate::dashboard::{AdminView, DoctorView, NurseView, ReceptionistView, RoleView};

pub(super) fn draw_role_view(f: &mut Frame, view: &RoleView, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(5)])
        .split(area);

    let title = vec![
        Line::from(Span::styled(
            view.title(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            view.subtitle().to_string(),
            Style::default().fg(Color::Gray),
        )),
    ];
    f.render_widget(Paragraph::new(title), rows[0]);

    match view {
        RoleView::Admin(v) => draw_admin(f, v, rows[1]),
        RoleView::Doctor(v) => draw_doctor(f, v, rows[1]),
        RoleView::Nurse(v) => draw_nurse(f, v, rows[1]),
        RoleView::Receptionist(v) => draw_receptionist(f, v, rows[1]),
    }
}

fn draw_doctor(f: &mut Frame, view: &DoctorView, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(8)])
        .split(area);
    draw_stat_cards(f, &view.stats, rows[0]);

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(2, 3), Constraint::Ratio(1, 3)])
        .split(rows[1]);
    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(view.queue.len() as u16 + 2),
            Constraint::Min(6),
        ])
        .split(cols[0]);
    draw_queue(f, "Current Queue", &view.queue, left[0]);
    draw_traffic(f, &view.weekly_traffic, left[1]);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7),
            Constraint::Length(view.demographics.len() as u16 + 2),
            Constraint::Min(0),
        ])
        .split(cols[1]);
    draw_telehealth_card(f, view.telehealth_waiting, right[0]);
    draw_demographics(f, &view.demographics, right[1]);
}

fn draw_nurse(f: &mut Frame, view: &NurseView, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(view.triage.len() as u16 + 3),
            Constraint::Min(5),
        ])
        .split(area);
    draw_vitals(f, "Triage Board", &view.triage, rows[0]);
    draw_queue(f, "Current Queue", &view.queue, rows[1]);
}

fn draw_receptionist(f: &mut Frame, view: &ReceptionistView, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(5)])
        .split(area);
    draw_stat_cards(f, &view.stats, rows[0]);
    draw_queue(f, "Front Desk Schedule", &view.schedule, rows[1]);
}

fn draw_admin(f: &mut Frame, view: &AdminView, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(8)])
        .split(area);
    draw_stat_cards(f, &view.stats, rows[0]);

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(2, 3), Constraint::Ratio(1, 3)])
        .split(rows[1]);
    draw_traffic(f, &view.weekly_traffic, cols[0]);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(view.demographics.len() as u16 + 2),
            Constraint::Min(3),
        ])
        .split(cols[1]);
    draw_demographics(f, &view.demographics, right[0]);
    f.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled("\u{25cf} ", Style::default().fg(Color::Green)),
            Span::raw("All services operational"),
        ]))
        .block(panel("System Health")),
        right[1],
    );
}

fn draw_telehealth_card(f: &mut Frame, waiting: usize, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(ACCENT));
    let text = vec![
        Line::from(Span::styled(
            "\u{25b6} Telehealth Queue is Ready",
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("{waiting} patients waiting in the virtual lounge. Join now to start sessions."),
            Style::default().fg(Color::Gray),
        )),
    ];
    f.render_widget(
        Paragraph::new(text).wrap(Wrap { trim: true }).block(block),
        area,
    );
}
