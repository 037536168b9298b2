//! Login: role grid, decorative credential fields, authenticate button.
//!
//! ```text
//! ╭──────────────────────────────────────╮
//! │            Welcome back              │
//! │        SILICA SECURE ACCESS          │
//! │ ACCESS TIER                          │
//! │ ┌ ADMIN ──────┐  ┌ DOCTOR ─────┐     │
//! │ ┌ NURSE ──────┐  ┌ RECEPTION ──┐     │
//! │ ┌ Institutional Email ─────────┐     │
//! │ ┌ Secure Password ─────────────┐     │
//! │ ┌ AUTHENTICATE ────────────────┐     │
//! ╰──────────────────────────────────────╯
//! ```

use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};
use ratatui::Frame;

use super::shared::{centered, draw_button, ACCENT};
use crate::domain::Role;
use crate::login::RoleSelector;
use crate::settings::Branding;
use crate::tui::mouse::LayoutAreas;

pub(super) fn draw_login(
    f: &mut Frame,
    selector: &RoleSelector,
    branding: &Branding,
    areas: &mut LayoutAreas,
    area: Rect,
) {
    let card = centered(area, 48, 26);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(ACCENT));
    let inner = block.inner(card);
    f.render_widget(block, card);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // heading
            Constraint::Length(1), // "Access Tier"
            Constraint::Length(3), // roles row 1
            Constraint::Length(3), // roles row 2
            Constraint::Length(3), // email
            Constraint::Length(3), // password
            Constraint::Length(3), // authenticate
            Constraint::Length(1), // biometric hint
            Constraint::Min(0),
        ])
        .split(inner);

    let heading = vec![
        Line::from(Span::styled(
            "Welcome back",
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("{} SECURE ACCESS", branding.clinic_name.to_uppercase()),
            Style::default().fg(Color::Gray),
        )),
    ];
    f.render_widget(
        Paragraph::new(heading).alignment(Alignment::Center),
        rows[0],
    );
    f.render_widget(
        Paragraph::new(Span::styled(
            " ACCESS TIER",
            Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD),
        )),
        rows[1],
    );

    for (pair, row) in Role::ALL.chunks(2).zip([rows[2], rows[3]]) {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)])
            .split(row);
        for (role, col) in pair.iter().zip(cols.iter()) {
            let selected = *role == selector.selected_role();
            draw_button(
                f,
                *col,
                &format!("{} {}", role.index() + 1, role.label().to_uppercase()),
                selected,
            );
            areas.role_buttons.push((*col, *role));
        }
    }

    draw_field(f, rows[4], "\u{263a}", "Institutional Email");
    draw_field(f, rows[5], "\u{26bf}", "Secure Password");

    areas.authenticate_button = rows[6];
    draw_button(f, rows[6], "AUTHENTICATE \u{2192}", true);

    f.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled("\u{25cf} ", Style::default().fg(Color::Green)),
            Span::styled("BIOMETRIC CHECK READY", Style::default().fg(Color::Gray)),
        ]))
        .alignment(Alignment::Center),
        rows[7],
    );
}

/// Placeholder input: never focused, never read.
fn draw_field(f: &mut Frame, area: Rect, icon: &str, placeholder: &str) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    f.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(format!("{icon} "), Style::default().fg(Color::Gray)),
            Span::styled(placeholder, Style::default().fg(Color::DarkGray)),
        ]))
        .block(block),
        area,
    );
}
