//! Shared layout helpers: centering, status badges, and the cards and
//! tables several dashboard views reuse.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{BarChart, Block, Borders, Cell, Gauge, Paragraph, Row, Table};
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

use crate::dashboard::TriageRow;
use crate::domain::{Appointment, Patient, VisitStatus};
use crate::mock::{Demographic, StatCard};

/// Brand accent.
pub(crate) const ACCENT: Color = Color::Rgb(37, 150, 190);
/// Gold secondary accent.
pub(crate) const GOLD: Color = Color::Rgb(212, 175, 55);

/// Display width of a string in terminal columns.
pub(crate) fn display_width(s: &str) -> u16 {
    UnicodeWidthStr::width(s).min(u16::MAX as usize) as u16
}

/// A `width` x `height` rect centered in `area`, clipped to it.
pub(crate) fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    Rect::new(
        area.x + (area.width - w) / 2,
        area.y + (area.height - h) / 2,
        w,
        h,
    )
}

pub(crate) fn panel(title: &str) -> Block<'_> {
    Block::default()
        .title(format!(" {title} "))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title_style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD))
}

pub(crate) fn status_style(status: VisitStatus) -> Style {
    match status {
        VisitStatus::CheckedIn => Style::default().fg(Color::Green),
        VisitStatus::Scheduled => Style::default().fg(Color::Yellow),
        VisitStatus::InProgress => Style::default().fg(ACCENT),
        VisitStatus::Completed => Style::default().fg(Color::Gray),
    }
}

pub(crate) fn status_badge(status: VisitStatus) -> Span<'static> {
    Span::styled(
        format!("[{}]", status.label()),
        status_style(status).add_modifier(Modifier::BOLD),
    )
}

/// A bordered button with its caption centered. Highlighted buttons are
/// filled with the accent colour.
pub(crate) fn draw_button(f: &mut Frame, area: Rect, caption: &str, highlighted: bool) {
    let (border, text) = if highlighted {
        (
            Style::default().fg(ACCENT),
            Style::default()
                .fg(Color::Black)
                .bg(ACCENT)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        (
            Style::default().fg(Color::DarkGray),
            Style::default().fg(Color::Gray),
        )
    };
    let block = Block::default().borders(Borders::ALL).border_style(border);
    let inner = block.inner(area);
    f.render_widget(block, area);
    if inner.height == 0 {
        return;
    }
    let pad = inner.width.saturating_sub(display_width(caption)) / 2;
    let label = format!("{}{caption}", " ".repeat(pad as usize));
    f.render_widget(
        Paragraph::new(label).style(text),
        Rect::new(inner.x, inner.y + inner.height / 2, inner.width, 1),
    );
}

/// Row of headline figures, split evenly across `area`.
pub(crate) fn draw_stat_cards(f: &mut Frame, cards: &[StatCard], area: Rect) {
    if cards.is_empty() {
        return;
    }
    let constraints: Vec<Constraint> = cards
        .iter()
        .map(|_| Constraint::Ratio(1, cards.len() as u32))
        .collect();
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    for (card, column) in cards.iter().zip(columns.iter()) {
        let lines = vec![
            Line::from(Span::styled(card.label, Style::default().fg(Color::Gray))),
            Line::from(Span::styled(
                card.value.clone(),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                card.subtext.to_uppercase(),
                Style::default().fg(ACCENT),
            )),
        ];
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray));
        f.render_widget(Paragraph::new(lines).block(block), *column);
    }
}

/// "Current Queue": one line per appointment with initials, time, kind
/// and status.
pub(crate) fn draw_queue(f: &mut Frame, title: &str, queue: &[Appointment], area: Rect) {
    let rows: Vec<Row> = queue
        .iter()
        .map(|appt| {
            Row::new(vec![
                Cell::from(Span::styled(
                    format!("({})", appt.initials()),
                    Style::default().fg(Color::Gray),
                )),
                Cell::from(Span::styled(
                    appt.patient_name,
                    Style::default().add_modifier(Modifier::BOLD),
                )),
                Cell::from(appt.time),
                Cell::from(appt.kind.label()),
                Cell::from(status_badge(appt.status)),
            ])
        })
        .collect();
    let table = Table::new(
        rows,
        [
            Constraint::Length(5),
            Constraint::Min(16),
            Constraint::Length(9),
            Constraint::Length(11),
            Constraint::Length(14),
        ],
    )
    .block(panel(title));
    f.render_widget(table, area);
}

pub(crate) fn draw_traffic(f: &mut Frame, traffic: &[(&'static str, u64)], area: Rect) {
    let chart = BarChart::default()
        .block(panel("Clinic Traffic (Weekly)"))
        .data(traffic)
        .bar_width(5)
        .bar_gap(2)
        .bar_style(Style::default().fg(ACCENT))
        .value_style(Style::default().fg(Color::Black).bg(ACCENT));
    f.render_widget(chart, area);
}

pub(crate) fn draw_demographics(f: &mut Frame, demographics: &[Demographic], area: Rect) {
    let block = panel("Patient Demographics");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let colors = [ACCENT, Color::Green, Color::Yellow];
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(demographics.iter().map(|_| Constraint::Length(1)))
        .split(inner);
    for (i, (item, row)) in demographics.iter().zip(rows.iter()).enumerate() {
        let gauge = Gauge::default()
            .gauge_style(Style::default().fg(colors[i % colors.len()]).bg(Color::Black))
            .percent(item.percent.min(100))
            .label(format!("{} {}%", item.label, item.percent));
        f.render_widget(gauge, *row);
    }
}

pub(crate) fn draw_patients(f: &mut Frame, patients: &[Patient], area: Rect) {
    let header = Row::new(vec!["ID", "Name", "Age", "Gender", "Last Visit", "Status"])
        .style(Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD));
    let rows: Vec<Row> = patients
        .iter()
        .map(|p| {
            Row::new(vec![
                Cell::from(p.id),
                Cell::from(p.name),
                Cell::from(p.age.to_string()),
                Cell::from(p.gender),
                Cell::from(p.last_visit),
                Cell::from(status_badge(p.status)),
            ])
        })
        .collect();
    let table = Table::new(
        rows,
        [
            Constraint::Length(4),
            Constraint::Min(18),
            Constraint::Length(5),
            Constraint::Length(8),
            Constraint::Length(12),
            Constraint::Length(14),
        ],
    )
    .header(header)
    .block(panel("Patients"));
    f.render_widget(table, area);
}

pub(crate) fn draw_vitals(f: &mut Frame, title: &str, triage: &[TriageRow], area: Rect) {
    let header = Row::new(vec!["Patient", "Age", "BP", "HR", "Temp", "SpO2", "Status"])
        .style(Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD));
    let dash = || Cell::from(Span::styled("--", Style::default().fg(Color::DarkGray)));
    let rows: Vec<Row> = triage
        .iter()
        .map(|r| {
            let mut cells = vec![Cell::from(r.name), Cell::from(r.age.to_string())];
            match &r.vitals {
                Some(v) => cells.extend([
                    Cell::from(v.bp),
                    Cell::from(format!("{} bpm", v.heart_rate)),
                    Cell::from(format!("{:.1}\u{b0}F", v.temperature)),
                    Cell::from(format!("{}%", v.spo2)),
                ]),
                None => cells.extend([dash(), dash(), dash(), dash()]),
            }
            cells.push(Cell::from(status_badge(r.status)));
            Row::new(cells)
        })
        .collect();
    let table = Table::new(
        rows,
        [
            Constraint::Min(18),
            Constraint::Length(4),
            Constraint::Length(8),
            Constraint::Length(8),
            Constraint::Length(8),
            Constraint::Length(5),
            Constraint::Length(14),
        ],
    )
    .header(header)
    .block(panel(title));
    f.render_widget(table, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_fits_inside() {
        let area = Rect::new(0, 0, 100, 40);
        assert_eq!(centered(area, 40, 10), Rect::new(30, 15, 40, 10));
    }

    #[test]
    fn centered_clips_to_small_area() {
        let area = Rect::new(5, 5, 20, 4);
        assert_eq!(centered(area, 40, 10), area);
    }

    #[test]
    fn display_width_counts_columns() {
        assert_eq!(display_width("Nurse"), 5);
        assert_eq!(display_width("漢字"), 4);
    }
}
