//! Onboarding carousel: one slide, progress dots, and the advance button.

use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Wrap};
use ratatui::Frame;

use super::shared::{centered, draw_button, ACCENT};
use crate::onboarding::Carousel;
use crate::tui::mouse::LayoutAreas;

pub(super) fn draw_onboarding(
    f: &mut Frame,
    carousel: &Carousel,
    areas: &mut LayoutAreas,
    area: Rect,
) {
    let card = centered(area, 60, 18);
    let accent = carousel.current().map_or(ACCENT, |s| s.accent);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(accent));
    let inner = block.inner(card);
    f.render_widget(block, card);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // glyph
            Constraint::Length(2), // title
            Constraint::Min(3),    // description
            Constraint::Length(2), // progress dots
            Constraint::Length(3), // button
        ])
        .split(inner);

    if let Some(slide) = carousel.current() {
        f.render_widget(
            Paragraph::new(Span::styled(
                slide.glyph,
                Style::default().fg(slide.accent).add_modifier(Modifier::BOLD),
            ))
            .alignment(Alignment::Center),
            rows[0],
        );
        f.render_widget(
            Paragraph::new(Span::styled(
                slide.title,
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ))
            .alignment(Alignment::Center),
            rows[1],
        );
        f.render_widget(
            Paragraph::new(slide.description)
                .style(Style::default().fg(Color::Gray))
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true }),
            rows[2],
        );
    }

    let dots: Vec<Span> = carousel
        .progress()
        .into_iter()
        .map(|current| {
            if current {
                Span::styled("\u{25ac}\u{25ac} ", Style::default().fg(accent))
            } else {
                Span::styled("\u{2022} ", Style::default().fg(Color::DarkGray))
            }
        })
        .collect();
    f.render_widget(
        Paragraph::new(Line::from(dots)).alignment(Alignment::Center),
        rows[3],
    );

    let button = centered(rows[4], 30, 3);
    areas.advance_button = button;
    draw_button(f, button, &format!("{} \u{203a}", carousel.button_caption()), true);
}
