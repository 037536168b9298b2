//! Splash screen: clinic name and tagline in a centered card.

use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};
use ratatui::Frame;

use super::shared::{centered, ACCENT, GOLD};
use crate::settings::Branding;

pub(super) fn draw_splash(f: &mut Frame, branding: &Branding, area: Rect) {
    let card = centered(area, 36, 9);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(ACCENT));

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "\u{2665}",
            Style::default().fg(GOLD).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            branding.clinic_name.clone(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            branding.tagline.to_uppercase(),
            Style::default().fg(Color::Gray),
        )),
    ];
    f.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(block),
        card,
    );
}
