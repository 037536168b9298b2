//! Frame layout: one full-screen view per shell screen, plus a one-line
//! key hint bar.
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │                                                 │
//! │   (splash | onboarding | login | dashboard)     │
//! │                                                 │
//! ├─────────────────────────────────────────────────┤
//! │ [login] ←→:Role  1-4:Pick  Enter:Authenticate  │
//! └─────────────────────────────────────────────────┘
//! ```

mod dashboard;
mod login;
mod onboarding;
mod roles;
pub(crate) mod shared;
mod splash;

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use super::mouse::LayoutAreas;
use crate::domain::Screen;
use crate::shell::{ActiveScreen, Shell};

/// Draw the full TUI layout. Clickable regions are re-registered into
/// `areas` on every call.
pub fn draw(f: &mut Frame, shell: &Shell, areas: &mut LayoutAreas) {
    areas.clear();

    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(5),    // screen
            Constraint::Length(1), // key hints
        ])
        .split(f.area());

    let branding = &shell.settings().branding;
    match shell.active() {
        ActiveScreen::Splash(_) => splash::draw_splash(f, branding, outer[0]),
        ActiveScreen::Onboarding(carousel) => {
            onboarding::draw_onboarding(f, carousel, areas, outer[0])
        }
        ActiveScreen::Login(selector) => {
            login::draw_login(f, selector, branding, areas, outer[0])
        }
        ActiveScreen::Dashboard(screen) => {
            dashboard::draw_dashboard(f, screen, shell.data(), branding, areas, outer[0])
        }
    }

    draw_hints(f, shell.screen(), outer[1]);
}

fn draw_hints(f: &mut Frame, screen: Screen, area: Rect) {
    let hints = match screen {
        Screen::Splash => "Loading...  q:Quit",
        Screen::Onboarding => "Enter/\u{2192}:Next  q:Quit",
        Screen::Login => "\u{2190}\u{2192}:Role  1-4:Pick  Enter:Authenticate  q:Quit",
        Screen::Dashboard => "\u{2191}\u{2193}:Navigate  1-8:Jump  Esc:Log out  q:Quit",
    };
    let line = Line::from(vec![
        Span::styled(format!(" [{screen}]"), Style::default().fg(Color::Green)),
        Span::raw("  "),
        Span::styled(hints, Style::default().fg(Color::DarkGray)),
    ]);
    f.render_widget(Paragraph::new(line), area);
}
