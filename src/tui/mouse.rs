//! Mouse event handling for the TUI.
//!
//! Clickable regions are cached by the renderer every frame; a left click
//! is hit-tested against whatever the current screen registered.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

use crate::dashboard::NavTab;
use crate::domain::Role;
use crate::shell::Shell;

/// Cached layout regions for mouse hit-testing. Reset each render frame.
#[derive(Default, Clone, Debug)]
pub struct LayoutAreas {
    /// Onboarding "Explore"/"Begin" button.
    pub advance_button: Rect,
    /// Login role buttons.
    pub role_buttons: Vec<(Rect, Role)>,
    pub authenticate_button: Rect,
    /// Dashboard sidebar rows.
    pub nav_items: Vec<(Rect, NavTab)>,
    pub logout_button: Rect,
}

impl LayoutAreas {
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// What a click landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    Advance,
    Role(Role),
    Authenticate,
    Nav(NavTab),
    Logout,
}

pub fn hit_test(areas: &LayoutAreas, col: u16, row: u16) -> Option<Hit> {
    if rect_contains(areas.advance_button, col, row) {
        return Some(Hit::Advance);
    }
    if let Some((_, role)) = areas
        .role_buttons
        .iter()
        .find(|(rect, _)| rect_contains(*rect, col, row))
    {
        return Some(Hit::Role(*role));
    }
    if rect_contains(areas.authenticate_button, col, row) {
        return Some(Hit::Authenticate);
    }
    if let Some((_, tab)) = areas
        .nav_items
        .iter()
        .find(|(rect, _)| rect_contains(*rect, col, row))
    {
        return Some(Hit::Nav(*tab));
    }
    if rect_contains(areas.logout_button, col, row) {
        return Some(Hit::Logout);
    }
    None
}

/// Handle a mouse event. Only left-button presses do anything.
pub fn handle_mouse(shell: &mut Shell, areas: &LayoutAreas, event: MouseEvent) {
    if event.kind != MouseEventKind::Down(MouseButton::Left) {
        return;
    }
    let Some(hit) = hit_test(areas, event.column, event.row) else {
        return;
    };
    // Regions belong to the frame just drawn, so they match the screen;
    // the shell still rejects anything out of place.
    let _ = match hit {
        Hit::Advance => shell.advance_onboarding().map(|_| ()),
        Hit::Role(role) => {
            if let Some(selector) = shell.role_selector() {
                selector.select_role(role);
            }
            Ok(())
        }
        Hit::Authenticate => shell.submit_login(),
        Hit::Nav(tab) => shell.select_tab(tab).map(|_| ()),
        Hit::Logout => shell.logout(),
    };
}

/// Check if a point is inside a rect.
fn rect_contains(r: Rect, col: u16, row: u16) -> bool {
    col >= r.x && col < r.x + r.width && row >= r.y && row < r.y + r.height
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_areas_hit_nothing() {
        assert_eq!(hit_test(&LayoutAreas::default(), 0, 0), None);
    }

    #[test]
    fn hits_nav_row() {
        let areas = LayoutAreas {
            nav_items: vec![
                (Rect::new(0, 3, 20, 1), NavTab::Overview),
                (Rect::new(0, 4, 20, 1), NavTab::Patients),
            ],
            ..LayoutAreas::default()
        };
        assert_eq!(hit_test(&areas, 5, 4), Some(Hit::Nav(NavTab::Patients)));
        assert_eq!(hit_test(&areas, 20, 4), None);
    }

    #[test]
    fn rect_edges_are_half_open() {
        let r = Rect::new(2, 2, 3, 1);
        assert!(rect_contains(r, 2, 2));
        assert!(rect_contains(r, 4, 2));
        assert!(!rect_contains(r, 5, 2));
        assert!(!rect_contains(r, 2, 3));
    }
}
