//! Key binding dispatch for the TUI.
//!
//! Ctrl+C or `q` quits anywhere. The splash screen takes no input; it
//! leaves on its own timer. Onboarding: Enter/Space/Right advance.
//! Login: arrows or Tab cycle roles, 1-4 pick one, Enter authenticates.
//! Dashboard: Up/Down walk the sidebar, 1-8 jump to a tab, Esc logs out.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::dashboard::NavTab;
use crate::domain::{Role, Screen};
use crate::shell::Shell;

/// Handle a key event, mutating shell state.
pub fn handle_key(shell: &mut Shell, key: KeyEvent) {
    if key.kind == KeyEventKind::Release {
        return;
    }

    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        shell.quit();
        return;
    }
    if key.code == KeyCode::Char('q') {
        shell.quit();
        return;
    }

    // Each branch only calls transitions valid for its own screen, so the
    // shell's guard never trips here.
    match shell.screen() {
        Screen::Splash => {}
        Screen::Onboarding => {
            if matches!(key.code, KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Right) {
                let _ = shell.advance_onboarding();
            }
        }
        Screen::Login => handle_login_key(shell, key),
        Screen::Dashboard => handle_dashboard_key(shell, key),
    }
}

fn handle_login_key(shell: &mut Shell, key: KeyEvent) {
    if key.code == KeyCode::Enter {
        let _ = shell.submit_login();
        return;
    }
    let Some(selector) = shell.role_selector() else {
        return;
    };
    match key.code {
        KeyCode::Right | KeyCode::Down | KeyCode::Tab => selector.next(),
        KeyCode::Left | KeyCode::Up | KeyCode::BackTab => selector.previous(),
        KeyCode::Char(c @ '1'..='4') => {
            let idx = (c as usize) - ('1' as usize);
            selector.select_role(Role::ALL[idx]);
        }
        _ => {}
    }
}

fn handle_dashboard_key(shell: &mut Shell, key: KeyEvent) {
    if key.code == KeyCode::Esc {
        let _ = shell.logout();
        return;
    }
    let Some(dashboard) = shell.dashboard() else {
        return;
    };
    match key.code {
        KeyCode::Down | KeyCode::Tab => dashboard.next_tab(),
        KeyCode::Up | KeyCode::BackTab => dashboard.previous_tab(),
        KeyCode::Char(c @ '1'..='8') => {
            let idx = (c as usize) - ('1' as usize);
            dashboard.select_tab(NavTab::ALL[idx]);
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use tokio::sync::mpsc;

    use super::*;
    use crate::mock::ClinicData;
    use crate::onboarding::default_deck;
    use crate::settings::Settings;
    use crate::shell::AppEvent;

    fn press(shell: &mut Shell, code: KeyCode) {
        handle_key(shell, KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn shell_on_onboarding() -> Shell {
        let (tx, _rx) = mpsc::unbounded_channel();
        let mut shell = Shell::new(Settings::default(), default_deck(), ClinicData::mock(), tx);
        shell.handle_event(AppEvent::SplashElapsed);
        shell
    }

    #[test]
    fn splash_ignores_keys() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let mut shell = Shell::new(Settings::default(), default_deck(), ClinicData::mock(), tx);
        press(&mut shell, KeyCode::Enter);
        assert_eq!(shell.screen(), Screen::Splash);
    }

    #[test]
    fn keyboard_walkthrough_to_dashboard() {
        let mut shell = shell_on_onboarding();
        for _ in 0..4 {
            press(&mut shell, KeyCode::Enter);
        }
        assert_eq!(shell.screen(), Screen::Login);

        press(&mut shell, KeyCode::Char('3'));
        press(&mut shell, KeyCode::Enter);
        assert_eq!(shell.screen(), Screen::Dashboard);
        assert_eq!(shell.session().role, Role::Nurse);

        press(&mut shell, KeyCode::Char('6'));
        assert_eq!(shell.dashboard().unwrap().active_tab(), NavTab::Vitals);

        press(&mut shell, KeyCode::Esc);
        assert_eq!(shell.screen(), Screen::Login);
    }

    #[test]
    fn arrows_cycle_roles() {
        let mut shell = shell_on_onboarding();
        shell.finish_onboarding().unwrap();
        press(&mut shell, KeyCode::Right);
        assert_eq!(shell.role_selector().unwrap().selected_role(), Role::Nurse);
        press(&mut shell, KeyCode::Left);
        press(&mut shell, KeyCode::Left);
        assert_eq!(shell.role_selector().unwrap().selected_role(), Role::Admin);
    }

    #[test]
    fn q_and_ctrl_c_quit() {
        let mut shell = shell_on_onboarding();
        press(&mut shell, KeyCode::Char('q'));
        assert!(shell.should_quit());

        let mut shell = shell_on_onboarding();
        handle_key(
            &mut shell,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        );
        assert!(shell.should_quit());
    }

    #[test]
    fn release_events_ignored() {
        let mut shell = shell_on_onboarding();
        let mut key = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        handle_key(&mut shell, key);
        assert_eq!(shell.screen(), Screen::Onboarding);
    }
}
