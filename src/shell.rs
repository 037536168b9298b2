//! Application shell: owner of the session.
//!
//! Holds the one piece of cross-screen state, the (screen, role) pair,
//! and exactly one active screen. Screens keep their own local state and
//! report what they want as return values; only the shell changes screens.
//!
//! ```text
//! Splash ──(timer)──▶ Onboarding ──finish──▶ Login ──login(role)──▶ Dashboard
//!                                              ▲                        │
//!                                              └──────── logout ────────┘
//! ```

use tokio::sync::mpsc::UnboundedSender;
use tracing::{debug, info, warn};

use crate::dashboard::{DashboardScreen, NavTab};
use crate::domain::{Role, Screen, Session};
use crate::login::RoleSelector;
use crate::mock::ClinicData;
use crate::onboarding::{Advance, Carousel, Slide};
use crate::settings::Settings;
use crate::timer::SplashTimer;

/// Events delivered to the shell from outside the key/mouse path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    SplashElapsed,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ShellError {
    #[error("{transition} is not available from the {screen} screen")]
    TransitionUnavailable {
        transition: &'static str,
        screen: Screen,
    },
}

/// Splash screen state: just the pending auto-advance.
#[derive(Debug, Default)]
pub struct SplashScreen {
    timer: Option<SplashTimer>,
}

impl SplashScreen {
    /// A countdown is running and has not fired yet.
    pub fn is_scheduled(&self) -> bool {
        self.timer.as_ref().is_some_and(|t| !t.is_finished())
    }
}

/// The screen on display together with its local state.
#[derive(Debug)]
pub enum ActiveScreen {
    Splash(SplashScreen),
    Onboarding(Carousel),
    Login(RoleSelector),
    Dashboard(DashboardScreen),
}

impl ActiveScreen {
    pub fn kind(&self) -> Screen {
        match self {
            ActiveScreen::Splash(_) => Screen::Splash,
            ActiveScreen::Onboarding(_) => Screen::Onboarding,
            ActiveScreen::Login(_) => Screen::Login,
            ActiveScreen::Dashboard(_) => Screen::Dashboard,
        }
    }
}

pub struct Shell {
    role: Role,
    active: ActiveScreen,
    settings: Settings,
    deck: Vec<Slide>,
    data: ClinicData,
    events: UnboundedSender<AppEvent>,
    should_quit: bool,
}

impl Shell {
    pub fn new(
        settings: Settings,
        deck: Vec<Slide>,
        data: ClinicData,
        events: UnboundedSender<AppEvent>,
    ) -> Self {
        Self {
            role: settings.initial_role,
            active: ActiveScreen::Splash(SplashScreen::default()),
            settings,
            deck,
            data,
            events,
            should_quit: false,
        }
    }

    /// Start the splash countdown. Needs a tokio runtime. Calling it again,
    /// or off the splash screen, does nothing.
    pub fn mount(&mut self) {
        if let ActiveScreen::Splash(splash) = &mut self.active {
            if splash.timer.is_none() {
                splash.timer = Some(SplashTimer::schedule(
                    self.settings.splash_delay,
                    self.events.clone(),
                ));
            }
        }
    }

    pub fn session(&self) -> Session {
        Session {
            screen: self.active.kind(),
            role: self.role,
        }
    }

    pub fn screen(&self) -> Screen {
        self.active.kind()
    }

    pub fn active(&self) -> &ActiveScreen {
        &self.active
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn data(&self) -> &ClinicData {
        &self.data
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::SplashElapsed => {
                if self.screen() == Screen::Splash {
                    self.enter(ActiveScreen::Onboarding(Carousel::new(self.deck.clone())));
                } else {
                    debug!(screen = %self.screen(), "stale splash event ignored");
                }
            }
        }
    }

    /// Press the carousel button.
    pub fn advance_onboarding(&mut self) -> Result<Advance, ShellError> {
        let ActiveScreen::Onboarding(carousel) = &mut self.active else {
            return Err(self.unavailable("advance"));
        };
        let outcome = carousel.advance();
        if outcome == Advance::Finished {
            self.finish_onboarding()?;
        }
        Ok(outcome)
    }

    pub fn finish_onboarding(&mut self) -> Result<(), ShellError> {
        if self.screen() != Screen::Onboarding {
            return Err(self.unavailable("finish_onboarding"));
        }
        self.enter(self.login_screen());
        Ok(())
    }

    /// Mutable access to the login role picker, when Login is up.
    pub fn role_selector(&mut self) -> Option<&mut RoleSelector> {
        match &mut self.active {
            ActiveScreen::Login(selector) => Some(selector),
            _ => None,
        }
    }

    /// Authenticate as whatever the login picker shows.
    pub fn submit_login(&mut self) -> Result<(), ShellError> {
        let ActiveScreen::Login(selector) = &self.active else {
            return Err(self.unavailable("submit"));
        };
        let role = selector.submit();
        self.login(role)
    }

    /// No credentials are checked; every role is accepted.
    pub fn login(&mut self, role: Role) -> Result<(), ShellError> {
        if self.screen() != Screen::Login {
            return Err(self.unavailable("login"));
        }
        self.role = role;
        self.enter(ActiveScreen::Dashboard(DashboardScreen::new(role)));
        Ok(())
    }

    /// Back to Login. The session role is kept, but the picker starts
    /// fresh on the configured role.
    pub fn logout(&mut self) -> Result<(), ShellError> {
        if self.screen() != Screen::Dashboard {
            return Err(self.unavailable("logout"));
        }
        self.enter(self.login_screen());
        Ok(())
    }

    pub fn dashboard(&mut self) -> Option<&mut DashboardScreen> {
        match &mut self.active {
            ActiveScreen::Dashboard(dashboard) => Some(dashboard),
            _ => None,
        }
    }

    pub fn select_tab(&mut self, tab: NavTab) -> Result<bool, ShellError> {
        if let Some(dashboard) = self.dashboard() {
            let changed = dashboard.select_tab(tab);
            if changed {
                debug!(tab = tab.id(), "tab selected");
            }
            return Ok(changed);
        }
        Err(self.unavailable("select_tab"))
    }

    fn login_screen(&self) -> ActiveScreen {
        ActiveScreen::Login(RoleSelector::new(self.settings.initial_role))
    }

    fn enter(&mut self, next: ActiveScreen) {
        let from = self.active.kind();
        let to = next.kind();
        // Replacing the splash state drops its timer, which aborts it.
        self.active = next;
        info!(%from, %to, role = %self.role, "screen transition");
    }

    fn unavailable(&self, transition: &'static str) -> ShellError {
        let err = ShellError::TransitionUnavailable {
            transition,
            screen: self.active.kind(),
        };
        warn!("{err}");
        err
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use tokio::sync::mpsc::{self, UnboundedReceiver};

    use super::*;
    use crate::onboarding::default_deck;

    fn shell() -> (Shell, UnboundedReceiver<AppEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let shell = Shell::new(Settings::default(), default_deck(), ClinicData::mock(), tx);
        (shell, rx)
    }

    /// Drive the shell to the Login screen without the timer.
    fn at_login() -> Shell {
        let (mut shell, _rx) = shell();
        shell.handle_event(AppEvent::SplashElapsed);
        shell.finish_onboarding().unwrap();
        shell
    }

    #[test]
    fn starts_on_splash_as_doctor() {
        let (shell, _rx) = shell();
        assert_eq!(
            shell.session(),
            Session {
                screen: Screen::Splash,
                role: Role::Doctor
            }
        );
    }

    #[tokio::test(start_paused = true)]
    async fn splash_advances_once_after_delay() {
        let (mut shell, mut rx) = shell();
        shell.mount();
        shell.mount();
        assert!(matches!(shell.active(), ActiveScreen::Splash(s) if s.is_scheduled()));

        let event = rx.recv().await.unwrap();
        tokio::task::yield_now().await;
        assert!(matches!(shell.active(), ActiveScreen::Splash(s) if !s.is_scheduled()));
        shell.handle_event(event);
        assert_eq!(shell.screen(), Screen::Onboarding);

        tokio::time::sleep(Duration::from_secs(10)).await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn teardown_before_delay_cancels_timer() {
        let (mut shell, mut rx) = shell();
        shell.mount();
        tokio::time::sleep(Duration::from_millis(300)).await;
        drop(shell);

        tokio::time::sleep(Duration::from_secs(5)).await;
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn stale_splash_event_is_ignored() {
        let mut shell = at_login();
        shell.handle_event(AppEvent::SplashElapsed);
        assert_eq!(shell.screen(), Screen::Login);
    }

    #[test]
    fn onboarding_finishes_on_last_advance() {
        let (mut shell, _rx) = shell();
        shell.handle_event(AppEvent::SplashElapsed);
        for i in 1..4 {
            assert_eq!(shell.advance_onboarding().unwrap(), Advance::Moved(i));
            assert_eq!(shell.screen(), Screen::Onboarding);
        }
        assert_eq!(shell.advance_onboarding().unwrap(), Advance::Finished);
        assert_eq!(shell.screen(), Screen::Login);
        assert!(shell.advance_onboarding().is_err());
    }

    #[test]
    fn login_accepts_every_role() {
        for role in Role::ALL {
            let mut shell = at_login();
            shell.login(role).unwrap();
            assert_eq!(
                shell.session(),
                Session {
                    screen: Screen::Dashboard,
                    role
                }
            );
        }
    }

    #[test]
    fn submit_uses_selected_role() {
        let mut shell = at_login();
        shell.role_selector().unwrap().select_role(Role::Receptionist);
        shell.submit_login().unwrap();
        assert_eq!(shell.session().role, Role::Receptionist);
    }

    #[test]
    fn logout_keeps_role_but_resets_picker() {
        for role in Role::ALL {
            let mut shell = at_login();
            shell.login(role).unwrap();
            shell.logout().unwrap();
            assert_eq!(shell.screen(), Screen::Login);
            assert_eq!(shell.session().role, role);
            assert_eq!(shell.role_selector().unwrap().selected_role(), Role::Doctor);
        }
    }

    #[test]
    fn logout_reseeds_picker_from_configured_role() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let settings = Settings {
            initial_role: Role::Receptionist,
            ..Settings::default()
        };
        let mut shell = Shell::new(settings, default_deck(), ClinicData::mock(), tx);
        shell.handle_event(AppEvent::SplashElapsed);
        shell.finish_onboarding().unwrap();
        shell.login(Role::Nurse).unwrap();
        shell.logout().unwrap();
        assert_eq!(shell.session().role, Role::Nurse);
        assert_eq!(
            shell.role_selector().unwrap().selected_role(),
            Role::Receptionist
        );
    }

    #[test]
    fn tab_switch_leaves_session_alone() {
        let mut shell = at_login();
        shell.login(Role::Nurse).unwrap();
        let before = shell.session();
        assert!(shell.select_tab(NavTab::Patients).unwrap());
        assert!(!shell.select_tab(NavTab::Patients).unwrap());
        assert_eq!(shell.session(), before);
        assert_eq!(shell.dashboard().unwrap().active_tab(), NavTab::Patients);
    }

    #[test]
    fn out_of_order_transitions_rejected() {
        let (mut shell, _rx) = shell();
        assert_eq!(
            shell.login(Role::Admin),
            Err(ShellError::TransitionUnavailable {
                transition: "login",
                screen: Screen::Splash
            })
        );
        assert!(shell.logout().is_err());
        assert!(shell.finish_onboarding().is_err());
        assert!(shell.select_tab(NavTab::Vitals).is_err());
        assert_eq!(shell.session(), Session::default());
    }

    #[test]
    fn configured_role_seeds_login() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let settings = Settings {
            initial_role: Role::Admin,
            ..Settings::default()
        };
        let mut shell = Shell::new(settings, default_deck(), ClinicData::mock(), tx);
        shell.handle_event(AppEvent::SplashElapsed);
        shell.finish_onboarding().unwrap();
        assert_eq!(shell.role_selector().unwrap().selected_role(), Role::Admin);
    }
}
