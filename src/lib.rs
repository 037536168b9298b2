//! Silica: a clinic-management dashboard demo for the terminal.
//!
//! Splash, onboarding carousel, role-selecting login and a role-specific
//! dashboard, all rendered from static mock data. The [`shell::Shell`]
//! owns the only cross-screen state; [`tui`] draws it with ratatui.

pub mod dashboard;
pub mod domain;
pub mod login;
pub mod mock;
pub mod onboarding;
pub mod settings;
pub mod shell;
pub mod timer;
pub mod tui;
