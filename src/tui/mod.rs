//! Terminal front-end: ratatui presentation over the shell.
//!
//! ## Architecture (TEA)
//!
//! Model (`Shell`) + Update (key, mouse and timer events) + View
//! (`layout::draw`). Immediate mode: every frame is drawn from the current
//! shell state, nothing is retained between frames except the clickable
//! regions the last frame registered.

pub mod input;
pub mod layout;
pub mod mouse;
pub mod runner;
