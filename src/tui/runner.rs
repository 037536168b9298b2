//! Event loop: owns the terminal, multiplexes crossterm input with shell
//! events, and redraws after every change.

use std::future::Future;
use std::io::stdout;

use anyhow::{Context, Result};
use crossterm::event::{DisableMouseCapture, EnableMouseCapture, Event, EventStream};
use crossterm::execute;
use futures_util::StreamExt;
use ratatui::DefaultTerminal;
use tokio::sync::mpsc;
use tracing::{debug, info};

use super::input::handle_key;
use super::layout;
use super::mouse::{handle_mouse, LayoutAreas};
use crate::mock::ClinicData;
use crate::onboarding::default_deck;
use crate::settings::Settings;
use crate::shell::{AppEvent, Shell};

/// Run the TUI until the user quits. The terminal is restored on every
/// exit path, including errors.
pub async fn run(settings: Settings) -> Result<()> {
    let mouse = settings.mouse;
    let mut terminal = ratatui::init();
    let terminal = &mut terminal;

    guarded(
        || enable_mouse(mouse),
        move || event_loop(terminal, settings),
        || {
            if mouse {
                let _ = execute!(stdout(), DisableMouseCapture);
            }
            ratatui::restore();
        },
    )
    .await
}

/// Run `body` only if `setup` succeeded. `teardown` runs either way.
async fn guarded<Fut>(
    setup: impl FnOnce() -> Result<()>,
    body: impl FnOnce() -> Fut,
    teardown: impl FnOnce(),
) -> Result<()>
where
    Fut: Future<Output = Result<()>>,
{
    let result = match setup() {
        Ok(()) => body().await,
        Err(e) => Err(e),
    };
    teardown();
    result
}

fn enable_mouse(mouse: bool) -> Result<()> {
    if mouse {
        execute!(stdout(), EnableMouseCapture).context("enabling mouse capture")?;
    }
    Ok(())
}

async fn event_loop(terminal: &mut DefaultTerminal, settings: Settings) -> Result<()> {
    let (tx, mut rx) = mpsc::unbounded_channel::<AppEvent>();
    let mut shell = Shell::new(settings, default_deck(), ClinicData::mock(), tx);
    let mut areas = LayoutAreas::default();
    let mut input = EventStream::new();

    shell.mount();
    info!("silica started");

    loop {
        terminal
            .draw(|f| layout::draw(f, &shell, &mut areas))
            .context("drawing frame")?;

        tokio::select! {
            Some(event) = rx.recv() => shell.handle_event(event),
            maybe_event = input.next() => match maybe_event {
                Some(Ok(Event::Key(key))) => handle_key(&mut shell, key),
                Some(Ok(Event::Mouse(mouse))) => handle_mouse(&mut shell, &areas, mouse),
                Some(Ok(Event::Resize(width, height))) => {
                    debug!(width, height, "terminal resized");
                }
                Some(Ok(_)) => {}
                Some(Err(e)) => return Err(e).context("reading terminal input"),
                None => break,
            },
        }

        if shell.should_quit() {
            break;
        }
    }

    info!(session = ?shell.session(), "silica exiting");
    // Dropping the shell tears down the splash timer if it is still pending.
    drop(shell);
    Ok(())
}
