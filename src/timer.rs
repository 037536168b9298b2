//! Cancelable one-shot timer behind the splash auto-advance.
//!
//! The timer is a tokio task that sleeps, then sends a single event.
//! Dropping the [`SplashTimer`] aborts the task, so a torn-down splash
//! screen can never trigger a late transition.

use std::time::Duration;

use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::shell::AppEvent;

#[derive(Debug)]
pub struct SplashTimer {
    handle: JoinHandle<()>,
}

impl SplashTimer {
    /// Schedule `SplashElapsed` after `delay`. Must be called inside a
    /// tokio runtime.
    pub fn schedule(delay: Duration, events: UnboundedSender<AppEvent>) -> Self {
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // Receiver gone means the event loop already exited.
            let _ = events.send(AppEvent::SplashElapsed);
        });
        debug!(?delay, "splash timer scheduled");
        Self { handle }
    }

    /// True once the event has been sent.
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

impl Drop for SplashTimer {
    fn drop(&mut self) {
        if !self.handle.is_finished() {
            debug!("splash timer cancelled");
        }
        self.handle.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc;

    const DELAY: Duration = Duration::from_secs(2);

    #[tokio::test(start_paused = true)]
    async fn fires_once_after_delay() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let timer = SplashTimer::schedule(DELAY, tx.clone());

        tokio::time::sleep(DELAY - Duration::from_millis(1)).await;
        assert!(rx.try_recv().is_err());

        tokio::time::sleep(Duration::from_millis(2)).await;
        assert_eq!(rx.recv().await, Some(AppEvent::SplashElapsed));

        tokio::time::sleep(DELAY * 5).await;
        assert!(rx.try_recv().is_err());
        assert!(timer.is_finished());
    }

    #[tokio::test(start_paused = true)]
    async fn dropped_timer_never_fires() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let timer = SplashTimer::schedule(DELAY, tx.clone());
        tokio::time::sleep(Duration::from_millis(500)).await;
        drop(timer);

        tokio::time::sleep(DELAY * 3).await;
        assert!(rx.try_recv().is_err());
    }
}
