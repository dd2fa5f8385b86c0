//! Cancellable delays polled by the turn states.
//!
//! A [`Delay`] never suspends anything: the owning state polls it once per
//! tick and reacts when it reports a [`Completion`]. Time comes from
//! [`tokio::time::Instant`], so paused-clock tests control it with
//! `tokio::time::advance`.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use tokio::time::Instant;

/// How a delay ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "kebab-case")]
pub enum Completion {
    /// The full duration elapsed.
    Natural,
    /// Stopped through a [`DelayHandle`] before the deadline.
    Cancelled,
}

/// A one-shot timer with a deadline and a cancellation flag.
#[derive(Debug)]
pub struct Delay {
    deadline: Instant,
    cancelled: Arc<AtomicBool>,
}

impl Delay {
    /// Starts a delay that completes `duration` from now.
    pub fn start(duration: Duration) -> Self {
        Self {
            deadline: Instant::now() + duration,
            cancelled: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Checks the delay without blocking.
    ///
    /// # Returns
    ///
    /// `None` while pending. Cancellation wins over a deadline that passed in
    /// the same tick.
    pub fn poll(&self) -> Option<Completion> {
        if self.cancelled.load(Ordering::Acquire) {
            Some(Completion::Cancelled)
        } else if Instant::now() >= self.deadline {
            Some(Completion::Natural)
        } else {
            None
        }
    }

    pub fn deadline(&self) -> Instant {
        self.deadline
    }

    /// A handle that can stop this delay from elsewhere.
    pub fn handle(&self) -> DelayHandle {
        DelayHandle {
            cancelled: Arc::clone(&self.cancelled),
        }
    }
}

/// Stops an in-flight [`Delay`].
#[derive(Debug, Clone)]
pub struct DelayHandle {
    cancelled: Arc<AtomicBool>,
}

impl DelayHandle {
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn completes_naturally_at_deadline() {
        let delay = Delay::start(Duration::from_secs(2));
        assert_eq!(delay.poll(), None);

        tokio::time::advance(Duration::from_millis(1999)).await;
        assert_eq!(delay.poll(), None);

        tokio::time::advance(Duration::from_millis(1)).await;
        assert_eq!(delay.poll(), Some(Completion::Natural));
    }

    #[tokio::test(start_paused = true)]
    async fn cancellation_wins() {
        let delay = Delay::start(Duration::from_secs(1));
        let handle = delay.handle();

        handle.cancel();
        assert!(handle.is_cancelled());
        assert_eq!(delay.poll(), Some(Completion::Cancelled));

        tokio::time::advance(Duration::from_secs(5)).await;
        assert_eq!(delay.poll(), Some(Completion::Cancelled));
    }

    #[tokio::test(start_paused = true)]
    async fn zero_delay_is_immediately_done() {
        let delay = Delay::start(Duration::ZERO);
        assert_eq!(delay.poll(), Some(Completion::Natural));
    }
}
