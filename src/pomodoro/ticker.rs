//! Repeating tick sources for the countdown
//!
//! A [`TickSource`] hands out a fresh generation number each time it is
//! started. Ticks carry the generation they were produced under, so the
//! timer can drop anything left over from a cancelled run.

use std::time::Duration;

use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tick {
    pub generation: u64,
}

pub trait TickSource {
    /// Start ticking. Any run already in progress is cancelled first.
    /// Returns the generation stamped on this run's ticks.
    fn start(&mut self) -> u64;

    /// Cancel the current run, if any
    fn stop(&mut self);

    fn is_active(&self) -> bool;
}

/// Tokio-backed ticker: one task per run, ticks delivered over a channel
pub struct IntervalTicker {
    runtime: Handle,
    period: Duration,
    sender: mpsc::UnboundedSender<Tick>,
    task: Option<JoinHandle<()>>,
    generation: u64,
}

impl IntervalTicker {
    /// Create a ticker on `runtime` and the receiver its ticks arrive on
    pub fn new(runtime: Handle, period: Duration) -> (Self, mpsc::UnboundedReceiver<Tick>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        let ticker = Self {
            runtime,
            period,
            sender,
            task: None,
            generation: 0,
        };
        (ticker, receiver)
    }

    pub fn period(&self) -> Duration {
        self.period
    }
}

impl TickSource for IntervalTicker {
    fn start(&mut self) -> u64 {
        self.stop();

        self.generation += 1;
        let generation = self.generation;
        let sender = self.sender.clone();
        let period = self.period;

        self.task = Some(self.runtime.spawn(async move {
            // First tick one full period after start, not immediately
            let mut interval = time::interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                if sender.send(Tick { generation }).is_err() {
                    break;
                }
            }
        }));

        log::debug!("Ticker started (generation {})", generation);
        generation
    }

    fn stop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
            log::debug!("Ticker stopped (generation {})", self.generation);
        }
    }

    fn is_active(&self) -> bool {
        self.task.is_some()
    }
}

impl Drop for IntervalTicker {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Ticker that never fires on its own. Used where the countdown is driven
/// by hand (tests, one-shot CLI commands) and to observe start/stop calls.
#[derive(Debug, Default)]
pub struct ManualTicker {
    generation: u64,
    active: bool,
    starts: usize,
    stops: usize,
}

impl ManualTicker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tick for the current run, `None` when stopped
    pub fn tick(&self) -> Option<Tick> {
        self.active.then_some(Tick {
            generation: self.generation,
        })
    }

    pub fn starts(&self) -> usize {
        self.starts
    }

    pub fn stops(&self) -> usize {
        self.stops
    }
}

impl TickSource for ManualTicker {
    fn start(&mut self) -> u64 {
        self.stop();
        self.generation += 1;
        self.active = true;
        self.starts += 1;
        self.generation
    }

    fn stop(&mut self) {
        if self.active {
            self.active = false;
            self.stops += 1;
        }
    }

    fn is_active(&self) -> bool {
        self.active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_ticker_generations() {
        let mut ticker = ManualTicker::new();
        assert_eq!(ticker.tick(), None);

        let first = ticker.start();
        assert_eq!(ticker.tick(), Some(Tick { generation: first }));

        let second = ticker.start();
        assert_ne!(first, second);
        assert_eq!(ticker.stops(), 1);
        assert_eq!(ticker.starts(), 2);

        ticker.stop();
        assert!(!ticker.is_active());
        assert_eq!(ticker.tick(), None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_interval_ticker_delivers_ticks() {
        let (mut ticker, mut rx) = IntervalTicker::new(Handle::current(), Duration::from_secs(1));
        let generation = ticker.start();

        for _ in 0..3 {
            let tick = rx.recv().await.unwrap();
            assert_eq!(tick.generation, generation);
        }

        ticker.stop();
        assert!(!ticker.is_active());
    }

    #[tokio::test(start_paused = true)]
    async fn test_restart_cancels_previous_run() {
        let (mut ticker, mut rx) = IntervalTicker::new(Handle::current(), Duration::from_secs(1));
        let first = ticker.start();
        let second = ticker.start();
        assert_ne!(first, second);

        time::sleep(Duration::from_millis(3500)).await;
        ticker.stop();

        let mut received = Vec::new();
        while let Ok(tick) = rx.try_recv() {
            received.push(tick);
        }
        assert_eq!(received.len(), 3);
        assert!(received.iter().all(|t| t.generation == second));
    }
}
