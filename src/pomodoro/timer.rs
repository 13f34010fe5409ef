//! Pomodoro widget: persisted state machine plus one tick source

use super::models::{Phase, PhaseChange, PomodoroState};
use super::ticker::{Tick, TickSource};
use crate::store::{Persisted, SharedStore};

pub const STORAGE_KEY: &str = "pomodoro_state_v1";

pub struct PomodoroTimer<T: TickSource> {
    state: PomodoroState,
    record: Persisted<PomodoroState>,
    ticker: T,
    /// Generation of the run we accept ticks from
    active_generation: Option<u64>,
}

impl<T: TickSource> PomodoroTimer<T> {
    /// Load the saved state. A timer saved while running resumes ticking.
    pub fn mount(store: SharedStore, ticker: T) -> Self {
        let record = Persisted::new(store, STORAGE_KEY);
        let state = record
            .load()
            .map(PomodoroState::sanitized)
            .unwrap_or_default();

        let mut timer = Self {
            state,
            record,
            ticker,
            active_generation: None,
        };
        timer.sync_ticker();
        timer
    }

    pub fn state(&self) -> &PomodoroState {
        &self.state
    }

    pub fn ticker(&self) -> &T {
        &self.ticker
    }

    pub fn is_ticking(&self) -> bool {
        self.active_generation.is_some()
    }

    pub fn toggle_running(&mut self) {
        self.state.toggle_running();
        log::info!(
            "Pomodoro {} ({} {})",
            if self.state.is_running { "started" } else { "paused" },
            self.state.phase.label(),
            self.state.clock()
        );
        self.commit();
    }

    pub fn select_phase(&mut self, phase: Phase) {
        self.state.select_phase(phase);
        self.commit();
    }

    pub fn reset(&mut self) {
        self.state.reset();
        self.commit();
    }

    /// Apply a tick from the ticker. Ticks from a cancelled run are dropped.
    pub fn handle_tick(&mut self, tick: Tick) -> Option<PhaseChange> {
        if self.active_generation != Some(tick.generation) {
            log::debug!("Dropping stale tick (generation {})", tick.generation);
            return None;
        }

        let change = self.state.tick();
        if let Some(change) = change {
            log::info!(
                "Pomodoro phase complete: {} -> {} (cycles: {})",
                change.from.label(),
                change.to.label(),
                change.completed_cycles
            );
        }
        self.commit();
        change
    }

    pub fn progress_percent(&self) -> u8 {
        self.state.progress_percent()
    }

    fn commit(&mut self) {
        self.sync_ticker();
        self.record.save(&self.state);
    }

    /// Keep exactly one ticker run alive while running, none while paused
    fn sync_ticker(&mut self) {
        match (self.state.is_running, self.active_generation) {
            (true, None) => {
                self.active_generation = Some(self.ticker.start());
            }
            (false, Some(_)) => {
                self.ticker.stop();
                self.active_generation = None;
            }
            _ => {}
        }
    }
}

impl<T: TickSource> Drop for PomodoroTimer<T> {
    fn drop(&mut self) {
        self.ticker.stop();
    }
}
