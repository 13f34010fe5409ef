//! Pomodoro phases and the countdown state machine

use serde::{Deserialize, Serialize};

/// Focus phase length in seconds
pub const WORK_SECS: u32 = 25 * 60;
/// Short break length in seconds
pub const SHORT_BREAK_SECS: u32 = 5 * 60;
/// Long break length in seconds
pub const LONG_BREAK_SECS: u32 = 15 * 60;
/// Every Nth completed work phase earns a long break
pub const LONG_BREAK_INTERVAL: u32 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    #[default]
    Work,
    ShortBreak,
    LongBreak,
}

impl Phase {
    pub const ALL: [Phase; 3] = [Phase::Work, Phase::ShortBreak, Phase::LongBreak];

    pub fn duration_secs(self) -> u32 {
        match self {
            Phase::Work => WORK_SECS,
            Phase::ShortBreak => SHORT_BREAK_SECS,
            Phase::LongBreak => LONG_BREAK_SECS,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Phase::Work => "Focus",
            Phase::ShortBreak => "Short Break",
            Phase::LongBreak => "Long Break",
        }
    }

    pub fn hint(self) -> &'static str {
        match self {
            Phase::Work => "Stay focused, no distractions.",
            Phase::ShortBreak | Phase::LongBreak => "Take a breather and relax.",
        }
    }

    pub fn is_break(self) -> bool {
        !matches!(self, Phase::Work)
    }
}

/// Emitted when a countdown reaches zero
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseChange {
    pub from: Phase,
    pub to: Phase,
    pub completed_cycles: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PomodoroState {
    pub phase: Phase,
    /// Seconds left in the current phase
    pub remaining: u32,
    pub is_running: bool,
    /// Completed work phases
    pub completed_cycles: u32,
}

impl Default for PomodoroState {
    fn default() -> Self {
        Self {
            phase: Phase::Work,
            remaining: WORK_SECS,
            is_running: false,
            completed_cycles: 0,
        }
    }
}

impl PomodoroState {
    /// Clamp a decoded state back under its phase duration
    pub fn sanitized(mut self) -> Self {
        self.remaining = self.remaining.min(self.phase.duration_secs());
        self
    }

    pub fn duration_secs(&self) -> u32 {
        self.phase.duration_secs()
    }

    pub fn toggle_running(&mut self) {
        self.is_running = !self.is_running;
    }

    /// Force a phase and restart its countdown. Running state and cycle count
    /// are left alone.
    pub fn select_phase(&mut self, phase: Phase) {
        self.phase = phase;
        self.remaining = phase.duration_secs();
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Advance the countdown by one second. Does nothing while paused.
    pub fn tick(&mut self) -> Option<PhaseChange> {
        if !self.is_running {
            return None;
        }

        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            Some(self.complete_phase())
        } else {
            None
        }
    }

    fn complete_phase(&mut self) -> PhaseChange {
        let from = self.phase;
        self.is_running = false;

        let to = match from {
            Phase::Work => {
                let before = self.completed_cycles;
                self.completed_cycles += 1;
                if (before + 1) % LONG_BREAK_INTERVAL == 0 {
                    Phase::LongBreak
                } else {
                    Phase::ShortBreak
                }
            }
            Phase::ShortBreak | Phase::LongBreak => Phase::Work,
        };

        self.phase = to;
        self.remaining = to.duration_secs();

        PhaseChange {
            from,
            to,
            completed_cycles: self.completed_cycles,
        }
    }

    /// Elapsed share of the current phase, 0-100
    pub fn progress_percent(&self) -> u8 {
        let total = self.duration_secs();
        if total == 0 {
            return 0;
        }
        let elapsed = total.saturating_sub(self.remaining) as f64;
        (elapsed / total as f64 * 100.0).round().clamp(0.0, 100.0) as u8
    }

    /// `mm:ss` rendering of the remaining time
    pub fn clock(&self) -> String {
        format_clock(self.remaining)
    }
}

pub fn format_clock(total_secs: u32) -> String {
    format!("{:02}:{:02}", total_secs / 60, total_secs % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn running() -> PomodoroState {
        PomodoroState {
            is_running: true,
            ..Default::default()
        }
    }

    /// Tick until a phase change, returning it and the number of ticks taken
    fn run_phase(state: &mut PomodoroState) -> (PhaseChange, u32) {
        state.is_running = true;
        let mut ticks = 0;
        loop {
            ticks += 1;
            if let Some(change) = state.tick() {
                return (change, ticks);
            }
        }
    }

    #[test]
    fn test_full_work_phase() {
        let mut state = running();
        let mut change = None;
        for _ in 0..1500 {
            change = state.tick().or(change);
        }

        assert!(!state.is_running);
        assert_eq!(state.phase, Phase::ShortBreak);
        assert_eq!(state.remaining, 300);
        assert_eq!(state.completed_cycles, 1);
        assert_eq!(
            change,
            Some(PhaseChange {
                from: Phase::Work,
                to: Phase::ShortBreak,
                completed_cycles: 1
            })
        );
    }

    #[test]
    fn test_remaining_decreases_by_one() {
        let mut state = running();
        state.tick();
        assert_eq!(state.remaining, WORK_SECS - 1);
        state.tick();
        assert_eq!(state.remaining, WORK_SECS - 2);
    }

    #[test]
    fn test_paused_tick_is_noop() {
        let mut state = PomodoroState::default();
        assert_eq!(state.tick(), None);
        assert_eq!(state.remaining, WORK_SECS);
    }

    #[test]
    fn test_long_break_every_fourth_cycle() {
        let mut state = PomodoroState::default();
        let mut breaks = Vec::new();

        for _ in 0..4 {
            let (change, ticks) = run_phase(&mut state);
            assert_eq!(ticks, WORK_SECS);
            breaks.push(change.to);
            // Finish the break to get back to work
            let (back, _) = run_phase(&mut state);
            assert_eq!(back.to, Phase::Work);
        }

        assert_eq!(
            breaks,
            vec![Phase::ShortBreak, Phase::ShortBreak, Phase::ShortBreak, Phase::LongBreak]
        );
        assert_eq!(state.completed_cycles, 4);
    }

    #[test]
    fn test_long_break_duration() {
        let mut state = PomodoroState {
            completed_cycles: 3,
            remaining: 1,
            is_running: true,
            ..Default::default()
        };
        state.tick();
        assert_eq!(state.phase, Phase::LongBreak);
        assert_eq!(state.remaining, 900);
    }

    #[test]
    fn test_break_completion_keeps_cycles() {
        let mut state = PomodoroState {
            phase: Phase::ShortBreak,
            remaining: 1,
            is_running: true,
            completed_cycles: 2,
        };
        let change = state.tick().unwrap();
        assert_eq!(change.to, Phase::Work);
        assert_eq!(state.completed_cycles, 2);
        assert_eq!(state.remaining, WORK_SECS);
        assert!(!state.is_running);
    }

    #[test]
    fn test_select_phase_keeps_running_and_cycles() {
        let mut state = PomodoroState {
            completed_cycles: 2,
            remaining: 42,
            is_running: true,
            ..Default::default()
        };
        state.select_phase(Phase::LongBreak);
        assert_eq!(state.phase, Phase::LongBreak);
        assert_eq!(state.remaining, LONG_BREAK_SECS);
        assert!(state.is_running);
        assert_eq!(state.completed_cycles, 2);
    }

    #[test]
    fn test_reset() {
        let mut state = PomodoroState {
            phase: Phase::ShortBreak,
            remaining: 10,
            is_running: true,
            completed_cycles: 7,
        };
        state.reset();
        assert_eq!(state, PomodoroState::default());
    }

    #[test]
    fn test_progress_percent() {
        let mut state = PomodoroState::default();
        assert_eq!(state.progress_percent(), 0);
        state.remaining = 750;
        assert_eq!(state.progress_percent(), 50);
        state.remaining = 0;
        assert_eq!(state.progress_percent(), 100);
        state.phase = Phase::ShortBreak;
        state.remaining = 299;
        // 1/300 rounds to 0
        assert_eq!(state.progress_percent(), 0);
    }

    #[test]
    fn test_sanitized_clamps_remaining() {
        let state = PomodoroState {
            phase: Phase::ShortBreak,
            remaining: 5000,
            ..Default::default()
        }
        .sanitized();
        assert_eq!(state.remaining, SHORT_BREAK_SECS);
    }

    #[test]
    fn test_clock() {
        assert_eq!(format_clock(1500), "25:00");
        assert_eq!(format_clock(61), "01:01");
        assert_eq!(format_clock(0), "00:00");
    }

    #[test]
    fn test_wire_shape() {
        let json = serde_json::to_value(PomodoroState::default()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "phase": "work",
                "remaining": 1500,
                "isRunning": false,
                "completedCycles": 0
            })
        );
    }
}
