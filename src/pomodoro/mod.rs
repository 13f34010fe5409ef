//! Pomodoro timer
//!
//! Work / short break / long break phases with a one-second countdown.
//! The countdown itself is a pure state machine ([`PomodoroState`]); the
//! widget ([`PomodoroTimer`]) persists it and owns the tick source.

pub mod models;
pub mod ticker;
pub mod timer;

pub use models::*;
pub use ticker::{IntervalTicker, ManualTicker, Tick, TickSource};
pub use timer::PomodoroTimer;
