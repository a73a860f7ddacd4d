//! Countdown timer over simulation ticks
//!
//! Timers never read a clock themselves; callers pass the current tick. Every
//! duration is converted from seconds to whole ticks once, when the timer is
//! armed (`GameConfig::ticks`), so a timer of N ticks finishes exactly N steps
//! after it was started whatever the start tick. A timer that was never
//! started reports finished.

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Timer {
    duration_ticks: u64,
    start_tick: u64,
}

impl Timer {
    /// (Re)arm the timer to finish `duration_ticks` steps after `now_tick`
    pub fn start(&mut self, now_tick: u64, duration_ticks: u64) {
        self.duration_ticks = duration_ticks;
        self.start_tick = now_tick;
    }

    /// Create a timer already armed at `now_tick`
    pub fn started(now_tick: u64, duration_ticks: u64) -> Self {
        let mut timer = Self::default();
        timer.start(now_tick, duration_ticks);
        timer
    }

    pub fn finished(&self, now_tick: u64) -> bool {
        now_tick.saturating_sub(self.start_tick) >= self.duration_ticks
    }

    /// Ticks left before the timer finishes (0 once finished)
    pub fn remaining(&self, now_tick: u64) -> u64 {
        let elapsed = now_tick.saturating_sub(self.start_tick);
        self.duration_ticks.saturating_sub(elapsed)
    }
}
