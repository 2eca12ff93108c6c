use core::time::Duration;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use web_time::Instant;

use crate::*;

/// Actions produced by a single clock tick, in dispatch order.
pub type TickActions = SmallVec<[Action; 3]>;

/// Turns clock readings into the time, auto-reveal and timeout actions the
/// host has to dispatch. The scheduler never owns the clock: the host calls
/// [`RevealScheduler::on_tick`] at its own cadence and stops once the round
/// is no longer playing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevealScheduler {
    auto_reveal_interval_ms: Millis,
    time_limit_ms: Millis,
    last_auto_reveal_ms: Millis,
}

impl RevealScheduler {
    pub fn new(rules: &GameRules) -> Self {
        Self {
            auto_reveal_interval_ms: rules.auto_reveal_interval_ms.max(1),
            time_limit_ms: rules.time_limit_ms,
            last_auto_reveal_ms: 0,
        }
    }

    pub fn reset(&mut self) {
        self.last_auto_reveal_ms = 0;
    }

    pub fn last_auto_reveal_ms(&self) -> Millis {
        self.last_auto_reveal_ms
    }

    pub fn on_tick(&mut self, status: GameStatus, elapsed_ms: Millis) -> TickActions {
        let mut actions = TickActions::new();
        if !status.is_playing() {
            return actions;
        }

        actions.push(Action::UpdateTime(elapsed_ms));

        let interval = self.auto_reveal_interval_ms;
        if elapsed_ms / interval > self.last_auto_reveal_ms / interval {
            self.last_auto_reveal_ms = elapsed_ms;
            actions.push(Action::AutoRevealPixels);
        }

        if elapsed_ms >= self.time_limit_ms {
            log::debug!("Time limit reached at {elapsed_ms} ms");
            actions.push(Action::complete(false));
        }

        actions
    }
}

/// Wall-clock round timer that can be paused.
#[derive(Clone, Debug, Default)]
pub struct Stopwatch {
    running_since: Option<Instant>,
    accumulated: Duration,
}

impl Stopwatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn started() -> Self {
        let mut stopwatch = Self::new();
        stopwatch.start();
        stopwatch
    }

    pub fn is_running(&self) -> bool {
        self.running_since.is_some()
    }

    pub fn start(&mut self) {
        if self.running_since.is_none() {
            self.running_since = Some(Instant::now());
        }
    }

    pub fn pause(&mut self) {
        if let Some(since) = self.running_since.take() {
            self.accumulated += since.elapsed();
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn elapsed(&self) -> Duration {
        let running = self
            .running_since
            .map(|since| since.elapsed())
            .unwrap_or_default();
        self.accumulated + running
    }

    pub fn elapsed_ms(&self) -> Millis {
        self.elapsed().as_millis().try_into().unwrap_or(Millis::MAX)
    }
}
