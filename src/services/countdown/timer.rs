use std::time::{Duration, Instant};

use chrono::{DateTime, Local};

use super::models::Countdown;

/// Recompute interval while the invitation view is on screen.
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Periodic countdown refresh owned by the invitation view.
///
/// egui has no timers of its own: the view calls [`CountdownTimer::tick`]
/// every frame and asks for a repaint after [`CountdownTimer::time_until_next_tick`].
/// Dropping the timer together with the view stops the refresh.
#[derive(Debug, Clone)]
pub struct CountdownTimer {
    target: DateTime<Local>,
    interval: Duration,
    last_tick: Option<Instant>,
    current: Countdown,
}

impl CountdownTimer {
    pub fn new(target: DateTime<Local>) -> Self {
        Self::with_interval(target, TICK_INTERVAL)
    }

    pub fn with_interval(target: DateTime<Local>, interval: Duration) -> Self {
        Self {
            target,
            interval,
            last_tick: None,
            current: Countdown::default(),
        }
    }

    pub fn target(&self) -> DateTime<Local> {
        self.target
    }

    /// Latest computed value.
    pub fn current(&self) -> Countdown {
        self.current
    }

    /// Recompute if the interval has elapsed since the last tick.
    ///
    /// The first call always computes. Returns the new value when one was
    /// produced.
    pub fn tick(&mut self, instant: Instant, now: DateTime<Local>) -> Option<Countdown> {
        let due = match self.last_tick {
            None => true,
            Some(last) => instant.saturating_duration_since(last) >= self.interval,
        };
        if !due {
            return None;
        }

        self.last_tick = Some(instant);
        self.current = Countdown::until(&self.target, &now);
        Some(self.current)
    }

    /// How long the UI may sleep before the next recompute is due.
    pub fn time_until_next_tick(&self, instant: Instant) -> Duration {
        match self.last_tick {
            None => Duration::ZERO,
            Some(last) => self
                .interval
                .saturating_sub(instant.saturating_duration_since(last)),
        }
    }
}
