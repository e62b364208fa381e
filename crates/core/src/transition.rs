/// Length of the cell entry transition.
pub const TRANSITION_DURATION_MS: f64 = 500.0;
/// Longest frame gap the clock will account for in one step.
const MAX_FRAME_DELTA_MS: f64 = 250.0;

/// Cubic ease-in-out.
pub fn ease_cubic_in_out(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0) * 2.0;
    if t <= 1.0 {
        t * t * t / 2.0
    } else {
        let t = t - 2.0;
        (t * t * t + 2.0) / 2.0
    }
}

#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a * (1.0 - t) + b * t
}

/// Elapsed-time bookkeeping for one transition, fed with frame timestamps.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransitionClock {
    duration_ms: f64,
    elapsed_ms: f64,
    last_tick: Option<f64>,
}

impl Default for TransitionClock {
    fn default() -> Self {
        Self::new(TRANSITION_DURATION_MS)
    }
}

impl TransitionClock {
    pub const fn new(duration_ms: f64) -> Self {
        Self {
            duration_ms,
            elapsed_ms: 0.0,
            last_tick: None,
        }
    }

    /// Advance to `now_ms` and return the eased progress in `[0, 1]`.
    ///
    /// The first tick only records the time. Time going backwards does not
    /// rewind, and a long stall advances by at most one capped frame.
    pub fn tick(&mut self, now_ms: f64) -> f64 {
        let delta = self
            .last_tick
            .map_or(0.0, |last| (now_ms - last).clamp(0.0, MAX_FRAME_DELTA_MS));
        self.elapsed_ms = (self.elapsed_ms + delta).min(self.duration_ms);
        self.last_tick = Some(now_ms);
        self.progress()
    }

    pub fn linear_progress(&self) -> f64 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        (self.elapsed_ms / self.duration_ms).clamp(0.0, 1.0)
    }

    pub fn progress(&self) -> f64 {
        ease_cubic_in_out(self.linear_progress())
    }

    pub fn is_finished(&self) -> bool {
        self.linear_progress() >= 1.0
    }

    pub const fn last_tick(&self) -> Option<f64> {
        self.last_tick
    }
}
