//! Scalar fade transitions with explicit time injection.
//!
//! Unlike an animation system that samples `Instant::now()` internally, a
//! [`Fade`] takes `now` as a parameter on every query. The kiosk passes the
//! real clock; tests pass fabricated instants.

use std::time::{Duration, Instant};

/// Easing applied to raw progress (0.0 to 1.0).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EasingFunction {
    Linear,
    EaseOutCubic,
}

impl EasingFunction {
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            EasingFunction::Linear => t,
            EasingFunction::EaseOutCubic => 1.0 - (1.0 - t).powi(3),
        }
    }
}

/// A one-shot 0→1 ramp over a fixed duration.
#[derive(Debug, Clone)]
pub struct Fade {
    started: Option<Instant>,
    duration: Duration,
    easing: EasingFunction,
}

impl Fade {
    pub fn new(duration: Duration, easing: EasingFunction) -> Self {
        Fade {
            started: None,
            duration,
            easing,
        }
    }

    /// Begin the ramp. Restarting an already-running fade is a no-op; the
    /// first start wins, matching the gate's write-once reveal.
    pub fn start(&mut self, now: Instant) {
        if self.started.is_none() {
            self.started = Some(now);
        }
    }

    pub fn is_started(&self) -> bool {
        self.started.is_some()
    }

    /// Eased progress at `now`: 0.0 before start, 1.0 at or past completion.
    pub fn progress(&self, now: Instant) -> f32 {
        let Some(started) = self.started else {
            return 0.0;
        };

        let elapsed = now.saturating_duration_since(started);
        if elapsed >= self.duration {
            return 1.0;
        }

        let raw = elapsed.as_secs_f32() / self.duration.as_secs_f32();
        self.easing.apply(raw)
    }

    pub fn is_running(&self, now: Instant) -> bool {
        self.is_started() && self.progress(now) < 1.0
    }

    pub fn is_finished(&self, now: Instant) -> bool {
        self.is_started() && self.progress(now) >= 1.0
    }
}
