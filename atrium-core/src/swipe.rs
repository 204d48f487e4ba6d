//! Horizontal swipe interpretation.
//!
//! Mirrors the touch handling on the slideshows: a gesture is the pair of a
//! touch-start and touch-end x-coordinate, and only a horizontal delta past
//! the threshold moves the carousel.

/// Minimum horizontal travel, in logical pixels, for a gesture to count.
pub const SWIPE_THRESHOLD: f32 = 50.0;

/// What a completed gesture asks of the carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    /// Finger travelled left: show the next slide.
    Advance,
    /// Finger travelled right: show the previous slide.
    Retreat,
}

/// Tracks one in-flight gesture. The tracker resets when the gesture ends,
/// so each begin/finish pair yields at most one carousel transition.
#[derive(Debug, Clone, Default)]
pub struct SwipeTracker {
    origin: Option<f32>,
}

impl SwipeTracker {
    pub fn new() -> Self {
        SwipeTracker::default()
    }

    pub fn begin(&mut self, x: f32) {
        self.origin = Some(x);
    }

    /// Drop a stranded gesture (finger lost, window blur).
    pub fn cancel(&mut self) {
        self.origin = None;
    }

    /// Complete the gesture. Returns `None` when no gesture was in flight or
    /// the travel stayed under [`SWIPE_THRESHOLD`].
    pub fn finish(&mut self, x: f32) -> Option<SwipeDirection> {
        let origin = self.origin.take()?;
        let delta = origin - x;

        if delta > SWIPE_THRESHOLD {
            Some(SwipeDirection::Advance)
        } else if delta < -SWIPE_THRESHOLD {
            Some(SwipeDirection::Retreat)
        } else {
            None
        }
    }

    pub fn in_flight(&self) -> bool {
        self.origin.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sixty_pixel_drag_advances_once() {
        let mut tracker = SwipeTracker::new();
        tracker.begin(300.0);
        assert_eq!(tracker.finish(240.0), Some(SwipeDirection::Advance));
        // Gesture consumed: a repeat finish is inert.
        assert_eq!(tracker.finish(0.0), None);
    }

    #[test]
    fn ten_pixel_drag_is_a_tap() {
        let mut tracker = SwipeTracker::new();
        tracker.begin(300.0);
        assert_eq!(tracker.finish(290.0), None);
    }

    #[test]
    fn rightward_drag_retreats() {
        let mut tracker = SwipeTracker::new();
        tracker.begin(100.0);
        assert_eq!(tracker.finish(180.0), Some(SwipeDirection::Retreat));
    }

    #[test]
    fn exactly_threshold_does_not_trigger() {
        let mut tracker = SwipeTracker::new();
        tracker.begin(100.0);
        assert_eq!(tracker.finish(50.0), None);
    }

    #[test]
    fn finish_without_begin_is_inert() {
        let mut tracker = SwipeTracker::new();
        assert_eq!(tracker.finish(500.0), None);
    }

    #[test]
    fn cancel_drops_the_gesture() {
        let mut tracker = SwipeTracker::new();
        tracker.begin(300.0);
        tracker.cancel();
        assert!(!tracker.in_flight());
        assert_eq!(tracker.finish(0.0), None);
    }
}
