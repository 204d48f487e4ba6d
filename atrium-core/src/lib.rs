//! Deterministic state machines backing the Atrium showcase.
//!
//! Everything in this crate is clock-free and side-effect-free: the owning
//! application schedules timers and network fetches, then reports outcomes
//! back in. That keeps the readiness race (completion count vs. wall-clock
//! timeout) and the carousel arithmetic testable without sleeping.

pub mod carousel;
pub mod readiness;
pub mod swipe;
pub mod transition;

pub use carousel::{Direction, Sequencer};
pub use readiness::{GateEvent, ReadinessGate, ReadyCause};
pub use swipe::{SwipeDirection, SwipeTracker, SWIPE_THRESHOLD};
pub use transition::{EasingFunction, Fade};
