//! The presentation gate: a blocking spinner overlay that fades out exactly
//! once when the page's readiness gate opens, and never comes back.
//!
//! Two timing knobs mirror the site's anti-flash behavior: `min_hold` keeps
//! the overlay up for a minimum time after the page mounts, and
//! `reveal_delay` defers the fade for a beat after readiness. Both default to
//! zero.

use std::time::{Duration, Instant};

use iced::widget::{column, container, row, text, Space};
use iced::{Background, Color, Element, Length};

use atrium_core::{EasingFunction, Fade};

use crate::message::Message;
use crate::theme::ShowcaseTheme;

pub const DEFAULT_FADE: Duration = Duration::from_millis(600);

/// What the owner must do after reporting readiness.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoldDecision {
    /// The fade began; nothing to schedule.
    FadeStarted,
    /// Readiness arrived inside the hold window; report back via
    /// [`LoadingOverlay::hold_elapsed`] after this long.
    HoldFor(Duration),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Covering,
    Fading,
    Cleared,
}

/// Two-state visual switch driven by the readiness gate, with a
/// transition-in-progress phase between the states.
#[derive(Debug, Clone)]
pub struct LoadingOverlay {
    shown_at: Instant,
    min_hold: Duration,
    reveal_delay: Duration,
    fade: Fade,
    phase: Phase,
}

impl LoadingOverlay {
    pub fn new(min_hold: Duration, reveal_delay: Duration, now: Instant) -> Self {
        LoadingOverlay {
            shown_at: now,
            min_hold,
            reveal_delay,
            fade: Fade::new(DEFAULT_FADE, EasingFunction::EaseOutCubic),
            phase: Phase::Covering,
        }
    }

    /// The readiness gate opened. Begins the fade immediately if the hold
    /// window already passed, otherwise reports how long to wait.
    pub fn on_ready(&mut self, now: Instant) -> HoldDecision {
        if self.phase != Phase::Covering {
            return HoldDecision::FadeStarted;
        }

        let hold_until = self.shown_at + self.min_hold;
        let reveal_at = now + self.reveal_delay;
        let fade_at = hold_until.max(reveal_at);

        if fade_at <= now {
            self.begin_fade(now);
            HoldDecision::FadeStarted
        } else {
            HoldDecision::HoldFor(fade_at.saturating_duration_since(now))
        }
    }

    /// The scheduled hold remainder elapsed.
    pub fn hold_elapsed(&mut self, now: Instant) {
        if self.phase == Phase::Covering {
            self.begin_fade(now);
        }
    }

    /// Animation frame: retire the fade once it completes.
    pub fn tick(&mut self, now: Instant) {
        if self.phase == Phase::Fading && self.fade.is_finished(now) {
            self.phase = Phase::Cleared;
        }
    }

    fn begin_fade(&mut self, now: Instant) {
        self.fade.start(now);
        self.phase = Phase::Fading;
    }

    pub fn is_covering(&self) -> bool {
        self.phase == Phase::Covering
    }

    pub fn is_fading(&self) -> bool {
        self.phase == Phase::Fading
    }

    pub fn is_cleared(&self) -> bool {
        self.phase == Phase::Cleared
    }

    /// Overlay opacity: fully opaque while covering, easing to zero.
    pub fn scrim_opacity(&self, now: Instant) -> f32 {
        match self.phase {
            Phase::Covering => 1.0,
            Phase::Fading => 1.0 - self.fade.progress(now),
            Phase::Cleared => 0.0,
        }
    }

    /// Index of the highlighted spinner dot, cycling while the overlay is up.
    pub fn spinner_phase(&self, now: Instant) -> usize {
        let elapsed = now.saturating_duration_since(self.shown_at);
        (elapsed.as_millis() / 300) as usize % 3
    }

    /// The blocking overlay element. Callers stack this above the page while
    /// not cleared.
    pub fn view(&self, now: Instant) -> Element<'static, Message> {
        let opacity = self.scrim_opacity(now);
        let highlighted = self.spinner_phase(now);

        let mut dots = row![].spacing(8);
        for slot in 0..3 {
            let color = if slot == highlighted {
                blend(ShowcaseTheme::BRAND_BLUE, ShowcaseTheme::BRAND_VIOLET, slot as f32 / 2.0)
            } else {
                Color::from_rgba(1.0, 1.0, 1.0, 0.35)
            };
            dots = dots.push(
                container(Space::new(12, 12)).style(move |_| container::Style {
                    background: Some(Background::Color(scale_alpha(color, opacity))),
                    border: iced::Border {
                        radius: 6.0.into(),
                        ..Default::default()
                    },
                    ..Default::default()
                }),
            );
        }

        let caption = text("Loading...")
            .size(14)
            .color(scale_alpha(ShowcaseTheme::TEXT_INVERSE_DIM, opacity));

        container(
            column![dots, caption]
                .spacing(16)
                .align_x(iced::Alignment::Center),
        )
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .style(move |_| container::Style {
            background: Some(Background::Color(scale_alpha(ShowcaseTheme::SCRIM, opacity))),
            ..Default::default()
        })
        .into()
    }
}

fn scale_alpha(color: Color, factor: f32) -> Color {
    Color {
        a: color.a * factor.clamp(0.0, 1.0),
        ..color
    }
}

fn blend(from: Color, to: Color, t: f32) -> Color {
    Color {
        r: from.r + (to.r - from.r) * t,
        g: from.g + (to.g - from.g) * t,
        b: from.b + (to.b - from.b) * t,
        a: from.a + (to.a - from.a) * t,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS: Duration = Duration::from_millis(1);

    #[test]
    fn ready_after_hold_fades_immediately() {
        let start = Instant::now();
        let mut overlay = LoadingOverlay::new(Duration::from_millis(800), Duration::ZERO, start);

        let decision = overlay.on_ready(start + 900 * MS);
        assert_eq!(decision, HoldDecision::FadeStarted);
        assert!(overlay.is_fading());
    }

    #[test]
    fn ready_inside_hold_reports_the_remainder() {
        let start = Instant::now();
        let mut overlay = LoadingOverlay::new(Duration::from_millis(800), Duration::ZERO, start);

        let decision = overlay.on_ready(start + 300 * MS);
        assert_eq!(decision, HoldDecision::HoldFor(500 * MS));
        assert!(overlay.is_covering());

        overlay.hold_elapsed(start + 800 * MS);
        assert!(overlay.is_fading());
    }

    #[test]
    fn reveal_delay_defers_the_fade_past_readiness() {
        let start = Instant::now();
        let mut overlay = LoadingOverlay::new(Duration::ZERO, Duration::from_millis(500), start);

        let decision = overlay.on_ready(start + 2000 * MS);
        assert_eq!(decision, HoldDecision::HoldFor(500 * MS));
    }

    #[test]
    fn fade_completes_to_cleared_and_never_returns() {
        let start = Instant::now();
        let mut overlay = LoadingOverlay::new(Duration::ZERO, Duration::ZERO, start);

        assert_eq!(overlay.on_ready(start), HoldDecision::FadeStarted);
        overlay.tick(start + 100 * MS);
        assert!(overlay.is_fading());

        overlay.tick(start + DEFAULT_FADE + 10 * MS);
        assert!(overlay.is_cleared());

        // Redundant ready reports and ticks keep it cleared.
        assert_eq!(overlay.on_ready(start + 2000 * MS), HoldDecision::FadeStarted);
        overlay.tick(start + 3000 * MS);
        assert!(overlay.is_cleared());
        assert_eq!(overlay.scrim_opacity(start + 3000 * MS), 0.0);
    }

    #[test]
    fn opacity_ramps_down_while_fading() {
        let start = Instant::now();
        let mut overlay = LoadingOverlay::new(Duration::ZERO, Duration::ZERO, start);
        assert_eq!(overlay.scrim_opacity(start), 1.0);

        overlay.on_ready(start);
        let mid = overlay.scrim_opacity(start + DEFAULT_FADE / 2);
        assert!(mid > 0.0 && mid < 1.0);
        assert_eq!(overlay.scrim_opacity(start + DEFAULT_FADE), 0.0);
    }

    #[test]
    fn spinner_cycles_three_dots() {
        let start = Instant::now();
        let overlay = LoadingOverlay::new(Duration::ZERO, Duration::ZERO, start);
        assert_eq!(overlay.spinner_phase(start), 0);
        assert_eq!(overlay.spinner_phase(start + 300 * MS), 1);
        assert_eq!(overlay.spinner_phase(start + 600 * MS), 2);
        assert_eq!(overlay.spinner_phase(start + 900 * MS), 0);
    }
}
