//! Subscription composition: animation frames while the overlay is up,
//! autoplay timers once the page is revealed, and touch listening.
//!
//! Everything timer-shaped is gated on state so the runtime tears the timer
//! down the moment it stops being needed.

use std::time::Duration;

use iced::event::{self, Event};
use iced::touch;
use iced::Subscription;

use crate::message::Message;
use crate::state::State;

pub fn subscription(state: &State) -> Subscription<Message> {
    let mut subscriptions = vec![touch_events()];

    // Spinner and fade frames while the overlay is still visible.
    if !state.page.overlay.is_cleared() {
        subscriptions
            .push(iced::time::every(Duration::from_millis(16)).map(|_| Message::OverlayTick));
    }

    // Autoplay waits for the reveal; a carousel with one slide never rotates.
    if state.page.is_revealed() {
        for carousel in &state.page.carousels {
            if carousel.seq.len() > 1 {
                let id = carousel.id;
                subscriptions.push(
                    iced::time::every(carousel.interval).map(move |_| Message::AutoAdvance(id)),
                );
            }
        }
    }

    Subscription::batch(subscriptions)
}

fn touch_events() -> Subscription<Message> {
    event::listen_with(|event, _status, _window| match event {
        Event::Touch(touch::Event::FingerPressed { position, .. }) => {
            Some(Message::TouchStarted(position.x))
        }
        Event::Touch(touch::Event::FingerLifted { position, .. }) => {
            Some(Message::TouchEnded(position.x))
        }
        Event::Touch(touch::Event::FingerLost { .. }) => Some(Message::TouchCancelled),
        _ => None,
    })
}
