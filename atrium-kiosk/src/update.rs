//! The update loop: navigation, preload completions, the readiness race,
//! and carousel control.

use std::time::{Duration, Instant};

use iced::Task;

use atrium_core::SwipeDirection;
use atrium_model::content::page_assets;
use atrium_model::{AssetKind, AssetStatus, Route};

use crate::assets::{self, FetchedPayload};
use crate::image_cache::ImageState;
use crate::message::Message;
use crate::overlay::HoldDecision;
use crate::state::{PageState, State};

/// How long the landing splash lingers after its assets resolve.
pub const LANDING_DWELL: Duration = Duration::from_secs(3);

pub fn update(state: &mut State, message: Message) -> Task<Message> {
    match message {
        Message::Navigate(route) => navigate(state, route),
        Message::LandingDwellElapsed { epoch } => landing_dwell_elapsed(state, epoch),

        Message::AssetFetched { epoch, id, result } => {
            if epoch != state.load_epoch {
                log::debug!("dropping stale completion for {id}");
                return Task::none();
            }

            let status = match result {
                Ok(FetchedPayload::Image(handle)) => {
                    state.images.set_loaded(id.clone(), handle);
                    AssetStatus::Loaded
                }
                Ok(FetchedPayload::Video) => AssetStatus::Loaded,
                Err(reason) => {
                    log::warn!("asset {id} failed to load: {reason}");
                    if matches!(state.images.get(&id), Some(ImageState::Loading)) {
                        state.images.set_failed(id.clone());
                    }
                    AssetStatus::Failed
                }
            };

            if state.page.gate.mark(&id, status).became_ready() {
                on_gate_ready(state, epoch, Instant::now())
            } else {
                Task::none()
            }
        }

        Message::GateDeadline { epoch } => {
            if epoch != state.load_epoch {
                return Task::none();
            }
            if state.page.gate.force_timeout().became_ready() {
                on_gate_ready(state, epoch, Instant::now())
            } else {
                Task::none()
            }
        }

        Message::HoldElapsed { epoch } => {
            if epoch == state.load_epoch {
                state.page.overlay.hold_elapsed(Instant::now());
            }
            Task::none()
        }

        Message::OverlayTick => {
            state.page.overlay.tick(Instant::now());
            Task::none()
        }

        Message::AutoAdvance(id) => {
            // The subscription stops once the page is hidden or mid-load;
            // this guard covers a tick already in flight when it stopped.
            if state.page.is_revealed() {
                if let Some(carousel) = state.page.carousel_mut(id) {
                    carousel.seq.tick();
                }
            }
            Task::none()
        }

        Message::CarouselNext(id) => {
            if let Some(carousel) = state.page.carousel_mut(id) {
                carousel.seq.next();
            }
            Task::none()
        }

        Message::CarouselPrevious(id) => {
            if let Some(carousel) = state.page.carousel_mut(id) {
                carousel.seq.previous();
            }
            Task::none()
        }

        Message::CarouselGoTo(id, index) => {
            if let Some(carousel) = state.page.carousel_mut(id) {
                carousel.seq.go_to(index);
            }
            Task::none()
        }

        Message::TouchStarted(x) => {
            state.page.swipe.begin(x);
            Task::none()
        }

        Message::TouchEnded(x) => {
            let gesture = state.page.swipe.finish(x);
            if let Some(carousel) = state.page.primary_carousel_mut() {
                match gesture {
                    Some(SwipeDirection::Advance) => carousel.seq.next(),
                    Some(SwipeDirection::Retreat) => carousel.seq.previous(),
                    None => {}
                }
            }
            Task::none()
        }

        Message::TouchCancelled => {
            state.page.swipe.cancel();
            Task::none()
        }
    }
}

/// Tear down the current page and mount `route`: fresh gate, fresh overlay,
/// loader fan-out for everything not already in cache, and the deadline.
pub fn navigate(state: &mut State, route: Route) -> Task<Message> {
    state.load_epoch += 1;
    let epoch = state.load_epoch;
    let now = Instant::now();

    log::info!("navigating to {route}");
    state.page = PageState::enter(route, state.config.gate_timeout(), now);

    let mut tasks = Vec::new();
    for descriptor in page_assets(route) {
        match state.images.get(&descriptor.id) {
            Some(ImageState::Loaded(_)) => {
                state.page.gate.mark(&descriptor.id, AssetStatus::Loaded);
            }
            Some(ImageState::Failed) => {
                state.page.gate.mark(&descriptor.id, AssetStatus::Failed);
            }
            _ => {
                if descriptor.kind == AssetKind::Image {
                    state.images.set_loading(descriptor.id.clone());
                }
                tasks.push(assets::load_task(
                    &state.http,
                    state.config.asset_base(),
                    descriptor,
                    epoch,
                ));
            }
        }
    }

    if state.page.gate.is_ready() {
        // Everything was cached (or the manifest was empty).
        tasks.push(on_gate_ready(state, epoch, now));
    } else {
        tasks.push(assets::delay_task(
            state.page.gate.timeout(),
            Message::GateDeadline { epoch },
        ));
    }

    Task::batch(tasks)
}

/// The gate just opened (either path). Drive the overlay and, on the landing
/// splash, schedule the dwell that advances to the home page.
fn on_gate_ready(state: &mut State, epoch: u64, now: Instant) -> Task<Message> {
    let mut tasks = Vec::new();

    match state.page.overlay.on_ready(now) {
        HoldDecision::HoldFor(delay) => {
            tasks.push(assets::delay_task(delay, Message::HoldElapsed { epoch }));
        }
        HoldDecision::FadeStarted => {}
    }

    if state.page.route == Route::Landing {
        tasks.push(assets::delay_task(
            LANDING_DWELL,
            Message::LandingDwellElapsed { epoch },
        ));
    }

    Task::batch(tasks)
}

fn landing_dwell_elapsed(state: &mut State, epoch: u64) -> Task<Message> {
    if epoch != state.load_epoch || state.page.route != Route::Landing {
        return Task::none();
    }
    navigate(state, Route::Home)
}
