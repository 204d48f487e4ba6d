//! End-to-end readiness choreography through the update loop: loader
//! completions, the deadline race, stale-epoch dropping, cache-warm
//! revisits and the landing dwell.

use std::time::Duration;

use atrium_core::ReadyCause;
use atrium_kiosk::config::AppConfig;
use atrium_kiosk::message::Message;
use atrium_kiosk::state::State;
use atrium_kiosk::update;
use atrium_model::content::page_assets;
use atrium_model::{AssetKind, Route};

use iced::widget::image;

fn fresh_state() -> State {
    State::new(AppConfig::new("http://localhost:9000/assets/"))
}

/// Deliver a terminal completion for every manifest asset of the current
/// page: images succeed with a stub handle, videos succeed bare.
fn settle_all(state: &mut State) {
    let epoch = state.load_epoch;
    for asset in page_assets(state.route()) {
        let result = match asset.kind {
            AssetKind::Image => Ok(atrium_kiosk::assets::FetchedPayload::Image(
                image::Handle::from_bytes(vec![0u8; 4]),
            )),
            AssetKind::Video => Ok(atrium_kiosk::assets::FetchedPayload::Video),
        };
        let _ = update::update(
            state,
            Message::AssetFetched {
                epoch,
                id: asset.id,
                result,
            },
        );
    }
}

#[test]
fn gate_opens_after_every_asset_settles() {
    let mut state = fresh_state();
    let _ = update::navigate(&mut state, Route::Home);

    assert!(!state.page.gate.is_ready());
    assert_eq!(state.page.gate.expected(), page_assets(Route::Home).len());

    settle_all(&mut state);

    assert!(state.page.gate.is_ready());
    assert_eq!(state.page.gate.ready_cause(), Some(ReadyCause::AllSettled));
    // No hold configured on home: the overlay fade begins at readiness.
    assert!(state.page.overlay.is_fading());
}

#[test]
fn failures_settle_the_gate_like_successes() {
    let mut state = fresh_state();
    let _ = update::navigate(&mut state, Route::Home);
    let epoch = state.load_epoch;

    for asset in page_assets(Route::Home) {
        let _ = update::update(
            &mut state,
            Message::AssetFetched {
                epoch,
                id: asset.id,
                result: Err("connection refused".to_string()),
            },
        );
    }

    assert!(state.page.gate.is_ready());
    assert_eq!(state.page.gate.ready_cause(), Some(ReadyCause::AllSettled));
    assert_eq!(
        state.page.gate.failed_assets().count(),
        page_assets(Route::Home).len()
    );
}

#[test]
fn deadline_forces_readiness_and_late_completions_are_inert() {
    let mut state = fresh_state();
    let _ = update::navigate(&mut state, Route::Home);
    let epoch = state.load_epoch;

    let first = page_assets(Route::Home).remove(0);
    let _ = update::update(
        &mut state,
        Message::AssetFetched {
            epoch,
            id: first.id,
            result: Err("slow network".to_string()),
        },
    );

    let _ = update::update(&mut state, Message::GateDeadline { epoch });
    assert_eq!(state.page.gate.ready_cause(), Some(ReadyCause::TimedOut));
    let settled_at_deadline = state.page.gate.settled_count();

    // A completion racing in after the deadline changes nothing observable.
    settle_all(&mut state);
    assert_eq!(state.page.gate.ready_cause(), Some(ReadyCause::TimedOut));
    assert_eq!(state.page.gate.settled_count(), settled_at_deadline);
}

#[test]
fn deadline_after_readiness_is_inert() {
    let mut state = fresh_state();
    let _ = update::navigate(&mut state, Route::Home);
    let epoch = state.load_epoch;

    settle_all(&mut state);
    assert_eq!(state.page.gate.ready_cause(), Some(ReadyCause::AllSettled));

    let _ = update::update(&mut state, Message::GateDeadline { epoch });
    assert_eq!(state.page.gate.ready_cause(), Some(ReadyCause::AllSettled));
}

#[test]
fn completions_from_an_abandoned_page_are_dropped() {
    let mut state = fresh_state();
    let _ = update::navigate(&mut state, Route::Home);
    let stale_epoch = state.load_epoch;
    let stale_assets = page_assets(Route::Home);

    let _ = update::navigate(&mut state, Route::About);

    for asset in stale_assets {
        let _ = update::update(
            &mut state,
            Message::AssetFetched {
                epoch: stale_epoch,
                id: asset.id,
                result: Err("late".to_string()),
            },
        );
    }

    // The about page's gate never saw any of it.
    assert_eq!(state.route(), Route::About);
    assert_eq!(state.page.gate.settled_count(), 0);
    assert!(!state.page.gate.is_ready());
}

#[test]
fn stale_deadline_cannot_time_out_the_next_page() {
    let mut state = fresh_state();
    let _ = update::navigate(&mut state, Route::Home);
    let stale_epoch = state.load_epoch;

    let _ = update::navigate(&mut state, Route::Contact);
    let _ = update::update(&mut state, Message::GateDeadline { epoch: stale_epoch });

    assert!(!state.page.gate.is_ready());
    assert_eq!(state.page.gate.ready_cause(), None);
}

#[test]
fn cached_assets_settle_a_revisit_instantly() {
    let mut state = fresh_state();
    let _ = update::navigate(&mut state, Route::Home);
    settle_all(&mut state);

    let _ = update::navigate(&mut state, Route::About);
    let _ = update::navigate(&mut state, Route::Home);

    // Every home asset is an image and sits in the cache, so the fresh gate
    // is settled during navigation.
    assert!(state.page.gate.is_ready());
    assert_eq!(state.page.gate.ready_cause(), Some(ReadyCause::AllSettled));
}

#[test]
fn contact_hold_keeps_the_overlay_up_until_reported() {
    let mut state = fresh_state();
    let _ = update::navigate(&mut state, Route::Contact);
    let epoch = state.load_epoch;

    settle_all(&mut state);

    // Ready well inside the 800 ms minimum hold: still covering.
    assert!(state.page.gate.is_ready());
    assert!(state.page.overlay.is_covering());

    let _ = update::update(&mut state, Message::HoldElapsed { epoch });
    assert!(state.page.overlay.is_fading());
}

#[test]
fn stale_hold_report_does_not_reveal_the_next_page() {
    let mut state = fresh_state();
    let _ = update::navigate(&mut state, Route::Contact);
    let stale_epoch = state.load_epoch;

    let _ = update::navigate(&mut state, Route::WhoWeAre);
    let _ = update::update(&mut state, Message::HoldElapsed { epoch: stale_epoch });

    assert!(state.page.overlay.is_covering());
}

#[test]
fn landing_dwell_advances_to_home() {
    let mut state = fresh_state();
    let _ = update::navigate(&mut state, Route::Landing);
    let epoch = state.load_epoch;

    settle_all(&mut state);
    assert!(state.page.gate.is_ready());

    let _ = update::update(&mut state, Message::LandingDwellElapsed { epoch });
    assert_eq!(state.route(), Route::Home);
}

#[test]
fn stale_dwell_does_not_hijack_navigation() {
    let mut state = fresh_state();
    let _ = update::navigate(&mut state, Route::Landing);
    let stale_epoch = state.load_epoch;
    settle_all(&mut state);

    let _ = update::navigate(&mut state, Route::About);
    let _ = update::update(&mut state, Message::LandingDwellElapsed { epoch: stale_epoch });

    assert_eq!(state.route(), Route::About);
}

#[test]
fn gate_timeout_config_reaches_the_page() {
    let config = AppConfig::new("http://localhost:9000/assets/")
        .with_gate_timeout(Duration::from_millis(500));
    let mut state = State::new(config);
    let _ = update::navigate(&mut state, Route::Home);

    assert_eq!(state.page.gate.timeout(), Duration::from_millis(500));
}
