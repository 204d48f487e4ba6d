use std::time::{Duration, Instant};

use reqwest::Client;

use atrium_core::{ReadinessGate, Sequencer, SwipeTracker};
use atrium_model::content::{self, page_assets};
use atrium_model::Route;

use crate::assets;
use crate::config::AppConfig;
use crate::image_cache::ImageCache;
use crate::message::CarouselId;
use crate::overlay::LoadingOverlay;

/// Autoplay cadence of the home hero rotation.
pub const HERO_INTERVAL: Duration = Duration::from_millis(3000);
/// Autoplay cadence of the sector rotation.
pub const SECTOR_INTERVAL: Duration = Duration::from_millis(5000);

/// One carousel instance on a page.
#[derive(Debug, Clone)]
pub struct Carousel {
    pub id: CarouselId,
    pub seq: Sequencer,
    pub interval: Duration,
}

/// Everything owned by the page currently on screen. Replaced wholesale on
/// navigation; nothing here outlives its route.
#[derive(Debug, Clone)]
pub struct PageState {
    pub route: Route,
    pub gate: ReadinessGate,
    pub overlay: LoadingOverlay,
    pub carousels: Vec<Carousel>,
    pub swipe: SwipeTracker,
}

impl PageState {
    pub fn enter(route: Route, gate_timeout: Duration, now: Instant) -> Self {
        let manifest = page_assets(route);
        let gate = ReadinessGate::new(manifest.into_iter().map(|a| a.id), gate_timeout);

        let (min_hold, reveal_delay) = overlay_timings(route);
        let overlay = LoadingOverlay::new(min_hold, reveal_delay, now);

        let carousels = match route {
            Route::Home => vec![Carousel {
                id: CarouselId::Hero,
                seq: Sequencer::new(content::HERO_SLIDES.len()),
                interval: HERO_INTERVAL,
            }],
            Route::DesignBuild => vec![Carousel {
                id: CarouselId::Sector,
                seq: Sequencer::new(content::SECTOR_SLIDES.len()),
                interval: SECTOR_INTERVAL,
            }],
            _ => Vec::new(),
        };

        PageState {
            route,
            gate,
            overlay,
            carousels,
            swipe: SwipeTracker::new(),
        }
    }

    pub fn carousel(&self, id: CarouselId) -> Option<&Carousel> {
        self.carousels.iter().find(|carousel| carousel.id == id)
    }

    pub fn carousel_mut(&mut self, id: CarouselId) -> Option<&mut Carousel> {
        self.carousels.iter_mut().find(|carousel| carousel.id == id)
    }

    /// The carousel swipe gestures act on.
    pub fn primary_carousel_mut(&mut self) -> Option<&mut Carousel> {
        self.carousels.first_mut()
    }

    /// Gate open and overlay gone: the page is interactive.
    pub fn is_revealed(&self) -> bool {
        self.gate.is_ready() && self.overlay.is_cleared()
    }
}

/// Anti-flash timing per route: the contact page holds its spinner a minimum
/// 800 ms, who-we-are reveals half a second after readiness.
fn overlay_timings(route: Route) -> (Duration, Duration) {
    match route {
        Route::Contact => (Duration::from_millis(800), Duration::ZERO),
        Route::WhoWeAre => (Duration::ZERO, Duration::from_millis(500)),
        _ => (Duration::ZERO, Duration::ZERO),
    }
}

#[derive(Debug, Clone)]
pub struct State {
    pub config: AppConfig,
    pub http: Client,
    pub images: ImageCache,
    /// Bumped on every navigation; tasks stamped with an older epoch belong
    /// to a page that no longer exists.
    pub load_epoch: u64,
    pub page: PageState,
}

impl State {
    pub fn new(config: AppConfig) -> Self {
        let page = PageState::enter(Route::Landing, config.gate_timeout(), Instant::now());
        State {
            http: assets::build_client(),
            images: ImageCache::new(),
            load_epoch: 0,
            page,
            config,
        }
    }

    pub fn route(&self) -> Route {
        self.page.route
    }
}
