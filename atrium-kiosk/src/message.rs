use atrium_model::{AssetId, Route};

use crate::assets::FetchedPayload;

/// Which carousel on the current page a message addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CarouselId {
    /// The home page hero rotation.
    Hero,
    /// The design-build sector rotation.
    Sector,
}

#[derive(Debug, Clone)]
pub enum Message {
    // Routing
    Navigate(Route),
    LandingDwellElapsed { epoch: u64 },

    // Preload pipeline. Every variant carries the epoch of the navigation
    // that issued it; completions from an abandoned page are dropped.
    AssetFetched {
        epoch: u64,
        id: AssetId,
        result: Result<FetchedPayload, String>,
    },
    GateDeadline { epoch: u64 },
    HoldElapsed { epoch: u64 },

    // Overlay animation frames
    OverlayTick,

    // Carousel control
    AutoAdvance(CarouselId),
    CarouselNext(CarouselId),
    CarouselPrevious(CarouselId),
    CarouselGoTo(CarouselId, usize),

    // Touch gestures (horizontal swipe on the primary carousel)
    TouchStarted(f32),
    TouchEnded(f32),
    TouchCancelled,
}
