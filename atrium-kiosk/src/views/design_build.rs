use iced::widget::{column, row, Space};
use iced::{Element, Length};

use atrium_model::{content, AssetId, PageContent};

use crate::message::{CarouselId, Message};
use crate::state::State;

use super::{components, hero};

const REEL_TITLES: [&str; 3] = ["Design & Build", "Design Excellence", "General Contracting"];

pub fn view(state: &State) -> Element<'_, Message> {
    let rotation: Element<'_, Message> = match state.page.carousel(CarouselId::Sector) {
        Some(carousel) => hero::carousel_frame(
            &state.images,
            CarouselId::Sector,
            PageContent::sector_slides(),
            &carousel.seq,
            420.0,
        ),
        None => Space::with_height(0).into(),
    };

    let mut reels = row![].spacing(16);
    for (title, path) in REEL_TITLES.iter().zip(content::DESIGN_BUILD_REELS) {
        let status = state.page.gate.status_of(&AssetId::new(path));
        reels = reels.push(components::reel_panel(title, status, 200.0));
    }

    column![
        components::section_heading("Sectors we serve"),
        rotation,
        components::section_heading("How we deliver"),
        reels,
        Space::with_height(Length::Fixed(10.0)),
    ]
    .spacing(24)
    .padding(40)
    .into()
}
