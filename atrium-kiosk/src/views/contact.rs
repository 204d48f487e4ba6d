use iced::widget::{column, container, text};
use iced::Element;

use atrium_model::content::CONTACT;

use crate::message::Message;
use crate::state::State;
use crate::theme::{self, ShowcaseTheme};

use super::components;

pub fn view(state: &State) -> Element<'_, Message> {
    let map = components::media_or_placeholder(
        &state.images,
        CONTACT.map_asset().id,
        "Project office",
        350.0,
    );

    let details = container(
        column![
            text("Visit the project office").size(20),
            text(CONTACT.address)
                .size(14)
                .color(ShowcaseTheme::TEXT_SECONDARY),
            text(CONTACT.phone)
                .size(14)
                .color(ShowcaseTheme::TEXT_SECONDARY),
            text(CONTACT.email).size(14).color(ShowcaseTheme::BRAND_BLUE),
        ]
        .spacing(10),
    )
    .padding(24)
    .style(theme::Container::SectionCard.style());

    column![components::section_heading("Contact Us"), map, details]
        .spacing(24)
        .padding(40)
        .into()
}
