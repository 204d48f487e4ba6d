use iced::widget::{column, row};
use iced::Element;

use atrium_model::{content, AssetId};

use crate::message::Message;
use crate::state::State;

use super::components;

pub fn view(state: &State) -> Element<'_, Message> {
    let reel_status = state.page.gate.status_of(&AssetId::new(content::ABOUT_REEL));

    let mut sections = row![].spacing(16);
    for section in &content::ABOUT_SECTIONS {
        sections = sections.push(components::copy_card(section));
    }

    let mut stills = row![].spacing(16);
    for path in content::ABOUT_STILLS {
        stills = stills.push(components::media_or_placeholder(
            &state.images,
            AssetId::new(path),
            path,
            200.0,
        ));
    }

    column![
        components::reel_panel("Atrium in motion", reel_status, 300.0),
        sections,
        components::section_heading("Recent work"),
        stills,
    ]
    .spacing(24)
    .padding(40)
    .into()
}
