use iced::widget::{column, row, text};
use iced::Element;

use atrium_model::{content, AssetId};

use crate::message::Message;
use crate::state::State;
use crate::theme::ShowcaseTheme;

use super::components;

pub fn view(state: &State) -> Element<'_, Message> {
    let reel_status = state
        .page
        .gate
        .status_of(&AssetId::new(content::WHO_WE_ARE_REEL));

    let mut stills = row![].spacing(16);
    for path in content::WHO_WE_ARE_STILLS {
        stills = stills.push(components::media_or_placeholder(
            &state.images,
            AssetId::new(path),
            path,
            180.0,
        ));
    }

    let mut reasons = row![].spacing(16);
    for item in &content::WHY_CHOOSE_US {
        reasons = reasons.push(components::value_card(item));
    }

    column![
        components::reel_panel("Studio walkthrough", reel_status, 320.0),
        components::section_heading(content::WHO_WE_ARE.heading),
        text(content::WHO_WE_ARE.body)
            .size(15)
            .color(ShowcaseTheme::TEXT_SECONDARY),
        stills,
        components::section_heading("Why choose us"),
        reasons,
    ]
    .spacing(24)
    .padding(40)
    .into()
}
