use iced::widget::{button, column, container, row, text, Space};
use iced::{Alignment, Element};

use atrium_model::{content, AssetId, PageContent, Route};

use crate::message::{CarouselId, Message};
use crate::state::State;
use crate::theme::{self, ShowcaseTheme};

use super::{components, hero};

pub fn view(state: &State) -> Element<'_, Message> {
    let slideshow: Element<'_, Message> = match state.page.carousel(CarouselId::Hero) {
        Some(carousel) => hero::carousel_frame(
            &state.images,
            CarouselId::Hero,
            PageContent::hero_slides(),
            &carousel.seq,
            460.0,
        ),
        None => Space::with_height(0).into(),
    };

    let mut stats = row![].spacing(32);
    for item in &content::HOME_STATS {
        stats = stats.push(components::stat(item));
    }

    let intro = column![
        text(content::HOME_HEADLINE.heading).size(44),
        text(content::HOME_HEADLINE.body)
            .size(16)
            .color(ShowcaseTheme::TEXT_SECONDARY),
        row![
            button(text("Explore Projects").size(15))
                .padding([12, 20])
                .style(theme::Button::Primary.style())
                .on_press(Message::Navigate(Route::DesignBuild)),
            button(text("Book Consultation").size(15))
                .padding([12, 20])
                .style(theme::Button::Ghost.style())
                .on_press(Message::Navigate(Route::Contact)),
        ]
        .spacing(14),
        stats,
    ]
    .spacing(22)
    .max_width(460);

    let hero_section = row![intro, slideshow]
        .spacing(36)
        .align_y(Alignment::Center)
        .padding(40);

    let mut value_cards = row![].spacing(16);
    for item in &content::HOME_VALUES {
        value_cards = value_cards.push(components::value_card(item));
    }

    let values = column![
        components::section_heading("Our Values"),
        components::media_or_placeholder(
            &state.images,
            AssetId::new(content::VALUES_BACKDROP),
            "Our Values",
            220.0,
        ),
        value_cards,
    ]
    .spacing(18)
    .padding([20, 40]);

    let who_we_are = container(
        column![
            components::section_heading(content::WHO_WE_ARE.heading),
            text(content::WHO_WE_ARE.body)
                .size(15)
                .color(ShowcaseTheme::TEXT_SECONDARY),
            button(text("Meet the team").size(14))
                .padding([10, 18])
                .style(theme::Button::Ghost.style())
                .on_press(Message::Navigate(Route::WhoWeAre)),
        ]
        .spacing(14),
    )
    .padding([20, 40]);

    let mut steps = row![].spacing(16);
    for step in &content::PROCESS_STEPS {
        steps = steps.push(components::value_card(step));
    }

    let process = column![components::section_heading("Our Process"), steps]
        .spacing(18)
        .padding([20, 40]);

    column![
        hero_section,
        values,
        who_we_are,
        process,
        Space::with_height(30)
    ]
    .into()
}
