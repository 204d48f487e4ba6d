//! Chromeless splash: brand over a full-bleed background, shown while the
//! dwell timer runs before auto-advancing to the home page.

use iced::widget::{column, container, image, stack, text, Space};
use iced::{Alignment, Background, Color, ContentFit, Element, Length};

use atrium_model::{content, AssetId};

use crate::image_cache::{ImageCache, ImageState};
use crate::message::Message;
use crate::state::State;
use crate::theme::ShowcaseTheme;

pub fn view(state: &State) -> Element<'_, Message> {
    let backdrop = full_bleed(&state.images, AssetId::new(content::LANDING_BACKGROUND));

    let logo: Element<'static, Message> =
        match state.images.get(&AssetId::new(content::LANDING_LOGO)) {
            Some(ImageState::Loaded(handle)) => image(handle)
                .width(Length::Fixed(160.0))
                .height(Length::Fixed(160.0))
                .content_fit(ContentFit::Contain)
                .into(),
            _ => Space::new(Length::Fixed(160.0), Length::Fixed(160.0)).into(),
        };

    let copy = column![
        logo,
        text("Transforming Spaces")
            .size(52)
            .color(ShowcaseTheme::BRAND_BLUE),
        text("with Craft & Elegance")
            .size(52)
            .color(ShowcaseTheme::TEXT_INVERSE),
        text("Timeless interiors and buildings that reflect how you live and work.")
            .size(18)
            .color(ShowcaseTheme::TEXT_INVERSE_DIM),
    ]
    .spacing(14)
    .align_x(Alignment::Center);

    let scrim = container(Space::new(Length::Fill, Length::Fill)).style(|_| {
        iced::widget::container::Style {
            background: Some(Background::Color(Color::from_rgba(0.0, 0.0, 0.0, 0.55))),
            ..Default::default()
        }
    });

    stack([
        backdrop,
        scrim.into(),
        container(copy)
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .into(),
    ])
    .into()
}

fn full_bleed(images: &ImageCache, id: AssetId) -> Element<'static, Message> {
    match images.get(&id) {
        Some(ImageState::Loaded(handle)) => image(handle)
            .width(Length::Fill)
            .height(Length::Fill)
            .content_fit(ContentFit::Cover)
            .into(),
        _ => container(Space::new(Length::Fill, Length::Fill))
            .style(|_| iced::widget::container::Style {
                background: Some(Background::Color(ShowcaseTheme::INK)),
                ..Default::default()
            })
            .into(),
    }
}
