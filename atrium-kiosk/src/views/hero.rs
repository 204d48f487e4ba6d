//! The slideshow frame shared by the home hero and the sector rotation:
//! current slide, caption chip, prev/next chevrons and dot indicators.

use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, column, container, stack, text, Space};
use iced::{Alignment, Element, Length};

use atrium_core::Sequencer;
use atrium_model::Slide;

use crate::image_cache::ImageCache;
use crate::message::{CarouselId, Message};
use crate::theme::{self, ShowcaseTheme};

use super::components;

pub fn carousel_frame(
    images: &ImageCache,
    id: CarouselId,
    slides: &[Slide],
    seq: &Sequencer,
    height: f32,
) -> Element<'static, Message> {
    let Some(slide) = slides.get(seq.index()) else {
        return container(Space::with_height(Length::Fixed(height)))
            .width(Length::Fill)
            .style(theme::Container::HeroFrame.style())
            .into();
    };

    let media = components::media_or_placeholder(images, slide.asset_id(), slide.title, height);

    let caption = container(
        column![
            text(slide.category)
                .size(11)
                .color(ShowcaseTheme::TEXT_INVERSE_DIM),
            text(slide.title).size(17).color(ShowcaseTheme::TEXT_INVERSE),
        ]
        .spacing(2)
        .align_x(Alignment::Center),
    )
    .padding([8, 14])
    .style(theme::Container::CaptionChip.style());

    let caption_layer = container(caption)
        .width(Length::Fill)
        .height(Length::Fixed(height))
        .align_x(Horizontal::Center)
        .align_y(Vertical::Bottom)
        .padding(28);

    let chevron_left = container(
        button(text("\u{2039}").size(26))
            .padding([0, 12])
            .style(theme::Button::Chevron.style())
            .on_press(Message::CarouselPrevious(id)),
    )
    .height(Length::Fixed(height))
    .align_y(Vertical::Center)
    .padding(10);

    let chevron_right = container(
        button(text("\u{203A}").size(26))
            .padding([0, 12])
            .style(theme::Button::Chevron.style())
            .on_press(Message::CarouselNext(id)),
    )
    .width(Length::Fill)
    .height(Length::Fixed(height))
    .align_x(Horizontal::Right)
    .align_y(Vertical::Center)
    .padding(10);

    let dot_layer = container(components::dots(id, slides.len(), seq.index()))
        .width(Length::Fill)
        .height(Length::Fixed(height))
        .align_y(Vertical::Bottom)
        .padding(8);

    container(stack([
        media,
        caption_layer.into(),
        chevron_left.into(),
        chevron_right.into(),
        dot_layer.into(),
    ]))
    .width(Length::Fill)
    .style(theme::Container::HeroFrame.style())
    .into()
}
