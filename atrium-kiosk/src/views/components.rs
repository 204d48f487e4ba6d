//! Shared widgets: chrome, media slots, dot indicators, copy blocks.

use iced::alignment::Horizontal;
use iced::widget::{button, column, container, image, row, text, Space};
use iced::{Alignment, ContentFit, Element, Length};

use atrium_model::{AssetId, AssetStatus, Route, Section, ValueItem};

use crate::image_cache::{ImageCache, ImageState};
use crate::message::{CarouselId, Message};
use crate::theme::{self, ShowcaseTheme};

const NAV_ROUTES: [Route; 5] = [
    Route::Home,
    Route::WhoWeAre,
    Route::DesignBuild,
    Route::About,
    Route::Contact,
];

pub fn nav_bar(current: Route) -> Element<'static, Message> {
    let brand = row![
        text("ATRIUM").size(20).color(ShowcaseTheme::BRAND_BLUE),
        text("BUILD").size(20).color(ShowcaseTheme::BRAND_VIOLET),
    ]
    .spacing(2);

    let mut links = row![].spacing(4).align_y(Alignment::Center);
    for route in NAV_ROUTES {
        let color = if route == current {
            ShowcaseTheme::BRAND_BLUE
        } else {
            ShowcaseTheme::TEXT_PRIMARY
        };
        links = links.push(
            button(text(route.title()).size(14).color(color))
                .style(button::text)
                .on_press(Message::Navigate(route)),
        );
    }

    container(
        row![brand, Space::with_width(Length::Fill), links]
            .align_y(Alignment::Center)
            .width(Length::Fill),
    )
    .padding([14, 24])
    .style(theme::Container::NavBar.style())
    .into()
}

pub fn footer() -> Element<'static, Message> {
    container(
        column![
            text("Atrium Design + Build").size(16).color(ShowcaseTheme::TEXT_INVERSE),
            text("Civil works, interiors and turnkey developments.")
                .size(13)
                .color(ShowcaseTheme::TEXT_INVERSE_DIM),
            text("hello@atrium.build").size(13).color(ShowcaseTheme::TEXT_INVERSE_DIM),
        ]
        .spacing(6),
    )
    .width(Length::Fill)
    .padding(32)
    .style(theme::Container::Footer.style())
    .into()
}

pub fn section_heading(label: &str) -> Element<'_, Message> {
    text(label).size(30).color(ShowcaseTheme::TEXT_PRIMARY).into()
}

/// A media slot backed by the image cache: the decoded image when it loaded,
/// the "not available" card when it failed, a neutral frame while pending
/// (visible only after a timeout reveal).
pub fn media_or_placeholder(
    images: &ImageCache,
    id: AssetId,
    caption: &str,
    height: f32,
) -> Element<'static, Message> {
    match images.get(&id) {
        Some(ImageState::Loaded(handle)) => image(handle)
            .width(Length::Fill)
            .height(Length::Fixed(height))
            .content_fit(ContentFit::Cover)
            .into(),
        Some(ImageState::Failed) => container(
            column![
                text("Image not available").size(20),
                text(caption.to_string())
                    .size(13)
                    .color(ShowcaseTheme::TEXT_SECONDARY),
            ]
            .spacing(6)
            .align_x(Alignment::Center),
        )
        .width(Length::Fill)
        .height(Length::Fixed(height))
        .center_x(Length::Fill)
        .center_y(Length::Fixed(height))
        .style(theme::Container::PlaceholderCard.style())
        .into(),
        _ => container(Space::with_height(Length::Fixed(height)))
            .width(Length::Fill)
            .style(theme::Container::PlaceholderCard.style())
            .into(),
    }
}

/// Dark panel standing in for an ambient reel; the asset itself is only
/// availability-checked, never decoded.
pub fn reel_panel(title: &str, status: Option<AssetStatus>, height: f32) -> Element<'static, Message> {
    let caption = match status {
        Some(AssetStatus::Failed) => "reel unavailable",
        _ => "ambient reel",
    };

    container(
        column![
            text("\u{25B6}").size(28).color(ShowcaseTheme::TEXT_INVERSE_DIM),
            text(title.to_string()).size(16).color(ShowcaseTheme::TEXT_INVERSE),
            text(caption).size(12).color(ShowcaseTheme::TEXT_INVERSE_DIM),
        ]
        .spacing(8)
        .align_x(Alignment::Center),
    )
    .width(Length::Fill)
    .height(Length::Fixed(height))
    .center_x(Length::Fill)
    .center_y(Length::Fixed(height))
    .style(|_| iced::widget::container::Style {
        text_color: Some(ShowcaseTheme::TEXT_INVERSE),
        background: Some(iced::Background::Color(ShowcaseTheme::INK)),
        border: iced::Border {
            radius: 12.0.into(),
            ..Default::default()
        },
        ..Default::default()
    })
    .into()
}

pub fn value_card(item: &ValueItem) -> Element<'static, Message> {
    container(
        column![
            text(item.title).size(18).color(ShowcaseTheme::BRAND_BLUE),
            text(item.detail).size(13).color(ShowcaseTheme::TEXT_SECONDARY),
        ]
        .spacing(8),
    )
    .width(Length::Fill)
    .padding(20)
    .style(theme::Container::SectionCard.style())
    .into()
}

pub fn copy_card(section: &Section) -> Element<'static, Message> {
    container(
        column![
            text(section.heading).size(20).color(ShowcaseTheme::TEXT_PRIMARY),
            text(section.body).size(14).color(ShowcaseTheme::TEXT_SECONDARY),
        ]
        .spacing(10),
    )
    .width(Length::Fill)
    .padding(24)
    .style(theme::Container::SectionCard.style())
    .into()
}

pub fn stat(item: &ValueItem) -> Element<'static, Message> {
    column![
        text(item.title).size(24).color(ShowcaseTheme::BRAND_VIOLET),
        text(item.detail).size(12).color(ShowcaseTheme::TEXT_SECONDARY),
    ]
    .spacing(2)
    .into()
}

/// Dot indicators under a carousel; the active dot is widened.
pub fn dots(id: CarouselId, len: usize, active: usize) -> Element<'static, Message> {
    let mut indicators = row![].spacing(6).align_y(Alignment::Center);
    for index in 0..len {
        let is_active = index == active;
        let width = if is_active { 24.0 } else { 8.0 };
        indicators = indicators.push(
            button(Space::new(Length::Fixed(width), Length::Fixed(4.0)))
                .padding(0)
                .style(theme::dot_style(is_active))
                .on_press(Message::CarouselGoTo(id, index)),
        );
    }
    container(indicators)
        .width(Length::Fill)
        .align_x(Horizontal::Center)
        .into()
}
