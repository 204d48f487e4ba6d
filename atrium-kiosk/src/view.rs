use std::time::Instant;

use iced::widget::{column, container, scrollable, stack};
use iced::{Element, Length};

use atrium_model::Route;

use crate::message::Message;
use crate::state::State;
use crate::theme;
use crate::views;

pub fn view(state: &State) -> Element<'_, Message> {
    let now = Instant::now();

    let body: Element<'_, Message> = match state.route() {
        Route::Landing => views::landing::view(state),
        Route::Home => views::home::view(state),
        Route::WhoWeAre => views::who_we_are::view(state),
        Route::DesignBuild => views::design_build::view(state),
        Route::About => views::about::view(state),
        Route::Contact => views::contact::view(state),
    };

    let content: Element<'_, Message> = if state.route().has_chrome() {
        column![
            views::components::nav_bar(state.route()),
            scrollable(column![body, views::components::footer()]).height(Length::Fill),
        ]
        .into()
    } else {
        body
    };

    let page = container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(theme::Container::Page.style());

    if state.page.overlay.is_cleared() {
        page.into()
    } else {
        stack([page.into(), state.page.overlay.view(now)]).into()
    }
}
