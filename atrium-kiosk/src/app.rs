use iced::{Settings, Task, Theme};

use atrium_model::Route;

use crate::config::AppConfig;
use crate::message::Message;
use crate::state::State;
use crate::theme::ShowcaseTheme;
use crate::{subscriptions, update, view};

/// Build and run the showcase application.
pub fn run(config: AppConfig) -> iced::Result {
    let kiosk_mode = config.kiosk_mode();

    iced::application("Atrium Showcase", update::update, view::view)
        .settings(default_settings())
        .subscription(subscriptions::subscription)
        .theme(app_theme)
        .window(iced::window::Settings {
            size: iced::Size::new(1280.0, 800.0),
            resizable: !kiosk_mode,
            decorations: !kiosk_mode,
            ..Default::default()
        })
        .run_with(move || boot(config))
}

/// Boot logic shared by the runtime application and the tests: construct the
/// state and mount the landing splash.
pub fn boot(config: AppConfig) -> (State, Task<Message>) {
    let kiosk_mode = config.kiosk_mode();
    let mut state = State::new(config);
    let mut task = update::navigate(&mut state, Route::Landing);

    if kiosk_mode {
        task = Task::batch([
            task,
            iced::window::get_latest()
                .and_then(|id| iced::window::change_mode(id, iced::window::Mode::Fullscreen)),
        ]);
    }

    (state, task)
}

fn default_settings() -> Settings {
    let mut settings = Settings::default();
    settings.id = Some("atrium-kiosk".to_string());
    settings.antialiasing = true;
    settings
}

fn app_theme(_: &State) -> Theme {
    ShowcaseTheme::theme()
}
