mod messages;
mod state;
mod update;
mod view;

pub use state::App;

use iced::{Size, Theme};

/// Launch the calculator window around an already-built [`App`].
pub fn run_app(app: App, window: Size) -> iced::Result {
    iced::application("Calculate", App::update, App::view)
        .subscription(App::subscription)
        .window_size(window)
        .theme(|_: &App| Theme::Light)
        .run_with(move || (app, App::startup()))
}
