mod app;
mod db;
mod format;
mod keyboard;
mod poster_cache;
mod screen;
mod style;
mod subscription;
mod theme;
mod widgets;
mod window_state;

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter("kinema=debug")
        .init();

    let ws = window_state::WindowState::load();

    let mut win = iced::window::Settings {
        size: ws.size(),
        ..Default::default()
    };

    if let Some(pos) = ws.position() {
        win.position = iced::window::Position::Specific(pos);
    } else {
        win.position = iced::window::Position::Centered;
    }

    iced::application(app::Kinema::new, app::Kinema::update, app::Kinema::view)
        .title(app::Kinema::title)
        .subscription(app::Kinema::subscription)
        .theme(app::Kinema::theme)
        .font(lucide_icons::LUCIDE_FONT_BYTES)
        .window(win)
        .run()
}
