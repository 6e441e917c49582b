use std::time::Duration;

use iced::window;
use iced::Subscription;

use crate::app::Message;
use crate::keyboard;
use crate::theme::ThemeMode;

/// All application subscriptions: keyboard shortcuts, window geometry
/// tracking, and OS appearance polling when the mode is System.
pub fn subscriptions(mode: ThemeMode) -> Subscription<Message> {
    let mut subs = vec![keyboard::keyboard_subscription(), window_events()];

    if mode == ThemeMode::System {
        subs.push(
            iced::time::every(Duration::from_secs(30))
                .map(|_| Message::AppearanceChanged(ThemeMode::System)),
        );
    }

    Subscription::batch(subs)
}

/// Track window resize/move so geometry can be restored next launch.
fn window_events() -> Subscription<Message> {
    iced::event::listen_with(|event, _status, _id| match event {
        iced::Event::Window(e @ (window::Event::Resized(_) | window::Event::Moved(_))) => {
            Some(Message::WindowEvent(e))
        }
        _ => None,
    })
}
