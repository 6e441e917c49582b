//! Global keyboard shortcuts.
//!
//! Maps key releases to semantic `Shortcut` variants that the app
//! router dispatches based on the current page and selection state.
//! Shortcuts fire on release, and only for events no focused widget
//! consumed, so typing in the search field never triggers them.

use iced::keyboard;
use iced::Subscription;

use crate::app::Message;

/// Application-level keyboard shortcuts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Shortcut {
    /// Enter — focus the search field and start a fresh query.
    FocusSearch,
    /// Backspace — close the open detail panel.
    CloseDetail,
    /// Escape — clear the current search query.
    ClearQuery,
}

/// Subscription that converts keyboard events to `Message::Shortcut`.
pub fn keyboard_subscription() -> Subscription<Message> {
    iced::event::listen_with(|event, status, _id| match event {
        iced::Event::Keyboard(keyboard::Event::KeyReleased { key, .. })
            if status == iced::event::Status::Ignored =>
        {
            map_shortcut(&key).map(Message::Shortcut)
        }
        _ => None,
    })
}

fn map_shortcut(key: &keyboard::Key) -> Option<Shortcut> {
    use keyboard::key::Named;
    use keyboard::Key;

    match key {
        Key::Named(Named::Enter) => Some(Shortcut::FocusSearch),
        Key::Named(Named::Backspace) => Some(Shortcut::CloseDetail),
        Key::Named(Named::Escape) => Some(Shortcut::ClearQuery),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::keyboard::key::Named;
    use iced::keyboard::Key;

    #[test]
    fn named_keys_map_to_shortcuts() {
        assert_eq!(
            map_shortcut(&Key::Named(Named::Enter)),
            Some(Shortcut::FocusSearch)
        );
        assert_eq!(
            map_shortcut(&Key::Named(Named::Backspace)),
            Some(Shortcut::CloseDetail)
        );
        assert_eq!(
            map_shortcut(&Key::Named(Named::Escape)),
            Some(Shortcut::ClearQuery)
        );
    }

    #[test]
    fn character_keys_are_ignored() {
        assert_eq!(map_shortcut(&Key::Character("q".into())), None);
    }
}
