pub mod search;
pub mod settings;
pub mod stats;

use iced::Task;

use crate::app;

/// Which page is currently displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Search,
    Stats,
    Settings,
}

/// Actions that a screen can request from the app router.
///
/// Screens return these from `update()` instead of directly mutating
/// shared state — the app interprets them in one place.
#[allow(dead_code)]
pub enum Action {
    /// No side-effect.
    None,
    /// Navigate to a different page.
    NavigateTo(Page),
    /// Update the status bar message.
    SetStatus(String),
    /// Run an async Iced task that eventually produces an app::Message.
    RunTask(Task<app::Message>),
}
