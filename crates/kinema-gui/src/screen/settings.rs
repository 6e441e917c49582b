//! Settings screen: appearance, movie data provider, and storage.

use iced::widget::{column, container, pick_list, row, text, text_input};
use iced::{Alignment, Element, Length};

use kinema_core::config::AppConfig;

use crate::screen::Action;
use crate::style;
use crate::theme::{self, ColorScheme, ThemeMode};

/// Settings screen state.
///
/// Text inputs are buffered here and written to the config on submit.
pub struct Settings {
    pub selected_mode: ThemeMode,
    pub api_key_input: String,
    pub watched_key_input: String,
}

/// Messages handled by the Settings screen.
#[derive(Debug, Clone)]
pub enum Message {
    ModeChanged(ThemeMode),
    ApiKeyChanged(String),
    ApiKeySubmitted,
    WatchedKeyChanged(String),
    WatchedKeySubmitted,
}

impl Settings {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            selected_mode: config.appearance.mode,
            api_key_input: config.provider.api_key.clone(),
            watched_key_input: config.storage.watched_key.clone(),
        }
    }

    pub fn update(&mut self, msg: Message, config: &mut AppConfig) -> Action {
        match msg {
            Message::ModeChanged(mode) => {
                self.selected_mode = mode;
                config.appearance.mode = mode;
                let _ = config.save();
                Action::None
            }
            Message::ApiKeyChanged(val) => {
                self.api_key_input = val;
                Action::None
            }
            Message::ApiKeySubmitted => {
                config.provider.api_key = self.api_key_input.trim().to_string();
                let _ = config.save();
                Action::SetStatus("API key saved".into())
            }
            Message::WatchedKeyChanged(val) => {
                self.watched_key_input = val;
                Action::None
            }
            Message::WatchedKeySubmitted => {
                let key = self.watched_key_input.trim().to_string();
                if key.is_empty() {
                    self.watched_key_input = config.storage.watched_key.clone();
                    return Action::SetStatus("Storage key cannot be empty".into());
                }
                self.watched_key_input = key.to_string();
                config.storage.watched_key = key.to_string();
                let _ = config.save();
                // app.rs reloads the watched list from the new key.
                Action::SetStatus(format!("Watched list stored under \"{key}\""))
            }
        }
    }

    // ── View ────────────────────────────────────────────────────────

    pub fn view<'a>(&'a self, cs: &ColorScheme) -> Element<'a, Message> {
        let heading = text("Settings")
            .size(style::TEXT_XL)
            .line_height(style::LINE_HEIGHT_TIGHT);

        let content = column![
            heading,
            self.appearance_card(cs),
            self.provider_card(cs),
            self.storage_card(cs),
        ]
        .spacing(style::SPACE_LG)
        .padding(style::SPACE_XL)
        .width(Length::Fill)
        .max_width(640.0);

        crate::widgets::styled_scrollable(
            container(content).width(Length::Fill).center_x(Length::Fill),
            cs,
        )
        .height(Length::Fill)
        .into()
    }

    fn appearance_card<'a>(&'a self, cs: &ColorScheme) -> Element<'a, Message> {
        container(
            column![
                text("Appearance")
                    .size(style::TEXT_XS)
                    .color(cs.on_surface_variant)
                    .line_height(style::LINE_HEIGHT_LOOSE),
                row![
                    text("Mode")
                        .size(style::TEXT_BASE)
                        .line_height(style::LINE_HEIGHT_NORMAL)
                        .width(Length::Fill),
                    pick_list(
                        ThemeMode::ALL,
                        Some(self.selected_mode),
                        |mode: ThemeMode| Message::ModeChanged(mode),
                    )
                    .text_size(style::TEXT_SM)
                    .padding([style::SPACE_XS, style::SPACE_SM])
                    .style(theme::pick_list_style(cs))
                    .menu_style(theme::pick_list_menu_style(cs)),
                ]
                .align_y(Alignment::Center)
                .spacing(style::SPACE_MD),
            ]
            .spacing(style::SPACE_SM),
        )
        .style(theme::card(cs))
        .padding(style::SPACE_LG)
        .width(Length::Fill)
        .into()
    }

    fn provider_card<'a>(&'a self, cs: &ColorScheme) -> Element<'a, Message> {
        container(
            column![
                text("Movie Data")
                    .size(style::TEXT_XS)
                    .color(cs.on_surface_variant)
                    .line_height(style::LINE_HEIGHT_LOOSE),
                row![
                    text("OMDb API key")
                        .size(style::TEXT_BASE)
                        .line_height(style::LINE_HEIGHT_NORMAL)
                        .width(Length::Fill),
                    text_input("API key", &self.api_key_input)
                        .on_input(Message::ApiKeyChanged)
                        .on_submit(Message::ApiKeySubmitted)
                        .size(style::INPUT_FONT_SIZE)
                        .padding(style::INPUT_PADDING)
                        .width(Length::Fixed(style::INPUT_FIELD_WIDTH))
                        .style(theme::text_input_style(cs)),
                ]
                .align_y(Alignment::Center)
                .spacing(style::SPACE_MD),
                text("Press Enter to save. Free keys are available at omdbapi.com.")
                    .size(style::TEXT_XS)
                    .color(cs.outline)
                    .line_height(style::LINE_HEIGHT_LOOSE),
            ]
            .spacing(style::SPACE_SM),
        )
        .style(theme::card(cs))
        .padding(style::SPACE_LG)
        .width(Length::Fill)
        .into()
    }

    fn storage_card<'a>(&'a self, cs: &ColorScheme) -> Element<'a, Message> {
        container(
            column![
                text("Storage")
                    .size(style::TEXT_XS)
                    .color(cs.on_surface_variant)
                    .line_height(style::LINE_HEIGHT_LOOSE),
                row![
                    text("Watched list key")
                        .size(style::TEXT_BASE)
                        .line_height(style::LINE_HEIGHT_NORMAL)
                        .width(Length::Fill),
                    text_input("watched", &self.watched_key_input)
                        .on_input(Message::WatchedKeyChanged)
                        .on_submit(Message::WatchedKeySubmitted)
                        .size(style::INPUT_FONT_SIZE)
                        .padding(style::INPUT_PADDING)
                        .width(Length::Fixed(style::INPUT_FIELD_WIDTH))
                        .style(theme::text_input_style(cs)),
                ]
                .align_y(Alignment::Center)
                .spacing(style::SPACE_MD),
                text("Separate keys keep independent watched lists in the same database.")
                    .size(style::TEXT_XS)
                    .color(cs.outline)
                    .line_height(style::LINE_HEIGHT_LOOSE),
            ]
            .spacing(style::SPACE_SM),
        )
        .style(theme::card(cs))
        .padding(style::SPACE_LG)
        .width(Length::Fill)
        .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_watched_key_is_rejected() {
        let mut config = AppConfig::default();
        let mut settings = Settings::new(&config);

        settings.update(Message::WatchedKeyChanged("   ".into()), &mut config);
        settings.update(Message::WatchedKeySubmitted, &mut config);

        assert_eq!(config.storage.watched_key, "watched");
        assert_eq!(settings.watched_key_input, "watched");
    }

    #[test]
    fn watched_key_is_trimmed_on_submit() {
        let mut config = AppConfig::default();
        let mut settings = Settings::new(&config);

        settings.update(Message::WatchedKeyChanged(" favorites ".into()), &mut config);
        settings.update(Message::WatchedKeySubmitted, &mut config);

        assert_eq!(config.storage.watched_key, "favorites");
    }
}
