use iced::widget::{button, column, container, row, text};
use iced::window;
use iced::{Alignment, Element, Length, Subscription, Task, Theme};

use chrono::Utc;
use kinema_api::omdb::{OmdbClient, OmdbError};
use kinema_api::traits::MovieCatalog;
use kinema_core::config::{AppConfig, ThemeMode};
use kinema_core::models::{parse_runtime_minutes, WatchedEntry, WatchedList};

use crate::db::DbHandle;
use crate::keyboard::Shortcut;
use crate::poster_cache::{self, PosterCache, PosterState};
use crate::screen::{search, settings, stats, Action, Page};
use crate::style;
use crate::subscription;
use crate::theme::{self, ColorScheme, KinemaTheme};
use crate::window_state::WindowState;

/// Application state — slim router that delegates to screens.
pub struct Kinema {
    page: Page,
    config: AppConfig,
    db: Option<DbHandle>,
    // Theme
    current_theme: KinemaTheme,
    active_mode: ThemeMode,
    // Shared watched collection
    watched: WatchedList,
    // Screens
    search: search::Search,
    stats: stats::Stats,
    settings: settings::Settings,
    // Poster images
    poster_cache: PosterCache,
    // App-level chrome
    status_message: String,
    // Window persistence
    window_state: WindowState,
}

impl Default for Kinema {
    fn default() -> Self {
        let config = AppConfig::load().unwrap_or_default();
        let settings_screen = settings::Settings::new(&config);
        let db = AppConfig::ensure_db_path()
            .ok()
            .and_then(|path| DbHandle::open(&path));

        let current_theme = KinemaTheme::default_theme();
        let active_mode = theme::resolve_mode(config.appearance.mode);

        Self {
            page: Page::default(),
            config,
            db,
            current_theme,
            active_mode,
            watched: WatchedList::new(),
            search: search::Search::new(),
            stats: stats::Stats::new(),
            settings: settings_screen,
            poster_cache: PosterCache::default(),
            status_message: "Ready".into(),
            window_state: WindowState::load(),
        }
    }
}

/// All messages the application can handle.
#[derive(Debug, Clone)]
pub enum Message {
    NavigateTo(Page),
    Shortcut(Shortcut),
    WatchedLoaded(Result<WatchedList, String>),
    WatchedSaved(Result<(), String>),
    PosterLoaded {
        imdb_id: String,
        result: Result<std::path::PathBuf, String>,
    },
    AppearanceChanged(ThemeMode),
    WindowEvent(window::Event),
    Search(search::Message),
    Stats(stats::Message),
    Settings(settings::Message),
}

impl Kinema {
    pub fn new() -> (Self, Task<Message>) {
        let app = Self::default();
        let task = app.spawn_load_watched();
        (app, task)
    }

    pub fn title(&self) -> String {
        String::from("Kinema")
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::NavigateTo(page) => {
                self.page = page;
                Task::none()
            }
            Message::Shortcut(shortcut) => self.handle_shortcut(shortcut),
            Message::WatchedLoaded(result) => {
                match result {
                    Ok(list) => {
                        let posters: Vec<(String, Option<String>)> = list
                            .entries()
                            .iter()
                            .map(|e| (e.imdb_id.clone(), e.poster_url.clone()))
                            .collect();
                        self.watched = list;
                        return self.batch_request_posters(posters);
                    }
                    Err(e) => {
                        self.status_message = format!("Failed to load watched list: {e}");
                    }
                }
                Task::none()
            }
            Message::WatchedSaved(result) => {
                if let Err(e) = result {
                    tracing::warn!("Failed to save watched list: {e}");
                    self.status_message = format!("Failed to save: {e}");
                }
                Task::none()
            }
            Message::PosterLoaded { imdb_id, result } => {
                match result {
                    Ok(path) => {
                        self.poster_cache
                            .states
                            .insert(imdb_id, PosterState::Loaded(path));
                    }
                    Err(_) => {
                        self.poster_cache.states.insert(imdb_id, PosterState::Failed);
                    }
                }
                Task::none()
            }
            Message::AppearanceChanged(_mode) => {
                // OS appearance changed — re-resolve theme for System mode.
                self.sync_theme();
                Task::none()
            }
            Message::WindowEvent(event) => {
                match event {
                    window::Event::Resized(size) => {
                        self.window_state.record_resize(size);
                        self.window_state.save();
                    }
                    window::Event::Moved(pos) => {
                        self.window_state.record_move(pos);
                        self.window_state.save();
                    }
                    _ => {}
                }
                Task::none()
            }
            Message::Search(msg) => {
                // Intercept messages that need app-level access.
                match &msg {
                    search::Message::QueryChanged(_) | search::Message::RetrySearch => {
                        let action = self.search.update(msg);
                        let action_task = self.handle_action(action);
                        let search_task = self.spawn_search();
                        return Task::batch([action_task, search_task]);
                    }
                    search::Message::ResultsLoaded { .. } => {
                        let action = self.search.update(msg);
                        let action_task = self.handle_action(action);
                        let posters: Vec<(String, Option<String>)> = self
                            .search
                            .results()
                            .iter()
                            .map(|m| (m.imdb_id.clone(), m.poster_url.clone()))
                            .collect();
                        let batch = self.batch_request_posters(posters);
                        return Task::batch([action_task, batch]);
                    }
                    search::Message::MovieSelected(_) => {
                        let action = self.search.update(msg);
                        let action_task = self.handle_action(action);
                        let lookup = match self.search.detail_pending() {
                            Some(imdb_id) => self.spawn_lookup(imdb_id),
                            None => Task::none(),
                        };
                        return Task::batch([action_task, lookup]);
                    }
                    search::Message::DetailLoaded { .. } => {
                        let action = self.search.update(msg);
                        let action_task = self.handle_action(action);
                        let poster = self
                            .search
                            .selection()
                            .and_then(|s| s.detail.as_ref())
                            .map(|d| (d.imdb_id.clone(), d.poster_url.clone()));
                        let poster_task = match poster {
                            Some((id, url)) => self.request_poster(&id, url.as_deref()),
                            None => Task::none(),
                        };
                        return Task::batch([action_task, poster_task]);
                    }
                    search::Message::AddToWatched => {
                        return self.add_selected_to_watched();
                    }
                    search::Message::RemoveWatched(imdb_id) => {
                        let imdb_id = imdb_id.clone();
                        if self.watched.remove(&imdb_id) {
                            self.status_message = "Removed from watched list".into();
                            return self.spawn_save_watched();
                        }
                        return Task::none();
                    }
                    _ => {}
                }

                let action = self.search.update(msg);
                self.handle_action(action)
            }
            Message::Stats(msg) => match msg {},
            Message::Settings(ref msg) => {
                // Changing the storage key swaps in a different list.
                if let settings::Message::WatchedKeySubmitted = msg {
                    let msg = msg.clone();
                    let action = self.settings.update(msg, &mut self.config);
                    let action_task = self.handle_action(action);
                    let reload = self.spawn_load_watched();
                    return Task::batch([action_task, reload]);
                }

                let msg = msg.clone();
                let action = self.settings.update(msg, &mut self.config);
                self.sync_theme();
                self.handle_action(action)
            }
        }
    }

    // ── Shortcuts ───────────────────────────────────────────────────

    fn handle_shortcut(&mut self, shortcut: Shortcut) -> Task<Message> {
        match shortcut {
            Shortcut::FocusSearch => {
                self.page = Page::Search;
                // Enter starts a fresh query.
                let action = self.search.update(search::Message::ClearQuery);
                let action_task = self.handle_action(action);
                let focus = iced::widget::operation::focus(search::search_input_id());
                Task::batch([action_task, focus])
            }
            Shortcut::CloseDetail => {
                if self.page == Page::Search {
                    let action = self.search.update(search::Message::CloseDetail);
                    return self.handle_action(action);
                }
                Task::none()
            }
            Shortcut::ClearQuery => {
                if self.page == Page::Search {
                    let action = self.search.update(search::Message::ClearQuery);
                    return self.handle_action(action);
                }
                Task::none()
            }
        }
    }

    // ── Async task spawners ─────────────────────────────────────────

    /// Dispatch the current query to the catalog, superseding any
    /// in-flight search.
    fn spawn_search(&mut self) -> Task<Message> {
        if !self.search.query_ready() {
            return Task::none();
        }
        let client = self.catalog_client();
        let query = self.search.query().trim().to_string();
        let seq = self.search.current_seq();

        let (task, handle) = Task::perform(
            async move {
                client
                    .search_movies(&query)
                    .await
                    .map_err(|e| search_error_message(&e))
            },
            move |result| Message::Search(search::Message::ResultsLoaded { seq, result }),
        )
        .abortable();
        self.search.set_search_handle(handle);
        task
    }

    fn spawn_lookup(&self, imdb_id: String) -> Task<Message> {
        let client = self.catalog_client();
        let id = imdb_id.clone();
        Task::perform(
            async move { client.lookup_movie(&id).await.map_err(|e| e.to_string()) },
            move |result| {
                Message::Search(search::Message::DetailLoaded {
                    imdb_id: imdb_id.clone(),
                    result: result.map(Box::new),
                })
            },
        )
    }

    fn spawn_load_watched(&self) -> Task<Message> {
        let Some(db) = self.db.clone() else {
            return Task::none();
        };
        let key = self.config.storage.watched_key.clone();
        Task::perform(
            async move { db.load_watched(key).await.map_err(|e| e.to_string()) },
            Message::WatchedLoaded,
        )
    }

    fn spawn_save_watched(&self) -> Task<Message> {
        let Some(db) = self.db.clone() else {
            return Task::none();
        };
        let key = self.config.storage.watched_key.clone();
        let list = self.watched.clone();
        Task::perform(
            async move { db.save_watched(key, list).await.map_err(|e| e.to_string()) },
            Message::WatchedSaved,
        )
    }

    /// Move the opened, rated movie into the watched collection.
    fn add_selected_to_watched(&mut self) -> Task<Message> {
        let Some(sel) = self.search.selection() else {
            return Task::none();
        };
        let (Some(detail), Some(rating)) = (sel.detail.as_ref(), sel.rating) else {
            return Task::none();
        };

        let entry = WatchedEntry {
            imdb_id: detail.imdb_id.clone(),
            title: detail.title.clone(),
            year: detail.year.clone(),
            poster_url: detail.poster_url.clone(),
            imdb_rating: detail.imdb_rating.unwrap_or(0.0),
            runtime_minutes: detail
                .runtime
                .as_deref()
                .and_then(parse_runtime_minutes)
                .unwrap_or(0),
            user_rating: rating,
            rating_change_count: sel.rating_changes,
            added_at: Utc::now(),
        };
        let title = entry.title.clone();

        if !self.watched.add(entry) {
            self.status_message = format!("{title} is already in your watched list");
            return Task::none();
        }

        self.search.close_detail();
        self.status_message = format!("Added {title}");
        self.spawn_save_watched()
    }

    fn handle_action(&mut self, action: Action) -> Task<Message> {
        match action {
            Action::None => Task::none(),
            Action::NavigateTo(page) => {
                self.page = page;
                Task::none()
            }
            Action::SetStatus(msg) => {
                self.status_message = msg;
                Task::none()
            }
            Action::RunTask(task) => task,
        }
    }

    fn catalog_client(&self) -> OmdbClient {
        OmdbClient::new(
            self.config.provider.base_url.clone(),
            self.config.provider.api_key.clone(),
        )
    }

    // ── Posters ─────────────────────────────────────────────────────

    /// Batch-request poster downloads for a set of (imdb_id, url) pairs.
    fn batch_request_posters(&mut self, items: Vec<(String, Option<String>)>) -> Task<Message> {
        let tasks: Vec<Task<Message>> = items
            .into_iter()
            .map(|(id, url)| self.request_poster(&id, url.as_deref()))
            .collect();
        if tasks.is_empty() {
            Task::none()
        } else {
            Task::batch(tasks)
        }
    }

    /// Request a poster download for a movie if not already requested.
    fn request_poster(&mut self, imdb_id: &str, poster_url: Option<&str>) -> Task<Message> {
        let Some(url) = poster_url else {
            // No poster URL available — mark as failed so the placeholder renders.
            self.poster_cache
                .states
                .entry(imdb_id.to_string())
                .or_insert(PosterState::Failed);
            return Task::none();
        };
        if !self.poster_cache.needs_fetch(imdb_id) {
            return Task::none();
        }
        // Check disk cache first.
        let path = poster_cache::poster_path(imdb_id);
        if path.exists() {
            self.poster_cache
                .states
                .insert(imdb_id.to_string(), PosterState::Loaded(path));
            return Task::none();
        }
        self.poster_cache
            .states
            .insert(imdb_id.to_string(), PosterState::Loading);
        let id = imdb_id.to_string();
        let key = imdb_id.to_string();
        let url = url.to_string();
        Task::perform(
            async move { poster_cache::fetch_poster(id, url).await },
            move |result| Message::PosterLoaded {
                imdb_id: key.clone(),
                result,
            },
        )
    }

    // ── View ────────────────────────────────────────────────────────

    pub fn view(&self) -> Element<'_, Message> {
        let cs = self.current_theme.colors(self.active_mode);
        let nav = self.nav_rail(cs);

        let page_content: Element<'_, Message> = match self.page {
            Page::Search => self
                .search
                .view(cs, &self.poster_cache, &self.watched)
                .map(Message::Search),
            Page::Stats => self.stats.view(cs, &self.watched).map(Message::Stats),
            Page::Settings => self.settings.view(cs).map(Message::Settings),
        };

        let status_bar = container(
            text(&self.status_message)
                .size(style::TEXT_XS)
                .line_height(style::LINE_HEIGHT_LOOSE),
        )
        .style(theme::status_bar(cs))
        .width(Length::Fill)
        .height(Length::Fixed(style::STATUS_BAR_HEIGHT))
        .padding([4.0, style::SPACE_MD]);

        column![row![nav, page_content].height(Length::Fill), status_bar].into()
    }

    pub fn subscription(&self) -> Subscription<Message> {
        subscription::subscriptions(self.config.appearance.mode)
    }

    pub fn theme(&self) -> Theme {
        self.current_theme.iced_theme(self.active_mode)
    }

    /// Re-resolve the active mode from the config.
    ///
    /// Called after any settings change that might affect appearance.
    fn sync_theme(&mut self) {
        self.active_mode = theme::resolve_mode(self.config.appearance.mode);
    }

    fn nav_rail<'a>(&'a self, cs: &ColorScheme) -> Element<'a, Message> {
        let nav_item = |icon: iced::widget::Text<'static>, label: &'static str, page: Page| {
            let active = self.page == page;
            button(
                column![
                    icon.size(style::NAV_ICON_SIZE).center(),
                    text(label)
                        .size(style::NAV_LABEL_SIZE)
                        .line_height(style::LINE_HEIGHT_LOOSE)
                        .center(),
                ]
                .align_x(Alignment::Center)
                .spacing(style::SPACE_XXS)
                .width(Length::Fill),
            )
            .width(Length::Fixed(64.0))
            .padding([style::SPACE_SM, style::SPACE_XS])
            .on_press(Message::NavigateTo(page))
            .style(theme::nav_rail_item(active, cs))
        };

        use lucide_icons::iced as icons;

        let rail = column![
            column![
                nav_item(icons::icon_search(), "Search", Page::Search),
                nav_item(icons::icon_chart_bar(), "Stats", Page::Stats),
            ]
            .spacing(style::SPACE_XS)
            .align_x(Alignment::Center),
            iced::widget::Space::new().height(Length::Fill),
            container(nav_item(icons::icon_settings(), "Settings", Page::Settings))
                .align_x(Alignment::Center)
                .width(Length::Fill)
                .padding(iced::Padding::new(0.0).bottom(style::SPACE_SM)),
        ]
        .align_x(Alignment::Center)
        .width(Length::Fill)
        .height(Length::Fill);

        container(rail)
            .style(theme::nav_rail_bg(cs))
            .width(Length::Fixed(style::NAV_RAIL_WIDTH))
            .height(Length::Fill)
            .padding(iced::Padding::new(0.0).top(style::SPACE_LG))
            .into()
    }
}

/// User-facing message for a failed search.
fn search_error_message(err: &OmdbError) -> String {
    match err {
        OmdbError::NoResults(_) => "No movie found!".into(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_search_maps_to_no_movie_found() {
        let err = OmdbError::NoResults("Movie not found!".into());
        assert_eq!(search_error_message(&err), "No movie found!");

        let err = OmdbError::Api {
            status: 401,
            message: "Invalid API key!".into(),
        };
        assert!(search_error_message(&err).contains("401"));
    }
}
