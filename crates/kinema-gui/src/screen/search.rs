use iced::widget::{button, column, container, row, rule, text, text_input};
use iced::{Alignment, Element, Length};

use kinema_api::{MovieDetail, MovieSummary};
use kinema_core::models::WatchedList;
use kinema_core::stats::WatchedStats;

use crate::format;
use crate::poster_cache::PosterCache;
use crate::screen::Action;
use crate::style;
use crate::theme::{self, ColorScheme};
use crate::widgets::{self, rounded_poster, star_rating};

/// Widget id of the query input, for programmatic focus.
pub fn search_input_id() -> iced::widget::Id {
    iced::widget::Id::new("search-query")
}

/// Minimum query length before a lookup is dispatched.
pub const MIN_QUERY_LEN: usize = 3;

// ── State ─────────────────────────────────────────────────────────

/// The currently opened movie and its in-progress rating.
pub struct Selection {
    pub imdb_id: String,
    pub detail: Option<MovieDetail>,
    pub loading: bool,
    pub error: Option<String>,
    pub rating: Option<u8>,
    /// How many times the rating was changed before adding.
    pub rating_changes: u32,
}

/// Search screen state.
pub struct Search {
    query: String,
    /// Monotonic counter identifying the latest dispatched search.
    seq: u64,
    loading: bool,
    error: Option<String>,
    results: Vec<MovieSummary>,
    selection: Option<Selection>,
    search_handle: Option<iced::task::Handle>,
}

// ── Messages ──────────────────────────────────────────────────────

/// Messages handled by the Search screen.
#[derive(Debug, Clone)]
pub enum Message {
    QueryChanged(String),
    ResultsLoaded {
        seq: u64,
        result: Result<Vec<MovieSummary>, String>,
    },
    MovieSelected(String),
    DetailLoaded {
        imdb_id: String,
        result: Result<Box<MovieDetail>, String>,
    },
    RatingPicked(u8),
    AddToWatched,
    RemoveWatched(String),
    RetrySearch,
    CloseDetail,
    ClearQuery,
}

// ── Implementation ────────────────────────────────────────────────

impl Search {
    pub fn new() -> Self {
        Self {
            query: String::new(),
            seq: 0,
            loading: false,
            error: None,
            results: Vec::new(),
            selection: None,
            search_handle: None,
        }
    }

    /// Current search query text.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Sequence number of the latest dispatched search.
    pub fn current_seq(&self) -> u64 {
        self.seq
    }

    /// Whether the query is long enough to dispatch a lookup.
    pub fn query_ready(&self) -> bool {
        self.query.trim().chars().count() >= MIN_QUERY_LEN
    }

    /// Remember the abort handle of the in-flight search task.
    pub fn set_search_handle(&mut self, handle: iced::task::Handle) {
        self.search_handle = Some(handle);
    }

    /// The movie whose detail still needs to be fetched, if any.
    pub fn detail_pending(&self) -> Option<String> {
        self.selection
            .as_ref()
            .filter(|s| s.loading && s.detail.is_none())
            .map(|s| s.imdb_id.clone())
    }

    pub fn selection(&self) -> Option<&Selection> {
        self.selection.as_ref()
    }

    /// Current search results, for poster prefetching.
    pub fn results(&self) -> &[MovieSummary] {
        &self.results
    }

    pub fn close_detail(&mut self) {
        self.selection = None;
    }

    /// Abort any in-flight search task.
    fn cancel_search(&mut self) {
        if let Some(handle) = self.search_handle.take() {
            handle.abort();
        }
    }

    /// Handle a search message, returning an Action for the app router.
    pub fn update(&mut self, msg: Message) -> Action {
        match msg {
            Message::QueryChanged(new_query) => {
                self.query = new_query;
                // Supersede whatever search is in flight.
                self.cancel_search();
                self.seq += 1;
                if self.query_ready() {
                    self.loading = true;
                    self.error = None;
                } else {
                    self.loading = false;
                    self.error = None;
                    self.results.clear();
                }
                Action::None
            }
            Message::ResultsLoaded { seq, result } => {
                // A newer query superseded this response.
                if seq != self.seq {
                    return Action::None;
                }
                self.loading = false;
                match result {
                    Ok(results) => {
                        let count = results.len();
                        self.results = results;
                        self.error = None;
                        Action::SetStatus(format!(
                            "{count} {}",
                            if count == 1 { "result" } else { "results" }
                        ))
                    }
                    Err(e) => {
                        // Previous results stay in memory; the error view
                        // takes the list's place until retry or a new query.
                        self.error = Some(e);
                        Action::None
                    }
                }
            }
            Message::MovieSelected(imdb_id) => {
                // Selecting the already-open movie closes the panel.
                if self
                    .selection
                    .as_ref()
                    .is_some_and(|s| s.imdb_id == imdb_id)
                {
                    self.selection = None;
                } else {
                    self.selection = Some(Selection {
                        imdb_id,
                        detail: None,
                        loading: true,
                        error: None,
                        rating: None,
                        rating_changes: 0,
                    });
                }
                Action::None
            }
            Message::DetailLoaded { imdb_id, result } => {
                if let Some(sel) = self.selection.as_mut().filter(|s| s.imdb_id == imdb_id) {
                    sel.loading = false;
                    match result {
                        Ok(detail) => sel.detail = Some(*detail),
                        Err(e) => sel.error = Some(e),
                    }
                }
                Action::None
            }
            Message::RatingPicked(rating) => {
                if let Some(sel) = self.selection.as_mut() {
                    if sel.rating != Some(rating) {
                        sel.rating = Some(rating);
                        sel.rating_changes += 1;
                    }
                }
                Action::None
            }
            Message::RetrySearch => {
                // app.rs dispatches the actual request.
                if self.query_ready() {
                    self.cancel_search();
                    self.seq += 1;
                    self.loading = true;
                    self.error = None;
                }
                Action::None
            }
            // Handled by app.rs which has access to the watched list and DB.
            Message::AddToWatched | Message::RemoveWatched(_) => Action::None,
            Message::CloseDetail => {
                self.selection = None;
                Action::None
            }
            Message::ClearQuery => {
                self.query.clear();
                self.cancel_search();
                self.seq += 1;
                self.loading = false;
                self.error = None;
                self.results.clear();
                Action::None
            }
        }
    }

    // ── View ──────────────────────────────────────────────────────

    pub fn view<'a>(
        &'a self,
        cs: &'a ColorScheme,
        posters: &'a PosterCache,
        watched: &'a WatchedList,
    ) -> Element<'a, Message> {
        let left = column![
            self.search_header(cs),
            rule::horizontal(1),
            self.results_list(cs, posters),
        ]
        .spacing(0)
        .width(Length::Fill)
        .height(Length::Fill);

        let right: Element<'a, Message> = match &self.selection {
            Some(sel) => self.detail_panel(cs, posters, sel, watched),
            None => watched_panel(cs, posters, watched),
        };

        row![
            container(left).width(Length::FillPortion(3)),
            rule::vertical(1),
            container(right)
                .width(Length::FillPortion(2))
                .height(Length::Fill),
        ]
        .height(Length::Fill)
        .into()
    }

    fn search_header(&self, cs: &ColorScheme) -> Element<'_, Message> {
        let search_icon = lucide_icons::iced::icon_search()
            .size(style::TEXT_BASE)
            .color(cs.on_surface_variant);

        let search_input = text_input("Search movies...", &self.query)
            .id(search_input_id())
            .on_input(Message::QueryChanged)
            .size(style::TEXT_BASE)
            .padding([style::SPACE_XS, style::SPACE_SM])
            .width(Length::Fill)
            .style(theme::text_input_borderless(cs));

        let mut search_row = row![search_icon, search_input]
            .spacing(style::SPACE_SM)
            .align_y(Alignment::Center);

        if !self.query.is_empty() {
            let clear_size = style::TEXT_SM + style::SPACE_XS * 2.0;
            let clear_btn = button(
                container(
                    lucide_icons::iced::icon_x()
                        .size(style::TEXT_SM)
                        .color(cs.on_surface_variant),
                )
                .center_x(Length::Fill)
                .center_y(Length::Fill),
            )
            .on_press(Message::ClearQuery)
            .padding(0)
            .width(Length::Fixed(clear_size))
            .height(Length::Fixed(clear_size))
            .style(theme::icon_button(cs));
            search_row = search_row.push(clear_btn);
        }

        let bar = container(search_row)
            .style(theme::search_bar(cs))
            .padding([style::SPACE_SM, style::SPACE_MD])
            .width(Length::Fill);

        container(bar)
            .padding([style::SPACE_SM, style::SPACE_LG])
            .into()
    }

    fn results_list<'a>(
        &'a self,
        cs: &'a ColorScheme,
        posters: &'a PosterCache,
    ) -> Element<'a, Message> {
        if self.loading {
            return centered_note(cs, "Loading...");
        }

        if let Some(err) = &self.error {
            return container(
                column![
                    text(err.as_str())
                        .size(style::TEXT_SM)
                        .color(cs.error)
                        .line_height(style::LINE_HEIGHT_NORMAL),
                    button(text("Retry").size(style::TEXT_SM))
                        .padding([style::SPACE_SM, style::SPACE_XL])
                        .on_press(Message::RetrySearch)
                        .style(theme::ghost_button(cs)),
                ]
                .spacing(style::SPACE_MD)
                .align_x(Alignment::Center),
            )
            .padding(style::SPACE_3XL)
            .width(Length::Fill)
            .center_x(Length::Fill)
            .into();
        }

        if self.results.is_empty() {
            let icon = lucide_icons::iced::icon_search()
                .size(style::TEXT_3XL)
                .color(cs.outline);
            let (title, subtitle) = if self.query_ready() {
                ("Nothing here", "Try a different title.")
            } else {
                ("Search for a movie", "Type at least three characters.")
            };
            return widgets::empty_state(cs, icon.into(), title, subtitle);
        }

        let selected = self.selection.as_ref().map(|s| s.imdb_id.as_str());
        let items: Vec<Element<'a, Message>> = self
            .results
            .iter()
            .map(|movie| result_list_item(cs, movie, selected, posters))
            .collect();

        widgets::styled_scrollable(
            column(items)
                .spacing(style::SPACE_XXS)
                .padding([style::SPACE_XS, style::SPACE_LG]),
            cs,
        )
        .height(Length::Fill)
        .into()
    }

    // ── Detail panel ──────────────────────────────────────────────

    fn detail_panel<'a>(
        &'a self,
        cs: &'a ColorScheme,
        posters: &'a PosterCache,
        sel: &'a Selection,
        watched: &'a WatchedList,
    ) -> Element<'a, Message> {
        let close_size = style::TEXT_BASE + style::SPACE_XS * 2.0;
        let close_btn = button(
            container(
                lucide_icons::iced::icon_x()
                    .size(style::TEXT_BASE)
                    .color(cs.on_surface_variant),
            )
            .center_x(Length::Fill)
            .center_y(Length::Fill),
        )
        .on_press(Message::CloseDetail)
        .padding(0)
        .width(Length::Fixed(close_size))
        .height(Length::Fixed(close_size))
        .style(theme::icon_button(cs));

        let header = row![
            iced::widget::Space::new().width(Length::Fill),
            close_btn
        ]
        .padding([style::SPACE_SM, style::SPACE_MD]);

        let body: Element<'a, Message> = if sel.loading {
            centered_note(cs, "Loading...")
        } else if let Some(err) = &sel.error {
            container(
                text(err.as_str())
                    .size(style::TEXT_SM)
                    .color(cs.error)
                    .line_height(style::LINE_HEIGHT_NORMAL),
            )
            .padding(style::SPACE_3XL)
            .width(Length::Fill)
            .center_x(Length::Fill)
            .into()
        } else if let Some(detail) = &sel.detail {
            self.detail_body(cs, posters, sel, detail, watched)
        } else {
            centered_note(cs, "Loading...")
        };

        column![header, body]
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    fn detail_body<'a>(
        &'a self,
        cs: &'a ColorScheme,
        posters: &'a PosterCache,
        sel: &'a Selection,
        detail: &'a MovieDetail,
        watched: &'a WatchedList,
    ) -> Element<'a, Message> {
        let poster = rounded_poster(
            cs,
            posters,
            &detail.imdb_id,
            style::POSTER_WIDTH,
            style::POSTER_HEIGHT,
            style::RADIUS_LG,
        );

        let mut title_col = column![text(detail.title.as_str())
            .size(style::TEXT_XL)
            .color(cs.on_surface)
            .line_height(style::LINE_HEIGHT_TIGHT)]
        .spacing(style::SPACE_XS);

        let mut meta_parts: Vec<String> = Vec::new();
        if let Some(released) = &detail.released {
            meta_parts.push(released.clone());
        }
        if let Some(runtime) = &detail.runtime {
            meta_parts.push(runtime.clone());
        }
        if !meta_parts.is_empty() {
            title_col = title_col.push(
                text(meta_parts.join("  \u{00B7}  "))
                    .size(style::TEXT_SM)
                    .color(cs.on_surface_variant)
                    .line_height(style::LINE_HEIGHT_LOOSE),
            );
        }
        if let Some(genre) = &detail.genre {
            title_col = title_col.push(
                text(genre.as_str())
                    .size(style::TEXT_SM)
                    .color(cs.on_surface_variant)
                    .line_height(style::LINE_HEIGHT_LOOSE),
            );
        }
        if let Some(rating) = detail.imdb_rating {
            title_col = title_col.push(
                row![
                    lucide_icons::iced::icon_star()
                        .size(style::TEXT_SM)
                        .color(cs.imdb),
                    text(format!("{rating:.1} IMDb rating"))
                        .size(style::TEXT_SM)
                        .color(cs.on_surface_variant)
                        .line_height(style::LINE_HEIGHT_LOOSE),
                ]
                .spacing(style::SPACE_XS)
                .align_y(Alignment::Center),
            );
        }

        let head = row![poster, title_col.width(Length::Fill)]
            .spacing(style::SPACE_LG)
            .align_y(Alignment::Center);

        let rating_card = self.rating_card(cs, sel, detail, watched);

        let mut body = column![head, rating_card].spacing(style::SPACE_LG);

        if let Some(plot) = &detail.plot {
            body = body.push(
                text(plot.as_str())
                    .size(style::TEXT_SM)
                    .color(cs.on_surface)
                    .line_height(style::LINE_HEIGHT_NORMAL),
            );
        }
        if let Some(actors) = &detail.actors {
            body = body.push(
                text(format!("Starring {actors}"))
                    .size(style::TEXT_SM)
                    .color(cs.on_surface_variant)
                    .line_height(style::LINE_HEIGHT_LOOSE),
            );
        }
        if let Some(director) = &detail.director {
            body = body.push(
                text(format!("Directed by {director}"))
                    .size(style::TEXT_SM)
                    .color(cs.on_surface_variant)
                    .line_height(style::LINE_HEIGHT_LOOSE),
            );
        }

        widgets::styled_scrollable(body.padding([style::SPACE_SM, style::SPACE_LG]), cs)
            .height(Length::Fill)
            .into()
    }

    /// The interactive rating block, or a reminder of a past rating.
    fn rating_card<'a>(
        &'a self,
        cs: &'a ColorScheme,
        sel: &'a Selection,
        detail: &'a MovieDetail,
        watched: &'a WatchedList,
    ) -> Element<'a, Message> {
        let inner: Element<'a, Message> = if let Some(past) = watched.rating_for(&detail.imdb_id) {
            row![
                text(format!("You rated this movie {past}"))
                    .size(style::TEXT_SM)
                    .color(cs.on_surface_variant)
                    .line_height(style::LINE_HEIGHT_NORMAL),
                lucide_icons::iced::icon_star()
                    .size(style::TEXT_SM)
                    .color(cs.star),
            ]
            .spacing(style::SPACE_XS)
            .align_y(Alignment::Center)
            .into()
        } else {
            let mut col = column![star_rating(cs, sel.rating, Message::RatingPicked)]
                .spacing(style::SPACE_MD)
                .align_x(Alignment::Center);
            if sel.rating.is_some() {
                col = col.push(
                    button(text("+ Add to list").size(style::TEXT_SM))
                        .padding([style::SPACE_SM, style::SPACE_XL])
                        .on_press(Message::AddToWatched)
                        .style(theme::primary_button(cs)),
                );
            }
            col.into()
        };

        container(inner)
            .style(theme::card(cs))
            .padding(style::SPACE_LG)
            .width(Length::Fill)
            .center_x(Length::Fill)
            .into()
    }
}

// ── Watched panel ─────────────────────────────────────────────────

/// Right-hand pane when no movie is open: aggregate stats plus the list.
fn watched_panel<'a>(
    cs: &'a ColorScheme,
    posters: &'a PosterCache,
    watched: &'a WatchedList,
) -> Element<'a, Message> {
    let stats = WatchedStats::from_entries(watched.entries());

    let summary = container(
        column![
            text("Movies you watched")
                .size(style::TEXT_LG)
                .color(cs.on_surface)
                .line_height(style::LINE_HEIGHT_TIGHT),
            row![
                summary_item(cs, "#\u{FE0F}", &format!("{} movies", stats.count)),
                summary_item(cs, "\u{2B50}", &format::fixed2(stats.avg_imdb_rating)),
                summary_item(cs, "\u{1F31F}", &format::fixed2(stats.avg_user_rating)),
                summary_item(cs, "\u{23F3}", &format::avg_runtime(stats.avg_runtime_minutes)),
            ]
            .spacing(style::SPACE_LG),
        ]
        .spacing(style::SPACE_SM),
    )
    .style(theme::card(cs))
    .padding(style::SPACE_LG)
    .width(Length::Fill);

    let list: Element<'a, Message> = if watched.is_empty() {
        let icon = lucide_icons::iced::icon_film()
            .size(style::TEXT_3XL)
            .color(cs.outline);
        widgets::empty_state(
            cs,
            icon.into(),
            "No movies yet",
            "Rate a movie to add it to your list.",
        )
    } else {
        let items: Vec<Element<'a, Message>> = watched
            .entries()
            .iter()
            .map(|entry| watched_list_item(cs, posters, entry))
            .collect();
        widgets::styled_scrollable(column(items).spacing(style::SPACE_XXS), cs)
            .height(Length::Fill)
            .into()
    };

    column![summary, list]
        .spacing(style::SPACE_MD)
        .padding([style::SPACE_SM, style::SPACE_LG])
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn summary_item<'a>(cs: &ColorScheme, emoji: &str, value: &str) -> Element<'a, Message> {
    row![
        text(emoji.to_string()).size(style::TEXT_SM),
        text(value.to_string())
            .size(style::TEXT_SM)
            .color(cs.on_surface_variant)
            .line_height(style::LINE_HEIGHT_LOOSE),
    ]
    .spacing(style::SPACE_XS)
    .align_y(Alignment::Center)
    .into()
}

fn watched_list_item<'a>(
    cs: &'a ColorScheme,
    posters: &'a PosterCache,
    entry: &'a kinema_core::models::WatchedEntry,
) -> Element<'a, Message> {
    let thumb = rounded_poster(
        cs,
        posters,
        &entry.imdb_id,
        style::THUMB_WIDTH,
        style::THUMB_HEIGHT,
        style::RADIUS_SM,
    );

    let info = column![
        text(entry.title.as_str())
            .size(style::TEXT_BASE)
            .color(cs.on_surface)
            .line_height(style::LINE_HEIGHT_NORMAL),
        row![
            text(format!("\u{2B50} {:.1}", entry.imdb_rating))
                .size(style::TEXT_XS)
                .color(cs.imdb)
                .line_height(style::LINE_HEIGHT_LOOSE),
            text(format!("\u{1F31F} {}", entry.user_rating))
                .size(style::TEXT_XS)
                .color(cs.star)
                .line_height(style::LINE_HEIGHT_LOOSE),
            text(format::runtime(entry.runtime_minutes))
                .size(style::TEXT_XS)
                .color(cs.outline)
                .line_height(style::LINE_HEIGHT_LOOSE),
        ]
        .spacing(style::SPACE_MD),
    ]
    .spacing(style::SPACE_XXS);

    let remove_size = style::TEXT_SM + style::SPACE_XS * 2.0;
    let remove_btn = button(
        container(
            lucide_icons::iced::icon_x()
                .size(style::TEXT_SM)
                .color(cs.error),
        )
        .center_x(Length::Fill)
        .center_y(Length::Fill),
    )
    .on_press(Message::RemoveWatched(entry.imdb_id.clone()))
    .padding(0)
    .width(Length::Fixed(remove_size))
    .height(Length::Fixed(remove_size))
    .style(theme::icon_button(cs));

    let content = row![thumb, info.width(Length::Fill), remove_btn]
        .spacing(style::SPACE_SM)
        .align_y(Alignment::Center);

    container(content)
        .padding([style::SPACE_XS, style::SPACE_SM])
        .width(Length::Fill)
        .into()
}

// ── Helper functions ──────────────────────────────────────────────

fn centered_note<'a>(cs: &ColorScheme, note: &'a str) -> Element<'a, Message> {
    container(
        text(note)
            .size(style::TEXT_SM)
            .color(cs.on_surface_variant)
            .line_height(style::LINE_HEIGHT_LOOSE),
    )
    .padding(style::SPACE_3XL)
    .width(Length::Fill)
    .center_x(Length::Fill)
    .into()
}

/// A single search result list item.
fn result_list_item<'a>(
    cs: &'a ColorScheme,
    movie: &'a MovieSummary,
    selected: Option<&str>,
    posters: &'a PosterCache,
) -> Element<'a, Message> {
    let is_selected = selected == Some(movie.imdb_id.as_str());

    let thumb = rounded_poster(
        cs,
        posters,
        &movie.imdb_id,
        style::THUMB_WIDTH,
        style::THUMB_HEIGHT,
        style::RADIUS_SM,
    );

    let info = column![
        text(movie.title.as_str())
            .size(style::TEXT_BASE)
            .line_height(style::LINE_HEIGHT_NORMAL),
        text(format!("\u{1F5D3} {}", movie.year))
            .size(style::TEXT_XS)
            .color(cs.outline)
            .line_height(style::LINE_HEIGHT_LOOSE),
    ]
    .spacing(style::SPACE_XXS);

    let content = row![thumb, info.width(Length::Fill)]
        .spacing(style::SPACE_SM)
        .align_y(Alignment::Center);

    button(content)
        .width(Length::Fill)
        .padding([style::SPACE_XS, style::SPACE_MD])
        .on_press(Message::MovieSelected(movie.imdb_id.clone()))
        .style(theme::list_item(is_selected, cs))
        .into()
}

// ── Tests ─────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(id: &str, title: &str) -> MovieSummary {
        MovieSummary {
            imdb_id: id.into(),
            title: title.into(),
            year: "2010".into(),
            poster_url: None,
        }
    }

    #[test]
    fn short_query_clears_results() {
        let mut search = Search::new();
        search.update(Message::QueryChanged("inception".into()));
        let seq = search.current_seq();
        search.update(Message::ResultsLoaded {
            seq,
            result: Ok(vec![summary("tt1375666", "Inception")]),
        });
        assert_eq!(search.results.len(), 1);

        search.update(Message::QueryChanged("in".into()));
        assert!(search.results.is_empty());
        assert!(!search.loading);
    }

    #[test]
    fn stale_results_are_discarded() {
        let mut search = Search::new();
        search.update(Message::QueryChanged("incepti".into()));
        let stale_seq = search.current_seq();
        search.update(Message::QueryChanged("inception".into()));

        search.update(Message::ResultsLoaded {
            seq: stale_seq,
            result: Ok(vec![summary("tt0000001", "Wrong Movie")]),
        });
        assert!(search.results.is_empty());
        assert!(search.loading);

        search.update(Message::ResultsLoaded {
            seq: search.current_seq(),
            result: Ok(vec![summary("tt1375666", "Inception")]),
        });
        assert_eq!(search.results.len(), 1);
        assert!(!search.loading);
    }

    #[test]
    fn selecting_same_movie_twice_closes_detail() {
        let mut search = Search::new();
        search.update(Message::MovieSelected("tt1375666".into()));
        assert!(search.selection().is_some());
        assert_eq!(search.detail_pending().as_deref(), Some("tt1375666"));

        search.update(Message::MovieSelected("tt1375666".into()));
        assert!(search.selection().is_none());
    }

    #[test]
    fn selecting_other_movie_replaces_detail() {
        let mut search = Search::new();
        search.update(Message::MovieSelected("tt1375666".into()));
        search.update(Message::MovieSelected("tt0816692".into()));
        assert_eq!(
            search.selection().map(|s| s.imdb_id.as_str()),
            Some("tt0816692")
        );
    }

    #[test]
    fn detail_for_other_movie_is_ignored() {
        let mut search = Search::new();
        search.update(Message::MovieSelected("tt1375666".into()));
        search.update(Message::DetailLoaded {
            imdb_id: "tt0816692".into(),
            result: Err("late response".into()),
        });
        let sel = search.selection().unwrap();
        assert!(sel.loading);
        assert!(sel.error.is_none());
    }

    #[test]
    fn rating_changes_count_distinct_picks() {
        let mut search = Search::new();
        search.update(Message::MovieSelected("tt1375666".into()));

        search.update(Message::RatingPicked(7));
        search.update(Message::RatingPicked(7));
        search.update(Message::RatingPicked(9));

        let sel = search.selection().unwrap();
        assert_eq!(sel.rating, Some(9));
        assert_eq!(sel.rating_changes, 2);
    }

    #[test]
    fn clear_query_resets_everything_but_selection() {
        let mut search = Search::new();
        search.update(Message::QueryChanged("inception".into()));
        search.update(Message::MovieSelected("tt1375666".into()));
        search.update(Message::ClearQuery);

        assert_eq!(search.query(), "");
        assert!(search.results.is_empty());
        assert!(search.selection().is_some());
    }
}
