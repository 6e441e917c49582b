//! Statistics dashboard screen.
//!
//! Displays aggregates over the watched collection: counts, average
//! ratings, runtimes, and the distribution of your own ratings.

use iced::widget::{column, container, row, scrollable, text, Space};
use iced::{Element, Length};

use kinema_core::models::WatchedList;
use kinema_core::stats::{rating_distribution, total_runtime_minutes, WatchedStats};

use crate::format;
use crate::style;
use crate::theme::{self, ColorScheme};

/// Stats has no interactive state of its own; it renders the shared
/// watched list the app router owns.
#[derive(Debug, Clone)]
pub enum Message {}

pub struct Stats;

impl Stats {
    pub fn new() -> Self {
        Self
    }

    pub fn view<'a>(&self, cs: &ColorScheme, watched: &WatchedList) -> Element<'a, Message> {
        let header = text("Statistics")
            .size(style::TEXT_XL)
            .line_height(style::LINE_HEIGHT_TIGHT);

        let content: Element<'_, Message> = if watched.is_empty() {
            text("No statistics yet. Rate a movie to start your watched list.")
                .size(style::TEXT_SM)
                .color(cs.on_surface_variant)
                .into()
        } else {
            let stats = WatchedStats::from_entries(watched.entries());
            row![
                self.overview_card(cs, watched, &stats),
                self.distribution_card(cs, watched),
            ]
            .spacing(style::SPACE_LG)
            .width(Length::Fill)
            .into()
        };

        let page = column![header, content]
            .spacing(style::SPACE_XL)
            .padding(style::SPACE_XL)
            .width(Length::Fill);

        scrollable(page).height(Length::Fill).into()
    }

    /// Overview card: counts, averages, total watch time.
    fn overview_card<'a>(
        &self,
        cs: &ColorScheme,
        watched: &WatchedList,
        stats: &WatchedStats,
    ) -> Element<'a, Message> {
        let total_minutes = total_runtime_minutes(watched.entries());
        let hours = total_minutes / 60;
        let minutes = total_minutes % 60;
        let time_str = if hours > 0 {
            format!("{hours}h {minutes}m")
        } else {
            format!("{minutes}m")
        };

        let content = column![
            text("Overview")
                .size(style::TEXT_LG)
                .line_height(style::LINE_HEIGHT_TIGHT),
            Space::new().height(style::SPACE_SM),
            stat_row("Movies Watched", &stats.count.to_string(), cs),
            stat_row(
                "Average IMDb Rating",
                &format::fixed2(stats.avg_imdb_rating),
                cs,
            ),
            stat_row(
                "Average Your Rating",
                &format::fixed2(stats.avg_user_rating),
                cs,
            ),
            stat_row(
                "Average Runtime",
                &format::avg_runtime(stats.avg_runtime_minutes),
                cs,
            ),
            stat_row("Total Watch Time", &time_str, cs),
        ]
        .spacing(style::SPACE_XS)
        .width(Length::Fill);

        container(content)
            .style(theme::card(cs))
            .padding(style::SPACE_LG)
            .width(Length::Fill)
            .into()
    }

    /// Your-rating distribution card with horizontal bar chart.
    fn distribution_card<'a>(
        &self,
        cs: &ColorScheme,
        watched: &WatchedList,
    ) -> Element<'a, Message> {
        let buckets = rating_distribution(watched.entries());
        let max_count = buckets.iter().copied().max().unwrap_or(1).max(1);

        let mut bars = column![].spacing(style::SPACE_XS).width(Length::Fill);
        for (i, &count) in buckets.iter().enumerate() {
            let rating = (i + 1) as u8;
            let fraction = count as f32 / max_count as f32;
            bars = bars.push(rating_bar(rating, count, fraction, cs));
        }

        let content = column![
            text("Your Ratings")
                .size(style::TEXT_LG)
                .line_height(style::LINE_HEIGHT_TIGHT),
            Space::new().height(style::SPACE_SM),
            bars,
        ]
        .spacing(style::SPACE_XS)
        .width(Length::Fill);

        container(content)
            .style(theme::card(cs))
            .padding(style::SPACE_LG)
            .width(Length::Fill)
            .into()
    }
}

// ── Helper widgets ────────────────────────────────────────────────

/// A label + value row.
fn stat_row<'a>(label: &str, value: &str, cs: &ColorScheme) -> Element<'a, Message> {
    row![
        text(label.to_string())
            .size(style::TEXT_SM)
            .color(cs.on_surface_variant)
            .width(Length::Fill),
        text(value.to_string()).size(style::TEXT_SM),
    ]
    .spacing(style::SPACE_SM)
    .into()
}

/// A horizontal bar for the rating distribution.
fn rating_bar<'a>(
    rating: u8,
    count: usize,
    fraction: f32,
    cs: &ColorScheme,
) -> Element<'a, Message> {
    let bar_color = cs.star;
    let bar_width = (fraction * 120.0).max(if count > 0 { 4.0 } else { 0.0 });

    let bar = container(Space::new().width(bar_width).height(style::PROGRESS_HEIGHT)).style(
        move |_theme: &iced::Theme| container::Style {
            background: Some(iced::Background::Color(bar_color)),
            border: iced::Border {
                radius: (style::PROGRESS_HEIGHT / 2.0).into(),
                ..Default::default()
            },
            ..Default::default()
        },
    );

    row![
        text(format!("{rating:>2}"))
            .size(style::TEXT_XS)
            .color(cs.on_surface_variant)
            .width(Length::Fixed(20.0)),
        container(bar)
            .width(Length::Fixed(124.0))
            .center_y(Length::Shrink),
        text(count.to_string())
            .size(style::TEXT_XS)
            .color(cs.outline),
    ]
    .spacing(style::SPACE_SM)
    .align_y(iced::Alignment::Center)
    .into()
}
