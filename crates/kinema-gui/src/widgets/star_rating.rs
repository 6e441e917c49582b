use iced::widget::{button, row, text};
use iced::{Alignment, Element};

use crate::style;
use crate::theme::{self, ColorScheme};

/// An interactive 1-10 star rating row.
///
/// Stars up to the current rating render filled in the star accent;
/// the rest render as outlines. Clicking star N emits `on_pick(N)`.
pub fn star_rating<'a, Message: Clone + 'a>(
    cs: &ColorScheme,
    rating: Option<u8>,
    on_pick: impl Fn(u8) -> Message + 'a,
) -> Element<'a, Message> {
    let current = rating.unwrap_or(0);

    let mut stars = row![].spacing(style::SPACE_XXS).align_y(Alignment::Center);
    for n in 1..=10u8 {
        let color = if n <= current { cs.star } else { cs.outline };
        stars = stars.push(
            button(
                lucide_icons::iced::icon_star()
                    .size(style::STAR_SIZE)
                    .color(color),
            )
            .padding(style::SPACE_XXS)
            .style(theme::star_button(cs))
            .on_press(on_pick(n)),
        );
    }

    let label: Element<'a, Message> = match rating {
        Some(n) => text(format!("{n}"))
            .size(style::TEXT_SM)
            .color(cs.on_surface_variant)
            .into(),
        None => text("").size(style::TEXT_SM).into(),
    };

    row![stars, label]
        .spacing(style::SPACE_SM)
        .align_y(Alignment::Center)
        .into()
}
