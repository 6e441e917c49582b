//! Style closures for the widget tree.
//!
//! Every function captures the tokens it needs from a [`ColorScheme`]
//! and returns a closure for Iced's `.style()`. Interaction states are
//! alpha washes over the base palette rather than dedicated hover
//! colors, so one set of rules reads the same in dark and light.

use iced::overlay::menu;
use iced::widget::{button, container, pick_list, scrollable, text_input};
use iced::{Background, Border, Color, Shadow, Theme, Vector};

use crate::style;

use super::ColorScheme;

// Wash opacities for hover and active-indicator fills.
const WASH_HOVER: f32 = 0.08;
const WASH_ACTIVE: f32 = 0.14;

fn rounded(radius: f32) -> Border {
    Border {
        radius: radius.into(),
        ..Border::default()
    }
}

fn edged(color: Color, radius: f32) -> Border {
    Border {
        color,
        width: 1.0,
        radius: radius.into(),
    }
}

fn wash(color: Color, alpha: f32) -> Background {
    Background::Color(Color { a: alpha, ..color })
}

fn drop_shadow() -> Shadow {
    Shadow {
        color: Color {
            a: 0.25,
            ..Color::BLACK
        },
        offset: Vector::new(0.0, 1.0),
        blur_radius: 4.0,
    }
}

/// A raised card: tonal surface, large radius, soft shadow instead of
/// a hairline border.
pub fn card(cs: &ColorScheme) -> impl Fn(&Theme) -> container::Style {
    let bg = cs.surface_container;
    move |_theme| container::Style {
        background: Some(Background::Color(bg)),
        border: rounded(style::RADIUS_LG),
        shadow: drop_shadow(),
        ..Default::default()
    }
}

/// Bottom status bar strip.
pub fn status_bar(cs: &ColorScheme) -> impl Fn(&Theme) -> container::Style {
    let bg = cs.surface_container_lowest;
    let fg = cs.on_surface_variant;
    move |_theme| container::Style {
        text_color: Some(fg),
        background: Some(Background::Color(bg)),
        ..Default::default()
    }
}

/// Navigation rail backdrop.
pub fn nav_rail_bg(cs: &ColorScheme) -> impl Fn(&Theme) -> container::Style {
    let bg = cs.surface_container_low;
    move |_theme| container::Style {
        background: Some(Background::Color(bg)),
        ..Default::default()
    }
}

/// Rail entry: the active page gets a primary wash and primary text,
/// everything else stays muted until hovered.
pub fn nav_rail_item(
    active: bool,
    cs: &ColorScheme,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    let primary = cs.primary;
    let on_surface = cs.on_surface;
    let muted = cs.on_surface_variant;

    move |_theme, status| {
        let (background, text_color) = if active {
            (Some(wash(primary, WASH_ACTIVE)), primary)
        } else if matches!(status, button::Status::Hovered | button::Status::Pressed) {
            (Some(wash(on_surface, WASH_HOVER)), on_surface)
        } else {
            (None, muted)
        };

        button::Style {
            background,
            text_color,
            border: rounded(style::RADIUS_XL),
            ..Default::default()
        }
    }
}

/// Search result row: secondary container when selected, hover wash
/// otherwise.
pub fn list_item(
    selected: bool,
    cs: &ColorScheme,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    let selected_bg = cs.secondary_container;
    let selected_fg = cs.on_secondary_container;
    let on_surface = cs.on_surface;

    move |_theme, status| {
        let (background, text_color) = if selected {
            (Some(Background::Color(selected_bg)), selected_fg)
        } else if matches!(status, button::Status::Hovered) {
            (Some(wash(on_surface, WASH_HOVER)), on_surface)
        } else {
            (None, on_surface)
        };

        button::Style {
            background,
            text_color,
            border: rounded(style::RADIUS_MD),
            ..Default::default()
        }
    }
}

/// Filled pill button for the main action on a panel.
pub fn primary_button(cs: &ColorScheme) -> impl Fn(&Theme, button::Status) -> button::Style {
    let base = cs.primary;
    let hover = cs.primary_hover;
    let pressed = cs.primary_dim;
    let label = cs.on_primary;

    move |_theme, status| {
        let bg = match status {
            button::Status::Hovered => hover,
            button::Status::Pressed => pressed,
            _ => base,
        };
        button::Style {
            background: Some(Background::Color(bg)),
            text_color: label,
            border: rounded(style::RADIUS_FULL),
            ..Default::default()
        }
    }
}

/// Outlined pill button for secondary actions (Retry and friends).
pub fn ghost_button(cs: &ColorScheme) -> impl Fn(&Theme, button::Status) -> button::Style {
    let edge = cs.outline_variant;
    let on_surface = cs.on_surface;
    let muted = cs.on_surface_variant;

    move |_theme, status| {
        let engaged = matches!(status, button::Status::Hovered | button::Status::Pressed);
        button::Style {
            background: engaged.then(|| wash(on_surface, WASH_HOVER)),
            text_color: if engaged { on_surface } else { muted },
            border: edged(edge, style::RADIUS_FULL),
            ..Default::default()
        }
    }
}

/// Bare icon button: circular hover wash, the glyph provides its own
/// color.
pub fn icon_button(cs: &ColorScheme) -> impl Fn(&Theme, button::Status) -> button::Style {
    let on_surface = cs.on_surface;

    move |_theme, status| button::Style {
        background: matches!(status, button::Status::Hovered | button::Status::Pressed)
            .then(|| wash(on_surface, WASH_HOVER)),
        text_color: Color::TRANSPARENT,
        border: rounded(style::RADIUS_FULL),
        ..Default::default()
    }
}

/// A rating star: flat, no chrome, the star glyph carries the color.
pub fn star_button(cs: &ColorScheme) -> impl Fn(&Theme, button::Status) -> button::Style {
    let star = cs.star;
    let outline = cs.outline;

    move |_theme, status| button::Style {
        text_color: match status {
            button::Status::Hovered | button::Status::Pressed => star,
            _ => outline,
        },
        ..Default::default()
    }
}

/// Standalone text input: the border thickens in primary on focus.
pub fn text_input_style(
    cs: &ColorScheme,
) -> impl Fn(&Theme, text_input::Status) -> text_input::Style {
    let bg = cs.surface_container_lowest;
    let focus = cs.primary;
    let idle = cs.outline_variant;
    let hover = cs.outline;
    let value = cs.on_surface;
    let placeholder = cs.outline;
    let icon = cs.on_surface_variant;

    move |_theme, status| {
        let (edge, width) = match status {
            text_input::Status::Focused { .. } => (focus, 2.0),
            text_input::Status::Hovered => (hover, 1.0),
            _ => (idle, 1.0),
        };
        text_input::Style {
            background: Background::Color(bg),
            border: Border {
                color: edge,
                width,
                radius: style::RADIUS_MD.into(),
            },
            icon,
            placeholder,
            value,
            selection: focus,
        }
    }
}

/// Chromeless input for use inside the composite search bar.
pub fn text_input_borderless(
    cs: &ColorScheme,
) -> impl Fn(&Theme, text_input::Status) -> text_input::Style {
    let value = cs.on_surface;
    let placeholder = cs.outline;
    let icon = cs.on_surface_variant;
    let selection = cs.primary;

    move |_theme, _status| text_input::Style {
        background: Background::Color(Color::TRANSPARENT),
        border: Border::default(),
        icon,
        placeholder,
        value,
        selection,
    }
}

/// Pill-shaped search bar shell around icon + input + clear button.
pub fn search_bar(cs: &ColorScheme) -> impl Fn(&Theme) -> container::Style {
    let bg = cs.surface_container_low;
    let edge = cs.outline_variant;
    move |_theme| container::Style {
        background: Some(Background::Color(bg)),
        border: edged(edge, style::RADIUS_FULL),
        ..Default::default()
    }
}

/// Frame behind poster art; also shown alone while art is missing.
pub fn poster_placeholder(cs: &ColorScheme, radius: f32) -> impl Fn(&Theme) -> container::Style {
    let bg = cs.surface_container_high;
    let edge = cs.outline_variant;
    move |_theme| container::Style {
        background: Some(Background::Color(bg)),
        border: edged(edge, radius),
        ..Default::default()
    }
}

/// Pick list trigger, matching the text input treatment.
pub fn pick_list_style(cs: &ColorScheme) -> impl Fn(&Theme, pick_list::Status) -> pick_list::Style {
    let bg = cs.surface_container_lowest;
    let focus = cs.primary;
    let idle = cs.outline_variant;
    let hover = cs.outline;
    let text = cs.on_surface;
    let muted = cs.on_surface_variant;

    move |_theme, status| {
        let edge = match status {
            pick_list::Status::Opened { .. } => focus,
            pick_list::Status::Hovered => hover,
            _ => idle,
        };
        pick_list::Style {
            text_color: text,
            placeholder_color: muted,
            handle_color: muted,
            background: Background::Color(bg),
            border: edged(edge, style::RADIUS_MD),
        }
    }
}

/// Dropdown menu: elevated surface, secondary-container selection.
pub fn pick_list_menu_style(cs: &ColorScheme) -> impl Fn(&Theme) -> menu::Style {
    let bg = cs.surface_container_high;
    let edge = cs.outline_variant;
    let text = cs.on_surface;
    let selected_bg = cs.secondary_container;
    let selected_fg = cs.on_secondary_container;

    move |_theme| menu::Style {
        background: Background::Color(bg),
        border: edged(edge, style::RADIUS_MD),
        text_color: text,
        selected_text_color: selected_fg,
        selected_background: Background::Color(selected_bg),
        shadow: drop_shadow(),
    }
}

/// Overlay scrollbar: no rail, a translucent pill scroller that
/// solidifies while hovered or dragged.
pub fn overlay_scrollbar(
    cs: &ColorScheme,
) -> impl Fn(&Theme, scrollable::Status) -> scrollable::Style {
    let thumb = cs.outline;
    let thumb_engaged = cs.on_surface_variant;

    move |_theme, status| {
        let engaged = matches!(
            status,
            scrollable::Status::Dragged { .. }
                | scrollable::Status::Hovered {
                    is_vertical_scrollbar_hovered: true,
                    ..
                }
        );

        let rail = scrollable::Rail {
            background: None,
            border: Border::default(),
            scroller: scrollable::Scroller {
                background: if engaged {
                    Background::Color(thumb_engaged)
                } else {
                    wash(thumb, 0.5)
                },
                border: rounded(style::RADIUS_FULL),
            },
        };

        scrollable::Style {
            container: container::Style::default(),
            vertical_rail: rail,
            horizontal_rail: rail,
            gap: None,
            auto_scroll: scrollable::AutoScroll {
                background: Background::Color(Color::TRANSPARENT),
                border: Border::default(),
                shadow: Shadow::default(),
                icon: thumb_engaged,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::{KinemaTheme, ThemeMode};

    #[test]
    fn star_button_lights_up_on_hover() {
        let theme = KinemaTheme::default_theme();
        let cs = theme.colors(ThemeMode::Dark);

        let hovered = star_button(cs)(&Theme::Dark, button::Status::Hovered);
        assert_eq!(hovered.text_color, cs.star);

        let idle = star_button(cs)(&Theme::Dark, button::Status::Active);
        assert_eq!(idle.text_color, cs.outline);
    }

    #[test]
    fn active_nav_item_reads_in_primary() {
        let theme = KinemaTheme::default_theme();
        let cs = theme.colors(ThemeMode::Dark);

        let active = nav_rail_item(true, cs)(&Theme::Dark, button::Status::Active);
        assert_eq!(active.text_color, cs.primary);
        assert!(active.background.is_some());

        let idle = nav_rail_item(false, cs)(&Theme::Dark, button::Status::Active);
        assert_eq!(idle.text_color, cs.on_surface_variant);
        assert!(idle.background.is_none());
    }

    #[test]
    fn selected_list_item_uses_secondary_container() {
        let theme = KinemaTheme::default_theme();
        let cs = theme.colors(ThemeMode::Dark);

        let selected = list_item(true, cs)(&Theme::Dark, button::Status::Active);
        assert_eq!(
            selected.background,
            Some(Background::Color(cs.secondary_container))
        );
        assert_eq!(selected.text_color, cs.on_secondary_container);
    }
}
