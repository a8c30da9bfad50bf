use iced::widget::{button, container};
use iced::{Background, Border, Color, Shadow, Theme};

use crate::core::models::{RatingColor, ThemeMode};

const BUTTON_RADIUS: f32 = 6.0;
const ROW_RADIUS: f32 = 10.0;
const RATING_BADGE_RADIUS: f32 = 18.0;

pub fn get_theme(mode: &ThemeMode) -> Theme {
    match mode {
        ThemeMode::Dark => Theme::custom(
            "Dark".to_string(),
            iced::theme::Palette {
                background: Color::from_rgb(0.07, 0.07, 0.08),
                text: Color::from_rgb(1.0, 1.0, 1.0),
                primary: Color::from_rgb(0.4, 0.6, 1.0),
                success: Color::from_rgb(0.2, 0.9, 0.4),
                danger: Color::from_rgb(1.0, 0.3, 0.3),
                warning: Color::from_rgb(1.0, 0.7, 0.0),
            },
        ),
        ThemeMode::Light => Theme::custom(
            "Light".to_string(),
            iced::theme::Palette {
                background: Color::from_rgb(0.95, 0.95, 0.97),
                text: Color::from_rgb(0.1, 0.1, 0.1),
                primary: Color::from_rgb(0.2, 0.4, 0.9),
                success: Color::from_rgb(0.1, 0.7, 0.3),
                danger: Color::from_rgb(0.9, 0.2, 0.2),
                warning: Color::from_rgb(0.9, 0.6, 0.0),
            },
        ),
    }
}

pub fn rating_color_to_iced(rating_color: RatingColor) -> Color {
    let (red, green, blue) = rating_color.rgb();
    Color::from_rgb(red, green, blue)
}

pub fn muted_text_color() -> Color {
    Color::from_rgba(0.6, 0.6, 0.6, 1.0)
}

fn filled_button_style(
    status: button::Status,
    active: Color,
    hovered: Color,
    pressed: Color,
    text_color: Color,
) -> button::Style {
    let fill = match status {
        button::Status::Active => active,
        button::Status::Hovered => hovered,
        button::Status::Pressed => pressed,
        button::Status::Disabled => Color::from_rgb(0.3, 0.3, 0.3),
    };

    let text_color = match status {
        button::Status::Disabled => Color::from_rgb(0.5, 0.5, 0.5),
        _ => text_color,
    };

    button::Style {
        background: Some(Background::Color(fill)),
        text_color,
        border: Border {
            color: fill,
            width: 1.0,
            radius: BUTTON_RADIUS.into(),
        },
        shadow: Shadow::default(),
        snap: matches!(status, button::Status::Pressed),
    }
}

pub fn primary_button_style(_theme: &Theme, status: button::Status) -> button::Style {
    filled_button_style(
        status,
        Color::from_rgb(0.098, 0.529, 0.329),
        Color::from_rgb(0.122, 0.655, 0.408),
        Color::from_rgb(0.078, 0.420, 0.263),
        Color::WHITE,
    )
}

pub fn secondary_button_style(_theme: &Theme, status: button::Status) -> button::Style {
    let text_color = match status {
        button::Status::Hovered => Color::from_rgb(0.9, 0.9, 0.9),
        _ => Color::from_rgb(0.75, 0.75, 0.75),
    };

    filled_button_style(
        status,
        Color::from_rgb(0.25, 0.25, 0.25),
        Color::from_rgb(0.35, 0.35, 0.35),
        Color::from_rgb(0.2, 0.2, 0.2),
        text_color,
    )
}

/// A result row is a borderless button that lights up under the cursor.
pub fn book_row_style(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.palette();

    let background = match status {
        button::Status::Hovered => Color::from_rgba(0.5, 0.5, 0.5, 0.18),
        button::Status::Pressed => Color::from_rgba(0.5, 0.5, 0.5, 0.28),
        _ => Color::from_rgba(0.5, 0.5, 0.5, 0.06),
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: palette.text,
        border: Border {
            color: Color::from_rgba(0.5, 0.5, 0.5, 0.2),
            width: 1.0,
            radius: ROW_RADIUS.into(),
        },
        shadow: Shadow::default(),
        snap: false,
    }
}

pub fn rating_badge_style(rating_color: RatingColor) -> container::Style {
    container::Style {
        background: Some(Background::Color(rating_color_to_iced(rating_color))),
        text_color: Some(Color::WHITE),
        border: Border {
            color: Color::TRANSPARENT,
            width: 0.0,
            radius: RATING_BADGE_RADIUS.into(),
        },
        ..Default::default()
    }
}

pub fn thumbnail_placeholder_style() -> container::Style {
    container::Style {
        background: Some(Background::Color(Color::from_rgba(0.5, 0.5, 0.5, 0.25))),
        border: Border {
            color: Color::from_rgba(0.5, 0.5, 0.5, 0.4),
            width: 1.0,
            radius: 4.0.into(),
        },
        ..Default::default()
    }
}

pub fn window_background_style(mode: &ThemeMode) -> container::Style {
    let palette = get_theme(mode).palette();

    container::Style {
        background: Some(Background::Color(palette.background)),
        text_color: Some(palette.text),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_theme_dark_mode() {
        let palette = get_theme(&ThemeMode::Dark).palette();

        assert_eq!(palette.background, Color::from_rgb(0.07, 0.07, 0.08));
        assert_eq!(palette.text, Color::from_rgb(1.0, 1.0, 1.0));
    }

    #[test]
    fn test_get_theme_light_mode() {
        let palette = get_theme(&ThemeMode::Light).palette();

        assert_eq!(palette.background, Color::from_rgb(0.95, 0.95, 0.97));
        assert_eq!(palette.text, Color::from_rgb(0.1, 0.1, 0.1));
    }

    #[test]
    fn test_primary_button_style_active_has_green_background() {
        let style = primary_button_style(&Theme::Dark, button::Status::Active);

        if let Some(Background::Color(color)) = style.background {
            assert_eq!(color, Color::from_rgb(0.098, 0.529, 0.329));
        } else {
            panic!("Expected background color");
        }

        assert_eq!(style.text_color, Color::WHITE);
    }

    #[test]
    fn test_pressed_buttons_snap() {
        let style = primary_button_style(&Theme::Dark, button::Status::Pressed);

        assert!(style.snap);
    }

    #[test]
    fn test_disabled_buttons_are_gray() {
        let primary = primary_button_style(&Theme::Dark, button::Status::Disabled);
        let secondary = secondary_button_style(&Theme::Dark, button::Status::Disabled);

        for style in [primary, secondary] {
            if let Some(Background::Color(color)) = style.background {
                assert_eq!(color, Color::from_rgb(0.3, 0.3, 0.3));
            } else {
                panic!("Expected background color");
            }
            assert_eq!(style.text_color, Color::from_rgb(0.5, 0.5, 0.5));
        }
    }

    #[test]
    fn test_button_styles_have_consistent_border_radius() {
        let primary = primary_button_style(&Theme::Dark, button::Status::Active);
        let secondary = secondary_button_style(&Theme::Dark, button::Status::Active);

        assert_eq!(primary.border.radius, 6.0.into());
        assert_eq!(secondary.border.radius, 6.0.into());
    }

    #[test]
    fn test_book_row_hover_is_more_opaque_than_idle() {
        let theme = get_theme(&ThemeMode::Dark);
        let idle = book_row_style(&theme, button::Status::Active);
        let hovered = book_row_style(&theme, button::Status::Hovered);

        match (idle.background, hovered.background) {
            (Some(Background::Color(idle)), Some(Background::Color(hovered))) => {
                assert!(hovered.a > idle.a);
            }
            _ => panic!("Expected background colors"),
        }
    }

    #[test]
    fn test_rating_badge_uses_rating_color() {
        let style = rating_badge_style(RatingColor::High);

        if let Some(Background::Color(color)) = style.background {
            assert_eq!(color, Color::from_rgb(0.263, 0.627, 0.278));
        } else {
            panic!("Expected background color");
        }
    }

    #[test]
    fn test_window_background_follows_theme_mode() {
        let dark = window_background_style(&ThemeMode::Dark);
        let light = window_background_style(&ThemeMode::Light);

        assert_ne!(dark.background, light.background);
    }
}
