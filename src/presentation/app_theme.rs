use iced::widget::{button, container};
use iced::{Background, Border, Color, Shadow, Theme};

use crate::core::models::{NotificationStyle, ThemeMode};

const COPY_GREEN: Color = Color::from_rgb(0.098, 0.529, 0.329);
const NEUTRAL_GRAY: Color = Color::from_rgb(0.25, 0.25, 0.28);
const PROGRESS_BLUE: Color = Color::from_rgb(0.2, 0.4, 0.8);
const FAILURE_RED: Color = Color::from_rgb(0.8, 0.25, 0.25);
const DISABLED_GRAY: Color = Color::from_rgb(0.3, 0.3, 0.3);

pub fn get_theme(mode: &ThemeMode) -> Theme {
    match mode {
        ThemeMode::Dark => Theme::custom(
            "Palette Dark".to_string(),
            iced::theme::Palette {
                background: Color::from_rgb(0.11, 0.11, 0.12),
                text: Color::from_rgb(0.95, 0.95, 0.95),
                primary: Color::from_rgb(0.4, 0.6, 1.0),
                success: Color::from_rgb(0.2, 0.9, 0.4),
                danger: Color::from_rgb(1.0, 0.3, 0.3),
                warning: Color::from_rgb(1.0, 0.7, 0.0),
            },
        ),
        ThemeMode::Light => Theme::custom(
            "Palette Light".to_string(),
            iced::theme::Palette {
                background: Color::from_rgb(0.96, 0.96, 0.97),
                text: Color::from_rgb(0.1, 0.1, 0.1),
                primary: Color::from_rgb(0.2, 0.4, 0.9),
                success: Color::from_rgb(0.1, 0.7, 0.3),
                danger: Color::from_rgb(0.9, 0.2, 0.2),
                warning: Color::from_rgb(0.9, 0.6, 0.0),
            },
        ),
    }
}

fn shift(color: Color, amount: f32) -> Color {
    Color::from_rgb(
        (color.r + amount).clamp(0.0, 1.0),
        (color.g + amount).clamp(0.0, 1.0),
        (color.b + amount).clamp(0.0, 1.0),
    )
}

fn solid_button_style(base: Color, text_color: Color, status: button::Status) -> button::Style {
    let (background, text_color, snap) = match status {
        button::Status::Active => (base, text_color, false),
        button::Status::Hovered => (shift(base, 0.08), text_color, false),
        button::Status::Pressed => (shift(base, -0.05), text_color, true),
        button::Status::Disabled => (DISABLED_GRAY, Color::from_rgb(0.5, 0.5, 0.5), false),
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color,
        border: Border {
            color: background,
            width: 1.0,
            radius: 6.0.into(),
        },
        shadow: Shadow::default(),
        snap,
    }
}

pub fn copy_button_style(_theme: &Theme, status: button::Status) -> button::Style {
    solid_button_style(COPY_GREEN, Color::WHITE, status)
}

pub fn secondary_button_style(_theme: &Theme, status: button::Status) -> button::Style {
    solid_button_style(NEUTRAL_GRAY, Color::from_rgb(0.85, 0.85, 0.85), status)
}

pub fn notification_color(style: NotificationStyle) -> Color {
    match style {
        NotificationStyle::InProgress => PROGRESS_BLUE,
        NotificationStyle::Success => COPY_GREEN,
        NotificationStyle::Failure => FAILURE_RED,
    }
}

pub fn toast_container_style(style: NotificationStyle) -> container::Style {
    let color = notification_color(style);

    container::Style {
        background: Some(Background::Color(color)),
        text_color: Some(Color::WHITE),
        border: Border {
            color: shift(color, 0.1),
            width: 1.0,
            radius: 6.0.into(),
        },
        shadow: Shadow {
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.5),
            offset: iced::Vector::new(0.0, 4.0),
            blur_radius: 8.0,
        },
        ..Default::default()
    }
}

pub fn grid_cell_style(theme: &Theme) -> container::Style {
    let palette = theme.palette();

    container::Style {
        background: Some(Background::Color(shift(palette.background, 0.05))),
        text_color: Some(palette.text),
        border: Border {
            color: shift(palette.background, 0.15),
            width: 1.0,
            radius: 8.0.into(),
        },
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_theme_dark_mode() {
        let theme = get_theme(&ThemeMode::Dark);
        let palette = theme.palette();

        assert_eq!(palette.background, Color::from_rgb(0.11, 0.11, 0.12));
        assert_eq!(palette.text, Color::from_rgb(0.95, 0.95, 0.95));
    }

    #[test]
    fn test_get_theme_light_mode() {
        let theme = get_theme(&ThemeMode::Light);
        let palette = theme.palette();

        assert_eq!(palette.background, Color::from_rgb(0.96, 0.96, 0.97));
        assert_eq!(palette.text, Color::from_rgb(0.1, 0.1, 0.1));
    }

    #[test]
    fn test_copy_button_active_has_green_background() {
        let style = copy_button_style(&Theme::Dark, button::Status::Active);

        assert_eq!(style.background, Some(Background::Color(COPY_GREEN)));
        assert_eq!(style.text_color, Color::WHITE);
    }

    #[test]
    fn test_hovered_button_is_lighter_and_pressed_snaps() {
        let hovered = copy_button_style(&Theme::Dark, button::Status::Hovered);
        let pressed = copy_button_style(&Theme::Dark, button::Status::Pressed);

        if let Some(Background::Color(color)) = hovered.background {
            assert!(color.g > COPY_GREEN.g);
        } else {
            panic!("Expected background color");
        }
        assert!(pressed.snap);
    }

    #[test]
    fn test_disabled_buttons_are_gray() {
        let style = secondary_button_style(&Theme::Dark, button::Status::Disabled);

        assert_eq!(style.background, Some(Background::Color(DISABLED_GRAY)));
    }

    #[test]
    fn test_notification_colors_are_distinct() {
        let colors = [
            notification_color(NotificationStyle::InProgress),
            notification_color(NotificationStyle::Success),
            notification_color(NotificationStyle::Failure),
        ];

        assert_ne!(colors[0], colors[1]);
        assert_ne!(colors[1], colors[2]);
        assert_ne!(colors[0], colors[2]);
    }

    #[test]
    fn test_toast_style_uses_white_text() {
        let style = toast_container_style(NotificationStyle::Failure);

        assert_eq!(style.text_color, Some(Color::WHITE));
        assert_eq!(style.background, Some(Background::Color(FAILURE_RED)));
    }
}
