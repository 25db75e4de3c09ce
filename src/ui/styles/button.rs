// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    palette::{self, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Theme};

/// Style pour bouton primaire (action principale).
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Active | button::Status::Pressed => button::Style {
            background: Some(Background::Color(palette::PRIMARY_500)),
            text_color: WHITE,
            border: Border {
                color: palette::PRIMARY_600,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::SM,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(palette::PRIMARY_400)),
            text_color: WHITE,
            border: Border {
                color: palette::PRIMARY_500,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::MD,
            snap: true,
        },
        _ => button::Style::default(),
    }
}

/// Style pour bouton secondaire (action discrète, e.g. retry).
pub fn secondary(theme: &Theme, status: button::Status) -> button::Style {
    let palette_ext = theme.extended_palette();

    let background = match status {
        button::Status::Hovered => palette_ext.background.weak.color,
        _ => palette_ext.background.base.color,
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: palette_ext.background.base.text,
        border: Border {
            color: palette::GRAY_400,
            width: 1.0,
            radius: radius::SM.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}
