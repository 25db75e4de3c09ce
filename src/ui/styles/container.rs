// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::radius;
use iced::widget::container;
use iced::{Background, Border, Theme};

/// Generic panel surface used for the loading, error, and exhausted states.
///
/// The color is derived from the active Iced `Theme` background so panels stay
/// readable in both light and dark modes without hard-coding colors.
pub fn panel(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(palette.background.weak.color)),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}
