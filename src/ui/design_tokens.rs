// SPDX-License-Identifier: MPL-2.0
//! Centralized design tokens following the W3C Design Tokens standard.
//!
//! - **Palette**: Base colors
//! - **Opacity**: Standardized opacity levels
//! - **Spacing**: Spacing scale (8px grid)
//! - **Sizing**: Component sizes
//! - **Typography**: Font size scale
//! - **Radius**: Border radii
//! - **Shadow**: Shadow definitions
//!
//! Tokens are designed to be consistent. Before modifying, check the impact
//! on all components and maintain ratios (e.g., MD = XS * 2).

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);
    pub const GRAY_100: Color = Color::from_rgb(0.85, 0.85, 0.85);

    // Brand colors (blue scale)
    pub const PRIMARY_400: Color = Color::from_rgb(0.4, 0.7, 1.0); // Medium light blue
    pub const PRIMARY_500: Color = Color::from_rgb(0.3, 0.6, 0.9); // Primary blue
    pub const PRIMARY_600: Color = Color::from_rgb(0.2, 0.5, 0.8); // Medium dark blue

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
    pub const INFO_500: Color = Color::from_rgb(0.392, 0.588, 1.0);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.7;
    pub const OVERLAY_HOVER: f32 = 0.8;
    pub const OVERLAY_PRESSED: f32 = 0.9;
    pub const OPAQUE: f32 = 1.0;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
    pub const XL: f32 = 32.0; // 4 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    // Icon sizes
    pub const ICON_SM: f32 = 16.0;
    pub const ICON_MD: f32 = 24.0;
    pub const ICON_XL: f32 = 48.0;

    // Card geometry
    pub const CARD_MIN_WIDTH: f32 = 240.0;
    pub const CARD_MAX_WIDTH: f32 = 420.0;
    /// Fraction of the window width a card occupies (clamped to the above).
    pub const CARD_WIDTH_FRACTION: f32 = 0.72;
    /// Height of a card relative to its width.
    pub const CARD_ASPECT: f32 = 1.25;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    pub const CAPTION: f32 = 12.0;
    pub const BODY: f32 = 14.0;
    pub const TITLE: f32 = 18.0;
    pub const TITLE_LG: f32 = 24.0;
}

// ============================================================================
// Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
}

// ============================================================================
// Shadows
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };

    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn spacing_scale_keeps_ratios() {
        assert_abs_diff_eq!(spacing::XS * 2.0, spacing::MD);
        assert_abs_diff_eq!(spacing::XS * 3.0, spacing::LG);
    }

    #[test]
    fn card_width_bounds_are_ordered() {
        assert!(sizing::CARD_MIN_WIDTH < sizing::CARD_MAX_WIDTH);
        assert!(sizing::CARD_WIDTH_FRACTION > 0.0 && sizing::CARD_WIDTH_FRACTION <= 1.0);
    }
}
