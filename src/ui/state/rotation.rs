// SPDX-License-Identifier: MPL-2.0
//! Card rotation mapping.
//!
//! Maps a horizontal drag offset to the tilt of the top card: a piecewise
//! linear interpolation through (-1.5·width, -120°), (0, 0°),
//! (+1.5·width, +120°), clamped at the extremes.

/// Maximum tilt a card can reach, in degrees.
pub const MAX_CARD_ROTATION_DEG: f32 = 120.0;

/// The drag distance that produces the maximum tilt, as a multiple of the
/// viewport width.
pub const ROTATION_RANGE_FACTOR: f32 = 1.5;

/// Maps horizontal drag offsets to card rotation angles for a given viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotationMap {
    viewport_width: f32,
}

impl RotationMap {
    /// Creates a mapping for the given viewport width.
    ///
    /// Widths below 1 px are treated as 1 px so a degenerate viewport cannot
    /// produce infinities.
    #[must_use]
    pub fn new(viewport_width: f32) -> Self {
        Self {
            viewport_width: viewport_width.max(1.0),
        }
    }

    /// Returns the rotation in degrees for a horizontal offset.
    ///
    /// Inputs beyond ±1.5·width clamp to ±120°; no extrapolation.
    #[must_use]
    pub fn degrees_for(self, dx: f32) -> f32 {
        let limit = self.viewport_width * ROTATION_RANGE_FACTOR;
        (dx / limit).clamp(-1.0, 1.0) * MAX_CARD_ROTATION_DEG
    }

    /// Returns the rotation in radians for a horizontal offset.
    #[must_use]
    pub fn radians_for(self, dx: f32) -> f32 {
        self.degrees_for(dx).to_radians()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    const WIDTH: f32 = 400.0;

    #[test]
    fn rest_position_has_no_rotation() {
        let map = RotationMap::new(WIDTH);
        assert_abs_diff_eq!(map.degrees_for(0.0), 0.0);
    }

    #[test]
    fn rotation_is_linear_inside_the_range() {
        let map = RotationMap::new(WIDTH);

        // 0.75·width is halfway to the 1.5·width control point
        assert_abs_diff_eq!(map.degrees_for(0.75 * WIDTH), 60.0, epsilon = 1e-4);
        assert_abs_diff_eq!(map.degrees_for(-0.75 * WIDTH), -60.0, epsilon = 1e-4);
    }

    #[test]
    fn rotation_clamps_beyond_the_range() {
        let map = RotationMap::new(WIDTH);

        assert_abs_diff_eq!(map.degrees_for(2.0 * WIDTH), 120.0);
        assert_abs_diff_eq!(map.degrees_for(-2.0 * WIDTH), -120.0);
        // Far beyond the range still clamps, no extrapolation
        assert_abs_diff_eq!(map.degrees_for(50.0 * WIDTH), 120.0);
    }

    #[test]
    fn control_points_map_exactly() {
        let map = RotationMap::new(WIDTH);
        assert_abs_diff_eq!(map.degrees_for(1.5 * WIDTH), 120.0, epsilon = 1e-4);
        assert_abs_diff_eq!(map.degrees_for(-1.5 * WIDTH), -120.0, epsilon = 1e-4);
    }

    #[test]
    fn degenerate_viewport_does_not_produce_infinities() {
        let map = RotationMap::new(0.0);
        assert!(map.degrees_for(100.0).is_finite());
        assert_abs_diff_eq!(map.degrees_for(100.0), 120.0);
    }

    #[test]
    fn radians_match_degrees() {
        let map = RotationMap::new(WIDTH);
        assert_abs_diff_eq!(
            map.radians_for(1.5 * WIDTH),
            120.0_f32.to_radians(),
            epsilon = 1e-4
        );
    }
}
