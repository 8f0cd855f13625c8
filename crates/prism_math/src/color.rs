//! Color helpers.
//!
//! Colors are plain `Vec3` values (r, g, b) so all the usual vector
//! arithmetic applies: `+` accumulates light and `*` between two colors is
//! the per-channel product. Values are unbounded while shading and only
//! clamped when a pixel is finished.

use crate::Vec3;

/// Color type alias (RGB, linear, unclamped while shading)
pub type Color = Vec3;

/// Clamp every channel to the displayable [0, 1] range.
#[inline]
pub fn clamp_color(color: Color) -> Color {
    color.clamp(Vec3::ZERO, Vec3::ONE)
}

/// Relative luminance (Rec. 709 weights).
#[inline]
pub fn luminance(color: Color) -> f32 {
    0.2126 * color.x + 0.7152 * color.y + 0.0722 * color.z
}

/// Convert a color to 8-bit RGBA, clamping first.
pub fn color_to_rgba(color: Color) -> [u8; 4] {
    let c = clamp_color(color) * 255.0;
    [
        c.x.round() as u8,
        c.y.round() as u8,
        c.z.round() as u8,
        255,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_color() {
        let c = clamp_color(Color::new(-0.5, 0.25, 3.0));
        assert_eq!(c, Color::new(0.0, 0.25, 1.0));
    }

    #[test]
    fn test_max_channel() {
        assert_eq!(Color::new(0.1, 0.7, 0.3).max_element(), 0.7);
    }

    #[test]
    fn test_per_channel_product() {
        let tint = Color::new(1.0, 0.5, 0.0);
        assert_eq!(Color::ONE * tint, tint);
        assert_eq!(Color::new(0.5, 0.5, 0.5) * tint, Color::new(0.5, 0.25, 0.0));
    }

    #[test]
    fn test_luminance() {
        assert!((luminance(Color::ONE) - 1.0).abs() < 1e-6);
        assert_eq!(luminance(Color::ZERO), 0.0);
        assert!(luminance(Color::new(0.0, 1.0, 0.0)) > luminance(Color::new(0.0, 0.0, 1.0)));
    }

    #[test]
    fn test_color_to_rgba() {
        assert_eq!(color_to_rgba(Color::new(1.0, 0.0, 2.0)), [255, 0, 255, 255]);
        assert_eq!(color_to_rgba(Color::new(0.5, -1.0, 0.0)), [128, 0, 0, 255]);
    }
}
