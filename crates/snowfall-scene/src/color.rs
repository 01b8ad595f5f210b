//! Color helpers for the scene.

use ratatui::style::Color;

use crate::chars::SizeClass;

/// Blend two RGB triples, `t` in 0.0-1.0.
pub fn lerp_rgb(from: [u8; 3], to: [u8; 3], t: f32) -> Color {
    let t = t.clamp(0.0, 1.0);
    let channel = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
    Color::Rgb(
        channel(from[0], to[0]),
        channel(from[1], to[1]),
        channel(from[2], to[2]),
    )
}

/// Tint for a flake: larger flakes are brighter.
pub fn flake_color(class: SizeClass) -> Color {
    match class {
        SizeClass::Small => Color::Rgb(158, 183, 208),
        SizeClass::Medium => Color::Rgb(200, 216, 234),
        SizeClass::Large => Color::Rgb(240, 246, 255),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp_endpoints() {
        assert_eq!(lerp_rgb([0, 0, 0], [200, 100, 50], 0.0), Color::Rgb(0, 0, 0));
        assert_eq!(
            lerp_rgb([0, 0, 0], [200, 100, 50], 1.0),
            Color::Rgb(200, 100, 50)
        );
        assert_eq!(
            lerp_rgb([0, 0, 0], [200, 100, 50], 0.5),
            Color::Rgb(100, 50, 25)
        );
        assert_eq!(lerp_rgb([10, 10, 10], [20, 20, 20], 7.0), Color::Rgb(20, 20, 20));
    }

    #[test]
    fn test_flakes_get_brighter_with_size() {
        let luma = |c: Color| match c {
            Color::Rgb(r, g, b) => r as u32 + g as u32 + b as u32,
            _ => 0,
        };
        assert!(luma(flake_color(SizeClass::Small)) < luma(flake_color(SizeClass::Medium)));
        assert!(luma(flake_color(SizeClass::Medium)) < luma(flake_color(SizeClass::Large)));
    }
}
