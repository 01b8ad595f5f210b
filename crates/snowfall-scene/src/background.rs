//! Full-screen background fill.

use std::path::Path;

use image::RgbImage;
use image::imageops::{self, FilterType};
use log::info;
use ratatui::style::Color;

use crate::color::lerp_rgb;

/// Source of the per-cell background color.
#[derive(Debug, Clone)]
pub enum Background {
    /// Vertical blend from `top` to `bottom`.
    Gradient { top: [u8; 3], bottom: [u8; 3] },
    /// A picture stretched over the whole grid.
    Image(ImageFill),
}

/// A decoded picture plus a copy scaled to the current terminal grid.
#[derive(Debug, Clone)]
pub struct ImageFill {
    source: RgbImage,
    scaled: Option<RgbImage>,
}

impl Background {
    pub fn gradient(top: [u8; 3], bottom: [u8; 3]) -> Self {
        Background::Gradient { top, bottom }
    }

    /// Decode a PNG or JPEG file.
    pub fn load(path: &Path) -> image::ImageResult<Self> {
        let source = image::open(path)?.to_rgb8();
        info!(
            "loaded background {} ({}x{})",
            path.display(),
            source.width(),
            source.height()
        );
        Ok(Self::from_image(source))
    }

    pub fn from_image(source: RgbImage) -> Self {
        Background::Image(ImageFill {
            source,
            scaled: None,
        })
    }

    /// Rescale cached data for a `width` x `height` grid if it changed.
    pub(crate) fn prepare(&mut self, width: u16, height: u16) {
        if let Background::Image(fill) = self {
            let fits = fill
                .scaled
                .as_ref()
                .is_some_and(|img| img.width() == width as u32 && img.height() == height as u32);
            if !fits && width > 0 && height > 0 {
                fill.scaled = Some(imageops::resize(
                    &fill.source,
                    width as u32,
                    height as u32,
                    FilterType::Triangle,
                ));
            }
        }
    }

    /// Background color of cell (`x`, `y`) in a `height`-row grid.
    pub(crate) fn color_at(&self, x: u16, y: u16, height: u16) -> Color {
        match self {
            Background::Gradient { top, bottom } => {
                let t = if height > 1 {
                    y as f32 / (height - 1) as f32
                } else {
                    0.0
                };
                lerp_rgb(*top, *bottom, t)
            }
            Background::Image(fill) => match &fill.scaled {
                Some(img) if (x as u32) < img.width() && (y as u32) < img.height() => {
                    let [r, g, b] = img.get_pixel(x as u32, y as u32).0;
                    Color::Rgb(r, g, b)
                }
                _ => Color::Reset,
            },
        }
    }
}
