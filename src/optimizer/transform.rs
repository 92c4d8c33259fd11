//! Pixel transforms: alpha flattening and bounded downscaling

use image::imageops::{self, FilterType};
use image::{DynamicImage, Rgb, RgbImage};

/// Convert to opaque RGB, compositing any alpha channel onto `background`.
///
/// Each channel becomes `(src * a + bg * (255 - a)) / 255`, rounded.
pub fn flatten_alpha(img: &DynamicImage, background: [u8; 3]) -> RgbImage {
    if !img.color().has_alpha() {
        return img.to_rgb8();
    }

    let rgba = img.to_rgba8();
    let mut out = RgbImage::new(rgba.width(), rgba.height());

    for (x, y, px) in rgba.enumerate_pixels() {
        let [r, g, b, a] = px.0;
        out.put_pixel(
            x,
            y,
            Rgb([
                blend(r, background[0], a),
                blend(g, background[1], a),
                blend(b, background[2], a),
            ]),
        );
    }

    out
}

fn blend(src: u8, bg: u8, alpha: u8) -> u8 {
    let a = u32::from(alpha);
    let mixed = (u32::from(src) * a + u32::from(bg) * (255 - a) + 127) / 255;
    // mixed <= 255 for all inputs
    u8::try_from(mixed).unwrap_or(u8::MAX)
}

/// Dimensions after fitting `width`×`height` inside a `max`×`max` box.
///
/// Returns `None` when no side exceeds `max`. Otherwise the longer side
/// becomes `max` and the other side is scaled and truncated, never below 1.
pub fn target_dimensions(width: u32, height: u32, max: u32) -> Option<(u32, u32)> {
    if width <= max && height <= max {
        return None;
    }

    let scale = |side: u32, longest: u32| -> u32 {
        let scaled = u64::from(side) * u64::from(max) / u64::from(longest);
        u32::try_from(scaled).unwrap_or(max).max(1)
    };

    if width >= height {
        Some((max, scale(height, width)))
    } else {
        Some((scale(width, height), max))
    }
}

/// Downscale with Lanczos3 so neither side exceeds `max`
pub fn fit_within(img: RgbImage, max: u32) -> RgbImage {
    match target_dimensions(img.width(), img.height(), max) {
        Some((w, h)) => imageops::resize(&img, w, h, FilterType::Lanczos3),
        None => img,
    }
}
