//! Slide geometry.
//!
//! Converts pixel measurements to EMUs (the native OOXML length unit) and
//! computes where a picture goes on each slide layout. Slides are 720×540 px
//! at 96 DPI.

use crate::types::{Coords, Dimensions};

/// EMUs per pixel at 96 DPI.
pub const EMU_PER_PIXEL: i64 = 12_700;

/// Slide canvas width in pixels.
pub const SLIDE_WIDTH_PX: u32 = 720;

/// Slide canvas height in pixels.
pub const SLIDE_HEIGHT_PX: u32 = 540;

/// Convert a (possibly fractional) pixel measurement to EMUs.
///
/// No rounding is applied; callers round where the layout requires it.
pub fn to_native_units(pixels: f64) -> f64 {
    pixels * EMU_PER_PIXEL as f64
}

/// Convert a whole pixel measurement to EMUs, rounded to an integer.
pub fn emu(pixels: u32) -> i64 {
    to_native_units(f64::from(pixels)).round() as i64
}

/// Slide width in EMUs.
pub fn slide_width() -> i64 {
    emu(SLIDE_WIDTH_PX)
}

/// Slide height in EMUs.
pub fn slide_height() -> i64 {
    emu(SLIDE_HEIGHT_PX)
}

/// Scale an image down so its width fits `max_width_px`, keeping the aspect ratio.
///
/// Images narrower than the cap keep their size. Returns `(width, height)` in EMUs.
pub fn fit_width(image: Dimensions, max_width_px: u32) -> (i64, i64) {
    let width = emu(image.width);
    let height = emu(image.height);

    let new_width = width.min(emu(max_width_px));
    let ratio = new_width as f64 / width as f64;
    let new_height = (height as f64 * ratio).round() as i64;

    (new_width, new_height)
}

/// Scale an image down so it fits inside a `max_width_px` × `max_height_px` box.
///
/// A single ratio (the smaller of the two axis ratios) is applied to both
/// sides, and each side is rounded independently afterwards.
pub fn fit_within(image: Dimensions, max_width_px: u32, max_height_px: u32) -> (i64, i64) {
    let width = emu(image.width);
    let height = emu(image.height);

    let w_ratio = width.min(emu(max_width_px)) as f64 / width as f64;
    let h_ratio = height.min(emu(max_height_px)) as f64 / height as f64;
    let ratio = w_ratio.min(h_ratio);

    (
        (width as f64 * ratio).round() as i64,
        (height as f64 * ratio).round() as i64,
    )
}

/// Horizontal offset that centers `width` on the slide.
fn centered_x(width: i64) -> i64 {
    slide_width() / 2 - width / 2
}

/// Picture placement rule for a slide layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutPolicy {
    /// Picture centered horizontally under the title, up to 550 px wide.
    Centered,
    /// Picture on the right half of the slide, up to 300 px wide.
    Split,
    /// Picture above a caption, within a 550×300 px box.
    Caption,
}

impl LayoutPolicy {
    /// Compute the placement rectangle for an image with the given dimensions.
    ///
    /// Unknown or zero-sized dimensions produce no placement; the picture is
    /// then rendered without an explicit position.
    pub fn place(self, dimensions: Option<Dimensions>) -> Option<Coords> {
        let image = dimensions.filter(|d| !d.is_empty())?;

        let coords = match self {
            LayoutPolicy::Centered => {
                let (cx, cy) = fit_width(image, 550);
                Coords::new(centered_x(cx), emu(120), cx, cy)
            }
            LayoutPolicy::Split => {
                let (cx, cy) = fit_width(image, 300);
                Coords::new(emu(360), emu(120), cx, cy)
            }
            LayoutPolicy::Caption => {
                let (cx, cy) = fit_within(image, 550, 300);
                Coords::new(centered_x(cx), emu(60), cx, cy)
            }
        };

        Some(coords)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_native_units() {
        assert_eq!(to_native_units(1.0), 12_700.0);
        assert_eq!(to_native_units(0.0), 0.0);
        assert_eq!(to_native_units(2.5), 31_750.0);
        assert_eq!(emu(720), 9_144_000);
        assert_eq!(slide_height(), 6_858_000);
    }

    #[test]
    fn test_emu_agrees_with_native_units() {
        for pixels in [0, 1, 60, 301, 550, 720] {
            assert_eq!(emu(pixels) as f64, to_native_units(f64::from(pixels)));
        }
    }

    #[test]
    fn test_fit_width_caps_wide_images() {
        let (cx, cy) = fit_width(Dimensions::new(800, 600), 550);
        assert_eq!(cx, emu(550));
        assert_eq!(cy, 5_238_750);
    }

    #[test]
    fn test_fit_width_keeps_narrow_images() {
        let (cx, cy) = fit_width(Dimensions::new(200, 100), 550);
        assert_eq!((cx, cy), (emu(200), emu(100)));
    }

    #[test]
    fn test_fit_within_uses_smaller_ratio() {
        // Width ratio 550/800 = 0.6875, height ratio 300/600 = 0.5.
        let (cx, cy) = fit_within(Dimensions::new(800, 600), 550, 300);
        assert_eq!(cx, emu(400));
        assert_eq!(cy, emu(300));
    }

    #[test]
    fn test_fit_within_rounds_each_side() {
        // Ratio 300/301 applied to 13 px wide: 13 * 12700 * 300 / 301 = 164551.49...
        let (cx, cy) = fit_within(Dimensions::new(13, 301), 550, 300);
        assert_eq!(cx, 164_551);
        assert_eq!(cy, emu(300));
    }

    #[test]
    fn test_centered_placement() {
        let coords = LayoutPolicy::Centered
            .place(Some(Dimensions::new(800, 600)))
            .unwrap();

        assert_eq!(coords.cx, emu(550));
        assert_eq!(coords.cy, 5_238_750);
        assert_eq!(coords.x, slide_width() / 2 - emu(550) / 2);
        assert_eq!(coords.y, emu(120));
    }

    #[test]
    fn test_split_placement() {
        let coords = LayoutPolicy::Split
            .place(Some(Dimensions::new(800, 600)))
            .unwrap();

        assert_eq!(coords, Coords::new(emu(360), emu(120), emu(300), 2_857_500));
    }

    #[test]
    fn test_caption_placement() {
        let coords = LayoutPolicy::Caption
            .place(Some(Dimensions::new(800, 600)))
            .unwrap();

        assert_eq!(coords, Coords::new(2_032_000, emu(60), emu(400), emu(300)));
    }

    #[test]
    fn test_unknown_dimensions_have_no_placement() {
        assert_eq!(LayoutPolicy::Caption.place(None), None);
        assert_eq!(LayoutPolicy::Centered.place(None), None);
        assert_eq!(LayoutPolicy::Split.place(Some(Dimensions::new(0, 10))), None);
    }
}
