use serde::{Deserialize, Serialize};

/// Size in logical (CSS) pixels, the unit all drawing commands use
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LogicalSize {
    pub width: f64,
    pub height: f64,
}

impl LogicalSize {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Size of a canvas backing store in device pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PixelSize {
    pub width: u32,
    pub height: u32,
}

impl PixelSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Backing size for a layout box on a display with the given pixel ratio
    pub fn from_logical(size: LogicalSize, pixel_ratio: f64) -> Self {
        let ratio = effective_pixel_ratio(pixel_ratio);
        Self {
            width: to_pixels(size.width * ratio),
            height: to_pixels(size.height * ratio),
        }
    }
}

/// Device pixel ratio to use for sizing; anything unusable counts as 1.0
pub fn effective_pixel_ratio(raw: f64) -> f64 {
    if raw.is_finite() && raw > 0.0 {
        raw
    } else {
        1.0
    }
}

fn to_pixels(value: f64) -> u32 {
    if value.is_finite() && value > 0.0 {
        value.round().min(u32::MAX as f64) as u32
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backing_size_scales_with_ratio() {
        let size = LogicalSize::new(400.0, 300.0);
        assert_eq!(PixelSize::from_logical(size, 1.0), PixelSize::new(400, 300));
        assert_eq!(PixelSize::from_logical(size, 2.0), PixelSize::new(800, 600));
        assert_eq!(PixelSize::from_logical(size, 1.5), PixelSize::new(600, 450));
    }

    #[test]
    fn test_unusable_ratio_falls_back_to_one() {
        let size = LogicalSize::new(320.0, 200.0);
        for ratio in [0.0, -2.0, f64::NAN, f64::INFINITY] {
            assert_eq!(PixelSize::from_logical(size, ratio), PixelSize::new(320, 200));
        }
    }

    #[test]
    fn test_fractional_layout_rounds() {
        let size = LogicalSize::new(100.4, 50.6);
        assert_eq!(PixelSize::from_logical(size, 1.0), PixelSize::new(100, 51));
    }

    #[test]
    fn test_collapsed_layout_gives_zero_pixels() {
        let size = LogicalSize::new(0.0, -10.0);
        assert_eq!(PixelSize::from_logical(size, 2.0), PixelSize::new(0, 0));
    }
}
