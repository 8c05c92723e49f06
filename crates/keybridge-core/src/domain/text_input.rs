//! Text-input (IME) candidate region.
//!
//! Scripts describe the region where text is being typed in *pixels*, the
//! same unit they draw in.  The host input library wants the region in
//! *window coordinates*, which differ from pixels on high-DPI displays.  The
//! window subsystem knows the ratio, so conversion goes through a
//! [`CoordinateScaler`] supplied by the caller.

use serde::{Deserialize, Serialize};

/// Converts pixel coordinates to window coordinates.
///
/// Implemented by the window subsystem.  Width/height pairs are converted
/// with the same call as positions.
pub trait CoordinateScaler: Send + Sync {
    /// Converts a pixel-space pair to window space.
    fn dpi_to_window_coords(&self, x: f64, y: f64) -> (f64, f64);
}

/// A text-input region in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TextInputRegion {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

/// An integer rectangle in window coordinates, as the host expects it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WindowRect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl TextInputRegion {
    /// Creates a region from a position and a size.
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    /// Converts this region to a window-space rectangle.
    ///
    /// Without a scaler the pixel values are used as-is.  Fractions are
    /// truncated toward zero; non-finite values become 0 and out-of-range
    /// values saturate.
    pub fn to_window_rect(&self, scaler: Option<&dyn CoordinateScaler>) -> WindowRect {
        let (x, y, w, h) = match scaler {
            Some(scaler) => {
                let (x, y) = scaler.dpi_to_window_coords(self.x, self.y);
                let (w, h) = scaler.dpi_to_window_coords(self.w, self.h);
                (x, y, w, h)
            }
            None => (self.x, self.y, self.w, self.h),
        };

        WindowRect {
            x: x as i32,
            y: y as i32,
            w: w as i32,
            h: h as i32,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct HalfScale;

    impl CoordinateScaler for HalfScale {
        fn dpi_to_window_coords(&self, x: f64, y: f64) -> (f64, f64) {
            (x / 2.0, y / 2.0)
        }
    }

    #[test]
    fn test_region_without_scaler_passes_through() {
        // Arrange
        let region = TextInputRegion::new(10.0, 20.0, 300.0, 40.0);

        // Act
        let rect = region.to_window_rect(None);

        // Assert
        assert_eq!(rect, WindowRect { x: 10, y: 20, w: 300, h: 40 });
    }

    #[test]
    fn test_region_is_scaled_through_the_scaler() {
        let region = TextInputRegion::new(10.0, 20.0, 300.0, 40.0);
        let rect = region.to_window_rect(Some(&HalfScale));
        assert_eq!(rect, WindowRect { x: 5, y: 10, w: 150, h: 20 });
    }

    #[test]
    fn test_fractions_truncate_toward_zero() {
        let region = TextInputRegion::new(3.0, -3.0, 7.0, 1.0);
        let rect = region.to_window_rect(Some(&HalfScale));
        assert_eq!(rect, WindowRect { x: 1, y: -1, w: 3, h: 0 });
    }

    #[test]
    fn test_non_finite_and_huge_values_do_not_panic() {
        let region = TextInputRegion::new(f64::NAN, f64::INFINITY, 1e20, -1e20);
        let rect = region.to_window_rect(None);
        assert_eq!(rect, WindowRect { x: 0, y: i32::MAX, w: i32::MAX, h: i32::MIN });
    }
}
