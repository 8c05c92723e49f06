//! Window coordinate scaling.
//!
//! On high-DPI displays one window coordinate covers several pixels.  The
//! ratio is the window's *pixel density*: a density of 2.0 means a 200-pixel
//! wide region is 100 window units wide.

use keybridge_core::CoordinateScaler;

/// A window with a fixed pixel density.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedScaleWindow {
    pixel_density: f64,
}

impl FixedScaleWindow {
    /// Creates a window with the given pixel density.
    ///
    /// Non-finite or non-positive densities fall back to 1.0.
    pub fn new(pixel_density: f64) -> Self {
        let pixel_density = if pixel_density.is_finite() && pixel_density > 0.0 {
            pixel_density
        } else {
            1.0
        };
        Self { pixel_density }
    }

    /// Returns the pixel density in use.
    pub fn pixel_density(&self) -> f64 {
        self.pixel_density
    }
}

impl Default for FixedScaleWindow {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl CoordinateScaler for FixedScaleWindow {
    fn dpi_to_window_coords(&self, x: f64, y: f64) -> (f64, f64) {
        (x / self.pixel_density, y / self.pixel_density)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_density_two_halves_coordinates() {
        let window = FixedScaleWindow::new(2.0);
        assert_eq!(window.dpi_to_window_coords(200.0, 50.0), (100.0, 25.0));
    }

    #[test]
    fn test_default_density_is_identity() {
        let window = FixedScaleWindow::default();
        assert_eq!(window.dpi_to_window_coords(13.5, -7.0), (13.5, -7.0));
    }

    #[test]
    fn test_invalid_densities_fall_back_to_one() {
        for bad in [0.0, -2.0, f64::NAN, f64::INFINITY] {
            assert_eq!(FixedScaleWindow::new(bad).pixel_density(), 1.0, "density {bad}");
        }
    }
}
