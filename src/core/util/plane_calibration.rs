use crate::core::data::point::Point;
use crate::core::data::raster_size::RasterSize;
use crate::core::fractals::mandelbrot::mandelbrot_config::MandelbrotConfig;

/// Converts viewport-space coordinates into complex values.
///
/// Viewport space measures one unit per raster pixel at the default view.
/// `anchor` is the viewport-space position of the complex origin and
/// `base_scale` the size of one unit on the complex plane.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PlaneCalibration {
    anchor: Point,
    base_scale: f64,
}

impl PlaneCalibration {
    #[must_use]
    pub const fn new(anchor: Point, base_scale: f64) -> Self {
        Self { anchor, base_scale }
    }

    /// Anchors the complex origin at the configured image-centre offset of
    /// `raster`, so the default view shows the whole set.
    #[must_use]
    pub fn for_raster(raster: RasterSize, config: &MandelbrotConfig) -> Self {
        let anchor = Point::new(
            f64::from(raster.width) * config.centre_ratio.x,
            f64::from(raster.height) * config.centre_ratio.y,
        );

        Self::new(anchor, config.base_scale)
    }

    #[must_use]
    pub fn anchor(&self) -> Point {
        self.anchor
    }

    #[must_use]
    pub fn base_scale(&self) -> f64 {
        self.base_scale
    }

    #[must_use]
    pub fn to_complex(&self, point: Point) -> Point {
        (point - self.anchor).scale(self.base_scale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anchor_maps_to_complex_origin() {
        let calibration = PlaneCalibration::for_raster(RasterSize::new(800, 600), &MandelbrotConfig::default());

        assert_eq!(calibration.anchor(), Point::new(480.0, 300.0));
        assert_eq!(calibration.to_complex(Point::new(480.0, 300.0)), Point::ORIGIN);
    }

    #[test]
    fn test_default_view_spans_the_classic_region() {
        let calibration = PlaneCalibration::for_raster(RasterSize::new(800, 600), &MandelbrotConfig::default());

        let top_left = calibration.to_complex(Point::ORIGIN);
        let bottom_right = calibration.to_complex(Point::new(800.0, 600.0));

        assert!((top_left.x - -1.44).abs() < 1e-9);
        assert!((top_left.y - -0.9).abs() < 1e-9);
        assert!((bottom_right.x - 0.96).abs() < 1e-9);
        assert!((bottom_right.y - 0.9).abs() < 1e-9);
    }

    #[test]
    fn test_to_complex_scales_offsets() {
        let calibration = PlaneCalibration::new(Point::new(10.0, 10.0), 0.5);

        assert_eq!(calibration.to_complex(Point::new(14.0, 6.0)), Point::new(2.0, -2.0));
        assert_eq!(calibration.base_scale(), 0.5);
    }
}
