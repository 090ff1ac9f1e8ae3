use crate::core::data::point::Point;
use crate::core::data::raster_size::RasterSize;
use thiserror::Error;

#[derive(Debug, Copy, Clone, PartialEq, Error)]
pub enum ViewportError {
    #[error("viewport size must be positive and finite: {width}x{height}")]
    InvalidSize { width: f64, height: f64 },
    #[error("viewport origin must be finite: ({x}, {y})")]
    InvalidOrigin { x: f64, y: f64 },
}

/// The rectangle of plane coordinates currently mapped onto the raster.
///
/// `(x, y)` is the top-left corner. Width and height are always positive.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    x: f64,
    y: f64,
    width: f64,
    height: f64,
}

impl Viewport {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Result<Self, ViewportError> {
        if !(width.is_finite() && height.is_finite()) || width <= 0.0 || height <= 0.0 {
            return Err(ViewportError::InvalidSize { width, height });
        }

        if !(x.is_finite() && y.is_finite()) {
            return Err(ViewportError::InvalidOrigin { x, y });
        }

        Ok(Self {
            x,
            y,
            width,
            height,
        })
    }

    /// The raster-sized view: one viewport unit per raster pixel.
    #[must_use]
    pub fn default_for_raster(raster: RasterSize) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width: f64::from(raster.width.max(1)),
            height: f64::from(raster.height.max(1)),
        }
    }

    #[must_use]
    pub fn x(&self) -> f64 {
        self.x
    }

    #[must_use]
    pub fn y(&self) -> f64 {
        self.y
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }

    #[must_use]
    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn with_origin(&self, x: f64, y: f64) -> Result<Self, ViewportError> {
        Self::new(x, y, self.width, self.height)
    }

    pub fn with_size(&self, width: f64, height: f64) -> Result<Self, ViewportError> {
        Self::new(self.x, self.y, width, height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_viewport_new_valid() {
        let viewport = Viewport::new(-2.5, -1.0, 3.5, 2.0).unwrap();

        assert_eq!(viewport.x(), -2.5);
        assert_eq!(viewport.y(), -1.0);
        assert_eq!(viewport.width(), 3.5);
        assert_eq!(viewport.height(), 2.0);
        assert_eq!(viewport.origin(), Point::new(-2.5, -1.0));
    }

    #[test]
    fn test_viewport_dimensions_must_be_positive() {
        assert_eq!(
            Viewport::new(0.0, 0.0, 0.0, 100.0),
            Err(ViewportError::InvalidSize {
                width: 0.0,
                height: 100.0
            })
        );
        assert_eq!(
            Viewport::new(0.0, 0.0, 100.0, -10.0),
            Err(ViewportError::InvalidSize {
                width: 100.0,
                height: -10.0
            })
        );
        assert!(Viewport::new(0.0, 0.0, f64::INFINITY, 1.0).is_err());
        assert!(Viewport::new(0.0, 0.0, 1.0, f64::NAN).is_err());
    }

    #[test]
    fn test_viewport_origin_must_be_finite() {
        assert_eq!(
            Viewport::new(f64::INFINITY, 0.0, 1.0, 1.0),
            Err(ViewportError::InvalidOrigin {
                x: f64::INFINITY,
                y: 0.0
            })
        );
    }

    #[test]
    fn test_default_for_raster() {
        let viewport = Viewport::default_for_raster(RasterSize::new(800, 600));

        assert_eq!(viewport, Viewport::new(0.0, 0.0, 800.0, 600.0).unwrap());
    }

    #[test]
    fn test_default_for_empty_raster_is_still_valid() {
        let viewport = Viewport::default_for_raster(RasterSize::new(0, 0));

        assert_eq!(viewport.width(), 1.0);
        assert_eq!(viewport.height(), 1.0);
    }

    #[test]
    fn test_with_size_rejects_degenerate_result() {
        let viewport = Viewport::new(10.0, 10.0, 100.0, 100.0).unwrap();

        assert!(viewport.with_size(0.0, 50.0).is_err());
        assert_eq!(
            viewport.with_size(50.0, 25.0).unwrap(),
            Viewport::new(10.0, 10.0, 50.0, 25.0).unwrap()
        );
    }
}
