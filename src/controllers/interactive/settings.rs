use std::time::Duration;

use crate::core::actions::progressive_scan::scan_pass::DRAW_ITERATION_STEP;
use crate::core::fractals::mandelbrot::mandelbrot_config::MandelbrotConfig;

pub const MIN_RESIZE_SETTLE: Duration = Duration::from_millis(100);
const MAX_ZOOM_FACTOR: f64 = 0.95;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavigationSettings {
    /// Fraction of the viewport extent moved per pan step.
    pub pan_factor: f64,
    /// Fraction of the viewport extent removed (zoom in) or added (zoom out).
    pub zoom_factor: f64,
    /// Smallest drag extent, in raster pixels, accepted on either axis.
    pub min_drag_pixels: f64,
}

impl Default for NavigationSettings {
    fn default() -> Self {
        Self {
            pan_factor: 0.1,
            zoom_factor: 0.25,
            min_drag_pixels: 12.0,
        }
    }
}

impl NavigationSettings {
    #[must_use]
    pub fn sanitized(self) -> Self {
        let defaults = Self::default();

        let pan_factor = if self.pan_factor.is_finite() {
            self.pan_factor
        } else {
            defaults.pan_factor
        };

        let zoom_factor = if self.zoom_factor.is_finite() {
            self.zoom_factor.clamp(0.0, MAX_ZOOM_FACTOR)
        } else {
            defaults.zoom_factor
        };

        let min_drag_pixels = if self.min_drag_pixels.is_finite() {
            self.min_drag_pixels.max(0.0)
        } else {
            defaults.min_drag_pixels
        };

        Self {
            pan_factor,
            zoom_factor,
            min_drag_pixels,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExplorerSettings {
    pub mandelbrot: MandelbrotConfig,
    pub navigation: NavigationSettings,
    /// Pixels evaluated per host tick.
    pub batch_size: usize,
    /// Quiet period a resize must survive before the raster is rebuilt.
    pub resize_settle: Duration,
    /// Derive the drag height from its width and the raster aspect ratio.
    pub lock_drag_aspect: bool,
}

impl Default for ExplorerSettings {
    fn default() -> Self {
        Self {
            mandelbrot: MandelbrotConfig::default(),
            navigation: NavigationSettings::default(),
            batch_size: DRAW_ITERATION_STEP,
            resize_settle: MIN_RESIZE_SETTLE,
            lock_drag_aspect: false,
        }
    }
}

impl ExplorerSettings {
    #[must_use]
    pub fn sanitized(self) -> Self {
        Self {
            mandelbrot: self.mandelbrot.sanitized(),
            navigation: self.navigation.sanitized(),
            batch_size: self.batch_size.max(1),
            resize_settle: self.resize_settle.max(MIN_RESIZE_SETTLE),
            lock_drag_aspect: self.lock_drag_aspect,
        }
    }
}
