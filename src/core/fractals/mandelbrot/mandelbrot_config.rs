use crate::core::data::point::Point;

pub const DEFAULT_MAX_ITERATIONS: u32 = 100;
pub const DEFAULT_BASE_SCALE: f64 = 0.003;

/// Image-centre offset as a fraction of the raster, where the complex origin sits
/// in the default view. The horizontal bias leaves room for the set's main body.
pub const DEFAULT_CENTRE_RATIO: Point = Point { x: 0.6, y: 0.5 };

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MandelbrotConfig {
    pub max_iterations: u32,
    pub base_scale: f64,
    pub centre_ratio: Point,
}

impl Default for MandelbrotConfig {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
            base_scale: DEFAULT_BASE_SCALE,
            centre_ratio: DEFAULT_CENTRE_RATIO,
        }
    }
}

impl MandelbrotConfig {
    /// Clamps malformed values to safe ones instead of failing.
    #[must_use]
    pub fn sanitized(self) -> Self {
        let defaults = Self::default();

        let base_scale = if self.base_scale.is_finite() && self.base_scale > 0.0 {
            self.base_scale
        } else {
            defaults.base_scale
        };

        let centre_ratio = if self.centre_ratio.x.is_finite() && self.centre_ratio.y.is_finite() {
            self.centre_ratio
        } else {
            defaults.centre_ratio
        };

        Self {
            max_iterations: self.max_iterations.max(1),
            base_scale,
            centre_ratio,
        }
    }
}
