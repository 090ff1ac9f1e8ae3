/// Pixel dimensions of the display surface, in logical pixels.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct RasterSize {
    pub width: u32,
    pub height: u32,
}

impl RasterSize {
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Builds a raster from host-reported floating point dimensions.
    ///
    /// Negative, NaN and fractional sizes are clamped rather than rejected:
    /// a malformed host report yields an empty raster, never a fault.
    #[must_use]
    pub fn from_logical(width: f64, height: f64) -> Self {
        Self {
            width: clamp_dimension(width),
            height: clamp_dimension(height),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    #[must_use]
    pub fn pixel_count(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }

    #[must_use]
    pub fn contains(&self, x: u32, y: u32) -> bool {
        x < self.width && y < self.height
    }

    #[must_use]
    pub fn aspect_ratio(&self) -> Option<f64> {
        if self.is_empty() {
            return None;
        }

        Some(f64::from(self.width) / f64::from(self.height))
    }
}

fn clamp_dimension(value: f64) -> u32 {
    if value.is_nan() || value <= 0.0 {
        return 0;
    }

    value.floor().min(f64::from(u32::MAX)) as u32
}
