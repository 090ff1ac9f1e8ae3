use crate::core::actions::cancellation::CancelToken;
use crate::core::actions::progressive_scan::ports::{ColourMap, FractalAlgorithm, PaintSurface};
use crate::core::data::point::Point;
use crate::core::data::raster_size::RasterSize;
use crate::core::data::viewport::Viewport;
use crate::core::util::map_to_complex_plane::map_to_complex_plane;
use crate::core::util::plane_calibration::PlaneCalibration;

/// Pixels evaluated per tick unless configured otherwise.
pub const DRAW_ITERATION_STEP: usize = 4 * 32 * 32 * 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScanState {
    #[default]
    Idle,
    Scanning,
    Completed,
    Cancelled,
}

impl ScanState {
    #[must_use]
    pub fn is_finished(self) -> bool {
        matches!(self, Self::Completed | Self::Cancelled)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScanCursor {
    pub x: u32,
    pub y: u32,
}

impl ScanCursor {
    /// Moves one column right, wrapping to the next row at `width`.
    fn advance(&mut self, width: u32) {
        self.x += 1;

        if self.x >= width {
            self.x = 0;
            self.y += 1;
        }
    }
}

/// One row-major walk over the raster for a fixed viewport.
#[derive(Debug, Clone)]
pub struct ScanPass {
    viewport: Viewport,
    raster: RasterSize,
    calibration: PlaneCalibration,
    cursor: ScanCursor,
    state: ScanState,
    painted: u64,
}

impl ScanPass {
    #[must_use]
    pub fn new(viewport: Viewport, raster: RasterSize, calibration: PlaneCalibration) -> Self {
        let state = if raster.is_empty() {
            ScanState::Completed
        } else {
            ScanState::Scanning
        };

        Self {
            viewport,
            raster,
            calibration,
            cursor: ScanCursor::default(),
            state,
            painted: 0,
        }
    }

    #[must_use]
    pub fn state(&self) -> ScanState {
        self.state
    }

    #[must_use]
    pub fn cursor(&self) -> ScanCursor {
        self.cursor
    }

    #[must_use]
    pub fn painted(&self) -> u64 {
        self.painted
    }

    #[must_use]
    pub fn raster(&self) -> RasterSize {
        self.raster
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Runs one scheduling tick of at most `batch_size` pixels.
    ///
    /// Cancellation is checked once, before the batch starts.
    pub fn tick<K, A, C, S>(
        &mut self,
        batch_size: usize,
        cancel: &K,
        algorithm: &A,
        colour_map: &C,
        surface: &mut S,
    ) -> ScanState
    where
        K: CancelToken + ?Sized,
        A: FractalAlgorithm + ?Sized,
        C: ColourMap + ?Sized,
        S: PaintSurface + ?Sized,
    {
        if self.state != ScanState::Scanning {
            return self.state;
        }

        if cancel.is_cancelled() {
            self.state = ScanState::Cancelled;
            return self.state;
        }

        for _ in 0..batch_size.max(1) {
            if self.cursor.y >= self.raster.height {
                break;
            }

            if self.raster.contains(self.cursor.x, self.cursor.y) {
                let pixel = Point::new(f64::from(self.cursor.x), f64::from(self.cursor.y));
                let plane = map_to_complex_plane(pixel, self.viewport, self.raster.width);
                let factor = algorithm.evaluate(self.calibration.to_complex(plane));

                surface.paint_pixel(self.cursor.x, self.cursor.y, colour_map.map(factor));
                self.painted += 1;
            }

            self.cursor.advance(self.raster.width);
        }

        if self.cursor.y >= self.raster.height {
            self.state = ScanState::Completed;
        }

        self.state
    }
}
