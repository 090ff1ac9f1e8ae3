use std::path::Path;

use thiserror::Error;
use tracing::info;

use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::actions::progressive_scan::progressive_renderer::ProgressiveRenderer;
use crate::core::actions::progressive_scan::scan_pass::{DRAW_ITERATION_STEP, ScanState};
use crate::core::actions::progressive_scan::sync_driver::{SynchronousTicks, drive_to_completion};
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::raster_size::RasterSize;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
use crate::core::fractals::mandelbrot::colour_map::HueSweep;
use crate::core::fractals::mandelbrot::mandelbrot_config::MandelbrotConfig;
use crate::core::util::plane_calibration::PlaneCalibration;

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("cannot render an empty {}x{} raster", .0.width, .0.height)]
    EmptyRaster(RasterSize),
    #[error("scan pass ended as {0:?}")]
    Incomplete(ScanState),
    #[error("nothing rendered yet")]
    NotRendered,
    #[error("failed to write snapshot: {0}")]
    Io(#[from] std::io::Error),
}

/// Parameters for a single off-screen render.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapshotRequest {
    pub raster: RasterSize,
    /// Defaults to the raster-sized view when absent.
    pub viewport: Option<Viewport>,
    pub mandelbrot: MandelbrotConfig,
    pub batch_size: usize,
}

impl SnapshotRequest {
    #[must_use]
    pub fn new(raster: RasterSize) -> Self {
        Self {
            raster,
            viewport: None,
            mandelbrot: MandelbrotConfig::default(),
            batch_size: DRAW_ITERATION_STEP,
        }
    }
}

/// Runs one full progressive pass synchronously into a fresh buffer.
pub fn render_snapshot(request: &SnapshotRequest) -> Result<PixelBuffer, SnapshotError> {
    if request.raster.is_empty() {
        return Err(SnapshotError::EmptyRaster(request.raster));
    }

    let config = request.mandelbrot.sanitized();
    let viewport = request
        .viewport
        .unwrap_or_else(|| Viewport::default_for_raster(request.raster));
    let calibration = PlaneCalibration::for_raster(request.raster, &config);

    let mut renderer = ProgressiveRenderer::new(
        MandelbrotAlgorithm::new(config.max_iterations),
        HueSweep::new(),
        SynchronousTicks::new(),
        request.batch_size,
    );
    let mut buffer = PixelBuffer::new(request.raster);

    renderer.start_pass(viewport, request.raster, calibration);

    match drive_to_completion(&mut renderer, &mut buffer) {
        ScanState::Completed => Ok(buffer),
        state => Err(SnapshotError::Incomplete(state)),
    }
}

pub struct SnapshotController<P: FilePresenterPort> {
    presenter: P,
    buffer: Option<PixelBuffer>,
}

impl<P: FilePresenterPort> SnapshotController<P> {
    pub fn new(presenter: P) -> Self {
        Self {
            presenter,
            buffer: None,
        }
    }

    pub fn generate(&mut self, request: &SnapshotRequest) -> Result<(), SnapshotError> {
        info!(
            width = request.raster.width,
            height = request.raster.height,
            max_iterations = request.mandelbrot.max_iterations,
            "rendering snapshot"
        );

        self.buffer = Some(render_snapshot(request)?);

        Ok(())
    }

    #[must_use]
    pub fn buffer(&self) -> Option<&PixelBuffer> {
        self.buffer.as_ref()
    }

    pub fn write(&self, filepath: &Path) -> Result<(), SnapshotError> {
        let buffer = self.buffer.as_ref().ok_or(SnapshotError::NotRendered)?;

        self.presenter.present(buffer, filepath)?;
        info!(path = %filepath.display(), "snapshot written");

        Ok(())
    }
}
