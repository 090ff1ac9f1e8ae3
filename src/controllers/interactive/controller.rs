use std::time::{Duration, Instant};

use tracing::debug;

use crate::controllers::interactive::resize::ResizeDebouncer;
use crate::controllers::interactive::settings::ExplorerSettings;
use crate::controllers::interactive::types::ViewportCommand;
use crate::controllers::interactive::viewport_controller::ViewportController;
use crate::core::actions::progressive_scan::ports::{ColourMap, PaintSurface, TickScheduler};
use crate::core::actions::progressive_scan::progressive_renderer::{Progress, ProgressiveRenderer};
use crate::core::actions::progressive_scan::scan_pass::ScanState;
use crate::core::data::raster_size::RasterSize;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
use crate::core::fractals::mandelbrot::colour_map::HueSweep;
use crate::core::util::plane_calibration::PlaneCalibration;

pub type MandelbrotRenderer<T> = ProgressiveRenderer<MandelbrotAlgorithm, HueSweep, T>;

/// Ties viewport navigation, resize handling and the progressive renderer
/// together. Any change to what is on screen restarts the scan.
pub struct InteractiveController<T: TickScheduler> {
    settings: ExplorerSettings,
    viewport: ViewportController,
    renderer: MandelbrotRenderer<T>,
    raster: RasterSize,
    pixel_density: f64,
    calibration: Option<PlaneCalibration>,
    resize: ResizeDebouncer,
}

impl<T: TickScheduler> InteractiveController<T> {
    /// Mounts on `raster` and starts the first pass.
    pub fn new(settings: ExplorerSettings, raster: RasterSize, scheduler: T) -> Self {
        let settings = settings.sanitized();
        let renderer = ProgressiveRenderer::new(
            MandelbrotAlgorithm::new(settings.mandelbrot.max_iterations),
            HueSweep::new(),
            scheduler,
            settings.batch_size,
        );

        let mut controller = Self {
            settings,
            viewport: ViewportController::new(Viewport::default_for_raster(raster), settings.navigation),
            renderer,
            raster,
            pixel_density: 1.0,
            calibration: None,
            resize: ResizeDebouncer::new(settings.resize_settle),
        };

        controller.recalibrate();
        controller.restart();
        controller
    }

    /// Physical pixels per raster pixel of the surface being painted.
    #[must_use]
    pub fn with_pixel_density(mut self, pixel_density: f64) -> Self {
        self.pixel_density = pixel_density;
        self
    }

    #[must_use]
    pub fn pixel_density(&self) -> f64 {
        self.pixel_density
    }

    /// Applies one navigation command, restarting the scan if the view moved.
    ///
    /// `Reset` also re-anchors the plane on the current raster.
    pub fn apply(&mut self, command: ViewportCommand) -> bool {
        let recalibrated = matches!(command, ViewportCommand::Reset) && self.recalibrate();
        let changed = self.viewport.apply(command, self.raster.width) || recalibrated;

        if changed {
            self.restart();
        }

        changed
    }

    pub fn notify_resize(&mut self, raster: RasterSize, now: Instant) {
        self.resize.notify(raster, now);
    }

    #[must_use]
    pub fn resize_deadline(&self) -> Option<Instant> {
        self.resize.deadline()
    }

    /// Commits a settled resize: rescales `surface`, makes the new raster-sized
    /// view the reset target and restarts the scan.
    ///
    /// Coming back from an empty raster there is no meaningful view to keep, so
    /// the new home view is shown directly.
    pub fn poll_resize<S>(&mut self, now: Instant, surface: &mut S, pixel_density: f64) -> bool
    where
        S: PaintSurface + ?Sized,
    {
        let Some(raster) = self.resize.poll(now) else {
            return false;
        };

        if raster == self.raster && pixel_density == self.pixel_density {
            debug!(width = raster.width, height = raster.height, "resize settled on current size");
            return false;
        }

        debug!(
            width = raster.width,
            height = raster.height,
            pixel_density,
            "resize settled"
        );

        let was_empty = self.raster.is_empty();

        surface.clear_and_rescale(raster, pixel_density);
        self.raster = raster;
        self.pixel_density = pixel_density;
        self.viewport.set_home(Viewport::default_for_raster(raster));

        if was_empty {
            self.viewport.reset();
            self.recalibrate();
        }

        self.restart();

        true
    }

    pub fn tick<S>(&mut self, surface: &mut S) -> ScanState
    where
        S: PaintSurface + ?Sized,
    {
        self.renderer.tick(surface)
    }

    /// Stops painting. A later command or resize starts a new pass.
    pub fn shutdown(&mut self) {
        self.renderer.cancel();
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport.viewport()
    }

    #[must_use]
    pub fn home(&self) -> Viewport {
        self.viewport.home()
    }

    #[must_use]
    pub fn raster(&self) -> RasterSize {
        self.raster
    }

    #[must_use]
    pub fn scan_state(&self) -> ScanState {
        self.renderer.state()
    }

    #[must_use]
    pub fn progress(&self) -> Progress {
        self.renderer.progress()
    }

    #[must_use]
    pub fn last_pass_duration(&self) -> Option<Duration> {
        self.renderer.last_pass_duration()
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.renderer.algorithm().max_iterations()
    }

    #[must_use]
    pub fn colour_map_name(&self) -> &str {
        self.renderer.colour_map().display_name()
    }

    #[must_use]
    pub fn calibration(&self) -> Option<PlaneCalibration> {
        self.calibration
    }

    #[must_use]
    pub fn settings(&self) -> &ExplorerSettings {
        &self.settings
    }

    #[must_use]
    pub fn scheduler(&self) -> &T {
        self.renderer.scheduler()
    }

    // A plain resize keeps the anchor so the plane never shifts under the
    // current viewport. Only mounting, reset and recovery from an empty
    // raster move it.
    fn recalibrate(&mut self) -> bool {
        if self.raster.is_empty() {
            return false;
        }

        let next = Some(PlaneCalibration::for_raster(self.raster, &self.settings.mandelbrot));
        let changed = self.calibration != next;
        self.calibration = next;

        changed
    }

    fn restart(&mut self) {
        match self.calibration {
            Some(calibration) => {
                self.renderer
                    .start_pass(self.viewport.viewport(), self.raster, calibration);
            }
            None => self.renderer.cancel(),
        }
    }
}
