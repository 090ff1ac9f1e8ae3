use std::time::{Duration, Instant};

use tracing::{debug, info, trace};

use crate::core::actions::cancellation::{CancelToken, LiveGeneration, PassHandle};
use crate::core::actions::progressive_scan::ports::{
    ColourMap, FractalAlgorithm, PaintSurface, TickScheduler,
};
use crate::core::actions::progressive_scan::scan_pass::{ScanPass, ScanState};
use crate::core::data::raster_size::RasterSize;
use crate::core::data::viewport::Viewport;
use crate::core::util::plane_calibration::PlaneCalibration;

/// Painted pixel count against the raster total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Progress {
    pub painted: u64,
    pub total: u64,
}

impl Progress {
    /// Fraction in `[0, 1]`; an empty raster counts as done.
    #[must_use]
    pub fn fraction(&self) -> f64 {
        if self.total == 0 {
            return 1.0;
        }

        self.painted as f64 / self.total as f64
    }
}

struct ActivePass {
    pass: ScanPass,
    handle: PassHandle,
    started: Instant,
}

impl ActivePass {
    fn progress(&self) -> Progress {
        Progress {
            painted: self.pass.painted(),
            total: self.pass.raster().pixel_count(),
        }
    }
}

/// Time-sliced renderer that paints one batch of pixels per host tick.
///
/// At most one pass is live. Starting a pass, calling [`cancel`](Self::cancel)
/// or dropping the renderer retires the previous one before it paints again.
pub struct ProgressiveRenderer<A, C, T> {
    algorithm: A,
    colour_map: C,
    scheduler: T,
    batch_size: usize,
    live: LiveGeneration,
    active: Option<ActivePass>,
    last_state: ScanState,
    last_progress: Progress,
    last_duration: Option<Duration>,
}

impl<A, C, T> ProgressiveRenderer<A, C, T>
where
    A: FractalAlgorithm,
    C: ColourMap,
    T: TickScheduler,
{
    /// A zero `batch_size` is raised to one.
    pub fn new(algorithm: A, colour_map: C, scheduler: T, batch_size: usize) -> Self {
        Self {
            algorithm,
            colour_map,
            scheduler,
            batch_size: batch_size.max(1),
            live: LiveGeneration::new(),
            active: None,
            last_state: ScanState::Idle,
            last_progress: Progress::default(),
            last_duration: None,
        }
    }

    /// Cancels the live pass and begins a new one at the top-left pixel.
    ///
    /// Returns `None`, leaving the renderer idle, when `raster` is empty.
    pub fn start_pass(
        &mut self,
        viewport: Viewport,
        raster: RasterSize,
        calibration: PlaneCalibration,
    ) -> Option<PassHandle> {
        self.cancel();

        if raster.is_empty() {
            debug!(width = raster.width, height = raster.height, "empty raster, nothing to scan");
            self.last_state = ScanState::Idle;
            self.last_progress = Progress::default();
            return None;
        }

        let handle = self.live.begin();

        info!(
            generation = handle.generation(),
            width = raster.width,
            height = raster.height,
            x = viewport.x(),
            y = viewport.y(),
            view_width = viewport.width(),
            view_height = viewport.height(),
            "scan pass started"
        );

        self.active = Some(ActivePass {
            pass: ScanPass::new(viewport, raster, calibration),
            handle: handle.clone(),
            started: Instant::now(),
        });
        self.last_state = ScanState::Scanning;
        self.scheduler.request_tick();

        Some(handle)
    }

    /// Retires the live pass, if any. Calling it again is a no-op.
    pub fn cancel(&mut self) {
        if let Some(active) = self.active.take() {
            active.handle.cancel();
            self.retire(&active, ScanState::Cancelled);
        }
    }

    /// Advances the live pass by one batch.
    pub fn tick<S>(&mut self, surface: &mut S) -> ScanState
    where
        S: PaintSurface + ?Sized,
    {
        let Some(active) = self.active.as_mut() else {
            return self.last_state;
        };

        let state = active.pass.tick(
            self.batch_size,
            &active.handle,
            &self.algorithm,
            &self.colour_map,
            surface,
        );

        trace!(
            generation = active.handle.generation(),
            cursor_x = active.pass.cursor().x,
            cursor_y = active.pass.cursor().y,
            ?state,
            "scan tick"
        );

        match state {
            ScanState::Scanning => self.scheduler.request_tick(),
            ScanState::Completed | ScanState::Cancelled => {
                if let Some(finished) = self.active.take() {
                    self.retire(&finished, state);
                }
            }
            ScanState::Idle => {}
        }

        state
    }

    fn retire(&mut self, finished: &ActivePass, state: ScanState) {
        let elapsed = finished.started.elapsed();
        let progress = finished.progress();

        match state {
            ScanState::Completed => {
                info!(
                    generation = finished.handle.generation(),
                    painted = progress.painted,
                    elapsed_ms = elapsed.as_secs_f64() * 1000.0,
                    "scan pass completed"
                );
                self.last_duration = Some(elapsed);
            }
            _ => {
                debug!(
                    generation = finished.handle.generation(),
                    painted = progress.painted,
                    total = progress.total,
                    "scan pass cancelled"
                );
            }
        }

        self.last_state = state;
        self.last_progress = progress;
    }

    #[must_use]
    pub fn state(&self) -> ScanState {
        match &self.active {
            Some(active) if active.handle.is_cancelled() => ScanState::Cancelled,
            Some(active) => active.pass.state(),
            None => self.last_state,
        }
    }

    #[must_use]
    pub fn progress(&self) -> Progress {
        self.active
            .as_ref()
            .map_or(self.last_progress, ActivePass::progress)
    }

    /// Wall-clock time of the most recent completed pass.
    #[must_use]
    pub fn last_pass_duration(&self) -> Option<Duration> {
        self.last_duration
    }

    #[must_use]
    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    #[must_use]
    pub fn algorithm(&self) -> &A {
        &self.algorithm
    }

    #[must_use]
    pub fn colour_map(&self) -> &C {
        &self.colour_map
    }

    #[must_use]
    pub fn scheduler(&self) -> &T {
        &self.scheduler
    }
}

impl<A, C, T> Drop for ProgressiveRenderer<A, C, T> {
    fn drop(&mut self) {
        if let Some(active) = self.active.take() {
            active.handle.cancel();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actions::progressive_scan::sync_driver::{
        SynchronousTicks, drive_to_completion,
    };
    use crate::core::data::colour::Colour;
    use crate::core::data::pixel_buffer::PixelBuffer;
    use crate::core::data::point::Point;
    use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
    use crate::core::fractals::mandelbrot::colour_map::HueSweep;

    type TestRenderer = ProgressiveRenderer<MandelbrotAlgorithm, HueSweep, SynchronousTicks>;

    fn renderer(batch_size: usize) -> TestRenderer {
        ProgressiveRenderer::new(
            MandelbrotAlgorithm::new(50),
            HueSweep::new(),
            SynchronousTicks::new(),
            batch_size,
        )
    }

    fn calibration() -> PlaneCalibration {
        PlaneCalibration::new(Point::new(12.0, 8.0), 0.1)
    }

    fn raster() -> RasterSize {
        RasterSize::new(20, 16)
    }

    #[test]
    fn starting_a_pass_requests_a_tick() {
        let mut renderer = renderer(64);

        let handle = renderer.start_pass(Viewport::default_for_raster(raster()), raster(), calibration());

        assert!(handle.is_some());
        assert_eq!(renderer.state(), ScanState::Scanning);
        assert_eq!(renderer.scheduler().pending(), 1);
    }

    #[test]
    fn pass_runs_to_completion_and_stops_requesting_ticks() {
        let mut renderer = renderer(64);
        let mut surface = PixelBuffer::new(raster());

        renderer.start_pass(Viewport::default_for_raster(raster()), raster(), calibration());
        let state = drive_to_completion(&mut renderer, &mut surface);

        assert_eq!(state, ScanState::Completed);
        assert_eq!(renderer.scheduler().pending(), 0);
        assert_eq!(renderer.progress(), Progress { painted: 320, total: 320 });
        assert!(renderer.last_pass_duration().is_some());
        assert!(surface.pixel(19, 15).is_some_and(|colour| colour != Colour::BLACK));
    }

    #[test]
    fn completed_pass_matches_direct_evaluation() {
        let mut renderer = renderer(7);
        let mut surface = PixelBuffer::new(raster());
        let viewport = Viewport::default_for_raster(raster());

        renderer.start_pass(viewport, raster(), calibration());
        drive_to_completion(&mut renderer, &mut surface);

        let algorithm = MandelbrotAlgorithm::new(50);
        let colour_map = HueSweep::new();
        for (x, y) in [(0, 0), (12, 8), (19, 15), (5, 11)] {
            let plane = crate::core::util::map_to_complex_plane::map_to_complex_plane(
                Point::new(f64::from(x), f64::from(y)),
                viewport,
                raster().width,
            );
            let expected = colour_map.map(algorithm.evaluate(calibration().to_complex(plane)));

            assert_eq!(surface.pixel(x, y), Some(expected));
        }
    }

    #[test]
    fn new_pass_cancels_the_previous_one() {
        let mut renderer = renderer(10);
        let mut surface = PixelBuffer::new(raster());

        let first = renderer.start_pass(Viewport::default_for_raster(raster()), raster(), calibration());
        renderer.tick(&mut surface);
        let second = renderer.start_pass(Viewport::default_for_raster(raster()), raster(), calibration());

        assert!(first.is_some_and(|handle| handle.is_cancelled()));
        assert!(second.is_some_and(|handle| handle.is_live()));
        assert_eq!(renderer.progress().painted, 0);
    }

    #[test]
    fn cancel_is_idempotent_and_leaves_renderer_cancelled() {
        let mut renderer = renderer(10);
        let mut surface = PixelBuffer::new(raster());

        renderer.start_pass(Viewport::default_for_raster(raster()), raster(), calibration());
        renderer.tick(&mut surface);
        renderer.cancel();
        renderer.cancel();

        assert_eq!(renderer.state(), ScanState::Cancelled);
        assert_eq!(renderer.tick(&mut surface), ScanState::Cancelled);
        assert_eq!(renderer.progress().painted, 10);
    }

    #[test]
    fn external_handle_cancel_stops_painting_at_next_tick() {
        let mut renderer = renderer(10);
        let mut surface = PixelBuffer::new(raster());

        let handle = renderer.start_pass(Viewport::default_for_raster(raster()), raster(), calibration());
        renderer.tick(&mut surface);
        if let Some(handle) = handle {
            handle.cancel();
        }

        assert_eq!(renderer.state(), ScanState::Cancelled);
        assert_eq!(renderer.tick(&mut surface), ScanState::Cancelled);
        assert_eq!(surface.pixel(10, 0), Some(Colour::BLACK));
        assert_eq!(renderer.progress().painted, 10);
    }

    #[test]
    fn empty_raster_leaves_renderer_idle() {
        let mut renderer = renderer(10);

        let handle = renderer.start_pass(
            Viewport::default_for_raster(RasterSize::new(0, 0)),
            RasterSize::new(0, 0),
            calibration(),
        );

        assert!(handle.is_none());
        assert_eq!(renderer.state(), ScanState::Idle);
        assert_eq!(renderer.scheduler().pending(), 0);
    }

    #[test]
    fn dropping_the_renderer_cancels_the_live_pass() {
        let mut renderer = renderer(10);

        let handle = renderer.start_pass(Viewport::default_for_raster(raster()), raster(), calibration());
        drop(renderer);

        assert!(handle.is_some_and(|handle| handle.is_cancelled()));
    }

    #[test]
    fn zero_batch_size_is_clamped() {
        assert_eq!(renderer(0).batch_size(), 1);
    }

    #[test]
    fn progress_fraction_handles_empty_total() {
        assert_eq!(Progress::default().fraction(), 1.0);
        assert_eq!(Progress { painted: 1, total: 4 }.fraction(), 0.25);
    }
}
