use std::cell::Cell;

use crate::core::actions::progressive_scan::ports::{
    ColourMap, FractalAlgorithm, PaintSurface, TickScheduler,
};
use crate::core::actions::progressive_scan::progressive_renderer::ProgressiveRenderer;
use crate::core::actions::progressive_scan::scan_pass::ScanState;

/// Tick scheduler for headless use: it only counts outstanding requests.
#[derive(Debug, Default)]
pub struct SynchronousTicks {
    pending: Cell<usize>,
}

impl SynchronousTicks {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn pending(&self) -> usize {
        self.pending.get()
    }

    /// Consumes one outstanding request, if there is one.
    pub fn take_request(&self) -> bool {
        let pending = self.pending.get();

        if pending == 0 {
            return false;
        }

        self.pending.set(pending - 1);
        true
    }
}

impl TickScheduler for SynchronousTicks {
    fn request_tick(&self) {
        self.pending.set(self.pending.get() + 1);
    }
}

/// Delivers ticks until the renderer stops asking for them.
pub fn drive_to_completion<A, C, S>(
    renderer: &mut ProgressiveRenderer<A, C, SynchronousTicks>,
    surface: &mut S,
) -> ScanState
where
    A: FractalAlgorithm,
    C: ColourMap,
    S: PaintSurface + ?Sized,
{
    while renderer.scheduler().take_request() {
        renderer.tick(surface);
    }

    renderer.state()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn requests_are_counted_and_consumed_once() {
        let ticks = SynchronousTicks::new();

        ticks.request_tick();
        ticks.request_tick();

        assert_eq!(ticks.pending(), 2);
        assert!(ticks.take_request());
        assert!(ticks.take_request());
        assert!(!ticks.take_request());
        assert_eq!(ticks.pending(), 0);
    }
}
