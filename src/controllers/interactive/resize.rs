use std::time::{Duration, Instant};

use crate::controllers::interactive::settings::MIN_RESIZE_SETTLE;
use crate::core::data::raster_size::RasterSize;

/// Holds back raster-size changes until they stop arriving for `settle`.
#[derive(Debug, Clone)]
pub struct ResizeDebouncer {
    settle: Duration,
    pending: Option<(RasterSize, Instant)>,
}

impl ResizeDebouncer {
    #[must_use]
    pub fn new(settle: Duration) -> Self {
        Self {
            settle: settle.max(MIN_RESIZE_SETTLE),
            pending: None,
        }
    }

    #[must_use]
    pub fn settle(&self) -> Duration {
        self.settle
    }

    /// Records the latest size and restarts the quiet period.
    pub fn notify(&mut self, raster: RasterSize, now: Instant) {
        self.pending = Some((raster, now + self.settle));
    }

    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.map(|(_, deadline)| deadline)
    }

    /// Hands out the last notified size once its quiet period has elapsed.
    pub fn poll(&mut self, now: Instant) -> Option<RasterSize> {
        match self.pending {
            Some((raster, deadline)) if now >= deadline => {
                self.pending = None;
                Some(raster)
            }
            _ => None,
        }
    }
}
