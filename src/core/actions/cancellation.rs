use std::cell::Cell;
use std::rc::Rc;

pub trait CancelToken {
    fn is_cancelled(&self) -> bool;
}

impl<F> CancelToken for F
where
    F: Fn() -> bool,
{
    #[inline]
    fn is_cancelled(&self) -> bool {
        self()
    }
}

/// Shared counter naming the one pass allowed to paint.
#[derive(Debug, Clone, Default)]
pub struct LiveGeneration(Rc<Cell<u64>>);

impl LiveGeneration {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn current(&self) -> u64 {
        self.0.get()
    }

    /// Retires whatever pass is live and hands out a handle for a new one.
    pub fn begin(&self) -> PassHandle {
        let generation = self.0.get().wrapping_add(1);
        self.0.set(generation);

        PassHandle {
            generation,
            live: self.clone(),
        }
    }
}

/// Cancellation handle for one scan pass.
///
/// Cancelling only retires the pass it was issued for; a handle for a
/// superseded pass can never cancel its successor.
#[derive(Debug, Clone)]
pub struct PassHandle {
    generation: u64,
    live: LiveGeneration,
}

impl PassHandle {
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub fn is_live(&self) -> bool {
        self.live.current() == self.generation
    }

    pub fn cancel(&self) {
        if self.is_live() {
            self.live.0.set(self.generation.wrapping_add(1));
        }
    }
}

impl CancelToken for PassHandle {
    #[inline]
    fn is_cancelled(&self) -> bool {
        !self.is_live()
    }
}
