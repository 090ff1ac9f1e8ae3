/// Normalized iteration count at divergence, in `[0, 1)`.
///
/// Points that never diverge report the last candidate, `(max - 1) / max`.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd, Default)]
pub struct EscapeFactor(f64);

impl EscapeFactor {
    #[must_use]
    pub fn from_iteration(iteration: u32, max_iterations: u32) -> Self {
        let max_iterations = max_iterations.max(1);
        let iteration = iteration.min(max_iterations - 1);

        Self(f64::from(iteration) / f64::from(max_iterations))
    }

    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }
}
