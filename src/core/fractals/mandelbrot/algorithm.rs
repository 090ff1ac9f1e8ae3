use crate::core::actions::progressive_scan::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::escape_factor::EscapeFactor;
use crate::core::data::point::Point;

const ESCAPE_RADIUS: f64 = 2.0;

/// Escape-time test for `z -> z² + c`, starting from `z = 0`.
///
/// Returns `i / max_iterations` for the first iteration `i` whose result leaves
/// the radius-2 disc. Points that stay bounded report the last candidate,
/// `(max_iterations - 1) / max_iterations`.
#[must_use]
pub fn evaluate(c: Point, max_iterations: u32) -> EscapeFactor {
    let max_iterations = max_iterations.max(1);
    let mut z = Point::ORIGIN;

    for iteration in 0..max_iterations {
        z = z.complex_square() + c;

        if z.norm() > ESCAPE_RADIUS {
            return EscapeFactor::from_iteration(iteration, max_iterations);
        }
    }

    EscapeFactor::from_iteration(max_iterations - 1, max_iterations)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MandelbrotAlgorithm {
    max_iterations: u32,
}

impl MandelbrotAlgorithm {
    /// A zero iteration budget is raised to one.
    #[must_use]
    pub fn new(max_iterations: u32) -> Self {
        Self {
            max_iterations: max_iterations.max(1),
        }
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }
}

impl FractalAlgorithm for MandelbrotAlgorithm {
    fn evaluate(&self, c: Point) -> EscapeFactor {
        evaluate(c, self.max_iterations)
    }
}
