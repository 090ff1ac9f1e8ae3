use crate::core::data::escape_factor::EscapeFactor;
use crate::core::data::point::Point;

pub trait FractalAlgorithm {
    /// Evaluates one complex-plane coordinate.
    fn evaluate(&self, c: Point) -> EscapeFactor;
}
