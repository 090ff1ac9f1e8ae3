//! Commands the input adapters hand to the interactive controller.

use crate::core::data::point::Point;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PanDirection {
    Left,
    Right,
    Up,
    Down,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ZoomDirection {
    In,
    Out,
}

/// One user intent against the viewport.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ViewportCommand {
    Pan(PanDirection),
    Zoom(ZoomDirection),
    Reset,
    /// Drag rectangle corners in raster pixels, in any order.
    SelectRegion { start: Point, end: Point },
}
