use crate::core::data::point::Point;
use crate::core::data::viewport::Viewport;

/// Maps a raster pixel into the viewport's plane coordinates.
///
/// A single scale, derived from the viewport width, is applied to both axes so
/// the image is never stretched when the raster and viewport aspect ratios
/// differ. Raster height is not an input.
#[must_use]
pub fn map_to_complex_plane(pixel: Point, viewport: Viewport, raster_width: u32) -> Point {
    let scale = viewport.width() / f64::from(raster_width.max(1));

    viewport.origin() + pixel.scale(scale)
}
