use crate::core::data::colour::Colour;
use crate::core::data::raster_size::RasterSize;

/// The display surface a scan pass paints into.
pub trait PaintSurface {
    fn paint_pixel(&mut self, x: u32, y: u32, colour: Colour);

    /// Drops all painted content and adopts a new raster size.
    ///
    /// `pixel_density` is the number of physical pixels per raster pixel.
    fn clear_and_rescale(&mut self, raster: RasterSize, pixel_density: f64);
}
