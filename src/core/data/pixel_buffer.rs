use crate::core::actions::progressive_scan::ports::paint_surface::PaintSurface;
use crate::core::data::colour::Colour;
use crate::core::data::raster_size::RasterSize;
use thiserror::Error;

fn raster_to_buffer_size(raster: RasterSize) -> usize {
    (raster.pixel_count() * 3) as usize
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PixelBufferError {
    #[error("pixel at x:{x}, y:{y} outside of {}x{} raster", .raster.width, .raster.height)]
    PixelOutsideBounds { x: u32, y: u32, raster: RasterSize },
    #[error("raster size {raster_size} does not match buffer size {buffer_size}")]
    BoundsMismatch {
        raster_size: usize,
        buffer_size: usize,
    },
}

pub type PixelBufferData = Vec<u8>;

/// In-memory RGB raster, three bytes per pixel, row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    raster: RasterSize,
    buffer: PixelBufferData,
}

impl PixelBuffer {
    #[must_use]
    pub fn new(raster: RasterSize) -> Self {
        Self {
            raster,
            buffer: vec![0; raster_to_buffer_size(raster)],
        }
    }

    pub fn from_data(raster: RasterSize, buffer: PixelBufferData) -> Result<Self, PixelBufferError> {
        let raster_size = raster_to_buffer_size(raster);

        if raster_size != buffer.len() {
            return Err(PixelBufferError::BoundsMismatch {
                raster_size,
                buffer_size: buffer.len(),
            });
        }

        Ok(Self { raster, buffer })
    }

    #[must_use]
    pub fn raster(&self) -> RasterSize {
        self.raster
    }

    #[must_use]
    pub fn buffer(&self) -> &PixelBufferData {
        &self.buffer
    }

    #[must_use]
    pub fn buffer_size(&self) -> usize {
        self.buffer.len()
    }

    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Option<Colour> {
        let index = self.index_of(x, y)?;

        Some(Colour::new(
            self.buffer[index],
            self.buffer[index + 1],
            self.buffer[index + 2],
        ))
    }

    pub fn set_pixel(&mut self, x: u32, y: u32, colour: Colour) -> Result<(), PixelBufferError> {
        let Some(index) = self.index_of(x, y) else {
            return Err(PixelBufferError::PixelOutsideBounds {
                x,
                y,
                raster: self.raster,
            });
        };

        self.buffer[index] = colour.r;
        self.buffer[index + 1] = colour.g;
        self.buffer[index + 2] = colour.b;

        Ok(())
    }

    fn index_of(&self, x: u32, y: u32) -> Option<usize> {
        if !self.raster.contains(x, y) {
            return None;
        }

        let offset = u64::from(y) * u64::from(self.raster.width) + u64::from(x);
        Some((offset * 3) as usize)
    }
}

impl PaintSurface for PixelBuffer {
    fn paint_pixel(&mut self, x: u32, y: u32, colour: Colour) {
        // Out-of-bounds writes from a stale pass are dropped.
        let _ = self.set_pixel(x, y, colour);
    }

    fn clear_and_rescale(&mut self, raster: RasterSize, _pixel_density: f64) {
        self.raster = raster;
        self.buffer.clear();
        self.buffer.resize(raster_to_buffer_size(raster), 0);
    }
}
