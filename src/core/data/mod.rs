pub mod colour;
pub mod escape_factor;
pub mod pixel_buffer;
pub mod point;
pub mod raster_size;
pub mod viewport;
