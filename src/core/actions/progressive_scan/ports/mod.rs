pub mod colour_map;
pub mod fractal_algorithm;
pub mod paint_surface;
pub mod tick_scheduler;

pub use colour_map::ColourMap;
pub use fractal_algorithm::FractalAlgorithm;
pub use paint_surface::PaintSurface;
pub use tick_scheduler::TickScheduler;
