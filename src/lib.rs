pub mod controllers;
pub mod core;
#[cfg(feature = "gui")]
pub mod input;
pub mod presenters;

pub use controllers::interactive::{
    ExplorerSettings, InteractionHandler, InteractiveController, NavigationSettings, PanDirection,
    ViewportCommand, ZoomDirection,
};
pub use controllers::snapshot::{SnapshotController, SnapshotError, SnapshotRequest, render_snapshot};
pub use crate::core::data::raster_size::RasterSize;
pub use crate::core::data::viewport::{Viewport, ViewportError};
pub use crate::core::fractals::mandelbrot::mandelbrot_config::MandelbrotConfig;
#[cfg(feature = "gui")]
pub use input::gui::{GuiError, run_gui};
pub use presenters::file::ppm::PpmFilePresenter;
