//! Interactive exploration: navigation state, pointer handling and the
//! controller that keeps the progressive renderer in step with both.

mod controller;
pub mod interaction;
pub mod resize;
pub mod settings;
mod types;
pub mod viewport_controller;

pub use controller::{InteractiveController, MandelbrotRenderer};
pub use interaction::{DragSelection, InteractionHandler};
pub use settings::{ExplorerSettings, NavigationSettings};
pub use types::{PanDirection, ViewportCommand, ZoomDirection};
