use thiserror::Error;

#[derive(Debug, Error)]
pub enum GuiError {
    #[error("event loop error: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),
    #[error("failed to create window: {0}")]
    Window(#[from] winit::error::OsError),
    #[error("pixels error: {0}")]
    Pixels(#[from] pixels::Error),
    #[error("failed to resize pixels texture: {0}")]
    Texture(#[from] pixels::TextureError),
}
