use winit::keyboard::{Key, NamedKey};

use crate::controllers::interactive::{PanDirection, ViewportCommand, ZoomDirection};

/// Arrows pan, `[` zooms out, `]` zooms in and `=` resets.
#[must_use]
pub fn command_for_key(key: &Key) -> Option<ViewportCommand> {
    match key {
        Key::Named(NamedKey::ArrowLeft) => Some(ViewportCommand::Pan(PanDirection::Left)),
        Key::Named(NamedKey::ArrowRight) => Some(ViewportCommand::Pan(PanDirection::Right)),
        Key::Named(NamedKey::ArrowUp) => Some(ViewportCommand::Pan(PanDirection::Up)),
        Key::Named(NamedKey::ArrowDown) => Some(ViewportCommand::Pan(PanDirection::Down)),
        Key::Character(text) => match text.as_str() {
            "[" => Some(ViewportCommand::Zoom(ZoomDirection::Out)),
            "]" => Some(ViewportCommand::Zoom(ZoomDirection::In)),
            "=" => Some(ViewportCommand::Reset),
            _ => None,
        },
        _ => None,
    }
}
