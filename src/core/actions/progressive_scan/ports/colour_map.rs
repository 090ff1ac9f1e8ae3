use crate::core::data::colour::Colour;
use crate::core::data::escape_factor::EscapeFactor;

pub trait ColourMap {
    fn map(&self, factor: EscapeFactor) -> Colour;

    fn display_name(&self) -> &str;
}
