use crate::core::actions::progressive_scan::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::data::escape_factor::EscapeFactor;

const START_HUE: f64 = 240.0;

/// Sweeps hue from blue (fast divergence) to red (inside or slow divergence)
/// at full saturation and mid lightness.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HueSweep {
    saturation: f64,
    lightness: f64,
}

impl Default for HueSweep {
    fn default() -> Self {
        Self {
            saturation: 1.0,
            lightness: 0.5,
        }
    }
}

impl HueSweep {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Hue in degrees for `factor`: 240 at 0, falling linearly towards 0 at 1.
    #[must_use]
    pub fn hue(factor: EscapeFactor) -> f64 {
        START_HUE - factor.value().clamp(0.0, 1.0) * START_HUE
    }
}

impl ColourMap for HueSweep {
    fn map(&self, factor: EscapeFactor) -> Colour {
        hsl_to_rgb(Self::hue(factor), self.saturation, self.lightness)
    }

    fn display_name(&self) -> &str {
        "Hue sweep"
    }
}

/// `hue` in degrees, `saturation` and `lightness` in `[0, 1]`.
#[must_use]
pub fn hsl_to_rgb(hue: f64, saturation: f64, lightness: f64) -> Colour {
    let hue = hue.rem_euclid(360.0);
    let chroma = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
    let h_prime = hue / 60.0;
    let x = chroma * (1.0 - (h_prime % 2.0 - 1.0).abs());

    let (r1, g1, b1) = if h_prime < 1.0 {
        (chroma, x, 0.0)
    } else if h_prime < 2.0 {
        (x, chroma, 0.0)
    } else if h_prime < 3.0 {
        (0.0, chroma, x)
    } else if h_prime < 4.0 {
        (0.0, x, chroma)
    } else if h_prime < 5.0 {
        (x, 0.0, chroma)
    } else {
        (chroma, 0.0, x)
    };

    let m = lightness - chroma / 2.0;

    Colour {
        r: to_channel(r1 + m),
        g: to_channel(g1 + m),
        b: to_channel(b1 + m),
    }
}

fn to_channel(value: f64) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}
