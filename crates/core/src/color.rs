//! Color component types and pure conversions between them.
//!
//! Four representations are supported: normalized RGBA ([`Rgba`]), byte RGBA
//! ([`Rgba255`]), HSB plus alpha ([`Hsba`]) and grayscale plus alpha
//! ([`Grayscale`]). Every channel is clamped when a value is constructed, so
//! the conversions below never see out-of-range input. Channel arithmetic
//! goes through [`crate::num`] so byte/float boundaries share one rounding
//! and clamping contract.

use crate::hex::{decode_hex, hex_string};
use crate::num::{Convert, ConvertFrom};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Scale between a normalized channel and a byte channel.
const BYTE_SCALE: f64 = 255.0;

/// Clamps to [0, 1], mapping NaN to 0.
fn unit(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

fn opaque() -> f64 {
    1.0
}

/// RGBA color with every channel in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "RgbaFields")]
pub struct Rgba {
    red: f64,
    green: f64,
    blue: f64,
    alpha: f64,
}

#[derive(Deserialize)]
struct RgbaFields {
    red: f64,
    green: f64,
    blue: f64,
    #[serde(default = "opaque")]
    alpha: f64,
}

impl From<RgbaFields> for Rgba {
    fn from(f: RgbaFields) -> Self {
        Rgba::new(f.red, f.green, f.blue, f.alpha)
    }
}

impl Rgba {
    /// Opaque black.
    pub const BLACK: Rgba = Rgba {
        red: 0.0,
        green: 0.0,
        blue: 0.0,
        alpha: 1.0,
    };
    /// Opaque white.
    pub const WHITE: Rgba = Rgba {
        red: 1.0,
        green: 1.0,
        blue: 1.0,
        alpha: 1.0,
    };
    /// Fully transparent black.
    pub const CLEAR: Rgba = Rgba {
        red: 0.0,
        green: 0.0,
        blue: 0.0,
        alpha: 0.0,
    };

    /// Creates a color, clamping each channel to [0, 1] (NaN becomes 0).
    pub fn new(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red: unit(red),
            green: unit(green),
            blue: unit(blue),
            alpha: unit(alpha),
        }
    }

    /// Red channel in [0, 1].
    pub fn red(&self) -> f64 {
        self.red
    }

    /// Green channel in [0, 1].
    pub fn green(&self) -> f64 {
        self.green
    }

    /// Blue channel in [0, 1].
    pub fn blue(&self) -> f64 {
        self.blue
    }

    /// Alpha in [0, 1].
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Returns a copy with the red channel replaced (clamped).
    pub fn with_red(self, red: f64) -> Self {
        Self {
            red: unit(red),
            ..self
        }
    }

    /// Returns a copy with the green channel replaced (clamped).
    pub fn with_green(self, green: f64) -> Self {
        Self {
            green: unit(green),
            ..self
        }
    }

    /// Returns a copy with the blue channel replaced (clamped).
    pub fn with_blue(self, blue: f64) -> Self {
        Self {
            blue: unit(blue),
            ..self
        }
    }

    /// Returns a copy with alpha replaced (clamped).
    pub fn with_alpha(self, alpha: f64) -> Self {
        Self {
            alpha: unit(alpha),
            ..self
        }
    }
}

/// RGB bytes in [0, 255] plus a normalized alpha in [0, 1].
///
/// Serializes as a hex string: `"#RRGGBB"` when opaque, `"#AARRGGBB"`
/// otherwise. Alpha goes through 8-bit quantization on that path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba255 {
    red: u8,
    green: u8,
    blue: u8,
    alpha: f64,
}

impl Rgba255 {
    /// Creates a color from byte channels; alpha is clamped to [0, 1].
    pub fn new(red: u8, green: u8, blue: u8, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha: unit(alpha),
        }
    }

    /// Creates a color from channels of any integer type, saturating each
    /// one into [0, 255].
    ///
    /// `Rgba255::clamped(300, -5, 48, 1.0)` is `(255, 0, 48)`.
    pub fn clamped<T>(red: T, green: T, blue: T, alpha: f64) -> Self
    where
        u8: ConvertFrom<T>,
    {
        Self::new(
            u8::convert_from(red),
            u8::convert_from(green),
            u8::convert_from(blue),
            alpha,
        )
    }

    /// Opaque color from byte channels.
    pub fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self::new(red, green, blue, 1.0)
    }

    /// Red byte.
    pub fn red(&self) -> u8 {
        self.red
    }

    /// Green byte.
    pub fn green(&self) -> u8 {
        self.green
    }

    /// Blue byte.
    pub fn blue(&self) -> u8 {
        self.blue
    }

    /// Alpha in [0, 1].
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Alpha quantized to a byte, rounding to nearest.
    pub fn alpha_byte(&self) -> u8 {
        (self.alpha * BYTE_SCALE).convert()
    }

    /// Returns a copy with the red byte replaced.
    pub fn with_red(self, red: u8) -> Self {
        Self { red, ..self }
    }

    /// Returns a copy with the green byte replaced.
    pub fn with_green(self, green: u8) -> Self {
        Self { green, ..self }
    }

    /// Returns a copy with the blue byte replaced.
    pub fn with_blue(self, blue: u8) -> Self {
        Self { blue, ..self }
    }

    /// Returns a copy with alpha replaced (clamped).
    pub fn with_alpha(self, alpha: f64) -> Self {
        Self {
            alpha: unit(alpha),
            ..self
        }
    }
}

impl Serialize for Rgba255 {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let include_alpha = self.alpha_byte() != u8::MAX;
        serializer.serialize_str(&hex_string(self, include_alpha, false))
    }
}

impl<'de> Deserialize<'de> for Rgba255 {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        decode_hex(&s, 1.0).map_err(serde::de::Error::custom)
    }
}

/// Hue, saturation, brightness and alpha, each in [0, 1].
///
/// Hue is a fraction of a full turn: `0.0` and `1.0` are both red.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "HsbaFields")]
pub struct Hsba {
    hue: f64,
    saturation: f64,
    brightness: f64,
    alpha: f64,
}

#[derive(Deserialize)]
struct HsbaFields {
    hue: f64,
    saturation: f64,
    brightness: f64,
    #[serde(default = "opaque")]
    alpha: f64,
}

impl From<HsbaFields> for Hsba {
    fn from(f: HsbaFields) -> Self {
        Hsba::new(f.hue, f.saturation, f.brightness, f.alpha)
    }
}

impl Hsba {
    /// Creates an HSBA color, clamping each component to [0, 1].
    pub fn new(hue: f64, saturation: f64, brightness: f64, alpha: f64) -> Self {
        Self {
            hue: unit(hue),
            saturation: unit(saturation),
            brightness: unit(brightness),
            alpha: unit(alpha),
        }
    }

    /// Hue as a fraction of a full turn.
    pub fn hue(&self) -> f64 {
        self.hue
    }

    /// Saturation in [0, 1].
    pub fn saturation(&self) -> f64 {
        self.saturation
    }

    /// Brightness (HSB value) in [0, 1].
    pub fn brightness(&self) -> f64 {
        self.brightness
    }

    /// Alpha in [0, 1].
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Returns a copy with the hue replaced (clamped).
    pub fn with_hue(self, hue: f64) -> Self {
        Self {
            hue: unit(hue),
            ..self
        }
    }

    /// Returns a copy with the saturation replaced (clamped).
    pub fn with_saturation(self, saturation: f64) -> Self {
        Self {
            saturation: unit(saturation),
            ..self
        }
    }

    /// Returns a copy with the brightness replaced (clamped).
    pub fn with_brightness(self, brightness: f64) -> Self {
        Self {
            brightness: unit(brightness),
            ..self
        }
    }

    /// Returns a copy with alpha replaced (clamped).
    pub fn with_alpha(self, alpha: f64) -> Self {
        Self {
            alpha: unit(alpha),
            ..self
        }
    }
}

/// Gray level and alpha, each in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "GrayscaleFields")]
pub struct Grayscale {
    white: f64,
    alpha: f64,
}

#[derive(Deserialize)]
struct GrayscaleFields {
    white: f64,
    #[serde(default = "opaque")]
    alpha: f64,
}

impl From<GrayscaleFields> for Grayscale {
    fn from(f: GrayscaleFields) -> Self {
        Grayscale::new(f.white, f.alpha)
    }
}

impl Grayscale {
    /// Creates a gray color, clamping both components to [0, 1].
    pub fn new(white: f64, alpha: f64) -> Self {
        Self {
            white: unit(white),
            alpha: unit(alpha),
        }
    }

    /// Gray level: 0 is black, 1 is white.
    pub fn white(&self) -> f64 {
        self.white
    }

    /// Alpha in [0, 1].
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Returns a copy with the gray level replaced (clamped).
    pub fn with_white(self, white: f64) -> Self {
        Self {
            white: unit(white),
            ..self
        }
    }

    /// Returns a copy with alpha replaced (clamped).
    pub fn with_alpha(self, alpha: f64) -> Self {
        Self {
            alpha: unit(alpha),
            ..self
        }
    }
}

/// Converts byte channels to normalized channels (`channel / 255`).
pub fn normalized_from_byte(c: Rgba255) -> Rgba {
    let scale = |channel: u8| channel.convert::<f64>() / BYTE_SCALE;
    Rgba::new(scale(c.red), scale(c.green), scale(c.blue), c.alpha)
}

/// Converts normalized channels to bytes (`round(channel * 255)`).
pub fn byte_from_normalized(c: Rgba) -> Rgba255 {
    let scale = |channel: f64| (channel * BYTE_SCALE).convert::<u8>();
    Rgba255::new(scale(c.red), scale(c.green), scale(c.blue), c.alpha)
}

/// Converts RGBA to HSBA using the hexcone model.
///
/// Achromatic colors (all channels equal) get hue 0 and saturation 0.
/// The resulting hue is always below 1.
pub fn hsba_from_rgba(c: Rgba) -> Hsba {
    let (r, g, b) = (c.red, c.green, c.blue);
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let saturation = if max == 0.0 { 0.0 } else { delta / max };

    let sextant = if delta == 0.0 {
        0.0
    } else if max == r {
        ((g - b) / delta).rem_euclid(6.0)
    } else if max == g {
        (b - r) / delta + 2.0
    } else {
        (r - g) / delta + 4.0
    };

    // rem_euclid can round a tiny negative up to exactly 6.0.
    let hue = sextant / 6.0;
    let hue = if hue >= 1.0 { 0.0 } else { hue };

    Hsba::new(hue, saturation, max, c.alpha)
}

/// Converts HSBA back to RGBA.
pub fn rgba_from_hsba(c: Hsba) -> Rgba {
    let (s, v) = (c.saturation, c.brightness);
    let h = (c.hue * 6.0).rem_euclid(6.0);
    let sector = h.floor();
    let f = h - sector;

    let p = v * (1.0 - s);
    let q = v * (1.0 - f * s);
    let t = v * (1.0 - (1.0 - f) * s);

    let (r, g, b) = match sector.convert::<u8>() {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };

    Rgba::new(r, g, b, c.alpha)
}

/// Rec. 601 luma weights.
const LUMA_WEIGHTS: [f64; 3] = [0.299, 0.587, 0.114];

/// Converts RGBA to grayscale using Rec. 601 luma.
pub fn grayscale_from_rgba(c: Rgba) -> Grayscale {
    let [wr, wg, wb] = LUMA_WEIGHTS;
    Grayscale::new(wr * c.red + wg * c.green + wb * c.blue, c.alpha)
}

/// Expands a gray level to equal RGB channels.
pub fn rgba_from_grayscale(c: Grayscale) -> Rgba {
    Rgba::new(c.white, c.white, c.white, c.alpha)
}
