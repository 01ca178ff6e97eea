#![deny(unsafe_code)]
//! Core conversions for tint: numeric casts and color component codecs.
//!
//! Provides the clamping/exact numeric conversion traits (`ConvertFrom`,
//! `ExactFrom`, `Convert`), the color types (`Rgba`, `Rgba255`, `Hsba`,
//! `Grayscale`) with conversions between them, the hex codec with short-form
//! support, color operations (blend, lighten, complementary, random), and
//! `HexFormat` output options.

pub mod color;
pub mod error;
pub mod hex;
pub mod num;
pub mod ops;
pub mod options;
pub mod prng;

pub use color::{Grayscale, Hsba, Rgba, Rgba255};
pub use error::ColorError;
pub use hex::{hex_string, hex_value, parse_hex, parse_hex_with_alpha};
pub use num::{parse_numeric, Convert, ConvertFrom, ExactFrom};
pub use options::{HexFormat, HexPrefix};
pub use prng::Xorshift64;
