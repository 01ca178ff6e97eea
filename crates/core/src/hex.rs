//! Hex encoding and decoding of byte colors.
//!
//! Packed values are `0xRRGGBB`, or `0xAARRGGBB` when alpha is requested.
//! Strings are `#`-prefixed uppercase digit pairs in the same order, and can
//! be compressed to `#RGB` / `#ARGB` when every pair repeats one digit.
//!
//! Decoding accepts an optional `#`, `0x` or `0X` prefix followed by exactly
//! 3, 4, 6 or 8 hex digits (either case). The 3 and 4 digit forms expand by
//! doubling each digit. Eight digits (and therefore four) carry a leading
//! alpha byte; six (and three) take the alpha supplied by the caller.

use crate::color::Rgba255;
use crate::error::ColorError;
use crate::num::Convert;

const PREFIXES: [&str; 3] = ["#", "0x", "0X"];

fn strip_prefix(text: &str) -> &str {
    PREFIXES
        .iter()
        .find_map(|prefix| text.strip_prefix(prefix))
        .unwrap_or(text)
}

/// Packs a byte color into `0xRRGGBB`, or `0xAARRGGBB` if `include_alpha`.
///
/// Without alpha the top byte is zero, which is not the same as a zero
/// alpha: callers that need alpha must ask for it.
pub fn hex_value(c: &Rgba255, include_alpha: bool) -> u32 {
    let rgb = (u32::from(c.red()) << 16) | (u32::from(c.green()) << 8) | u32::from(c.blue());
    if include_alpha {
        (u32::from(c.alpha_byte()) << 24) | rgb
    } else {
        rgb
    }
}

/// Unpacks `0xRRGGBB`, ignoring bits 24..31, with the given alpha.
pub fn from_hex_value(value: u32, alpha: f64) -> Rgba255 {
    let byte = |shift: u32| ((value >> shift) & 0xFF).convert::<u8>();
    Rgba255::new(byte(16), byte(8), byte(0), alpha)
}

/// Formats a byte color as `#RRGGBB` or `#AARRGGBB`.
///
/// With `allows_short`, colors whose every digit pair repeats (`FF`, `33`)
/// come out as `#RGB` or `#ARGB` instead.
pub fn hex_string(c: &Rgba255, include_alpha: bool, allows_short: bool) -> String {
    if allows_short {
        if let Some(short) = short_hex_string(c, include_alpha) {
            return short;
        }
    }
    if include_alpha {
        format!("#{:08X}", hex_value(c, true))
    } else {
        format!("#{:06X}", hex_value(c, false))
    }
}

/// Returns the `#RGB` / `#ARGB` form, or `None` if some pair differs.
pub fn short_hex_string(c: &Rgba255, include_alpha: bool) -> Option<String> {
    let alpha = include_alpha.then(|| c.alpha_byte());
    let mut out = String::from("#");
    for byte in alpha.into_iter().chain([c.red(), c.green(), c.blue()]) {
        let (high, low) = (byte >> 4, byte & 0x0F);
        if high != low {
            return None;
        }
        out.push(char::from_digit(u32::from(low), 16)?.to_ascii_uppercase());
    }
    Some(out)
}

/// Decodes a hex color string, reporting why it was rejected.
///
/// `alpha` applies to the 3 and 6 digit forms and is clamped to [0, 1].
pub fn decode_hex(text: &str, alpha: f64) -> Result<Rgba255, ColorError> {
    let digits = strip_prefix(text);
    if digits.is_empty() {
        return Err(ColorError::EmptyHex);
    }
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ColorError::InvalidHexDigit(text.to_string()));
    }

    let expanded: String = match digits.len() {
        3 | 4 => digits.chars().flat_map(|d| [d, d]).collect(),
        6 | 8 => digits.to_string(),
        len => return Err(ColorError::InvalidHexLength(len)),
    };

    let value = u32::from_str_radix(&expanded, 16)
        .map_err(|_| ColorError::InvalidHexDigit(text.to_string()))?;

    let alpha = if expanded.len() == 8 {
        (value >> 24).convert::<f64>() / 255.0
    } else {
        alpha
    };
    Ok(from_hex_value(value, alpha))
}

/// Parses a hex color string with the given alpha; `None` if malformed.
pub fn parse_hex_with_alpha(text: &str, alpha: f64) -> Option<Rgba255> {
    decode_hex(text, alpha)
        .inspect_err(|e| tracing::debug!(input = text, error = %e, "rejected hex color"))
        .ok()
}

/// Parses a hex color string as opaque unless it carries its own alpha.
pub fn parse_hex(text: &str) -> Option<Rgba255> {
    parse_hex_with_alpha(text, 1.0)
}

impl Rgba255 {
    /// Decodes a hex color string. See [`decode_hex`].
    pub fn from_hex(text: &str) -> Result<Self, ColorError> {
        decode_hex(text, 1.0)
    }

    /// Formats as `#RRGGBB`, dropping alpha.
    pub fn to_hex(&self) -> String {
        hex_string(self, false, false)
    }

    /// Packs as `0xRRGGBB`. See [`hex_value`].
    pub fn hex_value(&self) -> u32 {
        hex_value(self, false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- Packing --

    #[test]
    fn hex_value_without_alpha() {
        assert_eq!(hex_value(&Rgba255::rgb(255, 59, 48), false), 0xFF3B30);
    }

    #[test]
    fn hex_value_with_alpha_leads_with_alpha_byte() {
        let c = Rgba255::new(255, 59, 48, 0.0);
        assert_eq!(hex_value(&c, true), 0x00FF_3B30);
        assert_eq!(hex_value(&c.with_alpha(1.0), true), 0xFFFF_3B30);
    }

    #[test]
    fn from_hex_value_ignores_top_byte() {
        let c = from_hex_value(0xAB12_3456, 0.5);
        assert_eq!((c.red(), c.green(), c.blue()), (0x12, 0x34, 0x56));
        assert_eq!(c.alpha(), 0.5);
    }

    // -- Formatting --

    #[test]
    fn hex_string_full_form_is_uppercase() {
        assert_eq!(hex_string(&Rgba255::rgb(0xab, 0xcd, 0xef), false, false), "#ABCDEF");
        assert_eq!(hex_string(&Rgba255::rgb(0, 0, 1), false, false), "#000001");
    }

    #[test]
    fn hex_string_short_red() {
        assert_eq!(hex_string(&Rgba255::rgb(255, 0, 0), false, true), "#F00");
    }

    #[test]
    fn hex_string_short_with_alpha() {
        let c = Rgba255::new(0x33, 0x66, 0x99, 0xCC as f64 / 255.0);
        assert_eq!(hex_string(&c, true, true), "#C369");
        assert_eq!(hex_string(&c, true, false), "#CC336699");
    }

    #[test]
    fn hex_string_falls_back_to_full_form() {
        let c = Rgba255::rgb(255, 59, 48);
        assert_eq!(hex_string(&c, false, true), "#FF3B30");
        assert_eq!(short_hex_string(&c, false), None);
    }

    #[test]
    fn short_form_blocked_by_alpha_only_when_included() {
        let c = Rgba255::new(255, 0, 0, 0.5);
        assert_eq!(short_hex_string(&c, false).as_deref(), Some("#F00"));
        // 0.5 quantizes to 0x80.
        assert_eq!(short_hex_string(&c, true), None);
        assert_eq!(hex_string(&c, true, true), "#80FF0000");
    }

    #[test]
    fn to_hex_drops_alpha() {
        let c = Rgba255::new(0x12, 0x34, 0x56, 0.0);
        assert_eq!(c.to_hex(), "#123456");
        assert_eq!(c.hex_value(), 0x123456);
    }

    // -- Decoding --

    #[test]
    fn parse_empty_is_absent() {
        assert_eq!(parse_hex(""), None);
        assert_eq!(parse_hex("#"), None);
        assert_eq!(decode_hex("0x", 1.0), Err(ColorError::EmptyHex));
    }

    #[test]
    fn parse_invalid_digits_is_absent() {
        assert_eq!(parse_hex("ZZZZZZ"), None);
        assert_eq!(parse_hex("#12345G"), None);
        assert_eq!(parse_hex("+FFFFF"), None);
        assert_eq!(parse_hex("ÿÿÿ"), None);
        assert!(matches!(decode_hex("ZZZZZZ", 1.0), Err(ColorError::InvalidHexDigit(_))));
    }

    #[test]
    fn parse_rejects_other_lengths() {
        for bad in ["F", "FF", "FFFFF", "FFFFFFF", "FFFFFFFFF"] {
            assert_eq!(parse_hex(bad), None, "accepted {bad}");
        }
        assert_eq!(decode_hex("#FFFFF", 1.0), Err(ColorError::InvalidHexLength(5)));
    }

    #[test]
    fn parse_accepts_prefixes_and_either_case() {
        let expected = Some(Rgba255::rgb(0xC0, 0xFF, 0xEE));
        assert_eq!(parse_hex("c0ffee"), expected);
        assert_eq!(parse_hex("#C0FFEE"), expected);
        assert_eq!(parse_hex("0xc0ffee"), expected);
        assert_eq!(parse_hex("0XC0FFEE"), expected);
    }

    #[test]
    fn parse_strips_only_one_prefix() {
        assert_eq!(parse_hex("#0xFFF"), None);
        assert_eq!(parse_hex("##FFF"), None);
    }

    #[test]
    fn short_form_expands_by_doubling() {
        assert_eq!(parse_hex("F00"), parse_hex("FF0000"));
        assert_eq!(parse_hex("#abc"), Some(Rgba255::rgb(0xAA, 0xBB, 0xCC)));
    }

    #[test]
    fn eight_digits_lead_with_alpha() {
        let c = parse_hex("80FF0000").unwrap();
        assert_eq!((c.red(), c.green(), c.blue()), (255, 0, 0));
        assert_eq!(c.alpha_byte(), 0x80);
    }

    #[test]
    fn four_digits_expand_to_alpha_leading_form() {
        assert_eq!(parse_hex("#8F00"), parse_hex("#88FF0000"));
        assert_eq!(parse_hex("#0F00").unwrap().alpha(), 0.0);
    }

    #[test]
    fn supplied_alpha_applies_to_six_digits_and_is_clamped() {
        assert_eq!(parse_hex_with_alpha("FF0000", 0.25).unwrap().alpha(), 0.25);
        assert_eq!(parse_hex_with_alpha("FF0000", 3.0).unwrap().alpha(), 1.0);
        assert_eq!(parse_hex_with_alpha("FF0000", -3.0).unwrap().alpha(), 0.0);
        assert_eq!(parse_hex("F00").unwrap().alpha(), 1.0);
    }

    #[test]
    fn embedded_alpha_wins_over_supplied_alpha() {
        let c = parse_hex_with_alpha("FFFF0000", 0.0).unwrap();
        assert_eq!(c.alpha(), 1.0);
    }

    #[test]
    fn from_hex_method_reports_reason() {
        assert!(Rgba255::from_hex("#FF3B30").is_ok());
        assert_eq!(Rgba255::from_hex("#FFFFFFF"), Err(ColorError::InvalidHexLength(7)));
    }

    // -- Property-based tests --

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        fn doubled(byte: u8) -> bool {
            byte >> 4 == byte & 0x0F
        }

        proptest! {
            #[test]
            fn alpha_inclusive_round_trip_is_lossless(
                r in any::<u8>(),
                g in any::<u8>(),
                b in any::<u8>(),
                a in any::<u8>(),
                allows_short in any::<bool>(),
            ) {
                let original = Rgba255::new(r, g, b, f64::from(a) / 255.0);
                let encoded = hex_string(&original, true, allows_short);
                prop_assert_eq!(parse_hex(&encoded), Some(original));
            }

            #[test]
            fn opaque_round_trip_without_alpha(
                r in any::<u8>(),
                g in any::<u8>(),
                b in any::<u8>(),
            ) {
                let original = Rgba255::rgb(r, g, b);
                prop_assert_eq!(parse_hex(&original.to_hex()), Some(original));
                prop_assert_eq!(from_hex_value(original.hex_value(), 1.0), original);
            }

            #[test]
            fn short_form_iff_every_pair_doubled(
                r in any::<u8>(),
                g in any::<u8>(),
                b in any::<u8>(),
                a in any::<u8>(),
                include_alpha in any::<bool>(),
            ) {
                let c = Rgba255::new(r, g, b, f64::from(a) / 255.0);
                let compressible = doubled(r) && doubled(g) && doubled(b)
                    && (!include_alpha || doubled(a));
                let encoded = hex_string(&c, include_alpha, true);
                let digits = encoded.len() - 1;
                let (short_len, full_len) = if include_alpha { (4, 8) } else { (3, 6) };
                prop_assert_eq!(digits, if compressible { short_len } else { full_len });
            }

            #[test]
            fn decode_never_panics(text in ".{0,12}") {
                let _ = decode_hex(&text, 1.0);
            }
        }
    }
}
