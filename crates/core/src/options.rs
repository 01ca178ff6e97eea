//! Hex output options and the JSON helpers that read them.
//!
//! [`HexFormat`] bundles the knobs of [`hex_string`] with presentation
//! choices (prefix, case). It can be deserialized strictly with serde or
//! built leniently with [`HexFormat::from_json`], which falls back to the
//! default for every key that is missing or has the wrong type.

use crate::color::Rgba255;
use crate::hex::hex_string;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Prefix written in front of the hex digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HexPrefix {
    /// `#RRGGBB`
    #[default]
    Hash,
    /// `0xRRGGBB`
    ZeroX,
    /// `RRGGBB`
    Bare,
}

impl HexPrefix {
    pub fn as_str(self) -> &'static str {
        match self {
            HexPrefix::Hash => "#",
            HexPrefix::ZeroX => "0x",
            HexPrefix::Bare => "",
        }
    }

    /// Looks a prefix up by its serialized name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "hash" => Some(HexPrefix::Hash),
            "zerox" => Some(HexPrefix::ZeroX),
            "bare" => Some(HexPrefix::Bare),
            _ => None,
        }
    }
}

/// How to render a byte color as hex text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HexFormat {
    pub include_alpha: bool,
    pub allows_short: bool,
    pub lowercase: bool,
    pub prefix: HexPrefix,
}

impl HexFormat {
    /// Builds a format from a JSON object, never failing.
    pub fn from_json(params: &Value) -> Self {
        let defaults = Self::default();
        Self {
            include_alpha: param_bool(params, "include_alpha", defaults.include_alpha),
            allows_short: param_bool(params, "allows_short", defaults.allows_short),
            lowercase: param_bool(params, "lowercase", defaults.lowercase),
            prefix: HexPrefix::from_name(&param_string(params, "prefix", "hash"))
                .unwrap_or(defaults.prefix),
        }
    }

    pub fn format(&self, c: &Rgba255) -> String {
        let encoded = hex_string(c, self.include_alpha, self.allows_short);
        let digits = encoded.trim_start_matches('#');
        let digits = if self.lowercase {
            digits.to_ascii_lowercase()
        } else {
            digits.to_string()
        };
        format!("{}{digits}", self.prefix.as_str())
    }
}

/// Reads a `bool` from `params[name]`, or `default` if missing or wrong type.
pub fn param_bool(params: &Value, name: &str, default: bool) -> bool {
    params.get(name).and_then(Value::as_bool).unwrap_or(default)
}

/// Reads a string from `params[name]`, or `default` if missing or wrong type.
pub fn param_string(params: &Value, name: &str, default: &str) -> String {
    params
        .get(name)
        .and_then(Value::as_str)
        .map(String::from)
        .unwrap_or_else(|| default.to_owned())
}
