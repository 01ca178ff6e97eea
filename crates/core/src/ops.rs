//! Pure operations on colors: blending, lightening, inversion, random picks.
//!
//! All of them work on normalized [`Rgba`] and return a fresh value; inputs
//! are never modified. Results pass through [`Rgba::new`], so every channel
//! stays in [0, 1].

use crate::color::{Rgba, Rgba255};
use crate::prng::Xorshift64;

/// Weighted average of two colors, all four channels included.
///
/// Weights are clamped to [0, 1]. When both are zero the result is `a`.
pub fn blend(a: Rgba, weight_a: f64, b: Rgba, weight_b: f64) -> Rgba {
    let wa = if weight_a.is_nan() { 0.0 } else { weight_a.clamp(0.0, 1.0) };
    let wb = if weight_b.is_nan() { 0.0 } else { weight_b.clamp(0.0, 1.0) };
    let total = wa + wb;
    if total == 0.0 {
        return a;
    }
    let mix = |x: f64, y: f64| (x * wa + y * wb) / total;
    Rgba::new(
        mix(a.red(), b.red()),
        mix(a.green(), b.green()),
        mix(a.blue(), b.blue()),
        mix(a.alpha(), b.alpha()),
    )
}

/// Adds `amount` to each RGB channel; alpha is kept. A NaN amount is 0.
pub fn lighten(c: Rgba, amount: f64) -> Rgba {
    shift(c, amount)
}

/// Subtracts `amount` from each RGB channel; alpha is kept.
pub fn darken(c: Rgba, amount: f64) -> Rgba {
    shift(c, -amount)
}

fn shift(c: Rgba, amount: f64) -> Rgba {
    let amount = if amount.is_nan() { 0.0 } else { amount };
    Rgba::new(
        c.red() + amount,
        c.green() + amount,
        c.blue() + amount,
        c.alpha(),
    )
}

/// RGB complement `(1 - r, 1 - g, 1 - b)`, alpha kept.
pub fn complementary(c: Rgba) -> Rgba {
    Rgba::new(1.0 - c.red(), 1.0 - c.green(), 1.0 - c.blue(), c.alpha())
}

/// Same color with a new (clamped) alpha.
pub fn with_alpha(c: Rgba, alpha: f64) -> Rgba {
    c.with_alpha(alpha)
}

/// Opaque color with uniformly random channels.
pub fn random_color(rng: &mut Xorshift64) -> Rgba255 {
    let red = rng.next_u8();
    let green = rng.next_u8();
    let blue = rng.next_u8();
    Rgba255::rgb(red, green, blue)
}
