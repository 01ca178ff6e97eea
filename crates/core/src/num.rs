//! Numeric conversions across the fixed-width integer and float types.
//!
//! Two traits cover every (source, target) pair of the twelve primitive
//! numeric types (`i8`..`i64`, `isize`, `u8`..`u64`, `usize`, `f32`, `f64`):
//!
//! - [`ConvertFrom`] is total. Integer narrowing saturates at the target's
//!   bounds, floats round to the nearest integer and clamp, and non-finite
//!   floats become `0`. Integer to float is exact or falls back to `0`.
//! - [`ExactFrom`] returns `None` whenever the value is not exactly
//!   representable in the target.
//!
//! The [`Convert`] extension trait puts both behind method syntax:
//! `300_i32.convert::<u8>() == 255`.

use std::str::FromStr;

/// Total, lossy conversion from `S`.
///
/// Never panics and never reports an error: every input maps to a
/// well-defined value of `Self`.
pub trait ConvertFrom<S>: Sized {
    fn convert_from(value: S) -> Self;
}

/// Exact conversion from `S`: `Some` only when no information is lost.
pub trait ExactFrom<S>: Sized {
    fn exact_from(value: S) -> Option<Self>;
}

/// Method-syntax access to [`ConvertFrom`] and [`ExactFrom`].
pub trait Convert: Copy + Sized {
    /// Converts with clamping/rounding semantics. See [`ConvertFrom`].
    fn convert<T: ConvertFrom<Self>>(self) -> T {
        T::convert_from(self)
    }

    /// Converts only if the value is exactly representable in `T`.
    fn exact<T: ExactFrom<Self>>(self) -> Option<T> {
        T::exact_from(self)
    }

    /// Converts exactly, substituting `T::default()` (zero) otherwise.
    ///
    /// `1.5_f64.exact_or_default::<i32>()` is `0`, not `1` or `2`.
    fn exact_or_default<T: ExactFrom<Self> + Default>(self) -> T {
        T::exact_from(self).unwrap_or_else(|| {
            tracing::trace!("inexact numeric conversion, using default");
            T::default()
        })
    }
}

/// Parses `text` as a literal of `T`, returning `None` when it is not one.
///
/// No trimming is done: `" 42"` is rejected.
pub fn parse_numeric<T: FromStr>(text: &str) -> Option<T> {
    text.parse().ok()
}

// The widest integer every supported source fits into losslessly.
type Wide = i128;

macro_rules! impl_int_to_int {
    ($src:ty => $($dst:ty),+) => {$(
        impl ConvertFrom<$src> for $dst {
            #[inline]
            fn convert_from(value: $src) -> Self {
                let wide = value as Wide;
                if wide < <$dst>::MIN as Wide {
                    <$dst>::MIN
                } else if wide > <$dst>::MAX as Wide {
                    <$dst>::MAX
                } else {
                    wide as $dst
                }
            }
        }

        impl ExactFrom<$src> for $dst {
            #[inline]
            fn exact_from(value: $src) -> Option<Self> {
                <$dst>::try_from(value).ok()
            }
        }
    )+};
}

macro_rules! impl_int_to_float {
    ($src:ty => $($dst:ty),+) => {$(
        impl ExactFrom<$src> for $dst {
            #[inline]
            fn exact_from(value: $src) -> Option<Self> {
                let converted = value as $dst;
                // Any float a 64-bit integer rounds to fits in i128 exactly.
                if converted as Wide == value as Wide {
                    Some(converted)
                } else {
                    None
                }
            }
        }

        impl ConvertFrom<$src> for $dst {
            #[inline]
            fn convert_from(value: $src) -> Self {
                value.exact_or_default()
            }
        }
    )+};
}

macro_rules! impl_float_to_int {
    ($src:ty => $($dst:ty),+) => {$(
        impl ConvertFrom<$src> for $dst {
            #[inline]
            fn convert_from(value: $src) -> Self {
                if value.is_finite() {
                    // `as` saturates at the target bounds.
                    value.round() as $dst
                } else {
                    tracing::trace!("non-finite value converted to 0");
                    0
                }
            }
        }

        impl ExactFrom<$src> for $dst {
            #[inline]
            fn exact_from(value: $src) -> Option<Self> {
                let lower = <$dst>::MIN as $src;
                let upper = (<$dst>::MAX as Wide + 1) as $src;
                if value.is_finite() && value.fract() == 0.0 && value >= lower && value < upper {
                    Some(value as $dst)
                } else {
                    None
                }
            }
        }
    )+};
}

macro_rules! impl_float_to_float {
    ($src:ty => $($dst:ty),+) => {$(
        impl ConvertFrom<$src> for $dst {
            #[inline]
            fn convert_from(value: $src) -> Self {
                value as $dst
            }
        }

        impl ExactFrom<$src> for $dst {
            #[inline]
            fn exact_from(value: $src) -> Option<Self> {
                let converted = value as $dst;
                // NaN carries no magnitude to lose.
                if converted as $src == value || value.is_nan() {
                    Some(converted)
                } else {
                    None
                }
            }
        }
    )+};
}

macro_rules! impl_for_ints {
    ($($src:ty),+) => {$(
        impl Convert for $src {}
        impl_int_to_int!($src => i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
        impl_int_to_float!($src => f32, f64);
    )+};
}

macro_rules! impl_for_floats {
    ($($src:ty),+) => {$(
        impl Convert for $src {}
        impl_float_to_int!($src => i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
        impl_float_to_float!($src => f32, f64);
    )+};
}

impl_for_ints!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
impl_for_floats!(f32, f64);
