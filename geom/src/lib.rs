use std::fmt::Debug;
use std::ops::{AddAssign, DivAssign, MulAssign, Neg, RemAssign, SubAssign};

use num_traits::{Num, NumCast};

mod rect;
mod vector;

pub use rect::Rectangle;
pub use vector::Vector2;

/// A numeric element type for the geometric types in this crate.
///
/// Both integral and floating point types are supported, because the same kernel is used for integer pixel coordinates
/// (sprites, surfaces, clip rectangles) and for floating point math coordinates (positions, velocities, cameras). Values
/// move between the two worlds only through an explicit conversion (see [`Vector2::to`] and [`Rectangle::to`]), so it is
/// always visible in the code where precision is lost.
///
/// Only signed types implement this trait: the unit directions (e.g. [`Vector2::up`]) and negation need negative values.
///
/// Some operations (length, angle, rotation) are inherently floating point. They are computed on an `f64` intermediate
/// and converted back to the element type, which truncates for integral types.
pub trait Scalar:
Copy + Num + NumCast + PartialOrd + Neg<Output=Self> +
AddAssign + SubAssign + MulAssign + DivAssign + RemAssign + Debug + 'static
{
    /// Returns the value as an `f64`.
    fn as_f64(self) -> f64;

    /// Creates a value from an `f64` with `as` semantics.
    ///
    /// Integral types truncate towards zero and saturate at their bounds. `NaN` becomes zero.
    fn from_f64_lossy(value: f64) -> Self;

    /// Returns the value two (2).
    #[inline(always)]
    fn two() -> Self {
        Self::one() + Self::one()
    }
}

macro_rules! impl_scalar {
    ($($ty:ty),*) => {
        $(
            impl Scalar for $ty {
                #[inline(always)]
                fn as_f64(self) -> f64 {
                    self as f64
                }

                #[inline(always)]
                fn from_f64_lossy(value: f64) -> Self {
                    value as $ty
                }
            }
        )*
    }
}

impl_scalar!(i8, i16, i32, i64, isize, f32, f64);

/// Returns the larger of two partially ordered values. `a` wins when they are unordered.
#[inline(always)]
pub(crate) fn partial_max<T: PartialOrd>(a: T, b: T) -> T {
    if b > a { b } else { a }
}

/// Returns the smaller of two partially ordered values. `a` wins when they are unordered.
#[inline(always)]
pub(crate) fn partial_min<T: PartialOrd>(a: T, b: T) -> T {
    if b < a { b } else { a }
}

/// Linear interpolation between `start` and `end`.
///
/// # Parameters
/// * `start`: The value for `t == 0`.
/// * `end`: The value for `t == 1`.
/// * `t`: The interpolation factor. Values outside of `[0, 1]` extrapolate.
///
/// ```
/// assert_eq!(spritefx_geom::lerp(2.0, 4.0, 0.5), 3.0);
/// ```
#[inline(always)]
pub fn lerp(start: f32, end: f32, t: f32) -> f32 {
    start + (end - start) * t
}

/// Bilinear interpolation between four corner values.
///
/// # Parameters
/// * `c00`: The top-left value.
/// * `c10`: The top-right value.
/// * `c01`: The bottom-left value.
/// * `c11`: The bottom-right value.
/// * `tx`: The horizontal interpolation factor.
/// * `ty`: The vertical interpolation factor.
#[inline(always)]
pub fn blerp(c00: f32, c10: f32, c01: f32, c11: f32, tx: f32, ty: f32) -> f32 {
    lerp(lerp(c00, c10, tx), lerp(c01, c11, tx), ty)
}
