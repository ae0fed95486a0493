use std::fmt::{Display, Formatter};
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign};

use num_traits::{AsPrimitive, NumCast};

use crate::Scalar;

/// A vector in 2D space.
///
/// Screen convention applies: the Y-axis grows downward (see [`Vector2::up`]).
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct Vector2<T> {
    /// The X-component.
    pub x: T,
    /// The Y-component.
    pub y: T,
}

impl<T> Vector2<T> where
    T: Scalar,
{
    /// Creates a new instance.
    ///
    /// # Parameters
    /// * `x`: The X-component.
    /// * `y`: The Y-component.
    #[inline(always)]
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    /// Creates a new instance with both components set to `amount`.
    #[inline(always)]
    pub fn splat(amount: T) -> Self {
        Self::new(amount, amount)
    }

    /// Converts to a vector of another element type.
    ///
    /// The conversion has `as` semantics: floating point values are truncated towards zero and saturate at the bounds of
    /// an integral target type, narrowing integral conversions wrap. Use [`Self::try_to`] when the range is not known.
    ///
    /// ```
    /// use spritefx_geom::Vector2;
    ///
    /// let v = Vector2::new(3.7f32, -1.2f32);
    /// assert_eq!(v.to::<i32>(), Vector2::new(3, -1));
    /// ```
    #[inline(always)]
    pub fn to<U>(self) -> Vector2<U> where
        T: AsPrimitive<U>,
        U: Scalar,
    {
        Vector2::new(self.x.as_(), self.y.as_())
    }

    /// Converts to a vector of another element type, if both components can be represented in `U`.
    ///
    /// # Returns
    /// The converted vector or `None` if a component is out of range for `U` (or not a number for an integral `U`).
    #[inline(always)]
    pub fn try_to<U>(self) -> Option<Vector2<U>> where
        U: Scalar,
    {
        Some(Vector2::new(<U as NumCast>::from(self.x)?, <U as NumCast>::from(self.y)?))
    }

    /// The length (magnitude).
    ///
    /// Truncated for integral element types.
    #[inline(always)]
    pub fn length(&self) -> T {
        T::from_f64_lossy(self.length_sq().as_f64().sqrt())
    }

    /// The squared length. Cheaper than [`Self::length`] for comparisons.
    #[inline(always)]
    pub fn length_sq(&self) -> T {
        self.x * self.x + self.y * self.y
    }

    /// The angle to the positive X-axis in radians, as returned by `atan2(y, x)`.
    #[inline(always)]
    pub fn angle(&self) -> T {
        T::from_f64_lossy(self.y.as_f64().atan2(self.x.as_f64()))
    }

    /// Normalizes this vector in place.
    ///
    /// See [`Self::normalized`].
    pub fn normalize(&mut self) -> &mut Self {
        *self = self.normalized();
        self
    }

    /// Returns the vector scaled to unit length.
    ///
    /// A vector whose [`length`](Self::length) equals `T::zero()` is returned unchanged. Otherwise the vector is multiplied
    /// by `1 / length`, converted to `T`. For integral element types that factor truncates to zero for any length above one,
    /// so only axis-aligned unit vectors survive normalization.
    pub fn normalized(&self) -> Self {
        let len = self.length();
        if len.is_zero() {
            return *self;
        }
        *self * T::from_f64_lossy(1.0 / len.as_f64())
    }

    /// Returns the vector rotated by `angle` radians.
    ///
    /// The rotation is computed on `f64` and converted back to `T`, truncating for integral element types.
    pub fn rotation(&self, angle: T) -> Self {
        let (sin, cos) = angle.as_f64().sin_cos();
        let x = self.x.as_f64();
        let y = self.y.as_f64();
        Self::new(
            T::from_f64_lossy(x * cos - y * sin),
            T::from_f64_lossy(x * sin + y * cos),
        )
    }

    /// The unit vector pointing up, `(0, -1)`.
    #[inline(always)]
    pub fn up() -> Self {
        Self::new(T::zero(), -T::one())
    }

    /// The unit vector pointing down, `(0, 1)`.
    #[inline(always)]
    pub fn down() -> Self {
        Self::new(T::zero(), T::one())
    }

    /// The unit vector pointing left, `(-1, 0)`.
    #[inline(always)]
    pub fn left() -> Self {
        Self::new(-T::one(), T::zero())
    }

    /// The unit vector pointing right, `(1, 0)`.
    #[inline(always)]
    pub fn right() -> Self {
        Self::new(T::one(), T::zero())
    }

    /// The projection onto the X-axis, `(x, 0)`.
    #[inline(always)]
    pub fn project_x(&self) -> Self {
        Self::new(self.x, T::zero())
    }

    /// The projection onto the Y-axis, `(0, y)`.
    #[inline(always)]
    pub fn project_y(&self) -> Self {
        Self::new(T::zero(), self.y)
    }
}

impl<T> From<(T, T)> for Vector2<T> where
    T: Scalar,
{
    #[inline(always)]
    fn from(coords: (T, T)) -> Self {
        Self::new(coords.0, coords.1)
    }
}

impl<T> Display for Vector2<T> where
    T: Display,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl<T: Scalar> Add for Vector2<T> {
    type Output = Self;

    #[inline(always)]
    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl<T: Scalar> AddAssign for Vector2<T> {
    #[inline(always)]
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl<T: Scalar> Sub for Vector2<T> {
    type Output = Self;

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl<T: Scalar> SubAssign for Vector2<T> {
    #[inline(always)]
    fn sub_assign(&mut self, rhs: Self) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl<T: Scalar> Neg for Vector2<T> {
    type Output = Self;

    #[inline(always)]
    fn neg(self) -> Self::Output {
        Self::new(-self.x, -self.y)
    }
}

impl<T: Scalar> Mul<T> for Vector2<T> {
    type Output = Self;

    #[inline(always)]
    fn mul(self, rhs: T) -> Self::Output {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

impl<T: Scalar> MulAssign<T> for Vector2<T> {
    #[inline(always)]
    fn mul_assign(&mut self, rhs: T) {
        self.x *= rhs;
        self.y *= rhs;
    }
}

impl<T: Scalar> Div<T> for Vector2<T> {
    type Output = Self;

    #[inline(always)]
    fn div(self, rhs: T) -> Self::Output {
        Self::new(self.x / rhs, self.y / rhs)
    }
}

impl<T: Scalar> DivAssign<T> for Vector2<T> {
    #[inline(always)]
    fn div_assign(&mut self, rhs: T) {
        self.x /= rhs;
        self.y /= rhs;
    }
}

impl<T: Scalar> Rem<T> for Vector2<T> {
    type Output = Self;

    #[inline(always)]
    fn rem(self, rhs: T) -> Self::Output {
        Self::new(self.x % rhs, self.y % rhs)
    }
}

impl<T: Scalar> RemAssign<T> for Vector2<T> {
    #[inline(always)]
    fn rem_assign(&mut self, rhs: T) {
        self.x %= rhs;
        self.y %= rhs;
    }
}
