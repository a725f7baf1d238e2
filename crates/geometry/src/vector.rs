use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

use num_traits::{AsPrimitive, NumCast, ToPrimitive};
use serde::{Deserialize, Serialize};

use crate::macros::impl_scalar_ops;

/// A 2-component vector over a numeric element type.
///
/// `Vector2` is a plain `Copy` value: every operation returns a new vector and
/// equality/hashing are component-wise.
///
/// # Examples
///
/// ```
/// use geometry::Vector2;
///
/// let position = Vector2::new(3, 4);
/// let offset = Vector2::new(1, -1);
///
/// assert_eq!(position + offset, Vector2::new(4, 3));
/// assert_eq!(position * 2, Vector2::new(6, 8));
/// assert_eq!(position.to_f32(), Vector2::new(3.0, 4.0));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Vector2<T> {
    pub x: T,
    pub y: T,
}

impl<T> Vector2<T> {
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    /// Copy of `self` with `x` replaced.
    pub fn with_x(self, x: T) -> Self {
        Self { x, y: self.y }
    }

    /// Copy of `self` with `y` replaced.
    pub fn with_y(self, y: T) -> Self {
        Self { x: self.x, y }
    }
}

impl<T: Copy> Vector2<T> {
    /// Vector with both components set to `value`.
    pub const fn splat(value: T) -> Self {
        Self { x: value, y: value }
    }

    /// Convert each component with `as` semantics.
    ///
    /// Integer to float is exact as long as the value fits in the float's
    /// mantissa. Float to integer truncates toward zero and saturates at the
    /// integer bounds (NaN becomes 0).
    pub fn cast<U>(self) -> Vector2<U>
    where
        T: AsPrimitive<U>,
        U: Copy + 'static,
    {
        Vector2::new(self.x.as_(), self.y.as_())
    }

    /// Checked conversion, `None` if either component does not fit in `U`.
    pub fn try_cast<U>(self) -> Option<Vector2<U>>
    where
        T: ToPrimitive,
        U: NumCast,
    {
        Some(Vector2::new(U::from(self.x)?, U::from(self.y)?))
    }

    pub fn to_f32(self) -> Vector2<f32>
    where
        T: AsPrimitive<f32>,
    {
        self.cast()
    }

    pub fn to_i32(self) -> Vector2<i32>
    where
        T: AsPrimitive<i32>,
    {
        self.cast()
    }
}

impl<T: Copy + PartialOrd> Vector2<T> {
    /// Bound each component to `[min, max]` of the same axis.
    ///
    /// Axes are clamped independently. `min` must not exceed `max` on either
    /// axis.
    pub fn clamp(self, min: Self, max: Self) -> Self {
        Self::new(
            num_traits::clamp(self.x, min.x, max.x),
            num_traits::clamp(self.y, min.y, max.y),
        )
    }
}

impl<T: Add<Output = T>> Add for Vector2<T> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl<T: Sub<Output = T>> Sub for Vector2<T> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl<T: Mul<Output = T>> Mul for Vector2<T> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self::new(self.x * rhs.x, self.y * rhs.y)
    }
}

impl<T: Div<Output = T>> Div for Vector2<T> {
    type Output = Self;

    #[inline]
    fn div(self, rhs: Self) -> Self {
        Self::new(self.x / rhs.x, self.y / rhs.y)
    }
}

impl<T: Neg<Output = T>> Neg for Vector2<T> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl_scalar_ops!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize, f32, f64);

impl<T> From<(T, T)> for Vector2<T> {
    fn from((x, y): (T, T)) -> Self {
        Self::new(x, y)
    }
}

impl<T> From<[T; 2]> for Vector2<T> {
    fn from([x, y]: [T; 2]) -> Self {
        Self::new(x, y)
    }
}

impl<T> From<Vector2<T>> for (T, T) {
    fn from(v: Vector2<T>) -> Self {
        (v.x, v.y)
    }
}

impl<T: fmt::Display> fmt::Display for Vector2<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
