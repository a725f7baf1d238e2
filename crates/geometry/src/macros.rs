/// Generates the scalar broadcast operators (`vector op scalar`) for the given
/// primitive element types.
///
/// A blanket `impl<T> Add<T> for Vector2<T>` would overlap with the
/// component-wise `impl<T> Add<Vector2<T>> for Vector2<T>`, so the scalar
/// forms are stamped out per concrete type instead.
macro_rules! impl_scalar_ops {
    ($($scalar:ty),* $(,)?) => {
        $(
            impl std::ops::Add<$scalar> for crate::vector::Vector2<$scalar> {
                type Output = Self;

                #[inline]
                fn add(self, rhs: $scalar) -> Self {
                    Self::new(self.x + rhs, self.y + rhs)
                }
            }

            impl std::ops::Sub<$scalar> for crate::vector::Vector2<$scalar> {
                type Output = Self;

                #[inline]
                fn sub(self, rhs: $scalar) -> Self {
                    Self::new(self.x - rhs, self.y - rhs)
                }
            }

            impl std::ops::Mul<$scalar> for crate::vector::Vector2<$scalar> {
                type Output = Self;

                #[inline]
                fn mul(self, rhs: $scalar) -> Self {
                    Self::new(self.x * rhs, self.y * rhs)
                }
            }

            impl std::ops::Div<$scalar> for crate::vector::Vector2<$scalar> {
                type Output = Self;

                #[inline]
                fn div(self, rhs: $scalar) -> Self {
                    Self::new(self.x / rhs, self.y / rhs)
                }
            }
        )*
    };
}

pub(crate) use impl_scalar_ops;
