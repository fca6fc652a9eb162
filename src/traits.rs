use std::ops;

/// Types representing an angle, supporting trigonometry and unit conversion.
///
/// Angles are measured in radians unless a method says otherwise.
pub trait Angle {
    /// Computes the sine of the angle `self`.
    fn sin(self) -> Self;
    /// Computes the cosine of the angle `self`.
    fn cos(self) -> Self;
    /// Computes the tangent of the angle `self`.
    fn tan(self) -> Self;
    /// Converts an angle in radians to degrees.
    fn to_degrees(self) -> Self;
    /// Converts an angle in degrees to radians.
    fn to_radians(self) -> Self;
}

/// Types that support computing their square root.
pub trait Sqrt {
    fn sqrt(self) -> Self;
}

/// Types that have a "zero" value (an additive identity).
pub trait Zero {
    /// The *0* value of this type.
    const ZERO: Self;
}

/// Types that have a "one" value (a multiplicative identity).
pub trait One {
    /// The *1* value of this type.
    const ONE: Self;
}

/// A trait for numeric types that support basic arithmetic operations.
pub trait Number:
    Zero
    + One
    + ops::Neg<Output = Self>
    + ops::Add<Output = Self>
    + ops::Sub<Output = Self>
    + ops::Mul<Output = Self>
    + ops::Div<Output = Self>
    + PartialEq
    + Copy
{
}
impl<T> Number for T where
    T: Zero
        + One
        + ops::Neg<Output = Self>
        + ops::Add<Output = Self>
        + ops::Sub<Output = Self>
        + ops::Mul<Output = Self>
        + ops::Div<Output = Self>
        + PartialEq
        + Copy
{
}

macro_rules! zero_one {
    ($zero:literal, $one:literal; $($types:ty),+) => {
        $(
            impl Zero for $types {
                const ZERO: Self = $zero;
            }

            impl One for $types {
                const ONE: Self = $one;
            }
        )+
    };
}
zero_one!(0, 1; u8, u16, u32, u64, u128, i8, i16, i32, i64, i128);
zero_one!(0.0, 1.0; f32, f64);

macro_rules! float_impls {
    ($($float:ident),+) => {
        $(
            impl Angle for $float {
                fn sin(self) -> Self {
                    self.sin()
                }

                fn cos(self) -> Self {
                    self.cos()
                }

                fn tan(self) -> Self {
                    self.tan()
                }

                fn to_degrees(self) -> Self {
                    self / std::$float::consts::PI * 180.0
                }

                fn to_radians(self) -> Self {
                    self / 180.0 * std::$float::consts::PI
                }
            }

            impl Sqrt for $float {
                fn sqrt(self) -> Self {
                    self.sqrt()
                }
            }
        )+
    };
}
float_impls!(f32, f64);

#[cfg(test)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    use crate::assert_approx_eq;

    use super::*;

    #[test]
    fn angle_conversion() {
        assert_eq!(Angle::to_degrees(PI), 180.0);
        assert_eq!(Angle::to_degrees(FRAC_PI_2), 90.0);
        assert_eq!(Angle::to_radians(180.0), PI);
        assert_eq!(Angle::to_radians(0.0), 0.0);
        assert_approx_eq!(Angle::to_radians(Angle::to_degrees(1.25)), 1.25);
    }

    #[test]
    fn trig() {
        assert_approx_eq!(Angle::sin(FRAC_PI_2), 1.0);
        assert_approx_eq!(Angle::cos(PI), -1.0);
        assert_approx_eq!(Angle::tan(FRAC_PI_4), 1.0);
    }
}
