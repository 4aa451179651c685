//! Fixed-arity vector types.
//!
//! Lanes are generic so the same type carries `f32`, `f64` or integer data;
//! easing applies lane by lane through [`crate::Lanes`].

use core::ops::{Add, Mul, Neg, Sub};

use serde::{Deserialize, Serialize};

use super::Time;

macro_rules! vector {
    ($(#[$meta:meta])* $name:ident, $n:literal, $($field:ident),+) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
        pub struct $name<S = f32> {
            $(pub $field: S,)+
        }

        impl<S> $name<S> {
            #[inline]
            pub const fn new($($field: S),+) -> Self {
                Self { $($field),+ }
            }

            /// Applies `f` to every lane.
            #[inline]
            pub fn map<R>(self, mut f: impl FnMut(S) -> R) -> $name<R> {
                $name { $($field: f(self.$field)),+ }
            }

            /// Combines two vectors lane by lane.
            #[inline]
            pub fn zip_with<R>(self, other: Self, mut f: impl FnMut(S, S) -> R) -> $name<R> {
                $name { $($field: f(self.$field, other.$field)),+ }
            }
        }

        impl<S: Copy> $name<S> {
            #[inline]
            pub const fn splat(v: S) -> Self {
                Self { $($field: v),+ }
            }

            #[inline]
            pub fn to_array(self) -> [S; $n] {
                [$(self.$field),+]
            }
        }

        impl<S: Time> $name<S> {
            #[inline]
            pub fn dot(self, other: Self) -> S {
                let mut acc = S::zero();
                $(acc = acc + self.$field * other.$field;)+
                acc
            }

            #[inline]
            pub fn length(self) -> S {
                self.dot(self).sqrt()
            }

            /// Unit-length copy; the zero vector stays zero.
            #[inline]
            pub fn normalize(self) -> Self {
                let len = self.length();
                if len > S::zero() {
                    self.map(|v| v / len)
                } else {
                    Self::splat(S::zero())
                }
            }
        }

        impl<S: Copy> From<[S; $n]> for $name<S> {
            #[inline]
            fn from(a: [S; $n]) -> Self {
                let [$($field),+] = a;
                Self { $($field),+ }
            }
        }

        impl<S: Copy> From<$name<S>> for [S; $n] {
            #[inline]
            fn from(v: $name<S>) -> Self {
                v.to_array()
            }
        }

        impl<S: Add<Output = S>> Add for $name<S> {
            type Output = Self;

            #[inline]
            fn add(self, rhs: Self) -> Self {
                Self { $($field: self.$field + rhs.$field),+ }
            }
        }

        impl<S: Sub<Output = S>> Sub for $name<S> {
            type Output = Self;

            #[inline]
            fn sub(self, rhs: Self) -> Self {
                Self { $($field: self.$field - rhs.$field),+ }
            }
        }

        impl<S: Mul<Output = S> + Copy> Mul<S> for $name<S> {
            type Output = Self;

            #[inline]
            fn mul(self, rhs: S) -> Self {
                Self { $($field: self.$field * rhs),+ }
            }
        }

        impl<S: Neg<Output = S>> Neg for $name<S> {
            type Output = Self;

            #[inline]
            fn neg(self) -> Self {
                Self { $($field: -self.$field),+ }
            }
        }
    };
}

vector!(
    /// 2D vector
    Vec2, 2, x, y
);
vector!(
    /// 3D vector
    Vec3, 3, x, y, z
);
vector!(
    /// 4D vector
    Vec4, 4, x, y, z, w
);

impl<S: Time> Vec3<S> {
    #[inline]
    pub fn cross(self, other: Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Some unit vector perpendicular to `self` (which must be non-zero).
    pub fn any_orthogonal(self) -> Self {
        let axis = if self.x.abs() < self.y.abs() && self.x.abs() < self.z.abs() {
            Self::new(S::one(), S::zero(), S::zero())
        } else if self.y.abs() < self.z.abs() {
            Self::new(S::zero(), S::one(), S::zero())
        } else {
            Self::new(S::zero(), S::zero(), S::one())
        };
        self.cross(axis).normalize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn array_conversions() {
        let v: Vec3<i32> = [1, 2, 3].into();
        assert_eq!(v, Vec3::new(1, 2, 3));
        let a: [i32; 3] = v.into();
        assert_eq!(a, [1, 2, 3]);
    }

    #[test]
    fn normalize_zero_stays_zero() {
        assert_eq!(Vec4::<f32>::default().normalize(), Vec4::splat(0.0));
        let n = Vec2::new(3.0f64, 4.0).normalize();
        assert!((n.length() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn orthogonal_is_perpendicular_unit() {
        for v in [
            Vec3::new(1.0f32, 0.0, 0.0),
            Vec3::new(0.0, 0.0, -1.0),
            Vec3::new(0.3, -0.8, 0.52),
        ] {
            let o = v.any_orthogonal();
            assert!(o.dot(v).abs() < 1e-6);
            assert!((o.length() - 1.0).abs() < 1e-6);
        }
    }
}
