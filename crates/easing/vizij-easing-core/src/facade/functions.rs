//! Named normalized entry points: `ease_quad_out(from, to, t)` and friends.

use super::ease;
use crate::catalog::{Easing, Family, Variant};
use crate::interp::Interpolate;
use crate::math::Time;

#[inline]
pub fn ease_linear<T, F>(from: T, to: T, t: F) -> T
where
    F: Time,
    T: Interpolate<F>,
{
    ease(Easing::linear(), from, to, t)
}

macro_rules! normalized_functions {
    ($($family:ident),* $(,)?) => {
        paste::paste! {$(
            normalized_functions!(@one [<$family:camel>], Out, [<ease_ $family _out>]);
            normalized_functions!(@one [<$family:camel>], In, [<ease_ $family _in>]);
            normalized_functions!(@one [<$family:camel>], InOut, [<ease_ $family _in_out>]);
            normalized_functions!(@one [<$family:camel>], OutIn, [<ease_ $family _out_in>]);
        )*}
    };
    (@one $fam:ident, $variant:ident, $name:ident) => {
        #[doc = concat!("`", stringify!($fam), "` `", stringify!($variant), "` between `from` and `to` at normalized `t`.")]
        #[inline]
        pub fn $name<T, F>(from: T, to: T, t: F) -> T
        where
            F: Time,
            T: Interpolate<F>,
        {
            ease(Easing::new(Family::$fam, Variant::$variant), from, to, t)
        }
    };
}

normalized_functions!(quad, cubic, quart, quint, sine, expo, circ, elastic, bounce, back);
