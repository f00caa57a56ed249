//! Double-precision e^x - 1
//!
//! `x = i*ln2 + f` with `|f| <= ln2/2`, then
//! `expm1(x) = 2^i * (expm1(f) + 1) - 1` where `expm1(f) ~= f + f^2 P(f)`.
//! The final step `p*t + (t - 1)` keeps full relative accuracy for tiny `x`.
//!
//! Maximum observed error is 2.18 ULP.

#![allow(clippy::excessive_precision)]

use super::{bits, SHIFT_F64};
use crate::config::{DefaultMode, FpMode};
use crate::fallback::special_case;
use crate::poly::{estrin, EstrinPowers};
use crate::traits::{SimdBits, SimdMask, SimdVector};

const INV_LN2: f64 = 1.4426950408889634;
const LN2_HI: f64 = 0.6931471805599453;
const LN2_LO: f64 = 2.3190468138462996e-17;

/// `P(f)` for `expm1(f) ~= f + f^2 P(f)` on `[-ln2/2, ln2/2]`
pub(crate) const POLY: [f64; 11] = [
    0.5,
    0.16666666666666677,
    0.041666666666666595,
    0.008333333333321485,
    0.001388888888892989,
    0.00019841269886391568,
    2.4801587227712913e-05,
    2.755724401430854e-06,
    2.755735974997494e-07,
    2.510908608256483e-08,
    2.0887750444389962e-09,
];

/// asuint64(0x1.62b7d369a5aa9p+9), above which expm1 overflows
const BIG_BOUND: u64 = 0x4086_2b7d_369a_5aa9;

/// asuint64(0x1p-51)
const TINY_BOUND: u64 = 0x3cc0_0000_0000_0000;

const ABS_MASK: u64 = 0x7fff_ffff_ffff_ffff;
const SIGN_MASK: u64 = 0x8000_0000_0000_0000;
const ONE: u64 = 0x3ff0_0000_0000_0000;

/// Reduction, polynomial and reconstruction without any special-case handling
///
/// Valid for `|x| < 0x1.62b7d369a5aa9p+9`. Shared with sinh.
#[inline(always)]
pub(crate) fn expm1_core<V: SimdVector<Scalar = f64>>(x: V) -> V {
    // i = round(x/ln2), f = x - i*ln2
    let n = x
        .fma(V::splat(INV_LN2), V::splat(SHIFT_F64))
        .sub(V::splat(SHIFT_F64));
    let i = n.to_int();
    let f = n.fma(V::splat(-LN2_HI), x);
    let f = n.fma(V::splat(-LN2_LO), f);

    let f2 = f.mul(f);
    let p = f2.fma(estrin(&EstrinPowers::from_x2(f, f2), &POLY), f);

    // t = 2^i, expm1(x) ~= p*t + (t - 1)
    let t = V::from_bits(i.shl(52).add(bits::<V>(ONE)));
    p.fma(t, t.sub(V::splat(1.0)))
}

/// Vectorized e^x - 1 in the default [`FpMode`]
#[inline]
pub fn expm1<V: SimdVector<Scalar = f64>>(x: V) -> V {
    expm1_with::<DefaultMode, V>(x)
}

/// Vectorized e^x - 1
///
/// Lanes with large `|x|`, NaN, Inf or -0 are recomputed with
/// `libm::expm1`. In `RespectExceptions` mode tiny `|x|` is also flagged
/// and flagged lanes run the fast path on 0 instead of their input.
///
/// # Example
///
/// ```rust
/// use vela_math::{F64x2, SimdVector};
/// use vela_math::math::expm1;
///
/// let tiny = 1e-20;
/// assert_eq!(expm1(F64x2::splat(tiny)).extract(0), tiny);
/// ```
#[inline]
pub fn expm1_with<M: FpMode, V: SimdVector<Scalar = f64>>(x: V) -> V {
    let ix = x.to_bits();
    let ax = ix.and(bits::<V>(ABS_MASK));

    if M::RESPECT_EXCEPTIONS {
        let special = ax
            .ge(bits::<V>(BIG_BOUND))
            .or(ax.le(bits::<V>(TINY_BOUND)));
        let xm = V::select(special, V::splat(0.0), x);
        let y = expm1_core(xm);
        if special.any() {
            return special_case(x, y, special, libm::expm1);
        }
        y
    } else {
        // large input, NaN, Inf, or -0
        let special = ax
            .ge(bits::<V>(BIG_BOUND))
            .or(ix.eq(bits::<V>(SIGN_MASK)));
        let y = expm1_core(x);
        if special.any() {
            return special_case(x, y, special, libm::expm1);
        }
        y
    }
}
